//! Plan statistics.
//!
//! [`StatsAggregator`] reduces a slice of plans to counts and a completion
//! rate. The denominator is supplied by the caller, usually the number of
//! days in the period being summarized.

use crate::{
    calendar::YearMonth,
    date_key::days_in_year,
    error::Result,
    models::{Plan, PlanState},
};

/// Counts over a set of plans.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlanStats {
    pub count: usize,
    pub planted_count: usize,
    pub completed_count: usize,
    /// `completed_count / denominator`, or 0 when the denominator is 0
    pub completion_rate: f64,
}

impl PlanStats {
    /// Completion rate as a whole percentage, rounded half away from zero.
    pub fn completion_percent(&self) -> u32 {
        (self.completion_rate * 100.0).round() as u32
    }
}

/// Stateless reducer from plans to [`PlanStats`].
pub struct StatsAggregator;

impl StatsAggregator {
    pub fn aggregate(plans: &[Plan], denominator: u32) -> PlanStats {
        let completed_count = plans
            .iter()
            .filter(|plan| plan.state == PlanState::Completed)
            .count();
        let planted_count = plans
            .iter()
            .filter(|plan| plan.state == PlanState::Planted)
            .count();
        let completion_rate = if denominator == 0 {
            0.0
        } else {
            completed_count as f64 / f64::from(denominator)
        };

        PlanStats {
            count: plans.len(),
            planted_count,
            completed_count,
            completion_rate,
        }
    }
}

/// How far a month has grown, for overview colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonthBloom {
    /// Nothing planted
    Dormant,
    /// Seeds in the ground, few completions
    Planted,
    /// More than 40% of the days completed
    Growing,
    /// More than 70% of the days completed
    Bloomed,
}

impl MonthBloom {
    /// Classifies a month from its stats and length.
    pub fn classify(stats: &PlanStats, days_in_month: u32) -> Self {
        let completed = stats.completed_count as u64 * 10;
        let days = u64::from(days_in_month);
        if completed > days * 7 {
            MonthBloom::Bloomed
        } else if completed > days * 4 {
            MonthBloom::Growing
        } else if stats.planted_count > 0 {
            MonthBloom::Planted
        } else {
            MonthBloom::Dormant
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MonthBloom::Dormant => "dormant",
            MonthBloom::Planted => "planted",
            MonthBloom::Growing => "growing",
            MonthBloom::Bloomed => "bloomed",
        }
    }
}

/// One row of a [`YearOverview`].
#[derive(Debug, Clone, PartialEq)]
pub struct MonthSummary {
    pub year_month: YearMonth,
    pub stats: PlanStats,
    pub bloom: MonthBloom,
}

/// Per-month and whole-year statistics for one year.
#[derive(Debug, Clone, PartialEq)]
pub struct YearOverview {
    pub year: i16,
    /// All twelve months, January first
    pub months: Vec<MonthSummary>,
    /// Totals over the year, rate against 365 or 366 days
    pub totals: PlanStats,
}

impl YearOverview {
    /// Summarizes the plans of `year`. Plans dated in other years are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns `GardenError::InvalidInput` if `year` is outside 0000-9999.
    pub fn build(year: i16, plans: &[Plan]) -> Result<Self> {
        let in_year: Vec<Plan> = plans
            .iter()
            .filter(|plan| plan.date.year() == year)
            .cloned()
            .collect();

        let months = (1..=12)
            .map(|month| {
                let year_month = YearMonth::new(year, month)?;
                let month_plans: Vec<Plan> = in_year
                    .iter()
                    .filter(|plan| plan.date.month() == month)
                    .cloned()
                    .collect();
                let days = year_month.days_in_month() as u32;
                let stats = StatsAggregator::aggregate(&month_plans, days);
                Ok(MonthSummary {
                    year_month,
                    bloom: MonthBloom::classify(&stats, days),
                    stats,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            year,
            months,
            totals: StatsAggregator::aggregate(&in_year, u32::from(days_in_year(year))),
        })
    }
}
