//! Calendar views and statistics for the Garden.

use super::Garden;
use crate::{
    calendar::{MonthGrid, MonthGridBuilder, YearHeatmap, YearHeatmapBuilder, YearMonth},
    date_key::DateKey,
    error::Result,
    params::DateRange,
    stats::{PlanStats, StatsAggregator, YearOverview},
};

/// A month grid with its completion stats.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthView {
    pub grid: MonthGrid,
    /// Rate against the number of days in the month
    pub stats: PlanStats,
}

/// A year heatmap with its per-month overview.
#[derive(Debug, Clone, PartialEq)]
pub struct YearView {
    pub heatmap: YearHeatmap,
    pub overview: YearOverview,
}

impl Garden {
    /// Lays out one month. `today` is highlighted when it falls inside it.
    pub fn month_view(&self, year_month: YearMonth, today: Option<DateKey>) -> MonthView {
        let plans = self
            .store
            .plans_in_range(year_month.first_day(), year_month.last_day());
        MonthView {
            grid: MonthGridBuilder::new(year_month).today(today).build(&plans),
            stats: StatsAggregator::aggregate(&plans, year_month.days_in_month() as u32),
        }
    }

    /// Lays out one year.
    ///
    /// # Errors
    ///
    /// Returns `GardenError::InvalidInput` if `year` is outside 0000-9999.
    pub fn year_view(&self, year: i16, today: Option<DateKey>) -> Result<YearView> {
        let first = YearMonth::new(year, 1)?.first_day();
        let last = YearMonth::new(year, 12)?.last_day();
        let plans = self.store.plans_in_range(first, last);

        Ok(YearView {
            heatmap: YearHeatmapBuilder::new(year)?.today(today).build(&plans),
            overview: YearOverview::build(year, &plans)?,
        })
    }

    /// Aggregates the plans in `range` against `denominator` days.
    pub fn stats(&self, range: &DateRange, denominator: u32) -> PlanStats {
        StatsAggregator::aggregate(&self.plans_in_range(range), denominator)
    }
}
