//! Year heatmap construction.
//!
//! A heatmap is a run of week columns, Sunday at the top, covering every day
//! of one year. Columns start on the Sunday on or before January 1st and end
//! on the Saturday on or after December 31st; the slots of those edge weeks
//! that fall outside the year stay empty.

use std::collections::HashMap;

use super::YearMonth;
use crate::{
    date_key::DateKey,
    error::Result,
    models::{Plan, PlanState},
};

/// How much happened on a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Intensity {
    Empty,
    Planted,
    Completed,
}

impl Intensity {
    fn of(plan: Option<&Plan>) -> Self {
        match plan.map(|plan| plan.state) {
            None => Intensity::Empty,
            Some(PlanState::Planted) => Intensity::Planted,
            Some(PlanState::Completed) => Intensity::Completed,
        }
    }
}

/// A day of the target year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeatCell {
    pub date: DateKey,
    pub intensity: Intensity,
    /// Title of the day's plan, for tooltips
    pub title: Option<String>,
    pub is_today: bool,
}

/// Seven slots, Sunday through Saturday. `None` marks a day outside the year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekColumn {
    pub slots: [Option<HeatCell>; 7],
}

impl WeekColumn {
    pub fn days(&self) -> impl Iterator<Item = &HeatCell> {
        self.slots.iter().flatten()
    }
}

/// Week columns plus one optional month label per column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearHeatmap {
    pub year: i16,
    pub weeks: Vec<WeekColumn>,
    /// `labels[i]` is the month (1-12) starting in column `i`, if that column
    /// opens a new month.
    pub labels: Vec<Option<i8>>,
}

impl YearHeatmap {
    /// Iterates over every in-year day in date order.
    pub fn days(&self) -> impl Iterator<Item = &HeatCell> {
        self.weeks.iter().flat_map(WeekColumn::days)
    }
}

/// Builds the heatmap of one year.
///
/// ```rust
/// use garden_core::calendar::YearHeatmapBuilder;
///
/// let heatmap = YearHeatmapBuilder::new(2024).unwrap().build(&[]);
/// let labels: Vec<i8> = heatmap.labels.iter().flatten().copied().collect();
/// assert_eq!(labels, (1..=12).collect::<Vec<i8>>());
/// ```
#[derive(Debug, Clone)]
pub struct YearHeatmapBuilder {
    year: i16,
    today: Option<DateKey>,
}

impl YearHeatmapBuilder {
    /// # Errors
    ///
    /// Returns `GardenError::InvalidInput` if `year` is outside 0000-9999.
    pub fn new(year: i16) -> Result<Self> {
        YearMonth::new(year, 1)?;
        Ok(Self { year, today: None })
    }

    /// Marks `today` in the heatmap. Nothing is marked when `None`.
    pub fn today(mut self, today: Option<DateKey>) -> Self {
        self.today = today;
        self
    }

    pub fn build(&self, plans: &[Plan]) -> YearHeatmap {
        let by_date: HashMap<DateKey, &Plan> = plans
            .iter()
            .filter(|plan| plan.date.year() == self.year)
            .map(|plan| (plan.date, plan))
            .collect();

        let days = (1..=12)
            .filter_map(|month| YearMonth::new(self.year, month).ok())
            .flat_map(|ym| (1..=ym.days_in_month()).map(move |day| ym.day(day)));

        let leading = DateKey::from_valid_parts(self.year, 1, 1).weekday() as usize;
        let mut slots: Vec<Option<HeatCell>> = Vec::with_capacity(7 * 54);
        slots.extend(std::iter::repeat(None).take(leading));
        for date in days {
            let plan = by_date.get(&date).copied();
            slots.push(Some(HeatCell {
                date,
                intensity: Intensity::of(plan),
                title: plan.map(|plan| plan.title.clone()),
                is_today: self.today == Some(date),
            }));
        }
        let trailing = (7 - slots.len() % 7) % 7;
        slots.extend(std::iter::repeat(None).take(trailing));

        let weeks: Vec<WeekColumn> = slots
            .chunks(7)
            .map(|week| WeekColumn {
                slots: std::array::from_fn(|i| week[i].clone()),
            })
            .collect();
        let labels = month_labels(&weeks);

        YearHeatmap {
            year: self.year,
            weeks,
            labels,
        }
    }
}

/// Labels a column with the month whose 1st it contains, unless that month
/// was already the most recent label.
fn month_labels(weeks: &[WeekColumn]) -> Vec<Option<i8>> {
    let mut last = None;
    weeks
        .iter()
        .map(|week| {
            let starts = week
                .days()
                .find(|cell| cell.date.day() == 1)
                .map(|cell| cell.date.month());
            match starts {
                Some(month) if last != Some(month) => {
                    last = Some(month);
                    Some(month)
                }
                _ => None,
            }
        })
        .collect()
}
