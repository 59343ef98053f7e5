//! Month grid construction.

use std::collections::HashMap;

use super::YearMonth;
use crate::{date_key::DateKey, models::Plan};

/// One slot of a month grid.
#[derive(Debug, Clone, PartialEq)]
pub enum MonthCell {
    /// Placeholder for a day of the adjacent month. Rendered blank.
    Filler,
    /// A day of the displayed month with its plan, if any.
    Day {
        day: i8,
        date: DateKey,
        plan: Option<Plan>,
        is_today: bool,
    },
}

impl MonthCell {
    pub fn is_filler(&self) -> bool {
        matches!(self, MonthCell::Filler)
    }

    pub fn plan(&self) -> Option<&Plan> {
        match self {
            MonthCell::Day { plan, .. } => plan.as_ref(),
            MonthCell::Filler => None,
        }
    }
}

/// The cells of one month, Sunday-first, without trailing fillers.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthGrid {
    pub year_month: YearMonth,
    pub cells: Vec<MonthCell>,
    /// Whether the injected `today` falls inside this month.
    pub is_current_month: bool,
}

impl MonthGrid {
    /// Rows of up to seven cells. The last row may be short.
    pub fn weeks(&self) -> impl Iterator<Item = &[MonthCell]> {
        self.cells.chunks(7)
    }

    /// Number of fillers before the 1st, equal to the 1st's weekday.
    pub fn leading_fillers(&self) -> usize {
        self.cells.iter().take_while(|cell| cell.is_filler()).count()
    }

    /// Day cells only, in order.
    pub fn days(&self) -> impl Iterator<Item = &MonthCell> {
        self.cells.iter().filter(|cell| !cell.is_filler())
    }
}

/// Lays out a month as a Sunday-first grid and attaches plans to their days.
///
/// `build` is a pure function of the month, `today` and the plans passed in.
///
/// ```rust
/// use garden_core::calendar::{MonthGridBuilder, YearMonth};
///
/// let feb = YearMonth::new(2024, 2).unwrap();
/// let grid = MonthGridBuilder::new(feb).build(&[]);
/// // February 1st 2024 was a Thursday
/// assert_eq!(grid.leading_fillers(), 4);
/// assert_eq!(grid.cells.len(), 4 + 29);
/// ```
#[derive(Debug, Clone)]
pub struct MonthGridBuilder {
    year_month: YearMonth,
    today: Option<DateKey>,
}

impl MonthGridBuilder {
    pub fn new(year_month: YearMonth) -> Self {
        Self {
            year_month,
            today: None,
        }
    }

    /// Marks `today` in the grid. Nothing is marked when `None`.
    pub fn today(mut self, today: Option<DateKey>) -> Self {
        self.today = today;
        self
    }

    pub fn build(&self, plans: &[Plan]) -> MonthGrid {
        let ym = self.year_month;
        let by_date: HashMap<DateKey, &Plan> = plans
            .iter()
            .filter(|plan| YearMonth::of(plan.date) == ym)
            .map(|plan| (plan.date, plan))
            .collect();

        let leading = ym.first_day().weekday() as usize;
        let days = ym.days_in_month();

        let mut cells = Vec::with_capacity(leading + days as usize);
        cells.extend(std::iter::repeat(MonthCell::Filler).take(leading));
        cells.extend((1..=days).map(|day| {
            let date = ym.day(day);
            MonthCell::Day {
                day,
                date,
                plan: by_date.get(&date).map(|plan| (*plan).clone()),
                is_today: self.today == Some(date),
            }
        }));

        MonthGrid {
            year_month: ym,
            cells,
            is_current_month: self.today.map(YearMonth::of) == Some(ym),
        }
    }
}
