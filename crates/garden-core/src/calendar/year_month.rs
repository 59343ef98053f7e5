//! Month selection and navigation.

use std::{fmt, str::FromStr};

use crate::{
    date_key::{days_in_month, DateKey, MAX_YEAR, MIN_YEAR},
    error::{GardenError, Result},
};

/// A validated (year, month) pair, month 1-12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i16,
    month: i8,
}

impl YearMonth {
    /// # Errors
    ///
    /// Returns `GardenError::InvalidInput` if the month is outside 1-12 or the
    /// year outside 0000-9999.
    pub fn new(year: i16, month: i8) -> Result<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(GardenError::invalid_input("year")
                .with_reason(format!("must be between {MIN_YEAR} and {MAX_YEAR}")));
        }
        if !(1..=12).contains(&month) {
            return Err(GardenError::invalid_input("month").with_reason("must be between 1 and 12"));
        }
        Ok(Self { year, month })
    }

    /// The month containing `date`.
    pub fn of(date: DateKey) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The current month on the local wall clock.
    pub fn current() -> Self {
        Self::of(DateKey::today())
    }

    pub fn year(&self) -> i16 {
        self.year
    }

    pub fn month(&self) -> i8 {
        self.month
    }

    pub fn days_in_month(&self) -> i8 {
        days_in_month(self.year, self.month)
    }

    pub fn first_day(&self) -> DateKey {
        self.day(1)
    }

    pub fn last_day(&self) -> DateKey {
        self.day(self.days_in_month())
    }

    /// Key for `day` of this month. `day` must be within the month.
    pub(crate) fn day(&self, day: i8) -> DateKey {
        DateKey::from_valid_parts(self.year, self.month, day)
    }

    /// The month before this one, wrapping into the previous year. `None`
    /// before January 0000.
    pub fn previous(&self) -> Option<Self> {
        match self.month {
            1 => Self::new(self.year.checked_sub(1)?, 12).ok(),
            m => Some(Self {
                year: self.year,
                month: m - 1,
            }),
        }
    }

    /// The month after this one, wrapping into the next year. `None` after
    /// December 9999.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&self) -> Option<Self> {
        match self.month {
            12 => Self::new(self.year.checked_add(1)?, 1).ok(),
            m => Some(Self {
                year: self.year,
                month: m + 1,
            }),
        }
    }

    /// English month name.
    pub fn name(&self) -> &'static str {
        month_name(self.month)
    }
}

/// English name of month 1-12.
pub fn month_name(month: i8) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "",
    }
}

/// Three-letter English abbreviation of month 1-12.
pub fn month_abbr(month: i8) -> &'static str {
    month_name(month).get(..3).unwrap_or("")
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = GardenError;

    /// Parses `YYYY-MM`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || GardenError::invalid_input("month").with_reason(format!("expected YYYY-MM, got '{s}'"));
        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        let year = year.parse::<i16>().map_err(|_| invalid())?;
        let month = month.parse::<i8>().map_err(|_| invalid())?;
        Self::new(year, month)
    }
}
