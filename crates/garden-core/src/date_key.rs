//! Canonical local calendar dates.
//!
//! A [`DateKey`] names a day on the local wall calendar and nothing else: it
//! carries no time of day and no offset, so converting to and from its
//! `YYYY-MM-DD` form never shifts the day. The wall clock is consulted only by
//! [`DateKey::today`].

use std::{fmt, str::FromStr};

use jiff::{civil::Date, Zoned};
use serde::{Deserialize, Serialize};

use crate::error::{GardenError, Result};

/// Earliest year representable in the four-digit `YYYY` form.
pub const MIN_YEAR: i16 = 0;
/// Latest year representable in the four-digit `YYYY` form.
pub const MAX_YEAR: i16 = 9999;

/// Returns whether `year` is a Gregorian leap year.
pub fn is_leap_year(year: i16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-12) of `year`. Returns 0 for a month outside
/// 1-12.
pub fn days_in_month(year: i16, month: i8) -> i8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Number of days in `year` (365 or 366).
pub fn days_in_year(year: i16) -> u16 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// A calendar date identified by year, month (1-12) and day of month.
///
/// Two keys are equal exactly when their `YYYY-MM-DD` forms are equal.
/// Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateKey(Date);

impl DateKey {
    /// Builds a key from calendar fields.
    ///
    /// # Errors
    ///
    /// Returns `GardenError::MalformedKey` when the fields do not name a real
    /// day (month 13, April 31st, February 29th outside a leap year) or the
    /// year is outside 0000-9999.
    pub fn from_calendar_date(year: i16, month: i8, day: i8) -> Result<Self> {
        let display = || format!("{year:04}-{month:02}-{day:02}");

        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(GardenError::malformed_key(
                display(),
                format!("year must be between {MIN_YEAR} and {MAX_YEAR}"),
            ));
        }
        if !(1..=12).contains(&month) {
            return Err(GardenError::malformed_key(
                display(),
                "month must be between 1 and 12",
            ));
        }
        let last_day = days_in_month(year, month);
        if !(1..=last_day).contains(&day) {
            return Err(GardenError::malformed_key(
                display(),
                format!("day must be between 1 and {last_day}"),
            ));
        }

        Date::new(year, month, day)
            .map(Self)
            .map_err(|e| GardenError::malformed_key(display(), e.to_string()))
    }

    /// Builds a key from fields already checked against the calendar.
    pub(crate) fn from_valid_parts(year: i16, month: i8, day: i8) -> Self {
        Self(jiff::civil::date(year, month, day))
    }

    /// Returns the `(year, month, day)` fields of this key.
    pub fn to_calendar_date(&self) -> (i16, i8, i8) {
        (self.0.year(), self.0.month(), self.0.day())
    }

    /// Today's date on the local wall clock.
    pub fn today() -> Self {
        Self(Zoned::now().date())
    }

    pub fn year(&self) -> i16 {
        self.0.year()
    }

    pub fn month(&self) -> i8 {
        self.0.month()
    }

    pub fn day(&self) -> i8 {
        self.0.day()
    }

    /// Day of week, 0 = Sunday through 6 = Saturday.
    pub fn weekday(&self) -> i8 {
        self.0.weekday().to_sunday_zero_offset()
    }

    /// The underlying civil date.
    pub fn as_date(&self) -> Date {
        self.0
    }
}

impl TryFrom<Date> for DateKey {
    type Error = GardenError;

    fn try_from(date: Date) -> Result<Self> {
        Self::from_calendar_date(date.year(), date.month(), date.day())
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            self.0.month(),
            self.0.day()
        )
    }
}

impl FromStr for DateKey {
    type Err = GardenError;

    fn from_str(s: &str) -> Result<Self> {
        let bytes = s.as_bytes();
        let well_formed = bytes.len() == 10
            && bytes[4] == b'-'
            && bytes[7] == b'-'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
        if !well_formed {
            return Err(GardenError::malformed_key(s, "expected YYYY-MM-DD"));
        }

        // All three fields are ASCII digits of bounded width, so parsing cannot
        // overflow.
        let field = |range: std::ops::Range<usize>| s[range].parse::<i16>().unwrap_or_default();
        let (year, month, day) = (field(0..4), field(5..7), field(8..10));

        Self::from_calendar_date(year, month as i8, day as i8)
            .map_err(|e| match e {
                GardenError::MalformedKey { reason, .. } => GardenError::malformed_key(s, reason),
                other => other,
            })
    }
}

impl TryFrom<String> for DateKey {
    type Error = GardenError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<DateKey> for String {
    fn from(key: DateKey) -> Self {
        key.to_string()
    }
}

/// Parses a `YYYY-MM-DD` string into `(year, month, day)`.
///
/// # Errors
///
/// Returns `GardenError::MalformedKey` if the string does not match the
/// pattern or names an impossible date.
pub fn to_calendar_date(key: &str) -> Result<(i16, i8, i8)> {
    key.parse::<DateKey>().map(|k| k.to_calendar_date())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leap_year_rule() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2100, 2), 28);
        assert_eq!(days_in_month(2024, 4), 30);
        assert_eq!(days_in_month(2024, 12), 31);
        assert_eq!(days_in_month(2024, 13), 0);
        assert_eq!(days_in_year(2024), 366);
        assert_eq!(days_in_year(2023), 365);
    }

    #[test]
    fn test_round_trip_through_string() {
        for (y, m, d) in [(2024, 2, 29), (1999, 12, 31), (2025, 1, 1), (7, 7, 7)] {
            let key = DateKey::from_calendar_date(y, m, d).unwrap();
            let parsed: DateKey = key.to_string().parse().unwrap();
            assert_eq!(parsed, key);
            assert_eq!(parsed.to_calendar_date(), (y, m, d));
        }
        assert_eq!(
            DateKey::from_calendar_date(7, 7, 7).unwrap().to_string(),
            "0007-07-07"
        );
    }

    #[test]
    fn test_rejects_impossible_dates() {
        for bad in ["2024-04-31", "2023-02-29", "2024-13-01", "2024-00-10", "2024-01-00"] {
            let err = bad.parse::<DateKey>().unwrap_err();
            assert!(
                matches!(&err, GardenError::MalformedKey { key, .. } if key == bad),
                "{bad}: {err}"
            );
        }
    }

    #[test]
    fn test_rejects_wrong_shape() {
        for bad in ["2024-3-05", "24-03-05", "2024/03/05", "2024-03-05T00:00", "", "abcd-ef-gh"] {
            assert!(bad.parse::<DateKey>().is_err(), "{bad} should not parse");
        }
        assert!(to_calendar_date("2024-03-5").is_err());
    }

    #[test]
    fn test_weekday_is_sunday_zero() {
        // 2024-02-01 was a Thursday
        assert_eq!("2024-02-01".parse::<DateKey>().unwrap().weekday(), 4);
        // 2023-01-01 was a Sunday
        assert_eq!("2023-01-01".parse::<DateKey>().unwrap().weekday(), 0);
    }

    #[test]
    fn test_serde_uses_string_form() {
        let key: DateKey = "2024-03-05".parse().unwrap();
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"2024-03-05\"");
        let back: DateKey = serde_json::from_str("\"2024-03-05\"").unwrap();
        assert_eq!(back, key);
        assert!(serde_json::from_str::<DateKey>("\"2024-02-30\"").is_err());
    }

    #[test]
    fn test_ordering_is_chronological() {
        let a: DateKey = "2023-12-31".parse().unwrap();
        let b: DateKey = "2024-01-01".parse().unwrap();
        assert!(a < b);
    }
}
