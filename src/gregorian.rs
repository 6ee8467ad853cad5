//! Proleptic Gregorian calendar dates.

use std::str::FromStr;

use crate::consts::{
    CENTURY_CYCLE, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, GREGORIAN_DAYS_IN_MONTH,
    LEAP_YEAR_CYCLE, MAX_MONTH,
};
use crate::julian::JulianDay;
use crate::prelude::*;
use crate::{parse_ymd, DateError};

/// A proleptic Gregorian calendar date.
///
/// Construction validates the structural invariant (month in 1..=12, day
/// within the month), so every value of this type is a real calendar date.
/// The derived ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{year:04}-{month:02}-{day:02}")]
pub struct GregorianDate {
    year: i32,
    month: u8,
    day: u8,
}

impl GregorianDate {
    /// Creates a date, validating month and day.
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` for a month outside 1..=12 and
    /// `DateError::InvalidDay` when the day does not exist in that month.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        if month == 0 || month > MAX_MONTH {
            return Err(DateError::InvalidMonth(month));
        }
        if day == 0 || day > Self::days_in_month(year, month) {
            return Err(DateError::InvalidDay { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Builds a date from components already known to be valid.
    pub(crate) const fn from_parts_unchecked(year: i32, month: u8, day: u8) -> Self {
        debug_assert!(month != 0 && month <= MAX_MONTH);
        debug_assert!(day != 0 && day <= Self::days_in_month(year, month));
        Self { year, month, day }
    }

    /// Returns the year (astronomical numbering; 1 BC is year 0).
    #[inline]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Returns the month, 1..=12.
    #[inline]
    pub const fn month(self) -> u8 {
        self.month
    }

    /// Returns the day of month.
    #[inline]
    pub const fn day(self) -> u8 {
        self.day
    }

    /// Gregorian leap-year rule: every 4th year, skipping centuries not
    /// divisible by 400.
    pub const fn is_leap_year(year: i32) -> bool {
        let year = year as i64;
        (year.rem_euclid(LEAP_YEAR_CYCLE) == 0 && year.rem_euclid(CENTURY_CYCLE) != 0)
            || year.rem_euclid(GREGORIAN_CYCLE) == 0
    }

    /// Number of days in a month of the given year.
    pub const fn days_in_month(year: i32, month: u8) -> u8 {
        debug_assert!(month != 0 && month <= MAX_MONTH);

        if month == FEBRUARY && Self::is_leap_year(year) {
            FEBRUARY_DAYS_LEAP
        } else {
            GREGORIAN_DAYS_IN_MONTH[month as usize]
        }
    }

    /// Julian Day Number of this date.
    pub fn to_julian(self) -> JulianDay {
        JulianDay::from_gregorian(self)
    }
}

impl FromStr for GregorianDate {
    type Err = DateError;

    /// Parses ISO `YYYY-MM-DD` form, as emitted by `Display`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = parse_ymd(s)?;
        Self::new(year, month, day)
    }
}

impl serde::Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
