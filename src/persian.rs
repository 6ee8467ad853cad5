//! Solar Hijri (Afghanistan) calendar rules and dates.
//!
//! The leap rule is a fixed 128-year cycle table, not an astronomical
//! computation; see [`is_leap_year`].

use std::str::FromStr;

use crate::consts::{LEAP_CYCLE_OFFSETS, LEAP_CYCLE_YEARS, MAX_MONTH};
use crate::julian::JulianDay;
use crate::prelude::*;
use crate::{parse_ymd, DateError};

/// Whether a Solar Hijri year is a leap year (366 days, 30-day Hut).
///
/// Table-driven: `year mod 128` is tested against a fixed list of 31
/// offsets. The table approximates the astronomical rule and repeats
/// every 128 years; it is the compatibility contract for every date this
/// crate produces.
pub fn is_leap_year(year: i32) -> bool {
    is_leap_year_i64(i64::from(year))
}

pub(crate) fn is_leap_year_i64(year: i64) -> bool {
    LEAP_CYCLE_OFFSETS.contains(&year.rem_euclid(LEAP_CYCLE_YEARS))
}

/// Number of days in a Solar Hijri year.
pub fn days_in_year(year: i32) -> u16 {
    days_in_year_i64(i64::from(year))
}

pub(crate) fn days_in_year_i64(year: i64) -> u16 {
    if is_leap_year_i64(year) { 366 } else { 365 }
}

/// Number of days in a Solar Hijri month: months 1-6 have 31 days,
/// 7-11 have 30, and Hut (12) has 30 in leap years and 29 otherwise.
///
/// # Errors
/// Returns `DateError::InvalidMonth` for a month outside 1..=12.
pub fn days_in_month(year: i32, month: u8) -> Result<u8, DateError> {
    if month == 0 || month > MAX_MONTH {
        return Err(DateError::InvalidMonth(month));
    }
    Ok(days_in_month_unchecked(year, month))
}

pub(crate) fn days_in_month_unchecked(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month <= 6 {
        31
    } else if month <= 11 {
        30
    } else if is_leap_year(year) {
        30
    } else {
        29
    }
}

/// Days in all complete years from 1 up to (excluding) `year`.
///
/// Closed form: whole 128-year cycles contribute a fixed 46 751 days, and
/// the leap years of the trailing partial cycle are counted off the offset
/// table directly.
pub(crate) fn days_before_year(year: i32) -> i64 {
    debug_assert!(year >= 1);

    let complete = i64::from(year) - 1;
    let cycles = complete.div_euclid(LEAP_CYCLE_YEARS);
    let rest = complete.rem_euclid(LEAP_CYCLE_YEARS);

    let leaps_in_rest = LEAP_CYCLE_OFFSETS.iter().filter(|&&t| t <= rest).count() as i64;
    365 * complete + LEAP_CYCLE_OFFSETS.len() as i64 * cycles + leaps_in_rest
}

/// Days in all complete months of a year before `month`.
pub(crate) const fn days_before_month(month: u8) -> i64 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    let month = month as i64;
    if month <= 7 {
        31 * (month - 1)
    } else {
        186 + 30 * (month - 7)
    }
}

/// A Solar Hijri (Afghanistan variant) calendar date.
///
/// Construction validates the structural invariant (year >= 1, month in
/// 1..=12, day within the month), so every value of this type is a real
/// calendar date. The derived ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{year:04}-{month:02}-{day:02}")]
pub struct PersianDate {
    year: i32,
    month: u8,
    day: u8,
}

impl PersianDate {
    /// Creates a date, validating year, month and day.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` for years before 1 (the calendar
    /// does not extend past its epoch), `DateError::InvalidMonth` for a
    /// month outside 1..=12, and `DateError::InvalidDay` when the day does
    /// not exist in that month.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        if year < 1 {
            return Err(DateError::InvalidYear(year));
        }
        let max_day = days_in_month(year, month)?;
        if day == 0 || day > max_day {
            return Err(DateError::InvalidDay { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Builds a date from components already known to be valid.
    pub(crate) fn from_parts_unchecked(year: i32, month: u8, day: u8) -> Self {
        debug_assert!(year >= 1);
        debug_assert!(month != 0 && month <= MAX_MONTH);
        debug_assert!(day != 0 && day <= days_in_month_unchecked(year, month));
        Self { year, month, day }
    }

    /// Returns the year, 1..
    #[inline]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Returns the month, 1..=12 (Hamal through Hut).
    #[inline]
    pub const fn month(self) -> u8 {
        self.month
    }

    /// Returns the day of month.
    #[inline]
    pub const fn day(self) -> u8 {
        self.day
    }

    /// Julian Day Number of this date.
    pub fn to_julian(self) -> JulianDay {
        JulianDay::from_persian(self)
    }

    /// First day of this date's month. Pickers render grids from here.
    pub fn first_of_month(self) -> Self {
        Self {
            day: 1,
            ..self
        }
    }

    /// First day of the following month, rolling Hut into the next year.
    pub fn next_month(self) -> Self {
        if self.month == MAX_MONTH {
            Self {
                year: self.year + 1,
                month: 1,
                day: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
                day: 1,
            }
        }
    }

    /// First day of the preceding month.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` when stepping back from Hamal of
    /// year 1, which has no predecessor.
    pub fn previous_month(self) -> Result<Self, DateError> {
        if self.month == 1 {
            if self.year == 1 {
                return Err(DateError::InvalidYear(0));
            }
            Ok(Self {
                year: self.year - 1,
                month: MAX_MONTH,
                day: 1,
            })
        } else {
            Ok(Self {
                year: self.year,
                month: self.month - 1,
                day: 1,
            })
        }
    }
}

impl FromStr for PersianDate {
    type Err = DateError;

    /// Parses ISO-style `YYYY-MM-DD` form, as emitted by `Display`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = parse_ymd(s)?;
        Self::new(year, month, day)
    }
}

impl serde::Serialize for PersianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for PersianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leap_table_spot_checks() {
        // 1379 mod 128 is 99, which is not in the offset table.
        assert!(!is_leap_year(1379));
        // 1380 mod 128 is 100, which is.
        assert!(is_leap_year(1380));
        // First leap year of the calendar.
        assert!(is_leap_year(1));
        assert!(!is_leap_year(2));
    }

    #[test]
    fn test_leap_table_is_periodic() {
        for year in 1..=1280 {
            assert_eq!(
                is_leap_year(year),
                is_leap_year(year + 128),
                "128-year periodicity broken at {year}"
            );
        }
    }

    #[test]
    fn test_leap_years_per_cycle() {
        let leaps = (1..=128).filter(|&y| is_leap_year(y)).count();
        assert_eq!(leaps, 31);
    }

    #[test]
    fn test_days_in_month_rules() {
        for month in 1..=6u8 {
            assert_eq!(days_in_month(1379, month).unwrap(), 31);
        }
        for month in 7..=11u8 {
            assert_eq!(days_in_month(1379, month).unwrap(), 30);
        }
        // Hut depends on the leap rule.
        assert_eq!(days_in_month(1379, 12).unwrap(), 29);
        assert_eq!(days_in_month(1380, 12).unwrap(), 30);
    }

    #[test]
    fn test_days_in_month_rejects_bad_month() {
        assert!(matches!(
            days_in_month(1400, 0),
            Err(DateError::InvalidMonth(0))
        ));
        assert!(matches!(
            days_in_month(1400, 13),
            Err(DateError::InvalidMonth(13))
        ));
    }

    #[test]
    fn test_months_sum_to_days_in_year() {
        for year in 1..=500 {
            let sum: u16 = (1..=12u8)
                .map(|m| u16::from(days_in_month(year, m).unwrap()))
                .sum();
            assert_eq!(sum, days_in_year(year), "month sum mismatch in year {year}");
        }
    }

    #[test]
    fn test_days_before_year_matches_running_sum() {
        let mut running = 0i64;
        for year in 1..=600 {
            assert_eq!(days_before_year(year), running, "mismatch at year {year}");
            running += i64::from(days_in_year(year));
        }
    }

    #[test]
    fn test_new_valid() {
        assert!(PersianDate::new(1, 1, 1).is_ok());
        assert!(PersianDate::new(1400, 6, 31).is_ok());
        assert!(PersianDate::new(1380, 12, 30).is_ok());
    }

    #[test]
    fn test_new_invalid() {
        assert!(matches!(
            PersianDate::new(0, 1, 1),
            Err(DateError::InvalidYear(0))
        ));
        assert!(matches!(
            PersianDate::new(-7, 1, 1),
            Err(DateError::InvalidYear(-7))
        ));
        assert!(matches!(
            PersianDate::new(1400, 13, 1),
            Err(DateError::InvalidMonth(13))
        ));
        assert!(matches!(
            PersianDate::new(1400, 7, 31),
            Err(DateError::InvalidDay {
                year: 1400,
                month: 7,
                day: 31
            })
        ));
        // 1379 is not a leap year, so Hut has 29 days.
        assert!(matches!(
            PersianDate::new(1379, 12, 30),
            Err(DateError::InvalidDay { .. })
        ));
    }

    #[test]
    fn test_ordering_is_chronological() {
        let a = PersianDate::new(1399, 12, 29).unwrap();
        let b = PersianDate::new(1400, 1, 1).unwrap();
        let c = PersianDate::new(1400, 1, 2).unwrap();
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn test_month_stepping() {
        let mid = PersianDate::new(1402, 5, 17).unwrap();
        assert_eq!(mid.first_of_month(), PersianDate::new(1402, 5, 1).unwrap());
        assert_eq!(mid.next_month(), PersianDate::new(1402, 6, 1).unwrap());
        assert_eq!(
            mid.previous_month().unwrap(),
            PersianDate::new(1402, 4, 1).unwrap()
        );

        // Year boundaries.
        let hut = PersianDate::new(1402, 12, 10).unwrap();
        assert_eq!(hut.next_month(), PersianDate::new(1403, 1, 1).unwrap());
        let hamal = PersianDate::new(1403, 1, 1).unwrap();
        assert_eq!(
            hamal.previous_month().unwrap(),
            PersianDate::new(1402, 12, 1).unwrap()
        );

        // No month before 1 Hamal of year 1.
        let origin = PersianDate::new(1, 1, 1).unwrap();
        assert!(matches!(
            origin.previous_month(),
            Err(DateError::InvalidYear(0))
        ));
    }

    #[test]
    fn test_display_and_parse_round_trip() {
        let date = PersianDate::new(1402, 1, 15).unwrap();
        assert_eq!(date.to_string(), "1402-01-15");
        assert_eq!("1402-01-15".parse::<PersianDate>().unwrap(), date);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(
            "  ".parse::<PersianDate>(),
            Err(DateError::EmptyInput)
        ));
        assert!(matches!(
            "1402/01/15".parse::<PersianDate>(),
            Err(DateError::InvalidFormat(_))
        ));
        assert!(matches!(
            "1379-12-30".parse::<PersianDate>(),
            Err(DateError::InvalidDay { .. })
        ));
    }

    #[test]
    fn test_serde_string_format() {
        let date = PersianDate::new(1400, 1, 1).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#""1400-01-01""#);

        let parsed: PersianDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, date);

        let result: Result<PersianDate, _> = serde_json::from_str(r#""1400-00-01""#);
        assert!(result.is_err());
    }
}
