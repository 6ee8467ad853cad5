//! Julian Day Numbers, the calendar-agnostic interchange value.
//!
//! Both calendars convert through [`JulianDay`]; Gregorian and Solar Hijri
//! dates are never compared directly.

use serde::{Deserialize, Serialize};

use crate::consts::{DAYS_PER_LEAP_CYCLE, LEAP_CYCLE_YEARS, PERSIAN_EPOCH_JD};
use crate::gregorian::GregorianDate;
use crate::persian::{self, PersianDate};
use crate::prelude::*;
use crate::ConvertError;

/// A Julian Day Number: a continuous count of days since the astronomical
/// epoch. Its integer ordering equals chronological ordering.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into, Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct JulianDay(i64);

impl JulianDay {
    /// Wraps a raw day count.
    pub const fn new(jd: i64) -> Self {
        Self(jd)
    }

    /// Returns the raw day count.
    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Converts a proleptic Gregorian date to its Julian Day Number.
    ///
    /// January and February are counted as the 13th and 14th months of the
    /// prior year so the century correction lands in the right year.
    /// Euclidean division keeps the formula exact for negative years.
    pub fn from_gregorian(date: GregorianDate) -> Self {
        let mut year = i64::from(date.year());
        let mut month = i64::from(date.month());
        if month <= 2 {
            year -= 1;
            month += 12;
        }

        let a = year.div_euclid(100);
        let b = 2 - a + a.div_euclid(4);

        // Integer forms of floor(365.25 * x) and floor(30.6001 * x).
        let jd = (1461 * (year + 4716)).div_euclid(4)
            + (306_001 * (month + 1)).div_euclid(10_000)
            + i64::from(date.day())
            + b
            - 1524;
        Self(jd)
    }

    /// Converts back to a proleptic Gregorian date (Fliegel–Van Flandern).
    ///
    /// Exact inverse of [`JulianDay::from_gregorian`] for every day count.
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_gregorian(self) -> GregorianDate {
        let a = self.0 + 32_044;
        let b = (4 * a + 3).div_euclid(146_097);
        let c = a - (146_097 * b).div_euclid(4);
        let d = (4 * c + 3).div_euclid(1461);
        let e = c - (1461 * d).div_euclid(4);
        let m = (5 * e + 2).div_euclid(153);

        let day = e - (153 * m + 2).div_euclid(5) + 1;
        let month = m + 3 - 12 * m.div_euclid(10);
        let year = 100 * b + d - 4800 + m.div_euclid(10);

        GregorianDate::from_parts_unchecked(year as i32, month as u8, day as u8)
    }

    /// Converts a Solar Hijri date to its Julian Day Number.
    ///
    /// Closed form over the 128-year leap cycle, equivalent to summing every
    /// year and month since the epoch but O(1) in the year.
    pub fn from_persian(date: PersianDate) -> Self {
        let days = persian::days_before_year(date.year())
            + persian::days_before_month(date.month())
            + i64::from(date.day())
            - 1;
        Self(PERSIAN_EPOCH_JD + days)
    }

    /// Converts to a Solar Hijri date.
    ///
    /// # Errors
    /// Returns [`ConvertError::BeforeEpoch`] for day counts before
    /// 1 Hamal of year 1; the calendar does not extend past its epoch.
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_persian(self) -> Result<PersianDate, ConvertError> {
        let total = self.0 - PERSIAN_EPOCH_JD;
        if total < 0 {
            return Err(ConvertError::BeforeEpoch { jd: self.0 });
        }

        // Whole 128-year cycles are a fixed 46 751 days, so only the final
        // partial cycle needs a year-by-year walk.
        let cycle = total.div_euclid(DAYS_PER_LEAP_CYCLE);
        let mut remaining = total.rem_euclid(DAYS_PER_LEAP_CYCLE);
        let mut year = cycle * LEAP_CYCLE_YEARS + 1;
        loop {
            let len = i64::from(persian::days_in_year_i64(year));
            if remaining < len {
                break;
            }
            remaining -= len;
            year += 1;
        }

        // Months 1-6 are 31 days (186 total), the rest are 30-day slots;
        // the short Hut only ever shortens the year, never a month lookup.
        let (month, day) = if remaining < 186 {
            ((remaining / 31) as u8 + 1, (remaining % 31) as u8 + 1)
        } else {
            let rest = remaining - 186;
            ((rest / 30) as u8 + 7, (rest % 30) as u8 + 1)
        };

        Ok(PersianDate::from_parts_unchecked(year as i32, month, day))
    }

    /// Weekday index with Saturday as 0, the Afghan start of week.
    /// Date-picker grids use this to place the first cell of a month.
    pub const fn weekday_from_saturday(self) -> u8 {
        ((self.0 + 2).rem_euclid(7)) as u8
    }
}
