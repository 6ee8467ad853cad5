//! Solar Hijri (Afghanistan variant) ↔ Gregorian calendar conversion.
//!
//! All conversions route through Julian Day Numbers: a Gregorian date maps
//! to a [`JulianDay`], which maps to a [`PersianDate`], and back. Every
//! operation is a pure function of its arguments and a handful of fixed
//! tables, so the whole API is re-entrant and safe to call concurrently.
//!
//! The Persian leap rule is deliberately table-driven (a 128-year cycle of
//! 31 leap offsets) rather than astronomical: it reproduces the behavior
//! of the system this crate is compatible with, and dates derived from it
//! must not drift.
//!
//! ```
//! use solar_hijri::{gregorian_to_persian, persian_to_gregorian, GregorianDate, PersianDate};
//!
//! let nawruz = PersianDate::new(1400, 1, 1)?;
//! let gregorian = persian_to_gregorian(nawruz);
//! assert_eq!(gregorian, GregorianDate::new(2021, 3, 21)?);
//! assert_eq!(gregorian_to_persian(gregorian)?, nawruz);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod consts;
mod gregorian;
mod julian;
mod locale;
mod persian;
mod prelude;

pub use consts::*;
pub use gregorian::GregorianDate;
pub use julian::JulianDay;
pub use locale::{gregorian_month_name, month_name, to_localized_digits, Locale};
pub use persian::{days_in_month, days_in_year, is_leap_year, PersianDate};

use crate::prelude::*;

/// Structural validation and parse failures.
///
/// These are programming errors (bad input), not environmental failures;
/// propagate them, do not retry.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {_0}")]
    InvalidYear(i32),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid month index: {} (must be 0-11)", "_0")]
    InvalidMonthIndex(usize),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i32, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
    #[display(fmt = "Unknown locale: {_0} (supported: dari, en)")]
    UnknownLocale(String),
}

impl std::error::Error for DateError {}

/// Cross-calendar conversion failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// The Julian Day falls before 1 Hamal of year 1; the Solar Hijri
    /// calendar is not extended past its epoch.
    #[error("Julian day {jd} is before the Solar Hijri epoch ({})", PERSIAN_EPOCH_JD)]
    BeforeEpoch { jd: i64 },

    /// Error validating a date component.
    #[error(transparent)]
    Date(#[from] DateError),
}

/// Converts a Gregorian date to the Solar Hijri calendar.
///
/// # Errors
/// Returns [`ConvertError::BeforeEpoch`] for dates before 622-03-22
/// Gregorian, the epoch of the Solar Hijri calendar.
pub fn gregorian_to_persian(date: GregorianDate) -> Result<PersianDate, ConvertError> {
    JulianDay::from_gregorian(date).to_persian()
}

/// Converts a Solar Hijri date to the Gregorian calendar.
///
/// Infallible: every valid [`PersianDate`] is on or after the epoch, and
/// the proleptic Gregorian calendar covers the full range.
pub fn persian_to_gregorian(date: PersianDate) -> GregorianDate {
    JulianDay::from_persian(date).to_gregorian()
}

/// Splits an ISO-style `YYYY-MM-DD` string into raw components.
///
/// A leading `-` marks a negative astronomical year (proleptic dates
/// before year 0), so it is consumed before splitting on the separator.
pub(crate) fn parse_ymd(s: &str) -> Result<(i32, u8, u8), DateError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(DateError::EmptyInput);
    }

    let (year_sign, body) = match trimmed.strip_prefix(DATE_SEPARATOR) {
        Some(rest) => (-1, rest),
        None => (1, trimmed),
    };

    let parts: Vec<&str> = body.split(DATE_SEPARATOR).map(str::trim).collect();
    if parts.len() != 3 {
        return Err(DateError::InvalidFormat(trimmed.to_owned()));
    }

    let year = parts[0]
        .parse::<i32>()
        .map(|y| y * year_sign)
        .map_err(|_| DateError::InvalidFormat(parts[0].to_owned()))?;
    let month = parts[1]
        .parse::<u8>()
        .map_err(|_| DateError::InvalidFormat(parts[1].to_owned()))?;
    let day = parts[2]
        .parse::<u8>()
        .map_err(|_| DateError::InvalidFormat(parts[2].to_owned()))?;

    Ok((year, month, day))
}
