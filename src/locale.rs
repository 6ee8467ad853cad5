//! Display locales: Dari (Solar Hijri) and English (Gregorian).
//!
//! Only the two locales the original picker ships are supported; this is
//! not a general i18n layer.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{DARI_DIGITS, GREGORIAN_MONTHS_EN, PERSIAN_MONTHS_DARI, PERSIAN_MONTHS_EN};
use crate::gregorian::GregorianDate;
use crate::persian::PersianDate;
use crate::prelude::*;
use crate::DateError;

/// A display locale tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Dari: Solar Hijri month names and Eastern Arabic-Indic digits.
    #[display(fmt = "dari")]
    Dari,
    /// English: transliterated month names and ASCII digits.
    #[display(fmt = "en")]
    En,
}

impl FromStr for Locale {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dari" => Ok(Self::Dari),
            "en" => Ok(Self::En),
            other => Err(DateError::UnknownLocale(other.to_owned())),
        }
    }
}

/// Solar Hijri month name for a zero-based month index.
///
/// # Errors
/// Returns `DateError::InvalidMonthIndex` for an index outside 0..=11.
pub fn month_name(month_index: usize, locale: Locale) -> Result<&'static str, DateError> {
    let table = match locale {
        Locale::Dari => &PERSIAN_MONTHS_DARI,
        Locale::En => &PERSIAN_MONTHS_EN,
    };
    table
        .get(month_index)
        .copied()
        .ok_or(DateError::InvalidMonthIndex(month_index))
}

/// English Gregorian month name for a zero-based month index.
///
/// # Errors
/// Returns `DateError::InvalidMonthIndex` for an index outside 0..=11.
pub fn gregorian_month_name(month_index: usize) -> Result<&'static str, DateError> {
    GREGORIAN_MONTHS_EN
        .get(month_index)
        .copied()
        .ok_or(DateError::InvalidMonthIndex(month_index))
}

/// Renders a non-negative integer in the locale's digits.
///
/// Dari maps each decimal digit to its Eastern Arabic-Indic glyph; English
/// is the plain decimal string.
pub fn to_localized_digits(value: u64, locale: Locale) -> String {
    let decimal = value.to_string();
    match locale {
        Locale::En => decimal,
        Locale::Dari => decimal
            .bytes()
            .map(|b| DARI_DIGITS[usize::from(b - b'0')])
            .collect(),
    }
}

impl PersianDate {
    /// Month name of this date in the given locale.
    pub fn month_name(self, locale: Locale) -> &'static str {
        let table = match locale {
            Locale::Dari => &PERSIAN_MONTHS_DARI,
            Locale::En => &PERSIAN_MONTHS_EN,
        };
        // month is validated to 1..=12 at construction
        table[usize::from(self.month()) - 1]
    }

    /// Long display form, e.g. `۱۵ حمل ۱۴۰۲` in Dari or `15 Hamal 1402`
    /// in English.
    pub fn format_long(self, locale: Locale) -> String {
        format!(
            "{} {} {}",
            to_localized_digits(u64::from(self.day()), locale),
            self.month_name(locale),
            to_localized_digits(u64::try_from(self.year()).unwrap_or_default(), locale),
        )
    }
}

impl GregorianDate {
    /// English month name of this date.
    pub fn month_name(self) -> &'static str {
        // month is validated to 1..=12 at construction
        GREGORIAN_MONTHS_EN[usize::from(self.month()) - 1]
    }

    /// Long en-US display form, e.g. `January 1, 2000`.
    pub fn format_long(self) -> String {
        format!("{} {}, {}", self.month_name(), self.day(), self.year())
    }
}
