/// Julian Day Number of 1 Hamal, year 1 of the Solar Hijri calendar.
pub const PERSIAN_EPOCH_JD: i64 = 1_948_321;

/// Length of the repeating Solar Hijri leap pattern, in years.
pub const LEAP_CYCLE_YEARS: i64 = 128;

/// Offsets within the 128-year cycle (`year % 128`) that are leap years.
///
/// This fixed table is the compatibility contract of the crate: it
/// approximates the astronomical rule, and downstream dates depend on it
/// exactly as-is. Do not replace it with an equinox-based rule.
pub const LEAP_CYCLE_OFFSETS: [i64; 31] = [
    1, 5, 9, 13, 17, 22, 26, 30, 34, 38, 42, 46, 50, 55, 59, 63, 67, 71, 75, 79, 84, 88, 92, 96,
    100, 104, 108, 112, 116, 121, 125,
];

/// Days in one full 128-year cycle: 365 * 128 plus one leap day per offset.
pub const DAYS_PER_LEAP_CYCLE: i64 = 365 * LEAP_CYCLE_YEARS + LEAP_CYCLE_OFFSETS.len() as i64;

/// Maximum valid month (Hut / December)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for Gregorian leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const GREGORIAN_DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Gregorian leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i64 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i64 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i64 = 400;

/// Solar Hijri month names in Dari, Hamal through Hut.
pub const PERSIAN_MONTHS_DARI: [&str; 12] = [
    "حمل",
    "ثور",
    "جوزا",
    "سرطان",
    "اسد",
    "سنبله",
    "میزان",
    "عقرب",
    "قوس",
    "جدی",
    "دلو",
    "حوت",
];

/// Solar Hijri month names transliterated to English.
pub const PERSIAN_MONTHS_EN: [&str; 12] = [
    "Hamal", "Sawr", "Jawza", "Saratan", "Asad", "Sunbula", "Mizan", "Aqrab", "Qaws", "Jadi",
    "Dalw", "Hut",
];

/// Gregorian month names in English.
pub const GREGORIAN_MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Eastern Arabic-Indic digit glyphs, indexed by their decimal value.
pub const DARI_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
