/// Smallest valid year; the calendar starts at 0001-01-01
pub const MIN_YEAR: u32 = 1;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Number of months in a year, used for month-index arithmetic
pub const MONTHS_PER_YEAR: i64 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
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

/// Length of a common year in days
pub const DAYS_IN_COMMON_YEAR: u16 = 365;
/// Length of a leap year in days
pub const DAYS_IN_LEAP_YEAR: u16 = 366;

/// Days in a week
pub const DAYS_PER_WEEK: i64 = 7;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u32 = 400;

/// Days in one 4-year cycle (three common years and one leap year)
pub(crate) const DAYS_PER_4_YEARS: i64 = 1_461;
/// Days in a century that does not end on a 400-year boundary
pub(crate) const DAYS_PER_100_YEARS: i64 = 36_524;
/// Days in a full 400-year Gregorian cycle
pub(crate) const DAYS_PER_400_YEARS: i64 = 146_097;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Range separator (ISO 8601 interval format)
pub const RANGE_SEPARATOR: char = '/';
/// Day-first format separator (`DD/MM/YYYY`)
pub const DAY_FIRST_SEPARATOR: char = '/';
