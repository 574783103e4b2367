//! Ordinal day numbering: 0001-01-01 is day 1.

use crate::consts::{
    DAYS_IN_COMMON_YEAR, DAYS_PER_4_YEARS, DAYS_PER_100_YEARS, DAYS_PER_400_YEARS, JANUARY,
};
use crate::prelude::*;
use crate::types::{days_in_month, is_leap_year};
use crate::{CalendarError, Date};
use serde::{Deserialize, Serialize};

/// Count of days since the start of the calendar, with 0001-01-01 as day 1.
///
/// Conversion to and from [`Date`] is an order-preserving bijection, so
/// day differences and day offsets are plain integer arithmetic.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Into, Serialize, Deserialize,
)]
#[display(fmt = "{_0}")]
#[serde(try_from = "i64", into = "i64")]
pub struct OrdinalDay(i64);

impl OrdinalDay {
    /// Ordinal of 0001-01-01
    pub const FIRST: Self = Self(1);

    /// Creates an ordinal day, rejecting values below 1
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidOrdinal` if `value < 1`.
    pub const fn new(value: i64) -> Result<Self, CalendarError> {
        if value < 1 {
            return Err(CalendarError::InvalidOrdinal(value));
        }
        Ok(Self(value))
    }

    /// Returns the ordinal as i64
    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Offsets this ordinal by `days` (which may be negative).
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidOrdinal` if the result would be below 1,
    /// or `CalendarError::YearOutOfRange` if the addition overflows.
    pub const fn checked_add(self, days: i64) -> Result<Self, CalendarError> {
        match self.0.checked_add(days) {
            Some(value) => Self::new(value),
            None if days < 0 => Err(CalendarError::InvalidOrdinal(i64::MIN)),
            None => Err(CalendarError::YearOutOfRange),
        }
    }

    /// Number of days from `self` to `other`; negative when `other` is earlier.
    pub const fn days_until(self, other: Self) -> i64 {
        other.0 - self.0
    }
}

impl TryFrom<i64> for OrdinalDay {
    type Error = CalendarError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Date> for OrdinalDay {
    fn from(date: Date) -> Self {
        date.to_ordinal()
    }
}

impl TryFrom<OrdinalDay> for Date {
    type Error = CalendarError;

    fn try_from(ordinal: OrdinalDay) -> Result<Self, Self::Error> {
        Self::from_ordinal(ordinal)
    }
}

/// Days in all years strictly before `year`.
const fn days_before_year(year: u32) -> i64 {
    let y = year as i64 - 1;
    y * DAYS_IN_COMMON_YEAR as i64 + y / 4 - y / 100 + y / 400
}

impl Date {
    /// Converts this date to its ordinal day.
    ///
    /// Equivalent to summing 365/366 for every prior year, the lengths of
    /// every prior month of this year, and the day of month.
    pub fn to_ordinal(&self) -> OrdinalDay {
        OrdinalDay(days_before_year(self.year()) + i64::from(self.day_of_year()))
    }

    /// Converts an ordinal day back to a date.
    ///
    /// The remainder left after removing whole months is always in
    /// `1..=days_in_month`, so a month-end ordinal maps to the last day of
    /// that month and `Date::from_ordinal(d.to_ordinal()) == d` holds.
    ///
    /// # Errors
    /// Returns `CalendarError::YearOutOfRange` if the ordinal lies past the
    /// last representable year.
    pub fn from_ordinal(ordinal: OrdinalDay) -> Result<Self, CalendarError> {
        // Zero-based day count, peeled off in 400/100/4/1-year cycles. The
        // last century of a 400-year cycle and the last year of a 4-year
        // cycle are one day longer, hence the clamps to 3.
        let mut n = ordinal.get() - 1;
        let n400 = n / DAYS_PER_400_YEARS;
        n %= DAYS_PER_400_YEARS;
        let n100 = (n / DAYS_PER_100_YEARS).min(3);
        n -= n100 * DAYS_PER_100_YEARS;
        let n4 = n / DAYS_PER_4_YEARS;
        n %= DAYS_PER_4_YEARS;
        let n1 = (n / i64::from(DAYS_IN_COMMON_YEAR)).min(3);
        n -= n1 * i64::from(DAYS_IN_COMMON_YEAR);

        let year = u32::try_from(400 * n400 + 100 * n100 + 4 * n4 + n1 + 1)
            .map_err(|_| CalendarError::YearOutOfRange)?;
        debug_assert!(n < 365 || (n == 365 && is_leap_year(year)));

        // n is now the zero-based day of the year
        let mut remaining = n + 1;
        let mut month = JANUARY;
        while remaining > i64::from(days_in_month(year, month)) {
            remaining -= i64::from(days_in_month(year, month));
            month += 1;
        }

        let day = u8::try_from(remaining).map_err(|_| CalendarError::InvalidOrdinal(ordinal.get()))?;
        Self::new(year, month, day)
    }
}
