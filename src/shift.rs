//! Moving dates by days, weeks, months and years.

use crate::consts::{DAYS_PER_WEEK, MONTHS_PER_YEAR};
use crate::prelude::*;
use crate::types::days_in_month;
use crate::{CalendarError, Date};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Calendar unit for [`Date::add_by_unit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[display(fmt = "day")]
    Day,
    #[display(fmt = "week")]
    Week,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "year")]
    Year,
}

impl Date {
    /// Adds `n` days (negative `n` moves backwards).
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidOrdinal` if the result would fall
    /// before 0001-01-01, or `CalendarError::YearOutOfRange` past the last
    /// representable year.
    pub fn add_days(self, n: i64) -> Result<Self, CalendarError> {
        let target = self.to_ordinal().checked_add(n).inspect_err(|err| {
            debug!(date = %self, days = n, %err, "day offset leaves the calendar");
        })?;
        Self::from_ordinal(target)
    }

    /// Adds `n` weeks, i.e. `7 * n` days.
    ///
    /// # Errors
    /// Same as [`Date::add_days`].
    pub fn add_weeks(self, n: i64) -> Result<Self, CalendarError> {
        let days = n
            .checked_mul(DAYS_PER_WEEK)
            .ok_or(CalendarError::YearOutOfRange)?;
        self.add_days(days)
    }

    /// Adds `n` calendar months.
    ///
    /// The month moves by `n` with year rollover in either direction. If the
    /// day of month does not exist in the target month it is clamped to the
    /// last day, so 2024-01-31 plus one month is 2024-02-29.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear` if the result would fall before
    /// year 1, or `CalendarError::YearOutOfRange` past the last
    /// representable year.
    pub fn add_months(self, n: i64) -> Result<Self, CalendarError> {
        // Zero-based month index counted from January of year 0
        let index = i64::from(self.year()) * MONTHS_PER_YEAR + i64::from(self.month()) - 1;
        let target = index.checked_add(n).ok_or(CalendarError::YearOutOfRange)?;
        let year = year_from_i64(target.div_euclid(MONTHS_PER_YEAR))?;
        let month = u8::try_from(target.rem_euclid(MONTHS_PER_YEAR) + 1)
            .map_err(|_| CalendarError::YearOutOfRange)?;
        self.with_clamped_day(year, month)
    }

    /// Adds `n` years. February 29 becomes February 28 when the target
    /// year is not a leap year.
    ///
    /// # Errors
    /// Same as [`Date::add_months`].
    pub fn add_years(self, n: i64) -> Result<Self, CalendarError> {
        let target = i64::from(self.year())
            .checked_add(n)
            .ok_or(CalendarError::YearOutOfRange)?;
        let year = year_from_i64(target)?;
        self.with_clamped_day(year, self.month())
    }

    /// Adds `amount` of `unit`, dispatching to the matching `add_*` method.
    ///
    /// # Errors
    /// Same as the dispatched method.
    pub fn add_by_unit(self, unit: Unit, amount: i64) -> Result<Self, CalendarError> {
        match unit {
            Unit::Day => self.add_days(amount),
            Unit::Week => self.add_weeks(amount),
            Unit::Month => self.add_months(amount),
            Unit::Year => self.add_years(amount),
        }
    }

    /// The following day.
    ///
    /// # Errors
    /// Returns `CalendarError::YearOutOfRange` for the last representable day.
    pub fn next_day(self) -> Result<Self, CalendarError> {
        self.add_days(1)
    }

    /// The preceding day.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidOrdinal` for 0001-01-01.
    pub fn previous_day(self) -> Result<Self, CalendarError> {
        self.add_days(-1)
    }

    /// Advances this date by one day in place.
    ///
    /// # Errors
    /// Returns `CalendarError::YearOutOfRange` for the last representable
    /// day, leaving the date unchanged.
    pub fn increment(&mut self) -> Result<(), CalendarError> {
        *self = self.next_day()?;
        Ok(())
    }

    fn with_clamped_day(self, year: u32, month: u8) -> Result<Self, CalendarError> {
        let last = days_in_month(year, month);
        if self.day() > last {
            debug!(
                date = %self,
                year,
                month,
                clamped_to = last,
                "day does not exist in target month, clamping to month end"
            );
        }
        Self::new(year, month, self.day().min(last))
    }
}

fn year_from_i64(year: i64) -> Result<u32, CalendarError> {
    if year < 1 {
        debug!(year, "shift moves before year 1");
        return Err(CalendarError::InvalidYear(0));
    }
    u32::try_from(year).map_err(|_| CalendarError::YearOutOfRange)
}
