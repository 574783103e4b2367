//! Error types for the datecalc crate.

use crate::prelude::*;

/// Error type for calendar validation and arithmetic.
///
/// The first three variants reject out-of-range components when a date is
/// built. The last two are reported by ordinal conversion and therefore by
/// any arithmetic that would leave the representable calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum CalendarError {
    /// Year zero; the calendar starts at year 1.
    #[error("Invalid year: {0} (must be at least 1)")]
    InvalidYear(u32),

    /// Month outside `1..=12`.
    #[error("Invalid month: {0} (must be 1-12)")]
    InvalidMonth(u8),

    /// Day outside `1..=days_in_month(year, month)`.
    #[error("Invalid day {day} for month {year:04}-{month:02}")]
    InvalidDay { year: u32, month: u8, day: u8 },

    /// Ordinal day below 1, i.e. a day before 0001-01-01.
    #[error("Invalid ordinal day: {0} (must be at least 1)")]
    InvalidOrdinal(i64),

    /// The result would fall after the last representable year.
    #[error("Date arithmetic overflowed the representable year range")]
    YearOutOfRange,
}

/// Error type for parsing dates and periods from text.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Empty date string")]
    EmptyInput,
    #[display(fmt = "{_0}")]
    Calendar(CalendarError),
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Calendar(err) => Some(err),
            Self::InvalidFormat(_) | Self::EmptyInput => None,
        }
    }
}

impl From<CalendarError> for ParseError {
    fn from(err: CalendarError) -> Self {
        Self::Calendar(err)
    }
}
