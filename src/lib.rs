//! # datecalc
//!
//! Pure calendar arithmetic over the proleptic Gregorian calendar, starting
//! at 0001-01-01.
//!
//! Every date maps to an [`OrdinalDay`] (0001-01-01 is day 1), which turns
//! day arithmetic and differences into integer operations. Month and year
//! shifts work in calendar units instead and clamp to the end of the target
//! month when the original day does not exist there.
//!
//! ```
//! use datecalc::{Date, Period, Unit, days_between, decompose_elapsed};
//!
//! let start = Date::new(2024, 1, 31)?;
//! assert_eq!(start.add_months(1)?, Date::new(2024, 2, 29)?);
//! assert_eq!(start.add_by_unit(Unit::Week, 2)?, Date::new(2024, 2, 14)?);
//!
//! let end: Date = "2024-03-10".parse()?;
//! assert_eq!(days_between(start, end), 39);
//! assert_eq!(decompose_elapsed(start, end).to_string(), "0 years, 1 month, 8 days");
//!
//! let period = Period::new(end, start);
//! assert_eq!(period.length_inclusive(), 40);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod consts;
mod elapsed;
mod error;
mod ordinal;
mod period;
mod prelude;
mod shift;
mod types;
mod weekday;

#[cfg(test)]
mod test_utils;

pub use consts::*;
pub use elapsed::{AgeComponents, days_between, decompose_elapsed};
pub use error::{CalendarError, ParseError};
pub use ordinal::OrdinalDay;
pub use period::{Days, Period, period_length, period_length_inclusive, period_overlap};
pub use shift::Unit;
pub use types::{Day, Month, Year, days_in_month, days_in_year, is_leap_year};
pub use weekday::{WorkWeek, Weekday};

use crate::prelude::*;
use std::cmp::Ordering;
use std::str::FromStr;

/// A valid calendar date in the proleptic Gregorian calendar.
///
/// Field order gives the derived ordering: year, then month, then day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct Date {
    year: Year,
    month: Month,
    day: Day,
}

/// Outcome of comparing two dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Comparison {
    #[display(fmt = "before")]
    Before,
    #[display(fmt = "equal")]
    Equal,
    #[display(fmt = "after")]
    After,
}

impl Comparison {
    /// Numeric code: -1 for `Before`, 0 for `Equal`, 1 for `After`.
    pub const fn code(self) -> i8 {
        match self {
            Self::Before => -1,
            Self::Equal => 0,
            Self::After => 1,
        }
    }
}

impl From<Ordering> for Comparison {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Self::Before,
            Ordering::Equal => Self::Equal,
            Ordering::Greater => Self::After,
        }
    }
}

impl From<Comparison> for Ordering {
    fn from(comparison: Comparison) -> Self {
        match comparison {
            Comparison::Before => Self::Less,
            Comparison::Equal => Self::Equal,
            Comparison::After => Self::Greater,
        }
    }
}

/// Compares `d1` against `d2` lexicographically on (year, month, day).
pub fn compare_dates(d1: Date, d2: Date) -> Comparison {
    d1.cmp(&d2).into()
}

/// Renders a date as `D/M/YYYY`, see [`Date::day_first`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display(fmt = "{}/{}/{}", "_0.day()", "_0.month()", "_0.year()")]
pub struct DayFirst(Date);

impl Date {
    /// The first representable date, 0001-01-01.
    pub const MIN: Self = Self {
        year: Year::MIN,
        month: Month::JANUARY,
        day: Day::FIRST,
    };

    /// Creates a date from raw components.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear`, `InvalidMonth` or `InvalidDay`
    /// for the first component that is out of range.
    pub fn new(year: u32, month: u8, day: u8) -> Result<Self, CalendarError> {
        Ok(Self {
            year: Year::new(year)?,
            month: Month::new(month)?,
            day: Day::new(day, year, month)?,
        })
    }

    /// Creates a date from already-validated components.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDay` if `day` does not exist in the
    /// given month (a `Day` is only validated against the month it was
    /// built for).
    pub fn from_parts(year: Year, month: Month, day: Day) -> Result<Self, CalendarError> {
        Day::new(day.get(), year.get(), month.get())?;
        Ok(Self { year, month, day })
    }

    /// Returns the year component
    pub const fn year(&self) -> u32 {
        self.year.get()
    }

    /// Returns the month component (1..=12)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day-of-month component
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the Year type
    pub const fn year_typed(&self) -> Year {
        self.year
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Returns the Day type
    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Returns (year, month, day)
    pub const fn to_tuple(&self) -> (u32, u8, u8) {
        (self.year(), self.month(), self.day())
    }

    /// Whether the date falls in a leap year
    pub const fn is_leap_year(&self) -> bool {
        self.year.is_leap()
    }

    /// Number of days in this date's month
    pub const fn days_in_month(&self) -> u8 {
        days_in_month(self.year(), self.month())
    }

    /// Whether this is the last day of its month
    pub const fn is_last_day_of_month(&self) -> bool {
        self.day() == self.days_in_month()
    }

    /// Day of the year, 1-based (January 1 is day 1).
    pub fn day_of_year(&self) -> u16 {
        let before: u16 = (1..self.month())
            .map(|m| u16::from(days_in_month(self.year(), m)))
            .sum();
        before + u16::from(self.day())
    }

    /// Compares this date with `other`
    pub fn compare(&self, other: &Self) -> Comparison {
        compare_dates(*self, *other)
    }

    /// Display adapter for the `D/M/YYYY` form.
    pub const fn day_first(self) -> DayFirst {
        DayFirst(self)
    }
}

impl TryFrom<(u32, u8, u8)> for Date {
    type Error = CalendarError;

    fn try_from((year, month, day): (u32, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(year, month, day)
    }
}

impl From<Date> for (u32, u8, u8) {
    fn from(date: Date) -> Self {
        date.to_tuple()
    }
}

impl FromStr for Date {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        // Strictly enforce delimiters: DATE_SEPARATOR for ISO, DAY_FIRST_SEPARATOR for day-first
        let has_hyphen = trimmed.contains(DATE_SEPARATOR);
        let has_slash = trimmed.contains(DAY_FIRST_SEPARATOR);

        if has_hyphen && has_slash {
            return Err(ParseError::InvalidFormat(format!(
                "Mixed delimiters ({DATE_SEPARATOR} and {DAY_FIRST_SEPARATOR})"
            )));
        }

        if has_hyphen {
            // ISO format: YYYY-MM-DD
            let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
            match parts.as_slice() {
                [year, month, day] => Self::from_text_parts(year, month, day),
                _ => Err(ParseError::InvalidFormat(format!(
                    "Expected 2 {DATE_SEPARATOR} separators, found {}",
                    parts.len() - 1
                ))),
            }
        } else if has_slash {
            // Day-first format: DD/MM/YYYY
            let parts: Vec<&str> = trimmed.split(DAY_FIRST_SEPARATOR).map(str::trim).collect();
            match parts.as_slice() {
                [day, month, year] => Self::from_text_parts(year, month, day),
                _ => Err(ParseError::InvalidFormat(format!(
                    "Expected 2 {DAY_FIRST_SEPARATOR} separators, found {}",
                    parts.len() - 1
                ))),
            }
        } else {
            Err(ParseError::InvalidFormat(format!(
                "No date separator found: {trimmed}"
            )))
        }
    }
}

impl Date {
    /// Helper to parse a numeric component with better error messages
    fn parse_component<T: FromStr>(s: &str) -> Result<T, ParseError> {
        s.parse::<T>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }

    fn from_text_parts(year: &str, month: &str, day: &str) -> Result<Self, ParseError> {
        // InvalidFormat if not numeric, calendar errors if out of range
        let year = Self::parse_component::<u32>(year)?;
        let month = Self::parse_component::<u8>(month)?;
        let day = Self::parse_component::<u8>(day)?;
        Ok(Self::new(year, month, day)?)
    }
}

impl serde::Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
