//! Day differences and age-style decomposition of elapsed time.

use crate::consts::{DECEMBER, JANUARY};
use crate::types::{days_in_month, days_in_year};
use crate::Date;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Exclusive number of days between two dates, regardless of order.
///
/// The same date gives 0; add 1 for a count that includes both endpoints.
pub fn days_between(d1: Date, d2: Date) -> u64 {
    let (earlier, later) = if d1 <= d2 { (d1, d2) } else { (d2, d1) };
    earlier
        .to_ordinal()
        .days_until(later.to_ordinal())
        .unsigned_abs()
}

/// Elapsed time split into whole years, then whole months, then days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgeComponents {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

impl AgeComponents {
    /// Same as [`decompose_elapsed`].
    pub fn between(from: Date, to: Date) -> Self {
        decompose_elapsed(from, to)
    }
}

impl fmt::Display for AgeComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} year{}, {} month{}, {} day{}",
            self.years,
            plural(self.years),
            self.months,
            plural(self.months),
            self.days,
            plural(self.days)
        )
    }
}

const fn plural(n: u32) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Greedy decomposition of the time between two dates.
///
/// Dates are put in order first. Whole years are consumed while the
/// remaining day count covers the length of the current year, advancing
/// the year each time; then whole months while it covers the length of the
/// current month, rolling into the next year after December. Whatever is
/// left is the day count. Because month lengths depend on the year reached
/// so far, the order years, months, days matters.
pub fn decompose_elapsed(from: Date, to: Date) -> AgeComponents {
    let (from, to) = if from <= to { (from, to) } else { (to, from) };
    let mut remaining = days_between(from, to);
    let mut year = from.year();
    let mut month = from.month();
    let mut age = AgeComponents::default();

    while remaining >= u64::from(days_in_year(year)) {
        remaining -= u64::from(days_in_year(year));
        age.years += 1;
        year += 1;
    }

    while remaining >= u64::from(days_in_month(year, month)) {
        remaining -= u64::from(days_in_month(year, month));
        age.months += 1;
        if month == DECEMBER {
            month = JANUARY;
            year += 1;
        } else {
            month += 1;
        }
    }

    // Less than one month left, so this always fits
    age.days = u32::try_from(remaining).unwrap_or(u32::MAX);
    age
}
