//! Builders for tests; they panic on invalid input.

use crate::{Date, Period};

pub fn date(year: u32, month: u8, day: u8) -> Date {
    Date::new(year, month, day).unwrap()
}

pub fn period(start: (u32, u8, u8), end: (u32, u8, u8)) -> Period {
    Period::new(date(start.0, start.1, start.2), date(end.0, end.1, end.2))
}
