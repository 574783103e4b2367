use crate::consts::DAYS_PER_WEEK;
use crate::prelude::*;
use crate::Date;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Day of the week. 0001-01-01 is a Monday in the proleptic Gregorian calendar.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// 1 for Monday through 7 for Sunday (ISO 8601)
    pub const fn number_from_monday(self) -> u8 {
        self as u8 + 1
    }

    /// 1 for Sunday through 7 for Saturday
    pub const fn number_from_sunday(self) -> u8 {
        (self as u8 + 1) % 7 + 1
    }

    /// The following weekday
    pub const fn succ(self) -> Self {
        Self::ALL[(self as usize + 1) % 7]
    }
}

impl Date {
    /// Day of the week for this date.
    pub fn weekday(&self) -> Weekday {
        let offset = (self.to_ordinal().get() - 1).rem_euclid(DAYS_PER_WEEK);
        // rem_euclid keeps the offset in 0..7
        Weekday::ALL[usize::try_from(offset).unwrap_or_default()]
    }
}

/// Which weekdays count as weekend when counting working days.
///
/// Deserializes from `{"weekend": ["saturday", "sunday"]}`, so callers can
/// keep it in their own configuration files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkWeek {
    weekend: BTreeSet<Weekday>,
}

impl WorkWeek {
    /// A work week with the given weekend days
    pub fn new(weekend: impl IntoIterator<Item = Weekday>) -> Self {
        Self {
            weekend: weekend.into_iter().collect(),
        }
    }

    /// Saturday and Sunday off
    pub fn saturday_sunday() -> Self {
        Self::new([Weekday::Saturday, Weekday::Sunday])
    }

    /// Friday and Saturday off
    pub fn friday_saturday() -> Self {
        Self::new([Weekday::Friday, Weekday::Saturday])
    }

    /// Whether `day` is a weekend day
    pub fn is_weekend(&self, day: Weekday) -> bool {
        self.weekend.contains(&day)
    }

    /// Whether `date` is a working day
    pub fn is_working_day(&self, date: Date) -> bool {
        !self.is_weekend(date.weekday())
    }

    /// Weekend days in Monday-first order
    pub fn weekend(&self) -> impl Iterator<Item = Weekday> + '_ {
        self.weekend.iter().copied()
    }
}

impl Default for WorkWeek {
    fn default() -> Self {
        Self::saturday_sunday()
    }
}
