use std::{iter::FusedIterator, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Date, OrdinalDay, ParseError, RANGE_SEPARATOR, WorkWeek, days_between, prelude::*};

/// An inclusive interval between two dates.
///
/// The endpoints are stored as given; [`Period::normalized`] puts them in
/// order, and every length or overlap query normalizes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct Period {
    start: Date,
    end:   Date,
}

impl Period {
    /// Creates a period from two endpoints in any order.
    pub const fn new(start: Date, end: Date) -> Self {
        Self { start, end }
    }

    /// Returns the start date as given
    pub const fn start(&self) -> Date {
        self.start
    }

    /// Returns the end date as given
    pub const fn end(&self) -> Date {
        self.end
    }

    /// Returns both start and end dates as a tuple
    pub const fn dates(&self) -> (Date, Date) {
        (self.start, self.end)
    }

    /// Whether `start <= end`
    pub fn is_normalized(&self) -> bool {
        self.start <= self.end
    }

    /// Returns the period with `start <= end`, swapping the endpoints if
    /// needed. Normalizing an ordered period returns it unchanged.
    #[must_use]
    pub fn normalized(self) -> Self {
        if self.is_normalized() {
            self
        } else {
            Self {
                start: self.end,
                end:   self.start,
            }
        }
    }

    /// Exclusive length in days (same start and end gives 0)
    pub fn length(&self) -> u64 {
        days_between(self.start, self.end)
    }

    /// Inclusive length in days, counting both endpoints
    pub fn length_inclusive(&self) -> u64 {
        self.length() + 1
    }

    /// Checks if the period contains a given date (endpoints included)
    pub fn contains(&self, date: &Date) -> bool {
        let Self { start, end } = self.normalized();
        start <= *date && *date <= end
    }

    /// Checks if this period overlaps with another period.
    /// Touching endpoints count as overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        let a = self.normalized();
        let b = other.normalized();
        a.start <= b.end && b.start <= a.end
    }

    /// Checks if this period is completely contained within another period
    pub fn is_within(&self, other: &Self) -> bool {
        let inner = self.normalized();
        let outer = other.normalized();
        outer.start <= inner.start && inner.end <= outer.end
    }

    /// The dates both periods share, if any
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        if !self.overlaps(other) {
            return None;
        }
        let a = self.normalized();
        let b = other.normalized();
        Some(Self::new(a.start.max(b.start), a.end.min(b.end)))
    }

    /// Iterates over every date in the normalized period, in order
    pub fn days(&self) -> Days {
        let Self { start, end } = self.normalized();
        Days {
            next: Some(start.to_ordinal()),
            last: end.to_ordinal(),
        }
    }

    /// Number of dates in the period that are working days under `week`
    pub fn working_days(&self, week: &WorkWeek) -> u64 {
        self.days()
            .filter(|date| week.is_working_day(*date))
            .map(|_| 1)
            .sum()
    }
}

/// `period_overlap(p1, p2)`: closed-interval overlap after normalizing both
pub fn period_overlap(p1: Period, p2: Period) -> bool {
    p1.overlaps(&p2)
}

/// Exclusive length of a period in days
pub fn period_length(p: Period) -> u64 {
    p.length()
}

/// Inclusive length of a period in days
pub fn period_length_inclusive(p: Period) -> u64 {
    p.length_inclusive()
}

/// Iterator over the dates of a [`Period`], created by [`Period::days`].
#[derive(Debug, Clone)]
pub struct Days {
    next: Option<OrdinalDay>,
    last: OrdinalDay,
}

impl Iterator for Days {
    type Item = Date;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.filter(|ordinal| *ordinal <= self.last)?;
        // Both endpoints are valid dates, so every ordinal between them is too
        let date = Date::from_ordinal(current).ok()?;
        self.next = current.checked_add(1).ok();
        Some(date)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .next
            .map_or(0, |next| (next.days_until(self.last) + 1).max(0));
        let remaining = usize::try_from(remaining).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Days {}

impl FusedIterator for Days {}

impl FromStr for Period {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        // ISO 8601 interval format: use RANGE_SEPARATOR to separate start/end
        let separator_count = trimmed.matches(RANGE_SEPARATOR).count();

        match separator_count {
            0 => Err(ParseError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            ))),
            1 => {
                let (start_str, end_str) = trimmed.split_once(RANGE_SEPARATOR).ok_or_else(|| {
                    ParseError::InvalidFormat(format!("Separator '{RANGE_SEPARATOR}' not found despite count == 1"))
                })?;

                let start = start_str.trim().parse::<Date>()?;
                let end = end_str.trim().parse::<Date>()?;

                Ok(Self::new(start, end))
            },
            _ => Err(ParseError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
        }
    }
}

impl Serialize for Period {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Period {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, period};

    #[test]
    fn test_accessors() {
        let start = date(1990, 6, 15);
        let end = date(2000, 12, 31);
        let p = Period::new(start, end);

        assert_eq!(p.start(), start);
        assert_eq!(p.end(), end);
        assert_eq!(p.dates(), (start, end));
    }

    #[test]
    fn test_normalized_swaps_reversed_endpoints() {
        let p = Period::new(date(2024, 1, 10), date(2024, 1, 1));
        assert!(!p.is_normalized());

        let n = p.normalized();
        assert!(n.is_normalized());
        assert_eq!(n.dates(), (date(2024, 1, 1), date(2024, 1, 10)));
    }

    #[test]
    fn test_normalized_is_idempotent() {
        let ordered = period((2024, 1, 1), (2024, 1, 10));
        assert_eq!(ordered.normalized(), ordered);

        let reversed = period((2024, 1, 10), (2024, 1, 1));
        assert_eq!(reversed.normalized().normalized(), reversed.normalized());
    }

    #[test]
    fn test_length() {
        let same = period((2024, 1, 3), (2024, 1, 3));
        assert_eq!(same.length(), 0);
        assert_eq!(same.length_inclusive(), 1);

        let p = period((2024, 1, 1), (2024, 3, 1));
        assert_eq!(period_length(p), 60);
        assert_eq!(period_length_inclusive(p), 61);

        let reversed = period((2024, 3, 1), (2024, 1, 1));
        assert_eq!(reversed.length(), 60);
    }

    #[test]
    fn test_overlap_cases() {
        struct TestCase {
            p1:          Period,
            p2:          Period,
            overlaps:    bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                p1:          period((2024, 1, 1), (2024, 1, 10)),
                p2:          period((2024, 1, 10), (2024, 1, 20)),
                overlaps:    true,
                description: "touching endpoint",
            },
            TestCase {
                p1:          period((2024, 1, 1), (2024, 1, 9)),
                p2:          period((2024, 1, 10), (2024, 1, 20)),
                overlaps:    false,
                description: "adjacent but disjoint",
            },
            TestCase {
                p1:          period((2024, 1, 1), (2024, 12, 31)),
                p2:          period((2024, 6, 1), (2024, 6, 2)),
                overlaps:    true,
                description: "nested",
            },
            TestCase {
                p1:          period((2024, 1, 10), (2024, 1, 1)),
                p2:          period((2024, 1, 20), (2024, 1, 5)),
                overlaps:    true,
                description: "both reversed",
            },
            TestCase {
                p1:          period((2023, 1, 1), (2023, 12, 31)),
                p2:          period((2024, 1, 1), (2024, 1, 1)),
                overlaps:    false,
                description: "next year",
            },
        ];

        for case in &cases {
            assert_eq!(
                period_overlap(case.p1, case.p2),
                case.overlaps,
                "{}",
                case.description
            );
            assert_eq!(
                case.p2.overlaps(&case.p1),
                case.overlaps,
                "{} (swapped)",
                case.description
            );
        }
    }

    #[test]
    fn test_contains() {
        let p = period((2024, 1, 10), (2024, 1, 1));
        assert!(p.contains(&date(2024, 1, 1)));
        assert!(p.contains(&date(2024, 1, 10)));
        assert!(p.contains(&date(2024, 1, 5)));
        assert!(!p.contains(&date(2023, 12, 31)));
        assert!(!p.contains(&date(2024, 1, 11)));
    }

    #[test]
    fn test_is_within() {
        let outer = period((1990, 1, 1), (2000, 12, 31));
        let inner = period((1995, 6, 1), (1998, 1, 1));

        assert!(inner.is_within(&outer));
        assert!(!outer.is_within(&inner));
        assert!(outer.is_within(&outer));
    }

    #[test]
    fn test_intersection() {
        let a = period((2024, 1, 1), (2024, 1, 10));
        let b = period((2024, 1, 5), (2024, 1, 20));
        assert_eq!(a.intersection(&b), Some(period((2024, 1, 5), (2024, 1, 10))));

        let c = period((2024, 2, 1), (2024, 2, 2));
        assert_eq!(a.intersection(&c), None);
    }

    #[test]
    fn test_days_iterates_inclusive() {
        let p = period((2024, 2, 27), (2024, 3, 2));
        let days: Vec<Date> = p.days().collect();
        assert_eq!(
            days,
            vec![
                date(2024, 2, 27),
                date(2024, 2, 28),
                date(2024, 2, 29),
                date(2024, 3, 1),
                date(2024, 3, 2)
            ]
        );
        assert_eq!(p.days().len(), 5);
    }

    #[test]
    fn test_days_single_and_reversed() {
        let single = period((2024, 5, 5), (2024, 5, 5));
        assert_eq!(single.days().collect::<Vec<_>>(), vec![date(2024, 5, 5)]);

        let reversed = period((2024, 1, 3), (2024, 1, 1));
        assert_eq!(reversed.days().count(), 3);
        assert_eq!(reversed.days().next(), Some(date(2024, 1, 1)));
    }

    #[test]
    fn test_working_days() {
        // 2024-03-11 is a Monday; two full weeks
        let p = period((2024, 3, 11), (2024, 3, 24));
        assert_eq!(p.working_days(&WorkWeek::default()), 10);
        assert_eq!(p.working_days(&WorkWeek::friday_saturday()), 10);

        // Thursday to Sunday
        let p = period((2024, 3, 14), (2024, 3, 17));
        assert_eq!(p.working_days(&WorkWeek::saturday_sunday()), 2);
        assert_eq!(p.working_days(&WorkWeek::friday_saturday()), 2);
        assert_eq!(p.working_days(&WorkWeek::new([] as [crate::Weekday; 0])), 4);
    }

    #[test]
    fn test_display() {
        let p = period((1990, 6, 15), (2000, 12, 31));
        assert_eq!(p.to_string(), "1990-06-15/2000-12-31");
    }

    #[test]
    fn test_from_str() {
        let p = "1990-01-15/2000-12-31".parse::<Period>().unwrap();
        assert_eq!(p, period((1990, 1, 15), (2000, 12, 31)));

        // Order is preserved as written
        let p = " 2000-12-31 / 1990-01-15 ".parse::<Period>().unwrap();
        assert_eq!(p.start(), date(2000, 12, 31));
    }

    #[test]
    fn test_from_str_rejects_bad_input() {
        let err = "2024-01-01".parse::<Period>().unwrap_err();
        assert!(err.to_string().contains("No range separator found"));

        let err = "2000-01-01/2001-01-01/2002-01-01".parse::<Period>().unwrap_err();
        assert!(err.to_string().contains("Too many '/' separators"));
        assert!(err.to_string().contains("expected 1, found 2"));

        // Day-first dates use '/' too, so they cannot appear in a period
        assert!("01/01/2024/2024-02-01".parse::<Period>().is_err());

        assert!(matches!(
            "2024-02-30/2024-03-01".parse::<Period>(),
            Err(ParseError::Calendar(_))
        ));
    }

    #[test]
    fn test_ordering() {
        let p1 = period((1990, 1, 1), (2000, 1, 1));
        let p2 = period((1995, 1, 1), (2005, 1, 1));
        let p3 = period((1990, 1, 1), (2005, 1, 1));

        assert!(p1 < p2);
        assert!(p1 < p3);
    }

    #[test]
    fn test_serde_string_format() {
        let p = period((1990, 6, 15), (2000, 12, 31));
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#""1990-06-15/2000-12-31""#);

        let parsed: Period = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, p);

        let result: Result<Period, _> = serde_json::from_str(r#""1990-06-15""#);
        assert!(result.is_err());
    }
}
