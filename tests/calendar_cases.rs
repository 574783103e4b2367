use datecalc::{
    AgeComponents, CalendarError, Comparison, Date, Period, Unit, WorkWeek, compare_dates,
    days_between, days_in_month, decompose_elapsed, is_leap_year, period_length,
    period_length_inclusive, period_overlap,
};

fn date(year: u32, month: u8, day: u8) -> Date {
    Date::new(year, month, day).unwrap()
}

#[test]
fn leap_year_rule() {
    assert!(is_leap_year(2000));
    assert!(!is_leap_year(1900));
    assert!(is_leap_year(2024));
    assert!(!is_leap_year(2023));
}

#[test]
fn february_length() {
    assert_eq!(days_in_month(2024, 2), 29);
    assert_eq!(days_in_month(2023, 2), 28);
}

#[test]
fn same_date_lengths() {
    let d = date(2024, 1, 3);
    assert_eq!(days_between(d, d), 0);
    assert_eq!(period_length_inclusive(Period::new(d, d)), 1);
}

#[test]
fn days_between_ignores_argument_order() {
    let dates = [
        date(1, 1, 1),
        date(1600, 2, 29),
        date(1999, 12, 31),
        date(2024, 1, 3),
        date(2024, 2, 29),
    ];
    for a in dates {
        for b in dates {
            assert_eq!(days_between(a, b), days_between(b, a));
        }
    }
}

#[test]
fn compare_is_consistent_with_ordinals() {
    let a = date(2024, 2, 29);
    let b = date(2024, 3, 1);
    assert_eq!(compare_dates(a, b), Comparison::Before);
    assert_eq!(compare_dates(b, a), Comparison::After);
    assert_eq!(compare_dates(a, a), Comparison::Equal);
    assert!(a.to_ordinal() < b.to_ordinal());
}

#[test]
fn month_increment_clamps_to_month_end() {
    assert_eq!(date(2024, 1, 31).add_months(1).unwrap(), date(2024, 2, 29));
    assert_eq!(date(2023, 1, 31).add_months(1).unwrap(), date(2023, 2, 28));
}

#[test]
fn day_increment_crosses_year_boundary() {
    assert_eq!(date(2023, 12, 31).add_days(1).unwrap(), date(2024, 1, 1));
}

#[test]
fn add_by_unit_matches_dedicated_methods() {
    let start = date(2022, 8, 31);
    for amount in [-13i64, -1, 0, 1, 6, 40] {
        assert_eq!(
            start.add_by_unit(Unit::Day, amount).unwrap(),
            start.add_days(amount).unwrap()
        );
        assert_eq!(
            start.add_by_unit(Unit::Week, amount).unwrap(),
            start.add_days(amount * 7).unwrap()
        );
        assert_eq!(
            start.add_by_unit(Unit::Month, amount).unwrap(),
            start.add_months(amount).unwrap()
        );
        assert_eq!(
            start.add_by_unit(Unit::Year, amount).unwrap(),
            start.add_years(amount).unwrap()
        );
    }
}

#[test]
fn shifting_before_the_calendar_start_fails() {
    assert!(matches!(
        Date::MIN.add_days(-1),
        Err(CalendarError::InvalidOrdinal(_))
    ));
    assert!(Date::MIN.add_months(-1).is_err());
    assert!(Date::MIN.add_years(-1).is_err());
}

#[test]
fn elapsed_decomposition() {
    let age = decompose_elapsed(date(2000, 1, 1), date(2001, 2, 15));
    assert_eq!(
        age,
        AgeComponents {
            years: 1,
            months: 1,
            days: 14
        }
    );
}

#[test]
fn period_overlap_uses_closed_intervals() {
    let p1 = Period::new(date(2024, 1, 1), date(2024, 1, 10));
    let p2 = Period::new(date(2024, 1, 10), date(2024, 1, 20));
    let p3 = Period::new(date(2024, 1, 1), date(2024, 1, 9));
    assert!(period_overlap(p1, p2));
    assert!(!period_overlap(p3, p2));
}

#[test]
fn period_lengths() {
    let p = Period::new(date(2024, 12, 31), date(2024, 1, 1));
    assert_eq!(period_length(p), 365);
    assert_eq!(period_length_inclusive(p), 366);
    assert_eq!(p.days().count(), 366);
}

#[test]
fn vacation_working_days() {
    // Sunday 2024-06-02 through Saturday 2024-06-15
    let vacation: Period = "2024-06-02/2024-06-15".parse().unwrap();
    assert_eq!(vacation.working_days(&WorkWeek::default()), 10);
    assert_eq!(vacation.working_days(&WorkWeek::friday_saturday()), 10);
}

#[test]
fn text_round_trip_through_both_formats() {
    let d: Date = "29/02/2024".parse().unwrap();
    assert_eq!(d, date(2024, 2, 29));
    assert_eq!(d.to_string(), "2024-02-29");
    assert_eq!(d.day_first().to_string(), "29/2/2024");
    assert_eq!(d.day_first().to_string().parse::<Date>().unwrap(), d);
}
