//! Integration tests for `Date`, `Weekday`, and `YearMonth`.

use al_time::{days_in_month, is_leap_year, Date, Weekday, YearMonth};
use chrono::Datelike;
use proptest::prelude::*;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

// ─── Calendar arithmetic ──────────────────────────────────────────────────────

#[test]
fn consecutive_days_are_consecutive_serials() {
    let mut d = Date::MIN;
    let end = Date::MAX;
    let mut prev_wd = d.weekday().ordinal();
    while d < end {
        let next = d.add_days(1).unwrap();
        assert_eq!(next.serial(), d.serial() + 1);
        let wd = next.weekday().ordinal();
        assert_eq!(wd, prev_wd % 7 + 1, "weekday does not advance at {next}");
        let (y, m, day) = next.ymd();
        assert!(day >= 1 && day <= days_in_month(y, m), "invalid day at {next}");
        prev_wd = wd;
        d = next;
    }
}

#[test]
fn full_range_month_edges() {
    // The first day of the range is a Monday; the last month still has
    // room for a full grid after it.
    assert_eq!(Date::MIN.ymd(), (1, 1, 1));
    assert_eq!(Date::MIN.weekday(), Weekday::Monday);
    let last = YearMonth::new(9999, 12).unwrap();
    assert!(last.last_day().add_days(14).is_ok());
    assert_eq!(Date::MAX.to_iso(), "+10000-12-31");
    assert_eq!(date(1582, 10, 10).weekday(), Weekday::Sunday);
}

#[test]
fn leap_years() {
    assert!(is_leap_year(2000));
    assert!(is_leap_year(2024));
    assert!(!is_leap_year(1900));
    assert!(!is_leap_year(2100));
    assert!(!is_leap_year(2023));
}

#[test]
fn weekend_detection() {
    // 2024-10-12 Saturday, 2024-10-13 Sunday, 2024-10-14 Monday
    assert!(date(2024, 10, 12).is_weekend());
    assert!(date(2024, 10, 13).is_weekend());
    assert!(!date(2024, 10, 14).is_weekend());
    assert_eq!(date(2024, 10, 14).weekday(), Weekday::Monday);
}

#[test]
fn serde_uses_iso_strings() {
    let d = date(2024, 1, 1);
    let json = serde_json::to_string(&d).unwrap();
    assert_eq!(json, "\"2024-01-01\"");
    let back: Date = serde_json::from_str(&json).unwrap();
    assert_eq!(back, d);
    assert!(serde_json::from_str::<Date>("\"2024-13-01\"").is_err());
}

#[test]
fn year_month_walks_through_a_year() {
    let mut ym = YearMonth::new(2024, 1).unwrap();
    let mut total = 0u32;
    for _ in 0..12 {
        total += ym.days() as u32;
        ym = ym.next().unwrap();
    }
    assert_eq!(total, 366);
    assert_eq!(ym, YearMonth::new(2025, 1).unwrap());
}

// ─── Properties ───────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn agrees_with_chrono(serial in 1i32..=Date::MAX.serial()) {
        let d = Date::from_serial(serial).unwrap();
        let naive = chrono::NaiveDate::from(d);
        let (y, m, day) = d.ymd();
        prop_assert_eq!(naive.year(), y as i32);
        prop_assert_eq!(naive.month(), m as u32);
        prop_assert_eq!(naive.day(), day as u32);
        prop_assert_eq!(
            naive.weekday().number_from_monday(),
            d.weekday().ordinal() as u32
        );
    }
}
