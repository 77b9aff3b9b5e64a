//! Static festival and solar-term tables.
//!
//! Solar terms are approximated by calendar-day windows: each civil month
//! has two anchor days, and a date within one day of an anchor is labelled
//! with that term.  The tomb-sweeping festival uses a linear formula over
//! `year % 4`.  Neither is astronomically exact.

use al_time::{Date, Weekday};

/// A festival on a fixed (month, day).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Festival {
    /// Month (1–12).
    pub month: u8,
    /// Day of month.
    pub day: u8,
    /// Display name.
    pub name: &'static str,
}

const fn festival(month: u8, day: u8, name: &'static str) -> Festival {
    Festival { month, day, name }
}

/// Festivals on fixed civil dates, in calendar order.
pub const CIVIL_FESTIVALS: [Festival; 13] = [
    festival(1, 1, "元旦"),
    festival(2, 14, "情人节"),
    festival(3, 8, "妇女节"),
    festival(3, 12, "植树节"),
    festival(4, 1, "愚人节"),
    festival(5, 1, "劳动节"),
    festival(5, 4, "青年节"),
    festival(6, 1, "儿童节"),
    festival(7, 1, "建党节"),
    festival(8, 1, "建军节"),
    festival(9, 10, "教师节"),
    festival(10, 1, "国庆节"),
    festival(12, 25, "圣诞节"),
];

/// Festivals on fixed lunisolar dates (folded month, day), in calendar order.
pub const LUNAR_FESTIVALS: [Festival; 10] = [
    festival(1, 1, "春节"),
    festival(1, 15, "元宵"),
    festival(2, 2, "龙抬头"),
    festival(5, 5, "端午"),
    festival(7, 7, "七夕"),
    festival(7, 15, "中元"),
    festival(8, 15, "中秋"),
    festival(9, 9, "重阳"),
    festival(12, 8, "腊八"),
    festival(12, 23, "小年"),
];

/// Tomb-sweeping festival name.
pub const QINGMING_FESTIVAL: &str = "清明节";
/// Mother's day: second Sunday of May.
pub const MOTHERS_DAY: &str = "母亲节";
/// Father's day: third Sunday of June.
pub const FATHERS_DAY: &str = "父亲节";

/// The two solar terms approximated within one civil month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolarTermWindow {
    /// Civil month (1–12).
    pub month: u8,
    /// Anchor day of the first term.
    pub first_anchor: u8,
    /// Anchor day of the second term.
    pub second_anchor: u8,
    /// Name of the first term.
    pub first_term: &'static str,
    /// Name of the second term.
    pub second_term: &'static str,
}

const fn window(
    month: u8,
    first_anchor: u8,
    second_anchor: u8,
    first_term: &'static str,
    second_term: &'static str,
) -> SolarTermWindow {
    SolarTermWindow {
        month,
        first_anchor,
        second_anchor,
        first_term,
        second_term,
    }
}

/// Days either side of an anchor that still carry the term name.
pub const SOLAR_TERM_TOLERANCE: u8 = 1;

/// Anchor days of the 24 solar terms, two per civil month.
pub const SOLAR_TERM_WINDOWS: [SolarTermWindow; 12] = [
    window(1, 5, 20, "小寒", "大寒"),
    window(2, 4, 19, "立春", "雨水"),
    window(3, 6, 21, "惊蛰", "春分"),
    window(4, 5, 20, "清明", "谷雨"),
    window(5, 6, 21, "立夏", "小满"),
    window(6, 6, 22, "芒种", "夏至"),
    window(7, 7, 23, "小暑", "大暑"),
    window(8, 8, 23, "立秋", "处暑"),
    window(9, 8, 23, "白露", "秋分"),
    window(10, 8, 23, "寒露", "霜降"),
    window(11, 7, 22, "立冬", "小雪"),
    window(12, 7, 22, "大雪", "冬至"),
];

/// Festival on the fixed civil date of `date`, if any.
pub fn civil_festival(date: Date) -> Option<&'static str> {
    let (_, month, day) = date.ymd();
    CIVIL_FESTIVALS
        .iter()
        .find(|f| f.month == month && f.day == day)
        .map(|f| f.name)
}

/// Festival on the fixed lunisolar (folded month, day), if any.
pub fn lunar_festival(month: u8, day: u8) -> Option<&'static str> {
    LUNAR_FESTIVALS
        .iter()
        .find(|f| f.month == month && f.day == day)
        .map(|f| f.name)
}

/// Day of April taken as the tomb-sweeping festival in `year`.
pub fn qingming_day(year: u16) -> u8 {
    ((year % 4) as f64 * 0.2422 + 4.81) as u8
}

/// Floating civil festival on `date`: tomb-sweeping day, mother's day, or
/// father's day.
pub fn floating_civil_festival(date: Date) -> Option<&'static str> {
    let (year, month, day) = date.ymd();
    let nth_sunday = |n| Date::nth_weekday(n, Weekday::Sunday, year, month).ok();
    match month {
        4 if (4..=6).contains(&day) && day == qingming_day(year) => Some(QINGMING_FESTIVAL),
        5 if nth_sunday(2) == Some(date) => Some(MOTHERS_DAY),
        6 if nth_sunday(3) == Some(date) => Some(FATHERS_DAY),
        _ => None,
    }
}

/// Approximate solar term on `date`, if the day is within
/// [`SOLAR_TERM_TOLERANCE`] of one of its month's anchors.  The first anchor
/// wins when both are in reach.
pub fn solar_term(date: Date) -> Option<&'static str> {
    let (_, month, day) = date.ymd();
    let w = SOLAR_TERM_WINDOWS.iter().find(|w| w.month == month)?;
    if day.abs_diff(w.first_anchor) <= SOLAR_TERM_TOLERANCE {
        Some(w.first_term)
    } else if day.abs_diff(w.second_anchor) <= SOLAR_TERM_TOLERANCE {
        Some(w.second_term)
    } else {
        None
    }
}
