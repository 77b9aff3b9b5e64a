//! `Date` type.
//!
//! Dates are stored as a serial number of days.
//!
//! # Serial number convention
//! * Serial 1 = January 1, year 1 of the proleptic Gregorian calendar (a
//!   Monday), the same day count as `chrono`'s `num_days_from_ce`.
//! * The valid date range is 0001-01-01 to 10000-12-31.  Months are only
//!   constructible up to 9999-12 (see `YearMonth`); the extra year holds the
//!   trailing grid cells of December 9999.
//!
//! Calendar decomposition is delegated to `chrono`.  The text form is
//! ISO 8601 (`yyyy-MM-dd`, `+yyyyy-MM-dd` past year 9999), which is also the
//! key format of the holiday datasets.

use al_core::ensure;
use al_core::errors::{Error, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::weekday::Weekday;

/// A civil (proleptic Gregorian) date represented as a serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Minimum valid date: January 1, year 1.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 10000.
    pub const MAX: Date = Date(3_652_425);

    /// First supported year.
    pub const MIN_YEAR: u16 = 1;

    /// Last supported year.
    pub const MAX_YEAR: u16 = 10_000;

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    ///
    /// Returns an error if `serial` lies outside [`Date::MIN`]`..=`[`Date::MAX`].
    pub fn from_serial(serial: i32) -> Result<Self> {
        if serial < Self::MIN.0 || serial > Self::MAX.0 {
            return Err(Error::Date(format!(
                "serial {serial} out of range [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(Date(serial))
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [{}, {}]",
                Self::MIN_YEAR,
                Self::MAX_YEAR
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let naive = NaiveDate::from_ymd_opt(year as i32, month as u32, day as u32).ok_or_else(|| {
            Error::Date(format!(
                "day {day} out of range [1, {}] for {year}-{month:02}",
                days_in_month(year, month)
            ))
        })?;
        Ok(Date(naive.num_days_from_ce()))
    }

    /// Parse an ISO 8601 calendar date (`yyyy-MM-dd`).
    pub fn parse_iso(text: &str) -> Result<Self> {
        let naive = NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
            .map_err(|e| Error::Date(format!("'{text}' is not a yyyy-MM-dd date: {e}")))?;
        Date::try_from(naive)
    }

    /// The local calendar date of the host clock.
    pub fn today() -> Result<Self> {
        chrono::Local::now().date_naive().try_into()
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year (1–10000).
    pub fn year(&self) -> u16 {
        self.ymd().0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        self.ymd().1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        self.ymd().2
    }

    /// Return `(year, month, day)`.
    pub fn ymd(&self) -> (u16, u8, u8) {
        let naive = self.naive();
        (naive.year() as u16, naive.month() as u8, naive.day() as u8)
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // serial 1 → Monday, serial 2 → Tuesday, …
        let w = ((self.0 - 1).rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(w).unwrap_or(Weekday::Monday)
    }

    /// Return `true` if this date is a Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        self.weekday().is_weekend()
    }

    /// Format as `yyyy-MM-dd`.
    pub fn to_iso(&self) -> String {
        self.naive().format("%Y-%m-%d").to_string()
    }

    fn naive(&self) -> NaiveDate {
        // Every serial in range maps to a chrono date.
        NaiveDate::from_num_days_from_ce_opt(self.0).unwrap_or(NaiveDate::MIN)
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        self.0
            .checked_add(n)
            .and_then(|serial| Date::from_serial(serial).ok())
            .ok_or_else(|| {
                Error::Date(format!("date arithmetic: {self} {n:+} days is out of range"))
            })
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let (y, m, d) = self.ymd();
        Date(self.0 + (days_in_month(y, m) - d) as i32)
    }

    /// Return the *n*-th occurrence of `weekday` in the month of `year`/`month`.
    ///
    /// For example, `nth_weekday(2, Weekday::Sunday, 2024, 5)` returns the
    /// second Sunday of May 2024 (2024-05-12).
    ///
    /// # Errors
    /// Returns an error if the month is out of range or if `n` is zero or
    /// larger than the number of such weekdays in the month.
    pub fn nth_weekday(n: u8, weekday: Weekday, year: u16, month: u8) -> Result<Self> {
        ensure!((1..=5).contains(&n), "nth_weekday: n must be in [1, 5], got {n}");
        let first = Date::from_ymd(year, month, 1)?;
        let first_wd = first.weekday().ordinal();
        let target_wd = weekday.ordinal();
        let skip = ((target_wd as i32 - first_wd as i32).rem_euclid(7)) as u8;
        let day = 1 + skip + 7 * (n - 1);
        if day > days_in_month(year, month) {
            return Err(Error::Date(format!(
                "nth_weekday: {n}-th {weekday} does not exist in {year}-{month:02}"
            )));
        }
        Date::from_ymd(year, month, day)
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── chrono interop ────────────────────────────────────────────────────────────

impl TryFrom<NaiveDate> for Date {
    type Error = Error;

    fn try_from(value: NaiveDate) -> Result<Self> {
        Date::from_serial(value.num_days_from_ce())
            .map_err(|_| Error::Date(format!("{value} is outside the supported date range")))
    }
}

impl From<Date> for NaiveDate {
    fn from(value: Date) -> Self {
        value.naive()
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_iso())
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({})", self.to_iso())
    }
}

impl std::str::FromStr for Date {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Date::parse_iso(s)
    }
}

// ── serde ─────────────────────────────────────────────────────────────────────

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_iso())
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Date::parse_iso(&text).map_err(serde::de::Error::custom)
    }
}

// ── Calendar helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year; 0 for an invalid month.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
