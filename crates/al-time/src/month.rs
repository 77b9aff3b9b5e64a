//! `YearMonth` — a civil month of a given year, the unit the month grid is
//! generated and navigated in.

use al_core::errors::{Error, Result};

use crate::date::{days_in_month, Date};

/// A (year, month) pair with the month in 1–12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: u16,
    month: u8,
}

impl YearMonth {
    /// First constructible year.
    pub const MIN_YEAR: u16 = 1;

    /// Last constructible year.  [`Date`] runs one year further, so every
    /// month's grid, trailing cells included, stays in range.
    pub const MAX_YEAR: u16 = 9999;

    /// Construct, validating the month and the supported year range.
    pub fn new(year: u16, month: u8) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [{}, {}]",
                Self::MIN_YEAR,
                Self::MAX_YEAR
            )));
        }
        Ok(Self { year, month })
    }

    /// The month containing `date`.  Dates in year 10000 give a month
    /// past [`YearMonth::MAX_YEAR`] that compares and displays normally.
    pub fn of(date: Date) -> Self {
        let (year, month, _) = date.ymd();
        Self { year, month }
    }

    /// Year.
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Month number (1 = January … 12 = December).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Number of days in this month (28–31).
    pub fn days(&self) -> u8 {
        days_in_month(self.year, self.month)
    }

    /// First day of the month.
    pub fn first_day(&self) -> Date {
        // Validated on construction, day 1 always exists.
        Date::from_ymd(self.year, self.month, 1).unwrap_or(Date::MIN)
    }

    /// Last day of the month.
    pub fn last_day(&self) -> Date {
        self.first_day().end_of_month()
    }

    /// Shift by `n` months (negative moves backward), crossing year
    /// boundaries as needed.
    pub fn shift(&self, n: i32) -> Result<Self> {
        let total = self.year as i32 * 12 + (self.month as i32 - 1) + n;
        let year = total.div_euclid(12);
        let month = (total.rem_euclid(12) + 1) as u8;
        let year = u16::try_from(year)
            .map_err(|_| Error::Date(format!("year {year} out of range")))?;
        YearMonth::new(year, month)
    }

    /// The preceding month.
    pub fn previous(&self) -> Result<Self> {
        self.shift(-1)
    }

    /// The following month.
    pub fn next(&self) -> Result<Self> {
        self.shift(1)
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
