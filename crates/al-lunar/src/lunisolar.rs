//! Table-driven conversion from civil dates to the Chinese lunisolar
//! calendar.
//!
//! Each lunisolar year from 1901 to 2100 is packed into one word of
//! [`YEAR_INFO`]:
//!
//! * bits 0–3: number of the leap month (0 = no leap month);
//! * bits 4–15: month lengths, bit `0x8000 >> (m - 1)` set when month `m`
//!   has 30 days instead of 29;
//! * bit 16: set when the leap month has 30 days.
//!
//! The supported civil range is 1901-02-19 (the first day of lunisolar 1901)
//! through 2101-01-28 (the last day of lunisolar 2100).
//!
//! # Month indices
//!
//! Inside a year, months are counted by a 1-based *index* in which a leap
//! month takes its own slot right after the month it repeats.  In a year
//! with a leap sixth month, indices 1–6 are months one to six, index 7 is the
//! leap sixth month, and index 8 is the seventh month.  [`LunarDate::month`]
//! folds the index back onto the month number.

use al_core::errors::{Error, Result};
use al_time::Date;

use crate::names;

/// First lunisolar year covered by the table.
pub const MIN_YEAR: u16 = 1901;

/// Last lunisolar year covered by the table.
pub const MAX_YEAR: u16 = 2100;

/// Civil date of lunisolar 1901, first month, first day.
const EPOCH: (u16, u8, u8) = (1901, 2, 19);

/// Civil date of the last day of lunisolar 2100.
const LAST_DAY: (u16, u8, u8) = (2101, 1, 28);

#[rustfmt::skip]
const YEAR_INFO: [u32; 200] = [
    0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2, 0x04ae0, // 1901-1910
    0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977, 0x04970, // 1911-1920
    0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970, 0x06566, // 1921-1930
    0x0d4a0, 0x0ea50, 0x16a95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950, 0x0d4a0, // 1931-1940
    0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557, 0x06ca0, // 1941-1950
    0x0b550, 0x15355, 0x04da0, 0x0a5b0, 0x14573, 0x052b0, 0x0a9a8, 0x0e950, 0x06aa0, 0x0aea6, // 1951-1960
    0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0, 0x096d0, // 1961-1970
    0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b6a0, 0x195a6, 0x095b0, // 1971-1980
    0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570, 0x04af5, // 1981-1990
    0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x05ac0, 0x0ab60, 0x096d5, 0x092e0, 0x0c960, // 1991-2000
    0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5, 0x0a950, // 2001-2010
    0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930, 0x07954, // 2011-2020
    0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530, 0x05aa0, // 2021-2030
    0x076a3, 0x096d0, 0x04afb, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45, 0x0b5a0, // 2031-2040
    0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0, 0x14b63, // 2041-2050
    0x09370, 0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06b20, 0x1a6c4, 0x0aae0, 0x092e0, // 2051-2060
    0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0a6d0, 0x055d4, 0x052d0, // 2061-2070
    0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0, 0x0b273, // 2071-2080
    0x06930, 0x07337, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d160, 0x0e968, // 2081-2090
    0x0d520, 0x0daa0, 0x16aa6, 0x056d0, 0x04ae0, 0x0a9d4, 0x0a2d0, 0x0d150, 0x0f252, 0x0d520, // 2091-2100
];

fn year_info(year: u16) -> Option<u32> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Some(YEAR_INFO[(year - MIN_YEAR) as usize])
    } else {
        None
    }
}

/// First civil date with a lunisolar equivalent.
pub fn min_date() -> Date {
    let (y, m, d) = EPOCH;
    Date::from_ymd(y, m, d).unwrap_or(Date::MIN)
}

/// Last civil date with a lunisolar equivalent.
pub fn max_date() -> Date {
    let (y, m, d) = LAST_DAY;
    Date::from_ymd(y, m, d).unwrap_or(Date::MAX)
}

/// Number of the month repeated as a leap month in `year` (1–12), if any.
pub fn leap_month(year: u16) -> Option<u8> {
    match year_info(year)? & 0xf {
        0 => None,
        m => Some(m as u8),
    }
}

/// Month index occupied by the leap month of `year`, if any.
///
/// This is always one more than [`leap_month`].
pub fn leap_month_index(year: u16) -> Option<u8> {
    leap_month(year).map(|m| m + 1)
}

/// Length in days of ordinary month `month` (1–12) of `year`; 0 when the
/// year or month is unknown.
pub fn month_days(year: u16, month: u8) -> u8 {
    match year_info(year) {
        Some(info) if (1..=12).contains(&month) => {
            if info & (0x10000 >> month) != 0 {
                30
            } else {
                29
            }
        }
        _ => 0,
    }
}

/// Length in days of the leap month of `year`; 0 when there is none.
pub fn leap_month_days(year: u16) -> u8 {
    match (year_info(year), leap_month(year)) {
        (Some(info), Some(_)) => {
            if info & 0x10000 != 0 {
                30
            } else {
                29
            }
        }
        _ => 0,
    }
}

/// Number of months in `year`: 13 with a leap month, otherwise 12.
pub fn months_in_year(year: u16) -> u8 {
    if leap_month(year).is_some() {
        13
    } else {
        12
    }
}

/// Length in days of the month at `index` (1-based, leap month counted) of
/// `year`; 0 when out of range.
pub fn days_at_index(year: u16, index: u8) -> u8 {
    match leap_month_index(year) {
        Some(leap) if index == leap => leap_month_days(year),
        Some(leap) if index > leap => month_days(year, index - 1),
        _ => month_days(year, index),
    }
}

/// Total days of lunisolar `year`; 0 when unknown.
pub fn year_days(year: u16) -> u16 {
    (1..=months_in_year(year))
        .map(|i| days_at_index(year, i) as u16)
        .sum()
}

/// A date in the Chinese lunisolar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LunarDate {
    year: u16,
    month_index: u8,
    day: u8,
    leap_month_index: Option<u8>,
}

impl LunarDate {
    /// Convert a civil date.
    ///
    /// # Errors
    /// [`Error::Conversion`] if `date` lies outside
    /// [`min_date`]`..=`[`max_date`].
    pub fn from_date(date: Date) -> Result<Self> {
        let (first, last) = (min_date(), max_date());
        if date < first || date > last {
            return Err(Error::Conversion(format!(
                "{date} is outside the lunisolar range {first} to {last}"
            )));
        }

        let mut offset = date - first;
        let mut year = MIN_YEAR;
        loop {
            let days = year_days(year) as i32;
            if offset < days {
                break;
            }
            offset -= days;
            year += 1;
        }

        let mut month_index = 1u8;
        loop {
            let days = days_at_index(year, month_index) as i32;
            if offset < days {
                break;
            }
            offset -= days;
            month_index += 1;
        }

        Ok(LunarDate {
            year,
            month_index,
            day: offset as u8 + 1,
            leap_month_index: leap_month_index(year),
        })
    }

    /// Lunisolar year number.  Dates in January or February before the new
    /// year still belong to the previous one.
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Raw 1-based month index, counting the leap month as its own slot
    /// (1–13).
    pub fn month_index(&self) -> u8 {
        self.month_index
    }

    /// Index of the leap month in this date's year, if the year has one.
    pub fn leap_month_index(&self) -> Option<u8> {
        self.leap_month_index
    }

    /// Month number (1–12).  Indices at or past the leap month are folded
    /// down by one, so a leap month reports the number of the month it
    /// repeats.
    pub fn month(&self) -> u8 {
        match self.leap_month_index {
            Some(leap) if self.month_index >= leap => self.month_index - 1,
            _ => self.month_index,
        }
    }

    /// Day of the lunisolar month (1–30).
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Return `true` if this date falls in the leap month.
    pub fn is_leap_month(&self) -> bool {
        self.leap_month_index == Some(self.month_index)
    }
}

/// `农历{year}年[闰]{month}{day}`, e.g. `农历2017年闰六月初一`.
impl std::fmt::Display for LunarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "农历{}年{}{}{}",
            self.year,
            if self.is_leap_month() { "闰" } else { "" },
            names::month_name(self.month()),
            names::day_name(self.day)
        )
    }
}
