//! # al-time
//!
//! Civil date, weekday, and year-month types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type.
pub mod date;

/// `YearMonth` — the unit of grid generation and navigation.
pub mod month;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::{days_in_month, is_leap_year, Date};
pub use month::YearMonth;
pub use weekday::Weekday;
