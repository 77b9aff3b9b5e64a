//! # al-grid
//!
//! The 42-cell month grid, its header and clock-panel labels, and month
//! navigation.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `CalendarDay` — one grid cell.
pub mod day;

/// `CalendarGridGenerator` and `MonthView`.
pub mod generator;

/// Month titles and date lines.
pub mod labels;

/// `MonthNavigator`.
pub mod navigator;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use day::CalendarDay;
pub use generator::{CalendarGridGenerator, MonthView, GRID_CELLS};
pub use labels::{date_line, month_title};
pub use navigator::MonthNavigator;
