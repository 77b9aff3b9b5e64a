//! # almanac
//!
//! Month-grid calendar engine: lunisolar annotations, official holiday
//! classification, and the 42-cell month grid a calendar view draws.
//!
//! This crate is a **façade** that re-exports the workspace crates and adds
//! [`Almanac`], which wires them together once at process start.
//!
//! ## Quick start
//!
//! ```rust
//! use almanac::lunar::{annotate, full_lunar_label};
//! use almanac::time::Date;
//!
//! let mid_autumn = Date::from_ymd(2024, 9, 17).unwrap();
//! assert_eq!(annotate(mid_autumn), "中秋");
//! assert_eq!(full_lunar_label(mid_autumn), "农历2024年八月十五");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Errors, settings, and logging bootstrap.
pub use al_core as core;

/// Civil dates, weekdays, and year-months.
pub use al_time as time;

/// Lunisolar conversion and day annotations.
pub use al_lunar as lunar;

/// Holiday sources, cache, and classification.
pub use al_holidays as holidays;

/// Month grid generation and navigation.
pub use al_grid as grid;

mod app;

pub use app::Almanac;
