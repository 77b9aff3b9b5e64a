//! # al-holidays
//!
//! Official holiday schedule, fetched per year from a remote API and cached
//! in memory.  Classification never fails: a missing or broken year falls
//! back to "weekends are rest days".

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Year-keyed record cache.
pub mod cache;

/// `HolidayType`, `HolidayRecord`, and payload parsing.
pub mod record;

/// `HolidayService` — fetch, preload, and classify.
pub mod service;

/// `HolidaySource` trait with HTTP and in-memory implementations.
pub mod source;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use record::{parse_year_payload, HolidayRecord, HolidayType, YearRecords};
pub use service::HolidayService;
pub use source::{HolidaySource, HttpHolidaySource, StaticHolidaySource};
