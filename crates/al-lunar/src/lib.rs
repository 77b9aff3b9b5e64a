//! # al-lunar
//!
//! Chinese lunisolar conversion, festival and solar-term tables, and the
//! short per-day annotations built from them.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `annotate` and `full_lunar_label`.
pub mod annotation;

/// Civil, floating, lunisolar festivals and solar-term windows.
pub mod festivals;

/// Lunisolar conversion table and `LunarDate`.
pub mod lunisolar;

/// Month and day names.
pub mod names;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use annotation::{annotate, full_lunar_label};
pub use lunisolar::LunarDate;
