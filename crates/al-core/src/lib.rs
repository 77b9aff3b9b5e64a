//! # al-core
//!
//! Core definitions shared by every almanac-rs crate.
//!
//! This crate provides the foundational building blocks the other crates in
//! the workspace lean on – the error hierarchy, the `ensure!` macro, process settings,
//! and the `tracing` subscriber bootstrap.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// `tracing` subscriber installation.
pub mod logging;

/// Process settings (holiday API endpoint, display mode, log filter).
pub mod settings;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::{DisplayMode, DisplaySettings, HolidayApiSettings, LoggingSettings, Settings};
