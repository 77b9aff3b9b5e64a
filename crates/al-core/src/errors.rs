//! Error types for almanac-rs.
//!
//! Every failure in the workspace is expressed through a single
//! `thiserror`-derived enum.  Three variants form the recoverable taxonomy of
//! the calendar engine: [`Error::Fetch`], [`Error::Parse`] and
//! [`Error::Conversion`].  None of them is ever fatal to a caller; the
//! services that produce them degrade to default answers instead.

use thiserror::Error;

/// The top-level error type used throughout almanac-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Precondition violated (raised by `ensure!`).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Civil date construction or arithmetic left the supported range.
    #[error("date error: {0}")]
    Date(String),

    /// Settings could not be loaded or failed validation.
    #[error("configuration error: {0}")]
    Config(String),

    /// The holiday data source could not be reached, timed out, or answered
    /// with a non-success status.
    #[error("holiday fetch for {year} failed: {reason}")]
    Fetch {
        /// The year whose dataset was requested.
        year: u16,
        /// Transport- or status-level description.
        reason: String,
    },

    /// The holiday payload was empty or malformed.
    #[error("holiday payload for {year} rejected: {reason}")]
    Parse {
        /// The year whose dataset was requested.
        year: u16,
        /// What was wrong with the payload.
        reason: String,
    },

    /// The date lies outside the supported lunisolar range.
    #[error("lunisolar conversion failed: {0}")]
    Conversion(String),
}

impl Error {
    /// Return `true` for the failures the engine absorbs locally: fetch,
    /// parse, and lunisolar conversion errors.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Fetch { .. } | Error::Parse { .. } | Error::Conversion(_)
        )
    }
}

/// Shorthand `Result` type used throughout almanac-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use al_core::{ensure, errors::Error};
/// fn month(m: u8) -> al_core::errors::Result<u8> {
///     ensure!((1..=12).contains(&m), "month {m} out of range");
///     Ok(m)
/// }
/// assert!(month(3).is_ok());
/// assert!(month(13).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}
