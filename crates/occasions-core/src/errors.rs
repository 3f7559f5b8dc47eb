//! Error types for occasions-rs.
//!
//! The engine's string-facing surface (the resolver, the next-occurrence
//! utility) is deliberately infallible: unrecognised occasions resolve to
//! `None` and malformed date-like strings pass through unchanged.  `Error`
//! is reserved for contract violations in the typed layer — an invalid
//! year/month/day triple, date arithmetic leaving the supported range.

use thiserror::Error;

/// The error type used throughout occasions-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Date construction or arithmetic error.
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument to a typed API.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout occasions-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::InvalidArgument(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use occasions_core::ensure;
/// fn month(m: u8) -> occasions_core::errors::Result<u8> {
///     ensure!((1..=12).contains(&m), "month {m} out of range [1, 12]");
///     Ok(m)
/// }
/// assert!(month(6).is_ok());
/// assert!(month(13).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Date(...))` immediately.
///
/// # Example
/// ```
/// use occasions_core::fail;
/// fn before_epoch() -> occasions_core::errors::Result<()> {
///     fail!("serial number must be positive");
/// }
/// assert!(before_epoch().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Date(format!($($msg)*)))
    };
}
