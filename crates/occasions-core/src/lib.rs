//! # occasions-core
//!
//! Foundational types for the occasions-rs workspace: the error enum,
//! the `Result` alias, the `ensure!` macro, and the process-wide
//! `Settings` (evaluation-date override).

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and the `ensure!` macro.
pub mod errors;

/// Global library settings (evaluation date).
pub mod settings;

pub use errors::{Error, Result};
pub use settings::Settings;
