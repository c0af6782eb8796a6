//! Common types and utilities.

/// Web authentication error type.
pub use crate::error::Error;

/// Web authentication result type.
pub type Result<T> = core::result::Result<T, Error>;
