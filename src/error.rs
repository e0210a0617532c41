//! Error types for rasterkit operations.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in rasterkit operations.
///
/// The taxonomy is narrow because every algorithm is a pure numeric
/// transform: nothing is retried, nothing is fatal, each failure is a
/// value returned to the immediate caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Circle radius must be a positive integer.
    #[error("Invalid radius: {radius} (must be > 0)")]
    InvalidRadius {
        /// The rejected radius value.
        radius: i32,
    },

    /// Unrecognized line algorithm tag.
    #[error("Unknown line algorithm: {0:?}")]
    UnknownAlgorithm(String),
}
