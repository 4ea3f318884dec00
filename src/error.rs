//! Errors surfaced by this crate.
//!
//! The tree operations themselves never fail: duplicates, missing values and empty trees are all
//! handled as no-ops or sentinels. The only fallible entry point is parsing a tree from text.

use thiserror::Error;

/// Error type for building a [`Tree`][crate::Tree] from untrusted input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A token could not be turned into a tree value.
    #[error("invalid input {token:?} at position {position}: {reason}")]
    InvalidInput {
        /// Zero-based index of the offending token.
        position: usize,
        /// The token as it appeared in the input.
        token: String,
        /// Why the token was rejected.
        reason: String,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
