//! Error types for Merkle registry operations.
//!
//! The tree itself has exactly one failure mode: referencing a leaf index that
//! has not been appended yet. Everything else (hashing, reduction) is total.

use alloc::string::String;
use thiserror::Error;

/// Errors raised by tree reads, proof generation and leaf verification.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// Requested index is at or beyond the current leaf count.
    #[error("Index out of bounds: index {index} >= leaf count {count}")]
    IndexOutOfBounds { index: u64, count: u64 },
}

impl TreeError {
    pub(crate) fn out_of_bounds(index: u64, count: u64) -> Self {
        Self::IndexOutOfBounds { index, count }
    }
}

/// Errors raised while loading a [`TreeConfig`](crate::config::TreeConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Malformed config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Unknown hash algorithm: {0}")]
    UnknownHashAlgorithm(String),
    #[cfg(feature = "std")]
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for tree operations.
pub type Result<T> = core::result::Result<T, TreeError>;
