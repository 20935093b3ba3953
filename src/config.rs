//! Tree configuration.
//!
//! Loaded from JSON, e.g.
//!
//! ```json
//! { "hash": "keccak256", "max_leaves": 1000000 }
//! ```
//!
//! Every field is optional; an empty object yields the defaults.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::hasher::HashAlgorithm;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TreeConfig {
    /// Pair hash used for reduction, proofs and verification.
    pub hash: HashAlgorithm,
    /// Soft limit on the number of leaves. Exceeding it logs a warning; the
    /// append still succeeds.
    pub max_leaves: Option<u64>,
}

impl TreeConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    #[cfg(feature = "std")]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn with_hash(mut self, hash: HashAlgorithm) -> Self {
        self.hash = hash;
        self
    }

    pub fn with_max_leaves(mut self, max_leaves: u64) -> Self {
        self.max_leaves = Some(max_leaves);
        self
    }
}
