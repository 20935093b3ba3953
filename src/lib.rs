//! # Merkle Registry
//!
//! Append-only Merkle tree over 32-byte leaves with compact inclusion proofs.
//!
//! The root is derived by folding the full leaf sequence level by level with
//! a commutative pair hash, `H(min(a, b) || max(a, b))` (Keccak-256 by
//! default). An odd-sized level carries its last node up unchanged instead of
//! padding it. The whole tree is recomputed on every append and on every
//! proof request.
//!
//! ## Quick Start
//!
//! ```rust
//! use merkle_registry::{leaf_from_u64, MerkleTree};
//!
//! let mut tree = MerkleTree::new();
//! for n in 1..=3 {
//!     tree.add_leaf(leaf_from_u64(n));
//! }
//!
//! assert!(tree.verify_leaf(&leaf_from_u64(2), 1).unwrap());
//! assert!(!tree.verify_leaf(&leaf_from_u64(3), 1).unwrap());
//! assert!(tree.verify_leaf(&leaf_from_u64(2), 3).is_err());
//! ```
//!
//! ## Proofs are not bound to an index
//!
//! [`verify`] folds a leaf with the supplied siblings and compares against the
//! root. It never looks at positions, so any proof that folds a value to the
//! root is accepted. Use [`MerkleTree::verify_leaf`], which builds the proof
//! for the index itself, when the index matters.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

// Module declarations
pub mod config;
pub mod error;
pub mod events;
pub mod hasher;
pub mod merkle;
pub mod service;
pub mod store;
pub mod types;
pub mod utils;

#[cfg(feature = "runtime")]
pub mod runtime;

// Re-export core functionality
pub use merkle::{build_proof, reduce, verify};
pub use service::MerkleTree;
pub use store::LeafStore;

// Re-export utility functions
pub use utils::{hash_leaf, keccak256, leaf_from_u128, leaf_from_u64, parse_hex32, to_hex};

// Re-export types
pub use config::TreeConfig;
pub use error::{ConfigError, Result, TreeError};
#[cfg(feature = "std")]
pub use events::EventRecorder;
pub use events::{TreeEvent, TreeObserver};
pub use hasher::{HashAlgorithm, Keccak256Pair, PairHasher, Sha256Pair, Sha3Pair};
pub use types::{MerkleProof, Node, ZERO_ROOT};

#[cfg(feature = "runtime")]
pub use runtime::SharedMerkleTree;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
