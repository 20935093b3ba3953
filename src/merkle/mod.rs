//! Merkle tree algorithms.
//!
//! All three passes operate on the raw leaf sequence and rebuild every level
//! from scratch. An odd-sized level carries its last node up unchanged.

pub mod proof;
pub mod reducer;
pub mod verifier;

pub use proof::build_proof;
pub use reducer::{next_level, reduce};
pub use verifier::verify;
