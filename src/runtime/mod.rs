//! Shared, lock-protected access to a tree from async tasks.

pub mod shared;

pub use shared::SharedMerkleTree;
