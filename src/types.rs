//! Core value types for the Merkle registry.

use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::hasher::PairHasher;

/// A 32-byte tree node: a leaf value, an interior digest or the root.
pub type Node = [u8; 32];

/// Root of the empty tree.
pub const ZERO_ROOT: Node = [0u8; 32];

/// Inclusion proof: the ordered siblings needed to fold a leaf up to the root.
///
/// A proof carries no index. Whatever sequence folds a leaf value to the
/// stored root is accepted, so binding a check to a particular index is the
/// caller's job (see [`MerkleTree::verify_leaf`](crate::service::MerkleTree::verify_leaf)).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerkleProof {
    /// Sibling digests from the leaf level upwards
    pub(crate) siblings: Vec<Node>,
}

impl MerkleProof {
    /// Create a proof from an ordered sibling list.
    pub fn new(siblings: Vec<Node>) -> Self {
        Self { siblings }
    }

    /// Get the sibling digests.
    pub fn siblings(&self) -> &[Node] {
        &self.siblings
    }

    /// Number of levels in which the proven node had a partner.
    pub fn len(&self) -> usize {
        self.siblings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.siblings.is_empty()
    }

    pub fn into_inner(self) -> Vec<Node> {
        self.siblings
    }

    /// Fold `leaf` through this proof and compare against `root`.
    pub fn verify<H: PairHasher>(&self, leaf: &Node, root: &Node, hasher: &H) -> bool {
        crate::merkle::verifier::verify(hasher, leaf, &self.siblings, root)
    }
}

impl From<Vec<Node>> for MerkleProof {
    fn from(siblings: Vec<Node>) -> Self {
        Self::new(siblings)
    }
}
