//! Thread-safe handle for serving one tree to many tasks.
//!
//! The core [`MerkleTree`] relies on `&mut self` for its single-writer rule.
//! Once it is shared, that rule is enforced with a tokio `RwLock`: appends
//! hold the write lock for the whole append transaction, while reads,
//! proof generation and verification hold the read lock, so no pass ever
//! observes a store mutated mid-scan.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::error::Result;
use crate::events::TreeObserver;
use crate::hasher::{Keccak256Pair, PairHasher};
use crate::service::MerkleTree;
use crate::types::{MerkleProof, Node};

pub struct SharedMerkleTree<H: PairHasher = Keccak256Pair> {
    inner: Arc<RwLock<MerkleTree<H>>>,
}

impl<H: PairHasher> Clone for SharedMerkleTree<H> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<H: PairHasher> SharedMerkleTree<H> {
    pub fn new(tree: MerkleTree<H>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(tree)),
        }
    }

    pub async fn subscribe(&self, observer: impl TreeObserver + 'static) {
        self.inner.write().await.subscribe(observer);
    }

    pub async fn add_leaf(&self, value: Node) -> u64 {
        self.inner.write().await.add_leaf(value)
    }

    pub async fn verify_leaf(&self, value: &Node, index: u64) -> Result<bool> {
        self.inner.read().await.verify_leaf(value, index)
    }

    pub async fn build_proof(&self, index: u64) -> Result<MerkleProof> {
        self.inner.read().await.build_proof(index)
    }

    pub async fn merkle_root(&self) -> Node {
        self.inner.read().await.merkle_root()
    }

    pub async fn leaf_count(&self) -> u64 {
        self.inner.read().await.leaf_count()
    }

    pub async fn get_leaf(&self, index: u64) -> Result<Node> {
        self.inner.read().await.get_leaf(index)
    }

    /// Root and proof taken under one read lock, so the two always match.
    pub async fn snapshot_proof(&self, index: u64) -> Result<(Node, MerkleProof)> {
        let tree = self.inner.read().await;
        let proof = tree.build_proof(index)?;
        Ok((tree.merkle_root(), proof))
    }
}

impl Default for SharedMerkleTree<Keccak256Pair> {
    fn default() -> Self {
        Self::new(MerkleTree::new())
    }
}
