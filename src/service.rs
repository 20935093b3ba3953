//! The tree service: leaf store, derived root and the public operations.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use tracing::{debug, warn};

use crate::config::TreeConfig;
use crate::error::Result;
use crate::events::{TreeEvent, TreeObserver};
use crate::hasher::{HashAlgorithm, Keccak256Pair, PairHasher};
use crate::merkle::{build_proof, reduce, verify};
use crate::store::LeafStore;
use crate::types::{MerkleProof, Node, ZERO_ROOT};

/// Append-only Merkle tree.
///
/// The root is recomputed from the full leaf sequence after every append and
/// proofs are rebuilt from the full sequence on every request. `add_leaf`
/// takes `&mut self`; every other operation is read-only.
pub struct MerkleTree<H: PairHasher = Keccak256Pair> {
    store: LeafStore,
    root: Node,
    hasher: H,
    max_leaves: Option<u64>,
    observers: Vec<Box<dyn TreeObserver>>,
}

impl MerkleTree<Keccak256Pair> {
    /// Create an empty Keccak-256 tree.
    pub fn new() -> Self {
        Self::with_hasher(Keccak256Pair)
    }
}

impl Default for MerkleTree<Keccak256Pair> {
    fn default() -> Self {
        Self::new()
    }
}

impl MerkleTree<HashAlgorithm> {
    /// Create an empty tree using the hash algorithm named in `config`.
    pub fn from_config(config: &TreeConfig) -> Self {
        let mut tree = Self::with_hasher(config.hash);
        tree.max_leaves = config.max_leaves;
        tree
    }
}

impl<H: PairHasher> MerkleTree<H> {
    /// Create an empty tree with an explicit pair hasher.
    pub fn with_hasher(hasher: H) -> Self {
        Self {
            store: LeafStore::new(),
            root: ZERO_ROOT,
            hasher,
            max_leaves: None,
            observers: Vec::new(),
        }
    }

    /// Register an observer for `LeafAdded` / `RootUpdated` notifications.
    pub fn subscribe(&mut self, observer: impl TreeObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Append a leaf and return its index.
    ///
    /// The whole append is all-or-nothing: if anything unwinds before it
    /// completes (an observer panicking, say) the leaf is removed and the
    /// previous root restored.
    pub fn add_leaf(&mut self, value: Node) -> u64 {
        let mut tx = AppendTransaction::begin(self);
        let tree = tx.tree();

        let index = tree.store.append(value);
        tree.root = reduce(&tree.hasher, tree.store.as_slice());
        let root = tree.root;

        if let Some(max) = tree.max_leaves {
            if tree.store.count() > max {
                warn!(count = tree.store.count(), max, "leaf count exceeds configured maximum");
            }
        }

        tree.notify(&TreeEvent::LeafAdded { value, index });
        tree.notify(&TreeEvent::RootUpdated { root });
        tx.commit();

        debug!(index, root = %hex::encode(root), "leaf added");
        index
    }

    /// Check that `value` is the leaf at `index` under the current root.
    ///
    /// Returns `Ok(false)` on a mismatch; only an out-of-range index is an
    /// error.
    pub fn verify_leaf(&self, value: &Node, index: u64) -> Result<bool> {
        let proof = self.build_proof(index)?;
        let valid = verify(&self.hasher, value, proof.siblings(), &self.root);
        debug!(index, valid, "leaf verified");
        Ok(valid)
    }

    /// Build the inclusion proof for the leaf at `index`.
    pub fn build_proof(&self, index: u64) -> Result<MerkleProof> {
        build_proof(&self.hasher, self.store.as_slice(), index).inspect_err(|e| {
            warn!(error = %e, "proof requested for missing leaf");
        })
    }

    /// Verify an externally supplied proof against the current root.
    pub fn verify_proof(&self, value: &Node, proof: &MerkleProof) -> bool {
        proof.verify(value, &self.root, &self.hasher)
    }

    /// Current root; all zeroes while the tree is empty.
    pub fn merkle_root(&self) -> Node {
        self.root
    }

    pub fn leaf_count(&self) -> u64 {
        self.store.count()
    }

    pub fn get_leaf(&self, index: u64) -> Result<Node> {
        self.store.get(index)
    }

    pub fn leaves(&self) -> &[Node] {
        self.store.as_slice()
    }

    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    pub fn is_empty(&self) -> bool {
        self.store.count() == 0
    }

    fn notify(&mut self, event: &TreeEvent) {
        for observer in self.observers.iter_mut() {
            observer.on_event(event);
        }
    }
}

impl<H: PairHasher + fmt::Debug> fmt::Debug for MerkleTree<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MerkleTree")
            .field("leaf_count", &self.store.count())
            .field("root", &hex::encode(self.root))
            .field("hasher", &self.hasher)
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// Scoped all-or-nothing wrapper around one append.
///
/// Captures the leaf count and root on creation. Dropping it without
/// [`commit`](Self::commit) truncates the store and restores the root.
pub(crate) struct AppendTransaction<'a, H: PairHasher> {
    tree: &'a mut MerkleTree<H>,
    checkpoint_count: u64,
    checkpoint_root: Node,
    committed: bool,
}

impl<'a, H: PairHasher> AppendTransaction<'a, H> {
    fn begin(tree: &'a mut MerkleTree<H>) -> Self {
        let checkpoint_count = tree.store.count();
        let checkpoint_root = tree.root;
        Self {
            tree,
            checkpoint_count,
            checkpoint_root,
            committed: false,
        }
    }

    fn tree(&mut self) -> &mut MerkleTree<H> {
        &mut *self.tree
    }

    fn commit(mut self) {
        self.committed = true;
    }
}

impl<H: PairHasher> Drop for AppendTransaction<'_, H> {
    fn drop(&mut self) {
        if !self.committed {
            warn!(count = self.checkpoint_count, "append rolled back");
            self.tree.store.rollback_to(self.checkpoint_count);
            self.tree.root = self.checkpoint_root;
        }
    }
}
