//! Append-only leaf storage.

use alloc::vec::Vec;

use crate::error::{Result, TreeError};
use crate::types::Node;

/// Ordered, append-only sequence of leaves. Insertion order is index order.
#[derive(Clone, Debug, Default)]
pub struct LeafStore {
    leaves: Vec<Node>,
}

impl LeafStore {
    pub fn new() -> Self {
        Self { leaves: Vec::new() }
    }

    /// Append `value` and return its index (the count before the append).
    pub fn append(&mut self, value: Node) -> u64 {
        let index = self.count();
        self.leaves.push(value);
        index
    }

    /// Get the leaf at `index`.
    pub fn get(&self, index: u64) -> Result<Node> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.leaves.get(i).copied())
            .ok_or_else(|| TreeError::out_of_bounds(index, self.count()))
    }

    pub fn count(&self) -> u64 {
        self.leaves.len() as u64
    }

    /// Borrow the full leaf sequence as reduction level 0.
    pub fn as_slice(&self) -> &[Node] {
        &self.leaves
    }

    /// Drop every leaf appended after `count`. Only used to undo an
    /// uncommitted append.
    pub(crate) fn rollback_to(&mut self, count: u64) {
        self.leaves.truncate(count as usize);
    }
}
