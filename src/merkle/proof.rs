//! Inclusion proof construction.

use alloc::vec::Vec;
use tracing::trace;

use crate::error::{Result, TreeError};
use crate::hasher::PairHasher;
use crate::merkle::reducer::next_level;
use crate::types::{MerkleProof, Node};

/// Build the sibling path for the leaf at `index`.
///
/// Replays the reduction of [`reduce`](crate::merkle::reduce) while tracking
/// the node's position. At each level:
/// - odd position: the left neighbour is recorded;
/// - even position with a right neighbour: that neighbour is recorded;
/// - even position on the last slot of an odd level: nothing is recorded,
///   the node is carried up alone.
///
/// The proof is therefore shorter than the tree depth whenever the tracked
/// node is carried through at least one level.
pub fn build_proof<H: PairHasher>(hasher: &H, leaves: &[Node], index: u64) -> Result<MerkleProof> {
    let count = leaves.len() as u64;
    if index >= count {
        return Err(TreeError::out_of_bounds(index, count));
    }

    let mut siblings = Vec::new();
    let mut position = index as usize;
    let mut level: Vec<Node> = leaves.to_vec();

    while level.len() > 1 {
        if position % 2 == 1 {
            siblings.push(level[position - 1]);
        } else if let Some(right) = level.get(position + 1) {
            siblings.push(*right);
        } else {
            trace!(position, width = level.len(), "carry-up, no sibling");
        }
        position /= 2;
        level = next_level(hasher, &level);
    }

    Ok(MerkleProof::new(siblings))
}
