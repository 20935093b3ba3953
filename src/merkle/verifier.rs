//! Proof verification.

use crate::hasher::PairHasher;
use crate::types::Node;

/// Fold `leaf` with each sibling in order and compare the result with `root`.
///
/// No position information is consulted: the pair hash is commutative, so
/// only the order of `siblings` matters. A proof built for one index will
/// accept any leaf whose value equals the leaf at that index.
pub fn verify<H: PairHasher>(hasher: &H, leaf: &Node, siblings: &[Node], root: &Node) -> bool {
    let candidate = siblings
        .iter()
        .fold(*leaf, |acc, sibling| hasher.combine(&acc, sibling));
    candidate == *root
}
