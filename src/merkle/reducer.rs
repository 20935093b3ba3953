//! Level-by-level tree reduction.

use alloc::vec::Vec;
use tracing::trace;

use crate::hasher::PairHasher;
use crate::types::{Node, ZERO_ROOT};

/// Fold one level into the next.
///
/// Adjacent pairs `(level[2k], level[2k + 1])` are combined. When the level
/// has odd length its last node has no partner and is carried up unchanged,
/// never hashed with itself or padded.
pub fn next_level<H: PairHasher>(hasher: &H, level: &[Node]) -> Vec<Node> {
    let mut next = Vec::with_capacity(level.len().div_ceil(2));
    let mut pairs = level.chunks_exact(2);
    for pair in &mut pairs {
        next.push(hasher.combine(&pair[0], &pair[1]));
    }
    if let [carry] = pairs.remainder() {
        next.push(*carry);
    }
    next
}

/// Reduce a leaf sequence to its root.
///
/// A single leaf is its own root. The empty sequence reduces to [`ZERO_ROOT`].
pub fn reduce<H: PairHasher>(hasher: &H, leaves: &[Node]) -> Node {
    match leaves {
        [] => ZERO_ROOT,
        [only] => *only,
        _ => {
            let mut level = next_level(hasher, leaves);
            let mut depth = 1usize;
            while level.len() > 1 {
                trace!(depth, width = level.len(), "reducing level");
                level = next_level(hasher, &level);
                depth += 1;
            }
            level[0]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hasher::Keccak256Pair;
    use crate::utils::leaf_from_u64;

    fn leaves(n: u64) -> Vec<Node> {
        (1..=n).map(leaf_from_u64).collect()
    }

    #[test]
    fn test_empty_and_single() {
        let h = Keccak256Pair;
        assert_eq!(reduce(&h, &[]), ZERO_ROOT);
        let one = leaf_from_u64(77);
        assert_eq!(reduce(&h, &[one]), one);
    }

    #[test]
    fn test_two_leaves() {
        let h = Keccak256Pair;
        let l = leaves(2);
        assert_eq!(reduce(&h, &l), h.combine(&l[0], &l[1]));
    }

    #[test]
    fn test_three_leaves_carry() {
        let h = Keccak256Pair;
        let l = leaves(3);
        let expected = h.combine(&h.combine(&l[0], &l[1]), &l[2]);
        assert_eq!(reduce(&h, &l), expected);
    }

    #[test]
    fn test_five_leaves_carry_twice() {
        // Level sizes 5 -> 3 -> 2 -> 1; leaf 4 is carried up two levels.
        let h = Keccak256Pair;
        let l = leaves(5);
        let ab = h.combine(&l[0], &l[1]);
        let cd = h.combine(&l[2], &l[3]);
        let expected = h.combine(&h.combine(&ab, &cd), &l[4]);
        assert_eq!(reduce(&h, &l), expected);
    }

    #[test]
    fn test_six_leaves_carry_at_upper_level() {
        // Level sizes 6 -> 3 -> 2 -> 1; only the second level is odd.
        let h = Keccak256Pair;
        let l = leaves(6);
        let ab = h.combine(&l[0], &l[1]);
        let cd = h.combine(&l[2], &l[3]);
        let ef = h.combine(&l[4], &l[5]);
        let expected = h.combine(&h.combine(&ab, &cd), &ef);
        assert_eq!(reduce(&h, &l), expected);
    }

    #[test]
    fn test_next_level_sizes() {
        let h = Keccak256Pair;
        for n in 1..20u64 {
            let l = leaves(n);
            assert_eq!(next_level(&h, &l).len() as u64, n.div_ceil(2));
        }
        let l = leaves(3);
        assert_eq!(next_level(&h, &l)[1], l[2]);
    }
}
