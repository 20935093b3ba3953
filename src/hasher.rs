//! Commutative pair hashing.
//!
//! `combine(a, b) = H(min(a, b) || max(a, b))`, where the two nodes are
//! ordered as big-endian 256-bit integers. Byte-wise lexicographic order on
//! `[u8; 32]` is exactly that ordering. Because the pair is sorted before
//! hashing, reduction, proof building and verification never need to know
//! which side a sibling sat on.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use sha2::Sha256;
use sha3::digest::consts::U32;
use sha3::{Digest, Keccak256, Sha3_256};

use crate::error::ConfigError;
use crate::types::Node;

/// Two-input hash combinator used uniformly by reduction, proofs and verification.
pub trait PairHasher {
    /// Hash the ordered concatenation `min(a, b) || max(a, b)`.
    fn combine(&self, a: &Node, b: &Node) -> Node;
}

#[inline]
fn sorted_pair_digest<D: Digest<OutputSize = U32>>(a: &Node, b: &Node) -> Node {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let mut hasher = D::new();
    hasher.update(lo);
    hasher.update(hi);
    hasher.finalize().into()
}

/// Keccak-256 pair hasher. Bit-compatible with deployed sorted-pair trees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Keccak256Pair;

impl PairHasher for Keccak256Pair {
    fn combine(&self, a: &Node, b: &Node) -> Node {
        sorted_pair_digest::<Keccak256>(a, b)
    }
}

/// SHA3-256 (FIPS 202) pair hasher.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sha3Pair;

impl PairHasher for Sha3Pair {
    fn combine(&self, a: &Node, b: &Node) -> Node {
        sorted_pair_digest::<Sha3_256>(a, b)
    }
}

/// SHA-256 pair hasher.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sha256Pair;

impl PairHasher for Sha256Pair {
    fn combine(&self, a: &Node, b: &Node) -> Node {
        sorted_pair_digest::<Sha256>(a, b)
    }
}

/// Hash function selected at runtime, e.g. from a config file.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HashAlgorithm {
    #[default]
    #[serde(rename = "keccak256")]
    Keccak256,
    #[serde(rename = "sha3-256")]
    Sha3_256,
    #[serde(rename = "sha256")]
    Sha256,
}

impl HashAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::Keccak256 => "keccak256",
            HashAlgorithm::Sha3_256 => "sha3-256",
            HashAlgorithm::Sha256 => "sha256",
        }
    }
}

impl PairHasher for HashAlgorithm {
    fn combine(&self, a: &Node, b: &Node) -> Node {
        match self {
            HashAlgorithm::Keccak256 => Keccak256Pair.combine(a, b),
            HashAlgorithm::Sha3_256 => Sha3Pair.combine(a, b),
            HashAlgorithm::Sha256 => Sha256Pair.combine(a, b),
        }
    }
}

impl FromStr for HashAlgorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "keccak256" | "keccak-256" => Ok(HashAlgorithm::Keccak256),
            "sha3-256" | "sha3_256" | "sha3" => Ok(HashAlgorithm::Sha3_256),
            "sha256" | "sha-256" => Ok(HashAlgorithm::Sha256),
            other => Err(ConfigError::UnknownHashAlgorithm(other.into())),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{keccak256, leaf_from_u64};

    #[test]
    fn test_combine_is_commutative() {
        let a = leaf_from_u64(1);
        let b = leaf_from_u64(2);
        for algo in [HashAlgorithm::Keccak256, HashAlgorithm::Sha3_256, HashAlgorithm::Sha256] {
            assert_eq!(algo.combine(&a, &b), algo.combine(&b, &a));
        }
    }

    #[test]
    fn test_keccak_combine_sorts_then_hashes() {
        let small = leaf_from_u64(1);
        let big = leaf_from_u64(2);
        let mut concat = [0u8; 64];
        concat[..32].copy_from_slice(&small);
        concat[32..].copy_from_slice(&big);
        assert_eq!(Keccak256Pair.combine(&big, &small), keccak256(&concat));
    }

    #[test]
    fn test_ordering_is_numeric_big_endian() {
        // 0x01_00 > 0x00_ff numerically, even though the low byte is smaller.
        let a = leaf_from_u64(0x0100);
        let b = leaf_from_u64(0x00ff);
        let mut concat = [0u8; 64];
        concat[..32].copy_from_slice(&b);
        concat[32..].copy_from_slice(&a);
        assert_eq!(Keccak256Pair.combine(&a, &b), keccak256(&concat));
    }

    #[test]
    fn test_combine_with_self() {
        let a = leaf_from_u64(9);
        let mut concat = [0u8; 64];
        concat[..32].copy_from_slice(&a);
        concat[32..].copy_from_slice(&a);
        assert_eq!(Keccak256Pair.combine(&a, &a), keccak256(&concat));
    }

    #[test]
    fn test_algorithms_disagree() {
        let a = leaf_from_u64(1);
        let b = leaf_from_u64(2);
        assert_ne!(Keccak256Pair.combine(&a, &b), Sha3Pair.combine(&a, &b));
        assert_ne!(Sha3Pair.combine(&a, &b), Sha256Pair.combine(&a, &b));
    }

    #[test]
    fn test_hash_algorithm_from_str() {
        assert_eq!("keccak256".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Keccak256);
        assert_eq!("SHA3-256".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha3_256);
        assert_eq!("sha256".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha256);
        assert!(matches!(
            "md5".parse::<HashAlgorithm>(),
            Err(ConfigError::UnknownHashAlgorithm(_))
        ));
    }
}
