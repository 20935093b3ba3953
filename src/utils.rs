//! Utility functions for building and printing leaves.

use alloc::string::String;
use sha3::{Digest, Keccak256};

use crate::types::Node;

/// Keccak-256 hash helper.
pub fn keccak256(data: &[u8]) -> Node {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Turn an arbitrary record into a leaf value: `keccak256(data)`.
pub fn hash_leaf(data: &[u8]) -> Node {
    keccak256(data)
}

/// Encode `n` as a 32-byte big-endian leaf.
pub fn leaf_from_u64(n: u64) -> Node {
    let mut leaf = [0u8; 32];
    leaf[24..].copy_from_slice(&n.to_be_bytes());
    leaf
}

/// Encode `n` as a 32-byte big-endian leaf.
pub fn leaf_from_u128(n: u128) -> Node {
    let mut leaf = [0u8; 32];
    leaf[16..].copy_from_slice(&n.to_be_bytes());
    leaf
}

/// Parse a 64-digit hex string (optionally `0x`-prefixed) into a node.
pub fn parse_hex32(s: &str) -> Result<Node, hex::FromHexError> {
    let s = s.trim();
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    let mut out = [0u8; 32];
    hex::decode_to_slice(digits, &mut out)?;
    Ok(out)
}

/// Format a node as `0x`-prefixed lowercase hex.
pub fn to_hex(node: &Node) -> String {
    let mut out = String::with_capacity(66);
    out.push_str("0x");
    out.push_str(&hex::encode(node));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keccak256_empty_input() {
        // Well-known Keccak-256 digest of the empty string.
        let expected = "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470";
        let expected = parse_hex32(expected).unwrap();
        assert_eq!(keccak256(b""), expected);
    }

    #[test]
    fn test_leaf_from_u64_is_big_endian() {
        let leaf = leaf_from_u64(0x0102);
        assert_eq!(leaf[30], 0x01);
        assert_eq!(leaf[31], 0x02);
        assert!(leaf[..30].iter().all(|b| *b == 0));
        assert_eq!(leaf_from_u128(0x0102), leaf);
    }

    #[test]
    fn test_hex_round_trip_with_prefix() {
        let leaf = leaf_from_u64(42);
        let s = to_hex(&leaf);
        assert!(s.starts_with("0x"));
        assert_eq!(s.len(), 66);
        assert_eq!(parse_hex32(&s).unwrap(), leaf);
        assert_eq!(parse_hex32(&s[2..]).unwrap(), leaf);
    }

    #[test]
    fn test_parse_hex32_rejects_wrong_length() {
        assert!(parse_hex32("0xdeadbeef").is_err());
        assert!(parse_hex32("zz").is_err());
    }
}
