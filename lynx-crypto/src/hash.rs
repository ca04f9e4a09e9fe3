//! Hashing algorithms for Lynx.
//!
//! Block and transaction identities use double SHA-256 over the consensus
//! encoding, and the block merkle root is the bitcoin-style pairwise tree.

use sha2::{Digest, Sha256};

/// Calculate SHA256 hash of input data
pub fn calculate_sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Calculate SHA256(SHA256(data)), the hash used for block and transaction ids.
pub fn calculate_sha256d(data: &[u8]) -> [u8; 32] {
    calculate_sha256(&calculate_sha256(data))
}

/// Hashes two child nodes of the merkle tree into their parent.
fn hash_pair(left: &[u8; 32], right: &[u8; 32]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(left);
    hasher.update(right);
    let first: [u8; 32] = hasher.finalize().into();
    calculate_sha256(&first)
}

/// Computes the merkle root of a list of transaction ids.
///
/// On levels with an odd number of nodes the last node is paired with itself.
/// Returns `None` for an empty list; a single leaf is its own root.
pub fn calculate_merkle_root(leaves: &[[u8; 32]]) -> Option<[u8; 32]> {
    if leaves.is_empty() {
        return None;
    }

    let mut current_level = leaves.to_vec();
    while current_level.len() > 1 {
        let next_level = current_level
            .chunks(2)
            .map(|pair| match pair {
                [left, right] => hash_pair(left, right),
                [single] => hash_pair(single, single),
                _ => unreachable!("chunks(2) yields one or two nodes"),
            })
            .collect();
        current_level = next_level;
    }

    current_level.first().copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn test_calculate_sha256() {
        assert_eq!(
            calculate_sha256(&[]),
            hex!("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")
        );
        assert_eq!(
            calculate_sha256(b"hello"),
            hex!("2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824")
        );
    }

    #[test]
    fn test_calculate_sha256d() {
        assert_eq!(
            calculate_sha256d(&[]),
            hex!("5df6e0e2761359d30a8275058e299fcc0381534545f55cf43e41983f5d4c9456")
        );
        assert_eq!(
            calculate_sha256d(b"hello"),
            hex!("9595c9df90075148eb06860365df33584b75bff782a510c6cd4883a419833d50")
        );
    }

    #[test]
    fn test_merkle_root_empty_and_single() {
        assert_eq!(calculate_merkle_root(&[]), None);
        let leaf = [7u8; 32];
        assert_eq!(calculate_merkle_root(&[leaf]), Some(leaf));
    }

    #[test]
    fn test_merkle_root_pairs_and_odd_levels() {
        let a = [1u8; 32];
        let b = [2u8; 32];
        let c = [3u8; 32];

        assert_eq!(
            calculate_merkle_root(&[a, b]),
            Some(hex!("39ce20bede82c96b8908bec4a157b09c549b3db90b9b474bda9ae9b9030310b4"))
        );
        // The odd leaf `c` is paired with itself.
        assert_eq!(
            calculate_merkle_root(&[a, b, c]),
            Some(hex!("223e023fadf1f053df26988871f893c821c28edf77d64a955e6c2a02d547bdac"))
        );
    }

    proptest::proptest! {
        #[test]
        fn test_duplicated_tail_matches_odd_level(seed in proptest::prelude::any::<u8>()) {
            let a = [seed; 32];
            let b = [seed.wrapping_add(1); 32];
            let c = [seed.wrapping_add(2); 32];
            proptest::prop_assert_eq!(
                calculate_merkle_root(&[a, b, c]),
                calculate_merkle_root(&[a, b, c, c])
            );
        }
    }
}
