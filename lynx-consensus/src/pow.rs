//! Proof-of-work target encoding.
//!
//! The retarget algorithm itself lives with the validation engine; the
//! parameters only need to decode compact targets to check them against
//! `pow_limit`.

use primitive_types::U256;

/// Decodes the compact `bits` representation of a target.
///
/// Returns `None` for negative or overflowing encodings.
pub fn compact_to_target(bits: u32) -> Option<U256> {
    let size = bits >> 24;
    let mut word = bits & 0x007f_ffff;

    let negative = word != 0 && (bits & 0x0080_0000) != 0;
    let overflow = word != 0
        && (size > 34 || (word > 0xff && size > 33) || (word > 0xffff && size > 32));
    if negative || overflow {
        return None;
    }

    if size <= 3 {
        word >>= 8 * (3 - size);
        Some(U256::from(word))
    } else {
        Some(U256::from(word) << (8 * (size - 3) as usize))
    }
}

/// Whether `bits` decodes to a positive target no easier than `pow_limit`.
pub fn target_within_limit(bits: u32, pow_limit: &U256) -> bool {
    match compact_to_target(bits) {
        Some(target) => !target.is_zero() && target <= *pow_limit,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn test_compact_decoding() {
        assert_eq!(compact_to_target(0x0100_3456), Some(U256::zero()));
        assert_eq!(compact_to_target(0x0112_3456), Some(U256::from(0x12)));
        assert_eq!(compact_to_target(0x0312_3456), Some(U256::from(0x12_3456)));
        assert_eq!(
            compact_to_target(0x1d00_ffff),
            Some(U256::from(0xffff) << 208)
        );
        assert_eq!(compact_to_target(0x0492_3456), None);
        assert_eq!(compact_to_target(0xff12_3456), None);
    }

    #[test]
    fn test_regtest_bits_at_limit() {
        let limit = U256::from_big_endian(&hex!(
            "7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
        ));
        assert!(target_within_limit(0x207f_ffff, &limit));
        assert!(!target_within_limit(0x2100_ffff, &limit));
    }
}
