//! Byte-level helpers shared by the field and scalar encodings.

#[cfg(test)]
use num_bigint::BigUint;

/// Load eight little-endian bytes starting at `offset`.
#[inline(always)]
pub(crate) const fn load8(input: &[u8; 32], offset: usize) -> u64 {
    (input[offset] as u64)
        | ((input[offset + 1] as u64) << 8)
        | ((input[offset + 2] as u64) << 16)
        | ((input[offset + 3] as u64) << 24)
        | ((input[offset + 4] as u64) << 32)
        | ((input[offset + 5] as u64) << 40)
        | ((input[offset + 6] as u64) << 48)
        | ((input[offset + 7] as u64) << 56)
}

/// Store four 64-bit words as 32 little-endian bytes.
#[inline(always)]
pub(crate) fn store8x4(words: [u64; 4]) -> [u8; 32] {
    let mut out = [0u8; 32];
    for (chunk, word) in out.chunks_exact_mut(8).zip(words) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
    out
}

/// Interpret little-endian bytes as an unsigned big integer.
#[cfg(test)]
pub(crate) fn bytes_to_biguint(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_le(bytes)
}

/// Serialize a big integer below 2^256 as 32 little-endian bytes.
#[cfg(test)]
pub(crate) fn biguint_to_bytes(x: &BigUint) -> [u8; 32] {
    let bytes = x.to_bytes_le();
    assert!(bytes.len() <= 32);
    let mut out = [0u8; 32];
    out[..bytes.len()].copy_from_slice(&bytes);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load8_is_little_endian() {
        let mut bytes = [0u8; 32];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = i as u8;
        }
        assert_eq!(load8(&bytes, 0), 0x0706_0504_0302_0100);
        assert_eq!(load8(&bytes, 24), 0x1f1e_1d1c_1b1a_1918);
    }

    #[test]
    fn store_then_load() {
        let words = [
            0x0123_4567_89ab_cdef,
            0xfedc_ba98_7654_3210,
            u64::MAX,
            1,
        ];
        let bytes = store8x4(words);
        for (i, word) in words.iter().enumerate() {
            assert_eq!(load8(&bytes, 8 * i), *word);
        }
    }
}
