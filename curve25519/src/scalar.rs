//! Scalars for fixed-base multiplication.

use core::fmt::{self, Debug, Formatter};

use crate::util::{load8, store8x4};
use elliptic_curve::{Error, Result, zeroize::DefaultIsZeroes};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

const LOW_56_BIT_MASK: u64 = (1 << 56) - 1;

/// A 256-bit integer multiplier for the basepoint, stored as four 56-bit
/// limbs and one 32-bit top limb.
///
/// No reduction modulo the group order takes place here, and no clamping:
/// every 256-bit value is a valid multiplier.
#[derive(Clone, Copy, Default)]
pub struct Scalar(pub(crate) [u64; 5]);

impl Scalar {
    /// Zero
    pub const ZERO: Self = Self([0, 0, 0, 0, 0]);
    /// One
    pub const ONE: Self = Self([1, 0, 0, 0, 0]);

    /// Load a scalar from 32 little-endian bytes. All 256 bits are kept.
    pub const fn from_bytes(bytes: &[u8; 32]) -> Self {
        let x0 = load8(bytes, 0);
        let x1 = load8(bytes, 8);
        let x2 = load8(bytes, 16);
        let x3 = load8(bytes, 24);

        Self([
            x0 & LOW_56_BIT_MASK,
            ((x0 >> 56) | (x1 << 8)) & LOW_56_BIT_MASK,
            ((x1 >> 48) | (x2 << 16)) & LOW_56_BIT_MASK,
            ((x2 >> 40) | (x3 << 24)) & LOW_56_BIT_MASK,
            x3 >> 32,
        ])
    }

    /// Encode this scalar as 32 little-endian bytes.
    pub fn to_bytes(&self) -> [u8; 32] {
        store8x4(self.to_words())
    }

    fn to_words(self) -> [u64; 4] {
        let [l0, l1, l2, l3, l4] = self.0;
        [
            l0 | (l1 << 56),
            (l1 >> 8) | (l2 << 48),
            (l2 >> 16) | (l3 << 40),
            (l3 >> 24) | (l4 << 32),
        ]
    }

    /// The 64 unsigned 4-bit digits of this scalar, least significant first.
    pub(crate) fn nibbles(&self) -> [i8; 64] {
        let mut output = [0i8; 64];
        for (chunk, word) in output.chunks_exact_mut(16).zip(self.to_words()) {
            for (j, nibble) in chunk.iter_mut().enumerate() {
                *nibble = ((word >> (4 * j)) & 0xf) as i8;
            }
        }
        output
    }

    /// Recode this scalar into signed radix-16 digits:
    /// `self = sum(digits[i] * 16^i)`.
    ///
    /// `digits[0..64]` lie in `[-8, 8)` and `digits[64]`, the carry out of
    /// the top nibble, is 0 or 1.
    pub(crate) fn to_radix_16(&self) -> [i8; 65] {
        let mut output = [0i8; 65];
        output[..64].copy_from_slice(&self.nibbles());

        // Recenter coefficients from [0, 16) to [-8, 8)
        for i in 0..64 {
            let carry = (output[i] + 8) >> 4;
            output[i] -= carry << 4;
            output[i + 1] += carry;
        }

        output
    }
}

impl Debug for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Scalar(")?;
        for b in self.to_bytes().iter().rev() {
            write!(f, "{b:02x}")?;
        }
        write!(f, ")")
    }
}

impl From<u64> for Scalar {
    fn from(value: u64) -> Self {
        Self([value & LOW_56_BIT_MASK, value >> 56, 0, 0, 0])
    }
}

impl From<[u8; 32]> for Scalar {
    fn from(bytes: [u8; 32]) -> Self {
        Self::from_bytes(&bytes)
    }
}

impl From<&[u8; 32]> for Scalar {
    fn from(bytes: &[u8; 32]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl TryFrom<&[u8]> for Scalar {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        let bytes = <&[u8; 32]>::try_from(bytes).map_err(|_| Error)?;
        Ok(Self::from_bytes(bytes))
    }
}

impl From<Scalar> for [u8; 32] {
    fn from(scalar: Scalar) -> Self {
        scalar.to_bytes()
    }
}

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl ConditionallySelectable for Scalar {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut out = *a;
        for (limb, b_limb) in out.0.iter_mut().zip(b.0.iter()) {
            limb.conditional_assign(b_limb, choice);
        }
        out
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}
impl Eq for Scalar {}

impl DefaultIsZeroes for Scalar {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::bytes_to_biguint;
    use hex_literal::hex;
    use num_bigint::{BigInt, BigUint};
    use proptest::prelude::*;

    fn digits_value(digits: &[i8]) -> BigInt {
        digits
            .iter()
            .rev()
            .fold(BigInt::from(0), |acc, &d| acc * 16 + BigInt::from(d))
    }

    #[test]
    fn from_u64() {
        let s = Scalar::from(0x0123_4567_89ab_cdefu64);
        let mut expected = [0u8; 32];
        expected[..8].copy_from_slice(&0x0123_4567_89ab_cdefu64.to_le_bytes());
        assert_eq!(s.to_bytes(), expected);
        assert_eq!(Scalar::from(1u64), Scalar::ONE);
        assert_eq!(Scalar::from(0u64), Scalar::ZERO);
    }

    #[test]
    fn nibbles_of_known_value() {
        let s = Scalar::from_bytes(&hex!(
            "21436587a9cbed0f000000000000000000000000000000000000000000000070"
        ));
        let n = s.nibbles();
        assert_eq!(&n[..16], &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 0]);
        assert_eq!(n[62], 0);
        assert_eq!(n[63], 7);
    }

    #[test]
    fn radix_16_below_2_255() {
        // 2^255 - 1 = -1 - 8 * 16^63 + 16^64
        let mut bytes = [0xff; 32];
        bytes[31] = 0x7f;
        let digits = Scalar::from_bytes(&bytes).to_radix_16();
        assert_eq!(digits[0], -1);
        assert!(digits[1..63].iter().all(|&d| d == 0));
        assert_eq!(digits[63], -8);
        assert_eq!(digits[64], 1);
    }

    #[test]
    fn radix_16_of_largest_scalar() {
        // 2^256 - 1 = -1 + 16^64
        let digits = Scalar::from_bytes(&[0xff; 32]).to_radix_16();
        assert_eq!(digits[0], -1);
        assert!(digits[1..64].iter().all(|&d| d == 0));
        assert_eq!(digits[64], 1);
    }

    #[test]
    fn radix_16_without_top_carry() {
        let mut bytes = [0u8; 32];
        bytes[31] = 0x70;
        let digits = Scalar::from_bytes(&bytes).to_radix_16();
        assert!(digits[..63].iter().all(|&d| d == 0));
        assert_eq!(digits[63], 7);
        assert_eq!(digits[64], 0);
    }

    #[test]
    fn try_from_slice() {
        let bytes = [7u8; 32];
        assert_eq!(Scalar::try_from(&bytes[..]).unwrap(), Scalar::from_bytes(&bytes));
        assert!(Scalar::try_from(&bytes[..31]).is_err());
        assert!(Scalar::try_from(&[0u8; 33][..]).is_err());
    }

    proptest! {
        #[test]
        fn encoding_preserves_all_bits(bytes in any::<[u8; 32]>()) {
            prop_assert_eq!(Scalar::from_bytes(&bytes).to_bytes(), bytes);
        }

        #[test]
        fn nibbles_recompose(bytes in any::<[u8; 32]>()) {
            let nibbles = Scalar::from_bytes(&bytes).nibbles();
            prop_assert!(nibbles.iter().all(|&d| (0..16).contains(&d)));
            let value = digits_value(&nibbles[..]);
            prop_assert_eq!(value, BigInt::from(bytes_to_biguint(&bytes)));
        }

        #[test]
        fn radix_16_recompose(bytes in any::<[u8; 32]>()) {
            let digits = Scalar::from_bytes(&bytes).to_radix_16();
            prop_assert!(digits[..64].iter().all(|&d| (-8..8).contains(&d)));
            prop_assert!((0..=1).contains(&digits[64]));
            let value: BigUint = bytes_to_biguint(&bytes);
            prop_assert_eq!(digits_value(&digits), BigInt::from(value));
        }
    }
}
