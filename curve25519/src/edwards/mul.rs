use super::{
    EdwardsPoint, PrecomputedPoint,
    basepoint_table::{BASEPOINT_2_256, BASEPOINT_TABLE},
};
use crate::scalar::Scalar;
use subtle::{Choice, ConditionallySelectable};

impl EdwardsPoint {
    /// Fixed-base scalar multiplication: compute `scalar * B` in constant time.
    ///
    /// Accepts any 256-bit scalar.
    pub fn mul_by_generator(scalar: &Scalar) -> EdwardsPoint {
        // scalar = sum(e[i] * 16^i) with e[i] in [-8, 8) for i < 64 and
        // e[64] in {0, 1}. Row j of the table holds multiples of 16^(2j) B,
        // so the odd digits are accumulated first and shifted up by one
        // digit with four doublings.
        let e = scalar.to_radix_16();

        let mut h = EdwardsPoint::IDENTITY;
        for (j, table) in BASEPOINT_TABLE.iter().enumerate() {
            h = h.add_precomputed(&table.select(e[2 * j + 1])).to_extended();
        }

        let mut r = h.to_projective();
        for _ in 0..3 {
            r = r.double().to_projective();
        }
        h = r.double().to_extended();

        for (j, table) in BASEPOINT_TABLE.iter().enumerate() {
            h = h.add_precomputed(&table.select(e[2 * j])).to_extended();
        }

        let top = PrecomputedPoint::conditional_select(
            &PrecomputedPoint::IDENTITY,
            &BASEPOINT_2_256,
            Choice::from(e[64] as u8),
        );
        h.add_precomputed(&top).to_extended()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::{biguint_to_bytes, bytes_to_biguint};
    use hex_literal::hex;
    use num_bigint::BigUint;
    use proptest::prelude::*;

    /// Double-and-add over the scalar bits, most significant first.
    fn double_and_add(scalar: &Scalar) -> EdwardsPoint {
        let bytes = scalar.to_bytes();
        let mut acc = EdwardsPoint::IDENTITY;
        for i in (0..256).rev() {
            acc = acc.double();
            if (bytes[i / 8] >> (i % 8)) & 1 == 1 {
                acc += EdwardsPoint::GENERATOR;
            }
        }
        acc
    }

    #[test]
    fn zero_is_identity() {
        let p = EdwardsPoint::mul_by_generator(&Scalar::ZERO);
        assert_eq!(p, EdwardsPoint::IDENTITY);
        assert_eq!(
            p.compress().to_bytes(),
            hex!("0100000000000000000000000000000000000000000000000000000000000000")
        );
    }

    #[test]
    fn one_is_generator() {
        let p = EdwardsPoint::mul_by_generator(&Scalar::ONE);
        assert_eq!(p, EdwardsPoint::GENERATOR);
        assert_eq!(
            p.compress().to_bytes(),
            hex!("5866666666666666666666666666666666666666666666666666666666666666")
        );
    }

    #[test]
    fn small_scalars() {
        let vectors = [
            (
                2u64,
                hex!("c9a3f86aae465f0e56513864510f3997561fa2c9e85ea21dc2292309f3cd6022"),
            ),
            (
                9,
                hex!("c0f1225584444ec730446e231390781ffdd2f256e9fcbeb2f40dddc2c2233d7f"),
            ),
            (
                255,
                hex!("cc613540cd8c99fa4647e6e83e969761b17515dbe1896fd0a3e4358ebca65c31"),
            ),
            (
                256,
                hex!("c7f66c563120140ea8d927c19a3d1b7d0e26d381aaebf56b7902f1515c75550f"),
            ),
        ];
        for (k, encoding) in vectors {
            let p = EdwardsPoint::mul_by_generator(&Scalar::from(k));
            assert_eq!(p.compress().to_bytes(), encoding);
        }
    }

    #[test]
    fn order_minus_one_is_negated_generator() {
        let l_minus_one = Scalar::from_bytes(&hex!(
            "ecd3f55c1a631258d69cf7a2def9de1400000000000000000000000000000010"
        ));
        let p = EdwardsPoint::mul_by_generator(&l_minus_one);
        assert_eq!(p, -EdwardsPoint::GENERATOR);
        assert_eq!(p + EdwardsPoint::GENERATOR, EdwardsPoint::IDENTITY);
    }

    #[test]
    fn full_width_scalars() {
        let mut below_2_255 = [0xff; 32];
        below_2_255[31] = 0x7f;
        let mut only_bit_255 = [0u8; 32];
        only_bit_255[31] = 0x80;
        let mut top_nibble_set = [0u8; 32];
        top_nibble_set[0] = 1;
        top_nibble_set[31] = 0xf0;

        for bytes in [below_2_255, only_bit_255, top_nibble_set, [0xff; 32]] {
            let scalar = Scalar::from_bytes(&bytes);
            let p = EdwardsPoint::mul_by_generator(&scalar);
            assert!(bool::from(p.is_on_curve()));
            assert_eq!(p, double_and_add(&scalar));
        }
    }

    #[test]
    fn largest_scalar_reduces_mod_order() {
        // (2^256 - 1) mod l
        let reduced = Scalar::from_bytes(&hex!(
            "1c95988d7431ecd670cf7d73f45befc6feffffffffffffffffffffffffffff0f"
        ));
        assert_eq!(
            EdwardsPoint::mul_by_generator(&Scalar::from_bytes(&[0xff; 32])),
            EdwardsPoint::mul_by_generator(&reduced)
        );
    }

    #[test]
    fn sum_wraps_group_order() {
        let l_minus_one =
            hex!("ecd3f55c1a631258d69cf7a2def9de1400000000000000000000000000000010");
        let doubled = (bytes_to_biguint(&l_minus_one) * 2u32) % group_order();
        let lhs =
            EdwardsPoint::mul_by_generator(&Scalar::from_bytes(&biguint_to_bytes(&doubled)));
        let p = EdwardsPoint::mul_by_generator(&Scalar::from_bytes(&l_minus_one));
        assert_eq!(lhs, p + p);
        assert_eq!(lhs, -EdwardsPoint::GENERATOR.double());
    }

    fn group_order() -> BigUint {
        bytes_to_biguint(&hex!(
            "edd3f55c1a631258d69cf7a2def9de1400000000000000000000000000000010"
        ))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn matches_double_and_add(bytes in any::<[u8; 32]>()) {
            let scalar = Scalar::from_bytes(&bytes);
            let p = EdwardsPoint::mul_by_generator(&scalar);
            prop_assert!(bool::from(p.is_on_curve()));
            prop_assert_eq!(p, double_and_add(&scalar));
        }

        #[test]
        fn distributes_over_addition(a in any::<[u8; 32]>(), b in any::<[u8; 32]>()) {
            let sum = (bytes_to_biguint(&a) + bytes_to_biguint(&b)) % group_order();
            let lhs =
                EdwardsPoint::mul_by_generator(&Scalar::from_bytes(&biguint_to_bytes(&sum)));
            let rhs = EdwardsPoint::mul_by_generator(&Scalar::from_bytes(&a))
                + EdwardsPoint::mul_by_generator(&Scalar::from_bytes(&b));
            prop_assert_eq!(lhs, rhs);
        }
    }
}
