//! Encoding and group-law properties through the public API.

use curve25519::{
    CompressedEdwardsY, EdwardsPoint, FieldElement, Scalar, decode_point, encode_point,
    scalar_mult_base,
};
use hex_literal::hex;
use proptest::prelude::*;

prop_compose! {
    fn scalar()(bytes in any::<[u8; 32]>()) -> Scalar {
        Scalar::from_bytes(&bytes)
    }
}

prop_compose! {
    fn point()(s in scalar()) -> EdwardsPoint {
        scalar_mult_base(&s)
    }
}

#[test]
fn identity_and_generator() {
    assert_eq!(
        encode_point(&scalar_mult_base(&Scalar::ZERO)),
        hex!("0100000000000000000000000000000000000000000000000000000000000000")
    );
    assert_eq!(
        encode_point(&scalar_mult_base(&Scalar::ONE)),
        CompressedEdwardsY::GENERATOR.to_bytes()
    );
    assert_eq!(
        decode_point(&CompressedEdwardsY::GENERATOR.to_bytes()),
        Some(EdwardsPoint::GENERATOR)
    );
}

#[test]
fn rejects_invalid_encodings() {
    let invalid = [
        // y = 2, not on the curve
        hex!("0200000000000000000000000000000000000000000000000000000000000000"),
        // y = 7, not on the curve, either sign
        hex!("0700000000000000000000000000000000000000000000000000000000000080"),
        // y = p + 1
        hex!("eeffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff7f"),
        // y = 2^255 - 1
        hex!("ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"),
        // x = 0 with the sign bit set
        hex!("0100000000000000000000000000000000000000000000000000000000000080"),
    ];
    for bytes in invalid {
        assert_eq!(decode_point(&bytes), None, "{}", hex::encode(bytes));
    }
}

proptest! {
    #[test]
    fn encode_decode_round_trip(p in point()) {
        let bytes = encode_point(&p);
        let decoded = decode_point(&bytes);
        prop_assert_eq!(decoded, Some(p));
        prop_assert_eq!(decoded.map(|q| q.to_affine()), Some(p.to_affine()));
    }

    #[test]
    fn decode_encode_round_trip(bytes in any::<[u8; 32]>()) {
        // Every string that decodes was the canonical encoding of its point.
        if let Some(p) = decode_point(&bytes) {
            prop_assert!(bool::from(p.is_on_curve()));
            prop_assert_eq!(encode_point(&p), bytes);
        }
    }

    #[test]
    fn decode_agrees_with_field_decoding(bytes in any::<[u8; 32]>()) {
        if let Some(p) = decode_point(&bytes) {
            let mut y_bytes = bytes;
            y_bytes[31] &= 0x7f;
            prop_assert_eq!(p.to_affine().y(), FieldElement::from_bytes(&y_bytes).to_bytes());
        }
    }

    #[test]
    fn identity_is_neutral(p in point()) {
        prop_assert_eq!(EdwardsPoint::IDENTITY + p, p);
        prop_assert_eq!(p + EdwardsPoint::IDENTITY, p);
    }

    #[test]
    fn double_is_self_addition(p in point()) {
        prop_assert_eq!(p.double().to_affine(), (p + p).to_affine());
    }

    #[test]
    fn addition_laws(a in point(), b in point(), c in point()) {
        prop_assert_eq!(a + b, b + a);
        prop_assert_eq!((a + b) + c, a + (b + c));
        prop_assert_eq!((a - b) + b, a);
        prop_assert_eq!(a + (-a), EdwardsPoint::IDENTITY);
    }
}
