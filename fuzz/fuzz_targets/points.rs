#![no_main]
use ciborium::de;
use curve25519::{
    CompressedEdwardsY, EdwardsPoint, Scalar, decode_point, encode_point, scalar_mult_base,
};
use libfuzzer_sys::fuzz_target;

static mut I: u64 = 0;

fn test_group(p1: EdwardsPoint, p2: EdwardsPoint, s: Scalar) {
    unsafe {
        I = I.wrapping_add(1);
        // Our goal is primarily to test decoding, so we skip 6 of every 7 group tests
        if I % 7 != 0 {
            return;
        }
    }

    let sum = p1 + p2;

    // Addition and doubling agree
    assert!(p1.double() == p1 + p1 - EdwardsPoint::IDENTITY);

    // Negation
    assert!(sum + (-sum) == EdwardsPoint::IDENTITY);
    assert!(sum - p2 == p1);

    // Every result stays on the curve and encodes canonically
    assert!(bool::from(sum.is_on_curve()));
    let bytes = encode_point(&sum);
    assert!(decode_point(&bytes) == Some(sum));

    // Fixed-base products are valid points
    let sb = scalar_mult_base(&s);
    assert!(bool::from(sb.is_on_curve()));
    assert!(sb + sb == sb.double());
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 128 {
        return;
    }

    let bytes1: [u8; 32] = data[0..32].try_into().unwrap();
    let p1 = match decode_point(&bytes1) {
        Some(point) => {
            // Accepted encodings are canonical
            assert_eq!(encode_point(&point), bytes1);
            point
        }
        None => EdwardsPoint::GENERATOR,
    };

    let p2 = CompressedEdwardsY::try_from(&data[32..64])
        .ok()
        .and_then(|compressed| Option::from(compressed.decompress()))
        .map(|affine: curve25519::AffinePoint| affine.to_edwards())
        .unwrap_or(EdwardsPoint::IDENTITY);

    let cbor = &data[64..64 + usize::from(data[0] & 0x3f)];
    let p3 = de::from_reader::<CompressedEdwardsY, _>(cbor)
        .ok()
        .and_then(|compressed| decode_point(&compressed.to_bytes()))
        .unwrap_or(EdwardsPoint::GENERATOR);

    let scalar = Scalar::from_bytes(data[96..128].try_into().unwrap());

    test_group(p1 + p3, p2, scalar);
});
