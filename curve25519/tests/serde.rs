//! `CompressedEdwardsY` serialization.

#![cfg(feature = "serde")]

use curve25519::CompressedEdwardsY;

#[test]
fn json_round_trip() {
    let json = serde_json::to_string(&CompressedEdwardsY::GENERATOR).unwrap();
    assert_eq!(
        json,
        "\"5866666666666666666666666666666666666666666666666666666666666666\""
    );
    let decoded: CompressedEdwardsY = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, CompressedEdwardsY::GENERATOR);
}

#[test]
fn json_rejects_wrong_length() {
    assert!(serde_json::from_str::<CompressedEdwardsY>("\"5866\"").is_err());
}
