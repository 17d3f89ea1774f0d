//! Public keys from the RFC 8032 Ed25519 test vectors (section 7.1).

use curve25519::{Scalar, decode_point, encode_point, scalar_mult_base};
use hex_literal::hex;
use sha2::{Digest, Sha512};

struct TestVector {
    secret_key: [u8; 32],
    scalar: Option<[u8; 32]>,
    public_key: [u8; 32],
}

const TEST_VECTORS: &[TestVector] = &[
    // TEST 1
    TestVector {
        secret_key: hex!("9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60"),
        scalar: Some(hex!(
            "307c83864f2833cb427a2ef1c00a013cfdff2768d980c0a3a520f006904de94f"
        )),
        public_key: hex!("d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a"),
    },
    // TEST 2
    TestVector {
        secret_key: hex!("4ccd089b28ff96da9db6c346ec114e0f5b8a319f35aba624da8cf6ed4fb8a6fb"),
        scalar: Some(hex!(
            "68bd9ed75882d52815a97585caf4790a7f6c6b3b7f821c5e259a24b02e502e51"
        )),
        public_key: hex!("3d4017c3e843895a92b70aa74d1b7ebc9c982ccf2ec4968cc0cd55f12af4660c"),
    },
    // TEST 3
    TestVector {
        secret_key: hex!("c5aa8df43f9f837bedb7442f31dcb7b166d38535076f094b85ce3a2e0b4458f7"),
        scalar: Some(hex!(
            "909a8b755ed902849023a55b15c23d11ba4d7f4ec5c2f51b1325a181991ea95c"
        )),
        public_key: hex!("fc51cd8e6218a1a38da47ed00230f0580816ed13ba3303ac5deb911548908025"),
    },
    // TEST 1024
    TestVector {
        secret_key: hex!("f5e5767cf153319517630f226876b86c8160cc583bc013744c6bf255f5cc0ee5"),
        scalar: None,
        public_key: hex!("278117fc144c72340f67d0f2316e8386ceffbf2b2428c9c51fef7c597f1d426e"),
    },
    // TEST SHA(abc)
    TestVector {
        secret_key: hex!("833fe62409237b9d62ec77587520911e9a759cec1d19755b7da901b96dca3d42"),
        scalar: None,
        public_key: hex!("ec172b93ad5e563bf4932c70e1245034c35467ef2efd4d64ebf819683467e2bf"),
    },
];

/// RFC 8032 section 5.1.5, steps 1-3.
fn clamped_scalar(secret_key: &[u8; 32]) -> [u8; 32] {
    let digest = Sha512::digest(secret_key);
    let mut scalar = [0u8; 32];
    scalar.copy_from_slice(&digest[..32]);
    scalar[0] &= 248;
    scalar[31] &= 127;
    scalar[31] |= 64;
    scalar
}

#[test]
fn derive_public_keys() {
    for vector in TEST_VECTORS {
        let scalar = clamped_scalar(&vector.secret_key);
        if let Some(expected) = vector.scalar {
            assert_eq!(scalar, expected);
        }

        let point = scalar_mult_base(&Scalar::from_bytes(&scalar));
        assert_eq!(encode_point(&point), vector.public_key);
    }
}

#[test]
fn decode_public_keys() {
    for vector in TEST_VECTORS {
        let scalar = clamped_scalar(&vector.secret_key);
        let decoded = decode_point(&vector.public_key).expect("valid public key");

        assert!(bool::from(decoded.is_on_curve()));
        assert_eq!(decoded, scalar_mult_base(&Scalar::from_bytes(&scalar)));
        assert_eq!(encode_point(&decoded), vector.public_key);
    }
}

#[test]
fn add_public_keys() {
    let a = decode_point(&TEST_VECTORS[0].public_key).expect("valid public key");
    let b = decode_point(&TEST_VECTORS[1].public_key).expect("valid public key");

    assert_eq!(
        encode_point(&(a + b)),
        hex!("02bd074b02982457a69117dd23c26815da2f5a713d34e4da80e375c7b51a6962")
    );
    assert_eq!(
        encode_point(&(a - b)),
        hex!("0b7781db7255f002dffd1dd8fdc93656abf61f3e655352d84d832623a1bdf480")
    );
}
