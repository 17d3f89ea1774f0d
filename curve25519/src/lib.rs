#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![allow(non_snake_case)]
#![forbid(unsafe_code)]
#![warn(
    clippy::unwrap_used,
    clippy::mod_module_files,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused,
    unused_attributes,
    unused_imports,
    unused_mut,
    unused_must_use
)]

#[cfg(test)]
#[macro_use]
extern crate std;

// Internal macros. Must come first!
#[macro_use]
pub(crate) mod macros;

pub use elliptic_curve;
pub use subtle;

pub(crate) mod edwards;
pub(crate) mod field;
pub(crate) mod scalar;
pub(crate) mod util;

pub use edwards::{
    AffinePoint, CachedPoint, CompletedPoint, CompressedEdwardsY, EdwardsPoint, PointBytes,
    PrecomputedPoint, ProjectivePoint,
};
pub use field::FieldElement;
pub use scalar::Scalar;

/// Compute `scalar * B` for the Ed25519 basepoint `B`.
///
/// The scalar is used as given, with all 256 bits: callers deriving an
/// Ed25519 public key pass the RFC 8032 clamped secret scalar.
pub fn scalar_mult_base(scalar: &Scalar) -> EdwardsPoint {
    EdwardsPoint::mul_by_generator(scalar)
}

/// Decode a 32-byte compressed point (for example an Ed25519 public key).
///
/// Returns `None` if the bytes are not the canonical encoding of a curve point.
pub fn decode_point(bytes: &PointBytes) -> Option<EdwardsPoint> {
    CompressedEdwardsY(*bytes)
        .decompress()
        .map(|point| point.to_edwards())
        .into()
}

/// Encode a point as its canonical 32-byte compressed form.
pub fn encode_point(point: &EdwardsPoint) -> PointBytes {
    point.compress().to_bytes()
}
