//! Points on the Ed25519 curve `-x^2 + y^2 = 1 + d x^2 y^2`.
//!
//! Each coordinate system the formulas need is its own type, with explicit
//! conversions between them:
//!
//! - [`EdwardsPoint`]: extended `(X : Y : Z : T)` with `XY = ZT`;
//! - [`CompletedPoint`]: `((X : Z), (Y : T))`, the raw output of addition and doubling;
//! - [`ProjectivePoint`]: `(X : Y : Z)`, enough to double;
//! - [`CachedPoint`]: `(Y + X, Y - X, Z, 2dT)`, right-hand side of a general addition;
//! - [`PrecomputedPoint`]: `(y + x, y - x, 2dxy)` with `Z = 1`, basepoint table entries;
//! - [`AffinePoint`]: `(x, y)`, and its 32-byte form [`CompressedEdwardsY`].

pub(crate) mod affine;
pub(crate) mod basepoint_table;
pub(crate) mod cached;
pub(crate) mod completed;
pub(crate) mod extended;
pub(crate) mod mul;
pub(crate) mod precomputed;
pub(crate) mod projective;

pub use affine::{AffinePoint, CompressedEdwardsY, PointBytes};
pub use cached::CachedPoint;
pub use completed::CompletedPoint;
pub use extended::EdwardsPoint;
pub use precomputed::PrecomputedPoint;
pub use projective::ProjectivePoint;
