use core::borrow::Borrow;
use core::fmt::{Display, Formatter, LowerHex, Result as FmtResult};
use core::iter::Sum;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use super::{
    AffinePoint, CachedPoint, CompletedPoint, CompressedEdwardsY, PrecomputedPoint,
    ProjectivePoint,
};
use crate::field::FieldElement;
use elliptic_curve::zeroize::DefaultIsZeroes;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// A point on Ed25519 in extended homogeneous coordinates
/// `(X : Y : Z : T)`, affine `(X/Z, Y/Z)`, with `XY = ZT`.
#[derive(Copy, Clone, Debug)]
pub struct EdwardsPoint {
    pub(crate) X: FieldElement,
    pub(crate) Y: FieldElement,
    pub(crate) Z: FieldElement,
    pub(crate) T: FieldElement,
}

impl Default for EdwardsPoint {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Display for EdwardsPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{{ X: {}, Y: {}, Z: {}, T: {} }}",
            self.X, self.Y, self.Z, self.T
        )
    }
}

impl LowerHex for EdwardsPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{{ X: {:x}, Y: {:x}, Z: {:x}, T: {:x} }}",
            self.X, self.Y, self.Z, self.T
        )
    }
}

impl ConditionallySelectable for EdwardsPoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        EdwardsPoint {
            X: FieldElement::conditional_select(&a.X, &b.X, choice),
            Y: FieldElement::conditional_select(&a.Y, &b.Y, choice),
            Z: FieldElement::conditional_select(&a.Z, &b.Z, choice),
            T: FieldElement::conditional_select(&a.T, &b.T, choice),
        }
    }
}

impl ConstantTimeEq for EdwardsPoint {
    fn ct_eq(&self, other: &Self) -> Choice {
        let XZ = self.X * other.Z;
        let ZX = self.Z * other.X;

        let YZ = self.Y * other.Z;
        let ZY = self.Z * other.Y;

        XZ.ct_eq(&ZX) & YZ.ct_eq(&ZY)
    }
}

impl Eq for EdwardsPoint {}
impl PartialEq for EdwardsPoint {
    fn eq(&self, other: &EdwardsPoint) -> bool {
        self.ct_eq(other).into()
    }
}

impl DefaultIsZeroes for EdwardsPoint {}

impl EdwardsPoint {
    /// The Ed25519 basepoint `B`, with `y = 4/5` and positive `x`
    pub const GENERATOR: Self = Self {
        X: AffinePoint::GENERATOR.x,
        Y: AffinePoint::GENERATOR.y,
        Z: FieldElement::ONE,
        T: FieldElement([
            0x6_8ab3_a5b7_dda3,
            0x0_0eea_2a5e_adbb,
            0x2_af8d_f483_c27e,
            0x3_32b3_7527_4732,
            0x6_7875_f0fd_78b7,
        ]),
    };
    /// Identity point
    pub const IDENTITY: Self = Self {
        X: FieldElement::ZERO,
        Y: FieldElement::ONE,
        Z: FieldElement::ONE,
        T: FieldElement::ZERO,
    };

    /// Add a cached point: `self + other` (8M).
    ///
    /// Unified formula, also correct when `other` is `self` or the identity.
    pub fn add_cached(&self, other: &CachedPoint) -> CompletedPoint {
        let PP = (self.Y + self.X) * other.Y_plus_X;
        let MM = (self.Y - self.X) * other.Y_minus_X;
        let TT2d = self.T * other.T2d;
        let ZZ = self.Z * other.Z;
        let ZZ2 = ZZ + ZZ;

        CompletedPoint {
            X: PP - MM,
            Y: PP + MM,
            Z: ZZ2 + TT2d,
            T: ZZ2 - TT2d,
        }
    }

    /// Subtract a cached point: `self - other` (8M).
    pub fn sub_cached(&self, other: &CachedPoint) -> CompletedPoint {
        let PM = (self.Y + self.X) * other.Y_minus_X;
        let MP = (self.Y - self.X) * other.Y_plus_X;
        let TT2d = self.T * other.T2d;
        let ZZ = self.Z * other.Z;
        let ZZ2 = ZZ + ZZ;

        CompletedPoint {
            X: PM - MP,
            Y: PM + MP,
            Z: ZZ2 - TT2d,
            T: ZZ2 + TT2d,
        }
    }

    /// Add a precomputed point with `Z = 1`: `self + other` (7M).
    pub fn add_precomputed(&self, other: &PrecomputedPoint) -> CompletedPoint {
        let PP = (self.Y + self.X) * other.y_plus_x;
        let MM = (self.Y - self.X) * other.y_minus_x;
        let Txy2d = self.T * other.xy2d;
        let Z2 = self.Z + self.Z;

        CompletedPoint {
            X: PP - MM,
            Y: PP + MM,
            Z: Z2 + Txy2d,
            T: Z2 - Txy2d,
        }
    }

    /// Double this point.
    pub fn double(&self) -> Self {
        self.to_projective().double().to_extended()
    }

    /// Drop `T`, keeping `(X : Y : Z)`.
    pub fn to_projective(&self) -> ProjectivePoint {
        ProjectivePoint {
            X: self.X,
            Y: self.Y,
            Z: self.Z,
        }
    }

    /// Convert to the cached form used as the right-hand side of additions.
    pub fn to_cached(&self) -> CachedPoint {
        CachedPoint {
            Y_plus_X: self.Y + self.X,
            Y_minus_X: self.Y - self.X,
            Z: self.Z,
            T2d: self.T * FieldElement::EDWARDS_D2,
        }
    }

    /// Convert this point to an [`AffinePoint`] (one inversion).
    pub fn to_affine(&self) -> AffinePoint {
        let z_inv = self.Z.invert();

        let x = self.X * z_inv;
        let y = self.Y * z_inv;

        AffinePoint { x, y }
    }

    /// Canonical 32-byte encoding of this point.
    pub fn compress(&self) -> CompressedEdwardsY {
        self.to_affine().compress()
    }

    /// Whether the point satisfies the curve equation and `XY = ZT`.
    pub fn is_on_curve(&self) -> Choice {
        let XY = self.X * self.Y;
        let ZT = self.Z * self.T;

        // -X^2 + Y^2 == Z^2 + d T^2

        let YY = self.Y.square();
        let XX = self.X.square();
        let ZZ = self.Z.square();
        let TT = self.T.square();
        let lhs = YY - XX;
        let rhs = ZZ + TT * FieldElement::EDWARDS_D;

        XY.ct_eq(&ZT) & lhs.ct_eq(&rhs)
    }

    /// Whether this is the identity point.
    pub fn is_identity(&self) -> Choice {
        self.ct_eq(&Self::IDENTITY)
    }
}

impl Add<&EdwardsPoint> for &EdwardsPoint {
    type Output = EdwardsPoint;

    fn add(self, other: &EdwardsPoint) -> EdwardsPoint {
        self.add_cached(&other.to_cached()).to_extended()
    }
}

define_add_variants!(
    LHS = EdwardsPoint,
    RHS = EdwardsPoint,
    Output = EdwardsPoint
);
define_add_assign_variants!(LHS = EdwardsPoint, RHS = EdwardsPoint);

impl Sub<&EdwardsPoint> for &EdwardsPoint {
    type Output = EdwardsPoint;

    fn sub(self, other: &EdwardsPoint) -> EdwardsPoint {
        self.sub_cached(&other.to_cached()).to_extended()
    }
}

define_sub_variants!(
    LHS = EdwardsPoint,
    RHS = EdwardsPoint,
    Output = EdwardsPoint
);
define_sub_assign_variants!(LHS = EdwardsPoint, RHS = EdwardsPoint);

impl Neg for &EdwardsPoint {
    type Output = EdwardsPoint;

    fn neg(self) -> EdwardsPoint {
        EdwardsPoint {
            X: -self.X,
            Y: self.Y,
            Z: self.Z,
            T: -self.T,
        }
    }
}

define_neg_variant!(EdwardsPoint);

impl<T> Sum<T> for EdwardsPoint
where
    T: Borrow<EdwardsPoint>,
{
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        iter.fold(Self::IDENTITY, |acc, item| acc + item.borrow())
    }
}

impl From<&AffinePoint> for EdwardsPoint {
    fn from(value: &AffinePoint) -> Self {
        value.to_edwards()
    }
}

impl From<AffinePoint> for EdwardsPoint {
    fn from(value: AffinePoint) -> Self {
        value.to_edwards()
    }
}

impl From<&EdwardsPoint> for AffinePoint {
    fn from(value: &EdwardsPoint) -> Self {
        value.to_affine()
    }
}

impl From<EdwardsPoint> for AffinePoint {
    fn from(value: EdwardsPoint) -> Self {
        value.to_affine()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    fn multiple(k: u32) -> EdwardsPoint {
        (0..k).map(|_| EdwardsPoint::GENERATOR).sum()
    }

    #[test]
    fn generator_is_on_curve() {
        assert!(bool::from(EdwardsPoint::GENERATOR.is_on_curve()));
        assert!(bool::from(EdwardsPoint::IDENTITY.is_on_curve()));
    }

    #[test]
    fn generator_encoding() {
        assert_eq!(
            EdwardsPoint::GENERATOR.compress().to_bytes(),
            hex!("5866666666666666666666666666666666666666666666666666666666666666")
        );
        assert_eq!(
            EdwardsPoint::IDENTITY.compress().to_bytes(),
            hex!("0100000000000000000000000000000000000000000000000000000000000000")
        );
    }

    #[test]
    fn small_multiples() {
        let vectors = [
            (
                2,
                hex!("c9a3f86aae465f0e56513864510f3997561fa2c9e85ea21dc2292309f3cd6022"),
            ),
            (
                3,
                hex!("d4b4f5784868c3020403246717ec169ff79e26608ea126a1ab69ee77d1b16712"),
            ),
            (
                8,
                hex!("b4b937fca95b2f1e93e41e62fc3c78818ff38a66096fad6e7973e5c90006d321"),
            ),
            (
                9,
                hex!("c0f1225584444ec730446e231390781ffdd2f256e9fcbeb2f40dddc2c2233d7f"),
            ),
            (
                16,
                hex!("eb2767c137ab7ad8279c078eff116ab0786ead3a2e0f989f72c37f82f2969670"),
            ),
        ];
        for (k, encoding) in vectors {
            assert_eq!(multiple(k).compress().to_bytes(), encoding);
        }
    }

    #[test]
    fn identity_laws() {
        let p = multiple(5);
        assert_eq!(p + EdwardsPoint::IDENTITY, p);
        assert_eq!(EdwardsPoint::IDENTITY + p, p);
        assert_eq!(p - p, EdwardsPoint::IDENTITY);
        assert!(bool::from((p - p).is_identity()));
        assert!(!bool::from(p.is_identity()));
        assert_eq!(p + (-p), EdwardsPoint::IDENTITY);
        assert_eq!(-(-p), p);
    }

    #[test]
    fn double_is_self_addition() {
        let mut p = EdwardsPoint::GENERATOR;
        for _ in 0..10 {
            assert_eq!(p.double(), p + p);
            assert_eq!(p.double().to_affine(), (p + p).to_affine());
            p = p.double() + EdwardsPoint::GENERATOR;
        }
        assert_eq!(EdwardsPoint::IDENTITY.double(), EdwardsPoint::IDENTITY);
    }

    #[test]
    fn addition_is_associative_and_commutative() {
        let a = multiple(3);
        let b = multiple(7);
        let c = -multiple(11);
        assert_eq!((a + b) + c, a + (b + c));
        assert_eq!(a + b, b + a);
        assert_eq!(a + b + c, -EdwardsPoint::GENERATOR);
    }

    #[test]
    fn sub_matches_add_neg() {
        let a = multiple(6);
        let b = multiple(4);
        assert_eq!(a - b, a + (-b));
        assert_eq!(a - b, multiple(2));
        let mut c = a;
        c -= b;
        c += &b;
        assert_eq!(c, a);
    }

    #[test]
    fn precomputed_matches_cached() {
        let p = multiple(9);
        let q = multiple(13);
        let via_cached = p.add_cached(&q.to_cached()).to_extended();
        let via_precomputed = p
            .add_precomputed(&PrecomputedPoint::from(&q.to_affine()))
            .to_extended();
        assert_eq!(via_cached, via_precomputed);
        assert!(bool::from(via_precomputed.is_on_curve()));
    }

    #[test]
    fn affine_round_trip() {
        let p = multiple(21);
        let affine = AffinePoint::from(&p);
        assert_eq!(EdwardsPoint::from(affine), p);
        assert!(bool::from(affine.is_on_curve()));
    }

    #[test]
    fn off_curve_point_is_detected() {
        let mut p = EdwardsPoint::GENERATOR;
        p.X += FieldElement::ONE;
        assert!(!bool::from(p.is_on_curve()));
    }

    #[test]
    fn sum_of_empty_is_identity() {
        let empty: [EdwardsPoint; 0] = [];
        assert_eq!(empty.iter().sum::<EdwardsPoint>(), EdwardsPoint::IDENTITY);
    }
}
