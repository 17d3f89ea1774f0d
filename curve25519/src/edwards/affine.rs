use core::fmt::{Display, Formatter, LowerHex, Result as FmtResult, UpperHex};
use core::ops::Neg;

use super::EdwardsPoint;
use crate::field::FieldElement;
use elliptic_curve::{
    Error,
    zeroize::{DefaultIsZeroes, Zeroize},
};
use subtle::{Choice, ConditionallyNegatable, ConditionallySelectable, ConstantTimeEq, CtOption};

/// Affine point on Ed25519
#[derive(Copy, Clone, Debug)]
pub struct AffinePoint {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
}

impl AffinePoint {
    /// The identity point
    pub const IDENTITY: AffinePoint = AffinePoint {
        x: FieldElement::ZERO,
        y: FieldElement::ONE,
    };

    /// The basepoint `B`
    pub const GENERATOR: AffinePoint = AffinePoint {
        x: FieldElement([
            0x6_2d60_8f25_d51a,
            0x4_12a4_b4f6_592a,
            0x7_5b71_71a4_b31d,
            0x1_ff60_5271_18fe,
            0x2_1693_6d3c_d6e5,
        ]),
        y: FieldElement([
            0x6_6666_6666_6658,
            0x4_cccc_cccc_cccc,
            0x1_9999_9999_9999,
            0x3_3333_3333_3333,
            0x6_6666_6666_6666,
        ]),
    };

    /// Encode as `y` with the low bit of `x` in bit 255.
    pub fn compress(&self) -> CompressedEdwardsY {
        let mut bytes = self.y.to_bytes();
        bytes[31] |= self.x.is_negative().unwrap_u8() << 7;
        CompressedEdwardsY(bytes)
    }

    /// Whether `-x^2 + y^2 == 1 + d x^2 y^2` holds.
    pub fn is_on_curve(&self) -> Choice {
        let XX = self.x.square();
        let YY = self.y.square();
        let lhs = YY - XX;
        let rhs = FieldElement::ONE + FieldElement::EDWARDS_D * XX * YY;

        lhs.ct_eq(&rhs)
    }

    /// Lift to extended coordinates with `Z = 1`.
    pub fn to_edwards(&self) -> EdwardsPoint {
        EdwardsPoint {
            X: self.x,
            Y: self.y,
            Z: FieldElement::ONE,
            T: self.x * self.y,
        }
    }

    /// The X coordinate
    pub fn x(&self) -> [u8; 32] {
        self.x.to_bytes()
    }

    /// The Y coordinate
    pub fn y(&self) -> [u8; 32] {
        self.y.to_bytes()
    }
}

impl Default for AffinePoint {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ConstantTimeEq for AffinePoint {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.x.ct_eq(&other.x) & self.y.ct_eq(&other.y)
    }
}

impl ConditionallySelectable for AffinePoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
        }
    }
}

impl Eq for AffinePoint {}
impl PartialEq for AffinePoint {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl DefaultIsZeroes for AffinePoint {}

impl Neg for &AffinePoint {
    type Output = AffinePoint;

    fn neg(self) -> AffinePoint {
        AffinePoint {
            x: -self.x,
            y: self.y,
        }
    }
}

define_neg_variant!(AffinePoint);

/// The compressed internal representation of a point on Ed25519
pub type PointBytes = [u8; 32];

/// A 32-byte point encoding: `y` little-endian in the low 255 bits, the
/// parity of `x` in bit 255.
#[derive(Copy, Clone, Debug, Default)]
pub struct CompressedEdwardsY(pub PointBytes);

impl Zeroize for CompressedEdwardsY {
    fn zeroize(&mut self) {
        self.0.zeroize()
    }
}

impl Display for CompressedEdwardsY {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        LowerHex::fmt(self, f)
    }
}

impl LowerHex for CompressedEdwardsY {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for b in &self.0[..] {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

impl UpperHex for CompressedEdwardsY {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for b in &self.0[..] {
            write!(f, "{b:02X}")?;
        }
        Ok(())
    }
}

impl AsRef<[u8]> for CompressedEdwardsY {
    fn as_ref(&self) -> &[u8] {
        &self.0[..]
    }
}

impl ConstantTimeEq for CompressedEdwardsY {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl Eq for CompressedEdwardsY {}
impl PartialEq for CompressedEdwardsY {
    fn eq(&self, other: &CompressedEdwardsY) -> bool {
        self.ct_eq(other).into()
    }
}

impl From<PointBytes> for CompressedEdwardsY {
    fn from(point: PointBytes) -> Self {
        Self(point)
    }
}

impl From<&PointBytes> for CompressedEdwardsY {
    fn from(point: &PointBytes) -> Self {
        Self(*point)
    }
}

impl From<CompressedEdwardsY> for PointBytes {
    fn from(value: CompressedEdwardsY) -> Self {
        value.0
    }
}

impl TryFrom<&[u8]> for CompressedEdwardsY {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let bytes = <PointBytes>::try_from(value).map_err(|_| Error)?;
        Ok(CompressedEdwardsY(bytes))
    }
}

#[cfg(feature = "serde")]
impl serdect::serde::Serialize for CompressedEdwardsY {
    fn serialize<S: serdect::serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        serdect::array::serialize_hex_lower_or_bin(&self.0, s)
    }
}

#[cfg(feature = "serde")]
impl<'de> serdect::serde::Deserialize<'de> for CompressedEdwardsY {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: serdect::serde::Deserializer<'de>,
    {
        let mut arr = [0u8; 32];
        serdect::array::deserialize_hex_or_bin(&mut arr, d)?;
        Ok(CompressedEdwardsY(arr))
    }
}

impl CompressedEdwardsY {
    /// Encoding of the basepoint `B`
    pub const GENERATOR: Self = Self([
        0x58, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
        0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
        0x66, 0x66,
    ]);
    /// Encoding of the identity `(0, 1)`
    pub const IDENTITY: Self = Self([
        1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0,
    ]);

    /// Recover the affine point from its encoding.
    ///
    /// Returns `None` if:
    /// - the low 255 bits are not a canonical field element (`y >= p`);
    /// - `y` is not the y-coordinate of a curve point;
    /// - `x` would be zero but the sign bit is set.
    pub fn decompress(&self) -> CtOption<AffinePoint> {
        let mut y_bytes = self.0;
        y_bytes[31] &= 0x7f;
        let sign = Choice::from(self.0[31] >> 7);

        let y = FieldElement::from_bytes(&y_bytes);
        let is_canonical = y.to_bytes().ct_eq(&y_bytes);

        // x^2 = u / v
        let yy = y.square();
        let u = yy - FieldElement::ONE;
        let v = yy * FieldElement::EDWARDS_D + FieldElement::ONE;

        // Candidate root x = u v^3 (u v^7)^((p-5)/8)
        let v3 = v.square() * v;
        let v7 = v3.square() * v;
        let mut x = (u * v7).pow_p58() * v3 * u;

        // v x^2 is u, or -u when x is off by a factor of sqrt(-1)
        let vxx = v * x.square();
        let is_root = (vxx - u).is_zero();
        let is_flipped_root = (vxx + u).is_zero();
        x.conditional_assign(&(x * FieldElement::SQRT_M1), !is_root);

        let is_valid = is_canonical & (is_root | is_flipped_root) & !(x.is_zero() & sign);

        // Pick the root whose parity matches the sign bit
        x.conditional_negate(x.is_negative() ^ sign);

        CtOption::new(AffinePoint { x, y }, is_valid)
    }

    /// The encoded bytes.
    pub const fn as_bytes(&self) -> &PointBytes {
        &self.0
    }

    /// A copy of the encoded bytes.
    pub const fn to_bytes(&self) -> PointBytes {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn generator_round_trip() {
        let compressed = AffinePoint::GENERATOR.compress();
        assert_eq!(compressed, CompressedEdwardsY::GENERATOR);
        let decompressed = compressed.decompress().unwrap();
        assert_eq!(decompressed, AffinePoint::GENERATOR);
        assert!(bool::from(decompressed.is_on_curve()));
    }

    #[test]
    fn identity_round_trip() {
        assert_eq!(AffinePoint::IDENTITY.compress(), CompressedEdwardsY::IDENTITY);
        assert_eq!(
            CompressedEdwardsY::IDENTITY.decompress().unwrap(),
            AffinePoint::IDENTITY
        );
    }

    #[test]
    fn negated_generator() {
        let bytes = hex!("58666666666666666666666666666666666666666666666666666666666666e6");
        let neg = CompressedEdwardsY(bytes).decompress().unwrap();
        assert_eq!(neg, -AffinePoint::GENERATOR);
        assert_eq!(neg.compress().to_bytes(), bytes);
    }

    #[test]
    fn reject_non_square() {
        // y = 2 has no matching x
        let mut bytes = [0u8; 32];
        bytes[0] = 2;
        assert!(bool::from(CompressedEdwardsY(bytes).decompress().is_none()));
        bytes[31] = 0x80;
        assert!(bool::from(CompressedEdwardsY(bytes).decompress().is_none()));
    }

    #[test]
    fn reject_non_canonical_y() {
        // p + 1 is a non-canonical encoding of y = 1
        let bytes = hex!("eeffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff7f");
        assert!(bool::from(CompressedEdwardsY(bytes).decompress().is_none()));
        // p itself
        let bytes = hex!("edffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff7f");
        assert!(bool::from(CompressedEdwardsY(bytes).decompress().is_none()));
    }

    #[test]
    fn reject_negative_zero() {
        // identity with the sign bit set
        let bytes = hex!("0100000000000000000000000000000000000000000000000000000000000080");
        assert!(bool::from(CompressedEdwardsY(bytes).decompress().is_none()));
    }

    #[test]
    fn order_two_point() {
        // (0, -1)
        let bytes = hex!("ecffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff7f");
        let point = CompressedEdwardsY(bytes).decompress().unwrap();
        assert_eq!(point.x, FieldElement::ZERO);
        assert_eq!(point.y, FieldElement::MINUS_ONE);
        assert_eq!(point.to_edwards().double(), EdwardsPoint::IDENTITY);
    }

    #[test]
    fn try_from_slice() {
        let bytes = CompressedEdwardsY::GENERATOR.to_bytes();
        assert_eq!(
            CompressedEdwardsY::try_from(&bytes[..]).unwrap(),
            CompressedEdwardsY::GENERATOR
        );
        assert!(CompressedEdwardsY::try_from(&bytes[..31]).is_err());
    }

    #[test]
    fn hex_formatting() {
        assert_eq!(
            format!("{}", CompressedEdwardsY::GENERATOR),
            "5866666666666666666666666666666666666666666666666666666666666666"
        );
        assert_eq!(
            format!("{:X}", CompressedEdwardsY::IDENTITY),
            "0100000000000000000000000000000000000000000000000000000000000000"
        );
    }

    #[test]
    fn off_curve_affine_point() {
        let point = AffinePoint {
            x: FieldElement::ONE,
            y: FieldElement::ONE,
        };
        assert!(!bool::from(point.is_on_curve()));
    }
}
