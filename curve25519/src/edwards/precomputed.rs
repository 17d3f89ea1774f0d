use super::{AffinePoint, CompletedPoint, EdwardsPoint};
use crate::field::FieldElement;
use subtle::{Choice, ConditionallyNegatable, ConditionallySelectable, ConstantTimeEq};

/// A point with `Z = 1` stored as `(y + x, y - x, 2dxy)`, the form of the
/// basepoint table entries.
///
/// Adding one to an [`EdwardsPoint`] costs 7 multiplications.
#[derive(Copy, Clone, Debug)]
pub struct PrecomputedPoint {
    pub(crate) y_plus_x: FieldElement,
    pub(crate) y_minus_x: FieldElement,
    pub(crate) xy2d: FieldElement,
}

impl Default for PrecomputedPoint {
    fn default() -> PrecomputedPoint {
        PrecomputedPoint::IDENTITY
    }
}

impl ConditionallySelectable for PrecomputedPoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        PrecomputedPoint {
            y_plus_x: FieldElement::conditional_select(&a.y_plus_x, &b.y_plus_x, choice),
            y_minus_x: FieldElement::conditional_select(&a.y_minus_x, &b.y_minus_x, choice),
            xy2d: FieldElement::conditional_select(&a.xy2d, &b.xy2d, choice),
        }
    }
}

impl ConditionallyNegatable for PrecomputedPoint {
    fn conditional_negate(&mut self, choice: Choice) {
        FieldElement::conditional_swap(&mut self.y_minus_x, &mut self.y_plus_x, choice);
        self.xy2d.conditional_negate(choice);
    }
}

impl ConstantTimeEq for PrecomputedPoint {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.y_plus_x.ct_eq(&other.y_plus_x)
            & self.y_minus_x.ct_eq(&other.y_minus_x)
            & self.xy2d.ct_eq(&other.xy2d)
    }
}

impl PartialEq for PrecomputedPoint {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}
impl Eq for PrecomputedPoint {}

impl PrecomputedPoint {
    /// Identity element: `(1, 1, 0)`
    pub const IDENTITY: PrecomputedPoint = PrecomputedPoint {
        y_plus_x: FieldElement::ONE,
        y_minus_x: FieldElement::ONE,
        xy2d: FieldElement::ZERO,
    };

    /// Convert back to extended coordinates.
    pub fn to_extended(&self) -> EdwardsPoint {
        // ((2x : 2), (2y : 2))
        CompletedPoint {
            X: self.y_plus_x - self.y_minus_x,
            Y: self.y_plus_x + self.y_minus_x,
            Z: FieldElement::TWO,
            T: FieldElement::TWO,
        }
        .to_extended()
    }
}

impl From<&AffinePoint> for PrecomputedPoint {
    fn from(point: &AffinePoint) -> Self {
        PrecomputedPoint {
            y_plus_x: point.y + point.x,
            y_minus_x: point.y - point.x,
            xy2d: point.x * point.y * FieldElement::EDWARDS_D2,
        }
    }
}

impl From<AffinePoint> for PrecomputedPoint {
    fn from(point: AffinePoint) -> Self {
        PrecomputedPoint::from(&point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity() {
        assert_eq!(
            PrecomputedPoint::from(&AffinePoint::IDENTITY),
            PrecomputedPoint::IDENTITY
        );
        assert_eq!(PrecomputedPoint::IDENTITY.to_extended(), EdwardsPoint::IDENTITY);
    }

    #[test]
    fn add_identity_is_noop() {
        let p = EdwardsPoint::GENERATOR.double();
        let sum = p.add_precomputed(&PrecomputedPoint::IDENTITY).to_extended();
        assert_eq!(sum, p);
    }

    #[test]
    fn conditional_negate() {
        let bp = EdwardsPoint::GENERATOR;
        let mut bp_neg = PrecomputedPoint::from(&bp.to_affine());
        bp_neg.conditional_negate(1.into());
        assert_eq!(bp_neg.to_extended(), -bp);

        let expect_identity = bp.add_precomputed(&bp_neg).to_extended();
        assert_eq!(EdwardsPoint::IDENTITY, expect_identity);

        let mut unchanged = PrecomputedPoint::from(&bp.to_affine());
        unchanged.conditional_negate(0.into());
        assert_eq!(unchanged.to_extended(), bp);
    }

    #[test]
    fn round_trip_through_extended() {
        let p = EdwardsPoint::GENERATOR.double().double();
        assert_eq!(PrecomputedPoint::from(&p.to_affine()).to_extended(), p);
        assert!(bool::from(
            PrecomputedPoint::from(&p.to_affine())
                .to_extended()
                .is_on_curve()
        ));
    }
}
