use super::EdwardsPoint;
use crate::field::FieldElement;
use subtle::{Choice, ConditionallyNegatable, ConditionallySelectable};

/// An extended point stored as `(Y + X, Y - X, Z, 2dT)`, ready to be the
/// right-hand operand of [`EdwardsPoint::add_cached`] or
/// [`EdwardsPoint::sub_cached`].
#[derive(Copy, Clone, Debug)]
pub struct CachedPoint {
    pub(crate) Y_plus_X: FieldElement,
    pub(crate) Y_minus_X: FieldElement,
    pub(crate) Z: FieldElement,
    pub(crate) T2d: FieldElement,
}

impl Default for CachedPoint {
    fn default() -> CachedPoint {
        CachedPoint::IDENTITY
    }
}

impl ConditionallySelectable for CachedPoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        CachedPoint {
            Y_plus_X: FieldElement::conditional_select(&a.Y_plus_X, &b.Y_plus_X, choice),
            Y_minus_X: FieldElement::conditional_select(&a.Y_minus_X, &b.Y_minus_X, choice),
            Z: FieldElement::conditional_select(&a.Z, &b.Z, choice),
            T2d: FieldElement::conditional_select(&a.T2d, &b.T2d, choice),
        }
    }
}

impl ConditionallyNegatable for CachedPoint {
    fn conditional_negate(&mut self, choice: Choice) {
        FieldElement::conditional_swap(&mut self.Y_minus_X, &mut self.Y_plus_X, choice);
        self.T2d.conditional_negate(choice);
    }
}

impl CachedPoint {
    /// Identity element
    pub const IDENTITY: CachedPoint = CachedPoint {
        Y_plus_X: FieldElement::ONE,
        Y_minus_X: FieldElement::ONE,
        Z: FieldElement::ONE,
        T2d: FieldElement::ZERO,
    };
}

impl From<&EdwardsPoint> for CachedPoint {
    fn from(point: &EdwardsPoint) -> Self {
        point.to_cached()
    }
}

impl From<EdwardsPoint> for CachedPoint {
    fn from(point: EdwardsPoint) -> Self {
        point.to_cached()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity() {
        let p = EdwardsPoint::GENERATOR;
        assert_eq!(p.add_cached(&CachedPoint::IDENTITY).to_extended(), p);
        assert_eq!(
            EdwardsPoint::IDENTITY.add_cached(&p.to_cached()).to_extended(),
            p
        );
    }

    #[test]
    fn conditional_negate() {
        let p = EdwardsPoint::GENERATOR.double();
        let mut neg = p.to_cached();
        neg.conditional_negate(1.into());
        assert_eq!(p.add_cached(&neg).to_extended(), EdwardsPoint::IDENTITY);
        assert_eq!(
            EdwardsPoint::GENERATOR.add_cached(&neg).to_extended(),
            -EdwardsPoint::GENERATOR
        );
    }
}
