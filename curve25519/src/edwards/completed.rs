use super::{EdwardsPoint, ProjectivePoint};
use crate::field::FieldElement;

/// A point in completed coordinates `((X : Z), (Y : T))`, i.e. affine
/// `x = X/Z` and `y = Y/T`.
///
/// This is what the addition and doubling formulas produce. It has to be
/// converted before it can be used again: [`CompletedPoint::to_projective`]
/// is cheaper when the next step is a doubling.
#[derive(Copy, Clone, Debug)]
pub struct CompletedPoint {
    pub(crate) X: FieldElement,
    pub(crate) Y: FieldElement,
    pub(crate) Z: FieldElement,
    pub(crate) T: FieldElement,
}

impl CompletedPoint {
    /// Convert to projective coordinates (3M).
    pub fn to_projective(&self) -> ProjectivePoint {
        ProjectivePoint {
            X: self.X * self.T,
            Y: self.Y * self.Z,
            Z: self.Z * self.T,
        }
    }

    /// Convert to extended coordinates (4M).
    pub fn to_extended(&self) -> EdwardsPoint {
        EdwardsPoint {
            X: self.X * self.T,
            Y: self.Y * self.Z,
            Z: self.Z * self.T,
            T: self.X * self.Y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_agree() {
        let p = EdwardsPoint::GENERATOR.to_projective().double();
        let extended = p.to_extended();
        let projective = p.to_projective();

        assert!(bool::from(extended.is_on_curve()));
        assert_eq!(extended.to_projective(), projective);
    }
}
