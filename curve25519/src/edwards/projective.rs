use super::CompletedPoint;
use crate::field::FieldElement;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// A point in projective coordinates `(X : Y : Z)`, affine `(X/Z, Y/Z)`.
///
/// Carries no `T`, which makes it the cheapest input for chains of doublings.
#[derive(Copy, Clone, Debug)]
pub struct ProjectivePoint {
    pub(crate) X: FieldElement,
    pub(crate) Y: FieldElement,
    pub(crate) Z: FieldElement,
}

impl Default for ProjectivePoint {
    fn default() -> ProjectivePoint {
        ProjectivePoint::IDENTITY
    }
}

impl ConstantTimeEq for ProjectivePoint {
    fn ct_eq(&self, other: &Self) -> Choice {
        let XZ = self.X * other.Z;
        let ZX = self.Z * other.X;

        let YZ = self.Y * other.Z;
        let ZY = self.Z * other.Y;

        XZ.ct_eq(&ZX) & YZ.ct_eq(&ZY)
    }
}

impl ConditionallySelectable for ProjectivePoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        ProjectivePoint {
            X: FieldElement::conditional_select(&a.X, &b.X, choice),
            Y: FieldElement::conditional_select(&a.Y, &b.Y, choice),
            Z: FieldElement::conditional_select(&a.Z, &b.Z, choice),
        }
    }
}

impl PartialEq for ProjectivePoint {
    fn eq(&self, other: &ProjectivePoint) -> bool {
        self.ct_eq(other).into()
    }
}
impl Eq for ProjectivePoint {}

impl ProjectivePoint {
    /// Identity point
    pub const IDENTITY: ProjectivePoint = ProjectivePoint {
        X: FieldElement::ZERO,
        Y: FieldElement::ONE,
        Z: FieldElement::ONE,
    };

    /// Double this point (4S).
    pub fn double(&self) -> CompletedPoint {
        let XX = self.X.square();
        let YY = self.Y.square();
        let ZZ2 = self.Z.square_and_double();
        let X_plus_Y_sq = (self.X + self.Y).square();
        let YY_plus_XX = YY + XX;
        let YY_minus_XX = YY - XX;

        CompletedPoint {
            X: X_plus_Y_sq - YY_plus_XX,
            Y: YY_plus_XX,
            Z: YY_minus_XX,
            T: ZZ2 - YY_minus_XX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EdwardsPoint;

    #[test]
    fn double_identity() {
        assert_eq!(
            ProjectivePoint::IDENTITY.double().to_projective(),
            ProjectivePoint::IDENTITY
        );
    }

    #[test]
    fn double_matches_addition() {
        let p = EdwardsPoint::GENERATOR;
        let doubled = p.to_projective().double().to_extended();
        assert_eq!(doubled, p + p);
    }

    #[test]
    fn repeated_doubling() {
        // 16 * P via four doublings, keeping only (X : Y : Z) in between
        let p = EdwardsPoint::GENERATOR;
        let mut r = p.to_projective();
        for _ in 0..3 {
            r = r.double().to_projective();
        }
        let sixteen_p = r.double().to_extended();

        let mut expected = EdwardsPoint::IDENTITY;
        for _ in 0..16 {
            expected += p;
        }
        assert_eq!(sixteen_p, expected);
    }
}
