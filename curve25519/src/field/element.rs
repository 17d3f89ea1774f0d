use core::fmt::{self, Debug, Display, Formatter, LowerHex, UpperHex};
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::util::{load8, store8x4};
use elliptic_curve::zeroize::DefaultIsZeroes;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

const LOW_51_BIT_MASK: u64 = (1 << 51) - 1;

/// Limb 0 of `4p`.
const FOUR_P0: u64 = 0x1f_ffff_ffff_ffb4;
/// Limbs 1 through 4 of `4p`.
const FOUR_P1234: u64 = 0x1f_ffff_ffff_fffc;

/// An element of GF(2^255 - 19), stored as five unsigned 51-bit limbs.
///
/// The represented value is
/// `limb[0] + limb[1] 2^51 + limb[2] 2^102 + limb[3] 2^153 + limb[4] 2^204 mod p`.
/// Limbs are allowed to grow a few bits past 51 between operations; every
/// operation accepts limbs below 2^54. Reduction into `[0, p)` only happens
/// in [`FieldElement::to_bytes`].
#[derive(Clone, Copy, Default)]
pub struct FieldElement(pub(crate) [u64; 5]);

impl Display for FieldElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        LowerHex::fmt(self, f)
    }
}

impl Debug for FieldElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement({self:x})")
    }
}

impl LowerHex for FieldElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for b in self.to_bytes().iter().rev() {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

impl UpperHex for FieldElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for b in self.to_bytes().iter().rev() {
            write!(f, "{b:02X}")?;
        }
        Ok(())
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.to_bytes().ct_eq(&other.to_bytes())
    }
}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self([
            u64::conditional_select(&a.0[0], &b.0[0], choice),
            u64::conditional_select(&a.0[1], &b.0[1], choice),
            u64::conditional_select(&a.0[2], &b.0[2], choice),
            u64::conditional_select(&a.0[3], &b.0[3], choice),
            u64::conditional_select(&a.0[4], &b.0[4], choice),
        ])
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &FieldElement) -> bool {
        self.ct_eq(other).into()
    }
}
impl Eq for FieldElement {}

impl DefaultIsZeroes for FieldElement {}

impl Add<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn add(self, rhs: &FieldElement) -> FieldElement {
        let (f, g) = (&self.0, &rhs.0);
        FieldElement::propagate_carries([
            f[0] + g[0],
            f[1] + g[1],
            f[2] + g[2],
            f[3] + g[3],
            f[4] + g[4],
        ])
    }
}

define_add_variants!(LHS = FieldElement, RHS = FieldElement, Output = FieldElement);
define_add_assign_variants!(LHS = FieldElement, RHS = FieldElement);

impl Sub<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn sub(self, rhs: &FieldElement) -> FieldElement {
        // Adding 4p keeps every limb non-negative for subtrahends with limbs below 2^53.
        let (f, g) = (&self.0, &rhs.0);
        FieldElement::propagate_carries([
            (f[0] + FOUR_P0) - g[0],
            (f[1] + FOUR_P1234) - g[1],
            (f[2] + FOUR_P1234) - g[2],
            (f[3] + FOUR_P1234) - g[3],
            (f[4] + FOUR_P1234) - g[4],
        ])
    }
}

define_sub_variants!(LHS = FieldElement, RHS = FieldElement, Output = FieldElement);
define_sub_assign_variants!(LHS = FieldElement, RHS = FieldElement);

impl Mul<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn mul(self, rhs: &FieldElement) -> FieldElement {
        #[inline(always)]
        fn m(x: u64, y: u64) -> u128 {
            (x as u128) * (y as u128)
        }

        let [f0, f1, f2, f3, f4] = self.0;
        let [g0, g1, g2, g3, g4] = rhs.0;

        // Limbs 5..8 of the schoolbook product wrap around with a factor of 19.
        let f1_19 = f1 * 19;
        let f2_19 = f2 * 19;
        let f3_19 = f3 * 19;
        let f4_19 = f4 * 19;

        let t0 = m(f0, g0) + m(f1_19, g4) + m(f2_19, g3) + m(f3_19, g2) + m(f4_19, g1);
        let mut t1 = m(f0, g1) + m(f1, g0) + m(f2_19, g4) + m(f3_19, g3) + m(f4_19, g2);
        let mut t2 = m(f0, g2) + m(f1, g1) + m(f2, g0) + m(f3_19, g4) + m(f4_19, g3);
        let mut t3 = m(f0, g3) + m(f1, g2) + m(f2, g1) + m(f3, g0) + m(f4_19, g4);
        let mut t4 = m(f0, g4) + m(f1, g3) + m(f2, g2) + m(f3, g1) + m(f4, g0);

        t1 += t0 >> 51;
        let r0 = (t0 as u64) & LOW_51_BIT_MASK;
        t2 += t1 >> 51;
        let r1 = (t1 as u64) & LOW_51_BIT_MASK;
        t3 += t2 >> 51;
        let r2 = (t2 as u64) & LOW_51_BIT_MASK;
        t4 += t3 >> 51;
        let r3 = (t3 as u64) & LOW_51_BIT_MASK;
        let r4 = (t4 as u64) & LOW_51_BIT_MASK;

        let carry = (t4 >> 51) as u64;
        let r0 = r0 + carry * 19;
        let r1 = r1 + (r0 >> 51);
        let r0 = r0 & LOW_51_BIT_MASK;

        FieldElement([r0, r1, r2, r3, r4])
    }
}

define_mul_variants!(LHS = FieldElement, RHS = FieldElement, Output = FieldElement);
define_mul_assign_variants!(LHS = FieldElement, RHS = FieldElement);

impl Neg for &FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        let f = &self.0;
        FieldElement::propagate_carries([
            FOUR_P0 - f[0],
            FOUR_P1234 - f[1],
            FOUR_P1234 - f[2],
            FOUR_P1234 - f[3],
            FOUR_P1234 - f[4],
        ])
    }
}

define_neg_variant!(FieldElement);

impl FieldElement {
    /// Zero
    pub const ZERO: Self = Self([0, 0, 0, 0, 0]);
    /// One
    pub const ONE: Self = Self([1, 0, 0, 0, 0]);
    /// Two
    pub const TWO: Self = Self([2, 0, 0, 0, 0]);
    /// p - 1
    pub const MINUS_ONE: Self = Self([
        0x7_ffff_ffff_ffec,
        0x7_ffff_ffff_ffff,
        0x7_ffff_ffff_ffff,
        0x7_ffff_ffff_ffff,
        0x7_ffff_ffff_ffff,
    ]);
    /// Edwards `d = -121665/121666`
    pub const EDWARDS_D: Self = Self([
        0x3_4dca_1359_78a3,
        0x1_a828_3b15_6ebd,
        0x5_e7a2_6001_c029,
        0x7_39c6_63a0_3cbb,
        0x5_2036_cee2_b6ff,
    ]);
    /// `2d`
    pub const EDWARDS_D2: Self = Self([
        0x6_9b94_26b2_f159,
        0x3_5050_762a_dd7a,
        0x3_cf44_c003_8052,
        0x6_738c_c740_7977,
        0x2_406d_9dc5_6dff,
    ]);
    /// A square root of -1 (`2^((p-1)/4)`)
    pub const SQRT_M1: Self = Self([
        0x6_1b27_4a0e_a0b0,
        0x0_d5a5_fc8f_189d,
        0x7_ef5e_9cbd_0c60,
        0x7_8595_a680_4c9e,
        0x2_b832_4804_fc1d,
    ]);

    /// Load a field element from 32 little-endian bytes.
    ///
    /// Bit 255 is ignored. Encodings of `p..2^255` are accepted and wrap
    /// around; this does not validate.
    pub const fn from_bytes(bytes: &[u8; 32]) -> Self {
        Self([
            load8(bytes, 0) & LOW_51_BIT_MASK,
            (load8(bytes, 6) >> 3) & LOW_51_BIT_MASK,
            (load8(bytes, 12) >> 6) & LOW_51_BIT_MASK,
            (load8(bytes, 19) >> 1) & LOW_51_BIT_MASK,
            (load8(bytes, 24) >> 12) & LOW_51_BIT_MASK,
        ])
    }

    /// Encode this element as 32 little-endian bytes of its canonical value in `[0, p)`.
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut t = Self::carry_full(self.0);
        t = Self::carry_full(t);

        // Value is now below 2^255 + small. Adding 19 carries out of bit 255
        // exactly when the value is at least p.
        t[0] += 19;
        t = Self::carry_full(t);

        // Add 2^255 - 19 and drop bit 255: subtracts p iff the previous step
        // did not already wrap.
        t[0] += (LOW_51_BIT_MASK + 1) - 19;
        t[1] += LOW_51_BIT_MASK;
        t[2] += LOW_51_BIT_MASK;
        t[3] += LOW_51_BIT_MASK;
        t[4] += LOW_51_BIT_MASK;
        let t = Self::carry_final(t);

        store8x4([
            t[0] | (t[1] << 51),
            (t[1] >> 13) | (t[2] << 38),
            (t[2] >> 26) | (t[3] << 25),
            (t[3] >> 39) | (t[4] << 12),
        ])
    }

    /// The sign of this element: the low bit of its canonical encoding.
    pub fn is_negative(&self) -> Choice {
        Choice::from(self.to_bytes()[0] & 1)
    }

    /// Whether this element is zero.
    pub fn is_zero(&self) -> Choice {
        self.to_bytes().ct_eq(&[0u8; 32])
    }

    /// Compute `self^2`.
    pub fn square(&self) -> Self {
        self.square_n(1)
    }

    /// Compute `self^(2^n)` by squaring `n` times.
    pub fn square_n(&self, n: u32) -> Self {
        let mut r = self.0;
        for _ in 0..n {
            r = Self::square_inner(&r);
        }
        Self(r)
    }

    /// Compute `2 * self^2`.
    pub fn square_and_double(&self) -> Self {
        let mut r = Self::square_inner(&self.0);
        for limb in r.iter_mut() {
            *limb += *limb;
        }
        Self(r)
    }

    /// Compute `self^(p-2)`, the multiplicative inverse of a nonzero element.
    ///
    /// Zero maps to zero. The addition chain is the same for every input.
    pub fn invert(&self) -> Self {
        let (t19, t3) = self.pow22501();
        // 2^255 - 2^5 + 11 = p - 2
        &t19.square_n(5) * &t3
    }

    /// Compute `self^((p-5)/8)`, the exponent used by the square root in
    /// point decompression.
    pub fn pow_p58(&self) -> Self {
        let (t19, _) = self.pow22501();
        // 2^252 - 4 + 1 = (p - 5) / 8
        &t19.square_n(2) * self
    }

    /// Returns `(self^(2^250 - 1), self^11)`, the common prefix of the
    /// inversion and square root addition chains.
    fn pow22501(&self) -> (Self, Self) {
        let t0 = self.square(); // 2
        let t1 = t0.square_n(2); // 8
        let t2 = self * &t1; // 9
        let t3 = &t0 * &t2; // 11
        let t4 = t3.square(); // 22
        let t5 = &t2 * &t4; // 2^5 - 1
        let t6 = t5.square_n(5);
        let t7 = &t6 * &t5; // 2^10 - 1
        let t8 = t7.square_n(10);
        let t9 = &t8 * &t7; // 2^20 - 1
        let t10 = t9.square_n(20);
        let t11 = &t10 * &t9; // 2^40 - 1
        let t12 = t11.square_n(10);
        let t13 = &t12 * &t7; // 2^50 - 1
        let t14 = t13.square_n(50);
        let t15 = &t14 * &t13; // 2^100 - 1
        let t16 = t15.square_n(100);
        let t17 = &t16 * &t15; // 2^200 - 1
        let t18 = t17.square_n(50);
        let t19 = &t18 * &t13; // 2^250 - 1

        (t19, t3)
    }

    #[inline(always)]
    fn square_inner(r: &[u64; 5]) -> [u64; 5] {
        #[inline(always)]
        fn m(x: u64, y: u64) -> u128 {
            (x as u128) * (y as u128)
        }

        let [r0, r1, r2, r3, r4] = *r;

        let d0 = r0 * 2;
        let d1 = r1 * 2;
        let d2 = r2 * 2 * 19;
        let d419 = r4 * 19;
        let d4 = d419 * 2;

        let t0 = m(r0, r0) + m(d4, r1) + m(d2, r3);
        let t1 = m(d0, r1) + m(d4, r2) + m(r3, r3 * 19);
        let t2 = m(d0, r2) + m(r1, r1) + m(d4, r3);
        let t3 = m(d0, r3) + m(d1, r2) + m(r4, d419);
        let t4 = m(d0, r4) + m(d1, r3) + m(r2, r2);

        let mut out = [
            (t0 as u64) & LOW_51_BIT_MASK,
            ((t1 as u64) & LOW_51_BIT_MASK) + (t0 >> 51) as u64,
            ((t2 as u64) & LOW_51_BIT_MASK) + (t1 >> 51) as u64,
            ((t3 as u64) & LOW_51_BIT_MASK) + (t2 >> 51) as u64,
            ((t4 as u64) & LOW_51_BIT_MASK) + (t3 >> 51) as u64,
        ];
        out[0] += ((t4 >> 51) as u64) * 19;

        Self::propagate_carries(out).0
    }

    /// Sequential carry through all five limbs, folding the top carry back
    /// into limb 0 with a factor of 19.
    #[inline(always)]
    fn propagate_carries(mut h: [u64; 5]) -> Self {
        for i in 0..4 {
            h[i + 1] += h[i] >> 51;
            h[i] &= LOW_51_BIT_MASK;
        }
        let carry = h[4] >> 51;
        h[4] &= LOW_51_BIT_MASK;
        h[0] += carry * 19;
        Self(h)
    }

    #[inline(always)]
    fn carry_full(t: [u64; 5]) -> [u64; 5] {
        let t1 = t[1] + (t[0] >> 51);
        let t2 = t[2] + (t1 >> 51);
        let t3 = t[3] + (t2 >> 51);
        let t4 = t[4] + (t3 >> 51);
        let t0 = (t[0] & LOW_51_BIT_MASK) + 19 * (t4 >> 51);
        [
            t0,
            t1 & LOW_51_BIT_MASK,
            t2 & LOW_51_BIT_MASK,
            t3 & LOW_51_BIT_MASK,
            t4 & LOW_51_BIT_MASK,
        ]
    }

    /// Like `carry_full`, but the carry out of limb 4 is discarded.
    #[inline(always)]
    fn carry_final(t: [u64; 5]) -> [u64; 5] {
        let t1 = t[1] + (t[0] >> 51);
        let t2 = t[2] + (t1 >> 51);
        let t3 = t[3] + (t2 >> 51);
        let t4 = t[4] + (t3 >> 51);
        [
            t[0] & LOW_51_BIT_MASK,
            t1 & LOW_51_BIT_MASK,
            t2 & LOW_51_BIT_MASK,
            t3 & LOW_51_BIT_MASK,
            t4 & LOW_51_BIT_MASK,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::{biguint_to_bytes, bytes_to_biguint};
    use hex_literal::hex;
    use num_bigint::BigUint;
    use num_traits::One;
    use proptest::prelude::*;

    fn modulus() -> BigUint {
        (BigUint::one() << 255u32) - 19u32
    }

    fn to_biguint(fe: &FieldElement) -> BigUint {
        bytes_to_biguint(&fe.to_bytes())
    }

    fn from_biguint(x: &BigUint) -> FieldElement {
        FieldElement::from_bytes(&biguint_to_bytes(x))
    }

    const P_BYTES: [u8; 32] =
        hex!("edffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff7f");

    #[test]
    fn from_bytes_zero() {
        let zero = FieldElement::from_bytes(&[0u8; 32]);
        assert_eq!(zero, FieldElement::ZERO);
        assert_eq!(zero.to_bytes(), [0u8; 32]);
        assert!(bool::from(zero.is_zero()));
    }

    #[test]
    fn from_bytes_wraps_modulus() {
        let p = FieldElement::from_bytes(&P_BYTES);
        assert_eq!(p.to_bytes(), [0u8; 32]);
        assert!(bool::from(p.is_zero()));

        let mut p_plus_one = P_BYTES;
        p_plus_one[0] += 1;
        assert_eq!(FieldElement::from_bytes(&p_plus_one), FieldElement::ONE);

        // 2^255 - 1 = p + 18
        let max = [0xff; 32];
        let mut eighteen = [0u8; 32];
        eighteen[0] = 18;
        assert_eq!(FieldElement::from_bytes(&max).to_bytes(), eighteen);
    }

    #[test]
    fn from_bytes_ignores_top_bit() {
        let mut bytes = [0u8; 32];
        bytes[0] = 5;
        let a = FieldElement::from_bytes(&bytes);
        bytes[31] = 0x80;
        assert_eq!(FieldElement::from_bytes(&bytes).to_bytes(), a.to_bytes());
    }

    #[test]
    fn minus_one() {
        assert_eq!(-FieldElement::ONE, FieldElement::MINUS_ONE);
        let mut expected = P_BYTES;
        expected[0] -= 1;
        assert_eq!(FieldElement::MINUS_ONE.to_bytes(), expected);
    }

    #[test]
    fn constants() {
        // d * 121666 == -121665
        let n121666 = FieldElement([121666, 0, 0, 0, 0]);
        let n121665 = FieldElement([121665, 0, 0, 0, 0]);
        assert_eq!(FieldElement::EDWARDS_D * n121666, -n121665);
        assert_eq!(
            FieldElement::EDWARDS_D + FieldElement::EDWARDS_D,
            FieldElement::EDWARDS_D2
        );
        assert_eq!(FieldElement::SQRT_M1.square(), FieldElement::MINUS_ONE);
    }

    #[test]
    fn invert_zero_is_zero() {
        assert_eq!(FieldElement::ZERO.invert(), FieldElement::ZERO);
    }

    #[test]
    fn invert_one() {
        assert_eq!(FieldElement::ONE.invert(), FieldElement::ONE);
    }

    #[test]
    fn sign() {
        assert!(!bool::from(FieldElement::ZERO.is_negative()));
        assert!(bool::from(FieldElement::ONE.is_negative()));
        // p - 1 is even
        assert!(!bool::from(FieldElement::MINUS_ONE.is_negative()));
    }

    #[test]
    fn hex_formatting() {
        assert_eq!(
            format!("{}", FieldElement::MINUS_ONE),
            "7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffec"
        );
        assert_eq!(
            format!("{:X}", FieldElement::ONE),
            "0000000000000000000000000000000000000000000000000000000000000001"
        );
        assert_eq!(
            format!("{:?}", FieldElement::ZERO),
            "FieldElement(0000000000000000000000000000000000000000000000000000000000000000)"
        );
    }

    #[test]
    fn conditional_select() {
        let a = FieldElement::ONE;
        let b = FieldElement::SQRT_M1;
        assert_eq!(FieldElement::conditional_select(&a, &b, Choice::from(0)), a);
        assert_eq!(FieldElement::conditional_select(&a, &b, Choice::from(1)), b);
    }

    prop_compose! {
        fn field_element()(bytes in any::<[u8; 32]>()) -> FieldElement {
            FieldElement::from_bytes(&bytes)
        }
    }

    proptest! {
        #[test]
        fn fuzzy_encoding(bytes in any::<[u8; 32]>()) {
            let mut masked = bytes;
            masked[31] &= 0x7f;
            let expected = bytes_to_biguint(&masked) % modulus();
            let fe = FieldElement::from_bytes(&bytes);
            prop_assert_eq!(to_biguint(&fe), expected.clone());
            prop_assert_eq!(fe.to_bytes(), biguint_to_bytes(&expected));
        }

        #[test]
        fn fuzzy_add(a in field_element(), b in field_element()) {
            let expected = (to_biguint(&a) + to_biguint(&b)) % modulus();
            prop_assert_eq!(to_biguint(&(a + b)), expected);
            prop_assert_eq!(a + b, b + a);
        }

        #[test]
        fn fuzzy_sub(a in field_element(), b in field_element()) {
            let m = modulus();
            let expected = (to_biguint(&a) + &m - to_biguint(&b)) % &m;
            prop_assert_eq!(to_biguint(&(a - b)), expected);
        }

        #[test]
        fn fuzzy_negate(a in field_element()) {
            let m = modulus();
            let expected = (&m - to_biguint(&a)) % &m;
            prop_assert_eq!(to_biguint(&(-a)), expected);
            prop_assert!(bool::from((a + (-a)).is_zero()));
        }

        #[test]
        fn fuzzy_mul(a in field_element(), b in field_element()) {
            let expected = (to_biguint(&a) * to_biguint(&b)) % modulus();
            prop_assert_eq!(to_biguint(&(a * b)), expected);
        }

        #[test]
        fn fuzzy_square(a in field_element()) {
            let a_bi = to_biguint(&a);
            let expected = (&a_bi * &a_bi) % modulus();
            prop_assert_eq!(to_biguint(&a.square()), expected);
            prop_assert_eq!(a.square(), a * a);
        }

        #[test]
        fn fuzzy_square_n(a in field_element(), n in 0u32..24) {
            let mut expected = a;
            for _ in 0..n {
                expected = expected.square();
            }
            prop_assert_eq!(a.square_n(n), expected);
        }

        #[test]
        fn fuzzy_square_and_double(a in field_element()) {
            let sq = a.square();
            prop_assert_eq!(a.square_and_double(), sq + sq);
        }

        #[test]
        fn fuzzy_invert(a in field_element()) {
            let inv = a.invert();
            if bool::from(a.is_zero()) {
                prop_assert_eq!(inv, FieldElement::ZERO);
            } else {
                prop_assert_eq!(a * inv, FieldElement::ONE);
            }
        }

        #[test]
        fn fuzzy_pow_p58(a in field_element()) {
            let m = modulus();
            let exp = (&m - 5u32) >> 3u32;
            let expected = to_biguint(&a).modpow(&exp, &m);
            prop_assert_eq!(a.pow_p58(), from_biguint(&expected));
        }

        #[test]
        fn field_laws(a in field_element(), b in field_element(), c in field_element()) {
            prop_assert_eq!((a + b) + c, a + (b + c));
            prop_assert_eq!((a * b) * c, a * (b * c));
            prop_assert_eq!(a * (b + c), a * b + a * c);
            prop_assert_eq!(a - b, -(b - a));
        }

        #[test]
        fn assign_ops(a in field_element(), b in field_element()) {
            let mut x = a;
            x += b;
            prop_assert_eq!(x, a + b);
            x -= b;
            prop_assert_eq!(x, a);
            x *= &b;
            prop_assert_eq!(x, a * b);
        }
    }

    #[test]
    fn zero_one_identities() {
        let a = FieldElement::SQRT_M1;
        assert_eq!(a + FieldElement::ZERO, a);
        assert_eq!(a * FieldElement::ONE, a);
        assert!(bool::from((a * FieldElement::ZERO).is_zero()));
    }
}
