//! Field arithmetic modulo p = 2^256 - 2^32 - 2^9 - 2^8 - 2^7 - 2^6 - 2^4 - 1

use super::util::{add_limbs, limbs_from_be_bytes, limbs_to_be_bytes, mac, mul_wide, sub_limbs};
use crate::FieldBytes;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use elliptic_curve::{
    subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption},
    zeroize::DefaultIsZeroes,
};

#[cfg(test)]
use num_bigint::BigUint;

/// Number of 64-bit limbs in a [`FieldElement`].
const LIMBS: usize = 4;

/// p = FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFE FFFFFC2F
const MODULUS: [u64; LIMBS] = [
    0xFFFF_FFFE_FFFF_FC2F,
    0xFFFF_FFFF_FFFF_FFFF,
    0xFFFF_FFFF_FFFF_FFFF,
    0xFFFF_FFFF_FFFF_FFFF,
];

/// 2^256 mod p, used to fold the high half of a wide product.
const REDUCTION_CONSTANT: u64 = 0x1_0000_03D1;

/// An element of the base field of secp256k1, always kept in canonical form (`< p`).
#[derive(Clone, Copy, Debug)]
pub struct FieldElement([u64; LIMBS]);

impl FieldElement {
    /// Zero element.
    pub const ZERO: Self = Self([0, 0, 0, 0]);

    /// Multiplicative identity.
    pub const ONE: Self = Self([1, 0, 0, 0]);

    /// Attempts to parse the given byte array as an SEC1-encoded field element.
    ///
    /// Returns `None` if the bytes do not encode a big-endian integer in `[0, p)`.
    pub fn from_bytes(bytes: &FieldBytes) -> CtOption<Self> {
        let limbs = limbs_from_be_bytes(bytes);
        // A borrow out of `limbs - p` means the value is in range.
        let (_, borrow) = sub_limbs(&limbs, &MODULUS);
        CtOption::new(Self(limbs), Choice::from(borrow as u8))
    }

    /// Parses a field element from bytes known to encode a value below `p`.
    ///
    /// Used for curve constants; the range is not checked.
    pub(crate) const fn from_bytes_unchecked(bytes: &FieldBytes) -> Self {
        Self(limbs_from_be_bytes(bytes))
    }

    /// Creates a field element from a small integer.
    pub(crate) const fn from_u64(k: u64) -> Self {
        Self([k, 0, 0, 0])
    }

    /// Returns the SEC1 big-endian encoding of this element.
    pub fn to_bytes(self) -> FieldBytes {
        limbs_to_be_bytes(&self.0)
    }

    /// Is this element zero?
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Self::ZERO)
    }

    /// Is this element odd in the SEC1 sense (`self mod 2 == 1`)?
    pub fn is_odd(&self) -> Choice {
        Choice::from((self.0[0] & 1) as u8)
    }

    /// Subtracts `p` once if `limbs` (plus an external carry bit) is at least `p`.
    fn reduce_once(limbs: [u64; LIMBS], carry: u64) -> Self {
        let (reduced, borrow) = sub_limbs(&limbs, &MODULUS);
        // Keep the unreduced value only when it was below `p` and nothing carried out.
        let keep = Choice::from((borrow & !carry & 1) as u8);
        Self::conditional_select(&Self(reduced), &Self(limbs), keep)
    }

    /// Returns `self + rhs mod p`.
    pub fn add(&self, rhs: &Self) -> Self {
        let (sum, carry) = add_limbs(&self.0, &rhs.0);
        Self::reduce_once(sum, carry)
    }

    /// Returns `self - rhs mod p`.
    pub fn sub(&self, rhs: &Self) -> Self {
        let (diff, borrow) = sub_limbs(&self.0, &rhs.0);
        // On underflow add `p` back; `mask` is all ones exactly then.
        let mask = borrow.wrapping_neg();
        let addend = [
            MODULUS[0] & mask,
            MODULUS[1] & mask,
            MODULUS[2] & mask,
            MODULUS[3] & mask,
        ];
        Self(add_limbs(&diff, &addend).0)
    }

    /// Returns `2 * self mod p`.
    pub fn double(&self) -> Self {
        self.add(self)
    }

    /// Returns `-self mod p`.
    pub fn negate(&self) -> Self {
        Self::ZERO.sub(self)
    }

    /// Returns `self * rhs mod p`.
    pub fn mul(&self, rhs: &Self) -> Self {
        Self::reduce_wide(mul_wide(&self.0, &rhs.0))
    }

    /// Returns `self * self mod p`.
    pub fn square(&self) -> Self {
        self.mul(self)
    }

    /// Reduces a 512-bit product using `2^256 ≡ 0x1000003D1 (mod p)`.
    fn reduce_wide(w: [u64; 8]) -> Self {
        // First fold: lo + hi * R, leaving a carry limb below 2^34.
        let (r0, carry) = mac(w[0], w[4], REDUCTION_CONSTANT, 0);
        let (r1, carry) = mac(w[1], w[5], REDUCTION_CONSTANT, carry);
        let (r2, carry) = mac(w[2], w[6], REDUCTION_CONSTANT, carry);
        let (r3, carry) = mac(w[3], w[7], REDUCTION_CONSTANT, carry);

        // Second fold of the carry limb.
        let (r0, c) = mac(r0, carry, REDUCTION_CONSTANT, 0);
        let (folded, overflow) = add_limbs(&[r0, r1, r2, r3], &[0, c, 0, 0]);

        // An overflow here leaves a small value, so adding R cannot overflow again.
        let (folded, _) = add_limbs(
            &folded,
            &[REDUCTION_CONSTANT & overflow.wrapping_neg(), 0, 0, 0],
        );

        Self::reduce_once(folded, 0)
    }

    /// Returns `self^(2^k)`.
    fn pow2k(&self, k: usize) -> Self {
        let mut x = *self;
        for _ in 0..k {
            x = x.square();
        }
        x
    }

    /// Shared prefix of the exponentiation chains for `p - 2` and `(p + 1) / 4`.
    ///
    /// Returns `self^(2^n - 1)` for `n` in `{2, 22, 223}`.
    fn ones_chain(&self) -> (Self, Self, Self) {
        let x2 = self.pow2k(1).mul(self);
        let x3 = x2.pow2k(1).mul(self);
        let x6 = x3.pow2k(3).mul(&x3);
        let x9 = x6.pow2k(3).mul(&x3);
        let x11 = x9.pow2k(2).mul(&x2);
        let x22 = x11.pow2k(11).mul(&x11);
        let x44 = x22.pow2k(22).mul(&x22);
        let x88 = x44.pow2k(44).mul(&x44);
        let x176 = x88.pow2k(88).mul(&x88);
        let x220 = x176.pow2k(44).mul(&x44);
        let x223 = x220.pow2k(3).mul(&x3);
        (x2, x22, x223)
    }

    /// Returns the multiplicative inverse of self, if self is non-zero.
    ///
    /// Computes `self^(p - 2)` with a fixed addition chain, so the running time
    /// does not depend on the value.
    pub fn invert(&self) -> CtOption<Self> {
        let (x2, x22, x223) = self.ones_chain();
        let inverse = x223
            .pow2k(23)
            .mul(&x22)
            .pow2k(5)
            .mul(self)
            .pow2k(3)
            .mul(&x2)
            .pow2k(2)
            .mul(self);
        CtOption::new(inverse, !self.is_zero())
    }

    /// Returns the square root of self mod p, or `None` if no square root exists.
    pub fn sqrt(&self) -> CtOption<Self> {
        // p ≡ 3 (mod 4), so a candidate root is self^((p + 1) / 4). It is only a
        // root when self is a quadratic residue, which the final check decides.
        let (x2, x22, x223) = self.ones_chain();
        let candidate = x223.pow2k(23).mul(&x22).pow2k(6).mul(&x2).pow2k(2);
        let is_root = candidate.square().ct_eq(self);
        CtOption::new(candidate, is_root)
    }

    #[cfg(test)]
    pub(crate) fn modulus_as_biguint() -> BigUint {
        BigUint::from_bytes_be(&limbs_to_be_bytes(&MODULUS))
    }
}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self([
            u64::conditional_select(&a.0[0], &b.0[0], choice),
            u64::conditional_select(&a.0[1], &b.0[1], choice),
            u64::conditional_select(&a.0[2], &b.0[2], choice),
            u64::conditional_select(&a.0[3], &b.0[3], choice),
        ])
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for FieldElement {}

impl Default for FieldElement {
    fn default() -> Self {
        Self::ZERO
    }
}

impl DefaultIsZeroes for FieldElement {}

impl From<u64> for FieldElement {
    fn from(k: u64) -> Self {
        Self::from_u64(k)
    }
}

macro_rules! impl_field_op {
    ($op:ident, $op_fn:ident, $assign:ident, $assign_fn:ident, $inner:ident) => {
        impl $op<FieldElement> for FieldElement {
            type Output = FieldElement;

            fn $op_fn(self, rhs: FieldElement) -> FieldElement {
                FieldElement::$inner(&self, &rhs)
            }
        }

        impl $op<&FieldElement> for FieldElement {
            type Output = FieldElement;

            fn $op_fn(self, rhs: &FieldElement) -> FieldElement {
                FieldElement::$inner(&self, rhs)
            }
        }

        impl $op<&FieldElement> for &FieldElement {
            type Output = FieldElement;

            fn $op_fn(self, rhs: &FieldElement) -> FieldElement {
                FieldElement::$inner(self, rhs)
            }
        }

        impl $assign<FieldElement> for FieldElement {
            fn $assign_fn(&mut self, rhs: FieldElement) {
                *self = FieldElement::$inner(self, &rhs);
            }
        }

        impl $assign<&FieldElement> for FieldElement {
            fn $assign_fn(&mut self, rhs: &FieldElement) {
                *self = FieldElement::$inner(self, rhs);
            }
        }
    };
}

impl_field_op!(Add, add, AddAssign, add_assign, add);
impl_field_op!(Sub, sub, SubAssign, sub_assign, sub);
impl_field_op!(Mul, mul, MulAssign, mul_assign, mul);

impl Neg for FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        self.negate()
    }
}

impl Neg for &FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        self.negate()
    }
}
