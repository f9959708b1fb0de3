//! Scalar field arithmetic modulo the group order n.

use super::util::{adc, add_limbs, limbs_from_be_bytes, limbs_to_be_bytes, mul_wide, sub_limbs};
use crate::{Error, FieldBytes, Result, Secp256k1};
use core::{
    cmp::Ordering,
    iter::{Product, Sum},
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Shr, ShrAssign, Sub, SubAssign},
};
use elliptic_curve::{
    bigint::{Encoding, U256},
    ff::{self, Field, PrimeField},
    ops::{Invert, Reduce},
    rand_core::RngCore,
    scalar::{FromUintUnchecked, IsHigh},
    subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption},
    zeroize::DefaultIsZeroes,
    NonZeroScalar, ScalarPrimitive,
};

#[cfg(test)]
use num_bigint::BigUint;

/// The number of 64-bit limbs used to represent a [`Scalar`].
const LIMBS: usize = 4;

/// Constant representing the modulus
/// n = FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFE BAAEDCE6 AF48A03B BFD25E8C D0364141
pub(crate) const MODULUS: [u64; LIMBS] = [
    0xBFD2_5E8C_D036_4141,
    0xBAAE_DCE6_AF48_A03B,
    0xFFFF_FFFF_FFFF_FFFE,
    0xFFFF_FFFF_FFFF_FFFF,
];

/// Constant representing the modulus / 2 (rounded down)
const FRAC_MODULUS_2: [u64; LIMBS] = [
    0xDFE9_2F46_681B_20A0,
    0x5D57_6E73_57A4_501D,
    0xFFFF_FFFF_FFFF_FFFF,
    0x7FFF_FFFF_FFFF_FFFF,
];

/// 2^256 - n
const NEG_MODULUS: [u64; LIMBS] = [
    0x402D_A173_2FC9_BEBF,
    0x4551_2319_50B7_5FC4,
    0x0000_0000_0000_0001,
    0x0000_0000_0000_0000,
];

/// (t - 1) / 2 where n - 1 = 2^6 * t
const T_MINUS_ONE_OVER_TWO: [u64; LIMBS] = [
    0x777F_A4BD_19A0_6C82,
    0xFD75_5DB9_CD5E_9140,
    0xFFFF_FFFF_FFFF_FFFF,
    0x01FF_FFFF_FFFF_FFFF,
];

/// An element in the finite field modulo n, always kept below n.
#[derive(Clone, Copy, Debug, Default)]
pub struct Scalar(pub(crate) [u64; LIMBS]);

impl Scalar {
    /// Zero scalar.
    pub const ZERO: Self = Self([0, 0, 0, 0]);

    /// Multiplicative identity.
    pub const ONE: Self = Self([1, 0, 0, 0]);

    /// Attempts to parse the given byte array as a big-endian scalar.
    ///
    /// Returns `None` if the bytes do not contain an integer in the range `[0, n)`.
    pub fn from_bytes(bytes: &[u8; 32]) -> CtOption<Self> {
        let w = limbs_from_be_bytes(bytes);

        // If w is in the range [0, n) then w - n will borrow.
        let (_, borrow) = sub_limbs(&w, &MODULUS);
        CtOption::new(Self(w), Choice::from(borrow as u8))
    }

    /// Interprets the bytes as a big-endian integer and reduces it modulo n.
    ///
    /// Since `2^256 < 2n`, a single conditional subtraction suffices.
    pub fn from_bytes_reduced(bytes: &[u8; 32]) -> Self {
        Self::sub_modulus_if_needed(limbs_from_be_bytes(bytes), 0)
    }

    /// Returns the big-endian encoding of this scalar.
    pub fn to_bytes(&self) -> [u8; 32] {
        limbs_to_be_bytes(&self.0)
    }

    /// Is this scalar equal to zero?
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Self::ZERO)
    }

    /// Is this scalar greater than n / 2?
    ///
    /// Signatures whose `s` is high are the ones low-s normalization rewrites.
    pub fn is_high(&self) -> Choice {
        let (_, borrow) = sub_limbs(&FRAC_MODULUS_2, &self.0);
        Choice::from(borrow as u8)
    }

    /// Is this scalar a valid secret key, i.e. non-zero?
    ///
    /// The `< n` half of the check is guaranteed by construction.
    pub fn is_valid_secret(&self) -> Choice {
        !self.is_zero()
    }

    fn sub_modulus_if_needed(limbs: [u64; LIMBS], carry: u64) -> Self {
        let (reduced, borrow) = sub_limbs(&limbs, &MODULUS);
        let keep = Choice::from((borrow & !carry & 1) as u8);
        Self::conditional_select(&Self(reduced), &Self(limbs), keep)
    }

    /// Returns `self + rhs mod n`.
    pub fn add(&self, rhs: &Self) -> Self {
        let (sum, carry) = add_limbs(&self.0, &rhs.0);
        Self::sub_modulus_if_needed(sum, carry)
    }

    /// Returns `self - rhs mod n`.
    pub fn sub(&self, rhs: &Self) -> Self {
        let (diff, borrow) = sub_limbs(&self.0, &rhs.0);
        let mask = borrow.wrapping_neg();
        let addend = [
            MODULUS[0] & mask,
            MODULUS[1] & mask,
            MODULUS[2] & mask,
            MODULUS[3] & mask,
        ];
        Self(add_limbs(&diff, &addend).0)
    }

    /// Returns `-self mod n`.
    pub fn negate(&self) -> Self {
        Self::ZERO.sub(self)
    }

    /// Returns `self * rhs mod n`.
    pub fn mul(&self, rhs: &Self) -> Self {
        let mut w = mul_wide(&self.0, &rhs.0);

        // Each pass rewrites `hi * 2^256 + lo` as `lo + hi * (2^256 - n)`.
        // The high half shrinks to at most 130, 4, 1 and finally 0 bits.
        for _ in 0..4 {
            w = Self::fold(&w);
        }

        Self::sub_modulus_if_needed([w[0], w[1], w[2], w[3]], 0)
    }

    fn fold(w: &[u64; 8]) -> [u64; 8] {
        let hi = [w[4], w[5], w[6], w[7]];
        let product = mul_wide(&hi, &NEG_MODULUS);

        let mut out = [0u64; 8];
        let mut carry = 0;
        for i in 0..8 {
            let lo = if i < 4 { w[i] } else { 0 };
            let (limb, c) = adc(lo, product[i], carry);
            out[i] = limb;
            carry = c;
        }
        out
    }

    /// Returns `self * self mod n`.
    pub fn square(&self) -> Self {
        self.mul(self)
    }

    /// Returns `self^(2^k) mod n`.
    fn pow2k(&self, k: usize) -> Self {
        let mut x = *self;
        for _ in 0..k {
            x = x.square();
        }
        x
    }

    /// Returns the multiplicative inverse of self, if self is non-zero.
    pub fn invert(&self) -> CtOption<Self> {
        // Addition chain for n - 2 from
        // https://briansmith.org/ecc-inversion-addition-chains-01#secp256k1_scalar_inversion
        let x_1 = *self;
        let x_10 = self.pow2k(1);
        let x_11 = x_10.mul(&x_1);
        let x_101 = x_10.mul(&x_11);
        let x_111 = x_10.mul(&x_101);
        let x_1001 = x_10.mul(&x_111);
        let x_1011 = x_10.mul(&x_1001);
        let x_1101 = x_10.mul(&x_1011);

        let x6 = x_1101.pow2k(2).mul(&x_1011);
        let x8 = x6.pow2k(2).mul(&x_11);
        let x14 = x8.pow2k(6).mul(&x6);
        let x28 = x14.pow2k(14).mul(&x14);
        let x56 = x28.pow2k(28).mul(&x28);

        #[rustfmt::skip]
        let res = x56
            .pow2k(56).mul(&x56)
            .pow2k(14).mul(&x14)
            .pow2k(3).mul(&x_101)
            .pow2k(4).mul(&x_111)
            .pow2k(4).mul(&x_101)
            .pow2k(5).mul(&x_1011)
            .pow2k(4).mul(&x_1011)
            .pow2k(4).mul(&x_111)
            .pow2k(5).mul(&x_111)
            .pow2k(6).mul(&x_1101)
            .pow2k(4).mul(&x_101)
            .pow2k(3).mul(&x_111)
            .pow2k(5).mul(&x_1001)
            .pow2k(6).mul(&x_101)
            .pow2k(10).mul(&x_111)
            .pow2k(4).mul(&x_111)
            .pow2k(9).mul(&x8)
            .pow2k(5).mul(&x_1001)
            .pow2k(6).mul(&x_1011)
            .pow2k(4).mul(&x_1101)
            .pow2k(5).mul(&x_11)
            .pow2k(6).mul(&x_1101)
            .pow2k(10).mul(&x_1101)
            .pow2k(4).mul(&x_1001)
            .pow2k(6).mul(&x_1)
            .pow2k(8).mul(&x6);

        CtOption::new(res, !self.is_zero())
    }

    /// Shifts the integer representation right by `shift` bits.
    ///
    /// Runs in time dependent on `shift` only.
    pub fn shr_vartime(&self, shift: usize) -> Self {
        let limb_shift = shift / 64;
        let bit_shift = shift % 64;
        let mut res = [0u64; LIMBS];

        for (i, limb) in res.iter_mut().enumerate() {
            let src = i + limb_shift;
            if src >= LIMBS {
                break;
            }
            *limb = self.0[src] >> bit_shift;
            if bit_shift > 0 && src + 1 < LIMBS {
                *limb |= self.0[src + 1] << (64 - bit_shift);
            }
        }

        Self(res)
    }

    #[cfg(test)]
    pub(crate) fn modulus_as_biguint() -> BigUint {
        BigUint::from_bytes_be(&limbs_to_be_bytes(&MODULUS))
    }
}

impl Field for Scalar {
    const ZERO: Self = Self::ZERO;
    const ONE: Self = Self::ONE;

    fn random(mut rng: impl RngCore) -> Self {
        let mut bytes = FieldBytes::default();

        // Rejection sampling: n is within 2^-127 of 2^256, so retries are rare.
        loop {
            rng.fill_bytes(&mut bytes);
            if let Some(scalar) = Option::<Self>::from(Self::from_bytes(&bytes)) {
                return scalar;
            }
        }
    }

    #[must_use]
    fn square(&self) -> Self {
        Scalar::square(self)
    }

    #[must_use]
    fn double(&self) -> Self {
        Scalar::add(self, self)
    }

    fn invert(&self) -> CtOption<Self> {
        Scalar::invert(self)
    }

    /// Tonelli-Shanks, since n ≡ 1 (mod 4).
    fn sqrt(&self) -> CtOption<Self> {
        ff::helpers::sqrt_tonelli_shanks(self, T_MINUS_ONE_OVER_TWO)
    }

    fn sqrt_ratio(num: &Self, div: &Self) -> (Choice, Self) {
        ff::helpers::sqrt_ratio_generic(num, div)
    }
}

impl PrimeField for Scalar {
    type Repr = elliptic_curve::FieldBytes<Secp256k1>;

    const MODULUS: &'static str =
        "0xfffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141";
    const NUM_BITS: u32 = 256;
    const CAPACITY: u32 = 255;
    const TWO_INV: Self = Self([
        0xDFE9_2F46_681B_20A1,
        0x5D57_6E73_57A4_501D,
        0xFFFF_FFFF_FFFF_FFFF,
        0x7FFF_FFFF_FFFF_FFFF,
    ]);
    const MULTIPLICATIVE_GENERATOR: Self = Self([7, 0, 0, 0]);
    const S: u32 = 6;
    const ROOT_OF_UNITY: Self = Self([
        0x992F_4B54_02B0_52F2,
        0x98BD_EAB6_8075_6045,
        0xDF98_79A3_FBC4_83A8,
        0x0C1D_C060_E7A9_1986,
    ]);
    const ROOT_OF_UNITY_INV: Self = Self([
        0xB6FB_30A0_884F_0D1C,
        0x77A2_7591_0AA4_13C3,
        0xEFC7_B0C7_5B8C_BB72,
        0xFD3A_E181_F12D_7096,
    ]);
    const DELTA: Self = Self([
        0x1994_17C8_C0BB_7601,
        0xD63B_78E7_80E1_341E,
        0x000C_BC21_FE45_61C8,
        0x0000_0000_0000_0000,
    ]);

    fn from_repr(repr: Self::Repr) -> CtOption<Self> {
        Self::from_bytes(&repr.into())
    }

    fn to_repr(&self) -> Self::Repr {
        self.to_bytes().into()
    }

    fn is_odd(&self) -> Choice {
        Choice::from((self.0[0] & 1) as u8)
    }
}

impl AsRef<Scalar> for Scalar {
    fn as_ref(&self) -> &Scalar {
        self
    }
}

impl TryFrom<&[u8]> for Scalar {
    type Error = Error;

    /// Parses a 32-byte big-endian scalar, rejecting values not below n.
    fn try_from(bytes: &[u8]) -> Result<Self> {
        let bytes: &[u8; 32] = bytes.try_into().map_err(|_| Error::InvalidLength)?;
        Option::from(Self::from_bytes(bytes)).ok_or(Error::OutOfRange)
    }
}

impl From<u64> for Scalar {
    fn from(k: u64) -> Self {
        Self([k, 0, 0, 0])
    }
}

impl From<Scalar> for elliptic_curve::FieldBytes<Secp256k1> {
    fn from(scalar: Scalar) -> Self {
        scalar.to_bytes().into()
    }
}

impl From<Scalar> for U256 {
    fn from(scalar: Scalar) -> U256 {
        U256::from_be_bytes(scalar.to_bytes())
    }
}

impl FromUintUnchecked for Scalar {
    type Uint = U256;

    fn from_uint_unchecked(uint: U256) -> Self {
        Self(limbs_from_be_bytes(&uint.to_be_bytes()))
    }
}

impl From<ScalarPrimitive<Secp256k1>> for Scalar {
    fn from(scalar: ScalarPrimitive<Secp256k1>) -> Scalar {
        Self::from_bytes_reduced(&scalar.as_uint().to_be_bytes())
    }
}

impl From<Scalar> for ScalarPrimitive<Secp256k1> {
    fn from(scalar: Scalar) -> ScalarPrimitive<Secp256k1> {
        // `Scalar` is always below n, so this never falls back to zero.
        ScalarPrimitive::new(scalar.into()).unwrap_or(ScalarPrimitive::ZERO)
    }
}

impl From<NonZeroScalar<Secp256k1>> for Scalar {
    fn from(scalar: NonZeroScalar<Secp256k1>) -> Scalar {
        *scalar.as_ref()
    }
}

impl Reduce<U256> for Scalar {
    type Bytes = elliptic_curve::FieldBytes<Secp256k1>;

    fn reduce(n: U256) -> Self {
        Self::from_bytes_reduced(&n.to_be_bytes())
    }

    fn reduce_bytes(bytes: &Self::Bytes) -> Self {
        Self::from_bytes_reduced(&(*bytes).into())
    }
}

impl Invert for Scalar {
    type Output = CtOption<Self>;

    fn invert(&self) -> CtOption<Self> {
        Scalar::invert(self)
    }
}

impl IsHigh for Scalar {
    fn is_high(&self) -> Choice {
        Scalar::is_high(self)
    }
}

impl ConditionallySelectable for Scalar {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self([
            u64::conditional_select(&a.0[0], &b.0[0], choice),
            u64::conditional_select(&a.0[1], &b.0[1], choice),
            u64::conditional_select(&a.0[2], &b.0[2], choice),
            u64::conditional_select(&a.0[3], &b.0[3], choice),
        ])
    }
}

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Scalar {}

impl PartialOrd for Scalar {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scalar {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.iter().rev().cmp(other.0.iter().rev())
    }
}

impl DefaultIsZeroes for Scalar {}

macro_rules! impl_scalar_op {
    ($op:ident, $op_fn:ident, $assign:ident, $assign_fn:ident, $inner:ident) => {
        impl $op<Scalar> for Scalar {
            type Output = Scalar;

            fn $op_fn(self, rhs: Scalar) -> Scalar {
                Scalar::$inner(&self, &rhs)
            }
        }

        impl $op<&Scalar> for Scalar {
            type Output = Scalar;

            fn $op_fn(self, rhs: &Scalar) -> Scalar {
                Scalar::$inner(&self, rhs)
            }
        }

        impl $op<&Scalar> for &Scalar {
            type Output = Scalar;

            fn $op_fn(self, rhs: &Scalar) -> Scalar {
                Scalar::$inner(self, rhs)
            }
        }

        impl $assign<Scalar> for Scalar {
            fn $assign_fn(&mut self, rhs: Scalar) {
                *self = Scalar::$inner(self, &rhs);
            }
        }

        impl $assign<&Scalar> for Scalar {
            fn $assign_fn(&mut self, rhs: &Scalar) {
                *self = Scalar::$inner(self, rhs);
            }
        }
    };
}

impl_scalar_op!(Add, add, AddAssign, add_assign, add);
impl_scalar_op!(Sub, sub, SubAssign, sub_assign, sub);
impl_scalar_op!(Mul, mul, MulAssign, mul_assign, mul);

impl Neg for Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        self.negate()
    }
}

impl Neg for &Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        self.negate()
    }
}

impl Shr<usize> for Scalar {
    type Output = Self;

    fn shr(self, rhs: usize) -> Self::Output {
        self.shr_vartime(rhs)
    }
}

impl Shr<usize> for &Scalar {
    type Output = Scalar;

    fn shr(self, rhs: usize) -> Self::Output {
        self.shr_vartime(rhs)
    }
}

impl ShrAssign<usize> for Scalar {
    fn shr_assign(&mut self, rhs: usize) {
        *self = self.shr_vartime(rhs);
    }
}

impl Sum for Scalar {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Scalar> for Scalar {
    fn sum<I: Iterator<Item = &'a Scalar>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Product for Scalar {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * x)
    }
}

impl<'a> Product<&'a Scalar> for Scalar {
    fn product<I: Iterator<Item = &'a Scalar>>(iter: I) -> Self {
        iter.copied().product()
    }
}
