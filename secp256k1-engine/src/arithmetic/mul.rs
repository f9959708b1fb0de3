//! Scalar multiplication: signed fixed-window variable-base multiplication,
//! fixed-base multiplication by the generator and two-term linear combinations.

use super::{ProjectivePoint, Scalar};
use cfg_if::cfg_if;
use core::ops::{Mul, MulAssign, Neg};
use elliptic_curve::{
    ops::{LinearCombination, MulByGenerator},
    subtle::{Choice, ConditionallySelectable, ConstantTimeEq},
};

#[cfg(all(
    feature = "precomputed-tables",
    not(any(feature = "critical-section", feature = "std"))
))]
compile_error!("`precomputed-tables` feature requires either `critical-section` or `std`");

#[cfg(feature = "precomputed-tables")]
use {super::AffinePoint, once_cell::sync::Lazy};

/// Number of signed radix-16 digits of a scalar.
const DIGITS: usize = 65;

/// Lookup table containing precomputed values `[p, 2p, 3p, ..., 8p]`
#[derive(Clone, Copy, Debug, Default)]
struct LookupTable<Point>([Point; 8]);

impl<Point> LookupTable<Point>
where
    Point: ConditionallySelectable + Default + Neg<Output = Point>,
{
    /// Given -8 <= x <= 8, returns x * p in constant time.
    fn select(&self, x: i8) -> Point {
        debug_assert!((-8..=8).contains(&x));

        // Compute xabs = |x|
        let xmask = x >> 7;
        let xabs = (x + xmask) ^ xmask;

        // Get an array element in constant time
        let mut t = Point::default();
        for j in 1..9 {
            let c = (xabs as u8).ct_eq(&(j as u8));
            t.conditional_assign(&self.0[j - 1], c);
        }
        // Now t == |x| * p.

        let neg_mask = Choice::from((xmask & 1) as u8);
        t.conditional_assign(&-t, neg_mask);
        // Now t == x * p.

        t
    }
}

impl From<&ProjectivePoint> for LookupTable<ProjectivePoint> {
    fn from(p: &ProjectivePoint) -> Self {
        let mut points = [*p; 8];
        for j in 0..7 {
            points[j + 1] = p + &points[j];
        }
        LookupTable(points)
    }
}

/// Returns `[a_0, ..., a_64]` such that `sum(a_j * 2^(j * 4)) == x`,
/// and `-8 <= a_j <= 7` (the top digit is 0 or 1).
fn to_radix_16(x: &Scalar) -> [i8; DIGITS] {
    // `x` can have up to 256 bits, so we need an additional digit to store the carry.
    let mut output = [0i8; DIGITS];

    // Step 1: change radix.
    // Convert from radix 256 (bytes) to radix 16 (nibbles)
    let bytes = x.to_bytes();
    for i in 0..32 {
        output[2 * i] = (bytes[31 - i] & 0xf) as i8;
        output[2 * i + 1] = ((bytes[31 - i] >> 4) & 0xf) as i8;
    }

    // Step 2: recenter coefficients from [0,16) to [-8,8)
    for i in 0..(DIGITS - 1) {
        let carry = (output[i] + 8) >> 4;
        output[i] -= carry << 4;
        output[i + 1] += carry;
    }

    output
}

/// Returns `[k] x` with a 4-bit signed window.
fn mul_windowed(x: &ProjectivePoint, k: &Scalar) -> ProjectivePoint {
    let scalar_digits = to_radix_16(k);
    let lookup_table = LookupTable::from(x);
    let mut acc = lookup_table.select(scalar_digits[DIGITS - 1]);
    for i in (0..(DIGITS - 1)).rev() {
        for _j in 0..4 {
            acc = acc.double();
        }
        acc += &lookup_table.select(scalar_digits[i]);
    }
    acc
}

/// Returns `[k] x + [l] y`, sharing the doubling chain between both terms.
fn lincomb_windowed(
    x: &ProjectivePoint,
    k: &Scalar,
    y: &ProjectivePoint,
    l: &Scalar,
) -> ProjectivePoint {
    let digits_k = to_radix_16(k);
    let digits_l = to_radix_16(l);
    let table_x = LookupTable::from(x);
    let table_y = LookupTable::from(y);

    let mut acc =
        table_x.select(digits_k[DIGITS - 1]) + table_y.select(digits_l[DIGITS - 1]);
    for i in (0..(DIGITS - 1)).rev() {
        for _j in 0..4 {
            acc = acc.double();
        }
        acc += &table_x.select(digits_k[i]);
        acc += &table_y.select(digits_l[i]);
    }
    acc
}

cfg_if! {
    if #[cfg(feature = "precomputed-tables")] {
        /// Affine tables of `[1..=8] * 16^i * G` for every digit position `i`.
        static GEN_LOOKUP_TABLE: Lazy<[LookupTable<AffinePoint>; DIGITS]> = Lazy::new(|| {
            let mut tables = [LookupTable::<AffinePoint>::default(); DIGITS];
            let mut base = ProjectivePoint::GENERATOR;

            for table in tables.iter_mut() {
                let mut multiple = base;
                for entry in table.0.iter_mut() {
                    *entry = multiple.to_affine();
                    multiple += &base;
                }

                for _ in 0..4 {
                    base = base.double();
                }
            }

            tables
        });

        /// Returns `[k] G` using one mixed addition per digit and no doublings.
        fn mul_generator(k: &Scalar) -> ProjectivePoint {
            let digits = to_radix_16(k);

            let mut acc = ProjectivePoint::IDENTITY;
            for (table, digit) in GEN_LOOKUP_TABLE.iter().zip(digits.iter()) {
                acc += &table.select(*digit);
            }
            acc
        }
    } else {
        /// Returns `[k] G`.
        fn mul_generator(k: &Scalar) -> ProjectivePoint {
            mul_windowed(&ProjectivePoint::GENERATOR, k)
        }
    }
}

impl ProjectivePoint {
    /// Calculates `k * G`, where `G` is the generator.
    pub fn mul_by_generator(k: &Scalar) -> ProjectivePoint {
        mul_generator(k)
    }

    /// Calculates `k * x + l * y`.
    pub fn lincomb(
        x: &ProjectivePoint,
        k: &Scalar,
        y: &ProjectivePoint,
        l: &Scalar,
    ) -> ProjectivePoint {
        lincomb_windowed(x, k, y, l)
    }
}

impl LinearCombination for ProjectivePoint {
    fn lincomb(
        x: &ProjectivePoint,
        k: &Scalar,
        y: &ProjectivePoint,
        l: &Scalar,
    ) -> ProjectivePoint {
        lincomb_windowed(x, k, y, l)
    }
}

impl MulByGenerator for ProjectivePoint {
    fn mul_by_generator(k: &Scalar) -> ProjectivePoint {
        mul_generator(k)
    }
}

impl Mul<Scalar> for ProjectivePoint {
    type Output = ProjectivePoint;

    fn mul(self, other: Scalar) -> ProjectivePoint {
        mul_windowed(&self, &other)
    }
}

impl Mul<&Scalar> for &ProjectivePoint {
    type Output = ProjectivePoint;

    fn mul(self, other: &Scalar) -> ProjectivePoint {
        mul_windowed(self, other)
    }
}

impl Mul<&Scalar> for ProjectivePoint {
    type Output = ProjectivePoint;

    fn mul(self, other: &Scalar) -> ProjectivePoint {
        mul_windowed(&self, other)
    }
}

impl MulAssign<Scalar> for ProjectivePoint {
    fn mul_assign(&mut self, rhs: Scalar) {
        *self = mul_windowed(self, &rhs);
    }
}

impl MulAssign<&Scalar> for ProjectivePoint {
    fn mul_assign(&mut self, rhs: &Scalar) {
        *self = mul_windowed(self, rhs);
    }
}

#[cfg(test)]
mod tests {
    use super::to_radix_16;
    use crate::arithmetic::{ProjectivePoint, Scalar};
    use proptest::prelude::*;

    #[test]
    fn radix_16_digits_recombine() {
        let k = -Scalar::ONE;
        let digits = to_radix_16(&k);
        assert!(digits.iter().all(|d| (-8..=8).contains(d)));

        let sixteen = Scalar::from(16u64);
        let mut acc = Scalar::ZERO;
        for digit in digits.iter().rev() {
            acc = acc * &sixteen;
            let magnitude = Scalar::from(digit.unsigned_abs() as u64);
            acc = if *digit < 0 { acc - &magnitude } else { acc + &magnitude };
        }
        assert_eq!(acc, k);
    }

    #[test]
    fn mul_by_generator_edge_scalars() {
        let g = ProjectivePoint::GENERATOR;
        assert_eq!(
            ProjectivePoint::mul_by_generator(&Scalar::ZERO),
            ProjectivePoint::IDENTITY
        );
        assert_eq!(ProjectivePoint::mul_by_generator(&Scalar::ONE), g);
        assert_eq!(ProjectivePoint::mul_by_generator(&-Scalar::ONE), -g);
        assert_eq!(g * &Scalar::ZERO, ProjectivePoint::IDENTITY);
    }

    #[test]
    fn identity_times_scalar() {
        let k = Scalar::from(0xdead_beefu64);
        assert_eq!(ProjectivePoint::IDENTITY * &k, ProjectivePoint::IDENTITY);
    }

    prop_compose! {
        fn scalar()(bytes in any::<[u8; 32]>()) -> Scalar {
            Scalar::from_bytes_reduced(&bytes)
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn fixed_base_matches_variable_base(k in scalar()) {
            prop_assert_eq!(
                ProjectivePoint::mul_by_generator(&k),
                ProjectivePoint::GENERATOR * &k
            );
        }

        #[test]
        fn lincomb_matches_separate_products(k in scalar(), l in scalar(), m in scalar()) {
            let x = ProjectivePoint::GENERATOR;
            let y = ProjectivePoint::mul_by_generator(&m);
            prop_assert_eq!(
                ProjectivePoint::lincomb(&x, &k, &y, &l),
                (x * &k) + &(y * &l)
            );
        }

        #[test]
        fn scalar_mul_distributes(k in scalar(), l in scalar()) {
            let g = ProjectivePoint::GENERATOR;
            prop_assert_eq!(g * &(k + &l), (g * &k) + &(g * &l));
            prop_assert_eq!((g * &k) * &l, g * &(k * &l));
        }
    }
}
