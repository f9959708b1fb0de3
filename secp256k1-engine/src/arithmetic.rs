//! A pure-Rust implementation of group operations on secp256k1.

pub(crate) mod affine;
pub(crate) mod field;
mod mul;
pub(crate) mod projective;
pub(crate) mod scalar;
pub(crate) mod util;

pub use self::{
    affine::AffinePoint, field::FieldElement, projective::ProjectivePoint, scalar::Scalar,
};

use crate::Secp256k1;
use elliptic_curve::{CurveArithmetic, PrimeCurveArithmetic};

impl CurveArithmetic for Secp256k1 {
    type AffinePoint = AffinePoint;
    type ProjectivePoint = ProjectivePoint;
    type Scalar = Scalar;
}

impl PrimeCurveArithmetic for Secp256k1 {
    type CurveGroup = ProjectivePoint;
}

/// b = 7 in the curve equation y² = x³ + b.
pub(crate) const CURVE_EQUATION_B: FieldElement = FieldElement::from_u64(7);

/// 3b, the multiple of b the complete addition formulas use.
pub(crate) const CURVE_EQUATION_B3: FieldElement = FieldElement::from_u64(21);
