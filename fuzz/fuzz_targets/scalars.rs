#![no_main]
use libfuzzer_sys::fuzz_target;
use secp256k1_engine::{FieldElement, Scalar};

fn test_field(fe1: FieldElement, fe2: FieldElement, fe3: FieldElement) {
    // Associativity
    assert_eq!(fe1 + (fe2 + fe3), (fe1 + fe2) + fe3);
    assert_eq!(fe1 * (fe2 * fe3), (fe1 * fe2) * fe3);

    // Commutativity
    assert_eq!(fe1 + fe2, fe2 + fe1);
    assert_eq!(fe1 * fe2, fe2 * fe1);

    // Identity
    assert_eq!(fe1 + FieldElement::ZERO, fe1);
    assert_eq!(fe1 * FieldElement::ONE, fe1);
    assert_eq!(fe1 - fe1, FieldElement::ZERO);

    // Distributivity
    assert_eq!(fe1 * (fe2 + fe3), fe1 * fe2 + fe1 * fe3);

    // Inverse, square, sqrt
    assert_eq!(fe1 + (-fe1), FieldElement::ZERO);
    let fe1_sq = fe1.square();
    if !bool::from(fe1.is_zero()) {
        assert_eq!(fe1_sq * fe1.invert().unwrap(), fe1);
        let root = fe1_sq.sqrt().unwrap();
        assert!(root == fe1 || root == -fe1);
    }

    // Double
    assert_eq!(fe1.double(), fe1 + fe1);

    // Serialization
    assert_eq!(FieldElement::from_bytes(&fe1.to_bytes()).unwrap(), fe1);
}

fn test_scalar(s1: Scalar, s2: Scalar, s3: Scalar) {
    assert_eq!(s1 + (s2 + s3), (s1 + s2) + s3);
    assert_eq!(s1 * (s2 * s3), (s1 * s2) * s3);
    assert_eq!(s1 * (s2 + s3), s1 * s2 + s1 * s3);
    assert_eq!(s1 - s1, Scalar::ZERO);
    assert_eq!(s1 + (-s1), Scalar::ZERO);

    if !bool::from(s1.is_zero()) {
        assert_eq!(s1 * s1.invert().unwrap(), Scalar::ONE);
    }

    // Exactly one of s and -s is high, unless s is zero
    if !bool::from(s1.is_zero()) {
        assert_ne!(bool::from(s1.is_high()), bool::from((-s1).is_high()));
    }

    assert_eq!(Scalar::from_bytes(&s1.to_bytes()).unwrap(), s1);
}

fn chunk(data: &[u8], i: usize) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&data[32 * i..32 * (i + 1)]);
    bytes
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 96 {
        return;
    }

    let field = |i| {
        Option::<FieldElement>::from(FieldElement::from_bytes(&chunk(data, i)))
            .unwrap_or(FieldElement::ONE)
    };
    test_field(field(0), field(1), field(2));

    let scalar = |i| Scalar::from_bytes_reduced(&chunk(data, i));
    test_scalar(scalar(0), scalar(1), scalar(2));
});
