//! SEC1 `Elliptic-Curve-Point-to-Octet-String` encoding of curve points.
//!
//! Points travel as [`EncodedPoint`]s from the `sec1` crate. The functions
//! here narrow it to what public keys may use: the compressed (`0x02`/`0x03`
//! ‖ x) and uncompressed (`0x04` ‖ x ‖ y) forms. The identity, the x-only
//! compact form and the hybrid tags `0x06`/`0x07` are rejected.

use crate::{
    arithmetic::{AffinePoint, FieldElement},
    Error, FieldBytes, Result, Secp256k1,
};
use elliptic_curve::{
    consts::U33,
    generic_array::GenericArray,
    sec1::{Coordinates, FromEncodedPoint, ToEncodedPoint},
};

/// Length of a compressed point.
pub const COMPRESSED_POINT_SIZE: usize = 33;

/// Length of an uncompressed point.
pub const UNCOMPRESSED_POINT_SIZE: usize = 65;

/// SEC1-encoded secp256k1 point.
pub type EncodedPoint = elliptic_curve::sec1::EncodedPoint<Secp256k1>;

/// Compressed SEC1-encoded secp256k1 point.
pub type CompressedPoint = GenericArray<u8, U33>;

/// Checks the length and tag of a public key encoding.
///
/// Only 33 and 65 byte inputs are considered; anything else gives
/// [`Error::InvalidLength`]. A tag that does not match the length, or any tag
/// other than `0x02`, `0x03` and `0x04`, gives [`Error::InvalidEncoding`].
/// The coordinates are not validated; see [`to_affine`].
pub fn from_bytes(bytes: &[u8]) -> Result<EncodedPoint> {
    if bytes.len() != COMPRESSED_POINT_SIZE && bytes.len() != UNCOMPRESSED_POINT_SIZE {
        return Err(Error::InvalidLength);
    }

    let encoded = EncodedPoint::from_bytes(bytes).map_err(|_| Error::InvalidEncoding)?;
    match encoded.coordinates() {
        Coordinates::Compressed { .. } | Coordinates::Uncompressed { .. } => Ok(encoded),
        Coordinates::Identity | Coordinates::Compact { .. } => Err(Error::InvalidEncoding),
    }
}

/// Decodes a point, validating both coordinates.
///
/// A coordinate not below p gives [`Error::OutOfRange`]; a point off the curve
/// (or an x with no matching y) gives [`Error::NotOnCurve`]. The identity and
/// compact encodings give [`Error::InvalidEncoding`].
pub fn to_affine(encoded: &EncodedPoint) -> Result<AffinePoint> {
    match encoded.coordinates() {
        Coordinates::Compressed { x, .. } => check_coordinate(x)?,
        Coordinates::Uncompressed { x, y } => {
            check_coordinate(x)?;
            check_coordinate(y)?;
        }
        Coordinates::Identity | Coordinates::Compact { .. } => {
            return Err(Error::InvalidEncoding)
        }
    }

    Option::from(AffinePoint::from_encoded_point(encoded)).ok_or(Error::NotOnCurve)
}

/// Parses and decodes a public key encoding in one step.
pub fn decode(bytes: &[u8]) -> Result<AffinePoint> {
    to_affine(&from_bytes(bytes)?)
}

/// Encodes an affine point. Fails with [`Error::InfinityResult`] for the identity.
pub fn from_affine(point: &AffinePoint, compress: bool) -> Result<EncodedPoint> {
    if bool::from(point.is_identity()) {
        return Err(Error::InfinityResult);
    }

    Ok(point.to_encoded_point(compress))
}

fn check_coordinate(bytes: &elliptic_curve::FieldBytes<Secp256k1>) -> Result<()> {
    let bytes: FieldBytes = (*bytes).into();
    if bool::from(FieldElement::from_bytes(&bytes).is_some()) {
        Ok(())
    } else {
        Err(Error::OutOfRange)
    }
}

#[cfg(test)]
mod tests {
    use super::{from_affine, from_bytes, to_affine};
    use crate::{arithmetic::AffinePoint, Error};
    use hex_literal::hex;

    const UNCOMPRESSED_BASEPOINT: &str =
        "0479BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8";
    const COMPRESSED_BASEPOINT: &str =
        "0279BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798";

    #[test]
    fn uncompressed_round_trip() {
        let bytes = hex::decode(UNCOMPRESSED_BASEPOINT).unwrap();
        let point = to_affine(&from_bytes(&bytes).unwrap()).unwrap();
        assert_eq!(point, AffinePoint::GENERATOR);

        let res = from_affine(&point, false).unwrap();
        assert_eq!(res.as_bytes(), bytes.as_slice());
    }

    #[test]
    fn compressed_round_trip() {
        let bytes = hex::decode(COMPRESSED_BASEPOINT).unwrap();
        let point = to_affine(&from_bytes(&bytes).unwrap()).unwrap();
        assert_eq!(point, AffinePoint::GENERATOR);

        let res = from_affine(&point, true).unwrap();
        assert_eq!(res.as_bytes(), bytes.as_slice());
    }

    #[test]
    fn uncompressed_to_compressed() {
        let bytes = hex::decode(UNCOMPRESSED_BASEPOINT).unwrap();
        let point = to_affine(&from_bytes(&bytes).unwrap()).unwrap();
        let res = from_affine(&point, true).unwrap();

        assert_eq!(
            hex::encode(res.as_bytes()).to_uppercase(),
            COMPRESSED_BASEPOINT
        );
    }

    #[test]
    fn compressed_to_uncompressed() {
        let bytes = hex::decode(COMPRESSED_BASEPOINT).unwrap();
        let point = to_affine(&from_bytes(&bytes).unwrap()).unwrap();
        let res = from_affine(&point, false).unwrap();

        assert_eq!(
            hex::encode(res.as_bytes()).to_uppercase(),
            UNCOMPRESSED_BASEPOINT
        );
    }

    #[test]
    fn odd_y_tag() {
        let point = -AffinePoint::GENERATOR;
        let res = from_affine(&point, true).unwrap();
        assert_eq!(res.as_bytes()[0], 0x03);
        assert_eq!(to_affine(&res).unwrap(), point);
    }

    #[test]
    fn identity_encoding() {
        assert_eq!(
            from_affine(&AffinePoint::IDENTITY, true),
            Err(Error::InfinityResult)
        );
        assert_eq!(
            from_affine(&AffinePoint::IDENTITY, false),
            Err(Error::InfinityResult)
        );
    }

    #[test]
    fn rejects_bad_lengths_and_tags() {
        assert_eq!(from_bytes(&[]), Err(Error::InvalidLength));
        assert_eq!(from_bytes(&[0u8]), Err(Error::InvalidLength));
        assert_eq!(from_bytes(&[0u8; 32]), Err(Error::InvalidLength));
        assert_eq!(from_bytes(&[0u8; 64]), Err(Error::InvalidLength));

        let mut bytes = hex::decode(COMPRESSED_BASEPOINT).unwrap();
        bytes[0] = 0x04;
        assert_eq!(from_bytes(&bytes), Err(Error::InvalidEncoding));

        // 0x05 ‖ x is the x-only compact form
        bytes[0] = 0x05;
        assert_eq!(from_bytes(&bytes), Err(Error::InvalidEncoding));

        // a 33-byte string with the identity tag
        bytes[0] = 0x00;
        assert_eq!(from_bytes(&bytes), Err(Error::InvalidEncoding));

        let mut bytes = hex::decode(UNCOMPRESSED_BASEPOINT).unwrap();
        bytes[0] = 0x02;
        assert_eq!(from_bytes(&bytes), Err(Error::InvalidEncoding));
    }

    #[test]
    fn rejects_invalid_coordinates() {
        // x = p
        let mut bytes = [0u8; 33];
        bytes[0] = 0x02;
        bytes[1..].copy_from_slice(&hex!(
            "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F"
        ));
        let encoded = from_bytes(&bytes).unwrap();
        assert_eq!(to_affine(&encoded), Err(Error::OutOfRange));

        // x = 0 has no matching y
        let mut bytes = [0u8; 33];
        bytes[0] = 0x03;
        let encoded = from_bytes(&bytes).unwrap();
        assert_eq!(to_affine(&encoded), Err(Error::NotOnCurve));

        // generator with a corrupted y
        let mut bytes = hex::decode(UNCOMPRESSED_BASEPOINT).unwrap();
        bytes[64] ^= 1;
        let encoded = from_bytes(&bytes).unwrap();
        assert_eq!(to_affine(&encoded), Err(Error::NotOnCurve));
    }
}
