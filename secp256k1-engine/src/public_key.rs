//! Public keys: non-identity curve points.

use crate::{
    arithmetic::{ProjectivePoint, Scalar},
    sec1, Error, Result, Secp256k1,
};

/// secp256k1 public key.
///
/// Always a valid curve point other than the identity.
pub type PublicKey = elliptic_curve::PublicKey<Secp256k1>;

/// Strict SEC1 parsing, tweaking and aggregation of [`PublicKey`]s.
///
/// Serialization goes through [`ToEncodedPoint`](elliptic_curve::sec1::ToEncodedPoint).
pub trait PublicKeyExt: Sized {
    /// Parse a SEC1-encoded public key, compressed (33 bytes) or uncompressed (65 bytes).
    ///
    /// See [`sec1::from_bytes`] and [`sec1::to_affine`] for the errors reported.
    fn parse(bytes: &[u8]) -> Result<Self>;

    /// Returns `P + tweak * G`.
    ///
    /// Fails with [`Error::InfinityResult`] if the result is the identity.
    fn tweak_add(&self, tweak: &Scalar) -> Result<Self>;

    /// Returns `tweak * P`.
    ///
    /// Fails with [`Error::OutOfRange`] if the tweak is zero.
    fn tweak_mul(&self, tweak: &Scalar) -> Result<Self>;

    /// Sum of a list of public keys.
    ///
    /// Fails with [`Error::InvalidLength`] for an empty list and with
    /// [`Error::InfinityResult`] if the keys cancel out.
    fn combine(keys: &[Self]) -> Result<Self>;

    /// Returns `-P`.
    fn negate(&self) -> Result<Self>;
}

impl PublicKeyExt for PublicKey {
    fn parse(bytes: &[u8]) -> Result<Self> {
        let point = sec1::decode(bytes)?;
        PublicKey::from_affine(point).map_err(|_| Error::InfinityResult)
    }

    fn tweak_add(&self, tweak: &Scalar) -> Result<Self> {
        from_projective(&(ProjectivePoint::mul_by_generator(tweak) + self.as_affine()))
    }

    fn tweak_mul(&self, tweak: &Scalar) -> Result<Self> {
        if bool::from(tweak.is_zero()) {
            return Err(Error::OutOfRange);
        }

        from_projective(&(self.to_projective() * tweak))
    }

    fn combine(keys: &[Self]) -> Result<Self> {
        if keys.is_empty() {
            return Err(Error::InvalidLength);
        }

        let sum = keys
            .iter()
            .fold(ProjectivePoint::IDENTITY, |acc, key| acc + key.as_affine());
        from_projective(&sum)
    }

    fn negate(&self) -> Result<Self> {
        PublicKey::from_affine(-*self.as_affine()).map_err(|_| Error::InfinityResult)
    }
}

/// Convert a projective result into a public key, failing with
/// [`Error::InfinityResult`] for the identity.
pub(crate) fn from_projective(point: &ProjectivePoint) -> Result<PublicKey> {
    PublicKey::from_affine(point.to_affine()).map_err(|_| Error::InfinityResult)
}

#[cfg(test)]
mod tests {
    use super::{PublicKey, PublicKeyExt};
    use crate::{
        arithmetic::{AffinePoint, Scalar},
        Error, SecretKey, SecretKeyExt,
    };
    use elliptic_curve::sec1::ToEncodedPoint;
    use hex_literal::hex;

    #[test]
    fn combine_vector() {
        let a = PublicKey::parse(&hex!(
            "0241cc121c419921942add6db6482fb36243faf83317c866d2a28d8c6d7089f7ba"
        ))
        .unwrap();
        let b = PublicKey::parse(&hex!(
            "02e6642fd69bd211f93f7f1f36ca51a26a5290eb2dd1b0d8279a87bb0d480c8443"
        ))
        .unwrap();

        let expected = hex!("0384526253c27c7aef56c7b71a5cd25bebb66dddda437826defc5b2568bde81f07");
        assert_eq!(
            PublicKey::combine(&[a, b]).unwrap().to_encoded_point(true).as_bytes(),
            &expected[..]
        );
        assert_eq!(
            PublicKey::combine(&[b, a]).unwrap().to_encoded_point(true).as_bytes(),
            &expected[..]
        );
    }

    #[test]
    fn combine_edge_cases() {
        assert_eq!(PublicKey::combine(&[]), Err(Error::InvalidLength));

        let pk = SecretKey::parse(&[3u8; 32]).unwrap().public_key();
        assert_eq!(PublicKey::combine(&[pk]).unwrap(), pk);
        assert_eq!(
            PublicKey::combine(&[pk, pk.negate().unwrap()]),
            Err(Error::InfinityResult)
        );
    }

    #[test]
    fn tweak_add_to_identity_fails() {
        let g = PublicKey::from_affine(AffinePoint::GENERATOR).unwrap();
        assert_eq!(g.tweak_add(&-Scalar::ONE), Err(Error::InfinityResult));
    }

    #[test]
    fn tweak_mul_by_zero_fails() {
        let g = PublicKey::from_affine(AffinePoint::GENERATOR).unwrap();
        assert_eq!(g.tweak_mul(&Scalar::ZERO), Err(Error::OutOfRange));
        assert_eq!(g.tweak_mul(&Scalar::ONE).unwrap(), g);
    }

    #[test]
    fn identity_is_not_a_key() {
        assert_eq!(
            PublicKey::try_from(AffinePoint::IDENTITY),
            Err(Error::InfinityResult)
        );
    }

    #[test]
    fn sec1_round_trips() {
        let pk = SecretKey::parse(&[9u8; 32]).unwrap().public_key();
        for compress in [true, false] {
            let encoded = pk.to_encoded_point(compress);
            assert_eq!(encoded.is_compressed(), compress);
            assert_eq!(PublicKey::parse(encoded.as_bytes()).unwrap(), pk);
            assert_eq!(PublicKey::from_sec1_bytes(encoded.as_bytes()).unwrap(), pk);
        }
    }
}
