//! Secret keys: non-zero scalars below the group order.

use crate::{arithmetic::Scalar, Error, FieldBytes, NonZeroScalar, Result, Secp256k1};

/// Length of a serialized secret key.
pub const SECRET_KEY_SIZE: usize = 32;

/// secp256k1 secret key: a scalar in `[1, n - 1]`.
pub type SecretKey = elliptic_curve::SecretKey<Secp256k1>;

/// Strict parsing and tweaking of [`SecretKey`]s.
///
/// Every fallible operation reports which check failed through [`Error`].
pub trait SecretKeyExt: Sized {
    /// Is `bytes` a valid secret key encoding: exactly 32 bytes holding a
    /// big-endian integer in `[1, n - 1]`?
    fn verify_bytes(bytes: &[u8]) -> bool {
        Self::parse(bytes).is_ok()
    }

    /// Deserialize a secret key from exactly 32 big-endian bytes.
    ///
    /// Fails with [`Error::InvalidLength`] for any other length and with
    /// [`Error::OutOfRange`] for zero or values not below n.
    fn parse(bytes: &[u8]) -> Result<Self>;

    /// Wrap a scalar, rejecting zero.
    fn from_scalar(scalar: Scalar) -> Result<Self>;

    /// Returns `(d + tweak) mod n`.
    ///
    /// Fails with [`Error::OutOfRange`] if the sum is zero.
    fn tweak_add(&self, tweak: &Scalar) -> Result<Self>;

    /// Returns `(d * tweak) mod n`.
    ///
    /// Fails with [`Error::OutOfRange`] if the tweak is zero.
    fn tweak_mul(&self, tweak: &Scalar) -> Result<Self>;

    /// Returns `n - d`, the secret key of the negated public key.
    fn negate(&self) -> Self;
}

impl SecretKeyExt for SecretKey {
    fn parse(bytes: &[u8]) -> Result<Self> {
        let bytes: &FieldBytes = bytes.try_into().map_err(|_| Error::InvalidLength)?;
        let scalar: Option<Scalar> = Scalar::from_bytes(bytes).into();
        Self::from_scalar(scalar.ok_or(Error::OutOfRange)?)
    }

    fn from_scalar(scalar: Scalar) -> Result<Self> {
        Option::<NonZeroScalar>::from(NonZeroScalar::new(scalar))
            .map(Self::from)
            .ok_or(Error::OutOfRange)
    }

    fn tweak_add(&self, tweak: &Scalar) -> Result<Self> {
        Self::from_scalar(*self.to_nonzero_scalar() + tweak)
    }

    fn tweak_mul(&self, tweak: &Scalar) -> Result<Self> {
        Self::from_scalar(*self.to_nonzero_scalar() * tweak)
    }

    fn negate(&self) -> Self {
        Self::from(-self.to_nonzero_scalar())
    }
}

#[cfg(test)]
mod tests {
    use super::{SecretKey, SecretKeyExt};
    use crate::{arithmetic::Scalar, Error, PublicKeyExt};
    use hex_literal::hex;

    #[test]
    fn verify_bytes() {
        assert!(!SecretKey::verify_bytes(&[0u8; 32]));
        assert!(!SecretKey::verify_bytes(&[0u8; 31]));
        assert!(!SecretKey::verify_bytes(&[1u8; 33]));
        assert!(SecretKey::verify_bytes(&[1u8; 32]));

        // n is out of range, n - 1 is the largest valid key
        let n = hex!("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141");
        let n_minus_one = hex!("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364140");
        assert!(!SecretKey::verify_bytes(&n));
        assert!(SecretKey::verify_bytes(&n_minus_one));
        assert!(!SecretKey::verify_bytes(&[0xff; 32]));
    }

    #[test]
    fn parse_errors() {
        // Shorter inputs are not zero-padded.
        assert_eq!(SecretKey::parse(&[1u8; 24]).map(|_| ()), Err(Error::InvalidLength));
        assert_eq!(SecretKey::parse(&[1u8; 31]).map(|_| ()), Err(Error::InvalidLength));
        assert_eq!(SecretKey::parse(&[0u8; 32]).map(|_| ()), Err(Error::OutOfRange));
        assert_eq!(
            SecretKey::from_scalar(Scalar::ZERO).map(|_| ()),
            Err(Error::OutOfRange)
        );
    }

    #[test]
    fn bytes_round_trip() {
        let bytes = hex!("e815acba8fcf085a0b4141060c13b8017a08da37f2eb1d6a5416adbb621560ef");
        let sk = SecretKey::parse(&bytes).unwrap();
        assert_eq!(sk.to_bytes().as_slice(), &bytes[..]);
        assert_eq!(SecretKey::from_bytes(&bytes.into()).unwrap(), sk);
    }

    #[test]
    fn tweak_add_to_zero_fails() {
        let sk = SecretKey::parse(&hex!(
            "0000000000000000000000000000000000000000000000000000000000000005"
        ))
        .unwrap();
        let tweak = -Scalar::from(5u64);
        assert_eq!(sk.tweak_add(&tweak).map(|_| ()), Err(Error::OutOfRange));
        assert_eq!(
            sk.tweak_add(&Scalar::ONE).unwrap().to_bytes().as_slice(),
            &hex!("0000000000000000000000000000000000000000000000000000000000000006")[..]
        );
    }

    #[test]
    fn tweak_mul_by_zero_fails() {
        let sk = SecretKey::parse(&[7u8; 32]).unwrap();
        assert_eq!(sk.tweak_mul(&Scalar::ZERO).map(|_| ()), Err(Error::OutOfRange));
        assert_eq!(sk.tweak_mul(&Scalar::ONE).unwrap(), sk);
    }

    #[test]
    fn negate_twice() {
        let sk = SecretKey::parse(&[7u8; 32]).unwrap();
        assert_ne!(sk.negate(), sk);
        assert_eq!(sk.negate().negate(), sk);
        assert_eq!(
            sk.negate().public_key(),
            sk.public_key().negate().unwrap()
        );
    }

    #[test]
    fn debug_is_redacted() {
        let sk = SecretKey::parse(&[7u8; 32]).unwrap();
        let debug = std::format!("{:?}", sk);
        assert!(debug.ends_with("{ .. }"));
        assert!(!debug.contains("0707"));
    }
}
