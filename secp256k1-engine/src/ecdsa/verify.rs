//! ECDSA verification and public key recovery.
//!
//! ## Verification
//!
//! ```text
//! 1: r, s in [1, n - 1] (checked when the signature is parsed)
//! 2: z = digest mod n
//! 3: u1 = z * s^-1, u2 = r * s^-1
//! 4: R' = u1 * G + u2 * Q; reject if R' is the identity
//! 5: accept iff R'.x mod n == r
//! ```
//!
//! High-s signatures verify; normalization is the signer's job.

use super::{RecoveryId, Signature};
use crate::{
    arithmetic::{
        scalar::MODULUS,
        util::{add_limbs, limbs_to_be_bytes},
        AffinePoint, FieldElement, ProjectivePoint, Scalar,
    },
    public_key::from_projective,
    sec1::EncodedPoint,
    Error, FieldBytes, PublicKey, PublicKeyExt, Result,
};
use elliptic_curve::{sec1::ToEncodedPoint, subtle::Choice};
use sha2::{Digest, Sha256};
use signature::{hazmat::PrehashVerifier, Verifier};

/// ECDSA/secp256k1 verifying key.
///
/// ## Usage
///
/// The [`signature`] crate defines the following traits which are the
/// primary API for verifying:
///
/// - [`Verifier`]: verify a message against a provided key and signature,
///   hashing the message with SHA-256 first
/// - [`PrehashVerifier`]: verify the low-level raw output bytes of a message digest
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct VerifyingKey {
    /// Signer's public key.
    public_key: PublicKey,
}

impl VerifyingKey {
    /// Initialize [`VerifyingKey`] from a SEC1-encoded public key.
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self> {
        PublicKey::parse(bytes).map(Self::from)
    }

    /// Initialize [`VerifyingKey`] from an affine point.
    ///
    /// Fails with [`Error::InfinityResult`] if the point is the identity.
    pub fn from_affine(affine: AffinePoint) -> Result<Self> {
        PublicKey::try_from(affine).map(Self::from)
    }

    /// Borrow the inner [`AffinePoint`] for this public key.
    pub fn as_affine(&self) -> &AffinePoint {
        self.public_key.as_affine()
    }

    /// Borrow the [`PublicKey`] this verifying key wraps.
    pub fn as_public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Serialize this key as a SEC1 point.
    pub fn to_encoded_point(&self, compress: bool) -> EncodedPoint {
        self.public_key.to_encoded_point(compress)
    }

    /// Does `signature` verify against this key and the 32-byte `digest`?
    pub fn verify_prehash(&self, digest: &FieldBytes, signature: &Signature) -> bool {
        let z = Scalar::from_bytes_reduced(digest);
        let (r, s) = signature.split_scalars();

        let s_inv = match Option::<Scalar>::from(s.invert()) {
            Some(s_inv) => s_inv,
            None => return false,
        };

        let u1 = z * &s_inv;
        let u2 = r * &s_inv;
        let big_r = ProjectivePoint::lincomb(
            &ProjectivePoint::GENERATOR,
            &u1,
            &self.public_key.to_projective(),
            &u2,
        );

        if bool::from(big_r.is_identity()) {
            return false;
        }

        Scalar::from_bytes_reduced(&big_r.to_affine().x()) == r
    }

    /// Recover the public key that produced `signature` over `digest`.
    ///
    /// Fails with [`Error::OutOfRange`] if the recovery id says `R.x` was
    /// reduced but `r + n` is not a field element, [`Error::NotOnCurve`] if no
    /// point has that x-coordinate, and [`Error::InfinityResult`] if the
    /// recovered key is the identity.
    pub fn recover_from_prehash(
        digest: &FieldBytes,
        signature: &Signature,
        recovery_id: RecoveryId,
    ) -> Result<Self> {
        let (r, s) = signature.split_scalars();

        let x_bytes = if recovery_id.is_x_reduced() {
            let (x, carry) = add_limbs(&r.0, &MODULUS);
            if carry != 0 {
                return Err(Error::OutOfRange);
            }
            limbs_to_be_bytes(&x)
        } else {
            r.to_bytes()
        };

        if bool::from(FieldElement::from_bytes(&x_bytes).is_none()) {
            return Err(Error::OutOfRange);
        }

        let y_is_odd = Choice::from(recovery_id.is_y_odd() as u8);
        let big_r = Option::<AffinePoint>::from(AffinePoint::decompress(&x_bytes, y_is_odd))
            .ok_or(Error::NotOnCurve)?;

        let z = Scalar::from_bytes_reduced(digest);
        let r_inv = Option::<Scalar>::from(r.invert()).ok_or(Error::OutOfRange)?;
        let u1 = -(z * &r_inv);
        let u2 = s * &r_inv;

        let q = ProjectivePoint::lincomb(
            &ProjectivePoint::GENERATOR,
            &u1,
            &big_r.to_projective(),
            &u2,
        );
        from_projective(&q).map(Self::from)
    }
}

//
// `*Verifier` trait impls
//

impl PrehashVerifier<Signature> for VerifyingKey {
    fn verify_prehash(&self, prehash: &[u8], signature: &Signature) -> signature::Result<()> {
        let digest: &FieldBytes = prehash.try_into().map_err(|_| Error::InvalidLength)?;

        if VerifyingKey::verify_prehash(self, digest, signature) {
            Ok(())
        } else {
            Err(signature::Error::new())
        }
    }
}

impl Verifier<Signature> for VerifyingKey {
    fn verify(&self, msg: &[u8], signature: &Signature) -> signature::Result<()> {
        let digest: FieldBytes = Sha256::digest(msg).into();
        PrehashVerifier::<Signature>::verify_prehash(self, &digest, signature)
    }
}

//
// Other trait impls
//

impl AsRef<AffinePoint> for VerifyingKey {
    fn as_ref(&self) -> &AffinePoint {
        self.as_affine()
    }
}

impl From<PublicKey> for VerifyingKey {
    fn from(public_key: PublicKey) -> VerifyingKey {
        Self { public_key }
    }
}

impl From<&PublicKey> for VerifyingKey {
    fn from(public_key: &PublicKey) -> VerifyingKey {
        Self::from(*public_key)
    }
}

impl From<VerifyingKey> for PublicKey {
    fn from(verifying_key: VerifyingKey) -> PublicKey {
        verifying_key.public_key
    }
}

impl From<&VerifyingKey> for PublicKey {
    fn from(verifying_key: &VerifyingKey) -> PublicKey {
        verifying_key.public_key
    }
}

impl TryFrom<&[u8]> for VerifyingKey {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_sec1_bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::VerifyingKey;
    use crate::{
        arithmetic::Scalar,
        ecdsa::{RecoveryId, Signature, SigningKey},
        test_vectors::ecdsa::{ECDSA_TEST_VECTORS, RECOVERY_TEST_VECTORS},
        Error,
    };
    use hex_literal::hex;
    use signature::{hazmat::PrehashVerifier, Signer, Verifier};

    #[test]
    fn fixed_nonce_vectors() {
        for vector in ECDSA_TEST_VECTORS {
            let mut sec1 = [0u8; 65];
            sec1[0] = 0x04;
            sec1[1..33].copy_from_slice(&vector.q_x);
            sec1[33..].copy_from_slice(&vector.q_y);
            let vk = VerifyingKey::from_sec1_bytes(&sec1).unwrap();

            let mut sig_bytes = [0u8; 64];
            sig_bytes[..32].copy_from_slice(&vector.r);
            sig_bytes[32..].copy_from_slice(&vector.s);
            let sig = Signature::from_bytes(&sig_bytes).unwrap();

            assert!(vk.verify_prehash(&vector.m, &sig));

            let mut m = vector.m;
            m[0] ^= 1;
            assert!(!vk.verify_prehash(&m, &sig));
        }
    }

    #[test]
    fn accepts_high_s() {
        let key = SigningKey::from_bytes(&[0x11; 32]).unwrap();
        let digest = [0x22; 32];
        let sig = key.sign_prehash(&digest).unwrap();
        let high = Signature::from_scalars(sig.r(), -sig.s()).unwrap();

        assert!(key.verifying_key().verify_prehash(&digest, &sig));
        assert!(key.verifying_key().verify_prehash(&digest, &high));
    }

    #[test]
    fn rejects_wrong_key() {
        let key = SigningKey::from_bytes(&[0x11; 32]).unwrap();
        let other = SigningKey::from_bytes(&[0x12; 32]).unwrap();
        let digest = [0x22; 32];
        let sig = key.sign_prehash(&digest).unwrap();

        assert!(!other.verifying_key().verify_prehash(&digest, &sig));
    }

    #[test]
    fn trait_impls() {
        let key = SigningKey::from_bytes(&[0x33; 32]).unwrap();
        let vk = key.verifying_key();
        let sig: Signature = key.sign(b"message");

        assert!(vk.verify(b"message", &sig).is_ok());
        assert!(vk.verify(b"massage", &sig).is_err());

        let digest = [0x44; 32];
        let sig = key.sign_prehash(&digest).unwrap();
        assert!(PrehashVerifier::<Signature>::verify_prehash(vk, &digest, &sig).is_ok());
        assert!(PrehashVerifier::<Signature>::verify_prehash(vk, &digest[..16], &sig).is_err());
    }

    #[test]
    fn recovery_vectors() {
        for vector in RECOVERY_TEST_VECTORS {
            let sig = Signature::from_bytes(&vector.sig).unwrap();
            let id = RecoveryId::from_byte(vector.recid).unwrap();
            let vk = VerifyingKey::recover_from_prehash(&vector.digest, &sig, id).unwrap();

            let encoded = vk.to_encoded_point(false);
            assert_eq!(&encoded.as_bytes()[1..], &vector.public_key[..]);
            assert!(vk.verify_prehash(&vector.digest, &sig));
        }
    }

    #[test]
    fn recovery_with_flipped_parity_gives_another_valid_key() {
        let vector = &RECOVERY_TEST_VECTORS[0];
        let sig = Signature::from_bytes(&vector.sig).unwrap();
        let flipped = RecoveryId::from_byte(vector.recid ^ 1).unwrap();
        let vk = VerifyingKey::recover_from_prehash(&vector.digest, &sig, flipped).unwrap();

        // -R has the same x-coordinate, so the other key verifies too
        assert_ne!(&vk.to_encoded_point(false).as_bytes()[1..], &vector.public_key[..]);
        assert!(vk.verify_prehash(&vector.digest, &sig));
    }

    #[test]
    fn recovery_rejects_overflowing_x() {
        // r + n >= p whenever r >= p - n
        let r = Scalar::from_bytes(&hex!(
            "00000000000000000000000000000001ffffffffffffffffffffffffffffffff"
        ))
        .unwrap();
        let sig = Signature::from_scalars(r, Scalar::ONE).unwrap();
        let id = RecoveryId::new(false, true);

        assert_eq!(
            VerifyingKey::recover_from_prehash(&[0u8; 32], &sig, id),
            Err(Error::OutOfRange)
        );
    }

    #[test]
    fn recovery_rejects_x_off_curve() {
        // x = 5 has no square root of x^3 + 7
        let sig = Signature::from_scalars(Scalar::from(5u64), Scalar::ONE).unwrap();
        let id = RecoveryId::new(false, false);

        assert_eq!(
            VerifyingKey::recover_from_prehash(&[0u8; 32], &sig, id),
            Err(Error::NotOnCurve)
        );
    }
}
