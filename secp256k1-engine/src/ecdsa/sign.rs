//! ECDSA signing.
//!
//! ## Algorithm
//!
//! ```text
//! 1: z = digest mod n
//! 2: draw k from the RFC 6979 HMAC-DRBG seeded with (d, z, extra entropy)
//! 3: R = k * G, r = R.x mod n; draw again at step 2 if k or r is zero
//! 4: s = k^-1 * (z + r * d); draw again at step 2 if s is zero
//! 5: if s > n / 2, replace s with n - s
//! ```

use super::{
    nonce::{NonceGenerator, MAX_NONCE_ATTEMPTS},
    RecoverableSignature, RecoveryId, Signature, VerifyingKey,
};
use crate::{
    arithmetic::{ProjectivePoint, Scalar},
    Error, FieldBytes, Result, SecretKey, SecretKeyExt,
};
use core::fmt::{self, Debug};
use elliptic_curve::{
    rand_core::{CryptoRng, RngCore},
    subtle::{Choice, ConstantTimeEq},
};
use sha2::{Digest, Sha256};
use signature::{hazmat::PrehashSigner, Keypair, Signer};

/// ECDSA/secp256k1 signing key.
///
/// ## Usage
///
/// The inherent `sign_prehash*` methods sign 32-byte message digests. The
/// [`signature`] crate traits are also implemented:
///
/// - [`Signer`]: sign a message, hashing it with SHA-256 first
/// - [`PrehashSigner`]: sign the raw output bytes of a message digest
#[derive(Clone)]
pub struct SigningKey {
    /// Secret key.
    secret_key: SecretKey,

    /// Verifying key for this signing key.
    verifying_key: VerifyingKey,
}

impl SigningKey {
    /// Generate a cryptographically random [`SigningKey`].
    pub fn random(rng: &mut (impl CryptoRng + RngCore)) -> Self {
        Self::from(SecretKey::random(rng))
    }

    /// Initialize signing key from a 32-byte big-endian secret scalar.
    pub fn from_bytes(bytes: &FieldBytes) -> Result<Self> {
        SecretKey::parse(bytes).map(Self::from)
    }

    /// Initialize signing key from a byte slice, which must be 32 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        SecretKey::parse(bytes).map(Self::from)
    }

    /// Serialize this [`SigningKey`] as bytes.
    pub fn to_bytes(&self) -> FieldBytes {
        self.secret_key.to_bytes().into()
    }

    /// Borrow the [`SecretKey`] this signing key wraps.
    pub fn as_secret_key(&self) -> &SecretKey {
        &self.secret_key
    }

    /// Get the [`VerifyingKey`] which corresponds to this [`SigningKey`].
    pub fn verifying_key(&self) -> &VerifyingKey {
        &self.verifying_key
    }

    /// Sign a 32-byte message digest.
    ///
    /// Deterministic: the same key and digest always give the same signature.
    /// The result is low-s normalized.
    pub fn sign_prehash(&self, digest: &FieldBytes) -> Result<Signature> {
        self.sign_prehash_recoverable(digest)
            .map(|sig| sig.signature())
    }

    /// Sign a 32-byte message digest, mixing `entropy` into the nonce derivation.
    pub fn sign_prehash_with_entropy(
        &self,
        digest: &FieldBytes,
        entropy: &[u8; 32],
    ) -> Result<Signature> {
        self.sign_prehash_recoverable_with_entropy(digest, entropy)
            .map(|sig| sig.signature())
    }

    /// Sign a 32-byte message digest, returning a signature the public key
    /// can be recovered from.
    pub fn sign_prehash_recoverable(&self, digest: &FieldBytes) -> Result<RecoverableSignature> {
        sign_prehash_rfc6979(&self.secret_key.to_nonzero_scalar(), digest, &[])
    }

    /// Recoverable signature with caller-supplied entropy mixed into the nonce derivation.
    pub fn sign_prehash_recoverable_with_entropy(
        &self,
        digest: &FieldBytes,
        entropy: &[u8; 32],
    ) -> Result<RecoverableSignature> {
        sign_prehash_rfc6979(&self.secret_key.to_nonzero_scalar(), digest, entropy)
    }
}

//
// `*Signer` trait impls
//

impl PrehashSigner<Signature> for SigningKey {
    fn sign_prehash(&self, prehash: &[u8]) -> signature::Result<Signature> {
        let digest: &FieldBytes = prehash.try_into().map_err(|_| Error::InvalidLength)?;
        Ok(SigningKey::sign_prehash(self, digest)?)
    }
}

impl PrehashSigner<RecoverableSignature> for SigningKey {
    fn sign_prehash(&self, prehash: &[u8]) -> signature::Result<RecoverableSignature> {
        let digest: &FieldBytes = prehash.try_into().map_err(|_| Error::InvalidLength)?;
        Ok(self.sign_prehash_recoverable(digest)?)
    }
}

impl Signer<Signature> for SigningKey {
    fn try_sign(&self, msg: &[u8]) -> signature::Result<Signature> {
        let digest: FieldBytes = Sha256::digest(msg).into();
        Ok(SigningKey::sign_prehash(self, &digest)?)
    }
}

impl Signer<RecoverableSignature> for SigningKey {
    fn try_sign(&self, msg: &[u8]) -> signature::Result<RecoverableSignature> {
        let digest: FieldBytes = Sha256::digest(msg).into();
        Ok(self.sign_prehash_recoverable(&digest)?)
    }
}

//
// Other trait impls
//

impl AsRef<VerifyingKey> for SigningKey {
    fn as_ref(&self) -> &VerifyingKey {
        &self.verifying_key
    }
}

impl ConstantTimeEq for SigningKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.secret_key.ct_eq(&other.secret_key)
    }
}

impl Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey")
            .field("verifying_key", &self.verifying_key)
            .finish_non_exhaustive()
    }
}

/// Constant-time comparison
impl Eq for SigningKey {}
impl PartialEq for SigningKey {
    fn eq(&self, other: &SigningKey) -> bool {
        self.ct_eq(other).into()
    }
}

impl From<SecretKey> for SigningKey {
    fn from(secret_key: SecretKey) -> SigningKey {
        let verifying_key = VerifyingKey::from(secret_key.public_key());
        Self {
            secret_key,
            verifying_key,
        }
    }
}

impl From<&SecretKey> for SigningKey {
    fn from(secret_key: &SecretKey) -> SigningKey {
        Self::from(secret_key.clone())
    }
}

impl From<SigningKey> for SecretKey {
    fn from(signing_key: SigningKey) -> SecretKey {
        signing_key.secret_key
    }
}

impl TryFrom<&[u8]> for SigningKey {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_slice(bytes)
    }
}

impl Keypair for SigningKey {
    type VerifyingKey = VerifyingKey;

    fn verifying_key(&self) -> VerifyingKey {
        self.verifying_key
    }
}

/// Sign `digest` with nonces drawn from RFC 6979.
fn sign_prehash_rfc6979(
    secret_scalar: &Scalar,
    digest: &FieldBytes,
    extra_entropy: &[u8],
) -> Result<RecoverableSignature> {
    let z = Scalar::from_bytes_reduced(digest);
    let nonces = NonceGenerator::new(secret_scalar, &z, extra_entropy);
    sign_with_nonces(secret_scalar, &z, nonces)
}

/// Try nonce candidates in order until one yields a valid signature, giving up
/// after [`MAX_NONCE_ATTEMPTS`] candidates.
///
/// `None` entries are candidates already rejected by the nonce source.
fn sign_with_nonces(
    secret_scalar: &Scalar,
    z: &Scalar,
    nonces: impl IntoIterator<Item = Option<Scalar>>,
) -> Result<RecoverableSignature> {
    nonces
        .into_iter()
        .take(MAX_NONCE_ATTEMPTS)
        .flatten()
        .find_map(|k| sign_with_nonce(secret_scalar, &k, z))
        .ok_or(Error::RetryExhausted)
}

/// Sign the reduced digest `z` with the nonce `k`.
///
/// Returns `None` if `k`, `r` or `s` is zero. The signature is low-s
/// normalized and the recovery id adjusted to match.
pub(super) fn sign_with_nonce(
    secret_scalar: &Scalar,
    k: &Scalar,
    z: &Scalar,
) -> Option<RecoverableSignature> {
    let k_inv = Option::<Scalar>::from(k.invert())?;

    let big_r = ProjectivePoint::mul_by_generator(k).to_affine();
    let x = big_r.x();
    let r = Scalar::from_bytes_reduced(&x);
    let x_reduced = Scalar::from_bytes(&x).is_none();

    let s = k_inv * (*z + r * secret_scalar);
    let mut signature = Signature::from_scalars(r, s).ok()?;
    let mut recovery_id = RecoveryId::new(big_r.y_is_odd().into(), x_reduced.into());

    if signature.normalize_s() {
        recovery_id = recovery_id.negate_s();
    }

    Some(RecoverableSignature::new(&signature, recovery_id))
}

#[cfg(test)]
mod tests {
    use super::{sign_with_nonce, sign_with_nonces, SigningKey};
    use crate::{
        arithmetic::Scalar,
        ecdsa::{RecoverableSignature, Signature},
        test_vectors::ecdsa::{ECDSA_TEST_VECTORS, RECOVERY_TEST_VECTORS, RFC6979_TEST_VECTORS},
        Error,
    };
    use core::iter;
    use hex_literal::hex;
    use sha2::{Digest, Sha256};
    use signature::{hazmat::PrehashSigner, Signer};

    #[test]
    fn fixed_nonce_vectors() {
        for vector in ECDSA_TEST_VECTORS {
            let d = Scalar::from_bytes(&vector.d).unwrap();
            let k = Scalar::from_bytes(&vector.k).unwrap();
            let z = Scalar::from_bytes_reduced(&vector.m);

            let sig = sign_with_nonce(&d, &k, &z).unwrap().signature();
            assert_eq!(sig.r_bytes(), vector.r);
            assert_eq!(sig.s_bytes(), vector.s);
        }
    }

    #[test]
    fn rfc6979_vectors() {
        for vector in RFC6979_TEST_VECTORS {
            let key = SigningKey::from_bytes(&vector.d).unwrap();
            let digest: [u8; 32] = Sha256::digest(vector.msg).into();

            let sig = match vector.extra {
                Some(extra) => key.sign_prehash_recoverable_with_entropy(&digest, &extra),
                None => key.sign_prehash_recoverable(&digest),
            }
            .unwrap();

            assert_eq!(sig.signature().to_bytes(), vector.sig);
            assert_eq!(sig.recovery_id().to_byte(), vector.recid);

            let signed: Signature = key.sign(vector.msg);
            if vector.extra.is_none() {
                assert_eq!(signed, sig.signature());
            }
        }
    }

    #[test]
    fn prehash_vectors() {
        for vector in RECOVERY_TEST_VECTORS {
            let key = SigningKey::from_bytes(&vector.d).unwrap();
            let sig = match vector.extra {
                Some(extra) => key.sign_prehash_recoverable_with_entropy(&vector.digest, &extra),
                None => key.sign_prehash_recoverable(&vector.digest),
            }
            .unwrap();

            assert_eq!(sig.signature().to_bytes(), vector.sig);
            assert_eq!(sig.recovery_id().to_byte(), vector.recid);
        }
    }

    #[test]
    fn signing_is_deterministic_and_low_s() {
        let key = SigningKey::from_bytes(&[0x42; 32]).unwrap();
        let digest = hex!("c9f1c76685845ea81cac9925a7565887b7771b34b35e641cca85db9fefd0e71f");

        let a = key.sign_prehash(&digest).unwrap();
        let b = key.sign_prehash(&digest).unwrap();
        assert_eq!(a, b);
        assert!(a.is_low_s());

        let c = key.sign_prehash_with_entropy(&digest, &[7; 32]).unwrap();
        assert_ne!(a, c);
        assert!(c.is_low_s());
    }

    #[test]
    fn trait_impls_match_inherent_methods() {
        let key = SigningKey::from_bytes(&[0x42; 32]).unwrap();
        let digest: [u8; 32] = Sha256::digest(b"hello").into();

        let sig: Signature = PrehashSigner::<Signature>::sign_prehash(&key, &digest).unwrap();
        assert_eq!(sig, key.sign_prehash(&digest).unwrap());

        let rec: RecoverableSignature =
            PrehashSigner::<RecoverableSignature>::sign_prehash(&key, &digest).unwrap();
        assert_eq!(rec.signature(), sig);

        let signed: RecoverableSignature = key.sign(b"hello");
        assert_eq!(signed, rec);

        assert!(PrehashSigner::<Signature>::sign_prehash(&key, &digest[..31]).is_err());
    }

    #[test]
    fn retries_are_bounded() {
        let d = Scalar::from(5u64);
        let z = Scalar::from(9u64);

        assert_eq!(
            sign_with_nonces(&d, &z, iter::repeat(None)),
            Err(Error::RetryExhausted)
        );
        assert_eq!(
            sign_with_nonces(&d, &z, iter::repeat(Some(Scalar::ZERO))),
            Err(Error::RetryExhausted)
        );

        let k = Scalar::from(11u64);
        let expected = sign_with_nonce(&d, &k, &z).unwrap();
        let nonces = iter::repeat(None).take(15).chain(iter::once(Some(k)));
        assert_eq!(sign_with_nonces(&d, &z, nonces), Ok(expected));

        let nonces = iter::repeat(None).take(16).chain(iter::once(Some(k)));
        assert_eq!(
            sign_with_nonces(&d, &z, nonces),
            Err(Error::RetryExhausted)
        );
    }
}
