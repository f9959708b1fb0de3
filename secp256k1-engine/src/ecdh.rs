//! Elliptic Curve Diffie-Hellman (ECDH) key agreement.
//!
//! The shared point `S = d * Q` is passed through a finalization function,
//! an [`EcdhHasher`], which turns its coordinates into the 32-byte shared
//! secret. The default, [`Sha256Compressed`], hashes the compressed SEC1
//! encoding of `S`; [`RawX`] returns the x-coordinate unchanged.
//!
//! # Usage
//!
//! This usage example is from the perspective of two participants in the
//! exchange, nicknamed "Alice" and "Bob".
//!
#![cfg_attr(feature = "std", doc = "```")]
#![cfg_attr(not(feature = "std"), doc = "```ignore")]
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use secp256k1_engine::{
//!     ecdh, elliptic_curve::sec1::ToEncodedPoint, PublicKey, PublicKeyExt, SecretKey,
//! };
//! use rand_core::OsRng; // requires 'getrandom' feature
//!
//! // Alice
//! let alice_secret = SecretKey::random(&mut OsRng);
//! let alice_pk_bytes = alice_secret.public_key().to_encoded_point(true);
//!
//! // Bob
//! let bob_secret = SecretKey::random(&mut OsRng);
//! let bob_pk_bytes = bob_secret.public_key().to_encoded_point(true);
//!
//! // Alice decodes Bob's serialized public key and computes a shared secret from it
//! let bob_public = PublicKey::parse(bob_pk_bytes.as_bytes())?;
//! let alice_shared = ecdh::diffie_hellman(&alice_secret, &bob_public)?;
//!
//! // Bob decodes Alice's serialized public key and computes the same shared secret
//! let alice_public = PublicKey::parse(alice_pk_bytes.as_bytes())?;
//! let bob_shared = ecdh::diffie_hellman(&bob_secret, &alice_public)?;
//!
//! // Both participants arrive on the same shared secret
//! assert_eq!(alice_shared.raw_secret_bytes(), bob_shared.raw_secret_bytes());
//! # Ok(())
//! # }
//! ```

use crate::{Error, FieldBytes, PublicKey, Result, SecretKey};
use core::fmt;
use elliptic_curve::{
    subtle::{Choice, ConstantTimeEq},
    zeroize::{Zeroize, ZeroizeOnDrop},
};
use sha2::{Digest, Sha256};

/// Size of a shared secret in bytes.
pub const SHARED_SECRET_SIZE: usize = 32;

/// Finalization step of an ECDH exchange: maps the affine coordinates of the
/// shared point to the shared secret.
///
/// Returning `None` aborts the exchange with [`Error::FinalizeRejected`]. Any
/// context the function needs is carried by the implementing value.
///
/// Implemented for closures of the form
/// `Fn(&[u8; 32], &[u8; 32]) -> Option<[u8; 32]>`.
pub trait EcdhHasher {
    /// Derive the shared secret from the big-endian coordinates `x` and `y`.
    fn finalize(&self, x: &FieldBytes, y: &FieldBytes) -> Option<[u8; SHARED_SECRET_SIZE]>;
}

impl<F> EcdhHasher for F
where
    F: Fn(&FieldBytes, &FieldBytes) -> Option<[u8; SHARED_SECRET_SIZE]>,
{
    fn finalize(&self, x: &FieldBytes, y: &FieldBytes) -> Option<[u8; SHARED_SECRET_SIZE]> {
        self(x, y)
    }
}

/// SHA-256 of the compressed point: `SHA-256(0x02 | (y & 1) ‖ x)`.
///
/// This is the default finalization, compatible with libsecp256k1.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha256Compressed;

impl EcdhHasher for Sha256Compressed {
    fn finalize(&self, x: &FieldBytes, y: &FieldBytes) -> Option<[u8; SHARED_SECRET_SIZE]> {
        let version = 0x02 | (y[31] & 1);
        let digest = Sha256::new()
            .chain_update([version])
            .chain_update(x)
            .finalize();
        Some(digest.into())
    }
}

/// The x-coordinate of the shared point as-is, per SEC1 § 3.3.1.
///
/// Not uniformly random; feed it through a KDF before using it as a key.
#[derive(Clone, Copy, Debug, Default)]
pub struct RawX;

impl EcdhHasher for RawX {
    fn finalize(&self, x: &FieldBytes, _y: &FieldBytes) -> Option<[u8; SHARED_SECRET_SIZE]> {
        Some(*x)
    }
}

/// Shared secret value computed via ECDH key agreement.
///
/// Zeroized on drop.
pub struct SharedSecret {
    secret_bytes: [u8; SHARED_SECRET_SIZE],
}

impl SharedSecret {
    fn new(secret_bytes: [u8; SHARED_SECRET_SIZE]) -> Self {
        Self { secret_bytes }
    }

    /// Shared secret value, output of the finalization function.
    pub fn raw_secret_bytes(&self) -> &[u8; SHARED_SECRET_SIZE] {
        &self.secret_bytes
    }
}

impl ConstantTimeEq for SharedSecret {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.secret_bytes.ct_eq(&other.secret_bytes)
    }
}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedSecret").finish_non_exhaustive()
    }
}

impl Drop for SharedSecret {
    fn drop(&mut self) {
        self.secret_bytes.zeroize()
    }
}

impl ZeroizeOnDrop for SharedSecret {}

/// Compute the shared secret of `secret_key` and `public_key` with the
/// default [`Sha256Compressed`] finalization.
pub fn diffie_hellman(secret_key: &SecretKey, public_key: &PublicKey) -> Result<SharedSecret> {
    diffie_hellman_with(secret_key, public_key, &Sha256Compressed)
}

/// Compute the shared secret of `secret_key` and `public_key`, finalizing the
/// shared point with `hasher`.
///
/// Fails with [`Error::InfinityResult`] if the shared point is the identity
/// and with [`Error::FinalizeRejected`] if `hasher` returns `None`.
pub fn diffie_hellman_with(
    secret_key: &SecretKey,
    public_key: &PublicKey,
    hasher: &impl EcdhHasher,
) -> Result<SharedSecret> {
    let shared_point = (public_key.to_projective() * &*secret_key.to_nonzero_scalar()).to_affine();
    if bool::from(shared_point.is_identity()) {
        return Err(Error::InfinityResult);
    }

    let mut x = shared_point.x();
    let mut y = shared_point.y();
    let secret = hasher.finalize(&x, &y);
    x.zeroize();
    y.zeroize();

    secret.map(SharedSecret::new).ok_or(Error::FinalizeRejected)
}

#[cfg(test)]
mod tests {
    use super::{diffie_hellman, diffie_hellman_with, RawX, Sha256Compressed};
    use crate::{Error, FieldBytes, SecretKey, SecretKeyExt};
    use elliptic_curve::sec1::ToEncodedPoint;
    use hex_literal::hex;
    use sha2::{Digest, Sha256};

    #[test]
    fn default_hashes_compressed_point() {
        // d1 * (d2 * G) with d1 = 2, d2 = 3 is 6G
        let sk = SecretKey::parse(&hex!(
            "0000000000000000000000000000000000000000000000000000000000000002"
        ))
        .unwrap();
        let pk = SecretKey::parse(&hex!(
            "0000000000000000000000000000000000000000000000000000000000000003"
        ))
        .unwrap()
        .public_key();

        let six_g = SecretKey::parse(&hex!(
            "0000000000000000000000000000000000000000000000000000000000000006"
        ))
        .unwrap()
        .public_key()
        .to_encoded_point(true);
        let expected: [u8; 32] = Sha256::digest(six_g.as_bytes()).into();

        let shared = diffie_hellman(&sk, &pk).unwrap();
        assert_eq!(shared.raw_secret_bytes(), &expected);

        let raw = diffie_hellman_with(&sk, &pk, &RawX).unwrap();
        assert_eq!(&raw.raw_secret_bytes()[..], six_g.x().unwrap().as_slice());

        let explicit = diffie_hellman_with(&sk, &pk, &Sha256Compressed).unwrap();
        assert_eq!(explicit.raw_secret_bytes(), &expected);
    }

    #[test]
    fn closure_hasher() {
        let sk = SecretKey::parse(&[5u8; 32]).unwrap();
        let pk = SecretKey::parse(&[6u8; 32]).unwrap().public_key();

        let xor = |x: &FieldBytes, y: &FieldBytes| -> Option<[u8; 32]> {
            let mut out = [0u8; 32];
            for (o, (a, b)) in out.iter_mut().zip(x.iter().zip(y.iter())) {
                *o = a ^ b;
            }
            Some(out)
        };
        let a = diffie_hellman_with(&sk, &pk, &xor).unwrap();
        let b = diffie_hellman_with(&sk, &pk, &xor).unwrap();
        assert_eq!(a.raw_secret_bytes(), b.raw_secret_bytes());

        let reject = |_: &FieldBytes, _: &FieldBytes| -> Option<[u8; 32]> { None };
        assert_eq!(
            diffie_hellman_with(&sk, &pk, &reject).map(|_| ()),
            Err(Error::FinalizeRejected)
        );
    }

    #[test]
    fn debug_is_redacted() {
        let sk = SecretKey::parse(&[5u8; 32]).unwrap();
        let shared = diffie_hellman(&sk, &sk.public_key()).unwrap();
        assert_eq!(std::format!("{:?}", shared), "SharedSecret { .. }");
    }
}
