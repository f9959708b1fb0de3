//! Deterministic nonce derivation as described in RFC 6979.
//!
//! <https://datatracker.ietf.org/doc/html/rfc6979#section-3.2>

use crate::{arithmetic::Scalar, FieldBytes};
use elliptic_curve::zeroize::Zeroize;
use rfc6979::HmacDrbg;
use sha2::Sha256;

/// Maximum number of nonce candidates drawn for a single signature before
/// signing gives up with [`Error::RetryExhausted`](crate::Error::RetryExhausted).
///
/// A candidate is rejected when it is zero or not below n, or when it yields
/// `r = 0` or `s = 0`; each happens with probability below 2^-127.
pub const MAX_NONCE_ATTEMPTS: usize = 16;

/// Stream of RFC 6979 nonce candidates over HMAC-DRBG-SHA-256.
///
/// Seeded with the secret key, the digest reduced mod n and optional extra
/// entropy (the "additional data" of RFC 6979 § 3.6). Yields `None` for
/// candidates outside `[1, n - 1]`.
pub(crate) struct NonceGenerator {
    drbg: HmacDrbg<Sha256>,
}

impl NonceGenerator {
    pub(crate) fn new(secret: &Scalar, digest: &Scalar, extra_entropy: &[u8]) -> Self {
        let mut secret_bytes = secret.to_bytes();
        let drbg = HmacDrbg::new(&secret_bytes, &digest.to_bytes(), extra_entropy);
        secret_bytes.zeroize();
        Self { drbg }
    }
}

impl Iterator for NonceGenerator {
    type Item = Option<Scalar>;

    fn next(&mut self) -> Option<Option<Scalar>> {
        let mut bytes = FieldBytes::default();
        self.drbg.fill_bytes(&mut bytes);
        let candidate = Option::<Scalar>::from(Scalar::from_bytes(&bytes));
        bytes.zeroize();

        Some(candidate.filter(|k| !bool::from(k.is_zero())))
    }
}
