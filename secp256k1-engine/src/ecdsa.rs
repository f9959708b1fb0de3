//! Elliptic Curve Digital Signature Algorithm (ECDSA) over secp256k1.
//!
//! Signatures are deterministic: nonces are derived with RFC 6979
//! (HMAC-DRBG over SHA-256) from the secret key and the message digest, and
//! every produced signature is normalized to "low-s" form (`s <= n / 2`).
//!
//! ## Usage
//!
#![cfg_attr(feature = "std", doc = "```")]
#![cfg_attr(not(feature = "std"), doc = "```ignore")]
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use rand_core::OsRng; // requires 'getrandom' feature
//! use secp256k1_engine::ecdsa::{
//!     signature::{Signer, Verifier},
//!     Signature, SigningKey, VerifyingKey,
//! };
//!
//! // Signing
//! let signing_key = SigningKey::random(&mut OsRng); // serialize with `::to_bytes()`
//! let message = b"ECDSA proves knowledge of a secret number in the context of a single message";
//! let signature: Signature = signing_key.sign(message);
//!
//! // Verifying
//! let verifying_key_bytes = signing_key.verifying_key().to_encoded_point(true);
//! let verifying_key = VerifyingKey::from_sec1_bytes(verifying_key_bytes.as_bytes())?;
//! assert!(verifying_key.verify(message, &signature).is_ok());
//! # Ok(())
//! # }
//! ```
//!
//! ## Recovery
//!
//! Signatures produced by [`SigningKey::sign_prehash_recoverable`] carry a
//! [`RecoveryId`] which allows the signer's [`VerifyingKey`] to be computed
//! from the signature and the message digest alone.

mod der;
mod nonce;
mod recoverable;
mod sign;
mod verify;

pub use self::{
    der::{DerSignature, MAX_DER_SIGNATURE_SIZE},
    nonce::MAX_NONCE_ATTEMPTS,
    recoverable::{RecoverableSignature, RecoveryId},
    sign::SigningKey,
    verify::VerifyingKey,
};

pub use signature;

use crate::{arithmetic::Scalar, Error, FieldBytes, Result};
use core::fmt::{self, Debug};
use signature::SignatureEncoding;

/// Compact ECDSA signature serialized as bytes: `r ‖ s`.
pub type SignatureBytes = [u8; Signature::BYTE_SIZE];

/// ECDSA/secp256k1 signature.
///
/// Both components are guaranteed to lie in `[1, n - 1]`. The `s` component
/// may be "high"; see [`Signature::normalize_s`].
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Signature {
    r: Scalar,
    s: Scalar,
}

impl Signature {
    /// Size of a compact signature in bytes.
    pub const BYTE_SIZE: usize = 64;

    /// Create a signature from its `r` and `s` scalars.
    ///
    /// Fails with [`Error::OutOfRange`] if either is zero.
    pub fn from_scalars(r: Scalar, s: Scalar) -> Result<Self> {
        if bool::from(r.is_zero() | s.is_zero()) {
            return Err(Error::OutOfRange);
        }

        Ok(Self { r, s })
    }

    /// Parse a compact `r ‖ s` signature.
    ///
    /// Fails with [`Error::OutOfRange`] if either component is zero or not below n.
    pub fn from_bytes(bytes: &SignatureBytes) -> Result<Self> {
        let (r_bytes, s_bytes) = bytes.split_at(Self::BYTE_SIZE / 2);
        let r = Scalar::try_from(r_bytes)?;
        let s = Scalar::try_from(s_bytes)?;
        Self::from_scalars(r, s)
    }

    /// Parse a compact signature from a byte slice, which must be 64 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes: &SignatureBytes = bytes.try_into().map_err(|_| Error::InvalidLength)?;
        Self::from_bytes(bytes)
    }

    /// Parse a strict ASN.1 DER `SEQUENCE { INTEGER r, INTEGER s }`.
    pub fn from_der(bytes: &[u8]) -> Result<Self> {
        der::decode(bytes)
    }

    /// Serialize this signature as ASN.1 DER.
    pub fn to_der(&self) -> Result<DerSignature> {
        DerSignature::from_components(&self.r.to_bytes(), &self.s.to_bytes())
    }

    /// Serialize this signature as compact `r ‖ s` bytes.
    pub fn to_bytes(&self) -> SignatureBytes {
        let mut ret = [0; Self::BYTE_SIZE];
        let (r_bytes, s_bytes) = ret.split_at_mut(Self::BYTE_SIZE / 2);
        r_bytes.copy_from_slice(&self.r.to_bytes());
        s_bytes.copy_from_slice(&self.s.to_bytes());
        ret
    }

    /// Get the `r` component of this signature.
    pub fn r(&self) -> Scalar {
        self.r
    }

    /// Get the `s` component of this signature.
    pub fn s(&self) -> Scalar {
        self.s
    }

    /// Bytes for the `r` component of this signature.
    pub fn r_bytes(&self) -> FieldBytes {
        self.r.to_bytes()
    }

    /// Bytes for the `s` component of this signature.
    pub fn s_bytes(&self) -> FieldBytes {
        self.s.to_bytes()
    }

    /// Split the signature into its `r` and `s` scalars.
    pub fn split_scalars(&self) -> (Scalar, Scalar) {
        (self.r, self.s)
    }

    /// Is `s <= n / 2`?
    pub fn is_low_s(&self) -> bool {
        !bool::from(self.s.is_high())
    }

    /// Replace `s` with `n - s` if `s > n / 2`.
    ///
    /// Returns `true` if the signature was changed.
    pub fn normalize_s(&mut self) -> bool {
        if self.is_low_s() {
            return false;
        }

        self.s = -self.s;
        true
    }
}

impl Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ecdsa::Signature(")?;

        for byte in self.to_bytes() {
            write!(f, "{:02X}", byte)?;
        }

        write!(f, ")")
    }
}

impl From<Signature> for SignatureBytes {
    fn from(signature: Signature) -> SignatureBytes {
        signature.to_bytes()
    }
}

impl From<&Signature> for SignatureBytes {
    fn from(signature: &Signature) -> SignatureBytes {
        signature.to_bytes()
    }
}

impl SignatureEncoding for Signature {
    type Repr = SignatureBytes;

    fn to_bytes(&self) -> Self::Repr {
        self.into()
    }

    fn encoded_len(&self) -> usize {
        Self::BYTE_SIZE
    }
}

impl TryFrom<SignatureBytes> for Signature {
    type Error = Error;

    fn try_from(signature: SignatureBytes) -> Result<Signature> {
        Signature::from_bytes(&signature)
    }
}

impl TryFrom<&SignatureBytes> for Signature {
    type Error = Error;

    fn try_from(signature: &SignatureBytes) -> Result<Signature> {
        Signature::from_bytes(signature)
    }
}

impl TryFrom<&[u8]> for Signature {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Signature> {
        Signature::from_slice(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::Signature;
    use crate::{arithmetic::Scalar, Error};
    use hex_literal::hex;

    const SIG: [u8; 64] = hex!(
        "484ECE2B365D2B2C2EAD34B518328BBFEF0F4409349EEEC9CB19837B5795A5F5
         40C4F6901FE489F923C49D4104554FD08595EAF864137F87DADDD0E3619B0605"
    );

    #[test]
    fn compact_round_trip() {
        let sig = Signature::from_slice(&SIG).unwrap();
        assert_eq!(sig.to_bytes(), SIG);
        assert_eq!(sig.r_bytes()[..], SIG[..32]);
        assert_eq!(sig.s_bytes()[..], SIG[32..]);
    }

    #[test]
    fn rejects_zero_and_overflowing_components() {
        let mut bytes = SIG;
        bytes[..32].fill(0);
        assert_eq!(Signature::from_bytes(&bytes), Err(Error::OutOfRange));

        let mut bytes = SIG;
        bytes[32..].fill(0xff);
        assert_eq!(Signature::from_bytes(&bytes), Err(Error::OutOfRange));

        assert_eq!(Signature::from_slice(&SIG[..63]), Err(Error::InvalidLength));
        assert_eq!(
            Signature::from_scalars(Scalar::ONE, Scalar::ZERO),
            Err(Error::OutOfRange)
        );
    }

    #[test]
    fn normalize_s() {
        let low = Signature::from_slice(&SIG).unwrap();
        assert!(low.is_low_s());

        let mut high = Signature::from_scalars(low.r(), -low.s()).unwrap();
        assert!(!high.is_low_s());
        assert!(high.normalize_s());
        assert_eq!(high, low);
        assert!(!high.normalize_s());
        assert_eq!(high, low);
    }

    #[test]
    fn debug_is_hex() {
        let sig = Signature::from_slice(&SIG).unwrap();
        let debug = std::format!("{:?}", sig);
        assert!(debug.starts_with("ecdsa::Signature(484ECE2B"));
    }
}
