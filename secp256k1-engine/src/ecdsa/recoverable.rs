//! Recoverable signatures.
//!
//! These signatures include an additional [`RecoveryId`] which allows for
//! recovery of the [`VerifyingKey`] which can be used to verify them.
//!
//! This is helpful in cases where a hash/fingerprint of a [`VerifyingKey`]
//! for a given signature is known in advance.

use super::{Signature, SignatureBytes, VerifyingKey};
use crate::{Error, FieldBytes, Result};

/// Recovery identifier: which of the (up to) four candidate points `R`
/// a signature was produced with.
///
/// - bit 0: the y-coordinate of `R` is odd
/// - bit 1: the x-coordinate of `R` was reduced mod n (i.e. `R.x >= n`)
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct RecoveryId(u8);

impl RecoveryId {
    /// Maximum supported value for the recovery ID (inclusive).
    pub const MAX: u8 = 3;

    /// Create a new [`RecoveryId`] from the following 1-bit arguments:
    ///
    /// - `is_y_odd`: is the y-coordinate of `R` odd?
    /// - `is_x_reduced`: did the x-coordinate of `R` overflow the group order?
    pub const fn new(is_y_odd: bool, is_x_reduced: bool) -> Self {
        Self(((is_x_reduced as u8) << 1) | (is_y_odd as u8))
    }

    /// Did the x-coordinate of `R` overflow the group order?
    pub const fn is_x_reduced(self) -> bool {
        (self.0 & 0b10) != 0
    }

    /// Is the y-coordinate of `R` odd?
    pub const fn is_y_odd(self) -> bool {
        (self.0 & 1) != 0
    }

    /// Convert a `u8` into a [`RecoveryId`].
    pub const fn from_byte(byte: u8) -> Option<Self> {
        if byte <= Self::MAX {
            Some(Self(byte))
        } else {
            None
        }
    }

    /// Convert this [`RecoveryId`] into a `u8`.
    pub const fn to_byte(self) -> u8 {
        self.0
    }

    /// The recovery id of the same signature with `s` negated.
    pub(crate) const fn negate_s(self) -> Self {
        Self(self.0 ^ 1)
    }
}

impl TryFrom<u8> for RecoveryId {
    type Error = Error;

    fn try_from(byte: u8) -> Result<Self> {
        Self::from_byte(byte).ok_or(Error::InvalidEncoding)
    }
}

impl From<RecoveryId> for u8 {
    fn from(id: RecoveryId) -> u8 {
        id.0
    }
}

/// Signature plus [`RecoveryId`], serialized as 65 bytes:
///
/// - `r`: 32-byte integer, big endian
/// - `s`: 32-byte integer, big endian
/// - `v`: 1-byte recovery id
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct RecoverableSignature {
    signature: Signature,
    recovery_id: RecoveryId,
}

impl RecoverableSignature {
    /// Size of a serialized recoverable signature in bytes.
    pub const BYTE_SIZE: usize = 65;

    /// Pair a signature with a recovery id.
    ///
    /// The id is not checked against the signature; a wrong id makes recovery
    /// produce a different key or fail.
    pub fn new(signature: &Signature, recovery_id: RecoveryId) -> Self {
        Self {
            signature: *signature,
            recovery_id,
        }
    }

    /// Parse a compact 64-byte `r ‖ s` signature together with a recovery id
    /// in `0..=3`.
    pub fn from_compact(bytes: &[u8], recovery_id: u8) -> Result<Self> {
        let signature = Signature::from_slice(bytes)?;
        let recovery_id = RecoveryId::try_from(recovery_id)?;
        Ok(Self::new(&signature, recovery_id))
    }

    /// Parse the 65-byte `r ‖ s ‖ v` serialization.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != Self::BYTE_SIZE {
            return Err(Error::InvalidLength);
        }

        let (compact, id) = bytes.split_at(Signature::BYTE_SIZE);
        Self::from_compact(compact, id[0])
    }

    /// Serialize as 65 bytes: `r ‖ s ‖ v`.
    pub fn to_bytes(&self) -> [u8; Self::BYTE_SIZE] {
        let mut bytes = [0u8; Self::BYTE_SIZE];
        bytes[..Signature::BYTE_SIZE].copy_from_slice(&self.signature.to_bytes());
        bytes[Signature::BYTE_SIZE] = self.recovery_id.to_byte();
        bytes
    }

    /// Serialize as a compact 64-byte signature and a separate recovery id.
    pub fn to_compact(&self) -> (SignatureBytes, RecoveryId) {
        (self.signature.to_bytes(), self.recovery_id)
    }

    /// Drop the recovery id, yielding a plain [`Signature`].
    pub fn signature(&self) -> Signature {
        self.signature
    }

    /// Get the [`RecoveryId`] for this signature.
    pub fn recovery_id(&self) -> RecoveryId {
        self.recovery_id
    }

    /// Recover the [`VerifyingKey`] that produced this signature over `digest`.
    pub fn recover_from_prehash(&self, digest: &FieldBytes) -> Result<VerifyingKey> {
        VerifyingKey::recover_from_prehash(digest, &self.signature, self.recovery_id)
    }
}

impl From<RecoverableSignature> for Signature {
    fn from(sig: RecoverableSignature) -> Signature {
        sig.signature
    }
}

impl From<RecoverableSignature> for [u8; RecoverableSignature::BYTE_SIZE] {
    fn from(sig: RecoverableSignature) -> Self {
        sig.to_bytes()
    }
}

impl TryFrom<&[u8]> for RecoverableSignature {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes(bytes)
    }
}
