//! ASN.1 DER encoding of ECDSA signatures.
//!
//! Decoding is strict DER: short-form lengths only, minimal integers, no
//! negative integers and no trailing data. Both components must lie in
//! `[1, n - 1]`.

use super::Signature;
use crate::{arithmetic::Scalar, Error, FieldBytes, Result};
use core::fmt::{self, Debug};
use der::{
    asn1::UintRef, Decode, DecodeValue, Encode, EncodeValue, Header, Length, Reader, Sequence,
    Writer,
};

/// Maximum size of a DER-encoded secp256k1 signature: two 33-byte
/// integers plus three tag/length headers.
pub const MAX_DER_SIGNATURE_SIZE: usize = 72;

/// Size of the smallest well-formed signature, `r = s = 1`.
const MIN_DER_SIGNATURE_SIZE: usize = 8;

/// ASN.1 DER-encoded ECDSA signature.
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct DerSignature {
    /// ASN.1 DER-encoded signature data
    bytes: [u8; MAX_DER_SIGNATURE_SIZE],

    /// Length of the encoding within `bytes`
    len: usize,
}

#[allow(clippy::len_without_is_empty)]
impl DerSignature {
    /// Parse and validate a DER-encoded signature.
    pub fn from_bytes(input: &[u8]) -> Result<Self> {
        decode(input)?;

        let mut bytes = [0u8; MAX_DER_SIGNATURE_SIZE];
        bytes
            .get_mut(..input.len())
            .ok_or(Error::InvalidLength)?
            .copy_from_slice(input);

        Ok(Self {
            bytes,
            len: input.len(),
        })
    }

    /// Encode big endian `r` and `s` scalar components.
    pub(crate) fn from_components(r: &FieldBytes, s: &FieldBytes) -> Result<Self> {
        let sig = SignatureRef {
            r: UintRef::new(r).map_err(|_| Error::InvalidEncoding)?,
            s: UintRef::new(s).map_err(|_| Error::InvalidEncoding)?,
        };

        let mut bytes = [0u8; MAX_DER_SIGNATURE_SIZE];
        let len = sig
            .encode_to_slice(&mut bytes)
            .map_err(|_| Error::InvalidEncoding)?
            .len();

        Ok(Self { bytes, len })
    }

    /// Borrow this signature as a byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Get the length of the signature in bytes.
    pub fn len(&self) -> usize {
        self.len
    }
}

impl AsRef<[u8]> for DerSignature {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Debug for DerSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ecdsa::DerSignature(")?;

        for &byte in self.as_ref() {
            write!(f, "{byte:02X}")?;
        }

        write!(f, ")")
    }
}

impl TryFrom<&[u8]> for DerSignature {
    type Error = Error;

    fn try_from(input: &[u8]) -> Result<Self> {
        Self::from_bytes(input)
    }
}

impl TryFrom<DerSignature> for Signature {
    type Error = Error;

    fn try_from(sig: DerSignature) -> Result<Signature> {
        decode(sig.as_bytes())
    }
}

impl TryFrom<&DerSignature> for Signature {
    type Error = Error;

    fn try_from(sig: &DerSignature) -> Result<Signature> {
        decode(sig.as_bytes())
    }
}

/// Decode a DER signature into its scalar components.
pub(super) fn decode(input: &[u8]) -> Result<Signature> {
    if input.len() < MIN_DER_SIGNATURE_SIZE || input.len() > MAX_DER_SIGNATURE_SIZE {
        return Err(Error::InvalidEncoding);
    }

    let SignatureRef { r, s } = SignatureRef::from_der(input).map_err(|_| Error::InvalidEncoding)?;
    Signature::from_scalars(uint_to_scalar(r)?, uint_to_scalar(s)?)
}

/// Convert a decoded unsigned integer (leading zeros already stripped) to a scalar.
fn uint_to_scalar(uint: UintRef<'_>) -> Result<Scalar> {
    let bytes = uint.as_bytes();
    let mut padded = FieldBytes::default();
    let offset = padded
        .len()
        .checked_sub(bytes.len())
        .ok_or(Error::OutOfRange)?;
    padded[offset..].copy_from_slice(bytes);

    Option::from(Scalar::from_bytes(&padded)).ok_or(Error::OutOfRange)
}

struct SignatureRef<'a> {
    r: UintRef<'a>,
    s: UintRef<'a>,
}

impl EncodeValue for SignatureRef<'_> {
    fn value_len(&self) -> der::Result<Length> {
        self.r.encoded_len()? + self.s.encoded_len()?
    }

    fn encode_value(&self, encoder: &mut impl Writer) -> der::Result<()> {
        self.r.encode(encoder)?;
        self.s.encode(encoder)?;
        Ok(())
    }
}

impl<'a> DecodeValue<'a> for SignatureRef<'a> {
    fn decode_value<R: Reader<'a>>(reader: &mut R, _header: Header) -> der::Result<Self> {
        Ok(Self {
            r: UintRef::decode(reader)?,
            s: UintRef::decode(reader)?,
        })
    }
}

impl<'a> Sequence<'a> for SignatureRef<'a> {}

#[cfg(test)]
mod tests {
    use super::{DerSignature, MAX_DER_SIGNATURE_SIZE};
    use crate::{arithmetic::Scalar, ecdsa::Signature, Error};
    use hex_literal::hex;

    const DER_SIG: [u8; 70] = hex!(
        "30440220484ECE2B365D2B2C2EAD34B518328BBFEF0F4409349EEEC9CB19837B5795A5F5
         022040C4F6901FE489F923C49D4104554FD08595EAF864137F87DADDD0E3619B0605"
    );

    const COMPACT_SIG: [u8; 64] = hex!(
        "484ECE2B365D2B2C2EAD34B518328BBFEF0F4409349EEEC9CB19837B5795A5F5
         40C4F6901FE489F923C49D4104554FD08595EAF864137F87DADDD0E3619B0605"
    );

    #[test]
    fn parse_known_signature() {
        let sig = Signature::from_der(&DER_SIG).unwrap();
        assert_eq!(sig.to_bytes(), COMPACT_SIG);

        let der = sig.to_der().unwrap();
        assert_eq!(der.as_bytes(), &DER_SIG[..]);
        assert_eq!(der.len(), 70);
    }

    #[test]
    fn high_bit_components_get_a_zero_byte() {
        let sig = Signature::from_bytes(&hex!(
            "f30554e5747ba9efa51894844256975f02bfeea8e3e0b9d1e037eac04d83b58b
             3553a895b4671ac8802c948a4e4f22cc1f84be17337db267e3ad637bd5ff0d6c"
        ))
        .unwrap();

        let der = sig.to_der().unwrap();
        assert_eq!(
            der.as_bytes(),
            &hex!(
                "3045022100f30554e5747ba9efa51894844256975f02bfeea8e3e0b9d1e037eac04d83b58b
                 02203553a895b4671ac8802c948a4e4f22cc1f84be17337db267e3ad637bd5ff0d6c"
            )[..]
        );
        assert_eq!(Signature::from_der(der.as_bytes()).unwrap(), sig);
        assert_eq!(DerSignature::from_bytes(der.as_bytes()).unwrap(), der);
    }

    #[test]
    fn largest_and_smallest_encodings() {
        let n_minus_one = -Scalar::ONE;
        let max = Signature::from_scalars(n_minus_one, n_minus_one).unwrap();
        let der = max.to_der().unwrap();
        assert_eq!(der.len(), MAX_DER_SIGNATURE_SIZE);
        assert_eq!(Signature::from_der(der.as_bytes()).unwrap(), max);

        let min = Signature::from_scalars(Scalar::ONE, Scalar::ONE).unwrap();
        let der = min.to_der().unwrap();
        assert_eq!(der.as_bytes(), &hex!("3006020101020101")[..]);
        assert_eq!(Signature::try_from(&der).unwrap(), min);
        assert_eq!(Signature::from_der(der.as_bytes()).unwrap(), min);
    }

    #[test]
    fn rejects_truncated_input() {
        assert_eq!(Signature::from_der(&[]), Err(Error::InvalidEncoding));
        assert_eq!(Signature::from_der(&[0x00]), Err(Error::InvalidEncoding));
        assert!(DerSignature::from_bytes(&[0x00]).is_err());

        for len in 0..DER_SIG.len() {
            assert!(Signature::from_der(&DER_SIG[..len]).is_err());
        }
    }

    #[test]
    fn rejects_trailing_data() {
        let mut bytes = [0u8; 71];
        bytes[..70].copy_from_slice(&DER_SIG);
        assert_eq!(Signature::from_der(&bytes), Err(Error::InvalidEncoding));
    }

    #[test]
    fn rejects_non_minimal_integers() {
        // r = 0x00 0x01
        assert_eq!(
            Signature::from_der(&hex!("300702020001020101")),
            Err(Error::InvalidEncoding)
        );
        // negative s
        assert_eq!(
            Signature::from_der(&hex!("3006020101020181")),
            Err(Error::InvalidEncoding)
        );
    }

    #[test]
    fn rejects_long_form_length() {
        assert_eq!(
            Signature::from_der(&hex!("308106020101020101")),
            Err(Error::InvalidEncoding)
        );
    }

    #[test]
    fn rejects_out_of_range_components() {
        // r = 0
        assert_eq!(
            Signature::from_der(&hex!("3006020100020101")),
            Err(Error::OutOfRange)
        );

        // s = n
        assert_eq!(
            Signature::from_der(&hex!(
                "3026020101022100FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141"
            )),
            Err(Error::OutOfRange)
        );
    }
}
