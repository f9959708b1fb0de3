//! Error type

use core::fmt::{self, Display};

/// Result type with the crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// secp256k1 engine errors
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// A buffer had the wrong length for its encoding.
    InvalidLength,

    /// Bytes were malformed for their encoding (bad SEC1 tag, bad DER structure,
    /// bad recovery id).
    InvalidEncoding,

    /// An integer was outside its permitted range, e.g. a zero secret key or a
    /// scalar or coordinate not below its modulus.
    OutOfRange,

    /// A point does not satisfy the curve equation.
    NotOnCurve,

    /// An operation produced the point at infinity where a point was required.
    InfinityResult,

    /// Nonce generation did not find a usable value within the attempt limit.
    RetryExhausted,

    /// The ECDH finalization function declined to produce output.
    FinalizeRejected,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::InvalidLength => "invalid length",
            Error::InvalidEncoding => "invalid encoding",
            Error::OutOfRange => "value out of range",
            Error::NotOnCurve => "point is not on the curve",
            Error::InfinityResult => "result is the point at infinity",
            Error::RetryExhausted => "nonce generation retries exhausted",
            Error::FinalizeRejected => "shared secret finalization rejected",
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "ecdsa")]
impl From<Error> for signature::Error {
    #[cfg(feature = "std")]
    fn from(err: Error) -> signature::Error {
        signature::Error::from_source(err)
    }

    #[cfg(not(feature = "std"))]
    fn from(_err: Error) -> signature::Error {
        signature::Error::new()
    }
}
