#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc(html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo_small.png")]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

//! Pure Rust implementation of the secp256k1 elliptic curve.
//!
//! The curve's equation is `y² = x³ + 7` over the prime field of order
//! `p = 2²⁵⁶ - 2³² - 977`, specified in SEC 2: Recommended Elliptic Curve
//! Domain Parameters: <https://www.secg.org/sec2-v2.pdf>
//!
//! ## Features
//!
//! - [`arithmetic`]: constant-time field, scalar and group arithmetic
//! - [`SecretKey`] / [`PublicKey`]: the generic `elliptic-curve` key types,
//!   extended by [`SecretKeyExt`] / [`PublicKeyExt`] with strict parsing and
//!   tweaking
//! - [`sec1`]: compressed and uncompressed point encodings
//! - [`ecdsa`]: RFC 6979 deterministic signing, verification, public-key
//!   recovery and strict DER
//! - [`ecdh`]: Diffie-Hellman with a pluggable shared-secret finalization
//!
//! ## ⚠️ Security Warning
//!
//! The elliptic curve arithmetic contained in this crate has never been
//! independently audited!
//!
//! All arithmetic on secrets is written to run in constant time.
//!
//! USE AT YOUR OWN RISK!
//!
//! ## Minimum Supported Rust Version
//!
//! Rust **1.81** or higher.
//!
//! Minimum supported Rust version can be changed in the future, but it will be
//! done with a minor version bump.
//!
//! ## Usage
//!
#![cfg_attr(all(feature = "ecdsa", feature = "std"), doc = "```")]
#![cfg_attr(not(all(feature = "ecdsa", feature = "std")), doc = "```ignore")]
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use secp256k1_engine::{
//!     elliptic_curve::sec1::ToEncodedPoint, PublicKey, PublicKeyExt, Scalar, SecretKey,
//!     SecretKeyExt,
//! };
//!
//! let secret_key = SecretKey::parse(&[0x2a; 32])?;
//! let public_key = secret_key.public_key();
//!
//! // Tweaking both halves of a key pair by the same scalar keeps them matched
//! let tweak = Scalar::from(7u64);
//! let tweaked = secret_key.tweak_add(&tweak)?;
//! assert_eq!(tweaked.public_key(), public_key.tweak_add(&tweak)?);
//!
//! // SEC1 round trip
//! let encoded = public_key.to_encoded_point(true);
//! assert_eq!(PublicKey::parse(encoded.as_bytes())?, public_key);
//! # Ok(())
//! # }
//! ```

#[cfg(any(feature = "std", test))]
extern crate std;

pub mod arithmetic;

#[cfg(feature = "ecdh")]
#[cfg_attr(docsrs, doc(cfg(feature = "ecdh")))]
pub mod ecdh;

#[cfg(feature = "ecdsa")]
#[cfg_attr(docsrs, doc(cfg(feature = "ecdsa")))]
pub mod ecdsa;

pub mod sec1;

#[cfg(any(feature = "test-vectors", test))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-vectors")))]
pub mod test_vectors;

mod error;
mod public_key;
mod secret_key;

pub use crate::{
    arithmetic::{AffinePoint, FieldElement, ProjectivePoint, Scalar},
    error::{Error, Result},
    public_key::{PublicKey, PublicKeyExt},
    sec1::{CompressedPoint, EncodedPoint},
    secret_key::{SecretKey, SecretKeyExt, SECRET_KEY_SIZE},
};
pub use elliptic_curve;

use elliptic_curve::{bigint::U256, consts::U32, point::PointCompression, FieldBytesEncoding};

/// Big-endian serialization of a field element or scalar.
pub type FieldBytes = [u8; 32];

/// Non-zero scalar, as used for secret keys.
pub type NonZeroScalar = elliptic_curve::NonZeroScalar<Secp256k1>;

/// secp256k1 elliptic curve.
///
/// Specified in Certicom's SECG in SEC 2: Recommended Elliptic Curve Domain Parameters:
///
/// <https://www.secg.org/sec2-v2.pdf>
///
/// The curve's equation is `y² = x³ + 7` over a ~256-bit prime field.
///
/// It's primarily notable for its use in Bitcoin and other cryptocurrencies.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct Secp256k1;

impl elliptic_curve::Curve for Secp256k1 {
    /// 32-byte serialized field elements.
    type FieldBytesSize = U32;

    /// 256-bit field modulus.
    type Uint = U256;

    /// Curve order.
    const ORDER: U256 =
        U256::from_be_hex("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141");
}

impl elliptic_curve::PrimeCurve for Secp256k1 {}

impl PointCompression for Secp256k1 {
    /// secp256k1 points are typically compressed.
    const COMPRESS_POINTS: bool = true;
}

impl FieldBytesEncoding<Secp256k1> for U256 {}
