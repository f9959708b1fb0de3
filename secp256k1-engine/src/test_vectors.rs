//! secp256k1 test vectors.

pub mod ecdsa;
pub mod field;
pub mod group;
