#![no_main]
use libfuzzer_sys::fuzz_target;
use secp256k1_engine::ecdsa::{RecoverableSignature, Signature};

fuzz_target!(|data: &[u8]| {
    // Strict DER: anything accepted re-encodes to the same bytes
    if let Ok(signature) = Signature::from_der(data) {
        let der = signature.to_der().unwrap();
        assert_eq!(der.as_bytes(), data);
    }

    if let Ok(signature) = Signature::from_slice(data) {
        assert_eq!(&signature.to_bytes()[..], data);
    }

    if let Ok(signature) = RecoverableSignature::from_bytes(data) {
        assert_eq!(&signature.to_bytes()[..], data);
        let mut digest = [0u8; 32];
        digest.copy_from_slice(&data[..32]);
        let _ = signature.recover_from_prehash(&digest);
    }
});
