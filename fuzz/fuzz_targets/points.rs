#![no_main]
use libfuzzer_sys::fuzz_target;
use secp256k1_engine::{
    elliptic_curve::sec1::ToEncodedPoint, Error, PublicKey, PublicKeyExt, Scalar, SecretKey,
    SecretKeyExt,
};

fuzz_target!(|data: &[u8]| {
    // Arbitrary SEC1 input must parse cleanly or fail with an error
    let parsed = PublicKey::parse(data);
    if let Ok(public_key) = parsed {
        assert_eq!(PublicKey::from_sec1_bytes(data).ok(), Some(public_key));
        for compress in [true, false] {
            let encoded = public_key.to_encoded_point(compress);
            assert_eq!(PublicKey::parse(encoded.as_bytes()), Ok(public_key));
        }
    }

    if data.len() < 64 {
        return;
    }

    let mut d = [0u8; 32];
    d.copy_from_slice(&data[..32]);
    let mut t = [0u8; 32];
    t.copy_from_slice(&data[32..64]);

    let Ok(secret_key) = SecretKey::parse(&d) else {
        return;
    };
    let tweak = Scalar::from_bytes_reduced(&t);
    let public_key = secret_key.public_key();

    // Tweak homomorphisms
    match secret_key.tweak_add(&tweak) {
        Ok(tweaked) => assert_eq!(Ok(tweaked.public_key()), public_key.tweak_add(&tweak)),
        Err(_) => assert_eq!(public_key.tweak_add(&tweak), Err(Error::InfinityResult)),
    }
    if let Ok(tweaked) = secret_key.tweak_mul(&tweak) {
        assert_eq!(Ok(tweaked.public_key()), public_key.tweak_mul(&tweak));
    }

    // Combination
    let other = SecretKey::from_scalar(tweak).map(|k| k.public_key());
    if let Ok(other) = other {
        assert_eq!(
            PublicKey::combine(&[public_key, other]),
            PublicKey::combine(&[other, public_key])
        );
    }
});
