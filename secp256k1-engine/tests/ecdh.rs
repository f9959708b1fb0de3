#![cfg(feature = "ecdh")]

use proptest::prelude::*;
use rand_core::OsRng; // requires 'getrandom' feature
use secp256k1_engine::{
    ecdh::{self, EcdhHasher, RawX},
    elliptic_curve::sec1::ToEncodedPoint,
    Error, FieldBytes, PublicKey, PublicKeyExt, Scalar, SecretKey, SecretKeyExt,
};

prop_compose! {
    fn secret_key()(bytes in any::<[u8; 32]>()) -> SecretKey {
        SecretKey::from_scalar(Scalar::from_bytes_reduced(&bytes))
            .unwrap_or_else(|_| SecretKey::from_scalar(Scalar::ONE).unwrap())
    }
}

/// Hasher with caller-supplied context: XORs the x-coordinate with a key.
struct Masked {
    mask: [u8; 32],
}

impl EcdhHasher for Masked {
    fn finalize(&self, x: &FieldBytes, _y: &FieldBytes) -> Option<[u8; 32]> {
        let mut out = *x;
        for (o, m) in out.iter_mut().zip(self.mask.iter()) {
            *o ^= m;
        }
        Some(out)
    }
}

#[test]
fn ecdh() {
    // Alice
    let alice_secret = SecretKey::random(&mut OsRng);
    let alice_pk_bytes = alice_secret.public_key().to_encoded_point(true);

    // Bob
    let bob_secret = SecretKey::random(&mut OsRng);
    let bob_pk_bytes = bob_secret.public_key().to_encoded_point(false);

    // Alice decodes Bob's serialized public key and computes a shared secret from it
    let bob_public = PublicKey::parse(bob_pk_bytes.as_bytes()).unwrap();
    let alice_shared = ecdh::diffie_hellman(&alice_secret, &bob_public).unwrap();

    // Bob decodes Alice's serialized public key and computes the same shared secret
    let alice_public = PublicKey::parse(alice_pk_bytes.as_bytes()).unwrap();
    let bob_shared = ecdh::diffie_hellman(&bob_secret, &alice_public).unwrap();

    // Both participants arrive on the same shared secret
    assert_eq!(
        alice_shared.raw_secret_bytes(),
        bob_shared.raw_secret_bytes()
    );
}

#[test]
fn custom_hasher_with_context() {
    let alice = SecretKey::parse(&[0x0a; 32]).unwrap();
    let bob = SecretKey::parse(&[0x0b; 32]).unwrap();
    let hasher = Masked { mask: [0xff; 32] };

    let masked = ecdh::diffie_hellman_with(&alice, &bob.public_key(), &hasher).unwrap();
    let raw = ecdh::diffie_hellman_with(&bob, &alice.public_key(), &RawX).unwrap();

    for (m, r) in masked.raw_secret_bytes().iter().zip(raw.raw_secret_bytes()) {
        assert_eq!(*m, !r);
    }
}

#[test]
fn rejecting_hasher() {
    let secret = SecretKey::parse(&[0x0a; 32]).unwrap();
    let reject = |_: &FieldBytes, _: &FieldBytes| -> Option<[u8; 32]> { None };

    assert_eq!(
        ecdh::diffie_hellman_with(&secret, &secret.public_key(), &reject).map(|_| ()),
        Err(Error::FinalizeRejected)
    );
}

proptest! {
    #[test]
    fn shared_secret_is_symmetric(a in secret_key(), b in secret_key()) {
        let ab = ecdh::diffie_hellman(&a, &b.public_key()).unwrap();
        let ba = ecdh::diffie_hellman(&b, &a.public_key()).unwrap();
        prop_assert_eq!(ab.raw_secret_bytes(), ba.raw_secret_bytes());
    }

    #[test]
    fn self_ecdh_differs(a in secret_key(), b in secret_key()) {
        prop_assume!(a != b && a != b.negate());
        let aa = ecdh::diffie_hellman(&a, &a.public_key()).unwrap();
        let ba = ecdh::diffie_hellman(&a, &b.public_key()).unwrap();
        prop_assert_ne!(aa.raw_secret_bytes(), ba.raw_secret_bytes());
    }
}
