//! ECDSA/secp256k1 test vectors

use hex_literal::hex;

/// ECDSA test vector with an explicit nonce.
pub struct TestVector {
    /// Secret key
    pub d: [u8; 32],
    /// Public key x-coordinate
    pub q_x: [u8; 32],
    /// Public key y-coordinate
    pub q_y: [u8; 32],
    /// Ephemeral scalar (nonce)
    pub k: [u8; 32],
    /// Message digest (prehashed)
    pub m: [u8; 32],
    /// Signature `r` component
    pub r: [u8; 32],
    /// Signature `s` component
    pub s: [u8; 32],
}

/// ECDSA/secp256k1 test vectors
pub const ECDSA_TEST_VECTORS: &[TestVector] = &[TestVector {
    d: hex!("ebb2c082fd7727890a28ac82f6bdf97bad8de9f5d7c9028692de1a255cad3e0f"),
    q_x: hex!("779dd197a5df977ed2cf6cb31d82d43328b790dc6b3b7d4437a427bd5847dfcd"),
    q_y: hex!("e94b724a555b6d017bb7607c3e3281daf5b1699d6ef4124975c9237b917d426f"),
    k: hex!("49a0d7b786ec9cde0d0721d72804befd06571c974b191efb42ecf322ba9ddd9a"),
    m: hex!("4b688df40bcedbe641ddb16ff0a1842d9c67ea1c3bf63f3e0471baa664531d1a"),
    r: hex!("241097efbf8b63bf145c8961dbdf10c310efbb3b2676bbc0f8b08505c9e2f795"),
    s: hex!("021006b7838609339e8b415a7f9acb1b661828131aef1ecbc7955dfb01f3ca0e"),
}];

/// Deterministic (RFC 6979, HMAC-DRBG-SHA-256) signing test vector.
pub struct Rfc6979TestVector {
    /// Secret key
    pub d: [u8; 32],
    /// Message
    pub msg: &'static [u8],
    /// Extra entropy mixed into the nonce derivation, if any
    pub extra: Option<[u8; 32]>,
    /// Expected compact `r ‖ s` signature (low-s normalized)
    pub sig: [u8; 64],
    /// Expected recovery id
    pub recid: u8,
}

/// RFC 6979 test vectors; messages are hashed with SHA-256.
pub const RFC6979_TEST_VECTORS: &[Rfc6979TestVector] = &[
    Rfc6979TestVector {
        d: hex!("0000000000000000000000000000000000000000000000000000000000000001"),
        msg: b"Satoshi Nakamoto",
        extra: None,
        sig: hex!(
            "934b1ea10a4b3c1757e2b0c017d0b6143ce3c9a7e6a4a49860d7a6ab210ee3d8
             2442ce9d2b916064108014783e923ec36b49743e2ffa1c4496f01a512aafd9e5"
        ),
        recid: 1,
    },
    Rfc6979TestVector {
        d: hex!("0000000000000000000000000000000000000000000000000000000000000001"),
        msg: b"All work and no play makes Jack a dull boy",
        extra: None,
        sig: hex!(
            "5488ad1a26a1314cf6119b89c0218580e1a05ac8e7d0968c75f0c415a5a2494a
             5bd8a49aa1e3354bfee4205972f987afe1d5fca6d16a6681bd7ad601f186dcf5"
        ),
        recid: 1,
    },
];

/// Prehashed signing and recovery test vector.
pub struct RecoveryTestVector {
    /// Secret key
    pub d: [u8; 32],
    /// Message digest
    pub digest: [u8; 32],
    /// Extra entropy mixed into the nonce derivation, if any
    pub extra: Option<[u8; 32]>,
    /// Expected compact `r ‖ s` signature
    pub sig: [u8; 64],
    /// Expected recovery id
    pub recid: u8,
    /// Uncompressed public key without the `0x04` tag
    pub public_key: [u8; 64],
}

/// Prehashed signing and recovery test vectors.
pub const RECOVERY_TEST_VECTORS: &[RecoveryTestVector] = &[
    RecoveryTestVector {
        d: hex!("e815acba8fcf085a0b4141060c13b8017a08da37f2eb1d6a5416adbb621560ef"),
        digest: hex!("c9f1c76685845ea81cac9925a7565887b7771b34b35e641cca85db9fefd0e71f"),
        extra: None,
        sig: hex!(
            "f30554e5747ba9efa51894844256975f02bfeea8e3e0b9d1e037eac04d83b58b
             3553a895b4671ac8802c948a4e4f22cc1f84be17337db267e3ad637bd5ff0d6c"
        ),
        recid: 0,
        public_key: hex!(
            "3a2361270fb1bdd220a2fa0f187cc6f85079043a56fb6a968dfad7d7032b07b0
             1213e80ecd4fb41f1500f94698b1117bc9f3335bde5efbb1330271afc6e85e92"
        ),
    },
    RecoveryTestVector {
        d: hex!("e815acba8fcf085a0b4141060c13b8017a08da37f2eb1d6a5416adbb621560ef"),
        digest: hex!("c9f1c76685845ea81cac9925a7565887b7771b34b35e641cca85db9fefd0e71f"),
        extra: Some([0x01; 32]),
        sig: hex!(
            "5ed056e7e6820ff5b8e0aaac1913ba62923e411bc158bd32b21cb36f1e821b3f
             6878e928a8c44011b25e4b2d59a955e63f77f3ec50fdb0284157b1f7842fddc2"
        ),
        recid: 1,
        public_key: hex!(
            "3a2361270fb1bdd220a2fa0f187cc6f85079043a56fb6a968dfad7d7032b07b0
             1213e80ecd4fb41f1500f94698b1117bc9f3335bde5efbb1330271afc6e85e92"
        ),
    },
];

/// Recoverable signatures over SHA-256(`"example message"`), as
/// `(compressed public key, r ‖ s ‖ recovery id)`.
pub const RECOVERABLE_SIGNATURES: &[([u8; 33], [u8; 65])] = &[
    (
        hex!("021a7a569e91dbf60581509c7fc946d1003b60c7dee85299538db6353538d59574"),
        hex!(
            "ce53abb3721bafc561408ce8ff99c909f7f0b18a2f788649d6470162ab1aa032
             3971edc523a6d6453f3fb6128d318d9db1a5ff3386feb1047d9816e780039d52
             00"
        ),
    ),
    (
        hex!("036d6caac248af96f6afa7f904f550253a0f3ef3f5aa2fe6838a95b216691468e2"),
        hex!(
            "46c05b6368a44b8810d79859441d819b8e7cdc8bfd371e35c53196f4bcacdb51
             35c7facce2a97b95eacba8a586d87b7958aaf8368ab29cee481f76e871dbd9cb
             01"
        ),
    ),
];
