//! Group arithmetic test vectors

use hex_literal::hex;

/// `k * G` for `k = 1..=20`, as affine `(x, y)`.
pub const ADD_TEST_VECTORS: &[([u8; 32], [u8; 32])] = &[
    (
        hex!("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"),
        hex!("483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"),
    ),
    (
        hex!("c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5"),
        hex!("1ae168fea63dc339a3c58419466ceaeef7f632653266d0e1236431a950cfe52a"),
    ),
    (
        hex!("f9308a019258c31049344f85f89d5229b531c845836f99b08601f113bce036f9"),
        hex!("388f7b0f632de8140fe337e62a37f3566500a99934c2231b6cb9fd7584b8e672"),
    ),
    (
        hex!("e493dbf1c10d80f3581e4904930b1404cc6c13900ee0758474fa94abe8c4cd13"),
        hex!("51ed993ea0d455b75642e2098ea51448d967ae33bfbdfe40cfe97bdc47739922"),
    ),
    (
        hex!("2f8bde4d1a07209355b4a7250a5c5128e88b84bddc619ab7cba8d569b240efe4"),
        hex!("d8ac222636e5e3d6d4dba9dda6c9c426f788271bab0d6840dca87d3aa6ac62d6"),
    ),
    (
        hex!("fff97bd5755eeea420453a14355235d382f6472f8568a18b2f057a1460297556"),
        hex!("ae12777aacfbb620f3be96017f45c560de80f0f6518fe4a03c870c36b075f297"),
    ),
    (
        hex!("5cbdf0646e5db4eaa398f365f2ea7a0e3d419b7e0330e39ce92bddedcac4f9bc"),
        hex!("6aebca40ba255960a3178d6d861a54dba813d0b813fde7b5a5082628087264da"),
    ),
    (
        hex!("2f01e5e15cca351daff3843fb70f3c2f0a1bdd05e5af888a67784ef3e10a2a01"),
        hex!("5c4da8a741539949293d082a132d13b4c2e213d6ba5b7617b5da2cb76cbde904"),
    ),
    (
        hex!("acd484e2f0c7f65309ad178a9f559abde09796974c57e714c35f110dfc27ccbe"),
        hex!("cc338921b0a7d9fd64380971763b61e9add888a4375f8e0f05cc262ac64f9c37"),
    ),
    (
        hex!("a0434d9e47f3c86235477c7b1ae6ae5d3442d49b1943c2b752a68e2a47e247c7"),
        hex!("893aba425419bc27a3b6c7e693a24c696f794c2ed877a1593cbee53b037368d7"),
    ),
    (
        hex!("774ae7f858a9411e5ef4246b70c65aac5649980be5c17891bbec17895da008cb"),
        hex!("d984a032eb6b5e190243dd56d7b7b365372db1e2dff9d6a8301d74c9c953c61b"),
    ),
    (
        hex!("d01115d548e7561b15c38f004d734633687cf4419620095bc5b0f47070afe85a"),
        hex!("a9f34ffdc815e0d7a8b64537e17bd81579238c5dd9a86d526b051b13f4062327"),
    ),
    (
        hex!("f28773c2d975288bc7d1d205c3748651b075fbc6610e58cddeeddf8f19405aa8"),
        hex!("0ab0902e8d880a89758212eb65cdaf473a1a06da521fa91f29b5cb52db03ed81"),
    ),
    (
        hex!("499fdf9e895e719cfd64e67f07d38e3226aa7b63678949e6e49b241a60e823e4"),
        hex!("cac2f6c4b54e855190f044e4a7b3d464464279c27a3f95bcc65f40d403a13f5b"),
    ),
    (
        hex!("d7924d4f7d43ea965a465ae3095ff41131e5946f3c85f79e44adbcf8e27e080e"),
        hex!("581e2872a86c72a683842ec228cc6defea40af2bd896d3a5c504dc9ff6a26b58"),
    ),
    (
        hex!("e60fce93b59e9ec53011aabc21c23e97b2a31369b87a5ae9c44ee89e2a6dec0a"),
        hex!("f7e3507399e595929db99f34f57937101296891e44d23f0be1f32cce69616821"),
    ),
    (
        hex!("defdea4cdb677750a420fee807eacf21eb9898ae79b9768766e4faa04a2d4a34"),
        hex!("4211ab0694635168e997b0ead2a93daeced1f4a04a95c0f6cfb199f69e56eb77"),
    ),
    (
        hex!("5601570cb47f238d2b0286db4a990fa0f3ba28d1a319f5e7cf55c2a2444da7cc"),
        hex!("c136c1dc0cbeb930e9e298043589351d81d8e0bc736ae2a1f5192e5e8b061d58"),
    ),
    (
        hex!("2b4ea0a797a443d293ef5cff444f4979f06acfebd7e86d277475656138385b6c"),
        hex!("85e89bc037945d93b343083b5a1c86131a01f60c50269763b570c854e5c09b7a"),
    ),
    (
        hex!("4ce119c96e2fa357200b559b2f7dd5a5f02d5290aff74b03f3e471b273211c97"),
        hex!("12ba26dcb10ec1625da61fa10a844c676162948271d96967450288ee9233dc3a"),
    ),
];

/// `k * G` for assorted scalars `k`, as `(k, x, y)`.
pub const MUL_TEST_VECTORS: &[([u8; 32], [u8; 32], [u8; 32])] = &[
    (
        hex!("aa5e28d6a97a2479a65527f7290311a3624d4cc0fa1578598ee3c2613bf99522"),
        hex!("34f9460f0e4f08393d192b3c5133a6ba099aa0ad9fd54ebccfacdfa239ff49c6"),
        hex!("0b71ea9bd730fd8923f6d25a7a91e7dd7728a960686cb5a901bb419e0f2ca232"),
    ),
    (
        hex!("7e2b897b8cebc6361663ad410835639826d590f393d90a9538881735256dfae3"),
        hex!("d74bf844b0862475103d96a611cf2d898447e288d34b360bc885cb8ce7c00575"),
        hex!("131c670d414c4546b88ac3ff664611b1c38ceb1c21d76369d7a7a0969d61d97d"),
    ),
    (
        hex!("6461e6df0fe7dfd05329f41bf771b86578143d4dd1f7866fb4ca7e97c5fa945d"),
        hex!("e8aecc370aedd953483719a116711963ce201ac3eb21d3f3257bb48668c6a72f"),
        hex!("c25caf2f0eba1ddb2f0f3f47866299ef907867b7d27e95b3873bf98397b24ee1"),
    ),
    (
        hex!("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364140"),
        hex!("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"),
        hex!("b7c52588d95c3b9aa25b0403f1eef75702e84bb7597aabe663b82f6f04ef2777"),
    ),
    (
        hex!("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd036413f"),
        hex!("c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5"),
        hex!("e51e970159c23cc65c3a7be6b99315110809cd9acd992f1edc9bce55af301705"),
    ),
    (
        hex!("7fffffffffffffffffffffffffffffff5d576e7357a4501ddfe92f46681b20a0"),
        hex!("00000000000000000000003b78ce563f89a0ed9414f5aa28ad0d96d6795f9c63"),
        hex!("3f3979bf72ae8202983dc989aec7f2ff2ed91bdd69ce02fc0700ca100e59ddf3"),
    ),
    (
        hex!("7fffffffffffffffffffffffffffffff5d576e7357a4501ddfe92f46681b20a1"),
        hex!("00000000000000000000003b78ce563f89a0ed9414f5aa28ad0d96d6795f9c63"),
        hex!("c0c686408d517dfd67c2367651380d00d126e4229631fd03f8ff35eef1a61e3c"),
    ),
    (
        hex!("0000000000000000000000000000000100000000000000000000000000000001"),
        hex!("8b300e513eff872cdaa6d12df54a3e332f27ce937be77e3e63c5e885114cbf09"),
        hex!("1cec30677f43c0cc446f0d466b8238ea08f6a7aa9aaf716926c6ff28b3b10a39"),
    ),
];

/// Generator multiplication test vector.
pub struct MulBaseTestVector {
    /// Scalar
    pub k: [u8; 32],
    /// Affine x-coordinate of `k * G`
    pub x: [u8; 32],
    /// Affine y-coordinate of `k * G`
    pub y: [u8; 32],
}

/// `k * G` for scalars touching every window of the generator table.
pub const MUL_BASE_TEST_VECTORS: &[MulBaseTestVector] = &[
    MulBaseTestVector {
        k: hex!("0000000000000000000000000000000000000000000000000000000000000001"),
        x: hex!("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"),
        y: hex!("483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"),
    },
    MulBaseTestVector {
        k: hex!("0000000000000000000000000000000000000000000000000000000000000002"),
        x: hex!("c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5"),
        y: hex!("1ae168fea63dc339a3c58419466ceaeef7f632653266d0e1236431a950cfe52a"),
    },
    MulBaseTestVector {
        k: hex!("000000000000000000000000000000000000000000000000000000000000000f"),
        x: hex!("d7924d4f7d43ea965a465ae3095ff41131e5946f3c85f79e44adbcf8e27e080e"),
        y: hex!("581e2872a86c72a683842ec228cc6defea40af2bd896d3a5c504dc9ff6a26b58"),
    },
    MulBaseTestVector {
        k: hex!("0000000000000000000000000000000000000000000000000000000000000010"),
        x: hex!("e60fce93b59e9ec53011aabc21c23e97b2a31369b87a5ae9c44ee89e2a6dec0a"),
        y: hex!("f7e3507399e595929db99f34f57937101296891e44d23f0be1f32cce69616821"),
    },
    MulBaseTestVector {
        k: hex!("0000000000000000000000000000000000000000000000000000000000000011"),
        x: hex!("defdea4cdb677750a420fee807eacf21eb9898ae79b9768766e4faa04a2d4a34"),
        y: hex!("4211ab0694635168e997b0ead2a93daeced1f4a04a95c0f6cfb199f69e56eb77"),
    },
    MulBaseTestVector {
        k: hex!("8000000000000000000000000000000000000000000000000000000000000000"),
        x: hex!("b23790a42be63e1b251ad6c94fdef07271ec0aada31db6c3e8bd32043f8be384"),
        y: hex!("fc6b694919d55edbe8d50f88aa81f94517f004f4149ecb58d10a473deb19880e"),
    },
    MulBaseTestVector {
        k: hex!("8000000000000000000000000000000000000000000000000000000000000000"),
        x: hex!("b23790a42be63e1b251ad6c94fdef07271ec0aada31db6c3e8bd32043f8be384"),
        y: hex!("fc6b694919d55edbe8d50f88aa81f94517f004f4149ecb58d10a473deb19880e"),
    },
    MulBaseTestVector {
        k: hex!("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364140"),
        x: hex!("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"),
        y: hex!("b7c52588d95c3b9aa25b0403f1eef75702e84bb7597aabe663b82f6f04ef2777"),
    },
    MulBaseTestVector {
        k: hex!("750b79840a35e888cea8684b60033cd65db233956ea88f4b4f72fd3f7d254db9"),
        x: hex!("aeee6fa56d9117ea1ed6380b85259a1a47fd32d6a6c1dae1c9a7e4f7673883c2"),
        y: hex!("4249f2466cf01e603e6ea360a004343db643aaecd52c9ac38d71665808843fda"),
    },
    MulBaseTestVector {
        k: hex!("aacdabbb49c9c6072c54a01283037cadfde8ec5e3e1544596ebbec4cc598e828"),
        x: hex!("d50d5d95a8775e9df10cae4255479398d5f1bce9d94b5d93e3d88edf9869df1a"),
        y: hex!("805b09e4d6ba75d1f5a1d98dbdfda053f9f75204ed8b06775850d23e3e7574f7"),
    },
    MulBaseTestVector {
        k: hex!("d2aeeaf914c7d3fd9a1ac067541b8ee6f0969fe15284b2bf8e56916a518a4445"),
        x: hex!("58ff09ccb8f7b8d579e405fc75621b1a143869c285637aafafd9917702253222"),
        y: hex!("3c5db3b60a7a3df00a45bddfe598cf42db3e74d251cf4def6341213cf82cd38a"),
    },
    MulBaseTestVector {
        k: hex!("f09b30460cce5b3445fff12fb4d7a20d294b97d08e7981664997082c8b7e20c0"),
        x: hex!("f72701450721e345ebfc991943564ce87da0f95ef7c0173a3b46f62b025cd2af"),
        y: hex!("968ea73128f0d028e6780a298c2254d56f904fce9ac79045e359acbfed825cdf"),
    },
    MulBaseTestVector {
        k: hex!("fde9c7e9675be2b6da6f2974beeb65d108c25300fecf0c9277eeb71d894a472c"),
        x: hex!("d60ed2eb97586fe6e73cd1580647cf06497347946826b59aece2b888d9bc3528"),
        y: hex!("b6553fbccd762e2415a722e73cb3844dd1479bb492ce9581e59063be3b5182fe"),
    },
    MulBaseTestVector {
        k: hex!("d7a7836fcaf25f54c66f555c240a97759009eb69b50f9ca5376f3052c49915f6"),
        x: hex!("0ef933526ba876eed10c162df9784ec495cb6e39346163aa1d362986d35b2352"),
        y: hex!("2a8cf90fdec48f1cd29baa257f59ba36bee30f01532787449e7f9f19e1da8993"),
    },
];
