//! Limb-level helpers shared by the field and scalar implementations.

#[cfg(test)]
use num_bigint::BigUint;

/// Computes `a + b + carry`, returning the result along with the new carry (0 or 1).
#[inline(always)]
pub(crate) const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + (b as u128) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

/// Computes `a - (b + borrow)`, returning the result along with the new borrow (0 or 1).
#[inline(always)]
pub(crate) const fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let ret = (a as u128).wrapping_sub((b as u128) + (borrow as u128));
    (ret as u64, (ret >> 127) as u64)
}

/// Computes `a + (b * c) + carry`, returning the result along with the new carry.
#[inline(always)]
pub(crate) const fn mac(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + ((b as u128) * (c as u128)) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

/// Full 256x256 -> 512-bit schoolbook product of little-endian limbs.
#[inline]
pub(crate) const fn mul_wide(a: &[u64; 4], b: &[u64; 4]) -> [u64; 8] {
    let mut w = [0u64; 8];
    let mut i = 0;
    while i < 4 {
        let mut carry = 0;
        let mut j = 0;
        while j < 4 {
            let (lo, hi) = mac(w[i + j], a[i], b[j], carry);
            w[i + j] = lo;
            carry = hi;
            j += 1;
        }
        w[i + 4] = carry;
        i += 1;
    }
    w
}

/// Parses 32 big-endian bytes into little-endian 64-bit limbs.
#[inline]
pub(crate) const fn limbs_from_be_bytes(bytes: &[u8; 32]) -> [u64; 4] {
    let mut limbs = [0u64; 4];
    let mut i = 0;
    while i < 4 {
        let mut limb = 0u64;
        let mut j = 0;
        while j < 8 {
            limb = (limb << 8) | bytes[(3 - i) * 8 + j] as u64;
            j += 1;
        }
        limbs[i] = limb;
        i += 1;
    }
    limbs
}

/// Serializes little-endian 64-bit limbs as 32 big-endian bytes.
#[inline]
pub(crate) fn limbs_to_be_bytes(limbs: &[u64; 4]) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    for (chunk, limb) in bytes.chunks_exact_mut(8).zip(limbs.iter().rev()) {
        chunk.copy_from_slice(&limb.to_be_bytes());
    }
    bytes
}

/// Returns `a - b` over four limbs together with the final borrow (0 or 1).
#[inline(always)]
pub(crate) const fn sub_limbs(a: &[u64; 4], b: &[u64; 4]) -> ([u64; 4], u64) {
    let (w0, borrow) = sbb(a[0], b[0], 0);
    let (w1, borrow) = sbb(a[1], b[1], borrow);
    let (w2, borrow) = sbb(a[2], b[2], borrow);
    let (w3, borrow) = sbb(a[3], b[3], borrow);
    ([w0, w1, w2, w3], borrow)
}

/// Returns `a + b` over four limbs together with the final carry (0 or 1).
#[inline(always)]
pub(crate) const fn add_limbs(a: &[u64; 4], b: &[u64; 4]) -> ([u64; 4], u64) {
    let (w0, carry) = adc(a[0], b[0], 0);
    let (w1, carry) = adc(a[1], b[1], carry);
    let (w2, carry) = adc(a[2], b[2], carry);
    let (w3, carry) = adc(a[3], b[3], carry);
    ([w0, w1, w2, w3], carry)
}

/// Converts a byte array (big-endian) to BigUint.
#[cfg(test)]
pub(crate) fn bytes_to_biguint(bytes: &[u8; 32]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// Converts a BigUint below 2^256 to a byte array (big-endian).
#[cfg(test)]
pub(crate) fn biguint_to_bytes(x: &BigUint) -> [u8; 32] {
    let be = x.to_bytes_be();
    assert!(be.len() <= 32, "value exceeds 256 bits");
    let mut bytes = [0u8; 32];
    bytes[32 - be.len()..].copy_from_slice(&be);
    bytes
}

#[cfg(test)]
mod tests {
    use super::{adc, limbs_from_be_bytes, limbs_to_be_bytes, mul_wide, sbb};
    use hex_literal::hex;

    #[test]
    fn carries_and_borrows() {
        assert_eq!(adc(u64::MAX, 1, 0), (0, 1));
        assert_eq!(adc(u64::MAX, u64::MAX, 1), (u64::MAX, 1));
        assert_eq!(sbb(0, 1, 0), (u64::MAX, 1));
        assert_eq!(sbb(5, 3, 1), (1, 0));
    }

    #[test]
    fn limb_byte_order() {
        let bytes = hex!("0102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f20");
        let limbs = limbs_from_be_bytes(&bytes);
        assert_eq!(limbs[0], 0x191a_1b1c_1d1e_1f20);
        assert_eq!(limbs[3], 0x0102_0304_0506_0708);
        assert_eq!(limbs_to_be_bytes(&limbs), bytes);
    }

    #[test]
    fn wide_product_of_max_values() {
        // (2^256 - 1)^2 = 2^512 - 2^257 + 1
        let max = [u64::MAX; 4];
        assert_eq!(
            mul_wide(&max, &max),
            [1, 0, 0, 0, u64::MAX - 1, u64::MAX, u64::MAX, u64::MAX]
        );
    }
}
