//! Arithmetic in GF(2^8) modulo the AES polynomial x^8 + x^4 + x^3 + x + 1.
//!
//! MixColumns and its inverse only ever multiply by the constants
//! 2, 3, 9, 11, 13 and 14, so each has a dedicated helper built from
//! [`xtime`]. [`gmul`] multiplies two arbitrary field elements.

/// Low byte of the reduction polynomial.
pub const REDUCTION: u8 = 0x1b;

/// Multiplies by 2 (`x`) and reduces.
#[inline]
pub const fn xtime(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ REDUCTION
    } else {
        shifted
    }
}

/// Multiplies by 2. Alias for [`xtime`].
#[inline]
pub const fn mul2(byte: u8) -> u8 {
    xtime(byte)
}

/// Multiplies by 3 (`x + 1`).
#[inline]
pub const fn mul3(byte: u8) -> u8 {
    xtime(byte) ^ byte
}

/// Multiplies by 9 (`x^3 + 1`).
#[inline]
pub const fn mul9(byte: u8) -> u8 {
    xtime(xtime(xtime(byte))) ^ byte
}

/// Multiplies by 11 (`x^3 + x + 1`).
#[inline]
pub const fn mul11(byte: u8) -> u8 {
    let x2 = xtime(byte);
    let x8 = xtime(xtime(x2));
    x8 ^ x2 ^ byte
}

/// Multiplies by 13 (`x^3 + x^2 + 1`).
#[inline]
pub const fn mul13(byte: u8) -> u8 {
    let x4 = xtime(xtime(byte));
    let x8 = xtime(x4);
    x8 ^ x4 ^ byte
}

/// Multiplies by 14 (`x^3 + x^2 + x`).
#[inline]
pub const fn mul14(byte: u8) -> u8 {
    let x2 = xtime(byte);
    let x4 = xtime(x2);
    let x8 = xtime(x4);
    x8 ^ x4 ^ x2
}

/// Multiplies two field elements (shift-and-add).
pub const fn gmul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    let mut i = 0;
    while i < 8 {
        if b & 1 != 0 {
            product ^= a;
        }
        a = xtime(a);
        b >>= 1;
        i += 1;
    }
    product
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xtime_matches_fips_example() {
        // FIPS-197 section 4.2.1: {57} * {02} = {ae}, {ae} * {02} = {47}.
        assert_eq!(xtime(0x57), 0xae);
        assert_eq!(xtime(0xae), 0x47);
        assert_eq!(xtime(0x47), 0x8e);
        assert_eq!(xtime(0x8e), 0x07);
        assert_eq!(gmul(0x57, 0x13), 0xfe);
    }

    #[test]
    fn fixed_multipliers_agree_with_gmul() {
        for v in 0..=255u8 {
            assert_eq!(mul2(v), gmul(v, 2), "x2 of {v:#04x}");
            assert_eq!(mul3(v), gmul(v, 3), "x3 of {v:#04x}");
            assert_eq!(mul9(v), gmul(v, 9), "x9 of {v:#04x}");
            assert_eq!(mul11(v), gmul(v, 11), "x11 of {v:#04x}");
            assert_eq!(mul13(v), gmul(v, 13), "x13 of {v:#04x}");
            assert_eq!(mul14(v), gmul(v, 14), "x14 of {v:#04x}");
        }
    }

    #[test]
    fn gmul_is_commutative_with_identity() {
        for a in 0..=255u8 {
            assert_eq!(gmul(a, 1), a);
            assert_eq!(gmul(a, 0), 0);
            for b in [0x02u8, 0x1b, 0x53, 0xca, 0xff] {
                assert_eq!(gmul(a, b), gmul(b, a));
            }
        }
        // {53} and {ca} are inverses.
        assert_eq!(gmul(0x53, 0xca), 0x01);
    }
}
