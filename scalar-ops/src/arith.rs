//! # Wraparound Arithmetic, Bitwise and Shift Operations
//!
//! `add`, `sub` and `mul` run in the unsigned domain of the operand width, so
//! the host's unsigned wraparound performs the reduction modulo 2^w, and the
//! result is relabeled as signed. Overflow is the defined behavior, never an
//! error.
//!
//! Shift amounts are taken as given. Callers pre-mask them to `0..w`; larger
//! amounts are reduced modulo the width by the native wrapping shift.

use crate::int::{SizedInt, UnsignedBits};

/// Sum modulo 2^w
#[inline]
pub fn add<T: SizedInt>(x: T, y: T) -> T {
    T::from_unsigned(x.to_unsigned().wrapping_add(y.to_unsigned()))
}

/// Difference modulo 2^w
#[inline]
pub fn sub<T: SizedInt>(x: T, y: T) -> T {
    T::from_unsigned(x.to_unsigned().wrapping_sub(y.to_unsigned()))
}

/// Product modulo 2^w
#[inline]
pub fn mul<T: SizedInt>(x: T, y: T) -> T {
    T::from_unsigned(x.to_unsigned().wrapping_mul(y.to_unsigned()))
}

/// `x` raised to `y` modulo 2^w. Non-positive exponents yield 1.
pub fn pow<T: SizedInt>(x: T, y: T) -> T {
    if y <= T::ZERO {
        return T::ONE;
    }

    // Square-and-multiply gives the same residue as y repeated products.
    let mut exp = y.to_i64() as u64;
    let mut base = x;
    let mut acc = T::ONE;
    while exp > 0 {
        if exp & 1 == 1 {
            acc = mul(acc, base);
        }
        base = mul(base, base);
        exp >>= 1;
    }
    acc
}

#[inline]
pub fn or<T: SizedInt>(x: T, y: T) -> T {
    x | y
}

#[inline]
pub fn xor<T: SizedInt>(x: T, y: T) -> T {
    x ^ y
}

#[inline]
pub fn and<T: SizedInt>(x: T, y: T) -> T {
    x & y
}

/// Shift left; vacated low bits are zero
#[inline]
pub fn shl<T: SizedInt>(x: T, y: T) -> T {
    x.shift_left(y.shift_amount())
}

/// Arithmetic shift right; vacated high bits copy the sign bit
#[inline]
pub fn ashr<T: SizedInt>(x: T, y: T) -> T {
    x.shift_right_arithmetic(y.shift_amount())
}

/// Logical shift right; vacated high bits are zero regardless of sign
#[inline]
pub fn lshr<T: SizedInt>(x: T, y: T) -> T {
    T::from_unsigned(x.to_unsigned().logical_shr(y.shift_amount()))
}

/// Boolean "less than" with `false < true`
#[inline]
pub fn llt(x: bool, y: bool) -> bool {
    !x && y
}

/// Boolean "less than or equal" with `false < true`
#[inline]
pub fn lle(x: bool, y: bool) -> bool {
    !x || y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_wraps() {
        assert_eq!(add(120i8, 10i8), -126);
        assert_eq!(add(i16::MAX, 1), i16::MIN);
        assert_eq!(add(-1i32, -1), -2);
        assert_eq!(add(i64::MAX, i64::MAX), -2);
    }

    #[test]
    fn test_sub_wraps() {
        assert_eq!(sub(i8::MIN, 1), i8::MAX);
        assert_eq!(sub(0i32, i32::MIN), i32::MIN);
        assert_eq!(sub(10i64, 3), 7);
    }

    #[test]
    fn test_mul_wraps() {
        assert_eq!(mul(16i8, 16), 0);
        assert_eq!(mul(-128i8, -1), -128);
        assert_eq!(mul(0x10000i32, 0x10000), 0);
        assert_eq!(mul(-3i16, 7), -21);
    }

    #[test]
    fn test_pow() {
        assert_eq!(pow(2i32, 10), 1024);
        assert_eq!(pow(2i8, 7), -128);
        assert_eq!(pow(2i8, 8), 0);
        assert_eq!(pow(3i64, 0), 1);
        assert_eq!(pow(5i16, -3), 1);
        assert_eq!(pow(-1i64, i64::MAX), -1);
    }

    #[test]
    fn test_bitwise() {
        assert_eq!(or(0b1100i8, 0b1010), 0b1110);
        assert_eq!(xor(0b1100i16, 0b1010), 0b0110);
        assert_eq!(and(0b1100i32, 0b1010), 0b1000);
        assert_eq!(and(-1i64, 0x55), 0x55);
        assert_eq!(xor(-1i8, 0), -1);
    }

    #[test]
    fn test_shl() {
        assert_eq!(shl(1i8, 7), -128);
        assert_eq!(shl(0x0Fi16, 4), 0xF0);
        assert_eq!(shl(-1i32, 31), i32::MIN);
        assert_eq!(shl(1i64, 63), i64::MIN);
    }

    #[test]
    fn test_ashr_sign_fills() {
        assert_eq!(ashr(-128i8, 7), -1);
        assert_eq!(ashr(-16i32, 2), -4);
        assert_eq!(ashr(16i32, 2), 4);
        assert_eq!(ashr(i64::MIN, 63), -1);
    }

    #[test]
    fn test_lshr_zero_fills() {
        assert_eq!(lshr(-1i32, 1) as u32, 0x7FFF_FFFF);
        assert_eq!(lshr(-128i8, 7), 1);
        assert_eq!(lshr(-1i16, 8), 0xFF);
        assert_eq!(lshr(i64::MIN, 63), 1);
    }

    #[test]
    fn test_shift_by_zero_is_identity() {
        assert_eq!(shl(-77i8, 0), -77);
        assert_eq!(ashr(-77i8, 0), -77);
        assert_eq!(lshr(-77i8, 0), -77);
    }

    #[test]
    fn test_boolean_orderings() {
        assert!(llt(false, true));
        assert!(!llt(true, true));
        assert!(!llt(true, false));
        assert!(!llt(false, false));

        assert!(lle(false, false));
        assert!(lle(false, true));
        assert!(lle(true, true));
        assert!(!lle(true, false));
    }
}
