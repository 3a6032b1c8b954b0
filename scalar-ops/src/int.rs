//! # Sized Integer Values
//!
//! Integers of every catalogue width are carried in their signed
//! two's-complement representation (`i8`..`i64`). The unsigned view of the
//! same bit pattern (`u8`..`u64`) is reached through [`SizedInt::to_unsigned`]
//! and back through [`SizedInt::from_unsigned`]; both are pure relabelings and
//! never change a bit.
//!
//! ```rust
//! use scalar_ops::{signed, unsigned};
//!
//! assert_eq!(unsigned(-1i16), 0xFFFF);
//! assert_eq!(signed(0x80u8), i8::MIN);
//! ```

use std::fmt;
use std::hash::Hash;
use std::ops::{BitAnd, BitOr, BitXor, Not};

use crate::width::IntWidth;

/// Unsigned view of a sized integer bit pattern
pub trait UnsignedBits: Copy + fmt::Debug + fmt::Display + Eq + Ord + Hash + Default {
    /// Signed type sharing this bit pattern
    type Signed: SizedInt;

    /// Width in bits
    const BITS: u32;

    /// Reinterpret as the signed type of the same width
    fn to_signed(self) -> Self::Signed;

    /// Addition modulo 2^BITS
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Subtraction modulo 2^BITS
    fn wrapping_sub(self, rhs: Self) -> Self;

    /// Multiplication modulo 2^BITS
    fn wrapping_mul(self, rhs: Self) -> Self;

    /// Native unsigned division. `rhs` must be nonzero.
    fn quotient(self, rhs: Self) -> Self;

    /// Native unsigned remainder. `rhs` must be nonzero.
    fn remainder(self, rhs: Self) -> Self;

    /// Logical shift right; vacated high bits are zero
    fn logical_shr(self, amount: u32) -> Self;

    /// Zero-extend into a 64-bit carrier
    fn to_u64(self) -> u64;
}

/// A width-`BITS` integer in signed two's-complement representation
pub trait SizedInt:
    Copy
    + fmt::Debug
    + fmt::Display
    + Eq
    + Ord
    + Hash
    + Default
    + Send
    + Sync
    + 'static
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
{
    /// Unsigned type sharing this bit pattern
    type Unsigned: UnsignedBits<Signed = Self>;

    /// Width in bits
    const BITS: u32;

    /// Catalogue width tag
    const WIDTH: IntWidth;

    const ZERO: Self;
    const ONE: Self;

    /// Reinterpret as unsigned (bit-preserving)
    fn to_unsigned(self) -> Self::Unsigned;

    /// Reinterpret an unsigned pattern as signed (bit-preserving)
    fn from_unsigned(bits: Self::Unsigned) -> Self;

    /// Sign-extend into a 64-bit carrier
    fn to_i64(self) -> i64;

    /// Keep the low `BITS` bits of a signed 64-bit carrier
    fn from_i64_truncating(value: i64) -> Self;

    /// Keep the low `BITS` bits of an unsigned 64-bit carrier
    fn from_u64_truncating(value: u64) -> Self;

    /// Quotient rounded toward zero; `MIN / -1` wraps to `MIN`.
    /// `rhs` must be nonzero.
    fn truncating_div(self, rhs: Self) -> Self;

    /// Remainder with the sign of the dividend; `MIN % -1` is zero.
    /// `rhs` must be nonzero.
    fn truncating_rem(self, rhs: Self) -> Self;

    /// Native left shift, amount reduced modulo `BITS`
    fn shift_left(self, amount: u32) -> Self;

    /// Native arithmetic (sign-filling) right shift, amount reduced modulo `BITS`
    fn shift_right_arithmetic(self, amount: u32) -> Self;

    /// Mathematical sign: -1, 0 or 1
    fn sign(self) -> Self;

    /// Shift amount carried by this value, read as unsigned
    #[inline]
    fn shift_amount(self) -> u32 {
        self.to_unsigned().to_u64() as u32
    }

    /// Whether the sign bit is set
    #[inline]
    fn is_negative(self) -> bool {
        self < Self::ZERO
    }
}

macro_rules! sized_int_impl {
    ($s:ty, $u:ty, $width:expr) => {
        impl UnsignedBits for $u {
            type Signed = $s;
            const BITS: u32 = <$u>::BITS;

            #[inline(always)]
            fn to_signed(self) -> $s {
                self as $s
            }

            #[inline(always)]
            fn wrapping_add(self, rhs: $u) -> $u {
                <$u>::wrapping_add(self, rhs)
            }

            #[inline(always)]
            fn wrapping_sub(self, rhs: $u) -> $u {
                <$u>::wrapping_sub(self, rhs)
            }

            #[inline(always)]
            fn wrapping_mul(self, rhs: $u) -> $u {
                <$u>::wrapping_mul(self, rhs)
            }

            #[inline(always)]
            fn quotient(self, rhs: $u) -> $u {
                self / rhs
            }

            #[inline(always)]
            fn remainder(self, rhs: $u) -> $u {
                self % rhs
            }

            #[inline(always)]
            fn logical_shr(self, amount: u32) -> $u {
                <$u>::wrapping_shr(self, amount)
            }

            #[inline(always)]
            fn to_u64(self) -> u64 {
                self as u64
            }
        }

        impl SizedInt for $s {
            type Unsigned = $u;
            const BITS: u32 = <$s>::BITS;
            const WIDTH: IntWidth = $width;
            const ZERO: $s = 0;
            const ONE: $s = 1;

            #[inline(always)]
            fn to_unsigned(self) -> $u {
                self as $u
            }

            #[inline(always)]
            fn from_unsigned(bits: $u) -> $s {
                bits as $s
            }

            #[inline(always)]
            fn to_i64(self) -> i64 {
                self as i64
            }

            #[inline(always)]
            fn from_i64_truncating(value: i64) -> $s {
                value as $s
            }

            #[inline(always)]
            fn from_u64_truncating(value: u64) -> $s {
                value as $s
            }

            #[inline(always)]
            fn truncating_div(self, rhs: $s) -> $s {
                <$s>::wrapping_div(self, rhs)
            }

            #[inline(always)]
            fn truncating_rem(self, rhs: $s) -> $s {
                <$s>::wrapping_rem(self, rhs)
            }

            #[inline(always)]
            fn shift_left(self, amount: u32) -> $s {
                <$s>::wrapping_shl(self, amount)
            }

            #[inline(always)]
            fn shift_right_arithmetic(self, amount: u32) -> $s {
                <$s>::wrapping_shr(self, amount)
            }

            #[inline(always)]
            fn sign(self) -> $s {
                <$s>::signum(self)
            }
        }
    };
}

sized_int_impl!(i8, u8, IntWidth::W8);
sized_int_impl!(i16, u16, IntWidth::W16);
sized_int_impl!(i32, u32, IntWidth::W32);
sized_int_impl!(i64, u64, IntWidth::W64);

/// Unsigned view of a signed bit pattern
#[inline]
pub fn unsigned<T: SizedInt>(x: T) -> T::Unsigned {
    x.to_unsigned()
}

/// Signed view of an unsigned bit pattern
#[inline]
pub fn signed<U: UnsignedBits>(x: U) -> U::Signed {
    x.to_signed()
}
