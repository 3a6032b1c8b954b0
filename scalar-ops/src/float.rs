//! # Sized Floating-Point Values and Math Wrappers
//!
//! The transcendental and predicate wrappers delegate to the host math library
//! at the operand's own precision. No independent numeric algorithm is
//! specified for them: their results are whatever `f32`/`f64` produce.

use std::fmt;

use crate::int::SizedInt;
use crate::width::FloatWidth;

/// An IEEE-754 binary32 or binary64 value
pub trait SizedFloat: Copy + fmt::Debug + fmt::Display + PartialEq + PartialOrd + Default + Send + Sync + 'static {
    /// Signed integer type of the raw bit pattern
    type Bits: SizedInt;

    /// Catalogue width tag
    const WIDTH: FloatWidth;

    /// Nearest representable value of a signed 64-bit integer
    fn from_i64(value: i64) -> Self;

    /// Nearest representable value of an unsigned 64-bit integer
    fn from_u64(value: u64) -> Self;

    /// Native widening/narrowing from binary64
    fn from_f64(value: f64) -> Self;

    /// Exact widening to binary64
    fn to_f64(self) -> f64;

    /// Native float-to-int conversion into the signed 64-bit carrier
    /// (saturating, NaN becomes 0)
    fn to_i64(self) -> i64;

    /// Native float-to-int conversion into the unsigned 64-bit carrier
    /// (saturating, NaN and negatives become 0)
    fn to_u64(self) -> u64;

    /// Raw bit pattern as a signed integer of equal width
    fn to_bits_signed(self) -> Self::Bits;

    /// Float carrying the given raw bit pattern
    fn from_bits_signed(bits: Self::Bits) -> Self;

    fn truncate(self) -> Self;
    fn ln(self) -> Self;
    fn log2(self) -> Self;
    fn log10(self) -> Self;
    fn sqrt(self) -> Self;
    fn exp(self) -> Self;
    fn cos(self) -> Self;
    fn sin(self) -> Self;
    fn tan(self) -> Self;
    fn acos(self) -> Self;
    fn asin(self) -> Self;
    fn atan(self) -> Self;
    fn atan2(self, other: Self) -> Self;
    fn powf(self, exponent: Self) -> Self;

    /// Round to nearest integral value, ties to even
    fn round_even(self) -> Self;

    fn is_nan(self) -> bool;
    fn is_infinite(self) -> bool;

    /// Native minimum; a NaN operand yields the other operand
    fn native_min(self, other: Self) -> Self;

    /// Native maximum; a NaN operand yields the other operand
    fn native_max(self, other: Self) -> Self;
}

macro_rules! sized_float_impl {
    ($t:ty, $bits:ty, $ubits:ty, $width:expr) => {
        impl SizedFloat for $t {
            type Bits = $bits;
            const WIDTH: FloatWidth = $width;

            #[inline(always)]
            fn from_i64(value: i64) -> $t {
                value as $t
            }

            #[inline(always)]
            fn from_u64(value: u64) -> $t {
                value as $t
            }

            #[inline(always)]
            fn from_f64(value: f64) -> $t {
                value as $t
            }

            #[inline(always)]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline(always)]
            fn to_i64(self) -> i64 {
                self as i64
            }

            #[inline(always)]
            fn to_u64(self) -> u64 {
                self as u64
            }

            #[inline(always)]
            fn to_bits_signed(self) -> $bits {
                <$t>::to_bits(self) as $bits
            }

            #[inline(always)]
            fn from_bits_signed(bits: $bits) -> $t {
                <$t>::from_bits(bits as $ubits)
            }

            #[inline(always)]
            fn truncate(self) -> $t {
                <$t>::trunc(self)
            }

            #[inline(always)]
            fn ln(self) -> $t {
                <$t>::ln(self)
            }

            #[inline(always)]
            fn log2(self) -> $t {
                <$t>::log2(self)
            }

            #[inline(always)]
            fn log10(self) -> $t {
                <$t>::log10(self)
            }

            #[inline(always)]
            fn sqrt(self) -> $t {
                <$t>::sqrt(self)
            }

            #[inline(always)]
            fn exp(self) -> $t {
                <$t>::exp(self)
            }

            #[inline(always)]
            fn cos(self) -> $t {
                <$t>::cos(self)
            }

            #[inline(always)]
            fn sin(self) -> $t {
                <$t>::sin(self)
            }

            #[inline(always)]
            fn tan(self) -> $t {
                <$t>::tan(self)
            }

            #[inline(always)]
            fn acos(self) -> $t {
                <$t>::acos(self)
            }

            #[inline(always)]
            fn asin(self) -> $t {
                <$t>::asin(self)
            }

            #[inline(always)]
            fn atan(self) -> $t {
                <$t>::atan(self)
            }

            #[inline(always)]
            fn atan2(self, other: $t) -> $t {
                <$t>::atan2(self, other)
            }

            #[inline(always)]
            fn powf(self, exponent: $t) -> $t {
                <$t>::powf(self, exponent)
            }

            #[inline(always)]
            fn round_even(self) -> $t {
                <$t>::round_ties_even(self)
            }

            #[inline(always)]
            fn is_nan(self) -> bool {
                <$t>::is_nan(self)
            }

            #[inline(always)]
            fn is_infinite(self) -> bool {
                <$t>::is_infinite(self)
            }

            #[inline(always)]
            fn native_min(self, other: $t) -> $t {
                <$t>::min(self, other)
            }

            #[inline(always)]
            fn native_max(self, other: $t) -> $t {
                <$t>::max(self, other)
            }
        }
    };
}

sized_float_impl!(f32, i32, u32, FloatWidth::F32);
sized_float_impl!(f64, i64, u64, FloatWidth::F64);

/// Natural logarithm
#[inline]
pub fn log<F: SizedFloat>(x: F) -> F {
    x.ln()
}

#[inline]
pub fn log2<F: SizedFloat>(x: F) -> F {
    x.log2()
}

#[inline]
pub fn log10<F: SizedFloat>(x: F) -> F {
    x.log10()
}

#[inline]
pub fn sqrt<F: SizedFloat>(x: F) -> F {
    x.sqrt()
}

#[inline]
pub fn exp<F: SizedFloat>(x: F) -> F {
    x.exp()
}

#[inline]
pub fn cos<F: SizedFloat>(x: F) -> F {
    x.cos()
}

#[inline]
pub fn sin<F: SizedFloat>(x: F) -> F {
    x.sin()
}

#[inline]
pub fn tan<F: SizedFloat>(x: F) -> F {
    x.tan()
}

#[inline]
pub fn acos<F: SizedFloat>(x: F) -> F {
    x.acos()
}

#[inline]
pub fn asin<F: SizedFloat>(x: F) -> F {
    x.asin()
}

#[inline]
pub fn atan<F: SizedFloat>(x: F) -> F {
    x.atan()
}

/// Four-quadrant arctangent of `y / x`
#[inline]
pub fn atan2<F: SizedFloat>(y: F, x: F) -> F {
    y.atan2(x)
}

/// `x` raised to the power `y`
#[inline]
pub fn fpow<F: SizedFloat>(x: F, y: F) -> F {
    x.powf(y)
}

/// Round to the nearest integral value; halfway cases go to the even neighbour
#[inline]
pub fn round<F: SizedFloat>(x: F) -> F {
    x.round_even()
}

#[inline]
pub fn isnan<F: SizedFloat>(x: F) -> bool {
    x.is_nan()
}

/// True for positive or negative infinity
#[inline]
pub fn isinf<F: SizedFloat>(x: F) -> bool {
    x.is_infinite()
}
