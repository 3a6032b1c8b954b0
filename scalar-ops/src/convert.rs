//! # Width Conversion, Float/Int Conversion and Bit-Casts
//!
//! ## Integer widths
//!
//! `sext` and `zext` exist for every ordered pair of widths, the identity pair
//! included. Widening is lossless under the signed (`sext`) or unsigned
//! (`zext`) reading of the source; narrowing keeps the low bits.
//!
//! ## Float to integer
//!
//! `fptosi`/`fptoui` truncate toward zero, convert into a 64-bit carrier with
//! the native `as` conversion (saturating at the carrier bounds, NaN becomes
//! 0), then keep the low bits of the target width:
//!
//! ```rust
//! use scalar_ops::convert::fptosi;
//!
//! let narrowed: i8 = fptosi(130.9f64);
//! assert_eq!(narrowed, -126);
//! ```
//!
//! ## Bit-casts
//!
//! `to_bits`/`from_bits` relabel the IEEE-754 pattern as the signed integer of
//! equal width and back. NaN payloads and the sign of zero survive.

use crate::float::SizedFloat;
use crate::int::{SizedInt, UnsignedBits};

/// Replicate the sign bit when widening; keep the low bits when narrowing
#[inline]
pub fn sext<F: SizedInt, T: SizedInt>(x: F) -> T {
    T::from_i64_truncating(x.to_i64())
}

/// Fill with zeros when widening; keep the low bits when narrowing
#[inline]
pub fn zext<F: SizedInt, T: SizedInt>(x: F) -> T {
    T::from_u64_truncating(x.to_unsigned().to_u64())
}

/// Signed integer to float, rounded to nearest
#[inline]
pub fn sitofp<I: SizedInt, F: SizedFloat>(x: I) -> F {
    F::from_i64(x.to_i64())
}

/// Unsigned reading of the integer to float, rounded to nearest
#[inline]
pub fn uitofp<I: SizedInt, F: SizedFloat>(x: I) -> F {
    F::from_u64(x.to_unsigned().to_u64())
}

/// Float to signed integer, truncating toward zero then narrowing
#[inline]
pub fn fptosi<F: SizedFloat, I: SizedInt>(x: F) -> I {
    I::from_i64_truncating(x.truncate().to_i64())
}

/// Float to unsigned integer, truncating toward zero then narrowing.
/// The unsigned pattern is returned in signed representation.
#[inline]
pub fn fptoui<F: SizedFloat, I: SizedInt>(x: F) -> I {
    I::from_u64_truncating(x.truncate().to_u64())
}

/// Convert between float widths (exact when widening, rounded when narrowing)
#[inline]
pub fn fpconv<F: SizedFloat, G: SizedFloat>(x: F) -> G {
    G::from_f64(x.to_f64())
}

/// Raw IEEE-754 bit pattern of `x`
#[inline]
pub fn to_bits<F: SizedFloat>(x: F) -> F::Bits {
    x.to_bits_signed()
}

/// Float carrying the raw IEEE-754 bit pattern `bits`
#[inline]
pub fn from_bits<F: SizedFloat>(bits: F::Bits) -> F {
    F::from_bits_signed(bits)
}
