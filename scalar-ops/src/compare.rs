//! Signed/unsigned comparison, min/max and signum.
//!
//! The `s*` operations read operands as two's-complement; the `u*` operations
//! read the same bit patterns as unsigned. Float `fmin`/`fmax` inherit the
//! host's NaN handling.

use crate::float::SizedFloat;
use crate::int::SizedInt;

#[inline]
pub fn slt<T: SizedInt>(x: T, y: T) -> bool {
    x < y
}

#[inline]
pub fn sle<T: SizedInt>(x: T, y: T) -> bool {
    x <= y
}

#[inline]
pub fn ult<T: SizedInt>(x: T, y: T) -> bool {
    x.to_unsigned() < y.to_unsigned()
}

#[inline]
pub fn ule<T: SizedInt>(x: T, y: T) -> bool {
    x.to_unsigned() <= y.to_unsigned()
}

#[inline]
pub fn smin<T: SizedInt>(x: T, y: T) -> T {
    x.min(y)
}

#[inline]
pub fn smax<T: SizedInt>(x: T, y: T) -> T {
    x.max(y)
}

#[inline]
pub fn umin<T: SizedInt>(x: T, y: T) -> T {
    T::from_unsigned(x.to_unsigned().min(y.to_unsigned()))
}

#[inline]
pub fn umax<T: SizedInt>(x: T, y: T) -> T {
    T::from_unsigned(x.to_unsigned().max(y.to_unsigned()))
}

/// -1, 0 or 1 by the signed reading
#[inline]
pub fn ssignum<T: SizedInt>(x: T) -> T {
    x.sign()
}

/// 0 or 1 by the unsigned reading
#[inline]
pub fn usignum<T: SizedInt>(x: T) -> T {
    if x == T::ZERO {
        T::ZERO
    } else {
        T::ONE
    }
}

#[inline]
pub fn fmin<F: SizedFloat>(x: F, y: F) -> F {
    x.native_min(y)
}

#[inline]
pub fn fmax<F: SizedFloat>(x: F, y: F) -> F {
    x.native_max(y)
}
