//! # Division and Remainder Families
//!
//! Two rounding conventions per width:
//!
//! | Family | Quotient rounds | Remainder sign |
//! |---|---|---|
//! | `squot` / `srem` | toward zero | dividend (or zero) |
//! | `sdiv` / `smod` | toward negative infinity | divisor (or zero) |
//!
//! plus `udiv` / `umod` over the unsigned view of both operands.
//!
//! The divisor must be nonzero. A zero divisor is not checked here; it hits the
//! host's native integer division, which aborts. `MIN / -1` wraps to `MIN` with
//! a zero remainder.

use crate::arith::{add, sub};
use crate::int::{SizedInt, UnsignedBits};

/// Quotient rounded toward zero
#[inline]
pub fn squot<T: SizedInt>(x: T, y: T) -> T {
    x.truncating_div(y)
}

/// Remainder of [`squot`]; takes the sign of the dividend
#[inline]
pub fn srem<T: SizedInt>(x: T, y: T) -> T {
    x.truncating_rem(y)
}

/// Truncating remainder is nonzero and its sign differs from the divisor's
#[inline]
fn needs_floor_adjust<T: SizedInt>(r: T, y: T) -> bool {
    r != T::ZERO && r.is_negative() != y.is_negative()
}

/// Quotient rounded toward negative infinity
#[inline]
pub fn sdiv<T: SizedInt>(x: T, y: T) -> T {
    let q = squot(x, y);
    let r = srem(x, y);
    if needs_floor_adjust(r, y) {
        sub(q, T::ONE)
    } else {
        q
    }
}

/// Remainder of [`sdiv`]; takes the sign of the divisor
#[inline]
pub fn smod<T: SizedInt>(x: T, y: T) -> T {
    let r = srem(x, y);
    if needs_floor_adjust(r, y) {
        add(r, y)
    } else {
        r
    }
}

/// Unsigned quotient, relabeled as signed
#[inline]
pub fn udiv<T: SizedInt>(x: T, y: T) -> T {
    T::from_unsigned(x.to_unsigned().quotient(y.to_unsigned()))
}

/// Unsigned remainder, relabeled as signed
#[inline]
pub fn umod<T: SizedInt>(x: T, y: T) -> T {
    T::from_unsigned(x.to_unsigned().remainder(y.to_unsigned()))
}
