//! # Scalar Primitive Catalogue
//!
//! Width-exact integer and floating-point operations with one normalized
//! contract, independent of what the host's native operators do.
//!
//! ## Key Features
//! - Integers of 8, 16, 32 and 64 bits, carried in signed representation
//! - Wraparound `add`/`sub`/`mul`: results reduced modulo 2^w, never trapped
//! - Truncating (`squot`/`srem`) and floor-style (`sdiv`/`smod`) division
//! - Unsigned division, comparison and min/max over the same bit patterns
//! - Sign/zero extension and truncation between every pair of widths
//! - Float/int conversion and IEEE-754 bit-pattern round-tripping
//! - Transcendental wrappers at matching precision
//!
//! Every operation is a pure function. Division and modulo by zero are an
//! unchecked precondition: the caller guards the divisor.
//!
//! ## Example
//!
//! ```rust
//! use scalar_ops::{arith, division, catalogue};
//!
//! assert_eq!(arith::add(120i8, 10i8), -126);
//! assert_eq!(division::sdiv(-7i32, 2), -4);
//! assert_eq!(catalogue::smod32(-7, 2), 1);
//! ```

pub mod width;
pub mod error;
pub mod int;
pub mod arith;
pub mod division;
pub mod convert;
pub mod compare;
pub mod float;
pub mod catalogue;

pub use width::{IntWidth, FloatWidth};
pub use error::{ParseError, Result};
pub use int::{signed, unsigned, SizedInt, UnsignedBits};
pub use float::SizedFloat;
