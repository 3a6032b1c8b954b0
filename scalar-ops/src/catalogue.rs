//! # Width-Named Catalogue
//!
//! Concrete instantiations of the generic operation families, one function per
//! width (or width pair), named the way generated code refers to them:
//! `add8`, `sdiv32`, `sext_i8_i64`, `fptosi_f64_i8`, `log2_32`, `to_bits64`.
//!
//! Integer operands and results are in signed representation throughout,
//! including the unsigned families (`udiv`, `umin`, `zext`, `fptoui`).

use crate::{arith, compare, convert, division, float};

macro_rules! int_binary {
    ($op:path => $($name:ident: $t:ty),* $(,)?) => {
        $(
            #[inline]
            pub fn $name(x: $t, y: $t) -> $t {
                $op(x, y)
            }
        )*
    };
}

macro_rules! int_predicate {
    ($op:path => $($name:ident: $t:ty),* $(,)?) => {
        $(
            #[inline]
            pub fn $name(x: $t, y: $t) -> bool {
                $op(x, y)
            }
        )*
    };
}

macro_rules! int_unary {
    ($op:path => $($name:ident: $t:ty),* $(,)?) => {
        $(
            #[inline]
            pub fn $name(x: $t) -> $t {
                $op(x)
            }
        )*
    };
}

macro_rules! conversion {
    ($op:path => $($name:ident: $from:ty => $to:ty),* $(,)?) => {
        $(
            #[inline]
            pub fn $name(x: $from) -> $to {
                $op(x)
            }
        )*
    };
}

macro_rules! float_unary {
    ($op:path => $($name:ident: $t:ty),* $(,)?) => {
        $(
            #[inline]
            pub fn $name(x: $t) -> $t {
                $op(x)
            }
        )*
    };
}

macro_rules! float_binary {
    ($op:path => $($name:ident: $t:ty),* $(,)?) => {
        $(
            #[inline]
            pub fn $name(x: $t, y: $t) -> $t {
                $op(x, y)
            }
        )*
    };
}

macro_rules! float_predicate {
    ($op:path => $($name:ident: $t:ty),* $(,)?) => {
        $(
            #[inline]
            pub fn $name(x: $t) -> bool {
                $op(x)
            }
        )*
    };
}

// ============================================================================
// Wraparound arithmetic
// ============================================================================

int_binary!(arith::add => add8: i8, add16: i16, add32: i32, add64: i64);
int_binary!(arith::sub => sub8: i8, sub16: i16, sub32: i32, sub64: i64);
int_binary!(arith::mul => mul8: i8, mul16: i16, mul32: i32, mul64: i64);
int_binary!(arith::pow => pow8: i8, pow16: i16, pow32: i32, pow64: i64);

// ============================================================================
// Bitwise and shift
// ============================================================================

int_binary!(arith::or => or8: i8, or16: i16, or32: i32, or64: i64);
int_binary!(arith::xor => xor8: i8, xor16: i16, xor32: i32, xor64: i64);
int_binary!(arith::and => and8: i8, and16: i16, and32: i32, and64: i64);
int_binary!(arith::shl => shl8: i8, shl16: i16, shl32: i32, shl64: i64);
int_binary!(arith::ashr => ashr8: i8, ashr16: i16, ashr32: i32, ashr64: i64);
int_binary!(arith::lshr => lshr8: i8, lshr16: i16, lshr32: i32, lshr64: i64);

#[inline]
pub fn llt(x: bool, y: bool) -> bool {
    arith::llt(x, y)
}

#[inline]
pub fn lle(x: bool, y: bool) -> bool {
    arith::lle(x, y)
}

// ============================================================================
// Division and remainder
// ============================================================================

int_binary!(division::squot => squot8: i8, squot16: i16, squot32: i32, squot64: i64);
int_binary!(division::srem => srem8: i8, srem16: i16, srem32: i32, srem64: i64);
int_binary!(division::sdiv => sdiv8: i8, sdiv16: i16, sdiv32: i32, sdiv64: i64);
int_binary!(division::smod => smod8: i8, smod16: i16, smod32: i32, smod64: i64);
int_binary!(division::udiv => udiv8: i8, udiv16: i16, udiv32: i32, udiv64: i64);
int_binary!(division::umod => umod8: i8, umod16: i16, umod32: i32, umod64: i64);

// ============================================================================
// Comparison, min/max, signum
// ============================================================================

int_predicate!(compare::slt => slt8: i8, slt16: i16, slt32: i32, slt64: i64);
int_predicate!(compare::sle => sle8: i8, sle16: i16, sle32: i32, sle64: i64);
int_predicate!(compare::ult => ult8: i8, ult16: i16, ult32: i32, ult64: i64);
int_predicate!(compare::ule => ule8: i8, ule16: i16, ule32: i32, ule64: i64);

int_binary!(compare::smin => smin8: i8, smin16: i16, smin32: i32, smin64: i64);
int_binary!(compare::smax => smax8: i8, smax16: i16, smax32: i32, smax64: i64);
int_binary!(compare::umin => umin8: i8, umin16: i16, umin32: i32, umin64: i64);
int_binary!(compare::umax => umax8: i8, umax16: i16, umax32: i32, umax64: i64);

int_unary!(compare::ssignum => ssignum8: i8, ssignum16: i16, ssignum32: i32, ssignum64: i64);
int_unary!(compare::usignum => usignum8: i8, usignum16: i16, usignum32: i32, usignum64: i64);

float_binary!(compare::fmin => fmin32: f32, fmin64: f64);
float_binary!(compare::fmax => fmax32: f32, fmax64: f64);

// ============================================================================
// Sign/zero extension and truncation
// ============================================================================

conversion!(convert::sext =>
    sext_i8_i8: i8 => i8, sext_i8_i16: i8 => i16, sext_i8_i32: i8 => i32, sext_i8_i64: i8 => i64,
    sext_i16_i8: i16 => i8, sext_i16_i16: i16 => i16, sext_i16_i32: i16 => i32, sext_i16_i64: i16 => i64,
    sext_i32_i8: i32 => i8, sext_i32_i16: i32 => i16, sext_i32_i32: i32 => i32, sext_i32_i64: i32 => i64,
    sext_i64_i8: i64 => i8, sext_i64_i16: i64 => i16, sext_i64_i32: i64 => i32, sext_i64_i64: i64 => i64,
);

conversion!(convert::zext =>
    zext_i8_i8: i8 => i8, zext_i8_i16: i8 => i16, zext_i8_i32: i8 => i32, zext_i8_i64: i8 => i64,
    zext_i16_i8: i16 => i8, zext_i16_i16: i16 => i16, zext_i16_i32: i16 => i32, zext_i16_i64: i16 => i64,
    zext_i32_i8: i32 => i8, zext_i32_i16: i32 => i16, zext_i32_i32: i32 => i32, zext_i32_i64: i32 => i64,
    zext_i64_i8: i64 => i8, zext_i64_i16: i64 => i16, zext_i64_i32: i64 => i32, zext_i64_i64: i64 => i64,
);

// ============================================================================
// Float/int conversion
// ============================================================================

conversion!(convert::sitofp =>
    sitofp_i8_f32: i8 => f32, sitofp_i16_f32: i16 => f32, sitofp_i32_f32: i32 => f32, sitofp_i64_f32: i64 => f32,
    sitofp_i8_f64: i8 => f64, sitofp_i16_f64: i16 => f64, sitofp_i32_f64: i32 => f64, sitofp_i64_f64: i64 => f64,
);

conversion!(convert::uitofp =>
    uitofp_i8_f32: i8 => f32, uitofp_i16_f32: i16 => f32, uitofp_i32_f32: i32 => f32, uitofp_i64_f32: i64 => f32,
    uitofp_i8_f64: i8 => f64, uitofp_i16_f64: i16 => f64, uitofp_i32_f64: i32 => f64, uitofp_i64_f64: i64 => f64,
);

conversion!(convert::fptosi =>
    fptosi_f32_i8: f32 => i8, fptosi_f32_i16: f32 => i16, fptosi_f32_i32: f32 => i32, fptosi_f32_i64: f32 => i64,
    fptosi_f64_i8: f64 => i8, fptosi_f64_i16: f64 => i16, fptosi_f64_i32: f64 => i32, fptosi_f64_i64: f64 => i64,
);

conversion!(convert::fptoui =>
    fptoui_f32_i8: f32 => i8, fptoui_f32_i16: f32 => i16, fptoui_f32_i32: f32 => i32, fptoui_f32_i64: f32 => i64,
    fptoui_f64_i8: f64 => i8, fptoui_f64_i16: f64 => i16, fptoui_f64_i32: f64 => i32, fptoui_f64_i64: f64 => i64,
);

conversion!(convert::fpconv =>
    fpconv_f32_f32: f32 => f32, fpconv_f32_f64: f32 => f64,
    fpconv_f64_f32: f64 => f32, fpconv_f64_f64: f64 => f64,
);

conversion!(convert::to_bits => to_bits32: f32 => i32, to_bits64: f64 => i64);
conversion!(convert::from_bits => from_bits32: i32 => f32, from_bits64: i64 => f64);

// ============================================================================
// Transcendental and predicate wrappers
// ============================================================================

float_unary!(float::log => log32: f32, log64: f64);
float_unary!(float::log2 => log2_32: f32, log2_64: f64);
float_unary!(float::log10 => log10_32: f32, log10_64: f64);
float_unary!(float::sqrt => sqrt32: f32, sqrt64: f64);
float_unary!(float::exp => exp32: f32, exp64: f64);
float_unary!(float::cos => cos32: f32, cos64: f64);
float_unary!(float::sin => sin32: f32, sin64: f64);
float_unary!(float::tan => tan32: f32, tan64: f64);
float_unary!(float::acos => acos32: f32, acos64: f64);
float_unary!(float::asin => asin32: f32, asin64: f64);
float_unary!(float::atan => atan32: f32, atan64: f64);
float_unary!(float::round => round32: f32, round64: f64);
float_binary!(float::atan2 => atan2_32: f32, atan2_64: f64);
float_binary!(float::fpow => fpow32: f32, fpow64: f64);
float_predicate!(float::isnan => isnan32: f32, isnan64: f64);
float_predicate!(float::isinf => isinf32: f32, isinf64: f64);
