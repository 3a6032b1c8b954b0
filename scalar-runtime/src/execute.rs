//! Primitive dispatch onto the generic operation families

use scalar_ops::{arith, compare, convert, division, float, FloatWidth, IntWidth, SizedFloat, SizedInt};

use crate::error::{EvalError, Result};
use crate::primitive::*;
use crate::value::{Operand, Scalar};

/// Bind `$t` to the native integer type of `$width` inside `$body`
macro_rules! at_int_width {
    ($width:expr, $t:ident => $body:expr) => {
        match $width {
            IntWidth::W8 => {
                type $t = i8;
                $body
            }
            IntWidth::W16 => {
                type $t = i16;
                $body
            }
            IntWidth::W32 => {
                type $t = i32;
                $body
            }
            IntWidth::W64 => {
                type $t = i64;
                $body
            }
        }
    };
}

/// Bind `$t` to the native float type of `$width` inside `$body`
macro_rules! at_float_width {
    ($width:expr, $t:ident => $body:expr) => {
        match $width {
            FloatWidth::F32 => {
                type $t = f32;
                $body
            }
            FloatWidth::F64 => {
                type $t = f64;
                $body
            }
        }
    };
}

/// Check operand count and operand types against the signature
pub(crate) fn check_operands(primitive: Primitive, args: &[Scalar]) -> Result<()> {
    let signature = primitive.signature();
    if args.len() != signature.params.len() {
        return Err(EvalError::ArityMismatch {
            primitive: primitive.name(),
            expected: signature.params.len(),
            found: args.len(),
        });
    }

    for (index, (arg, &expected)) in args.iter().zip(&signature.params).enumerate() {
        if arg.ty() != expected {
            return Err(EvalError::TypeMismatch {
                primitive: primitive.name(),
                index,
                expected,
                found: arg.ty(),
            });
        }
    }

    Ok(())
}

/// Typed view of an argument list
struct Operands<'a> {
    primitive: Primitive,
    args: &'a [Scalar],
}

impl Operands<'_> {
    fn get<T: Operand>(&self, index: usize) -> Result<T> {
        match self.args.get(index) {
            Some(&value) => T::from_scalar(value).ok_or_else(|| EvalError::TypeMismatch {
                primitive: self.primitive.name(),
                index,
                expected: T::TYPE,
                found: value.ty(),
            }),
            None => Err(EvalError::ArityMismatch {
                primitive: self.primitive.name(),
                expected: self.primitive.arity(),
                found: self.args.len(),
            }),
        }
    }
}

/// Run the operation. The divisor precondition is the caller's to enforce.
pub(crate) fn dispatch(primitive: Primitive, args: &[Scalar]) -> Result<Scalar> {
    let ops = Operands { primitive, args };

    let value = match primitive {
        Primitive::IntBinary { op, width } => at_int_width!(width, T => {
            Scalar::from(int_binary(op, ops.get::<T>(0)?, ops.get::<T>(1)?))
        }),

        Primitive::IntCompare { op, width } => at_int_width!(width, T => {
            Scalar::Bool(int_compare(op, ops.get::<T>(0)?, ops.get::<T>(1)?))
        }),

        Primitive::IntUnary { op, width } => at_int_width!(width, T => {
            Scalar::from(int_unary(op, ops.get::<T>(0)?))
        }),

        Primitive::BoolCompare(op) => {
            let (x, y) = (ops.get::<bool>(0)?, ops.get::<bool>(1)?);
            Scalar::Bool(match op {
                BoolCompareOp::Llt => arith::llt(x, y),
                BoolCompareOp::Lle => arith::lle(x, y),
            })
        }

        // ========== Conversions ==========
        Primitive::IntConvert { op, from, to } => at_int_width!(from, F => {
            let x = ops.get::<F>(0)?;
            at_int_width!(to, T => Scalar::from(match op {
                IntConvertOp::Sext => convert::sext::<F, T>(x),
                IntConvertOp::Zext => convert::zext::<F, T>(x),
            }))
        }),

        Primitive::IntToFloat { op, from, to } => at_int_width!(from, I => {
            let x = ops.get::<I>(0)?;
            at_float_width!(to, F => Scalar::from(match op {
                IntToFloatOp::Sitofp => convert::sitofp::<I, F>(x),
                IntToFloatOp::Uitofp => convert::uitofp::<I, F>(x),
            }))
        }),

        Primitive::FloatToInt { op, from, to } => at_float_width!(from, F => {
            let x = ops.get::<F>(0)?;
            at_int_width!(to, I => Scalar::from(match op {
                FloatToIntOp::Fptosi => convert::fptosi::<F, I>(x),
                FloatToIntOp::Fptoui => convert::fptoui::<F, I>(x),
            }))
        }),

        Primitive::FpConv { from, to } => at_float_width!(from, F => {
            let x = ops.get::<F>(0)?;
            at_float_width!(to, G => Scalar::from(convert::fpconv::<F, G>(x)))
        }),

        Primitive::ToBits(width) => at_float_width!(width, F => {
            Scalar::from(convert::to_bits::<F>(ops.get(0)?))
        }),

        Primitive::FromBits(width) => at_float_width!(width, F => {
            let bits: <F as SizedFloat>::Bits = ops.get(0)?;
            Scalar::from(convert::from_bits::<F>(bits))
        }),

        // ========== Floating point ==========
        Primitive::FloatUnary { op, width } => at_float_width!(width, F => {
            Scalar::from(float_unary(op, ops.get::<F>(0)?))
        }),

        Primitive::FloatBinary { op, width } => at_float_width!(width, F => {
            Scalar::from(float_binary(op, ops.get::<F>(0)?, ops.get::<F>(1)?))
        }),

        Primitive::FloatPredicate { op, width } => at_float_width!(width, F => {
            let x = ops.get::<F>(0)?;
            Scalar::Bool(match op {
                FloatPredicateOp::IsNan => float::isnan(x),
                FloatPredicateOp::IsInf => float::isinf(x),
            })
        }),
    };

    Ok(value)
}

fn int_binary<T: SizedInt>(op: IntBinaryOp, x: T, y: T) -> T {
    match op {
        IntBinaryOp::Add => arith::add(x, y),
        IntBinaryOp::Sub => arith::sub(x, y),
        IntBinaryOp::Mul => arith::mul(x, y),
        IntBinaryOp::Pow => arith::pow(x, y),
        IntBinaryOp::Or => arith::or(x, y),
        IntBinaryOp::Xor => arith::xor(x, y),
        IntBinaryOp::And => arith::and(x, y),
        IntBinaryOp::Shl => arith::shl(x, y),
        IntBinaryOp::Ashr => arith::ashr(x, y),
        IntBinaryOp::Lshr => arith::lshr(x, y),
        IntBinaryOp::Squot => division::squot(x, y),
        IntBinaryOp::Srem => division::srem(x, y),
        IntBinaryOp::Sdiv => division::sdiv(x, y),
        IntBinaryOp::Smod => division::smod(x, y),
        IntBinaryOp::Udiv => division::udiv(x, y),
        IntBinaryOp::Umod => division::umod(x, y),
        IntBinaryOp::Smin => compare::smin(x, y),
        IntBinaryOp::Smax => compare::smax(x, y),
        IntBinaryOp::Umin => compare::umin(x, y),
        IntBinaryOp::Umax => compare::umax(x, y),
    }
}

fn int_compare<T: SizedInt>(op: IntCompareOp, x: T, y: T) -> bool {
    match op {
        IntCompareOp::Slt => compare::slt(x, y),
        IntCompareOp::Sle => compare::sle(x, y),
        IntCompareOp::Ult => compare::ult(x, y),
        IntCompareOp::Ule => compare::ule(x, y),
    }
}

fn int_unary<T: SizedInt>(op: IntUnaryOp, x: T) -> T {
    match op {
        IntUnaryOp::Ssignum => compare::ssignum(x),
        IntUnaryOp::Usignum => compare::usignum(x),
    }
}

fn float_unary<F: SizedFloat>(op: FloatUnaryOp, x: F) -> F {
    match op {
        FloatUnaryOp::Log => float::log(x),
        FloatUnaryOp::Log2 => float::log2(x),
        FloatUnaryOp::Log10 => float::log10(x),
        FloatUnaryOp::Sqrt => float::sqrt(x),
        FloatUnaryOp::Exp => float::exp(x),
        FloatUnaryOp::Cos => float::cos(x),
        FloatUnaryOp::Sin => float::sin(x),
        FloatUnaryOp::Tan => float::tan(x),
        FloatUnaryOp::Acos => float::acos(x),
        FloatUnaryOp::Asin => float::asin(x),
        FloatUnaryOp::Atan => float::atan(x),
        FloatUnaryOp::Round => float::round(x),
    }
}

fn float_binary<F: SizedFloat>(op: FloatBinaryOp, x: F, y: F) -> F {
    match op {
        // first operand is the y coordinate
        FloatBinaryOp::Atan2 => float::atan2(x, y),
        FloatBinaryOp::Fpow => float::fpow(x, y),
        FloatBinaryOp::Fmin => compare::fmin(x, y),
        FloatBinaryOp::Fmax => compare::fmax(x, y),
    }
}
