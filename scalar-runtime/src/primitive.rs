//! # Primitive Names
//!
//! Every entry of the width-named catalogue as a value. A [`Primitive`] carries
//! its operation family and width(s) as data; [`Primitive::name`] renders the
//! catalogue name (`add8`, `sext_i8_i64`, `log2_32`) and `FromStr` resolves it
//! back.
//!
//! Naming follows one rule: the family name followed by the width in bits, with
//! an underscore between them when the family name itself ends in a digit
//! (`log2_32`, `atan2_64`). Conversions spell both widths (`fptosi_f64_i8`).

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use scalar_ops::{FloatWidth, IntWidth, ParseError};
use serde::{Deserialize, Serialize};

use crate::value::ScalarType;

/// Binary integer operations returning an integer of the same width
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntBinaryOp {
    // ========== Wraparound arithmetic ==========
    Add,
    Sub,
    Mul,
    Pow,

    // ========== Bitwise and shift ==========
    Or,
    Xor,
    And,
    Shl,
    Ashr,
    Lshr,

    // ========== Division ==========
    Squot,
    Srem,
    Sdiv,
    Smod,
    Udiv,
    Umod,

    // ========== Min/max ==========
    Smin,
    Smax,
    Umin,
    Umax,
}

impl IntBinaryOp {
    pub const ALL: [IntBinaryOp; 20] = [
        IntBinaryOp::Add,
        IntBinaryOp::Sub,
        IntBinaryOp::Mul,
        IntBinaryOp::Pow,
        IntBinaryOp::Or,
        IntBinaryOp::Xor,
        IntBinaryOp::And,
        IntBinaryOp::Shl,
        IntBinaryOp::Ashr,
        IntBinaryOp::Lshr,
        IntBinaryOp::Squot,
        IntBinaryOp::Srem,
        IntBinaryOp::Sdiv,
        IntBinaryOp::Smod,
        IntBinaryOp::Udiv,
        IntBinaryOp::Umod,
        IntBinaryOp::Smin,
        IntBinaryOp::Smax,
        IntBinaryOp::Umin,
        IntBinaryOp::Umax,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            IntBinaryOp::Add => "add",
            IntBinaryOp::Sub => "sub",
            IntBinaryOp::Mul => "mul",
            IntBinaryOp::Pow => "pow",
            IntBinaryOp::Or => "or",
            IntBinaryOp::Xor => "xor",
            IntBinaryOp::And => "and",
            IntBinaryOp::Shl => "shl",
            IntBinaryOp::Ashr => "ashr",
            IntBinaryOp::Lshr => "lshr",
            IntBinaryOp::Squot => "squot",
            IntBinaryOp::Srem => "srem",
            IntBinaryOp::Sdiv => "sdiv",
            IntBinaryOp::Smod => "smod",
            IntBinaryOp::Udiv => "udiv",
            IntBinaryOp::Umod => "umod",
            IntBinaryOp::Smin => "smin",
            IntBinaryOp::Smax => "smax",
            IntBinaryOp::Umin => "umin",
            IntBinaryOp::Umax => "umax",
        }
    }

    /// Check if the second operand is a divisor
    #[inline]
    pub const fn is_division(self) -> bool {
        matches!(
            self,
            IntBinaryOp::Squot
                | IntBinaryOp::Srem
                | IntBinaryOp::Sdiv
                | IntBinaryOp::Smod
                | IntBinaryOp::Udiv
                | IntBinaryOp::Umod
        )
    }
}

/// Integer comparisons
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntCompareOp {
    Slt,
    Sle,
    Ult,
    Ule,
}

impl IntCompareOp {
    pub const ALL: [IntCompareOp; 4] = [
        IntCompareOp::Slt,
        IntCompareOp::Sle,
        IntCompareOp::Ult,
        IntCompareOp::Ule,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            IntCompareOp::Slt => "slt",
            IntCompareOp::Sle => "sle",
            IntCompareOp::Ult => "ult",
            IntCompareOp::Ule => "ule",
        }
    }
}

/// Unary integer operations
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntUnaryOp {
    Ssignum,
    Usignum,
}

impl IntUnaryOp {
    pub const ALL: [IntUnaryOp; 2] = [IntUnaryOp::Ssignum, IntUnaryOp::Usignum];

    pub const fn name(self) -> &'static str {
        match self {
            IntUnaryOp::Ssignum => "ssignum",
            IntUnaryOp::Usignum => "usignum",
        }
    }
}

/// Ordering on booleans (`false < true`)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoolCompareOp {
    Llt,
    Lle,
}

impl BoolCompareOp {
    pub const ALL: [BoolCompareOp; 2] = [BoolCompareOp::Llt, BoolCompareOp::Lle];

    pub const fn name(self) -> &'static str {
        match self {
            BoolCompareOp::Llt => "llt",
            BoolCompareOp::Lle => "lle",
        }
    }
}

/// Integer to integer conversions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntConvertOp {
    Sext,
    Zext,
}

/// Integer to float conversions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntToFloatOp {
    Sitofp,
    Uitofp,
}

/// Float to integer conversions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FloatToIntOp {
    Fptosi,
    Fptoui,
}

/// Unary float operations
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FloatUnaryOp {
    Log,
    Log2,
    Log10,
    Sqrt,
    Exp,
    Cos,
    Sin,
    Tan,
    Acos,
    Asin,
    Atan,
    Round,
}

impl FloatUnaryOp {
    pub const ALL: [FloatUnaryOp; 12] = [
        FloatUnaryOp::Log,
        FloatUnaryOp::Log2,
        FloatUnaryOp::Log10,
        FloatUnaryOp::Sqrt,
        FloatUnaryOp::Exp,
        FloatUnaryOp::Cos,
        FloatUnaryOp::Sin,
        FloatUnaryOp::Tan,
        FloatUnaryOp::Acos,
        FloatUnaryOp::Asin,
        FloatUnaryOp::Atan,
        FloatUnaryOp::Round,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            FloatUnaryOp::Log => "log",
            FloatUnaryOp::Log2 => "log2",
            FloatUnaryOp::Log10 => "log10",
            FloatUnaryOp::Sqrt => "sqrt",
            FloatUnaryOp::Exp => "exp",
            FloatUnaryOp::Cos => "cos",
            FloatUnaryOp::Sin => "sin",
            FloatUnaryOp::Tan => "tan",
            FloatUnaryOp::Acos => "acos",
            FloatUnaryOp::Asin => "asin",
            FloatUnaryOp::Atan => "atan",
            FloatUnaryOp::Round => "round",
        }
    }
}

/// Binary float operations
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FloatBinaryOp {
    Atan2,
    Fpow,
    Fmin,
    Fmax,
}

impl FloatBinaryOp {
    pub const ALL: [FloatBinaryOp; 4] = [
        FloatBinaryOp::Atan2,
        FloatBinaryOp::Fpow,
        FloatBinaryOp::Fmin,
        FloatBinaryOp::Fmax,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            FloatBinaryOp::Atan2 => "atan2",
            FloatBinaryOp::Fpow => "fpow",
            FloatBinaryOp::Fmin => "fmin",
            FloatBinaryOp::Fmax => "fmax",
        }
    }
}

/// Float classification predicates
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FloatPredicateOp {
    IsNan,
    IsInf,
}

impl FloatPredicateOp {
    pub const ALL: [FloatPredicateOp; 2] = [FloatPredicateOp::IsNan, FloatPredicateOp::IsInf];

    pub const fn name(self) -> &'static str {
        match self {
            FloatPredicateOp::IsNan => "isnan",
            FloatPredicateOp::IsInf => "isinf",
        }
    }
}

/// One entry of the catalogue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Primitive {
    IntBinary { op: IntBinaryOp, width: IntWidth },
    IntCompare { op: IntCompareOp, width: IntWidth },
    IntUnary { op: IntUnaryOp, width: IntWidth },
    BoolCompare(BoolCompareOp),
    IntConvert { op: IntConvertOp, from: IntWidth, to: IntWidth },
    IntToFloat { op: IntToFloatOp, from: IntWidth, to: FloatWidth },
    FloatToInt { op: FloatToIntOp, from: FloatWidth, to: IntWidth },
    FpConv { from: FloatWidth, to: FloatWidth },
    ToBits(FloatWidth),
    FromBits(FloatWidth),
    FloatUnary { op: FloatUnaryOp, width: FloatWidth },
    FloatBinary { op: FloatBinaryOp, width: FloatWidth },
    FloatPredicate { op: FloatPredicateOp, width: FloatWidth },
}

/// Parameter and result types of a primitive
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    pub params: Vec<ScalarType>,
    pub result: ScalarType,
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", param)?;
        }
        write!(f, ") -> {}", self.result)
    }
}

/// `log2` + 32 is `log2_32`, `add` + 8 is `add8`
fn sized_name(family: &str, bits: u32) -> String {
    if family.ends_with(|c: char| c.is_ascii_digit()) {
        format!("{}_{}", family, bits)
    } else {
        format!("{}{}", family, bits)
    }
}

impl Primitive {
    /// Enumerate the whole catalogue, grouped by family
    pub fn all() -> Vec<Primitive> {
        let mut all = Vec::new();

        for op in IntBinaryOp::ALL {
            all.extend(IntWidth::ALL.map(|width| Primitive::IntBinary { op, width }));
        }
        for op in IntCompareOp::ALL {
            all.extend(IntWidth::ALL.map(|width| Primitive::IntCompare { op, width }));
        }
        for op in IntUnaryOp::ALL {
            all.extend(IntWidth::ALL.map(|width| Primitive::IntUnary { op, width }));
        }
        all.extend(BoolCompareOp::ALL.map(Primitive::BoolCompare));

        for op in [IntConvertOp::Sext, IntConvertOp::Zext] {
            for from in IntWidth::ALL {
                all.extend(IntWidth::ALL.map(|to| Primitive::IntConvert { op, from, to }));
            }
        }
        for op in [IntToFloatOp::Sitofp, IntToFloatOp::Uitofp] {
            for to in FloatWidth::ALL {
                all.extend(IntWidth::ALL.map(|from| Primitive::IntToFloat { op, from, to }));
            }
        }
        for op in [FloatToIntOp::Fptosi, FloatToIntOp::Fptoui] {
            for from in FloatWidth::ALL {
                all.extend(IntWidth::ALL.map(|to| Primitive::FloatToInt { op, from, to }));
            }
        }
        for from in FloatWidth::ALL {
            all.extend(FloatWidth::ALL.map(|to| Primitive::FpConv { from, to }));
        }
        all.extend(FloatWidth::ALL.map(Primitive::ToBits));
        all.extend(FloatWidth::ALL.map(Primitive::FromBits));

        for op in FloatUnaryOp::ALL {
            all.extend(FloatWidth::ALL.map(|width| Primitive::FloatUnary { op, width }));
        }
        for op in FloatBinaryOp::ALL {
            all.extend(FloatWidth::ALL.map(|width| Primitive::FloatBinary { op, width }));
        }
        for op in FloatPredicateOp::ALL {
            all.extend(FloatWidth::ALL.map(|width| Primitive::FloatPredicate { op, width }));
        }

        all
    }

    /// Catalogue name of this primitive
    pub fn name(&self) -> String {
        match *self {
            Primitive::IntBinary { op, width } => sized_name(op.name(), width.bits()),
            Primitive::IntCompare { op, width } => sized_name(op.name(), width.bits()),
            Primitive::IntUnary { op, width } => sized_name(op.name(), width.bits()),
            Primitive::BoolCompare(op) => op.name().to_string(),
            Primitive::IntConvert { op, from, to } => {
                let family = match op {
                    IntConvertOp::Sext => "sext",
                    IntConvertOp::Zext => "zext",
                };
                format!("{}_{}_{}", family, from, to)
            }
            Primitive::IntToFloat { op, from, to } => {
                let family = match op {
                    IntToFloatOp::Sitofp => "sitofp",
                    IntToFloatOp::Uitofp => "uitofp",
                };
                format!("{}_{}_{}", family, from, to)
            }
            Primitive::FloatToInt { op, from, to } => {
                let family = match op {
                    FloatToIntOp::Fptosi => "fptosi",
                    FloatToIntOp::Fptoui => "fptoui",
                };
                format!("{}_{}_{}", family, from, to)
            }
            Primitive::FpConv { from, to } => format!("fpconv_{}_{}", from, to),
            Primitive::ToBits(width) => sized_name("to_bits", width.bits()),
            Primitive::FromBits(width) => sized_name("from_bits", width.bits()),
            Primitive::FloatUnary { op, width } => sized_name(op.name(), width.bits()),
            Primitive::FloatBinary { op, width } => sized_name(op.name(), width.bits()),
            Primitive::FloatPredicate { op, width } => sized_name(op.name(), width.bits()),
        }
    }

    /// Parameter and result types
    pub fn signature(&self) -> Signature {
        use ScalarType as T;

        let (params, result) = match *self {
            Primitive::IntBinary { width, .. } => {
                let t = T::int(width);
                (vec![t, t], t)
            }
            Primitive::IntCompare { width, .. } => {
                let t = T::int(width);
                (vec![t, t], T::Bool)
            }
            Primitive::IntUnary { width, .. } => {
                let t = T::int(width);
                (vec![t], t)
            }
            Primitive::BoolCompare(_) => (vec![T::Bool, T::Bool], T::Bool),
            Primitive::IntConvert { from, to, .. } => (vec![T::int(from)], T::int(to)),
            Primitive::IntToFloat { from, to, .. } => (vec![T::int(from)], T::float(to)),
            Primitive::FloatToInt { from, to, .. } => (vec![T::float(from)], T::int(to)),
            Primitive::FpConv { from, to } => (vec![T::float(from)], T::float(to)),
            Primitive::ToBits(width) => (vec![T::float(width)], T::int(width.bits_width())),
            Primitive::FromBits(width) => (vec![T::int(width.bits_width())], T::float(width)),
            Primitive::FloatUnary { width, .. } => {
                let t = T::float(width);
                (vec![t], t)
            }
            Primitive::FloatBinary { width, .. } => {
                let t = T::float(width);
                (vec![t, t], t)
            }
            Primitive::FloatPredicate { width, .. } => (vec![T::float(width)], T::Bool),
        };

        Signature { params, result }
    }

    /// Number of operands
    pub fn arity(&self) -> usize {
        match self {
            Primitive::IntBinary { .. }
            | Primitive::IntCompare { .. }
            | Primitive::BoolCompare(_)
            | Primitive::FloatBinary { .. } => 2,
            _ => 1,
        }
    }

    /// Check if this primitive requires a nonzero second operand
    #[inline]
    pub fn is_division(&self) -> bool {
        matches!(self, Primitive::IntBinary { op, .. } if op.is_division())
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

fn name_table() -> &'static HashMap<String, Primitive> {
    static TABLE: OnceLock<HashMap<String, Primitive>> = OnceLock::new();
    TABLE.get_or_init(|| Primitive::all().into_iter().map(|p| (p.name(), p)).collect())
}

impl FromStr for Primitive {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        name_table()
            .get(s)
            .copied()
            .ok_or_else(|| ParseError::UnknownPrimitive(s.to_string()))
    }
}
