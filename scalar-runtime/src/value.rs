//! Tagged scalar values for dynamic calls into the catalogue

use std::fmt;

use scalar_ops::{FloatWidth, IntWidth, ParseError};
use serde::{Deserialize, Serialize};

/// Type of a scalar operand or result
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarType {
    Bool,
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
}

impl ScalarType {
    pub const fn int(width: IntWidth) -> Self {
        match width {
            IntWidth::W8 => ScalarType::I8,
            IntWidth::W16 => ScalarType::I16,
            IntWidth::W32 => ScalarType::I32,
            IntWidth::W64 => ScalarType::I64,
        }
    }

    pub const fn float(width: FloatWidth) -> Self {
        match width {
            FloatWidth::F32 => ScalarType::F32,
            FloatWidth::F64 => ScalarType::F64,
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScalarType::Bool => "bool",
            ScalarType::I8 => "i8",
            ScalarType::I16 => "i16",
            ScalarType::I32 => "i32",
            ScalarType::I64 => "i64",
            ScalarType::F32 => "f32",
            ScalarType::F64 => "f64",
        };
        f.write_str(name)
    }
}

/// Decimal, or `0x` hex read as the unsigned pattern of the width
macro_rules! parse_int {
    ($text:expr, $t:ty, $u:ty) => {
        match $text.strip_prefix("0x").or_else(|| $text.strip_prefix("0X")) {
            Some(digits) => <$u>::from_str_radix(digits, 16).ok().map(|bits| bits as $t),
            None => $text.parse::<$t>().ok(),
        }
    };
}

/// A single scalar value tagged with its type
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Scalar {
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
}

impl Scalar {
    pub const fn ty(&self) -> ScalarType {
        match self {
            Scalar::Bool(_) => ScalarType::Bool,
            Scalar::I8(_) => ScalarType::I8,
            Scalar::I16(_) => ScalarType::I16,
            Scalar::I32(_) => ScalarType::I32,
            Scalar::I64(_) => ScalarType::I64,
            Scalar::F32(_) => ScalarType::F32,
            Scalar::F64(_) => ScalarType::F64,
        }
    }

    /// Whether this is an integer zero (the divisor precondition)
    pub fn is_int_zero(&self) -> bool {
        matches!(
            self,
            Scalar::I8(0) | Scalar::I16(0) | Scalar::I32(0) | Scalar::I64(0)
        )
    }

    /// Bitwise equality: distinguishes NaN payloads and the sign of zero
    pub fn bit_eq(&self, other: &Scalar) -> bool {
        match (self, other) {
            (Scalar::F32(a), Scalar::F32(b)) => a.to_bits() == b.to_bits(),
            (Scalar::F64(a), Scalar::F64(b)) => a.to_bits() == b.to_bits(),
            (a, b) => a == b,
        }
    }

    /// Parse a literal of the given type.
    ///
    /// Integers accept decimal or `0x` hex; hex literals are read as the
    /// unsigned bit pattern of the width, so `0xFF` is `-1` as `i8`.
    /// Floats accept anything `str::parse` does, including `nan` and `inf`.
    pub fn parse(ty: ScalarType, text: &str) -> Result<Scalar, ParseError> {
        let invalid = || ParseError::InvalidLiteral {
            ty: ty.to_string(),
            text: text.to_string(),
        };
        let t = text.trim();

        let value = match ty {
            ScalarType::Bool => match t {
                "true" | "1" => Scalar::Bool(true),
                "false" | "0" => Scalar::Bool(false),
                _ => return Err(invalid()),
            },
            ScalarType::I8 => Scalar::I8(parse_int!(t, i8, u8).ok_or_else(invalid)?),
            ScalarType::I16 => Scalar::I16(parse_int!(t, i16, u16).ok_or_else(invalid)?),
            ScalarType::I32 => Scalar::I32(parse_int!(t, i32, u32).ok_or_else(invalid)?),
            ScalarType::I64 => Scalar::I64(parse_int!(t, i64, u64).ok_or_else(invalid)?),
            ScalarType::F32 => Scalar::F32(t.parse().map_err(|_| invalid())?),
            ScalarType::F64 => Scalar::F64(t.parse().map_err(|_| invalid())?),
        };
        Ok(value)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(v) => write!(f, "{}", v),
            Scalar::I8(v) => write!(f, "{}i8", v),
            Scalar::I16(v) => write!(f, "{}i16", v),
            Scalar::I32(v) => write!(f, "{}i32", v),
            Scalar::I64(v) => write!(f, "{}i64", v),
            Scalar::F32(v) => write!(f, "{}f32", v),
            Scalar::F64(v) => write!(f, "{}f64", v),
        }
    }
}

/// A native type that can be carried in a [`Scalar`]
pub trait Operand: Copy + Into<Scalar> {
    const TYPE: ScalarType;

    /// Unwrap the native value if the tag matches
    fn from_scalar(value: Scalar) -> Option<Self>;
}

macro_rules! scalar_operand {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$t> for Scalar {
                #[inline]
                fn from(value: $t) -> Self {
                    Scalar::$variant(value)
                }
            }

            impl Operand for $t {
                const TYPE: ScalarType = ScalarType::$variant;

                #[inline]
                fn from_scalar(value: Scalar) -> Option<Self> {
                    match value {
                        Scalar::$variant(v) => Some(v),
                        _ => None,
                    }
                }
            }
        )*
    };
}

scalar_operand!(bool => Bool, i8 => I8, i16 => I16, i32 => I32, i64 => I64, f32 => F32, f64 => F64);
