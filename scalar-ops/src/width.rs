//! # Bit Widths
//!
//! The fixed set of widths the catalogue is defined over. Integer widths are
//! 8/16/32/64 bits, float widths are IEEE-754 binary32 and binary64.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Integer operand width
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum IntWidth {
    W8,
    W16,
    W32,
    W64,
}

impl IntWidth {
    /// All integer widths, narrowest first
    pub const ALL: [IntWidth; 4] = [IntWidth::W8, IntWidth::W16, IntWidth::W32, IntWidth::W64];

    /// Width in bits
    #[inline]
    pub const fn bits(self) -> u32 {
        match self {
            IntWidth::W8 => 8,
            IntWidth::W16 => 16,
            IntWidth::W32 => 32,
            IntWidth::W64 => 64,
        }
    }

    /// Look up a width by bit count
    pub const fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            8 => Some(IntWidth::W8),
            16 => Some(IntWidth::W16),
            32 => Some(IntWidth::W32),
            64 => Some(IntWidth::W64),
            _ => None,
        }
    }
}

impl fmt::Display for IntWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "i{}", self.bits())
    }
}

impl FromStr for IntWidth {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix('i')
            .and_then(|digits| digits.parse::<u32>().ok())
            .and_then(IntWidth::from_bits)
            .ok_or_else(|| ParseError::UnknownWidth(s.to_string()))
    }
}

impl TryFrom<u32> for IntWidth {
    type Error = ParseError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        IntWidth::from_bits(bits).ok_or(ParseError::UnsupportedBits(bits))
    }
}

/// Floating-point operand width
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FloatWidth {
    F32,
    F64,
}

impl FloatWidth {
    pub const ALL: [FloatWidth; 2] = [FloatWidth::F32, FloatWidth::F64];

    #[inline]
    pub const fn bits(self) -> u32 {
        match self {
            FloatWidth::F32 => 32,
            FloatWidth::F64 => 64,
        }
    }

    pub const fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            32 => Some(FloatWidth::F32),
            64 => Some(FloatWidth::F64),
            _ => None,
        }
    }

    /// Integer width of the raw bit pattern
    #[inline]
    pub const fn bits_width(self) -> IntWidth {
        match self {
            FloatWidth::F32 => IntWidth::W32,
            FloatWidth::F64 => IntWidth::W64,
        }
    }
}

impl fmt::Display for FloatWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "f{}", self.bits())
    }
}

impl FromStr for FloatWidth {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix('f')
            .and_then(|digits| digits.parse::<u32>().ok())
            .and_then(FloatWidth::from_bits)
            .ok_or_else(|| ParseError::UnknownWidth(s.to_string()))
    }
}

impl TryFrom<u32> for FloatWidth {
    type Error = ParseError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        FloatWidth::from_bits(bits).ok_or(ParseError::UnsupportedBits(bits))
    }
}
