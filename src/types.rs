//! Shared types: [`ByteOrder`], [`SampleFormat`], and [`TextEncoding`].

use std::fmt;

/// Byte order for multi-byte integer fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    Big,
    Little,
}

impl ByteOrder {
    /// The opposite byte order.
    pub fn reversed(self) -> Self {
        match self {
            Self::Big => Self::Little,
            Self::Little => Self::Big,
        }
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Big => write!(f, "big-endian"),
            Self::Little => write!(f, "little-endian"),
        }
    }
}

/// Sample encoding selected by the binary header's format code (SEG-Y rev 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleFormat {
    /// 4-byte IBM hexadecimal floating point (code 1).
    IbmFloat32,
    /// 4-byte two's complement integer (code 2).
    Int32,
    /// 2-byte two's complement integer (code 3).
    Int16,
    /// 4-byte fixed point with gain, obsolete (code 4).
    FixedPointWithGain,
    /// 4-byte IEEE floating point (code 5).
    IeeeFloat32,
    /// Codes 6 and 7, not assigned in rev 1.
    Unassigned(i16),
    /// 1-byte two's complement integer (code 8).
    Int8,
}

impl SampleFormat {
    /// Map a raw format code to a `SampleFormat`.
    ///
    /// Returns `None` outside the valid range `1..=8`.
    pub fn from_code(code: i16) -> Option<Self> {
        match code {
            1 => Some(Self::IbmFloat32),
            2 => Some(Self::Int32),
            3 => Some(Self::Int16),
            4 => Some(Self::FixedPointWithGain),
            5 => Some(Self::IeeeFloat32),
            6 | 7 => Some(Self::Unassigned(code)),
            8 => Some(Self::Int8),
            _ => None,
        }
    }

    /// Convert back to the raw binary-header code.
    pub fn to_code(self) -> i16 {
        match self {
            Self::IbmFloat32 => 1,
            Self::Int32 => 2,
            Self::Int16 => 3,
            Self::FixedPointWithGain => 4,
            Self::IeeeFloat32 => 5,
            Self::Unassigned(code) => code,
            Self::Int8 => 8,
        }
    }

    /// Size of one sample on disk, in bytes.
    pub fn bytes_per_sample(self) -> usize {
        match self {
            Self::IbmFloat32 | Self::Int32 | Self::FixedPointWithGain | Self::IeeeFloat32 => 4,
            Self::Int16 => 2,
            Self::Int8 => 1,
            Self::Unassigned(_) => 4,
        }
    }

    /// Whether the format code lies in the valid range.
    pub fn is_valid_code(code: i16) -> bool {
        (1..=8).contains(&code)
    }
}

impl fmt::Display for SampleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IbmFloat32 => write!(f, "IBM FLOAT32"),
            Self::Int32 => write!(f, "INT32"),
            Self::Int16 => write!(f, "INT16"),
            Self::FixedPointWithGain => write!(f, "FIXED POINT W/ GAIN"),
            Self::IeeeFloat32 => write!(f, "IEEE FLOAT32"),
            Self::Unassigned(code) => write!(f, "UNASSIGNED ({code})"),
            Self::Int8 => write!(f, "INT8"),
        }
    }
}

/// Character encoding of fixed-width text fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    /// EBCDIC, code page 500.
    Ebcdic,
    /// 7-bit ASCII; bytes above 0x7F are taken as Latin-1.
    Ascii,
}
