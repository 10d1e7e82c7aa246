#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures shared by the binio engine and its tools.
//!
//! Two layers:
//! - **Scalar layer**: `ScalarKind` and `ByteOrder`, the primitive vocabulary
//!   every layout is built from
//! - **Deserialization layer**: 1:1 mapping to JSON layout files (`RawLayout`)

mod colors;
pub mod layout;


pub use colors::Colors;
pub use layout::{LayoutError, RawCount, RawLayout, RawMember, RawType, RawTypeDef, parse_layout};

// ============================================================================
// Scalar Kinds
// ============================================================================

/// Fixed-width primitive kinds a binary layout is built from.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum ScalarKind {
    Byte = 0,
    UByte = 1,
    Short = 2,
    UShort = 3,
    Int = 4,
    UInt = 5,
    Long = 6,
    ULong = 7,
    Float = 8,
    Double = 9,
}

impl ScalarKind {
    /// All kinds in discriminant order.
    pub const ALL: [Self; 10] = [
        Self::Byte,
        Self::UByte,
        Self::Short,
        Self::UShort,
        Self::Int,
        Self::UInt,
        Self::Long,
        Self::ULong,
        Self::Float,
        Self::Double,
    ];

    /// Convert from raw discriminant.
    pub fn from_u8(v: u8) -> Option<Self> {
        Self::ALL.get(v as usize).copied()
    }

    /// Look up a kind by its layout name.
    ///
    /// Accepts the canonical names (`int`, `ushort`, ...) and the sized
    /// aliases (`int32`, `uint16`, `float64`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        let kind = match name {
            "byte" | "int8" => Self::Byte,
            "ubyte" | "uint8" => Self::UByte,
            "short" | "int16" => Self::Short,
            "ushort" | "uint16" => Self::UShort,
            "int" | "int32" => Self::Int,
            "uint" | "uint32" => Self::UInt,
            "long" | "int64" => Self::Long,
            "ulong" | "uint64" => Self::ULong,
            "float" | "float32" => Self::Float,
            "double" | "float64" => Self::Double,
            _ => return None,
        };
        Some(kind)
    }

    /// Canonical layout name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Byte => "byte",
            Self::UByte => "ubyte",
            Self::Short => "short",
            Self::UShort => "ushort",
            Self::Int => "int",
            Self::UInt => "uint",
            Self::Long => "long",
            Self::ULong => "ulong",
            Self::Float => "float",
            Self::Double => "double",
        }
    }

    /// Width in bytes.
    pub fn byte_width(self) -> usize {
        match self {
            Self::Byte | Self::UByte => 1,
            Self::Short | Self::UShort => 2,
            Self::Int | Self::UInt | Self::Float => 4,
            Self::Long | Self::ULong | Self::Double => 8,
        }
    }

    /// Whether values carry a sign. Floating-point kinds are signed.
    pub fn is_signed(self) -> bool {
        !matches!(self, Self::UByte | Self::UShort | Self::UInt | Self::ULong)
    }

    /// Whether this is an IEEE 754 kind.
    pub fn is_float(self) -> bool {
        matches!(self, Self::Float | Self::Double)
    }
}

impl std::fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Byte Order
// ============================================================================

/// Byte order of multi-byte scalars in a resource.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ByteOrder {
    /// Most significant byte first (network order).
    #[default]
    #[serde(alias = "big-endian")]
    Big,
    /// Least significant byte first.
    #[serde(alias = "little-endian")]
    Little,
}

impl ByteOrder {
    /// Byte order of the host.
    pub fn native() -> Self {
        if cfg!(target_endian = "big") {
            Self::Big
        } else {
            Self::Little
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Big => "big",
            Self::Little => "little",
        }
    }
}

impl std::fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
