use std::fmt;

use binio_core::ScalarKind;

use crate::error::{Error, Result};

/// A scalar value detached from its binding.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    Int(i64),
    UInt(u64),
    Float(f32),
    Double(f64),
}

impl Value {
    /// Parse `text` as a value of `kind`, rejecting values out of its range.
    ///
    /// Integers accept decimal or `0x` hexadecimal notation.
    pub fn parse(text: &str, kind: ScalarKind) -> Result<Self> {
        let invalid = || Error::InvalidValue {
            text: text.to_string(),
            kind,
        };
        let trimmed = text.trim();
        match kind {
            ScalarKind::Float => trimmed.parse().map(Value::Float).map_err(|_| invalid()),
            ScalarKind::Double => trimmed.parse().map(Value::Double).map_err(|_| invalid()),
            _ if kind.is_signed() => {
                let value = parse_signed(trimmed).ok_or_else(invalid)?;
                let bits = kind.byte_width() as u32 * 8;
                let min = i64::MIN >> (64 - bits);
                let max = i64::MAX >> (64 - bits);
                if value < min || value > max {
                    return Err(invalid());
                }
                Ok(Value::Int(value))
            }
            _ => {
                let value = parse_unsigned(trimmed).ok_or_else(invalid)?;
                let bits = kind.byte_width() as u32 * 8;
                if value > u64::MAX >> (64 - bits) {
                    return Err(invalid());
                }
                Ok(Value::UInt(value))
            }
        }
    }
}

fn parse_unsigned(text: &str) -> Option<u64> {
    match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16).ok(),
        None => text.parse().ok(),
    }
}

fn parse_signed(text: &str) -> Option<i64> {
    match text.strip_prefix('-') {
        Some(rest) => {
            let magnitude = parse_unsigned(rest)?;
            0i64.checked_sub_unsigned(magnitude)
        }
        None => i64::try_from(parse_unsigned(text)?).ok(),
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::UInt(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v:?}"),
            Value::Double(v) => write!(f, "{v:?}"),
        }
    }
}
