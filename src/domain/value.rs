// ============================================================================
// Value Kinds
// The closed set of values the renderer formats and parses
// ============================================================================

use crate::numeric::{RenderError, RenderResult};
use rust_decimal::Decimal;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Value Objects
// ============================================================================

/// A machine-level quantity tagged with its denomination, e.g. `1000000uregen`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Amount {
    pub amount: u128,
    pub denom: String,
}

impl Amount {
    pub fn new(amount: u128, denom: impl Into<String>) -> Self {
        Self {
            amount,
            denom: denom.into(),
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

/// String-backed fixed-point number: an integer part and a fractional part
/// separated by a single delimiter.
///
/// The backing string is kept as given; shape errors surface when the value
/// is formatted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DecimalValue(String);

impl DecimalValue {
    pub fn new(repr: impl Into<String>) -> Self {
        Self(repr.into())
    }

    /// Build from a `rust_decimal::Decimal`, always carrying a fractional
    /// segment so the value formats as a decimal.
    pub fn from_decimal(d: Decimal) -> Self {
        if d.scale() == 0 {
            Self(format!("{}.0", d))
        } else {
            Self(d.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Decimal> for DecimalValue {
    fn from(d: Decimal) -> Self {
        Self::from_decimal(d)
    }
}

impl fmt::Display for DecimalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Value
// ============================================================================

/// Every kind the renderer understands.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    /// Signed plain integer
    Integer(i64),
    /// Unsigned plain integer, as produced by parsing a bare number
    Uint(u64),
    /// Fixed-point decimal
    Decimal(DecimalValue),
    /// Amount with denomination
    Amount(Amount),
}

impl Value {
    /// Kind name used in logs and cast errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Integer(_) => "Integer",
            Value::Uint(_) => "Uint",
            Value::Decimal(_) => "Decimal",
            Value::Amount(_) => "Amount",
        }
    }

    fn cast_error(&self, expected: &'static str) -> RenderError {
        RenderError::Cast {
            expected,
            found: self.kind(),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::Uint(v)
    }
}

impl From<DecimalValue> for Value {
    fn from(v: DecimalValue) -> Self {
        Value::Decimal(v)
    }
}

impl From<Amount> for Value {
    fn from(v: Amount) -> Self {
        Value::Amount(v)
    }
}

impl TryFrom<Value> for i64 {
    type Error = RenderError;

    fn try_from(value: Value) -> RenderResult<Self> {
        match value {
            Value::Integer(v) => Ok(v),
            other => Err(other.cast_error("Integer")),
        }
    }
}

impl TryFrom<Value> for u64 {
    type Error = RenderError;

    fn try_from(value: Value) -> RenderResult<Self> {
        match value {
            Value::Uint(v) => Ok(v),
            other => Err(other.cast_error("Uint")),
        }
    }
}

impl TryFrom<Value> for DecimalValue {
    type Error = RenderError;

    fn try_from(value: Value) -> RenderResult<Self> {
        match value {
            Value::Decimal(v) => Ok(v),
            other => Err(other.cast_error("Decimal")),
        }
    }
}

impl TryFrom<Value> for Amount {
    type Error = RenderError;

    fn try_from(value: Value) -> RenderResult<Self> {
        match value {
            Value::Amount(v) => Ok(v),
            other => Err(other.cast_error("Amount")),
        }
    }
}
