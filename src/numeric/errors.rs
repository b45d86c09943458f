// ============================================================================
// Render Errors
// Error types for conversion, formatting and parsing
// ============================================================================

use std::fmt;
use std::num::ParseIntError;

/// Errors that can occur while rendering or parsing a denominated value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// Empty string passed to format or parse
    EmptyInput,
    /// Value's declared kind does not match its runtime shape
    Cast {
        expected: &'static str,
        found: &'static str,
    },
    /// Integer segment of a decimal is not a valid i64
    Parse(String),
    /// Plain integer input could not be parsed as u64
    ParseInt(ParseIntError),
    /// Amount-shaped input has no digit/letter boundary
    NoDenominationFound,
    /// Numeric part of an amount is not a non-negative integer
    InvalidAmount(String),
    /// Format received a value of an unrecognized kind
    UnsupportedKind(String),
    /// Conversion result exceeds the representable range
    Overflow,
    /// Denomination is absent from the unit metadata
    UnknownDenomination(String),
    /// Parsed denomination is outside the configured allow-list
    UnrecognizedDenomination(String),
    /// Decimal string does not have exactly one fractional delimiter
    MalformedDecimal(String),
    /// Amount formatting requested before metadata was supplied
    MissingMetadata,
    /// Unit metadata failed validation
    InvalidMetadata(String),
    /// Renderer configuration failed validation
    InvalidConfig(String),
    /// Metadata provider has nothing registered for a denomination
    MetadataNotFound(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::EmptyInput => write!(f, "empty input string"),
            RenderError::Cast { expected, found } => {
                write!(f, "unable to cast {} to {}", found, expected)
            },
            RenderError::Parse(segment) => {
                write!(f, "unable to convert {:?} to int64", segment)
            },
            RenderError::ParseInt(err) => write!(f, "invalid integer: {}", err),
            RenderError::NoDenominationFound => write!(f, "no denom has been found"),
            RenderError::InvalidAmount(amount) => {
                write!(f, "invalid amount {:?}: not a non-negative integer", amount)
            },
            RenderError::UnsupportedKind(kind) => write!(f, "unsupported value kind: {}", kind),
            RenderError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded maximum value")
            },
            RenderError::UnknownDenomination(denom) => {
                write!(f, "denomination {:?} not found in unit metadata", denom)
            },
            RenderError::UnrecognizedDenomination(denom) => {
                write!(f, "denomination {:?} is not a recognized amount suffix", denom)
            },
            RenderError::MalformedDecimal(s) => {
                write!(f, "malformed decimal {:?}: expected exactly one delimiter", s)
            },
            RenderError::MissingMetadata => write!(f, "no unit metadata configured"),
            RenderError::InvalidMetadata(reason) => write!(f, "invalid unit metadata: {}", reason),
            RenderError::InvalidConfig(reason) => write!(f, "invalid configuration: {}", reason),
            RenderError::MetadataNotFound(denom) => {
                write!(f, "no metadata registered for denomination {:?}", denom)
            },
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::ParseInt(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ParseIntError> for RenderError {
    fn from(err: ParseIntError) -> Self {
        RenderError::ParseInt(err)
    }
}

/// Result type alias for render operations
pub type RenderResult<T> = Result<T, RenderError>;
