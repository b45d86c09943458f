// ============================================================================
// Value Renderer Interface
// Defines the contract for formatting and parsing denominated values
// ============================================================================

use crate::domain::Value;
use crate::numeric::RenderResult;

/// Converts values to human-readable strings and back.
/// Implementations: DefaultValueRenderer
pub trait ValueRenderer: Send + Sync {
    /// Render a value as a locale-formatted string
    ///
    /// # Errors
    /// Fails on empty backing strings, malformed decimals, missing metadata,
    /// unknown denominations and conversion overflow.
    fn format(&self, value: &Value) -> RenderResult<String>;

    /// Parse a human-entered string into an amount or a plain unsigned integer
    ///
    /// # Errors
    /// Fails on empty input, amount-shaped input without a numeric part or
    /// with an unrecognized denomination, and non-numeric plain input.
    fn parse(&self, input: &str) -> RenderResult<Value>;

    /// Format then parse, for checking that a rendered string is accepted back
    fn reparse(&self, value: &Value) -> RenderResult<Value> {
        let rendered = self.format(value)?;
        self.parse(&rendered)
    }
}
