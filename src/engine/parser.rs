// ============================================================================
// Value Parser
// Turns user input into an amount with denomination or a plain integer
// ============================================================================

use crate::domain::{Amount, DenominationShape, RendererConfig, Value};
use crate::numeric::{RenderError, RenderResult};

/// Split an amount-shaped string like `1000000uregen` at the last non-letter.
///
/// The trailing letter run is the denomination and must belong to `shape`;
/// everything before it must be a non-negative integer.
///
/// # Errors
/// - `NoDenominationFound` if the string has no non-letter character, or
///   does not end in a letter
/// - `InvalidAmount` if the numeric part is not a non-negative integer
/// - `UnrecognizedDenomination` if the suffix is outside `shape`
pub fn split_amount(s: &str, shape: &DenominationShape) -> RenderResult<Amount> {
    let boundary = s
        .char_indices()
        .rev()
        .find(|(_, c)| !c.is_alphabetic())
        .map(|(i, c)| i + c.len_utf8())
        .ok_or(RenderError::NoDenominationFound)?;

    if boundary == s.len() {
        return Err(RenderError::NoDenominationFound);
    }

    let (number, denom) = s.split_at(boundary);

    if !number.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RenderError::InvalidAmount(number.to_string()));
    }
    let amount: u128 = number
        .parse()
        .map_err(|_| RenderError::InvalidAmount(number.to_string()))?;

    if !shape.recognizes(denom) {
        return Err(RenderError::UnrecognizedDenomination(denom.to_string()));
    }

    Ok(Amount::new(amount, denom))
}

/// Parse user input into a `Value`.
///
/// Group separators are removed first. Input ending in a letter is treated
/// as an amount; anything else must be an unsigned 64-bit integer.
///
/// # Errors
/// `EmptyInput` for `""`, the errors of [`split_amount`] for amount-shaped
/// input, and `ParseInt` for anything else that is not a u64.
pub fn parse(input: &str, config: &RendererConfig) -> RenderResult<Value> {
    if input.is_empty() {
        return Err(RenderError::EmptyInput);
    }

    let normalized: String = input
        .chars()
        .filter(|&c| c != config.grouping.separator)
        .collect();

    if normalized.chars().next_back().is_some_and(char::is_alphabetic) {
        let amount = split_amount(&normalized, &config.shape)?;
        tracing::trace!(%amount, "Parsed amount");
        return Ok(Value::Amount(amount));
    }

    let value: u64 = normalized.parse()?;
    tracing::trace!(value, "Parsed plain integer");
    Ok(Value::Uint(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regen() -> RendererConfig {
        RendererConfig::regen()
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(
            parse("1000000uregen", &regen()),
            Ok(Value::Amount(Amount::new(1_000_000, "uregen")))
        );
        assert_eq!(
            parse("5mregen", &regen()),
            Ok(Value::Amount(Amount::new(5, "mregen")))
        );
        assert_eq!(
            parse("3regen", &regen()),
            Ok(Value::Amount(Amount::new(3, "regen")))
        );
    }

    #[test]
    fn test_parse_amount_with_separators() {
        assert_eq!(
            parse("1,000,000uregen", &regen()),
            Ok(Value::Amount(Amount::new(1_000_000, "uregen")))
        );
    }

    #[test]
    fn test_parse_large_amount() {
        let input = "340282366920938463463374607431768211455uregen";
        assert_eq!(
            parse(input, &regen()),
            Ok(Value::Amount(Amount::new(u128::MAX, "uregen")))
        );

        let too_large = "340282366920938463463374607431768211456uregen";
        assert!(matches!(
            parse(too_large, &regen()),
            Err(RenderError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_parse_plain_integer() {
        assert_eq!(parse("1234567", &regen()), Ok(Value::Uint(1_234_567)));
        assert_eq!(parse("1,234,567", &regen()), Ok(Value::Uint(1_234_567)));
        assert_eq!(parse("0", &regen()), Ok(Value::Uint(0)));
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse("", &regen()), Err(RenderError::EmptyInput));
    }

    #[test]
    fn test_parse_letters_only() {
        assert_eq!(
            parse("abcdef", &regen()),
            Err(RenderError::NoDenominationFound)
        );
        assert_eq!(
            parse("uregen", &regen()),
            Err(RenderError::NoDenominationFound)
        );
    }

    #[test]
    fn test_parse_unrecognized_denomination() {
        assert_eq!(
            parse("100uatom", &regen()),
            Err(RenderError::UnrecognizedDenomination("uatom".to_string()))
        );
        assert_eq!(
            parse("100kregen", &regen()),
            Err(RenderError::UnrecognizedDenomination("kregen".to_string()))
        );
    }

    #[test]
    fn test_parse_invalid_amount() {
        assert_eq!(
            parse("12.5regen", &regen()),
            Err(RenderError::InvalidAmount("12.5".to_string()))
        );
        assert_eq!(
            parse("-5regen", &regen()),
            Err(RenderError::InvalidAmount("-5".to_string()))
        );
        assert_eq!(
            parse("abc1regen", &regen()),
            Err(RenderError::InvalidAmount("abc1".to_string()))
        );
    }

    #[test]
    fn test_parse_invalid_integer_propagates() {
        assert!(matches!(
            parse("12.5", &regen()),
            Err(RenderError::ParseInt(_))
        ));
        assert!(matches!(parse("-1", &regen()), Err(RenderError::ParseInt(_))));
        assert!(matches!(
            parse("18446744073709551616", &regen()),
            Err(RenderError::ParseInt(_))
        ));
    }

    #[test]
    fn test_custom_shape() {
        let config = RendererConfig::new(DenominationShape::new("atom", ['u', 'n']));
        assert_eq!(
            parse("7natom", &config),
            Ok(Value::Amount(Amount::new(7, "natom")))
        );
        assert!(parse("7uregen", &config).is_err());
    }

    #[test]
    fn test_split_amount_requires_letter_suffix() {
        let shape = DenominationShape::new("regen", ['u']);
        assert_eq!(
            split_amount("1000", &shape),
            Err(RenderError::NoDenominationFound)
        );
    }
}
