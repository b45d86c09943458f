// ============================================================================
// Value Renderer Library
// Converts denominated amounts to locale-formatted strings and back
// ============================================================================

//! # Value Renderer
//!
//! Renders machine-level amounts, tracked in a base denomination, as
//! human-readable strings in a preferred display unit, and parses such
//! strings back into typed values.
//!
//! ## Features
//!
//! - **Exact unit conversion** between denominations using integer powers of ten
//! - **Locale digit grouping** for integers and fixed-point decimals
//! - **Amount parsing** against a configurable family of denomination suffixes
//! - **Pluggable metadata providers** for unit exponents and display units
//!
//! ## Example
//!
//! ```rust
//! use value_renderer::prelude::*;
//!
//! let renderer = DefaultValueRenderer::new(RendererConfig::regen())
//!     .unwrap()
//!     .with_metadata(UnitMetadata::regen())
//!     .unwrap();
//!
//! // Amounts are shown in the display unit
//! let parsed = renderer.parse("1,000,000uregen").unwrap();
//! assert_eq!(renderer.format(&parsed).unwrap(), "1regen");
//!
//! // Plain numbers get digit grouping
//! let value = Value::Decimal(DecimalValue::new("1234567.89"));
//! assert_eq!(renderer.format(&value).unwrap(), "1,234,567.89");
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        Amount, DecimalValue, DenomUnit, DenominationShape, GroupingConfig, RendererConfig,
        UnitMetadata, UnknownDenominationPolicy, Value,
    };
    pub use crate::engine::{
        create_from_provider, rescale, Converter, DefaultValueRenderer, RendererBuilder,
    };
    pub use crate::interfaces::{InMemoryMetadataProvider, MetadataProvider, ValueRenderer};
    pub use crate::numeric::{RenderError, RenderResult};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use std::sync::Arc;

    fn regen_metadata() -> UnitMetadata {
        UnitMetadata::new("uregen", "regen")
            .with_unit(DenomUnit::new("uregen", 6))
            .with_unit(DenomUnit::new("mregen", 3))
            .with_unit(DenomUnit::new("regen", 0))
    }

    #[test]
    fn test_end_to_end_amount() {
        let provider = InMemoryMetadataProvider::new();
        provider.register(regen_metadata()).unwrap();

        let renderer = create_from_provider(RendererConfig::regen(), &provider, "uregen").unwrap();

        let parsed = renderer.parse("1000000uregen").unwrap();
        assert_eq!(parsed, Value::Amount(Amount::new(1_000_000, "uregen")));
        assert_eq!(renderer.format(&parsed).unwrap(), "1regen");
    }

    #[test]
    fn test_millis_scenario() {
        let renderer = DefaultValueRenderer::new(RendererConfig::regen())
            .unwrap()
            .with_metadata(regen_metadata())
            .unwrap();

        let value = Value::Amount(Amount::new(2_500, "mregen"));
        assert_eq!(renderer.compute_amount(&Amount::new(2_500, "mregen")), Ok(2));
        assert_eq!(renderer.format(&value).unwrap(), "2regen");
    }

    #[test]
    fn test_truncation_not_rounding() {
        let renderer = DefaultValueRenderer::new(RendererConfig::regen())
            .unwrap()
            .with_metadata(regen_metadata())
            .unwrap();

        let value = Value::Amount(Amount::new(1_500_000, "uregen"));
        assert_eq!(renderer.format(&value).unwrap(), "1regen");
    }

    #[test]
    fn test_empty_input_both_directions() {
        let renderer = DefaultValueRenderer::new(RendererConfig::regen()).unwrap();
        assert_eq!(renderer.parse(""), Err(RenderError::EmptyInput));
        assert_eq!(
            renderer.format(&Value::Decimal(DecimalValue::new(""))),
            Err(RenderError::EmptyInput)
        );
    }

    #[test]
    fn test_letters_only_input() {
        let renderer = DefaultValueRenderer::new(RendererConfig::regen()).unwrap();
        assert_eq!(
            renderer.parse("abcdef"),
            Err(RenderError::NoDenominationFound)
        );
    }

    #[test]
    fn test_grouped_integer_reparses() {
        let renderer = DefaultValueRenderer::new(RendererConfig::regen()).unwrap();
        let rendered = renderer.format(&Value::Integer(1_234_567)).unwrap();
        assert_eq!(rendered, "1,234,567");
        assert_eq!(renderer.parse(&rendered), Ok(Value::Uint(1_234_567)));
    }

    #[test]
    fn test_shared_renderer_across_threads() {
        let renderer = Arc::new(
            DefaultValueRenderer::new(RendererConfig::regen())
                .unwrap()
                .with_metadata(regen_metadata())
                .unwrap(),
        );

        let handles: Vec<_> = (1..=4u128)
            .map(|n| {
                let renderer = Arc::clone(&renderer);
                std::thread::spawn(move || {
                    renderer
                        .format(&Value::Amount(Amount::new(n * 1_000_000, "uregen")))
                        .unwrap()
                })
            })
            .collect();

        let rendered: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(rendered, vec!["1regen", "2regen", "3regen", "4regen"]);
    }
}
