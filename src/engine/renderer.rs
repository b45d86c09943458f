// ============================================================================
// Default Value Renderer
// Dispatches on value kind and ties converter, formatter and parser together
// ============================================================================

use crate::domain::{Amount, DecimalValue, RendererConfig, UnitMetadata, Value};
use crate::engine::converter::Converter;
use crate::engine::{formatter, parser};
use crate::interfaces::ValueRenderer;
use crate::numeric::{RenderError, RenderResult};
use rust_decimal::Decimal;
use std::any::Any;

/// Renderer bound to one configuration and, for amounts, one metadata snapshot
#[derive(Debug, Clone)]
pub struct DefaultValueRenderer {
    config: RendererConfig,

    /// Resolved metadata for the token family being rendered
    metadata: Option<UnitMetadata>,
}

impl DefaultValueRenderer {
    /// Create a renderer without metadata. Integers, decimals and parsing
    /// work immediately; amounts need `with_metadata` or `set_metadata`.
    ///
    /// # Errors
    /// `InvalidConfig` if the configuration does not validate.
    pub fn new(config: RendererConfig) -> RenderResult<Self> {
        config.validate()?;
        tracing::debug!(
            base = %config.shape.base,
            policy = ?config.unknown_denomination,
            "Created value renderer"
        );
        Ok(Self {
            config,
            metadata: None,
        })
    }

    /// Builder method: Attach metadata
    pub fn with_metadata(mut self, metadata: UnitMetadata) -> RenderResult<Self> {
        self.set_metadata(metadata)?;
        Ok(self)
    }

    /// Replace the metadata snapshot
    pub fn set_metadata(&mut self, metadata: UnitMetadata) -> RenderResult<()> {
        metadata.validate()?;
        tracing::debug!(
            base = %metadata.base,
            display = %metadata.display,
            "Renderer metadata set"
        );
        self.metadata = Some(metadata);
        Ok(())
    }

    pub fn metadata(&self) -> Option<&UnitMetadata> {
        self.metadata.as_ref()
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    fn converter(&self) -> RenderResult<Converter<'_>> {
        let metadata = self.metadata.as_ref().ok_or(RenderError::MissingMetadata)?;
        Ok(Converter::new(metadata, self.config.unknown_denomination))
    }

    /// Amount expressed in the display unit, without formatting
    pub fn compute_amount(&self, amount: &Amount) -> RenderResult<i64> {
        self.converter()?.display_amount(amount)
    }

    /// Render an amount in the display unit: grouped number immediately
    /// followed by the display denomination, e.g. `1,000regen`.
    pub fn format_amount(&self, amount: &Amount) -> RenderResult<String> {
        let converter = self.converter()?;
        let display_amount = converter.display_amount(amount)?;
        let mut out = formatter::format_integer(display_amount, &self.config.grouping);
        out.push_str(converter.display());
        Ok(out)
    }

    pub fn format_decimal(&self, value: &DecimalValue) -> RenderResult<String> {
        formatter::format_decimal(value, &self.config.grouping)
    }

    /// Format a value whose concrete type is only known at runtime.
    ///
    /// Accepts `Value`, `i64`, `u64`, `DecimalValue`, `Amount` and
    /// `rust_decimal::Decimal`.
    ///
    /// # Errors
    /// `UnsupportedKind` for any other type, otherwise as `format`.
    pub fn format_any(&self, value: &dyn Any) -> RenderResult<String> {
        if let Some(v) = value.downcast_ref::<Value>() {
            self.format(v)
        } else if let Some(&v) = value.downcast_ref::<i64>() {
            self.format(&Value::Integer(v))
        } else if let Some(&v) = value.downcast_ref::<u64>() {
            self.format(&Value::Uint(v))
        } else if let Some(v) = value.downcast_ref::<DecimalValue>() {
            self.format_decimal(v)
        } else if let Some(&v) = value.downcast_ref::<Decimal>() {
            self.format_decimal(&DecimalValue::from_decimal(v))
        } else if let Some(v) = value.downcast_ref::<Amount>() {
            self.format_amount(v)
        } else {
            Err(RenderError::UnsupportedKind(format!("{:?}", value.type_id())))
        }
    }
}

impl ValueRenderer for DefaultValueRenderer {
    fn format(&self, value: &Value) -> RenderResult<String> {
        tracing::trace!(kind = value.kind(), "Formatting value");
        match value {
            Value::Integer(v) => Ok(formatter::format_integer(*v, &self.config.grouping)),
            Value::Uint(v) => Ok(formatter::format_unsigned(
                u128::from(*v),
                &self.config.grouping,
            )),
            Value::Decimal(v) => self.format_decimal(v),
            Value::Amount(v) => self.format_amount(v),
        }
    }

    fn parse(&self, input: &str) -> RenderResult<Value> {
        parser::parse(input, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DenomUnit, GroupingConfig};
    use crate::engine::RendererBuilder;

    fn renderer() -> DefaultValueRenderer {
        DefaultValueRenderer::new(RendererConfig::regen())
            .unwrap()
            .with_metadata(UnitMetadata::regen())
            .unwrap()
    }

    #[test]
    fn test_format_integer() {
        let r = renderer();
        assert_eq!(r.format(&Value::Integer(1_234_567)).unwrap(), "1,234,567");
        assert_eq!(r.format(&Value::Integer(999)).unwrap(), "999");
        assert_eq!(r.format(&Value::Integer(0)).unwrap(), "0");
        assert_eq!(r.format(&Value::Uint(1_000)).unwrap(), "1,000");
    }

    #[test]
    fn test_format_decimal() {
        let r = renderer();
        let value = Value::Decimal(DecimalValue::new("1234567.89"));
        assert_eq!(r.format(&value).unwrap(), "1,234,567.89");
    }

    #[test]
    fn test_format_decimal_errors() {
        let r = renderer();
        assert_eq!(
            r.format(&Value::Decimal(DecimalValue::new(""))),
            Err(RenderError::EmptyInput)
        );
        assert!(matches!(
            r.format(&Value::Decimal(DecimalValue::new("1.2.3"))),
            Err(RenderError::MalformedDecimal(_))
        ));
    }

    #[test]
    fn test_format_amount() {
        let r = renderer();
        let amount = Value::Amount(Amount::new(1_000_000, "uregen"));
        assert_eq!(r.format(&amount).unwrap(), "1regen");

        let amount = Value::Amount(Amount::new(2_500, "mregen"));
        assert_eq!(r.format(&amount).unwrap(), "2regen");

        let amount = Value::Amount(Amount::new(1_234_567_000_000, "uregen"));
        assert_eq!(r.format(&amount).unwrap(), "1,234,567regen");
    }

    #[test]
    fn test_format_amount_without_metadata() {
        let r = DefaultValueRenderer::new(RendererConfig::regen()).unwrap();
        assert_eq!(
            r.format(&Value::Amount(Amount::new(1, "regen"))),
            Err(RenderError::MissingMetadata)
        );
        assert!(r.metadata().is_none());
    }

    #[test]
    fn test_format_amount_unknown_denomination() {
        let r = renderer();
        assert_eq!(
            r.format(&Value::Amount(Amount::new(1, "uatom"))),
            Err(RenderError::UnknownDenomination("uatom".to_string()))
        );

        let lenient = DefaultValueRenderer::new(RendererConfig::regen_lenient())
            .unwrap()
            .with_metadata(UnitMetadata::regen())
            .unwrap();
        assert_eq!(
            lenient.format(&Value::Amount(Amount::new(1_000, "uatom"))),
            Ok("1,000regen".to_string())
        );
    }

    #[test]
    fn test_format_amount_overflow() {
        let meta = UnitMetadata::new("regen", "uregen")
            .with_unit(DenomUnit::new("regen", 0))
            .with_unit(DenomUnit::new("uregen", 6));
        let r = DefaultValueRenderer::new(RendererConfig::regen())
            .unwrap()
            .with_metadata(meta)
            .unwrap();
        assert_eq!(
            r.format(&Value::Amount(Amount::new(u64::MAX as u128, "regen"))),
            Err(RenderError::Overflow)
        );
    }

    #[test]
    fn test_set_metadata_validates() {
        let mut r = renderer();
        let invalid = UnitMetadata::new("uatom", "atom");
        assert!(r.set_metadata(invalid).is_err());
        assert_eq!(r.metadata().map(|m| m.display.as_str()), Some("regen"));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = RendererConfig::regen().with_grouping(GroupingConfig {
            group_size: 0,
            ..GroupingConfig::default()
        });
        assert!(matches!(
            DefaultValueRenderer::new(config),
            Err(RenderError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_format_any() {
        let r = renderer();
        assert_eq!(r.format_any(&1_234_567i64).unwrap(), "1,234,567");
        assert_eq!(r.format_any(&1_000u64).unwrap(), "1,000");
        assert_eq!(
            r.format_any(&Decimal::new(123456789, 2)).unwrap(),
            "1,234,567.89"
        );
        assert_eq!(
            r.format_any(&Amount::new(1_000_000, "uregen")).unwrap(),
            "1regen"
        );
        assert_eq!(r.format_any(&Value::Integer(5)).unwrap(), "5");
    }

    #[test]
    fn test_comma_decimal_point_formats_canonical_decimals() {
        let r = RendererBuilder::from_config(RendererConfig::regen())
            .with_grouping(GroupingConfig {
                separator: '.',
                group_size: 3,
                decimal_point: ',',
            })
            .build()
            .unwrap();

        assert_eq!(
            r.format_any(&Decimal::new(123456789, 2)).unwrap(),
            "1.234.567,89"
        );
        assert_eq!(
            r.format(&Value::Decimal(DecimalValue::new("1234567.89"))).unwrap(),
            "1.234.567,89"
        );
    }

    #[test]
    fn test_format_any_unsupported() {
        let r = renderer();
        assert!(matches!(
            r.format_any(&"1000"),
            Err(RenderError::UnsupportedKind(_))
        ));
        assert!(matches!(
            r.format_any(&1.5f64),
            Err(RenderError::UnsupportedKind(_))
        ));
    }

    #[test]
    fn test_parse_then_format_amount() {
        let r = renderer();
        let parsed = r.parse("1000000uregen").unwrap();
        assert_eq!(parsed, Value::Amount(Amount::new(1_000_000, "uregen")));
        assert_eq!(r.format(&parsed).unwrap(), "1regen");
    }

    #[test]
    fn test_reparse_integer() {
        let r = renderer();
        assert_eq!(r.reparse(&Value::Uint(1_234_567)), Ok(Value::Uint(1_234_567)));
    }
}
