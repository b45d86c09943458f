// ============================================================================
// Renderer Factory
// Creates renderers with metadata resolved from a provider
// ============================================================================

use crate::domain::{
    DenominationShape, GroupingConfig, RendererConfig, UnitMetadata, UnknownDenominationPolicy,
};
use crate::engine::DefaultValueRenderer;
use crate::interfaces::MetadataProvider;
use crate::numeric::RenderResult;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a renderer for the token family `denom` belongs to
///
/// # Arguments
/// * `config` - Renderer configuration
/// * `provider` - Metadata source, queried once by denomination name
/// * `denom` - Any denomination of the family (base, display or prefixed unit)
///
/// # Example
/// ```
/// use value_renderer::prelude::*;
///
/// let provider = InMemoryMetadataProvider::new();
/// provider.register(UnitMetadata::regen()).unwrap();
///
/// let renderer = create_from_provider(RendererConfig::regen(), &provider, "uregen").unwrap();
/// let value = Value::Amount(Amount::new(1_000_000, "uregen"));
/// assert_eq!(renderer.format(&value).unwrap(), "1regen");
/// ```
pub fn create_from_provider(
    config: RendererConfig,
    provider: &dyn MetadataProvider,
    denom: &str,
) -> RenderResult<DefaultValueRenderer> {
    let metadata = provider.denom_metadata(denom)?;
    DefaultValueRenderer::new(config)?.with_metadata(metadata)
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating renderers with fluent API
///
/// # Example
/// ```
/// use value_renderer::prelude::*;
///
/// let renderer = RendererBuilder::new("regen", ['m', 'u'])
///     .with_metadata(UnitMetadata::regen())
///     .build()
///     .unwrap();
/// assert_eq!(renderer.format(&Value::Integer(1234567)).unwrap(), "1,234,567");
/// ```
#[derive(Debug, Clone)]
pub struct RendererBuilder {
    config: RendererConfig,
    metadata: Option<UnitMetadata>,
}

impl RendererBuilder {
    /// Create a new builder recognizing `base` and its prefixed variants
    pub fn new(base: impl Into<String>, prefixes: impl IntoIterator<Item = char>) -> Self {
        Self::from_config(RendererConfig::new(DenominationShape::new(base, prefixes)))
    }

    pub fn from_config(config: RendererConfig) -> Self {
        Self {
            config,
            metadata: None,
        }
    }

    /// Set digit grouping
    pub fn with_grouping(mut self, grouping: GroupingConfig) -> Self {
        self.config.grouping = grouping;
        self
    }

    /// Render units missing from the metadata without rescaling
    pub fn treat_unknown_as_base_unit(mut self) -> Self {
        self.config.unknown_denomination = UnknownDenominationPolicy::TreatAsBaseUnit;
        self
    }

    /// Use metadata already at hand
    pub fn with_metadata(mut self, metadata: UnitMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Resolve metadata for `denom` from a provider
    pub fn with_provider(
        mut self,
        provider: &dyn MetadataProvider,
        denom: &str,
    ) -> RenderResult<Self> {
        self.metadata = Some(provider.denom_metadata(denom)?);
        Ok(self)
    }

    /// Build the renderer
    pub fn build(self) -> RenderResult<DefaultValueRenderer> {
        let renderer = DefaultValueRenderer::new(self.config)?;
        match self.metadata {
            Some(metadata) => renderer.with_metadata(metadata),
            None => Ok(renderer),
        }
    }
}
