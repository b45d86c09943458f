// ============================================================================
// Metadata Provider Interface
// Source of unit metadata, keyed by denomination name
// ============================================================================

use crate::domain::UnitMetadata;
use crate::numeric::{RenderError, RenderResult};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Supplies unit metadata for a denomination.
///
/// Remote registries implement this outside the crate; any timeout or retry
/// policy belongs to them.
pub trait MetadataProvider: Send + Sync {
    /// Metadata for the token family that `denom` belongs to
    fn denom_metadata(&self, denom: &str) -> RenderResult<UnitMetadata>;
}

/// Thread-safe in-memory registry, indexed by base, every unit denom and every alias
#[derive(Debug, Default)]
pub struct InMemoryMetadataProvider {
    index: RwLock<HashMap<String, Arc<UnitMetadata>>>,
}

impl InMemoryMetadataProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and register metadata. A later registration wins for any
    /// name it shares with an earlier one.
    pub fn register(&self, metadata: UnitMetadata) -> RenderResult<()> {
        metadata.validate()?;

        let metadata = Arc::new(metadata);
        let mut index = self.index.write();
        if !metadata.base.is_empty() {
            index.insert(metadata.base.clone(), Arc::clone(&metadata));
        }
        for name in metadata.names() {
            index.insert(name.to_string(), Arc::clone(&metadata));
        }

        tracing::debug!(
            base = %metadata.base,
            display = %metadata.display,
            units = metadata.denom_units.len(),
            "Registered unit metadata"
        );
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.index.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.read().is_empty()
    }
}

impl MetadataProvider for InMemoryMetadataProvider {
    fn denom_metadata(&self, denom: &str) -> RenderResult<UnitMetadata> {
        self.index
            .read()
            .get(denom)
            .map(|m| m.as_ref().clone())
            .ok_or_else(|| RenderError::MetadataNotFound(denom.to_string()))
    }
}
