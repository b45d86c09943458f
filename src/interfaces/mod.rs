// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod metadata_provider;
mod value_renderer;

pub use metadata_provider::{InMemoryMetadataProvider, MetadataProvider};
pub use value_renderer::ValueRenderer;
