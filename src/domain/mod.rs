// ============================================================================
// Domain Models Module
// Value kinds, unit metadata and renderer configuration
// ============================================================================

pub mod config;
pub mod metadata;
pub mod value;

pub use config::{DenominationShape, GroupingConfig, RendererConfig, UnknownDenominationPolicy};
pub use metadata::{DenomUnit, UnitMetadata};
pub use value::{Amount, DecimalValue, Value};
