// ============================================================================
// Engine Module
// Conversion, formatting and parsing of denominated values
// ============================================================================

mod renderer;

pub mod converter;
pub mod factory;
pub mod formatter;
pub mod parser;

pub use converter::{rescale, Converter};
pub use factory::{create_from_provider, RendererBuilder};
pub use renderer::DefaultValueRenderer;
