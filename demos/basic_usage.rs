// ============================================================================
// Basic Usage Example
// ============================================================================

use value_renderer::prelude::*;

fn main() -> Result<(), RenderError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Value Renderer Example ===\n");

    let provider = InMemoryMetadataProvider::new();
    provider.register(UnitMetadata::regen())?;

    let renderer = create_from_provider(RendererConfig::regen(), &provider, "uregen")?;
    println!("Created renderer for the regen token family\n");

    // Amounts are converted into the display unit
    println!("Formatting amounts...");
    for amount in [
        Amount::new(1_000_000, "uregen"),
        Amount::new(2_500, "mregen"),
        Amount::new(1_234_567_000_000, "uregen"),
    ] {
        let rendered = renderer.format(&Value::Amount(amount.clone()))?;
        println!("  {:>22} => {}", amount.to_string(), rendered);
    }

    // Plain numbers only get digit grouping
    println!("\nFormatting numbers...");
    for value in [
        Value::Integer(1_234_567),
        Value::Decimal(DecimalValue::new("1234567.89")),
    ] {
        println!("  {:?} => {}", value, renderer.format(&value)?);
    }

    // User input back into typed values
    println!("\nParsing input...");
    for input in ["1,000,000uregen", "5mregen", "1,234,567", "abcdef", "12uatom"] {
        match renderer.parse(input) {
            Ok(value) => println!("  {:>16} => {:?}", input, value),
            Err(err) => println!("  {:>16} => error: {}", input, err),
        }
    }

    Ok(())
}
