// ============================================================================
// Renderer Configuration
// Digit grouping, recognized denomination shapes and lookup policy
// ============================================================================

use crate::numeric::{RenderError, RenderResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Digit Grouping
// ============================================================================

/// Locale grouping convention for rendering integers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GroupingConfig {
    /// Separator placed between digit groups (e.g. `,` in `1,234,567`)
    pub separator: char,
    /// Number of digits per group, counted from the right
    pub group_size: usize,
    /// Delimiter written between integer and fractional segments of a rendered decimal
    pub decimal_point: char,
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self {
            separator: ',',
            group_size: 3,
            decimal_point: '.',
        }
    }
}

impl GroupingConfig {
    pub fn validate(&self) -> RenderResult<()> {
        if self.group_size == 0 {
            return Err(RenderError::InvalidConfig(
                "group size must be positive".to_string(),
            ));
        }
        if self.separator == self.decimal_point {
            return Err(RenderError::InvalidConfig(
                "separator and decimal point must differ".to_string(),
            ));
        }
        if self.separator.is_ascii_digit() || self.decimal_point.is_ascii_digit() {
            return Err(RenderError::InvalidConfig(
                "separator and decimal point cannot be digits".to_string(),
            ));
        }
        // Parsing strips the separator, so a letter would corrupt denominations
        if self.separator.is_alphabetic() || self.decimal_point.is_alphabetic() {
            return Err(RenderError::InvalidConfig(
                "separator and decimal point cannot be letters".to_string(),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Denomination Shape
// ============================================================================

/// The family of denominations recognized as an amount suffix when parsing:
/// the bare base word plus each one-character size prefix followed by it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DenominationShape {
    /// Root word, e.g. `regen`
    pub base: String,
    /// Size prefixes, e.g. `m` and `u`
    pub prefixes: Vec<char>,
}

impl DenominationShape {
    pub fn new(base: impl Into<String>, prefixes: impl IntoIterator<Item = char>) -> Self {
        Self {
            base: base.into(),
            prefixes: prefixes.into_iter().collect(),
        }
    }

    /// True if `denom` is the base word or a prefixed variant of it.
    pub fn recognizes(&self, denom: &str) -> bool {
        match denom.strip_suffix(self.base.as_str()) {
            Some("") => true,
            Some(prefix) => {
                let mut chars = prefix.chars();
                matches!((chars.next(), chars.next()), (Some(c), None) if self.prefixes.contains(&c))
            },
            None => false,
        }
    }

    /// All recognized denominations, base word first.
    pub fn denominations(&self) -> Vec<String> {
        std::iter::once(self.base.clone())
            .chain(self.prefixes.iter().map(|p| format!("{}{}", p, self.base)))
            .collect()
    }

    pub fn validate(&self) -> RenderResult<()> {
        if self.base.is_empty() {
            return Err(RenderError::InvalidConfig(
                "denomination base cannot be empty".to_string(),
            ));
        }
        if !self.base.chars().all(char::is_alphabetic) {
            return Err(RenderError::InvalidConfig(format!(
                "denomination base {:?} must be alphabetic",
                self.base
            )));
        }
        if let Some(p) = self.prefixes.iter().find(|p| !p.is_alphabetic()) {
            return Err(RenderError::InvalidConfig(format!(
                "size prefix {:?} must be alphabetic",
                p
            )));
        }
        Ok(())
    }
}

// ============================================================================
// Unknown Denomination Policy
// ============================================================================

/// What the converter does when a denomination is missing from the metadata
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnknownDenominationPolicy {
    /// Fail with `UnknownDenomination`
    #[default]
    Reject,
    /// Treat the missing unit as exponent 0 (no rescaling)
    TreatAsBaseUnit,
}

// ============================================================================
// Complete Renderer Configuration
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RendererConfig {
    pub grouping: GroupingConfig,

    /// Amount suffixes recognized by the parser
    pub shape: DenominationShape,

    pub unknown_denomination: UnknownDenominationPolicy,
}

impl RendererConfig {
    /// Create a new configuration with the default grouping and a strict lookup policy
    pub fn new(shape: DenominationShape) -> Self {
        Self {
            grouping: GroupingConfig::default(),
            shape,
            unknown_denomination: UnknownDenominationPolicy::default(),
        }
    }

    /// Builder method: Set digit grouping
    pub fn with_grouping(mut self, grouping: GroupingConfig) -> Self {
        self.grouping = grouping;
        self
    }

    /// Builder method: Set the unknown denomination policy
    pub fn with_unknown_denomination(mut self, policy: UnknownDenominationPolicy) -> Self {
        self.unknown_denomination = policy;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> RenderResult<()> {
        self.grouping.validate()?;
        self.shape.validate()
    }
}

// ============================================================================
// Preset Configurations
// ============================================================================

impl RendererConfig {
    /// Regen deployment: `regen`, `mregen`, `uregen`
    pub fn regen() -> Self {
        Self::new(DenominationShape::new("regen", ['m', 'u']))
    }

    /// Same as `regen()` but missing units render without rescaling
    pub fn regen_lenient() -> Self {
        Self::regen().with_unknown_denomination(UnknownDenominationPolicy::TreatAsBaseUnit)
    }
}
