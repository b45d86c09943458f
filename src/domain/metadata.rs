// ============================================================================
// Unit Metadata
// Denomination units, their exponents and the preferred display unit
// ============================================================================

use crate::numeric::{RenderError, RenderResult};
use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One denomination of a token family, e.g. `uregen` with exponent 6.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DenomUnit {
    pub denom: String,
    pub exponent: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub aliases: Vec<String>,
}

impl DenomUnit {
    pub fn new(denom: impl Into<String>, exponent: u32) -> Self {
        Self {
            denom: denom.into(),
            exponent,
            aliases: Vec::new(),
        }
    }

    /// Builder method: Add an alias
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// True if `name` is this unit's denom or one of its aliases.
    pub fn matches(&self, name: &str) -> bool {
        self.denom == name || self.aliases.iter().any(|a| a == name)
    }
}

/// Externally supplied metadata for a token family. Read-only to the renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnitMetadata {
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    pub denom_units: Vec<DenomUnit>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub base: String,
    pub display: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub symbol: String,
}

impl UnitMetadata {
    /// Create metadata with required parameters
    pub fn new(base: impl Into<String>, display: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            display: display.into(),
            ..Self::default()
        }
    }

    /// Builder method: Add a denomination unit
    pub fn with_unit(mut self, unit: DenomUnit) -> Self {
        self.denom_units.push(unit);
        self
    }

    /// Builder method: Set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder method: Set name and symbol
    pub fn with_name(mut self, name: impl Into<String>, symbol: impl Into<String>) -> Self {
        self.name = name.into();
        self.symbol = symbol.into();
        self
    }

    /// Find the unit whose denom or alias equals `name`.
    pub fn unit(&self, name: &str) -> Option<&DenomUnit> {
        self.denom_units.iter().find(|u| u.matches(name))
    }

    /// Exponent of `name`, if it is a known unit.
    pub fn exponent_of(&self, name: &str) -> Option<u32> {
        self.unit(name).map(|u| u.exponent)
    }

    /// Every name (denoms and aliases) this metadata answers to.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.denom_units.iter().flat_map(|u| {
            std::iter::once(u.denom.as_str()).chain(u.aliases.iter().map(String::as_str))
        })
    }

    /// Validate the metadata
    pub fn validate(&self) -> RenderResult<()> {
        if self.display.is_empty() {
            return Err(RenderError::InvalidMetadata(
                "display unit cannot be empty".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for name in self.names() {
            if name.is_empty() {
                return Err(RenderError::InvalidMetadata(
                    "denomination cannot be empty".to_string(),
                ));
            }
            if !seen.insert(name) {
                return Err(RenderError::InvalidMetadata(format!(
                    "duplicate denomination {:?}",
                    name
                )));
            }
        }

        if self.unit(&self.display).is_none() {
            return Err(RenderError::InvalidMetadata(format!(
                "display unit {:?} is not a denomination unit",
                self.display
            )));
        }

        if !self.base.is_empty() && self.unit(&self.base).is_none() {
            return Err(RenderError::InvalidMetadata(format!(
                "base unit {:?} is not a denomination unit",
                self.base
            )));
        }

        Ok(())
    }

    /// Load bank-module style denom metadata from JSON and validate it.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> RenderResult<Self> {
        let metadata: Self =
            serde_json::from_str(json).map_err(|e| RenderError::InvalidMetadata(e.to_string()))?;
        metadata.validate()?;
        Ok(metadata)
    }
}

// ============================================================================
// Preset Metadata
// ============================================================================

impl UnitMetadata {
    /// Regen token family: `uregen` (6), `mregen` (3), `regen` (0), displayed as `regen`.
    pub fn regen() -> Self {
        Self::new("uregen", "regen")
            .with_description("The native staking token of Regen Network.")
            .with_name("Regen", "REGEN")
            .with_unit(DenomUnit::new("regen", 0))
            .with_unit(DenomUnit::new("uregen", 6).with_alias("microregen"))
            .with_unit(DenomUnit::new("mregen", 3).with_alias("milliregen"))
    }
}
