// ============================================================================
// Denomination Converter
// Rescales an integer amount between two units of one token family
// ============================================================================

use crate::domain::{Amount, UnitMetadata, UnknownDenominationPolicy};
use crate::numeric::{checked_pow10, RenderError, RenderResult};

/// Rescale `amount` from a unit with exponent `source_exp` to one with
/// exponent `target_exp`.
///
/// A coarser target truncates toward zero (`1_500_000` at exponent 6 is `1`
/// at exponent 0); a finer target multiplies exactly. The result must fit
/// in an i64.
///
/// # Errors
/// Returns `Overflow` if the rescaled amount exceeds `i64::MAX`.
pub fn rescale(amount: u128, source_exp: u32, target_exp: u32) -> RenderResult<i64> {
    let scaled = if target_exp < source_exp {
        // No u128 survives a division by more than 10^38
        match checked_pow10(source_exp - target_exp) {
            Some(factor) => amount / factor,
            None => 0,
        }
    } else if target_exp > source_exp {
        if amount == 0 {
            0
        } else {
            checked_pow10(target_exp - source_exp)
                .and_then(|factor| amount.checked_mul(factor))
                .ok_or(RenderError::Overflow)?
        }
    } else {
        amount
    };

    i64::try_from(scaled).map_err(|_| RenderError::Overflow)
}

/// Converts amounts into the display unit of one metadata snapshot
#[derive(Debug, Clone, Copy)]
pub struct Converter<'a> {
    metadata: &'a UnitMetadata,
    policy: UnknownDenominationPolicy,
}

impl<'a> Converter<'a> {
    pub fn new(metadata: &'a UnitMetadata, policy: UnknownDenominationPolicy) -> Self {
        Self { metadata, policy }
    }

    /// Name of the unit amounts are converted into
    pub fn display(&self) -> &'a str {
        &self.metadata.display
    }

    fn exponent(&self, denom: &str) -> RenderResult<u32> {
        match (self.metadata.exponent_of(denom), self.policy) {
            (Some(exp), _) => Ok(exp),
            (None, UnknownDenominationPolicy::TreatAsBaseUnit) => {
                tracing::warn!(
                    denom,
                    display = %self.metadata.display,
                    "Denomination missing from unit metadata, treating as exponent 0"
                );
                Ok(0)
            },
            (None, UnknownDenominationPolicy::Reject) => {
                Err(RenderError::UnknownDenomination(denom.to_string()))
            },
        }
    }

    /// Amount expressed in the metadata's display unit
    ///
    /// # Errors
    /// `UnknownDenomination` under the strict policy, `Overflow` if the
    /// result does not fit in an i64.
    pub fn compute_amount(&self, amount: u128, denom: &str) -> RenderResult<i64> {
        let source_exp = self.exponent(denom)?;
        let display_exp = self.exponent(&self.metadata.display)?;

        tracing::trace!(
            amount,
            denom,
            display = %self.metadata.display,
            source_exp,
            display_exp,
            delta = i64::from(display_exp) - i64::from(source_exp),
            "Rescaling amount"
        );

        rescale(amount, source_exp, display_exp)
    }

    /// Convenience wrapper over `compute_amount` for an `Amount`
    pub fn display_amount(&self, amount: &Amount) -> RenderResult<i64> {
        self.compute_amount(amount.amount, &amount.denom)
    }
}
