use rust_decimal::Decimal;

use crate::core::FieldErrors;
use crate::modules::distance_rates::models::{TaxReclaimableForm, TAX_CLAIMABLE_VALUE};
use crate::modules::policies::models::Rate;

/// Validate a submitted tax-reclaimable value against the rate being edited.
///
/// Returns per-field messages; an empty map means the submission is valid.
/// Checks, in order: value present, numeric format, non-negative, and not
/// exceeding the base rate amount (the reclaimable portion is at most 100%
/// of the rate). The upper bound is skipped when the base rate is absent or
/// zero — such a submission clears the stored percentage instead.
pub fn validate_tax_claimable_value(form: &TaxReclaimableForm, rate: &Rate) -> FieldErrors {
    let mut errors = FieldErrors::new();
    let raw = form.tax_claimable_value.trim();

    if raw.is_empty() {
        errors.insert(
            TAX_CLAIMABLE_VALUE.to_string(),
            "Please enter a tax reclaimable amount".to_string(),
        );
        return errors;
    }

    let value = match raw.parse::<Decimal>() {
        Ok(value) => value,
        Err(_) => {
            errors.insert(
                TAX_CLAIMABLE_VALUE.to_string(),
                "Please enter a valid amount".to_string(),
            );
            return errors;
        }
    };

    if value < Decimal::ZERO {
        errors.insert(
            TAX_CLAIMABLE_VALUE.to_string(),
            "The tax reclaimable amount cannot be negative".to_string(),
        );
        return errors;
    }

    if let Some(base) = rate.rate {
        if !base.is_zero() && value > base {
            errors.insert(
                TAX_CLAIMABLE_VALUE.to_string(),
                "The tax reclaimable amount cannot exceed the rate amount".to_string(),
            );
        }
    }

    errors
}
