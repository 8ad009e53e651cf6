use rust_decimal::Decimal;

use crate::modules::policies::models::Rate;

/// Converts between the stored tax-reclaimable percentage and the monetary
/// value shown to (and entered by) the admin.
///
/// Stored form: a percentage of the base rate, 0-100.
/// Displayed form: `percentage * rate / 100`, a currency amount.
pub struct ReclaimableCalculator;

impl ReclaimableCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Monetary display value for a rate's reclaimable portion.
    ///
    /// Empty when the base rate or the stored percentage is absent or zero:
    /// there is nothing meaningful to show, and a zero base rate must not
    /// reach the division in the inverse transform.
    pub fn derive_display_value(&self, rate: &Rate) -> String {
        let base = match rate.rate {
            Some(base) if !base.is_zero() => base,
            _ => return String::new(),
        };
        let percentage = match rate.attributes.tax_claimable_percentage {
            Some(pct) if !pct.is_zero() => pct,
            _ => return String::new(),
        };

        let value = (percentage * base) / Decimal::ONE_HUNDRED;
        self.format_display(value, rate)
    }

    /// Percentage to store for a user-entered monetary value.
    ///
    /// `None` when the base rate is zero: the stored percentage is cleared
    /// rather than computed, so no division by zero can occur.
    pub fn to_stored_percentage(
        &self,
        entered_value: Decimal,
        base_rate: Decimal,
    ) -> Option<Decimal> {
        if base_rate.is_zero() {
            return None;
        }
        Some((entered_value * Decimal::ONE_HUNDRED) / base_rate)
    }

    /// Render an amount at the rate's display precision: rounded to one
    /// decimal digit beyond the currency scale, trailing zeros trimmed, but
    /// always at least one decimal digit.
    fn format_display(&self, value: Decimal, rate: &Rate) -> String {
        let currency = rate.currency_or_default();
        let rounded = currency.round_display(value).normalize();
        if rounded.scale() == 0 {
            format!("{rounded}.0")
        } else {
            rounded.to_string()
        }
    }
}

impl Default for ReclaimableCalculator {
    fn default() -> Self {
        Self::new()
    }
}
