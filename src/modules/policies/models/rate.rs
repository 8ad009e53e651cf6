use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::Currency;

/// Tax attributes attached to a distance rate.
///
/// Updates replace the whole attributes object on the owning rate, so fields
/// added here ride along untouched through edits that target a single field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateAttributes {
    /// Portion of the rate that is tax reclaimable, as a percentage (0-100).
    /// Absent when no reclaimable portion has been configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_claimable_percentage: Option<Decimal>,

    /// Reference to an externally managed tax rate, if any
    #[serde(rename = "taxRateExternalID", skip_serializing_if = "Option::is_none")]
    pub tax_rate_external_id: Option<String>,
}

/// One distance-based expense rate within a custom unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rate {
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Monetary amount per distance unit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,

    #[serde(default = "default_enabled")]
    pub enabled: bool,

    #[serde(default)]
    pub attributes: RateAttributes,
}

fn default_enabled() -> bool {
    true
}

impl Rate {
    /// Currency for this rate, falling back to the application default
    pub fn currency_or_default(&self) -> Currency {
        self.currency.unwrap_or_default()
    }
}
