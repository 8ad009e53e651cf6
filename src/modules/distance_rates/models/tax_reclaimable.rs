use serde::{Deserialize, Serialize};

use crate::core::Currency;

/// Form field name for the tax reclaimable amount input
pub const TAX_CLAIMABLE_VALUE: &str = "taxClaimableValue";

/// Values submitted from the tax-reclaimable edit form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxReclaimableForm {
    /// Raw user-entered monetary value, as typed
    #[serde(default)]
    pub tax_claimable_value: String,
}

/// Current tax-reclaimable state of one distance rate, ready for display
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxReclaimableView {
    pub policy_id: String,
    pub unit_id: String,
    pub rate_id: String,
    /// Monetary display value, empty when no reclaimable portion is set
    /// or the base rate is zero
    pub value: String,
    pub currency: Currency,
}
