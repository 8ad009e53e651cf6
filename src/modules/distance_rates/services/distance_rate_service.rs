use std::sync::Arc;

use rust_decimal::Decimal;

use crate::core::{AppError, Result};
use crate::modules::distance_rates::models::{TaxReclaimableForm, TaxReclaimableView};
use crate::modules::distance_rates::services::rate_validator::validate_tax_claimable_value;
use crate::modules::distance_rates::services::reclaimable_calculator::ReclaimableCalculator;
use crate::modules::policies::models::{CustomUnit, Policy, Rate};
use crate::modules::policies::repositories::PolicyRepository;

/// Business logic for editing the tax-reclaimable portion of distance rates.
///
/// Operates on the snapshot read at the start of each call; concurrent store
/// changes are not reconciled.
pub struct DistanceRateService {
    policy_repo: Arc<dyn PolicyRepository>,
    calculator: ReclaimableCalculator,
}

impl DistanceRateService {
    pub fn new(policy_repo: Arc<dyn PolicyRepository>) -> Self {
        Self {
            policy_repo,
            calculator: ReclaimableCalculator::new(),
        }
    }

    /// Current tax-reclaimable state of one rate, ready for display
    pub async fn get_tax_reclaimable(
        &self,
        policy_id: &str,
        rate_id: &str,
    ) -> Result<TaxReclaimableView> {
        let policy = self.load_policy(policy_id).await?;
        let (unit, rate) = Self::find_rate(&policy, rate_id)?;

        Ok(TaxReclaimableView {
            policy_id: policy.id.clone(),
            unit_id: unit.id.clone(),
            rate_id: rate.id.clone(),
            value: self.calculator.derive_display_value(rate),
            currency: rate.currency_or_default(),
        })
    }

    /// Apply a submitted tax-reclaimable value to one rate.
    ///
    /// Validates, converts the entered amount to a stored percentage, merges
    /// it into a copy of the rate's attributes (other attributes preserved),
    /// and dispatches the updated rate as a single-element batch.
    pub async fn submit_tax_reclaimable(
        &self,
        policy_id: &str,
        rate_id: &str,
        form: TaxReclaimableForm,
    ) -> Result<Rate> {
        let policy = self.load_policy(policy_id).await?;
        let (unit, rate) = Self::find_rate(&policy, rate_id)?;

        let errors = validate_tax_claimable_value(&form, rate);
        if !errors.is_empty() {
            return Err(AppError::form(errors));
        }

        let entered: Decimal = form
            .tax_claimable_value
            .trim()
            .parse()
            .map_err(|_| AppError::validation("Invalid tax reclaimable amount"))?;

        let stored = rate
            .rate
            .and_then(|base| self.calculator.to_stored_percentage(entered, base));

        let mut updated = rate.clone();
        updated.attributes.tax_claimable_percentage = stored;

        let unit_id = unit.id.clone();
        self.policy_repo
            .save_rates(policy_id, &unit_id, vec![updated.clone()])
            .await?;

        tracing::info!(policy_id, rate_id, "updated tax reclaimable percentage");
        Ok(updated)
    }

    async fn load_policy(&self, policy_id: &str) -> Result<Policy> {
        self.policy_repo
            .get_policy(policy_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Policy {policy_id} not found")))
    }

    /// Resolve the rate being edited: the first custom unit on the policy,
    /// then the rate by ID. Missing entities are a not-found outcome.
    fn find_rate<'a>(policy: &'a Policy, rate_id: &str) -> Result<(&'a CustomUnit, &'a Rate)> {
        let unit = policy.first_custom_unit().ok_or_else(|| {
            AppError::not_found(format!("Policy {} has no custom unit", policy.id))
        })?;

        let rate = unit.rates.get(rate_id).ok_or_else(|| {
            AppError::not_found(format!("Rate {rate_id} not found on unit {}", unit.id))
        })?;

        Ok((unit, rate))
    }
}
