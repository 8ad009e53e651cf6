use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::rate::Rate;
use crate::core::{AppError, Result};

/// A named grouping of distance rates sharing one unit of measure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomUnit {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub rates: BTreeMap<String, Rate>,
}

/// A workspace policy owning zero or more custom units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub custom_units: BTreeMap<String, CustomUnit>,
}

impl Policy {
    /// Store key for a policy record, `policy_<policyID>`
    pub fn storage_key(policy_id: &str) -> String {
        format!("policy_{policy_id}")
    }

    /// The custom unit addressed by rate edits: the first one present
    pub fn first_custom_unit(&self) -> Option<&CustomUnit> {
        self.custom_units.values().next()
    }

    /// Merge a batch of updated rates into the named custom unit.
    /// Each rate replaces the entry with the same ID; other rates in the
    /// unit are untouched.
    pub fn merge_rates(&mut self, unit_id: &str, rates: Vec<Rate>) -> Result<()> {
        let unit = self.custom_units.get_mut(unit_id).ok_or_else(|| {
            AppError::not_found(format!("Custom unit {unit_id} not found on policy {}", self.id))
        })?;

        for rate in rates {
            unit.rates.insert(rate.id.clone(), rate);
        }

        Ok(())
    }
}
