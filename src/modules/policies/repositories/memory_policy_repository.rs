use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use super::policy_repository::PolicyRepository;
use crate::core::{AppError, Result};
use crate::modules::policies::models::{Policy, Rate};

/// In-memory policy store, keyed like the persistent one.
/// Stands in for the MySQL store in tests and local experiments.
#[derive(Default)]
pub struct InMemoryPolicyRepository {
    policies: RwLock<HashMap<String, Policy>>,
}

impl InMemoryPolicyRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with a policy snapshot
    pub fn insert(&self, policy: Policy) {
        let key = Policy::storage_key(&policy.id);
        self.policies
            .write()
            .expect("policy store lock poisoned")
            .insert(key, policy);
    }
}

#[async_trait]
impl PolicyRepository for InMemoryPolicyRepository {
    async fn get_policy(&self, policy_id: &str) -> Result<Option<Policy>> {
        let policies = self.policies.read().expect("policy store lock poisoned");
        Ok(policies.get(&Policy::storage_key(policy_id)).cloned())
    }

    async fn save_rates(&self, policy_id: &str, unit_id: &str, rates: Vec<Rate>) -> Result<()> {
        let mut policies = self.policies.write().expect("policy store lock poisoned");
        let policy = policies
            .get_mut(&Policy::storage_key(policy_id))
            .ok_or_else(|| AppError::not_found(format!("Policy {policy_id} not found")))?;

        policy.merge_rates(unit_id, rates)
    }
}
