use async_trait::async_trait;
use chrono::Utc;
use sqlx::{MySqlPool, Row};

use crate::core::{AppError, Result};
use crate::modules::policies::models::{Policy, Rate};

/// Read/write access to policy records.
///
/// The concrete store sits behind this trait so the rate-edit flow can be
/// exercised against an in-memory store in tests.
#[async_trait]
pub trait PolicyRepository: Send + Sync {
    /// Fetch the current snapshot of a policy, if present
    async fn get_policy(&self, policy_id: &str) -> Result<Option<Policy>>;

    /// Persist a batch of updated rates into one custom unit of a policy
    async fn save_rates(&self, policy_id: &str, unit_id: &str, rates: Vec<Rate>) -> Result<()>;
}

/// MySQL-backed policy store. Policies live in a key-value table keyed by
/// `policy_<policyID>`, with the serialized policy document as the value.
pub struct MySqlPolicyRepository {
    pool: MySqlPool,
}

impl MySqlPolicyRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PolicyRepository for MySqlPolicyRepository {
    async fn get_policy(&self, policy_id: &str) -> Result<Option<Policy>> {
        let row = sqlx::query("SELECT value FROM policy_store WHERE store_key = ?")
            .bind(Policy::storage_key(policy_id))
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => {
                let raw: String = row.try_get("value")?;
                let policy = serde_json::from_str(&raw)?;
                Ok(Some(policy))
            }
            None => Ok(None),
        }
    }

    async fn save_rates(&self, policy_id: &str, unit_id: &str, rates: Vec<Rate>) -> Result<()> {
        let key = Policy::storage_key(policy_id);
        let mut tx = self.pool.begin().await?;

        // Row lock so the read-modify-write below applies the batch atomically
        let row = sqlx::query("SELECT value FROM policy_store WHERE store_key = ? FOR UPDATE")
            .bind(&key)
            .fetch_optional(&mut *tx)
            .await?;

        let raw: String = match row {
            Some(row) => row.try_get("value")?,
            None => {
                return Err(AppError::not_found(format!("Policy {policy_id} not found")));
            }
        };

        let mut policy: Policy = serde_json::from_str(&raw)?;
        let updated = rates.len();
        policy.merge_rates(unit_id, rates)?;

        sqlx::query("UPDATE policy_store SET value = ?, updated_at = ? WHERE store_key = ?")
            .bind(serde_json::to_string(&policy)?)
            .bind(Utc::now().naive_utc())
            .bind(&key)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(policy_id, unit_id, updated, "saved distance rate batch");
        Ok(())
    }
}
