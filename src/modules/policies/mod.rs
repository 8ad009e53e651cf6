pub mod models;
pub mod repositories;

pub use models::{CustomUnit, Policy, Rate, RateAttributes};
pub use repositories::{InMemoryPolicyRepository, MySqlPolicyRepository, PolicyRepository};
