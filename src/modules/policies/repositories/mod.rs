pub mod memory_policy_repository;
pub mod policy_repository;

pub use memory_policy_repository::InMemoryPolicyRepository;
pub use policy_repository::{MySqlPolicyRepository, PolicyRepository};
