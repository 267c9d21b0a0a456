use crate::errors::Result;
use crate::profiles::profiles_model::{Profile, ProfileRole};
use async_trait::async_trait;

/// Trait for reading user profiles from the upstream data source
#[async_trait]
pub trait ProfileRepositoryTrait: Send + Sync {
    async fn get_profile(&self, profile_id: &str) -> Result<Option<Profile>>;

    /// Profiles holding any of the given roles, ordered by full name.
    async fn list_by_roles(&self, roles: &[ProfileRole]) -> Result<Vec<Profile>>;
}
