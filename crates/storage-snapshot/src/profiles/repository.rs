use std::sync::Arc;

use async_trait::async_trait;
use salesboard_core::profiles::{Profile, ProfileRepositoryTrait, ProfileRole};
use salesboard_core::Result;

use crate::snapshot::Snapshot;

pub struct ProfileRepository {
    snapshot: Arc<Snapshot>,
}

impl ProfileRepository {
    pub fn new(snapshot: Arc<Snapshot>) -> Self {
        ProfileRepository { snapshot }
    }
}

#[async_trait]
impl ProfileRepositoryTrait for ProfileRepository {
    async fn get_profile(&self, profile_id: &str) -> Result<Option<Profile>> {
        Ok(self
            .snapshot
            .profiles
            .iter()
            .find(|p| p.id == profile_id)
            .cloned())
    }

    async fn list_by_roles(&self, roles: &[ProfileRole]) -> Result<Vec<Profile>> {
        let mut profiles: Vec<Profile> = self
            .snapshot
            .profiles
            .iter()
            .filter(|p| roles.contains(&p.role))
            .cloned()
            .collect();
        profiles.sort_by(|a, b| a.full_name.cmp(&b.full_name));
        Ok(profiles)
    }
}
