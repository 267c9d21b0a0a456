//! Row model for the `profiles` table.

use salesboard_core::profiles::{Profile, ProfileRole};
use serde::{Deserialize, Serialize};

use crate::errors::StorageError;

/// Profile row as exported from the upstream database
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProfileRow {
    pub id: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub role: String,
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub utm_code: Option<String>,
}

fn parse_role(raw: &str) -> Option<ProfileRole> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "admin" => Some(ProfileRole::Admin),
        "sales" => Some(ProfileRole::Sales),
        "client" => Some(ProfileRole::Client),
        _ => None,
    }
}

impl ProfileRow {
    pub fn into_domain(self) -> Result<Profile, StorageError> {
        let role = parse_role(&self.role).ok_or_else(|| StorageError::InvalidRow {
            table: "profiles",
            id: self.id.clone(),
            reason: format!("unknown role '{}'", self.role),
        })?;
        Ok(Profile {
            id: self.id,
            full_name: self.full_name,
            email: self.email,
            role,
            client_id: self.client_id,
            utm_code: self.utm_code,
        })
    }
}
