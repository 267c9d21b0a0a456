//! Profile domain models.

use serde::{Deserialize, Serialize};

/// Role carried by a user profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileRole {
    Admin,
    Sales,
    Client,
}

/// Domain model representing a dashboard user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub role: ProfileRole,
    pub client_id: Option<String>,
    pub utm_code: Option<String>,
}

impl Profile {
    pub fn is_admin(&self) -> bool {
        self.role == ProfileRole::Admin
    }

    /// Name shown on rankings: full name, then email, then a generic label.
    pub fn display_name(&self) -> String {
        self.full_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .or_else(|| self.email.as_deref().filter(|e| !e.trim().is_empty()))
            .unwrap_or("Salesperson")
            .to_string()
    }

    /// Resolves which salesperson a goals view is scoped to.
    ///
    /// An explicit selection wins. Otherwise non-admins see their own numbers
    /// and admins get the aggregate view (`None`).
    pub fn goal_scope(&self, selected_salesperson_id: Option<&str>) -> Option<String> {
        match selected_salesperson_id.filter(|id| !id.is_empty()) {
            Some(id) => Some(id.to_string()),
            None if !self.is_admin() => Some(self.id.clone()),
            None => None,
        }
    }
}
