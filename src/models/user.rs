use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Organization;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    User,
}

/// Stored user record. Serialized in full for persistence; API responses
/// use [`UserProfile`] instead, which never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    pub department: String,
    pub organization_id: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,
    #[serde(default)]
    pub preferences: BTreeMap<String, serde_json::Value>,
}

/// User projection returned on login/signup, enriched with the resolved
/// organization record.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub department: String,
    pub organization_id: String,
    pub organization: Organization,
    pub last_login: Option<DateTime<Utc>>,
    pub preferences: BTreeMap<String, serde_json::Value>,
}

impl UserProfile {
    pub fn new(user: &User, organization: Organization) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
            department: user.department.clone(),
            organization_id: user.organization_id.clone(),
            organization,
            last_login: user.last_login,
            preferences: user.preferences.clone(),
        }
    }
}
