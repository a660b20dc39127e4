use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrgPlan {
    Starter,
    Team,
    Enterprise,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgSettings {
    pub allow_user_registration: bool,
    pub max_users_per_org: u32,
    pub features_enabled: BTreeSet<String>,
}

/// Tenant boundary. The id may be a human-chosen organization code
/// (pre-seeded tenants) or a generated uuid.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: String,
    pub name: String,
    pub domain: String,
    pub plan: OrgPlan,
    pub created_at: DateTime<Utc>,
    pub settings: OrgSettings,
}
