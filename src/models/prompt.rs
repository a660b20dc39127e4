use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prompt {
    pub id: String,
    pub title: String,
    pub description: String,
    pub content: String,
    pub created_by: String,
    pub organization_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub usage_count: u64,
    pub is_public: bool,
    pub tags: BTreeSet<String>,
    pub version: u32,
    #[serde(default, rename = "improvedByAI")]
    pub improved_by_ai: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_used: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_enhance_date: Option<DateTime<Utc>>,
}

/// A prompt annotated with its owner's display name, as returned by the
/// list operation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptWithAuthor {
    #[serde(flatten)]
    pub prompt: Prompt,
    pub author_name: String,
}
