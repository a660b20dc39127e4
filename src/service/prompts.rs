use std::collections::BTreeSet;

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::access;
use crate::error::AppError;
use crate::models::{Prompt, PromptWithAuthor};
use crate::store::EntityStore;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPrompt {
    pub title: String,
    pub description: String,
    pub content: String,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

/// Partial update; absent fields keep their stored values.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub is_public: Option<bool>,
    pub tags: Option<BTreeSet<String>>,
    #[serde(rename = "improvedByAI")]
    pub improved_by_ai: Option<bool>,
}

/// All prompts visible to the caller within their organization, annotated
/// with owner display names and ordered by last update, newest first.
pub async fn list(
    store: &EntityStore,
    user_id: &str,
    organization_id: &str,
) -> Vec<PromptWithAuthor> {
    let cols = store.read().await;

    let mut prompts: Vec<PromptWithAuthor> = cols
        .prompts
        .iter()
        .filter(|p| access::is_visible(p, user_id, organization_id))
        .map(|p| PromptWithAuthor {
            prompt: p.clone(),
            author_name: cols
                .find_user_by_id(&p.created_by)
                .map(|u| u.name.clone())
                .unwrap_or_else(|| "Unknown User".to_string()),
        })
        .collect();

    prompts.sort_by(|a, b| b.prompt.updated_at.cmp(&a.prompt.updated_at));
    prompts
}

pub async fn create(
    store: &EntityStore,
    data: NewPrompt,
    user_id: &str,
    organization_id: &str,
) -> Result<Prompt, AppError> {
    let now = Utc::now();
    let prompt = Prompt {
        id: Uuid::now_v7().to_string(),
        title: data.title,
        description: data.description,
        content: data.content,
        created_by: user_id.to_string(),
        organization_id: organization_id.to_string(),
        created_at: now,
        updated_at: now,
        usage_count: 0,
        is_public: data.is_public,
        tags: data.tags,
        version: 1,
        improved_by_ai: false,
        last_used: None,
        ai_enhance_date: None,
    };

    let mut cols = store.write().await;
    cols.prompts.push(prompt.clone());
    store.persist_prompts(&cols).await?;

    Ok(prompt)
}

pub async fn update(
    store: &EntityStore,
    id: &str,
    patch: PromptPatch,
    user_id: &str,
) -> Result<Prompt, AppError> {
    let mut cols = store.write().await;

    let idx = cols.prompt_index(id).ok_or(AppError::PromptNotFound)?;
    if !access::is_owner(&cols.prompts[idx], user_id) {
        return Err(AppError::PermissionDenied);
    }

    let now = Utc::now();
    {
        let p = &mut cols.prompts[idx];
        if let Some(title) = patch.title {
            p.title = title;
        }
        if let Some(description) = patch.description {
            p.description = description;
        }
        if let Some(content) = patch.content {
            p.content = content;
        }
        if let Some(is_public) = patch.is_public {
            p.is_public = is_public;
        }
        if let Some(tags) = patch.tags {
            p.tags = tags;
        }
        if let Some(improved) = patch.improved_by_ai {
            p.improved_by_ai = improved;
            if improved {
                p.ai_enhance_date = Some(now);
            }
        }
        p.updated_at = now;
        p.version += 1;
    }

    let updated = cols.prompts[idx].clone();
    store.persist_prompts(&cols).await?;

    Ok(updated)
}

pub async fn delete(store: &EntityStore, id: &str, user_id: &str) -> Result<(), AppError> {
    let mut cols = store.write().await;

    let idx = cols.prompt_index(id).ok_or(AppError::PromptNotFound)?;
    if !access::is_owner(&cols.prompts[idx], user_id) {
        return Err(AppError::PermissionDenied);
    }

    cols.prompts.remove(idx);
    store.persist_prompts(&cols).await?;

    Ok(())
}

/// Best-effort usage telemetry; an unknown id is a silent no-op.
pub async fn increment_usage(store: &EntityStore, id: &str) -> Result<(), AppError> {
    let mut cols = store.write().await;

    let Some(p) = cols.find_prompt_by_id_mut(id) else {
        return Ok(());
    };
    p.usage_count += 1;
    p.last_used = Some(Utc::now());

    store.persist_prompts(&cols).await?;
    Ok(())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgStats {
    pub total_users: usize,
    pub total_prompts: usize,
    pub ai_enhanced_prompts: usize,
    pub total_usage: u64,
    pub active_users: usize,
}

pub async fn organization_stats(store: &EntityStore, organization_id: &str) -> OrgStats {
    let cols = store.read().await;
    let now = Utc::now();

    let total_prompts = cols.prompts_in_org(organization_id).count();
    let ai_enhanced_prompts = cols
        .prompts_in_org(organization_id)
        .filter(|p| p.improved_by_ai)
        .count();
    let total_usage = cols
        .prompts_in_org(organization_id)
        .map(|p| p.usage_count)
        .sum();

    let total_users = cols.count_users_in_org(organization_id);
    let active_users = cols
        .users_in_org(organization_id)
        .filter(|u| now - u.last_login.unwrap_or(u.created_at) <= Duration::days(30))
        .count();

    OrgStats {
        total_users,
        total_prompts,
        ai_enhanced_prompts,
        total_usage,
        active_users,
    }
}
