use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;
use serde_json::{Value, json};

use crate::auth::extractor::AuthUser;
use crate::error::AppError;
use crate::models::{Prompt, PromptWithAuthor};
use crate::service::prompts::{self, NewPrompt, PromptPatch};
use crate::state::SharedState;

#[derive(Serialize)]
pub struct PromptListResponse {
    pub success: bool,
    pub prompts: Vec<PromptWithAuthor>,
}

#[derive(Serialize)]
pub struct PromptResponse {
    pub success: bool,
    pub prompt: Prompt,
}

pub async fn list(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Json<PromptListResponse> {
    let prompts = prompts::list(&state.store, &auth.user_id, &auth.organization_id).await;
    Json(PromptListResponse {
        success: true,
        prompts,
    })
}

pub async fn create(
    auth: AuthUser,
    State(state): State<SharedState>,
    Json(req): Json<NewPrompt>,
) -> Result<Json<PromptResponse>, AppError> {
    if req.title.trim().is_empty() || req.content.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Title and content are required".to_string(),
        ));
    }

    let prompt = prompts::create(&state.store, req, &auth.user_id, &auth.organization_id).await?;

    tracing::info!(prompt_id = %prompt.id, user_id = %auth.user_id, "Prompt created");

    Ok(Json(PromptResponse {
        success: true,
        prompt,
    }))
}

pub async fn update(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(req): Json<PromptPatch>,
) -> Result<Json<PromptResponse>, AppError> {
    let prompt = prompts::update(&state.store, &id, req, &auth.user_id).await?;
    Ok(Json(PromptResponse {
        success: true,
        prompt,
    }))
}

pub async fn delete(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    prompts::delete(&state.store, &id, &auth.user_id).await?;
    Ok(Json(json!({ "success": true })))
}

/// Usage telemetry; succeeds whether or not the id exists.
pub async fn record_use(
    _auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    prompts::increment_usage(&state.store, &id).await?;
    Ok(Json(json!({ "success": true })))
}
