use axum::Json;
use serde::{Deserialize, Serialize};

use crate::auth::extractor::AuthUser;
use crate::enhance;
use crate::enhance::analysis::BusinessAnalysis;

#[derive(Deserialize)]
pub struct EnhancePromptRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub content: String,
}

#[derive(Serialize)]
pub struct EnhancePromptResponse {
    pub success: bool,
    pub enhanced: enhance::EnhancedPrompt,
}

pub async fn enhance_prompt(
    _auth: AuthUser,
    Json(req): Json<EnhancePromptRequest>,
) -> Json<EnhancePromptResponse> {
    let enhanced = enhance::enhance_prompt(&req.title, &req.description, &req.content);
    Json(EnhancePromptResponse {
        success: true,
        enhanced,
    })
}

#[derive(Deserialize)]
pub struct GenerateBrdRequest {
    pub content: String,
}

#[derive(Serialize)]
pub struct GenerateBrdResponse {
    pub success: bool,
    pub brd: String,
    pub analysis: BusinessAnalysis,
}

pub async fn generate_brd(
    _auth: AuthUser,
    Json(req): Json<GenerateBrdRequest>,
) -> Json<GenerateBrdResponse> {
    let analysis = enhance::analyze_business_content(&req.content);
    let brd = enhance::generate_brd(&req.content, &analysis);
    Json(GenerateBrdResponse {
        success: true,
        brd,
        analysis,
    })
}

#[derive(Deserialize)]
pub struct RewriteEmailRequest {
    pub content: String,
}

#[derive(Serialize)]
pub struct RewriteEmailResponse {
    pub success: bool,
    pub email: enhance::RewrittenEmail,
}

pub async fn rewrite_email(
    _auth: AuthUser,
    Json(req): Json<RewriteEmailRequest>,
) -> Json<RewriteEmailResponse> {
    let email = enhance::rewrite_email(&req.content, &mut rand::rng());
    Json(RewriteEmailResponse {
        success: true,
        email,
    })
}
