pub mod auth;
pub mod enhance;
pub mod organization;
pub mod prompts;

use axum::Router;
use axum::routing::{get, post, put};

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        // Auth
        .route("/api/v1/auth/signup", post(auth::signup))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/logout", post(auth::logout))
        // Prompts
        .route("/api/v1/prompts", get(prompts::list).post(prompts::create))
        .route(
            "/api/v1/prompts/{id}",
            put(prompts::update).delete(prompts::delete),
        )
        .route("/api/v1/prompts/{id}/use", post(prompts::record_use))
        // Enhancement
        .route("/api/v1/enhance/prompt", post(enhance::enhance_prompt))
        .route("/api/v1/enhance/brd", post(enhance::generate_brd))
        .route("/api/v1/enhance/email", post(enhance::rewrite_email))
        // Organization
        .route("/api/v1/organization/stats", get(organization::stats))
}
