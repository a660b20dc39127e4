use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::auth::extractor::AuthUser;
use crate::service::prompts::{self, OrgStats};
use crate::state::SharedState;

#[derive(Serialize)]
pub struct StatsResponse {
    pub success: bool,
    pub stats: OrgStats,
}

pub async fn stats(auth: AuthUser, State(state): State<SharedState>) -> Json<StatsResponse> {
    let stats = prompts::organization_stats(&state.store, &auth.organization_id).await;
    Json(StatsResponse {
        success: true,
        stats,
    })
}
