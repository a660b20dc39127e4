use std::sync::Arc;

use crate::config::Config;
use crate::rate_limit::LoginRateLimiter;
use crate::store::EntityStore;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub store: EntityStore,
    pub config: Config,
    pub login_limiter: LoginRateLimiter,
}
