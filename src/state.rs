use sqlx::SqlitePool;

use crate::config::cors::CorsConfig;
use crate::config::database::init_db_pool;

/// Shared application state, constructed once at process start and injected
/// into the router. The pool is the single source of truth for users and
/// courses; there is no other shared mutable state.
#[derive(Clone, Debug)]
pub struct AppState {
    pub db: SqlitePool,
    pub cors_config: CorsConfig,
}

pub async fn init_app_state() -> AppState {
    AppState {
        db: init_db_pool().await,
        cors_config: CorsConfig::from_env(),
    }
}
