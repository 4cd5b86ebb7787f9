use std::sync::Arc;

use schoople_config::{CorsConfig, JwtConfig, ServerConfig};
use schoople_core::{Clock, SystemClock};
use schoople_db::{Store, init_db_pool};

/// Shared per-request state. Cloned into every handler.
#[derive(Clone, Debug)]
pub struct AppState {
    pub store: Store,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(store: impl Into<Store>, jwt_config: JwtConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            store: store.into(),
            jwt_config,
            cors_config: CorsConfig::parse(""),
            clock,
        }
    }

    pub fn with_cors(mut self, cors_config: CorsConfig) -> Self {
        self.cors_config = cors_config;
        self
    }
}

/// Builds the production state: Postgres pool from `DATABASE_URL`, configs from
/// the environment and the system clock.
pub async fn init_app_state(server_config: &ServerConfig) -> anyhow::Result<AppState> {
    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?;
    let pool = init_db_pool(&database_url, server_config.database_max_connections).await?;

    if server_config.run_migrations {
        schoople_db::run_migrations(&pool).await?;
    }

    Ok(AppState::new(pool, JwtConfig::from_env(), Arc::new(SystemClock))
        .with_cors(CorsConfig::from_env()))
}
