use std::sync::Arc;

use anyhow::Context;
use rentwise_auth::TokenKeys;
use rentwise_config::{CorsConfig, DatabaseConfig, JwtConfig, ServerConfig, StoreBackend};
use rentwise_db::{MemoryStore, PgStore, PropertyStore, UserStore, init_db_pool, run_migrations};
use tracing::info;

/// Shared, read-only application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub properties: Arc<dyn PropertyStore>,
    pub tokens: Arc<TokenKeys>,
    pub cors_config: CorsConfig,
    pub secure_cookies: bool,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("tokens", &self.tokens)
            .field("cors_config", &self.cors_config)
            .field("secure_cookies", &self.secure_cookies)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Builds state over one store serving both users and properties.
    pub fn with_store<S>(
        store: Arc<S>,
        jwt_config: &JwtConfig,
        cors_config: CorsConfig,
        secure_cookies: bool,
    ) -> Self
    where
        S: UserStore + PropertyStore + 'static,
    {
        Self {
            users: store.clone(),
            properties: store,
            tokens: Arc::new(TokenKeys::new(jwt_config)),
            cors_config,
            secure_cookies,
        }
    }

    /// Fresh in-memory state, as used by the test suite.
    pub fn in_memory(jwt_config: &JwtConfig) -> Self {
        Self::with_store(
            Arc::new(MemoryStore::new()),
            jwt_config,
            CorsConfig::default(),
            false,
        )
    }
}

/// Selects and prepares the store named by `server.store_backend`.
pub async fn init_app_state(
    server: &ServerConfig,
    jwt_config: &JwtConfig,
    cors_config: CorsConfig,
) -> anyhow::Result<AppState> {
    let secure_cookies = server.secure_cookies();

    match server.store_backend {
        StoreBackend::Memory => {
            info!("Using in-memory store; data is lost on restart");
            Ok(AppState::with_store(
                Arc::new(MemoryStore::new()),
                jwt_config,
                cors_config,
                secure_cookies,
            ))
        }
        StoreBackend::Postgres => {
            let db_config = DatabaseConfig::from_env()?;
            let pool = init_db_pool(&db_config)
                .await
                .context("Failed to connect to database")?;
            run_migrations(&pool)
                .await
                .context("Failed to run database migrations")?;
            info!("Connected to PostgreSQL and applied migrations");

            Ok(AppState::with_store(
                Arc::new(PgStore::new(pool)),
                jwt_config,
                cors_config,
                secure_cookies,
            ))
        }
    }
}
