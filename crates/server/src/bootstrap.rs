use std::sync::Arc;

use axum::Router;
use brewery_core::config::{AppConfig, ConfigError, LoadOptions, StorageBackend};
use brewery_core::identity::RandomIdGenerator;
use brewery_db::{connect, migrations, DbPool};
use thiserror::Error;
use tracing::info;

use crate::services::Services;
use crate::{api, health};

pub struct Application {
    pub config: AppConfig,
    pub db_pool: Option<DbPool>,
    pub services: Services,
}

impl Application {
    /// Resource routes plus `/health`.
    pub fn router(&self) -> Router {
        api::router(&self.services).merge(health::router(self.db_pool.clone()))
    }
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("database connection failed: {0}")]
    DatabaseConnect(#[source] sqlx::Error),
    #[error("database migration failed: {0}")]
    Migration(#[source] sqlx::migrate::MigrateError),
}

pub async fn bootstrap(options: LoadOptions) -> Result<Application, BootstrapError> {
    let config = AppConfig::load(options)?;
    bootstrap_with_config(config).await
}

pub async fn bootstrap_with_config(config: AppConfig) -> Result<Application, BootstrapError> {
    info!(
        event_name = "system.bootstrap.start",
        storage_backend = ?config.storage.backend,
        "starting application bootstrap"
    );
    let ids = Arc::new(RandomIdGenerator);

    let (db_pool, services) = match config.storage.backend {
        StorageBackend::Memory => (None, Services::in_memory(ids)),
        StorageBackend::Sqlite => {
            let pool = connect(&config.database).await.map_err(BootstrapError::DatabaseConnect)?;
            info!(
                event_name = "system.bootstrap.database_connected",
                "database connection established"
            );

            migrations::run_pending(&pool).await.map_err(BootstrapError::Migration)?;
            info!(
                event_name = "system.bootstrap.migrations_applied",
                "database migrations applied"
            );

            (Some(pool.clone()), Services::sqlite(pool, ids))
        }
    };

    Ok(Application { config, db_pool, services })
}
