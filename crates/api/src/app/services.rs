//! Storage wiring.
//!
//! The store is built once at startup and shared by every handler through an
//! `Extension<Arc<AppServices>>`. Tests inject their own store via
//! [`AppServices::new`].

use std::sync::Arc;

use shelf_infra::config::{AppConfig, StoreBackend};
use shelf_infra::item_store::{InMemoryItemStore, ItemStore};

#[derive(Clone)]
pub struct AppServices {
    store: Arc<dyn ItemStore>,
}

impl AppServices {
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        Self { store }
    }

    /// Services backed by a fresh in-memory store (dev/test).
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryItemStore::new()))
    }

    pub fn store(&self) -> &dyn ItemStore {
        self.store.as_ref()
    }
}

/// Build services for the configured backend.
pub async fn build_services(config: &AppConfig) -> anyhow::Result<AppServices> {
    match &config.store {
        StoreBackend::InMemory => {
            tracing::info!("using in-memory item store");
            Ok(AppServices::in_memory())
        }
        StoreBackend::Postgres {
            database_url,
            max_connections,
        } => {
            #[cfg(feature = "postgres")]
            {
                build_postgres_services(database_url, *max_connections).await
            }
            #[cfg(not(feature = "postgres"))]
            {
                let _ = (database_url, max_connections);
                tracing::warn!(
                    "USE_PERSISTENT_STORES=true but postgres feature not enabled, falling back to in-memory"
                );
                Ok(AppServices::in_memory())
            }
        }
    }
}

#[cfg(feature = "postgres")]
async fn build_postgres_services(
    database_url: &str,
    max_connections: u32,
) -> anyhow::Result<AppServices> {
    use anyhow::Context;
    use shelf_infra::item_store::PostgresItemStore;
    use sqlx::postgres::PgPoolOptions;

    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
        .context("failed to connect to Postgres")?;

    let store = PostgresItemStore::new(pool);
    store
        .ensure_schema()
        .await
        .context("failed to prepare items table")?;

    tracing::info!(max_connections, "using Postgres item store");
    Ok(AppServices::new(Arc::new(store)))
}
