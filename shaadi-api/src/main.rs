use std::sync::Arc;

use shaadi_api::config::{AppConfig, StoreKind};
use shaadi_api::store::{MemoryStore, PgStore, Store};
use shaadi_api::{build_router, AppState};
use shaadi_shared::clients::db::create_pool;
use shaadi_shared::types::auth::JwtKeys;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    shaadi_shared::middleware::init_tracing("shaadi-api");

    let config = AppConfig::load()?;
    let port = config.port;

    let store: Arc<dyn Store> = match config.store {
        StoreKind::Postgres => {
            let pool = create_pool(&config.database_url, config.db_pool_size)?;
            Arc::new(PgStore::new(pool))
        }
        StoreKind::Memory => {
            tracing::warn!("using in-memory store, data will not survive a restart");
            Arc::new(MemoryStore::new())
        }
    };

    let metrics_handle = shaadi_shared::middleware::init_metrics()?;

    let state = AppState::new(store, JwtKeys::new(config.jwt_secret, config.jwt_ttl_secs))
        .with_metrics(metrics_handle);

    let app = build_router(state);

    let addr = format!("0.0.0.0:{port}");
    tracing::info!(addr = %addr, store = ?config.store, "shaadi-api starting");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
