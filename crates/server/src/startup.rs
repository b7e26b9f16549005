use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use configs::{AppConfig, StorageBackend};
use migration::MigratorTrait;
use service::vendor::{FileVendorStore, SeaOrmVendorStore};
use service::VendorStore;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes::{self, AppState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Construct the configured `VendorStore`. The database backend runs
/// pending migrations before it is handed out.
pub async fn build_store(cfg: &AppConfig) -> Result<Arc<dyn VendorStore>, StartupError> {
    match cfg.storage.backend {
        StorageBackend::File => {
            let store: Arc<dyn VendorStore> = FileVendorStore::new(&cfg.storage.data_file)
                .await
                .map_err(|e| StartupError::Storage(e.to_string()))?;
            info!(path = %cfg.storage.data_file, "using file vendor store");
            Ok(store)
        }
        StorageBackend::Database => {
            let db = models::db::connect_with_config(&cfg.database).await?;
            migration::Migrator::up(&db, None)
                .await
                .map_err(|e| StartupError::Storage(format!("migrations failed: {e}")))?;
            info!("using database vendor store");
            Ok(Arc::new(SeaOrmVendorStore::new(db)))
        }
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!(event = "shutdown_signal", "received Ctrl+C, shutting down"),
        Err(e) => warn!(error = %e, "cannot listen for Ctrl+C; shutdown only on process exit"),
    }
}

/// Public entry: build the app and run the HTTP server until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let store = build_store(&cfg).await?;
    let app: Router = routes::build_router(AppState::new(store), build_cors());

    let addr: SocketAddr = cfg
        .bind_addr()
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bad bind address {}: {e}", cfg.bind_addr())))?;
    info!(%addr, "starting cloud vendor server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
