//! Factory Metrics Service - Binary Entry Point

use std::env;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use factory_metrics::api::http::create_router;
use factory_metrics::api::state::AppState;
use factory_metrics::error::StoreResult;
use factory_metrics::metrics::MetricsConfig;
use factory_metrics::store::FactoryStore;

#[tokio::main]
async fn main() -> StoreResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // An unreadable data file aborts the boot instead of starting empty.
    let store = Arc::new(FactoryStore::new()?);
    let metrics = MetricsConfig::from_env();
    tracing::info!(
        data_file = store.file_path(),
        slot_minutes = metrics.slot_minutes,
        "starting factory metrics service"
    );

    let state = Arc::new(AppState::new(store, metrics));
    let app = create_router(state);

    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(5000);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(port, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("shutdown signal received");
    }
}
