use std::time::Duration;

use catalog::{config, infrastructure, infrastructure::logger::Logger, router, AppState};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = config::load_config()?;
    Logger::init(&config.logging.level);

    info!("Starting catalog server...");

    let stores = infrastructure::open_stores(&config.database)
        .await
        .map_err(|e| {
            error!("Failed to initialize store: {}", e);
            e
        })?;

    let state = AppState::new(stores.items, stores.categories);
    let app = router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.http.timeout_seconds,
            ))),
    );

    let listener =
        TcpListener::bind((config.http.bind_address.as_str(), config.http.port)).await?;
    let addr = listener.local_addr()?;

    info!("🚀 Catalog server running on http://{}", addr);
    info!("   GET  /catalog           - Home page with counts");
    info!("   GET  /catalog/item      - Item list");
    info!("   GET  /catalog/category  - Category list");
    info!("   GET  /api/items         - Items as JSON");
    info!("   GET  /api/categories    - Categories as JSON");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
}
