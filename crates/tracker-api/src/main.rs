use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use tracker_api::config::Settings;
use tracker_api::router::{build_router, cors_layer};
use tracker_core::services::{AuthService, TrackerService};
use tracker_infrastructure::{create_pool, run_migrations, PgSessionRepository};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tracker_api=debug".to_string()),
        )
        .with_target(true)
        .init();

    info!("Starting retainer tracker API...");

    let settings = Settings::load()?;
    info!("Configuration loaded");

    let pool = create_pool(
        &settings.database.url,
        settings.database.pool_max_size,
        settings.database.pool_timeout_seconds,
    )
    .await?;
    run_migrations(&pool).await?;
    info!("Database connection established");

    let repository = Arc::new(PgSessionRepository::new(pool));
    let tracker_service = Arc::new(TrackerService::new(repository));
    let auth_service = Arc::new(AuthService::new(settings.accounts()));

    let cors = cors_layer(&settings.cors)?;
    let app = build_router(tracker_service, auth_service, settings.tracker.clone(), cors);

    let addr = SocketAddr::from((
        settings.server.host.parse::<std::net::IpAddr>()?,
        settings.server.port,
    ));
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
