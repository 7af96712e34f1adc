//! Router assembly and CORS

use axum::{
    http::{header, HeaderValue, Method},
    middleware,
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use tracker_core::repositories::SessionRepository;
use tracker_core::services::{AuthService, TrackerService};

use crate::config::{CorsConfig, TrackerConfig};
use crate::{handlers, security};

/// Credentialed CORS from the configured origin allow-list, with the
/// `Authorization` header exposed to browser callers.
pub fn cors_layer(config: &CorsConfig) -> anyhow::Result<CorsLayer> {
    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true)
        .expose_headers([header::AUTHORIZATION]))
}

pub fn build_router<R>(
    tracker_service: Arc<TrackerService<R>>,
    auth_service: Arc<AuthService>,
    tracker_config: TrackerConfig,
    cors: CorsLayer,
) -> Router
where
    R: SessionRepository + 'static,
{
    let public_routes = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/api/auth/login", post(handlers::auth::login));

    // start/stop are ADMIN only
    let admin_routes = Router::new()
        .route("/api/sessions/start", post(handlers::sessions::start_session::<R>))
        .route("/api/sessions/stop", post(handlers::sessions::stop_session::<R>))
        .layer(middleware::from_fn(security::require_admin));

    let authenticated_routes = Router::new()
        .route("/api/sessions", get(handlers::sessions::list_sessions::<R>))
        .route("/api/sessions/active", get(handlers::sessions::active_session::<R>))
        .route("/api/sessions/stats", get(handlers::sessions::session_stats::<R>))
        .route("/api/auth/me", get(handlers::auth::current_user))
        .merge(admin_routes)
        .layer(middleware::from_fn(security::require_auth));

    Router::new()
        .merge(public_routes)
        .merge(authenticated_routes)
        .layer(Extension(tracker_service))
        .layer(Extension(auth_service))
        .layer(Extension(tracker_config))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
