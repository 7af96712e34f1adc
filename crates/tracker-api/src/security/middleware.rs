//! HTTP Basic Auth middleware

use axum::{
    extract::Request,
    http::header,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use tracing::{debug, warn};

use tracker_core::domain::{AuthenticatedUser, Role};
use tracker_core::services::AuthService;
use tracker_security::basic::parse_basic_header;

use crate::utils::error::ApiError;

fn invalid_credentials() -> ApiError {
    ApiError::Unauthorized("Invalid credentials".to_string())
}

/// Validate the `Authorization: Basic` header and attach the resulting
/// [`AuthenticatedUser`] to the request extensions.
pub async fn require_auth(mut request: Request, next: Next) -> Result<Response, ApiError> {
    let auth_service = request
        .extensions()
        .get::<Arc<AuthService>>()
        .ok_or_else(|| ApiError::Internal("auth service not configured".to_string()))?
        .clone();

    let header_value = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(invalid_credentials)?;

    let credentials = parse_basic_header(header_value).map_err(|e| {
        debug!("rejected Authorization header: {}", e);
        invalid_credentials()
    })?;

    let user = auth_service
        .authenticate(&credentials.username, &credentials.password)
        .map_err(|_| invalid_credentials())?;

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

/// Admin gate for the start/stop endpoints. Runs inside [`require_auth`].
pub async fn require_admin(request: Request, next: Next) -> Result<Response, ApiError> {
    let user = request
        .extensions()
        .get::<AuthenticatedUser>()
        .ok_or_else(invalid_credentials)?;

    if user.role != Role::Admin {
        warn!(username = %user.username, "admin-only endpoint refused");
        return Err(ApiError::Forbidden("Forbidden".to_string()));
    }

    Ok(next.run(request).await)
}
