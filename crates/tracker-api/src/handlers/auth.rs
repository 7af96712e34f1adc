//! Authentication HTTP handlers

use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use tracker_core::domain::{AuthenticatedUser, Role};
use tracker_core::services::AuthService;

use crate::utils::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub username: String,
    pub role: Role,
}

impl From<AuthenticatedUser> for UserResponse {
    fn from(user: AuthenticatedUser) -> Self {
        Self {
            username: user.username,
            role: user.role,
        }
    }
}

/// POST /api/auth/login
pub async fn login(
    Extension(auth_service): Extension<Arc<AuthService>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = auth_service.authenticate(&payload.username, &payload.password)?;
    Ok(Json(user.into()))
}

/// GET /api/auth/me — identity established by the Basic Auth middleware.
pub async fn current_user(
    Extension(user): Extension<AuthenticatedUser>,
) -> Json<UserResponse> {
    Json(user.into())
}
