//! Work session HTTP handlers

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use tracker_core::domain::WorkSession;
use tracker_core::repositories::SessionRepository;
use tracker_core::services::TrackerService;

use crate::config::TrackerConfig;
use crate::utils::error::ApiError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkSessionResponse {
    pub id: i64,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub active: bool,
    pub duration_seconds: i64,
}

impl From<&WorkSession> for WorkSessionResponse {
    fn from(session: &WorkSession) -> Self {
        Self {
            id: session.id,
            description: session.description.clone(),
            start_time: session.start_time,
            end_time: session.end_time,
            active: session.is_active(),
            duration_seconds: session.duration_seconds(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct StartSessionRequest {
    pub description: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_hours_worked: f64,
    pub contracted_hours: u32,
}

/// GET /api/sessions — full history, newest first.
pub async fn list_sessions<R: SessionRepository>(
    Extension(service): Extension<Arc<TrackerService<R>>>,
) -> Result<Json<Vec<WorkSessionResponse>>, ApiError> {
    let sessions = service.get_all_sessions().await?;
    Ok(Json(sessions.iter().map(Into::into).collect()))
}

/// GET /api/sessions/active — the running session, or 204 if none.
pub async fn active_session<R: SessionRepository>(
    Extension(service): Extension<Arc<TrackerService<R>>>,
) -> Result<Response, ApiError> {
    match service.get_active_session().await? {
        Some(session) => {
            Ok((StatusCode::OK, Json(WorkSessionResponse::from(&session))).into_response())
        }
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

/// POST /api/sessions/start
pub async fn start_session<R: SessionRepository>(
    Extension(service): Extension<Arc<TrackerService<R>>>,
    Json(payload): Json<StartSessionRequest>,
) -> Result<(StatusCode, Json<WorkSessionResponse>), ApiError> {
    let session = service.start_session(&payload.description).await?;
    Ok((StatusCode::CREATED, Json(WorkSessionResponse::from(&session))))
}

/// POST /api/sessions/stop
pub async fn stop_session<R: SessionRepository>(
    Extension(service): Extension<Arc<TrackerService<R>>>,
) -> Result<Json<WorkSessionResponse>, ApiError> {
    let session = service.stop_session().await?;
    Ok(Json(WorkSessionResponse::from(&session)))
}

/// GET /api/sessions/stats — total rounded to 2 decimals at the boundary.
pub async fn session_stats<R: SessionRepository>(
    Extension(service): Extension<Arc<TrackerService<R>>>,
    Extension(tracker): Extension<TrackerConfig>,
) -> Result<Json<StatsResponse>, ApiError> {
    let total = service.total_hours_worked().await?;
    Ok(Json(StatsResponse {
        total_hours_worked: (total * 100.0).round() / 100.0,
        contracted_hours: tracker.contracted_hours,
    }))
}
