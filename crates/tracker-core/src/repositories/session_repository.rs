//! Session repository trait (port)

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::WorkSession;
use crate::error::DomainError;

/// Persistence port for work sessions.
///
/// `insert_active` and `close_active` are atomic check-then-act operations:
/// the store itself guards the single-active-session invariant, so the
/// guarantee holds across multiple service instances.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// All sessions, newest start time first.
    async fn find_all(&self) -> Result<Vec<WorkSession>, DomainError>;

    /// The session with no end time, if any.
    async fn find_active(&self) -> Result<Option<WorkSession>, DomainError>;

    /// Completed sessions only, newest start time first.
    async fn find_completed(&self) -> Result<Vec<WorkSession>, DomainError>;

    /// Create a new active session. Fails with
    /// [`DomainError::ActiveSessionExists`] if one is already running.
    async fn insert_active(
        &self,
        description: &str,
        start_time: DateTime<Utc>,
    ) -> Result<WorkSession, DomainError>;

    /// Set the end time on the active session. Fails with
    /// [`DomainError::NoActiveSession`] if none is running.
    async fn close_active(&self, end_time: DateTime<Utc>) -> Result<WorkSession, DomainError>;
}
