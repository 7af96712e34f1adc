//! Session lifecycle service

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use crate::domain::WorkSession;
use crate::error::DomainError;
use crate::repositories::SessionRepository;

/// Enforces the single-active-session invariant and computes aggregate hours.
pub struct TrackerService<R: SessionRepository> {
    repo: Arc<R>,
}

impl<R: SessionRepository> TrackerService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// All sessions ordered by start time, newest first.
    pub async fn get_all_sessions(&self) -> Result<Vec<WorkSession>, DomainError> {
        self.repo.find_all().await
    }

    /// The currently running session, if any.
    pub async fn get_active_session(&self) -> Result<Option<WorkSession>, DomainError> {
        self.repo.find_active().await
    }

    /// Start a new work session.
    ///
    /// Fails with [`DomainError::ActiveSessionExists`] if a session is
    /// already running; the store's own concurrency control arbitrates
    /// concurrent starts.
    pub async fn start_session(&self, description: &str) -> Result<WorkSession, DomainError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(DomainError::Validation("Description is required".to_string()));
        }

        let session = self.repo.insert_active(description, Utc::now()).await?;
        info!(id = session.id, "work session started");
        Ok(session)
    }

    /// Stop the currently running session.
    pub async fn stop_session(&self) -> Result<WorkSession, DomainError> {
        let session = self.repo.close_active(Utc::now()).await.inspect_err(|_| {
            warn!("stop requested with no active session");
        })?;
        info!(
            id = session.id,
            duration_seconds = session.duration_seconds(),
            "work session stopped"
        );
        Ok(session)
    }

    /// Total hours across completed sessions. Active sessions are excluded.
    pub async fn total_hours_worked(&self) -> Result<f64, DomainError> {
        let completed = self.repo.find_completed().await?;
        let total_seconds: i64 = completed.iter().map(|s| s.duration_seconds()).sum();
        Ok(total_seconds as f64 / 3600.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::InMemorySessionRepository;
    use chrono::Duration;

    fn service() -> (TrackerService<InMemorySessionRepository>, Arc<InMemorySessionRepository>) {
        let repo = Arc::new(InMemorySessionRepository::new());
        (TrackerService::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn start_then_get_active_round_trips() {
        let (svc, _) = service();
        let started = svc.start_session("task A").await.unwrap();
        assert!(started.end_time.is_none());

        let active = svc.get_active_session().await.unwrap().unwrap();
        assert_eq!(active.id, started.id);
        assert_eq!(active.description, "task A");
        assert!(active.end_time.is_none());
    }

    #[tokio::test]
    async fn start_while_active_fails_and_creates_nothing() {
        let (svc, repo) = service();
        svc.start_session("first").await.unwrap();

        let err = svc.start_session("second").await.unwrap_err();
        assert!(matches!(err, DomainError::ActiveSessionExists));
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn stop_without_active_fails_and_mutates_nothing() {
        let (svc, repo) = service();
        let err = svc.stop_session().await.unwrap_err();
        assert!(matches!(err, DomainError::NoActiveSession));
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn stop_sets_end_time_after_start_time() {
        let (svc, _) = service();
        svc.start_session("timed").await.unwrap();
        let stopped = svc.stop_session().await.unwrap();

        let end = stopped.end_time.expect("end time set");
        assert!(end >= stopped.start_time);
        assert!(svc.get_active_session().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn at_most_one_active_across_lifecycle() {
        let (svc, _) = service();
        for _ in 0..3 {
            svc.start_session("cycle").await.unwrap();
            assert!(svc.start_session("extra").await.is_err());
            svc.stop_session().await.unwrap();
        }
        let all = svc.get_all_sessions().await.unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all.iter().filter(|s| s.is_active()).count(), 0);
    }

    #[tokio::test]
    async fn blank_description_is_rejected() {
        let (svc, repo) = service();
        for description in ["", "   ", "\t\n"] {
            let err = svc.start_session(description).await.unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)));
        }
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn total_hours_sums_completed_and_skips_active() {
        let (svc, repo) = service();
        let base = Utc::now() - Duration::hours(10);
        repo.seed_completed("one hour", base, base + Duration::seconds(3600));
        repo.seed_completed(
            "half hour",
            base + Duration::hours(2),
            base + Duration::hours(2) + Duration::seconds(1800),
        );
        svc.start_session("still running").await.unwrap();

        let hours = svc.total_hours_worked().await.unwrap();
        assert!((hours - 1.5).abs() < f64::EPSILON, "got {hours}");
    }

    #[tokio::test]
    async fn sessions_are_listed_newest_first() {
        let (svc, repo) = service();
        let base = Utc::now() - Duration::hours(5);
        repo.seed_completed("oldest", base, base + Duration::seconds(60));
        repo.seed_completed(
            "newest",
            base + Duration::hours(2),
            base + Duration::hours(2) + Duration::seconds(60),
        );

        let all = svc.get_all_sessions().await.unwrap();
        assert_eq!(all[0].description, "newest");
        assert_eq!(all[1].description, "oldest");
    }
}
