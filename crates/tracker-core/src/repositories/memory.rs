//! In-memory session repository
//!
//! Backs unit and router tests; the check-then-act operations are atomic
//! under a single lock, matching the store-level guarantee of the
//! PostgreSQL implementation.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::WorkSession;
use crate::error::DomainError;
use crate::repositories::SessionRepository;

#[derive(Default)]
pub struct InMemorySessionRepository {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    sessions: Vec<WorkSession>,
    next_id: i64,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a completed session, bypassing the lifecycle. Test setup only.
    pub fn seed_completed(
        &self,
        description: &str,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) {
        let mut inner = self.inner.lock().expect("repository lock poisoned");
        inner.next_id += 1;
        let id = inner.next_id;
        inner.sessions.push(WorkSession {
            id,
            description: description.to_string(),
            start_time,
            end_time: Some(end_time),
        });
    }

    pub fn len(&self) -> usize {
        self.inner.lock().expect("repository lock poisoned").sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn find_all(&self) -> Result<Vec<WorkSession>, DomainError> {
        let inner = self.inner.lock().expect("repository lock poisoned");
        let mut sessions = inner.sessions.clone();
        sessions.sort_by(|a, b| b.start_time.cmp(&a.start_time));
        Ok(sessions)
    }

    async fn find_active(&self) -> Result<Option<WorkSession>, DomainError> {
        let inner = self.inner.lock().expect("repository lock poisoned");
        Ok(inner.sessions.iter().find(|s| s.is_active()).cloned())
    }

    async fn find_completed(&self) -> Result<Vec<WorkSession>, DomainError> {
        let inner = self.inner.lock().expect("repository lock poisoned");
        let mut sessions: Vec<WorkSession> = inner
            .sessions
            .iter()
            .filter(|s| !s.is_active())
            .cloned()
            .collect();
        sessions.sort_by(|a, b| b.start_time.cmp(&a.start_time));
        Ok(sessions)
    }

    async fn insert_active(
        &self,
        description: &str,
        start_time: DateTime<Utc>,
    ) -> Result<WorkSession, DomainError> {
        let mut inner = self.inner.lock().expect("repository lock poisoned");
        if inner.sessions.iter().any(|s| s.is_active()) {
            return Err(DomainError::ActiveSessionExists);
        }
        inner.next_id += 1;
        let session = WorkSession {
            id: inner.next_id,
            description: description.to_string(),
            start_time,
            end_time: None,
        };
        inner.sessions.push(session.clone());
        Ok(session)
    }

    async fn close_active(&self, end_time: DateTime<Utc>) -> Result<WorkSession, DomainError> {
        let mut inner = self.inner.lock().expect("repository lock poisoned");
        let session = inner
            .sessions
            .iter_mut()
            .find(|s| s.is_active())
            .ok_or(DomainError::NoActiveSession)?;
        session.end_time = Some(end_time);
        Ok(session.clone())
    }
}
