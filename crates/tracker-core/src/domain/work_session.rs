//! Work session domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkSession {
    pub id: i64,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
}

impl WorkSession {
    /// Whether the timer is still running.
    pub fn is_active(&self) -> bool {
        self.end_time.is_none()
    }

    /// Duration in seconds. An active session is measured against now.
    pub fn duration_seconds(&self) -> i64 {
        let end = self.end_time.unwrap_or_else(Utc::now);
        (end - self.start_time).num_seconds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn completed_session_duration_uses_end_time() {
        let start = Utc::now() - Duration::hours(2);
        let session = WorkSession {
            id: 1,
            description: "Write report".to_string(),
            start_time: start,
            end_time: Some(start + Duration::seconds(5400)),
        };
        assert!(!session.is_active());
        assert_eq!(session.duration_seconds(), 5400);
    }

    #[test]
    fn active_session_duration_counts_against_now() {
        let session = WorkSession {
            id: 2,
            description: "Ongoing".to_string(),
            start_time: Utc::now() - Duration::seconds(90),
            end_time: None,
        };
        assert!(session.is_active());
        let duration = session.duration_seconds();
        assert!((89..=92).contains(&duration), "got {duration}");
    }
}
