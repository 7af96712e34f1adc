//! Domain errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("A session is already running. Stop it before starting a new one.")]
    ActiveSessionExists,

    #[error("No active session to stop.")]
    NoActiveSession,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("{0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}
