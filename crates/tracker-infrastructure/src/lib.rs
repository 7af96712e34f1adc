//! # Tracker Infrastructure
//!
//! PostgreSQL implementation of the tracker-core persistence ports.

pub mod database;

pub use database::connection::{create_pool, run_migrations};
pub use database::postgres::PgSessionRepository;
