//! # Tracker Security
//!
//! Security utilities: password hashing, HTTP Basic credential parsing.

pub mod basic;
pub mod password;

pub use basic::BasicCredentials;
pub use password::PasswordService;
