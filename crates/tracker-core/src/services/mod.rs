pub mod auth_service;
pub mod tracker_service;

pub use auth_service::AuthService;
pub use tracker_service::TrackerService;
