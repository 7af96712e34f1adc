pub mod middleware;

pub use middleware::{require_admin, require_auth};
