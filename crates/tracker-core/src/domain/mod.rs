pub mod account;
pub mod work_session;

pub use account::{AuthenticatedUser, Role, StaticAccount};
pub use work_session::WorkSession;
