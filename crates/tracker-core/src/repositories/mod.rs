pub mod memory;
pub mod session_repository;

pub use memory::InMemorySessionRepository;
pub use session_repository::SessionRepository;
