pub mod settings;

pub use settings::{CorsConfig, Settings, TrackerConfig};
