use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use tracker_core::domain::{Role, StaticAccount};

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub cors: CorsConfig,
    pub tracker: TrackerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub pool_max_size: u32,
    pub pool_timeout_seconds: u64,
}

/// Bcrypt hashes for the two static accounts. No defaults: credentials are
/// supplied via configuration, never hardcoded.
#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub admin_password_hash: String,
    pub client_password_hash: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TrackerConfig {
    pub contracted_hours: u32,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("database.pool_max_size", 5)?
            .set_default("database.pool_timeout_seconds", 3)?
            .set_default("cors.allowed_origins", Vec::<String>::new())?
            .set_default("tracker.contracted_hours", 60)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(Environment::with_prefix("APP").separator("__").try_parsing(true))
            .build()?;

        config.try_deserialize()
    }

    /// The fixed credential set: `admin`/ADMIN and `client`/CLIENT.
    pub fn accounts(&self) -> Vec<StaticAccount> {
        vec![
            StaticAccount {
                username: "admin".to_string(),
                role: Role::Admin,
                password_hash: self.auth.admin_password_hash.clone(),
            },
            StaticAccount {
                username: "client".to_string(),
                role: Role::Client,
                password_hash: self.auth.client_password_hash.clone(),
            },
        ]
    }
}
