//! Application configuration management.
//!
//! Every value has a documented default so the one-shot binaries run
//! without any configuration files present. Defaults for the `[seed]` and
//! `[tasks]` sections are the business constants the original maintenance
//! scripts were written against.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Auth token configuration.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Admin seed configuration.
    #[serde(default)]
    pub seed: SeedConfig,
    /// Defaults for the one-shot task binaries.
    #[serde(default)]
    pub tasks: TasksConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL. A local SQLite file by default;
    /// production supplies a Postgres URL.
    #[serde(default = "default_database_url")]
    pub url: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
        }
    }
}

fn default_database_url() -> String {
    "sqlite://estratosfera.db?mode=rwc".to_string()
}

/// Auth token configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Secret key for signing session tokens.
    #[serde(default = "default_secret")]
    pub secret: String,
    /// Session token expiration in seconds.
    #[serde(default = "default_token_expiry")]
    pub token_expiry_secs: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            secret: default_secret(),
            token_expiry_secs: default_token_expiry(),
        }
    }
}

fn default_secret() -> String {
    "change-me-in-production".to_string()
}

fn default_token_expiry() -> i64 {
    86400 // 24 hours
}

/// Admin seed configuration.
///
/// The seed operation upserts exactly one administrative user keyed on
/// `admin_email`; the password is only used on first creation.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedConfig {
    /// Identity key of the administrative account.
    #[serde(default = "default_admin_email")]
    pub admin_email: String,
    /// Display name used on first creation.
    #[serde(default = "default_admin_name")]
    pub admin_name: String,
    /// Initial password, hashed before storage.
    #[serde(default = "default_admin_password")]
    pub admin_password: String,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            admin_email: default_admin_email(),
            admin_name: default_admin_name(),
            admin_password: default_admin_password(),
        }
    }
}

fn default_admin_email() -> String {
    "admin@estratosfera.net".to_string()
}

fn default_admin_name() -> String {
    "Admin Principal".to_string()
}

fn default_admin_password() -> String {
    "admin123".to_string()
}

/// Defaults for the one-shot task binaries.
///
/// These were hard-coded in the original maintenance scripts; they are
/// configuration values here so each task stays generic.
#[derive(Debug, Clone, Deserialize)]
pub struct TasksConfig {
    /// Substring matched (case-insensitively) against client names.
    #[serde(default = "default_name_needle")]
    pub name_needle: String,
    /// Transaction id targeted by the delete-transaction task.
    #[serde(default = "default_transaction_id")]
    pub transaction_id: i32,
    /// Provider name targeted by the delete-provider task.
    #[serde(default = "default_provider_nombre")]
    pub provider_nombre: String,
    /// Row limit for the phone dump task.
    #[serde(default = "default_phone_limit")]
    pub phone_limit: u64,
}

impl Default for TasksConfig {
    fn default() -> Self {
        Self {
            name_needle: default_name_needle(),
            transaction_id: default_transaction_id(),
            provider_nombre: default_provider_nombre(),
            phone_limit: default_phone_limit(),
        }
    }
}

fn default_name_needle() -> String {
    "Nfx".to_string()
}

fn default_transaction_id() -> i32 {
    8478
}

fn default_provider_nombre() -> String {
    "Prueba proveedor ".to_string()
}

fn default_phone_limit() -> u64 {
    20
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("ESTRATOSFERA").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
