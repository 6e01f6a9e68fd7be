//! Application configuration management with security considerations.
//!
//! This module handles all configuration values required for the application.
//! Sensitive fields are clearly marked and must never be logged.

use envconfig::Envconfig;
use std::sync::LazyLock;

/// Application configuration loaded from environment variables.
#[derive(Envconfig, Clone)]
pub struct AppConfig {
    /// Environment name to deploy the app (NON-SENSITIVE)
    /// Values: "local", "dev", "staging", "prod"
    #[envconfig(default = "local")]
    pub env: String,

    /// Database URL (NON-SENSITIVE)
    /// Example: "sqlite:veterinaria.db?mode=rwc"
    #[envconfig(default = "sqlite:veterinaria.db?mode=rwc")]
    pub db_host: String,

    /// SENSITIVE: password assigned to the bootstrap "admin" account.
    /// The default only exists so a fresh local install can log in;
    /// override it in every deployed environment.
    #[envconfig(default = "admin123")]
    pub default_admin_password: String,
}

impl AppConfig {
    /// Checks if running in production environment
    pub fn is_prod(&self) -> bool {
        self.env.to_lowercase() == "prod"
    }
}

/// Global application configuration instance.
///
/// Validated on first access; a missing or malformed environment makes the
/// application panic with a descriptive message instead of running half
/// configured.
pub static APP_CONFIG: LazyLock<AppConfig> = LazyLock::new(|| {
    AppConfig::init_from_env()
        .expect("Failed to load application configuration. Check environment variables.")
});
