//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables carry the `MARKETPLACE` prefix and
//! nested values are separated by double underscores. Every section has
//! defaults, so an empty environment yields a working file-backed setup.
//!
//! # Example
//!
//! ```no_run
//! use marketplace_console::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Storage at {}", config.storage.data_dir.display());
//! ```

mod error;
mod seed;
mod storage;
pub mod telemetry;

pub use error::{ConfigError, TelemetryError, ValidationError};
pub use seed::SeedConfig;
pub use storage::{StorageBackend, StorageConfig};
pub use telemetry::{init_tracing, TelemetryConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Key-value storage backend and quota
    #[serde(default)]
    pub storage: StorageConfig,

    /// Logging
    #[serde(default)]
    pub telemetry: TelemetryConfig,

    /// Demo data seeding
    #[serde(default)]
    pub seed: SeedConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Environment Variable Format
    ///
    /// - `MARKETPLACE__STORAGE__BACKEND=memory` -> `storage.backend = memory`
    /// - `MARKETPLACE__STORAGE__QUOTA_BYTES=5000000` -> `storage.quota_bytes`
    /// - `MARKETPLACE__TELEMETRY__LOG_LEVEL=debug` -> `telemetry.log_level`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("MARKETPLACE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.storage.validate()?;
        self.telemetry.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // Env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "MARKETPLACE__STORAGE__BACKEND",
        "MARKETPLACE__STORAGE__DATA_DIR",
        "MARKETPLACE__STORAGE__QUOTA_BYTES",
        "MARKETPLACE__TELEMETRY__LOG_LEVEL",
        "MARKETPLACE__TELEMETRY__JSON",
        "MARKETPLACE__SEED__DEMO_DATA",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.storage.backend, StorageBackend::File);
        assert_eq!(config.telemetry.log_level, "info");
        assert!(config.seed.demo_data);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("MARKETPLACE__STORAGE__BACKEND", "memory");
        env::set_var("MARKETPLACE__STORAGE__DATA_DIR", "/tmp/marketplace");
        env::set_var("MARKETPLACE__STORAGE__QUOTA_BYTES", "5000000");
        env::set_var("MARKETPLACE__TELEMETRY__LOG_LEVEL", "debug");
        env::set_var("MARKETPLACE__TELEMETRY__JSON", "true");
        env::set_var("MARKETPLACE__SEED__DEMO_DATA", "false");
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.storage.data_dir, PathBuf::from("/tmp/marketplace"));
        assert_eq!(config.storage.quota_bytes, Some(5_000_000));
        assert_eq!(config.telemetry.log_level, "debug");
        assert!(config.telemetry.json);
        assert!(!config.seed.demo_data);
    }

    #[test]
    fn test_validate_rejects_zero_quota() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("MARKETPLACE__STORAGE__QUOTA_BYTES", "0");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.validate(), Err(ValidationError::InvalidQuota));
    }

    #[test]
    fn test_unknown_backend_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("MARKETPLACE__STORAGE__BACKEND", "cloud");
        let result = AppConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
