//! Application configuration module
//!
//! Configuration is loaded with the `config` and `dotenvy` crates. The only
//! setting taken from the environment is the listening port (`PORT`,
//! default 3000); everything else uses compiled-in defaults.
//!
//! # Example
//!
//! ```no_run
//! use quran_tracker::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr());
//! ```

mod database;
mod error;
mod server;

pub use database::{DatabaseConfig, IN_MEMORY_URL};
pub use error::{ConfigError, ValidationError};
pub use server::ServerConfig;

/// Root application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Server configuration (host, port, log filter)
    pub server: ServerConfig,

    /// Database configuration (SQLite file and pool)
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads `PORT` from the process environment
    /// 3. Fills every other setting from defaults
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `PORT` cannot be parsed as a port number.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        Self::load_from(config::Environment::default())
    }

    /// Load configuration from an explicit environment source.
    pub fn load_from(environment: config::Environment) -> Result<Self, ConfigError> {
        let server: ServerConfig = config::Config::builder()
            .add_source(environment.try_parsing(true))
            .build()?
            .try_deserialize()?;

        Ok(Self {
            server,
            database: DatabaseConfig::default(),
        })
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        Ok(())
    }
}
