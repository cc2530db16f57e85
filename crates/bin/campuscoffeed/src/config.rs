//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `campuscoffee.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use serde::Deserialize;

use campuscoffee_domain::approval::ApprovalConfig;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Database settings.
    pub database: DatabaseConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Review approval settings.
    pub approval: ApprovalSettings,
}

/// `SQLite` database configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `SQLite` connection URL or file path.
    pub url: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Review approval configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ApprovalSettings {
    /// Approvals a review needs before it counts as approved.
    pub min_count: u32,
}

impl Config {
    /// Load configuration from `campuscoffee.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting values are invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("campuscoffee.toml")?;
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(
        &mut self,
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(val) = var("CAMPUSCOFFEE_DATABASE_URL") {
            self.database.url = val;
        }
        if let Some(val) = var("CAMPUSCOFFEE_APPROVAL_MIN_COUNT") {
            self.approval.min_count = val.parse().map_err(|_| {
                ConfigError::Validation(format!(
                    "CAMPUSCOFFEE_APPROVAL_MIN_COUNT must be a non-negative integer, got '{val}'"
                ))
            })?;
        }
        if let Some(val) = var("CAMPUSCOFFEE_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.approval_config()?;
        Ok(())
    }

    /// Return the database URL in `sqlx`-compatible format.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database.url
    }

    /// Build the domain approval settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] when `min_count` is zero.
    pub fn approval_config(&self) -> Result<ApprovalConfig, ConfigError> {
        ApprovalConfig::new(self.approval.min_count)
            .map_err(|err| ConfigError::Validation(err.to_string()))
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:campuscoffee.db?mode=rwc".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "campuscoffeed=info,campuscoffee_app=info".to_string(),
        }
    }
}

impl Default for ApprovalSettings {
    fn default() -> Self {
        Self { min_count: 3 }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
