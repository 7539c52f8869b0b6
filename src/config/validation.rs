//! Configuration validation logic
//!
//! Validation methods for all configuration structures, with per-field
//! messages that name the offending key.

use crate::config::error::ConfigError;
use crate::config::settings::{
    DatabaseConfig, FileSettings, IdentityConfig, LoggerSettings, ServerConfig, Settings,
};

/// Valid log levels
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Valid log formats
const VALID_LOG_FORMATS: &[&str] = &["full", "compact", "json"];

impl ServerConfig {
    /// Validate server configuration
    ///
    /// # Validation Rules
    /// - Port must be between 1 and 65535
    /// - Request timeout must be greater than 0
    /// - Keep-alive timeout must be greater than 0
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::validation(
                "server.port",
                "Port must be between 1 and 65535. Please specify a valid port number.",
            ));
        }

        if self.request_timeout == 0 {
            return Err(ConfigError::validation(
                "server.request_timeout",
                "Request timeout must be greater than 0 seconds.",
            ));
        }

        if self.keep_alive_timeout == 0 {
            return Err(ConfigError::validation(
                "server.keep_alive_timeout",
                "Keep-alive timeout must be greater than 0 seconds.",
            ));
        }

        Ok(())
    }
}

impl DatabaseConfig {
    /// Validate database configuration
    ///
    /// # Validation Rules
    /// - URL must not be empty and must use a PostgreSQL scheme
    /// - Max connections must be greater than 0
    /// - Min connections must be greater than 0 and not exceed max
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url.is_empty() {
            return Err(ConfigError::validation(
                "database.url",
                "Database URL is required. Please specify a valid database connection string.",
            ));
        }

        if !self.is_valid_database_url() {
            return Err(ConfigError::validation(
                "database.url",
                "Invalid database URL format. Expected format: postgres://[user:password@]host[:port]/database",
            ));
        }

        if self.max_connections == 0 {
            return Err(ConfigError::validation(
                "database.max_connections",
                "Max connections must be greater than 0.",
            ));
        }

        if self.min_connections == 0 {
            return Err(ConfigError::validation(
                "database.min_connections",
                "Min connections must be greater than 0.",
            ));
        }

        if self.min_connections > self.max_connections {
            return Err(ConfigError::ValidationError {
                field: "database.min_connections".to_string(),
                message: format!(
                    "Min connections ({}) cannot exceed max connections ({}).",
                    self.min_connections, self.max_connections
                ),
            });
        }

        Ok(())
    }

    fn is_valid_database_url(&self) -> bool {
        let valid_schemes = ["postgres://", "postgresql://"];
        valid_schemes
            .iter()
            .any(|scheme| self.url.starts_with(scheme))
    }
}

impl IdentityConfig {
    /// Validate identity provider configuration
    ///
    /// # Validation Rules
    /// - Base URL and token URL must be http(s) URLs
    /// - Client credentials must be present
    /// - Request timeout must be greater than 0
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.is_empty() {
            return Err(ConfigError::validation(
                "identity.base_url",
                "Identity provider base URL is required.",
            ));
        }

        if !Self::is_http_url(&self.base_url) {
            return Err(ConfigError::validation(
                "identity.base_url",
                "Identity provider base URL must start with http:// or https://.",
            ));
        }

        if self.token_url.is_empty() {
            return Err(ConfigError::validation(
                "identity.token_url",
                "Identity provider token URL is required.",
            ));
        }

        if !Self::is_http_url(&self.token_url) {
            return Err(ConfigError::validation(
                "identity.token_url",
                "Identity provider token URL must start with http:// or https://.",
            ));
        }

        if self.client_id.is_empty() {
            return Err(ConfigError::validation(
                "identity.client_id",
                "Identity provider client id is required.",
            ));
        }

        if self.client_secret.is_empty() {
            return Err(ConfigError::validation(
                "identity.client_secret",
                "Identity provider client secret is required.",
            ));
        }

        if self.request_timeout == 0 {
            return Err(ConfigError::validation(
                "identity.request_timeout",
                "Identity request timeout must be greater than 0 seconds.",
            ));
        }

        Ok(())
    }

    fn is_http_url(url: &str) -> bool {
        url.starts_with("http://") || url.starts_with("https://")
    }
}

impl FileSettings {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.enabled && self.path.trim().is_empty() {
            return Err(ConfigError::validation(
                "logger.file.path",
                "File path is required when file logging is enabled.",
            ));
        }

        if !VALID_LOG_FORMATS.contains(&self.format.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError {
                field: "logger.file.format".to_string(),
                message: format!(
                    "Invalid log format '{}'. Valid formats are: {}",
                    self.format,
                    VALID_LOG_FORMATS.join(", ")
                ),
            });
        }

        Ok(())
    }
}

impl LoggerSettings {
    /// Validate logger settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !VALID_LOG_LEVELS.contains(&self.level.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError {
                field: "logger.level".to_string(),
                message: format!(
                    "Invalid log level '{}'. Valid levels are: {}",
                    self.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            });
        }

        self.file.validate()?;

        if !self.console.enabled && !self.file.enabled {
            return Err(ConfigError::validation(
                "logger",
                "At least one log output (console or file) must be enabled.",
            ));
        }

        Ok(())
    }
}

impl Settings {
    /// Validate the complete settings tree
    ///
    /// JWT and identity sections are validated separately at server startup
    /// so that offline commands (e.g. migrations) do not require them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.database.validate()?;
        self.logger.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::ConsoleSettings;

    fn valid_settings() -> Settings {
        let mut settings = Settings::default();
        settings.database.url = "postgres://localhost/portal".to_string();
        settings
    }

    #[test]
    fn test_server_config_zero_port() {
        let config = ServerConfig {
            port: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_database_config_empty_url() {
        let config = DatabaseConfig::default();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_database_config_wrong_scheme() {
        let config = DatabaseConfig {
            url: "mysql://localhost/portal".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_database_config_min_exceeds_max() {
        let config = DatabaseConfig {
            url: "postgres://localhost/portal".to_string(),
            max_connections: 2,
            min_connections: 5,
            ..Default::default()
        };
        let result = config.validate();
        assert!(result.is_err());
        if let Err(ConfigError::ValidationError { field, .. }) = result {
            assert_eq!(field, "database.min_connections");
        }
    }

    #[test]
    fn test_identity_config_missing_base_url() {
        let config = IdentityConfig::default();
        let result = config.validate();
        assert!(result.is_err());
        if let Err(ConfigError::ValidationError { field, .. }) = result {
            assert_eq!(field, "identity.base_url");
        }
    }

    #[test]
    fn test_identity_config_valid() {
        let config = IdentityConfig {
            base_url: "https://id.example.com/api".to_string(),
            token_url: "https://id.example.com/oauth/token".to_string(),
            client_id: "portal".to_string(),
            client_secret: "secret".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_logger_settings_invalid_level() {
        let settings = LoggerSettings {
            level: "loud".to_string(),
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_logger_settings_no_outputs() {
        let settings = LoggerSettings {
            console: ConsoleSettings {
                enabled: false,
                colored: false,
            },
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_settings_validate_success() {
        assert!(valid_settings().validate().is_ok());
    }

    #[test]
    fn test_settings_validate_requires_database_url() {
        let settings = Settings::default();
        assert!(settings.validate().is_err());
    }
}
