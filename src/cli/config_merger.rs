//! Configuration merger for CLI arguments and config files
//!
//! Handles merging CLI argument overrides with file-based configuration,
//! implementing the configuration precedence logic.

use super::parser::{Cli, Commands};
use crate::config::error::ConfigError;
use crate::config::{ConfigLoader, settings::Settings};
use std::path::PathBuf;

/// Merges CLI argument overrides onto file-based configuration.
///
/// CLI arguments have the highest priority; configuration file values are
/// used as the base.
pub struct ConfigurationMerger {
    base_config: Settings,
}

impl ConfigurationMerger {
    /// Create a new configuration merger with base configuration
    pub fn new(base_config: Settings) -> Self {
        Self { base_config }
    }

    /// Create a configuration merger by loading configuration from the
    /// specified path or the default loader.
    ///
    /// # Errors
    /// Returns ConfigError if configuration loading or validation fails
    pub fn from_config_path(config_path: Option<&PathBuf>) -> Result<Self, ConfigError> {
        let config = if let Some(path) = config_path {
            Self::validate_config_file_access(path)?;
            Self::load_config_from_file(path)?
        } else {
            ConfigLoader::new()?.load()?
        };

        Ok(Self::new(config))
    }

    fn validate_config_file_access(path: &PathBuf) -> Result<(), ConfigError> {
        if !path.exists() {
            return Err(ConfigError::ValidationError {
                field: "config_file".to_string(),
                message: format!("Configuration file does not exist: '{}'", path.display()),
            });
        }

        if !path.is_file() {
            return Err(ConfigError::ValidationError {
                field: "config_file".to_string(),
                message: format!("Configuration path is not a file: '{}'", path.display()),
            });
        }

        match std::fs::File::open(path) {
            Ok(_) => Ok(()),
            Err(e) => Err(ConfigError::ValidationError {
                field: "config_file".to_string(),
                message: format!("Cannot read configuration file '{}': {}", path.display(), e),
            }),
        }
    }

    fn load_config_from_file(path: &PathBuf) -> Result<Settings, ConfigError> {
        // Route through the single-file mode of the loader
        unsafe {
            std::env::set_var("PORTAL_CONFIG_FILE", path);
        }

        let result = ConfigLoader::new().and_then(|loader| loader.load());

        unsafe {
            std::env::remove_var("PORTAL_CONFIG_FILE");
        }

        result
    }

    /// Merge CLI arguments with the base configuration.
    ///
    /// # Returns
    /// A new Settings instance with CLI overrides applied
    pub fn merge_cli_args(&self, cli: &Cli) -> Result<Settings, ConfigError> {
        let mut config = self.base_config.clone();

        self.apply_global_overrides(&mut config, cli);

        if let Some(ref command) = cli.command {
            self.apply_command_overrides(&mut config, command);
        }

        config.validate()?;

        Ok(config)
    }

    fn apply_global_overrides(&self, config: &mut Settings, cli: &Cli) {
        if cli.verbose {
            config.logger.level = "debug".to_string();
        } else if cli.quiet {
            config.logger.level = "error".to_string();
        }
    }

    fn apply_command_overrides(&self, config: &mut Settings, command: &Commands) {
        match command {
            Commands::Serve {
                host,
                port,
                log_level,
                dry_run: _,
            } => {
                if let Some(host_addr) = host {
                    config.server.host = host_addr.clone();
                }

                if let Some(port_num) = port {
                    config.server.port = *port_num;
                }

                // Command-specific override takes precedence over global flags
                if let Some(level) = log_level {
                    config.logger.level = level.clone().into();
                }
            }
            Commands::Migrate { .. } => {
                // Migration commands don't override server configuration
            }
        }
    }

    /// Get the current configuration (useful for inspection)
    pub fn config(&self) -> &Settings {
        &self.base_config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::parser::Cli;
    use clap::Parser;

    fn create_valid_base_config() -> Settings {
        let mut config = Settings::default();
        config.database.url = "postgres://localhost/portal".to_string();
        config
    }

    #[test]
    fn test_configuration_merger_new() {
        let base_config = Settings::default();
        let merger = ConfigurationMerger::new(base_config.clone());
        assert_eq!(merger.config(), &base_config);
    }

    #[test]
    fn test_merge_verbose_flag() {
        let merger = ConfigurationMerger::new(create_valid_base_config());

        let cli = Cli::try_parse_from(["bizportal", "--verbose"]).unwrap();
        let merged_config = merger.merge_cli_args(&cli).unwrap();

        assert_eq!(merged_config.logger.level, "debug");
    }

    #[test]
    fn test_merge_quiet_flag() {
        let merger = ConfigurationMerger::new(create_valid_base_config());

        let cli = Cli::try_parse_from(["bizportal", "--quiet"]).unwrap();
        let merged_config = merger.merge_cli_args(&cli).unwrap();

        assert_eq!(merged_config.logger.level, "error");
    }

    #[test]
    fn test_merge_serve_host_and_port() {
        let merger = ConfigurationMerger::new(create_valid_base_config());

        let cli = Cli::try_parse_from([
            "bizportal", "serve", "--host", "0.0.0.0", "--port", "8080",
        ])
        .unwrap();
        let merged_config = merger.merge_cli_args(&cli).unwrap();

        assert_eq!(merged_config.server.host, "0.0.0.0");
        assert_eq!(merged_config.server.port, 8080);
    }

    #[test]
    fn test_command_log_level_overrides_global() {
        let merger = ConfigurationMerger::new(create_valid_base_config());

        let cli =
            Cli::try_parse_from(["bizportal", "--verbose", "serve", "--log-level", "warn"])
                .unwrap();
        let merged_config = merger.merge_cli_args(&cli).unwrap();

        assert_eq!(merged_config.logger.level, "warn");
    }

    #[test]
    fn test_merge_rejects_invalid_base_config() {
        // No database URL configured
        let merger = ConfigurationMerger::new(Settings::default());

        let cli = Cli::try_parse_from(["bizportal", "serve"]).unwrap();
        assert!(merger.merge_cli_args(&cli).is_err());
    }
}
