//! Command executor for dispatching CLI commands
//!
//! Provides the main entry point for executing CLI commands after parsing
//! and configuration loading.

use super::handlers::{MigrateCommandHandler, ServeCommandHandler};
use super::parser::{Cli, Commands};
use crate::config::settings::Settings;
use crate::error::AppResult;

/// Execute a CLI command with the given settings
///
/// Dispatches to the appropriate command handler based on the parsed CLI
/// arguments.
///
/// # Returns
/// Returns Ok(()) on success, or AppError on failure. For a non-dry-run
/// serve command this returns Ok to signal that the server should start;
/// actual startup is handled in main.rs.
pub async fn execute_command(cli: &Cli, settings: Settings) -> AppResult<()> {
    validate_command_args(cli)?;

    match &cli.command {
        Some(Commands::Serve { dry_run, .. }) if *dry_run => {
            ServeCommandHandler::new(settings).execute(true).await
        }
        Some(Commands::Serve { .. }) | None => Ok(()),
        Some(Commands::Migrate { dry_run, rollback }) => {
            MigrateCommandHandler::new(settings)
                .execute(*dry_run, *rollback)
                .await
        }
    }
}

/// Validate command arguments before execution
fn validate_command_args(cli: &Cli) -> AppResult<()> {
    if let Err(msg) = cli.validate() {
        return Err(crate::error::AppError::Validation {
            field: "cli_arguments".to_string(),
            reason: msg,
        });
    }

    if let Some(Commands::Migrate { rollback, .. }) = &cli.command {
        if let Some(steps) = rollback {
            if *steps > 50 {
                eprintln!(
                    "Warning: Rolling back {} migrations is a large operation. Consider using smaller steps.",
                    steps
                );
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::parser::Cli;
    use clap::Parser;

    fn create_valid_config() -> Settings {
        let mut config = Settings::default();
        config.database.url = "postgres://localhost/portal".to_string();
        config
    }

    #[tokio::test]
    async fn test_execute_serve_dry_run() {
        let cli = Cli::try_parse_from(["bizportal", "serve", "--dry-run"]).unwrap();
        let config = create_valid_config();

        let result = execute_command(&cli, config).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_execute_serve_normal_defers_to_main() {
        let cli = Cli::try_parse_from(["bizportal", "serve"]).unwrap();
        let config = create_valid_config();

        let result = execute_command(&cli, config).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_validate_conflicting_args() {
        let cli = Cli {
            command: Some(Commands::Migrate {
                dry_run: true,
                rollback: Some(5),
            }),
            config: None,
            env: None,
            verbose: false,
            quiet: false,
        };

        let result = validate_command_args(&cli);
        assert!(result.is_err());
    }
}
