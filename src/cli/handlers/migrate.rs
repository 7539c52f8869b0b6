//! Migrate command handler
//!
//! Handles database migration operations including dry-run and rollback.

use crate::config::settings::Settings;
use crate::db::MIGRATIONS;
use crate::error::{AppError, AppResult};

/// Handler for the migrate command
pub struct MigrateCommandHandler {
    config: Settings,
}

impl MigrateCommandHandler {
    /// Create a new migrate command handler
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Execute the migrate command with dry-run and rollback support
    ///
    /// # Arguments
    /// * `dry_run` - If true, shows pending migrations without applying them
    /// * `rollback` - Optional number of migrations to rollback
    ///
    /// # Errors
    /// - Database connection errors
    /// - Migration execution errors
    /// - Configuration validation errors
    pub async fn execute(&self, dry_run: bool, rollback: Option<u32>) -> AppResult<()> {
        self.config.database.validate()?;

        if dry_run {
            self.show_pending_migrations().await?;
            return Ok(());
        }

        if let Some(steps) = rollback {
            self.rollback_migrations(steps).await?;
        } else {
            self.run_migrations().await?;
        }

        Ok(())
    }

    /// Show pending migrations without applying them
    async fn show_pending_migrations(&self) -> AppResult<()> {
        println!("Checking for pending migrations...");

        let database_url = self.config.database.url.clone();
        let pending_count: usize = tokio::task::spawn_blocking(move || {
            let mut conn = establish_sync_connection(&database_url)?;

            use diesel_migrations::MigrationHarness;
            let pending = conn.pending_migrations(MIGRATIONS).map_err(|e| {
                AppError::Database {
                    operation: "check pending migrations".to_string(),
                    source: anyhow::anyhow!("Migration error: {}", e),
                }
            })?;

            Ok::<_, AppError>(pending.len())
        })
        .await
        .map_err(|e| AppError::Internal {
            source: anyhow::Error::from(e),
        })??;

        if pending_count == 0 {
            println!("✓ No pending migrations found - database is up to date");
        } else {
            println!("Found {} pending migration(s)", pending_count);
            println!("\nRun without --dry-run to apply these migrations");
        }

        Ok(())
    }

    /// Run pending migrations
    async fn run_migrations(&self) -> AppResult<()> {
        println!("Running database migrations...");

        let database_url = self.config.database.url.clone();
        let applied_migrations = tokio::task::spawn_blocking(move || {
            let mut conn = establish_sync_connection(&database_url)?;

            use diesel_migrations::MigrationHarness;
            let applied = conn.run_pending_migrations(MIGRATIONS).map_err(|e| {
                AppError::Database {
                    operation: "run pending migrations".to_string(),
                    source: anyhow::anyhow!("Migration error: {}", e),
                }
            })?;

            let migration_names: Vec<String> = applied.iter().map(|m| m.to_string()).collect();
            Ok::<_, AppError>(migration_names)
        })
        .await
        .map_err(|e| AppError::Internal {
            source: anyhow::Error::from(e),
        })??;

        if applied_migrations.is_empty() {
            println!("✓ No pending migrations - database is up to date");
        } else {
            println!("✓ Applied {} migration(s):", applied_migrations.len());
            for name in applied_migrations {
                println!("  - {}", name);
            }
        }

        Ok(())
    }

    /// Rollback the given number of migrations
    async fn rollback_migrations(&self, steps: u32) -> AppResult<()> {
        println!("Rolling back {} migration(s)...", steps);

        let database_url = self.config.database.url.clone();
        let reverted = tokio::task::spawn_blocking(move || {
            let mut conn = establish_sync_connection(&database_url)?;

            use diesel_migrations::MigrationHarness;
            let mut reverted_names = Vec::new();
            for _ in 0..steps {
                let reverted = conn.revert_last_migration(MIGRATIONS).map_err(|e| {
                    AppError::Database {
                        operation: "revert last migration".to_string(),
                        source: anyhow::anyhow!("Migration error: {}", e),
                    }
                })?;
                reverted_names.push(reverted.to_string());
            }

            Ok::<_, AppError>(reverted_names)
        })
        .await
        .map_err(|e| AppError::Internal {
            source: anyhow::Error::from(e),
        })??;

        println!("✓ Reverted {} migration(s):", reverted.len());
        for name in reverted {
            println!("  - {}", name);
        }

        Ok(())
    }
}

/// Migrations run over a blocking connection; the async pool is not needed
/// for one-shot commands.
fn establish_sync_connection(database_url: &str) -> AppResult<diesel::pg::PgConnection> {
    use diesel::Connection;

    diesel::pg::PgConnection::establish(database_url).map_err(|e| AppError::Database {
        operation: "establish connection for migrations".to_string(),
        source: anyhow::anyhow!("Connection error: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_migrate_requires_database_url() {
        let handler = MigrateCommandHandler::new(Settings::default());
        let result = handler.execute(true, None).await;
        assert!(result.is_err());
    }
}
