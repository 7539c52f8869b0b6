use clap::Parser;

use bizportal::cli::{Cli, Commands, execute_command, init_logger_from_settings, load_and_merge_config};
use bizportal::server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = load_and_merge_config(&cli)?;
    init_logger_from_settings(&settings)?;

    execute_command(&cli, settings.clone())
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    // A non-dry-run serve command (or no command at all) starts the server
    match &cli.command {
        Some(Commands::Serve { dry_run: true, .. }) => Ok(()),
        Some(Commands::Serve { .. }) | None => Server::new(settings).run().await,
        Some(Commands::Migrate { .. }) => Ok(()),
    }
}
