use ai_portal::cli::{commands, Cli, Commands};
use ai_portal::config::Config;
use ai_portal::telemetry::init_tracing;
use anyhow::Context;
use clap::Parser;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = Config::from_env().context("Failed to load configuration")?;
    if let Some(path) = cli.config {
        config.portal.config_path = path;
    }
    config
        .validate()
        .context("Configuration validation failed")?;

    init_tracing(&config.app);

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => commands::serve_command(config).await,
        Commands::Resolve { format, cpus } => commands::resolve_command(&config, format, cpus),
    }
}
