mod cli;

use anyhow::Result;
use clap::Parser;
use dbscrub_config::Config;
use dbscrub_engine::RunOutcome;

fn main() -> Result<()> {
    let _cli = cli::Cli::parse();

    // A broken config must not block redaction; fall back and report it
    let (config, config_err) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .or_else(|_| tracing_subscriber::EnvFilter::try_new(&config.log.level))
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    if let Some(e) = config_err {
        tracing::warn!("Ignoring unreadable config: {e:#}");
    }

    match dbscrub_engine::run_default()? {
        RunOutcome::Missing => tracing::debug!("No {} found", dbscrub_engine::TARGET_FILE),
        RunOutcome::Unchanged => {}
        RunOutcome::Redacted { count } => tracing::debug!(count, "Done"),
    }

    Ok(())
}
