use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use argline::cli::config::CliArgs;
use argline::cli::repl::{self, Inspector};
use argline::config::Config;

fn main() -> Result<()> {
    let args = CliArgs::parse();

    let default_filter = if args.verbose { "argline=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .compact()
        .init();

    let config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load_default(),
    };
    debug!(?config, "configuration loaded");

    let inspector = Inspector {
        options: args.parse_options(&config),
        raw: args.raw_output(&config),
        colors_enabled: args.colors_enabled(&config),
        verbose: args.verbose,
    };

    if let Some(command) = &args.command {
        repl::run_command(command, &inspector)?;
    } else if args.pipe {
        repl::run_pipe(&inspector)?;
    } else {
        repl::run_interactive(&inspector)?;
    }

    Ok(())
}
