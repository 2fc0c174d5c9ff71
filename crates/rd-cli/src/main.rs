use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use rd_cli::commands::{format, quote, session};
use rd_cli::{Cli, Commands, Config};

fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let config = Config::load_from(config_path).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Logs go to stderr so they never interleave with shell output
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let mut stdout = std::io::stdout();
    match &cli.command {
        Some(Commands::Session) => {
            let config = load_config(cli.config.as_deref())?;
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_time()
                .build()
                .context("failed to start runtime")?;
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            runtime.block_on(session::run(stdin, &mut stdout, &config))?;
        }
        Some(Commands::Quote) => {
            quote::run(&mut stdout, &rd_core::SystemClock)?;
        }
        Some(Commands::Format { seconds }) => {
            format::run(&mut stdout, *seconds)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
