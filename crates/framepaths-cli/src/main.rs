//! CLI entry point - the composition root.
//!
//! Loads `.env`, sets up logging, installs the path layout and dispatches
//! to a handler.

use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use framepaths_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

fn init_tracing(verbose: bool) {
    // Priority: RUST_LOG env var > --verbose > default (warn)
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .compact()
        .try_init()
        .ok();
}

fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // No command provided - show help
    let Some(command) = cli.command.as_ref() else {
        use clap::CommandFactory;
        Cli::command().print_help()?;
        return Ok(());
    };

    let mut stdout = io::stdout().lock();

    let result: Result<(), CliError> = match command {
        Commands::Paths { json, check } => {
            let paths = bootstrap(&CliConfig::from_cli(&cli))?;
            handlers::paths::execute(paths, *json, *check, &mut stdout)
        }
        Commands::Ensure { paths: targets } => handlers::ensure::execute(targets, &mut stdout),
        Commands::Encode { path } => handlers::encode::execute(path, &mut stdout),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }

    Ok(())
}
