//! CLI entry point - the composition root.

use std::io;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use trailmap_cli::handlers::{self, find::FindArgs};
use trailmap_cli::{Cli, CliError, Commands, TrailConfig, bootstrap};

fn main() -> ExitCode {
    // Load environment variables before clap reads its env fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("trailmap: {err:#}");
            let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(code)
        }
    }
}

/// Logs go to stderr so stdout stays machine-readable.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(mut cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command.take() else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = TrailConfig::from_cli(&cli)?;
    let ctx = bootstrap(&config)?;
    let mut out = io::stdout().lock();

    match command {
        Commands::Find {
            logical_paths,
            base_path,
            all,
        } => {
            let args = FindArgs {
                logical_paths,
                base_path,
                all,
            };
            handlers::find::execute(&ctx, &args, &mut out)?;
        }
        Commands::Entries { dir } => {
            handlers::entries::execute(&ctx, &dir, &mut out)?;
        }
        Commands::Stat { path } => {
            handlers::stat::execute(&ctx, &path, &mut out)?;
        }
        Commands::Show { json } => {
            handlers::show::execute(&ctx, json, &mut out)?;
        }
    }

    Ok(())
}
