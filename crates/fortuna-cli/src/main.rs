mod commands;
mod error;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

#[cfg(feature = "broadcast")]
use crate::commands::remind;
#[cfg(feature = "data-api")]
use crate::commands::spins;
use crate::commands::{draw, normalize, Context};
use crate::error::{exit_code_for, report_error};
use fortuna_config as config;

#[derive(Debug, Parser)]
#[command(name = "fortuna", version, about = "fortuna CLI")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Normalize phone input into the canonical national form
    Normalize(normalize::NormalizeArgs),
    /// Draw random wheel sectors
    Draw(draw::DrawArgs),
    /// Broadcast an unused-spins reminder to exported users
    #[cfg(feature = "broadcast")]
    Remind(remind::RemindArgs),
    #[cfg(feature = "data-api")]
    #[command(subcommand)]
    Spins(spins::SpinsCommand),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        config: config_path,
        json,
        verbose,
        command,
    } = cli;

    let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
    if verbose {
        match config::resolve_config_path(config_path) {
            Ok(path) => {
                if path.exists() {
                    debug!(path = %path.display(), "config resolved");
                } else {
                    debug!(path = %path.display(), "config missing, using defaults");
                }
            }
            Err(err) => {
                debug!(error = %err, "config unavailable");
            }
        }
    }

    let ctx = Context {
        json,
        config: &app_config,
    };

    match command {
        Command::Normalize(args) => normalize::normalize(&ctx, args),
        Command::Draw(args) => draw::draw(&ctx, args),
        #[cfg(feature = "broadcast")]
        Command::Remind(args) => remind::remind(&ctx, args),
        #[cfg(feature = "data-api")]
        Command::Spins(cmd) => match cmd {
            spins::SpinsCommand::Seed(args) => spins::seed(&ctx, args),
        },
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init();
}
