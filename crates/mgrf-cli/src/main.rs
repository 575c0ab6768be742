//! # mgrf CLI entry point
//!
//! Parses command-line arguments, loads configuration and the route catalog,
//! and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mgrf_cli::analytics::{run_analytics, AnalyticsArgs};
use mgrf_cli::config::CliConfig;
use mgrf_cli::find::{run_find, FindArgs};
use mgrf_cli::options::{
    run_options, run_provinces, run_qualifications, OptionsArgs, ProvincesArgs,
    QualificationsArgs,
};
use mgrf_cli::update::{run_update, UpdateArgs};
use mgrf_cli::validate::{run_validate, ValidateArgs};
use mgrf_cli::AppContext;

/// Merrick Global route finder
///
/// Finds the licensing routes an internationally trained physician is
/// eligible for and prints each route's steps, documents, fees and
/// timelines.
#[derive(Parser, Debug)]
#[command(name = "mgrf", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Find eligible licensing routes and print their checklists.
    Find(FindArgs),

    /// List incoming countries, destination countries, and specialties.
    Options(OptionsArgs),

    /// List provinces per destination country.
    Provinces(ProvincesArgs),

    /// List qualifications relevant to an origin and specialty.
    Qualifications(QualificationsArgs),

    /// Check catalog invariants and print stats and digest.
    Validate(ValidateArgs),

    /// Replace the route dataset from a JSON or YAML file.
    Update(UpdateArgs),

    /// Show the most frequent lookups.
    Analytics(AnalyticsArgs),
}

fn init_tracing(verbose: u8, json: bool) {
    // RUST_LOG wins over -v when set.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn run(cli: Cli) -> anyhow::Result<u8> {
    let base_dir = std::env::current_dir().context("failed to resolve working directory")?;
    let config = CliConfig::load(cli.config.as_deref())?;
    let mut ctx = AppContext::load(&config, &base_dir)?;

    match cli.command {
        Commands::Find(args) => run_find(&args, &ctx),
        Commands::Options(args) => run_options(&args, &ctx),
        Commands::Provinces(args) => run_provinces(&args, &ctx),
        Commands::Qualifications(args) => run_qualifications(&args, &ctx),
        Commands::Validate(args) => run_validate(&args, &ctx),
        Commands::Update(args) => run_update(&args, &mut ctx, &base_dir),
        Commands::Analytics(args) => run_analytics(&args, &ctx),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_json);

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "mgrf starting");

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
