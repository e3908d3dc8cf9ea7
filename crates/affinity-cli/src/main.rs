//! Affinity CLI
//!
//! Runs the batch matching pipeline against the matching API.
//!
//! # Commands
//!
//! - `run`: fetch users, compute matches, submit results, print a summary
//! - `analyze`: fetch users and print per-question answer distributions
//!
//! Connection settings come from `AFFINITY_ENDPOINT` / `AFFINITY_TOKEN`;
//! flags override the environment.

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

/// Affinity CLI - batch quiz matching over the matching API
#[derive(Parser)]
#[command(name = "affinity-cli")]
#[command(version)]
#[command(about = "Compute and submit quiz-answer affinity matches")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the matching pipeline end to end
    Run(commands::run::RunArgs),
    /// Print per-question answer distributions for the current batch
    Analyze(commands::analyze::AnalyzeArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match cli.command {
        Commands::Run(args) => commands::run::run_command(args).await,
        Commands::Analyze(args) => commands::analyze::analyze_command(args).await,
    };

    std::process::exit(exit_code);
}
