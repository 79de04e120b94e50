//! Autopilot CLI - Command-line interface for the autopilot decision engine
//!
//! This CLI provides an `autopilot` command that analyzes a task description
//! and reports which workflow pattern and servers it should run with.

mod commands;
mod config;

use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{analyze, patterns, validate};

/// Autopilot CLI - Workflow strategy selection for agent tasks
///
/// Classifies a natural-language task, scores every workflow pattern against
/// it and explains the recommendation.
#[derive(Parser, Debug)]
#[command(
    name = "autopilot",
    author,
    version,
    about = "Autopilot - Workflow strategy selection for agent tasks",
    long_about = "Autopilot analyzes a natural-language task and recommends how to execute it:\nwhich workflow pattern to use, which servers are needed and what to fall back to."
)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn", global = true)]
    log_level: String,

    /// Decision config file (overrides ./.autopilot/decision.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze a task and recommend an execution strategy
    ///
    /// Prints the task analysis and the selected workflow pattern with its
    /// reasoning, required servers, time estimate and fallbacks.
    Analyze {
        /// Natural-language task description
        task: String,

        /// Server catalog (TOML) used to resolve required servers
        #[arg(short, long)]
        servers: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the score of every workflow pattern for a task
    Patterns {
        /// Natural-language task description
        task: String,
    },

    /// Validate a decision config file
    ValidateConfig {
        /// Path to the TOML file
        path: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    // Logs go to stderr so `--json` output stays machine-readable.
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // If no command provided, show help
    let Some(command) = args.command else {
        Args::command().print_help()?;
        return Ok(());
    };

    match command {
        Command::Analyze { task, servers, json } => {
            let decision_config = config::load_config(args.config.as_deref())?;
            analyze::execute(&task, servers.as_deref(), json, &decision_config)?;
        }
        Command::Patterns { task } => {
            let decision_config = config::load_config(args.config.as_deref())?;
            patterns::execute(&task, &decision_config);
        }
        Command::ValidateConfig { path } => {
            validate::execute(&path)?;
        }
    }

    Ok(())
}
