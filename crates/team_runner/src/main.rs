//! Team ingestion runner.
//!
//! Parses exported team text, stores teams with their computed stats and
//! fills in team summaries for playstyle classification.
//!
//! Usage:
//!   cargo run -p team_runner -- parse team.txt
//!   cargo run -p team_runner -- --store data/teams.json ingest teams.txt
//!   cargo run -p team_runner -- aggregate
//!   cargo run -p team_runner -- summaries

mod cmd;
mod config;
mod logger;
mod models;
mod split;

use clap::{Parser, Subcommand};
use cmd::{aggregate, ingest, parse, summaries};
use config::{Config, GlobalArgs};

#[derive(Parser)]
#[command(name = "team_runner", version)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse one team block and print it with computed stats
    Parse(parse::ParseArgs),

    /// Split a batch file into teams and store them
    Ingest(ingest::IngestArgs),

    /// Summarize every stored team that has no summary yet
    Aggregate,

    /// Print stored teams with their summaries as JSON lines
    Summaries(summaries::SummariesArgs),
}

fn main() -> anyhow::Result<()> {
    config::load_env();
    let cli = Cli::parse();

    logger::init(cli.global.verbose, cli.global.log_file.as_deref())?;
    let config = Config::from_args(&cli.global);

    match cli.command {
        Some(Commands::Parse(args)) => parse::execute(&config, args),
        Some(Commands::Ingest(args)) => ingest::execute(&config, args),
        Some(Commands::Aggregate) => aggregate::execute(&config),
        Some(Commands::Summaries(args)) => summaries::execute(&config, args),
        None => {
            // Require explicit subcommand to avoid flag ambiguity at the root.
            use clap::CommandFactory;
            Cli::command().print_help()?;
            Ok(())
        }
    }
}
