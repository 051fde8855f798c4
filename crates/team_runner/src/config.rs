//! Runner configuration.
//!
//! Global options come from the command line, falling back to environment
//! variables, which may themselves come from a `.env` file.

use anyhow::Context;
use clap::{ArgAction, Args};
use std::path::PathBuf;
use team_engine::{JsonStore, ParseMode, StaticCatalog};

pub const DEFAULT_CATALOG: &str = "data/catalog.json";
pub const DEFAULT_STORE: &str = "data/teams.json";

/// Read `.env.local` then `.env` into the process environment. Missing
/// files are fine; variables already set are kept.
pub fn load_env() {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");
}

#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Catalog JSON file (species, moves, items)
    #[arg(long, global = true, env = "TEAM_CATALOG", default_value = DEFAULT_CATALOG)]
    pub catalog: PathBuf,

    /// Team store JSON file
    #[arg(long, global = true, env = "TEAM_STORE", default_value = DEFAULT_STORE)]
    pub store: PathBuf,

    /// Fail a team on malformed EV/IV lines or extra moves instead of skipping them
    #[arg(long, global = true)]
    pub strict: bool,

    /// Also write timestamped log lines to this file
    #[arg(long, global = true, env = "TEAM_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub catalog_path: PathBuf,
    pub store_path: PathBuf,
    pub mode: ParseMode,
}

impl Config {
    pub fn from_args(args: &GlobalArgs) -> Self {
        Self {
            catalog_path: args.catalog.clone(),
            store_path: args.store.clone(),
            mode: if args.strict {
                ParseMode::Strict
            } else {
                ParseMode::Tolerant
            },
        }
    }

    pub fn load_catalog(&self) -> anyhow::Result<StaticCatalog> {
        let catalog = StaticCatalog::load(&self.catalog_path)
            .with_context(|| format!("loading catalog {}", self.catalog_path.display()))?;
        log::info!(
            "catalog {}: {} species, {} moves, {} items",
            self.catalog_path.display(),
            catalog.species_count(),
            catalog.move_count(),
            catalog.item_count()
        );
        Ok(catalog)
    }

    pub fn open_store(&self) -> anyhow::Result<JsonStore> {
        JsonStore::open(&self.store_path)
            .with_context(|| format!("opening store {}", self.store_path.display()))
    }
}
