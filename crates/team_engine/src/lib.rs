//! team_engine - Competitive team ingestion and feature extraction
//!
//! Turns exported team text into structured party members, computes each
//! member's level-100 stats and reduces a team into the seven features used
//! for playstyle classification.

/// Stat names, spreads and catalog entry types
pub mod core_data;

/// Nature definitions and stat modifiers
pub mod natures;

/// Canonical lookup keys for species, moves and items
pub mod normalize;

/// Line classification
pub mod classify;

/// `EVs:` / `IVs:` line parsing
pub mod stat_line;

/// Parsed team records
pub mod team;

/// Team block state machine
pub mod parser;

/// Stat formulas
pub mod stats;

/// Reference data lookups
pub mod catalog;

/// Team storage
pub mod store;

/// Team summaries
pub mod aggregate;

/// Per-team processing and the batch loop
pub mod pipeline;

pub mod error;

// Re-export commonly used types
pub use aggregate::{summarize, summarize_pending, AggregationReport, SummaryOutcome, TeamSummary};
pub use catalog::{Catalog, StaticCatalog};
pub use core_data::{BaseStats, StatName, StatSpread};
pub use error::{CatalogError, ParseError, PipelineError, StatLineError, StoreError};
pub use natures::NatureId;
pub use parser::{parse_team, ParseMode, TeamParser};
pub use pipeline::{process_batch, process_team, BatchReport, TeamInput};
pub use store::{JsonStore, MemoryStore, NewTeam, StoredTeam, TeamId, TeamStore};
pub use team::{PartyMember, TeamSpec};
