//! Error types.
//!
//! Catalog misses are not errors: lookups return `Option` and the caller
//! logs and carries on.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::store::TeamId;

/// A segment of an `EVs:` / `IVs:` line that does not match `<int> <abbrev>`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatLineError {
    #[error("malformed stat segment `{segment}`: expected `<value> <stat>`")]
    Shape { segment: String },

    #[error("malformed stat segment `{segment}`: `{value}` is not a stat value")]
    Value { segment: String, value: String },

    #[error("malformed stat segment `{segment}`: unknown stat `{abbrev}`")]
    UnknownStat { segment: String, abbrev: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("first line must be `Playstyle: <label>`")]
    MissingPlaystyle,

    #[error("line {line}: {source}")]
    MalformedStatLine {
        line: usize,
        #[source]
        source: StatLineError,
    },

    #[error("line {line}: header `{header}` has no species name")]
    EmptySpecies { line: usize, header: String },

    #[error("line {line}: {species} lists more than 4 moves")]
    TooManyMoves { line: usize, species: String },

    #[error("team has no members")]
    NoMembers,

    #[error("team has {count} members, at most 6 are allowed")]
    TooManyMembers { count: usize },
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid store file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("store file version {found} is not supported (expected {expected})")]
    Version { found: u32, expected: u32 },

    #[error("no team with id {0}")]
    UnknownTeam(TeamId),
}

/// Failure of one team in the ingestion pipeline
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("none of the team's species were found in the catalog")]
    NoResolvedMembers,

    #[error(transparent)]
    Store(#[from] StoreError),
}
