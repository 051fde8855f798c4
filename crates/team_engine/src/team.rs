//! Parsed team records.

use serde::{Deserialize, Serialize};

use crate::core_data::StatSpread;
use crate::stat_line::{DEFAULT_EVS, DEFAULT_IVS};

/// Maximum team size
pub const MAX_TEAM_SIZE: usize = 6;

/// Number of move slots per party member
pub const MAX_MOVES: usize = 4;

/// Nature assumed when a block has no nature line (neutral)
pub const DEFAULT_NATURE: &str = "Serious";

/// One slot of a parsed team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyMember {
    /// Normalized species key, never empty
    pub species_key: String,

    /// Normalized held item key
    pub item_key: Option<String>,

    /// Nature name as written in the export
    pub nature: String,

    /// Effort Values (unset stats are 0)
    pub effort_values: StatSpread,

    /// Individual Values (unset stats are 31)
    pub individual_values: StatSpread,

    /// Normalized move keys in listed order
    pub moves: Vec<String>,

    /// Final battle stats, filled in by the stat engine
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub derived_stats: Option<StatSpread>,
}

impl PartyMember {
    pub fn new(species_key: impl Into<String>) -> Self {
        Self {
            species_key: species_key.into(),
            item_key: None,
            nature: DEFAULT_NATURE.to_string(),
            effort_values: DEFAULT_EVS,
            individual_values: DEFAULT_IVS,
            moves: Vec::with_capacity(MAX_MOVES),
            derived_stats: None,
        }
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    pub fn item(mut self, item_key: impl Into<String>) -> Self {
        self.item_key = Some(item_key.into());
        self
    }

    pub fn nature(mut self, nature: impl Into<String>) -> Self {
        self.nature = nature.into();
        self
    }

    pub fn evs(mut self, evs: StatSpread) -> Self {
        self.effort_values = evs;
        self
    }

    pub fn ivs(mut self, ivs: StatSpread) -> Self {
        self.individual_values = ivs;
        self
    }

    /// Append a move; slots past the fourth are ignored
    pub fn with_move(mut self, move_key: impl Into<String>) -> Self {
        if self.moves.len() < MAX_MOVES {
            self.moves.push(move_key.into());
        }
        self
    }

    pub fn has_derived_stats(&self) -> bool {
        self.derived_stats.is_some()
    }
}

/// One parsed team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSpec {
    /// Free-form playstyle label (the classification target)
    pub playstyle: String,

    /// Members in header order
    pub members: Vec<PartyMember>,
}

impl TeamSpec {
    pub fn species_keys(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|m| m.species_key.as_str())
    }
}
