//! Team storage.
//!
//! The engine talks to storage through `TeamStore`, passed in explicitly.
//! Two implementations are provided: `MemoryStore` and the file-backed
//! `JsonStore`, which rewrites its JSON file after every mutation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::aggregate::TeamSummary;
use crate::error::StoreError;
use crate::team::TeamSpec;

pub type TeamId = u64;

/// A team handed to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTeam {
    pub name: String,
    /// Battle format the team was published under, when known
    pub format: Option<String>,
    pub team: TeamSpec,
    pub summary: Option<TeamSummary>,
}

impl NewTeam {
    /// Named `"Team <playstyle>"`
    pub fn from_spec(team: TeamSpec) -> Self {
        Self {
            name: format!("Team {}", team.playstyle),
            format: None,
            team,
            summary: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredTeam {
    pub id: TeamId,
    pub name: String,
    #[serde(default)]
    pub format: Option<String>,
    pub created_at: DateTime<Utc>,
    pub team: TeamSpec,
    /// Unset until the aggregation pass runs
    #[serde(default)]
    pub summary: Option<TeamSummary>,
}

impl StoredTeam {
    pub fn is_summarized(&self) -> bool {
        self.summary.is_some()
    }
}

pub trait TeamStore {
    /// Store a new team and return its id.
    fn persist_team(&mut self, team: NewTeam) -> Result<TeamId, StoreError>;

    /// Teams whose summary fields are unset, in id order.
    fn list_unsummarized_teams(&self) -> Result<Vec<StoredTeam>, StoreError>;

    /// Fill in the summary of a stored team.
    fn record_summary(&mut self, id: TeamId, summary: TeamSummary) -> Result<(), StoreError>;

    fn get_team(&self, id: TeamId) -> Result<Option<StoredTeam>, StoreError>;

    /// Every stored team, in id order.
    fn teams(&self) -> Result<Vec<StoredTeam>, StoreError>;
}

// ============================================================================
// In-memory store
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryStore {
    next_id: TeamId,
    teams: Vec<StoredTeam>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

impl TeamStore for MemoryStore {
    fn persist_team(&mut self, team: NewTeam) -> Result<TeamId, StoreError> {
        self.next_id += 1;
        let id = self.next_id;
        self.teams.push(StoredTeam {
            id,
            name: team.name,
            format: team.format,
            created_at: Utc::now(),
            team: team.team,
            summary: team.summary,
        });
        Ok(id)
    }

    fn list_unsummarized_teams(&self) -> Result<Vec<StoredTeam>, StoreError> {
        Ok(self
            .teams
            .iter()
            .filter(|t| !t.is_summarized())
            .cloned()
            .collect())
    }

    fn record_summary(&mut self, id: TeamId, summary: TeamSummary) -> Result<(), StoreError> {
        let team = self
            .teams
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::UnknownTeam(id))?;
        team.summary = Some(summary);
        Ok(())
    }

    fn get_team(&self, id: TeamId) -> Result<Option<StoredTeam>, StoreError> {
        Ok(self.teams.iter().find(|t| t.id == id).cloned())
    }

    fn teams(&self) -> Result<Vec<StoredTeam>, StoreError> {
        Ok(self.teams.clone())
    }
}

// ============================================================================
// JSON file store
// ============================================================================

const STORE_VERSION: u32 = 1;

#[derive(Deserialize)]
struct StoreFile {
    version: u32,
    #[serde(flatten)]
    data: MemoryStore,
}

#[derive(Serialize)]
struct StoreFileRef<'a> {
    version: u32,
    #[serde(flatten)]
    data: &'a MemoryStore,
}

/// `MemoryStore` persisted to a JSON file.
///
/// Every mutation rewrites the whole file, so ingesting `n` teams writes
/// O(n^2) bytes in total. A mutation whose write fails is rolled back in
/// memory and never reaches disk later.
#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
    inner: MemoryStore,
}

impl JsonStore {
    /// Open a store file, starting empty if it does not exist yet.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let inner = if path.exists() {
            let raw = fs::read_to_string(&path).map_err(|source| StoreError::Io {
                path: path.clone(),
                source,
            })?;
            let file: StoreFile = serde_json::from_str(&raw)?;
            if file.version != STORE_VERSION {
                return Err(StoreError::Version {
                    found: file.version,
                    expected: STORE_VERSION,
                });
            }
            file.data
        } else {
            MemoryStore::new()
        };

        Ok(Self { path, inner })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(io_err)?;
        }

        let file = StoreFileRef {
            version: STORE_VERSION,
            data: &self.inner,
        };
        let json = serde_json::to_string_pretty(&file)?;

        // Write then rename so a crash never leaves a truncated store
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(io_err)?;
        fs::rename(&tmp, &self.path).map_err(io_err)?;
        Ok(())
    }
}

impl TeamStore for JsonStore {
    fn persist_team(&mut self, team: NewTeam) -> Result<TeamId, StoreError> {
        let previous_id = self.inner.next_id;
        let id = self.inner.persist_team(team)?;
        if let Err(e) = self.save() {
            self.inner.teams.pop();
            self.inner.next_id = previous_id;
            return Err(e);
        }
        Ok(id)
    }

    fn list_unsummarized_teams(&self) -> Result<Vec<StoredTeam>, StoreError> {
        self.inner.list_unsummarized_teams()
    }

    fn record_summary(&mut self, id: TeamId, summary: TeamSummary) -> Result<(), StoreError> {
        let previous = self
            .inner
            .teams
            .iter()
            .find(|t| t.id == id)
            .ok_or(StoreError::UnknownTeam(id))?
            .summary;
        self.inner.record_summary(id, summary)?;
        if let Err(e) = self.save() {
            if let Some(team) = self.inner.teams.iter_mut().find(|t| t.id == id) {
                team.summary = previous;
            }
            return Err(e);
        }
        Ok(())
    }

    fn get_team(&self, id: TeamId) -> Result<Option<StoredTeam>, StoreError> {
        self.inner.get_team(id)
    }

    fn teams(&self) -> Result<Vec<StoredTeam>, StoreError> {
        self.inner.teams()
    }
}
