//! Team ingestion.
//!
//! `process_team` runs one team block through parse, catalog resolution and
//! stat computation, then hands it to the store. `process_batch` does that
//! for many blocks; a failing team is logged and the batch moves on.

use log::{debug, error, info, warn};

use crate::catalog::Catalog;
use crate::error::PipelineError;
use crate::parser::{ParseMode, TeamParser};
use crate::stats::apply_derived_stats;
use crate::store::{NewTeam, TeamId, TeamStore};
use crate::team::TeamSpec;

/// One team block queued for ingestion.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TeamInput {
    /// Used in log lines and failure reports
    pub label: String,
    pub format: Option<String>,
    /// Stored name; `"Team <playstyle>"` when absent
    pub name: Option<String>,
    /// Block text, starting with the `Playstyle:` line
    pub text: String,
}

impl TeamInput {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Parse a team and resolve it against the catalog.
///
/// Members whose species is unknown are dropped. Unknown items become
/// `None`; unknown moves stay as written and are only logged. Every kept
/// member has `derived_stats` set.
pub fn build_team<C: Catalog + ?Sized>(
    text: &str,
    catalog: &C,
    mode: ParseMode,
) -> Result<TeamSpec, PipelineError> {
    let mut team = TeamParser::new(mode).parse(text)?;

    team.members.retain_mut(|member| {
        let Some(species) = catalog.lookup_species(&member.species_key) else {
            warn!("species {} not found in catalog, skipping", member.species_key);
            return false;
        };
        apply_derived_stats(member, &species.base_stats);

        if let Some(item) = member.item_key.as_deref() {
            if catalog.lookup_item(item).is_none() {
                debug!("{}: item {} not found in catalog", member.species_key, item);
                member.item_key = None;
            }
        }
        for key in &member.moves {
            if catalog.lookup_move(key).is_none() {
                debug!("{}: move {} not found in catalog", member.species_key, key);
            }
        }
        true
    });

    if team.members.is_empty() {
        return Err(PipelineError::NoResolvedMembers);
    }
    Ok(team)
}

/// Build one team and persist it.
pub fn process_team<C, S>(
    input: &TeamInput,
    catalog: &C,
    store: &mut S,
    mode: ParseMode,
) -> Result<TeamId, PipelineError>
where
    C: Catalog + ?Sized,
    S: TeamStore + ?Sized,
{
    let team = build_team(&input.text, catalog, mode)?;
    let member_count = team.members.len();

    let mut new_team = NewTeam::from_spec(team);
    if let Some(name) = &input.name {
        new_team.name = name.clone();
    }
    new_team.format = input.format.clone();

    let id = store.persist_team(new_team)?;
    info!("{}: stored as #{} with {} members", input.label, id, member_count);
    Ok(id)
}

/// Outcome of a batch run
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Ids of stored teams, in input order
    pub processed: Vec<TeamId>,
    /// Label and error of every team that failed
    pub failures: Vec<(String, PipelineError)>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.processed.len() + self.failures.len()
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Process every input; a failed team never aborts the batch.
pub fn process_batch<C, S, I>(inputs: I, catalog: &C, store: &mut S, mode: ParseMode) -> BatchReport
where
    C: Catalog + ?Sized,
    S: TeamStore + ?Sized,
    I: IntoIterator<Item = TeamInput>,
{
    let mut report = BatchReport::default();

    for input in inputs {
        match process_team(&input, catalog, store, mode) {
            Ok(id) => report.processed.push(id),
            Err(e) => {
                error!("{}: {}", input.label, e);
                report.failures.push((input.label, e));
            }
        }
    }

    info!(
        "batch finished: {} stored, {} failed",
        report.processed.len(),
        report.failures.len()
    );
    report
}
