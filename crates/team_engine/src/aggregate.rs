//! Team-level aggregation.
//!
//! Reduces a roster with computed stats into the seven team features used
//! for playstyle classification.

use log::{debug, error, info, warn};
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::StoreError;
use crate::store::{StoredTeam, TeamId, TeamStore};
use crate::team::PartyMember;

/// Team features. Every field is a sum or a count over the roster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamSummary {
    pub team_hp: u32,
    /// Sum over members of max(attack, sp_attack)
    pub team_offense: u32,
    pub team_defense: u32,
    pub team_spdef: u32,
    pub team_speed: u32,
    /// Members knowing at least one recovery move
    pub recovery_moves: u32,
    /// Members holding a defensive item
    pub defensive_items: u32,
}

impl TeamSummary {
    pub const FEATURE_NAMES: [&'static str; 7] = [
        "HP",
        "Offense",
        "Defense",
        "Sp.Defense",
        "Speed",
        "Recovery Moves",
        "Defensive Items",
    ];

    /// Fields in classifier order
    pub fn features(&self) -> [u32; 7] {
        [
            self.team_hp,
            self.team_offense,
            self.team_defense,
            self.team_spdef,
            self.team_speed,
            self.recovery_moves,
            self.defensive_items,
        ]
    }
}

/// Result of summarizing one stored team
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryOutcome {
    Summarized(TeamSummary),
    /// The team already had a summary; nothing was computed
    Skipped,
}

fn knows_recovery_move<C: Catalog + ?Sized>(member: &PartyMember, catalog: &C) -> bool {
    member.moves.iter().any(|key| match catalog.lookup_move(key) {
        Some(data) => data.is_recovery(),
        None => {
            debug!("{}: move {} not in catalog, not counted", member.species_key, key);
            false
        }
    })
}

fn holds_defensive_item<C: Catalog + ?Sized>(member: &PartyMember, catalog: &C) -> bool {
    let Some(key) = member.item_key.as_deref() else {
        return false;
    };
    match catalog.lookup_item(key) {
        Some(data) => data.is_defensive(),
        None => {
            debug!("{}: item {} not in catalog, not counted", member.species_key, key);
            false
        }
    }
}

/// Reduce a roster into a `TeamSummary`.
///
/// Members whose species misses the catalog, or whose stats were never
/// computed, are left out of every sum.
pub fn summarize<C: Catalog + ?Sized>(members: &[PartyMember], catalog: &C) -> TeamSummary {
    let mut summary = TeamSummary::default();

    for member in members {
        if catalog.lookup_species(&member.species_key).is_none() {
            warn!("species {} not found in catalog, member skipped", member.species_key);
            continue;
        }
        let Some(stats) = member.derived_stats else {
            warn!("{} has no computed stats, member skipped", member.species_key);
            continue;
        };

        summary.team_hp += stats.hp as u32;
        summary.team_offense += stats.attack.max(stats.sp_attack) as u32;
        summary.team_defense += stats.defense as u32;
        summary.team_spdef += stats.sp_defense as u32;
        summary.team_speed += stats.speed as u32;

        if knows_recovery_move(member, catalog) {
            summary.recovery_moves += 1;
        }
        if holds_defensive_item(member, catalog) {
            summary.defensive_items += 1;
        }
    }

    summary
}

/// Summarize a stored team unless it already has a summary.
pub fn summarize_stored<C: Catalog + ?Sized>(team: &StoredTeam, catalog: &C) -> SummaryOutcome {
    if team.is_summarized() {
        return SummaryOutcome::Skipped;
    }
    SummaryOutcome::Summarized(summarize(&team.team.members, catalog))
}

/// Outcome of an aggregation pass over a store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregationReport {
    pub summarized: Vec<TeamId>,
    pub skipped: Vec<TeamId>,
    pub failed: Vec<TeamId>,
}

/// Summarize every team in the store whose summary is unset.
///
/// Already-summarized teams are left untouched, so running this twice is the
/// same as running it once. A team that fails to save is logged and the pass
/// continues.
pub fn summarize_pending<S, C>(store: &mut S, catalog: &C) -> Result<AggregationReport, StoreError>
where
    S: TeamStore + ?Sized,
    C: Catalog + ?Sized,
{
    let mut report = AggregationReport::default();

    for team in store.list_unsummarized_teams()? {
        match summarize_stored(&team, catalog) {
            SummaryOutcome::Skipped => report.skipped.push(team.id),
            SummaryOutcome::Summarized(summary) => match store.record_summary(team.id, summary) {
                Ok(()) => {
                    debug!("{} (#{}): {:?}", team.name, team.id, summary.features());
                    report.summarized.push(team.id);
                }
                Err(e) => {
                    error!("failed to save summary for {} (#{}): {}", team.name, team.id, e);
                    report.failed.push(team.id);
                }
            },
        }
    }

    info!(
        "aggregation: {} summarized, {} skipped, {} failed",
        report.summarized.len(),
        report.skipped.len(),
        report.failed.len()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;
    use crate::core_data::{ItemFlags, MoveFlags, StatSpread};

    fn catalog() -> StaticCatalog {
        let mut catalog = StaticCatalog::new();
        catalog
            .insert_species("toxapex", StatSpread::from_array([50, 63, 152, 53, 142, 35]))
            .insert_species("garchomp", StatSpread::from_array([108, 130, 95, 80, 85, 102]))
            .insert_move("recover", MoveFlags::RECOVERY)
            .insert_move("roost", MoveFlags::RECOVERY)
            .insert_move("earthquake", MoveFlags::empty())
            .insert_item("black-sludge", ItemFlags::DEFENSIVE)
            .insert_item("life-orb", ItemFlags::empty());
        catalog
    }

    fn computed(species: &str, stats: [u16; 6]) -> PartyMember {
        let mut member = PartyMember::new(species);
        member.derived_stats = Some(StatSpread::from_array(stats));
        member
    }

    #[test]
    fn test_sums_and_offense() {
        let members = vec![
            computed("toxapex", [304, 146, 446, 140, 350, 106]),
            computed("garchomp", [357, 359, 226, 176, 206, 333]),
        ];
        let summary = summarize(&members, &catalog());
        assert_eq!(summary.team_hp, 304 + 357);
        // max(146, 140) + max(359, 176)
        assert_eq!(summary.team_offense, 146 + 359);
        assert_eq!(summary.team_defense, 446 + 226);
        assert_eq!(summary.team_spdef, 350 + 206);
        assert_eq!(summary.team_speed, 106 + 333);
        assert_eq!(summary.recovery_moves, 0);
        assert_eq!(summary.defensive_items, 0);
    }

    #[test]
    fn test_recovery_counted_once_per_member() {
        let members = vec![
            computed("toxapex", [1; 6]).with_move("recover").with_move("roost"),
            computed("garchomp", [1; 6]).with_move("earthquake").with_move("not-a-move"),
        ];
        let summary = summarize(&members, &catalog());
        assert_eq!(summary.recovery_moves, 1);
    }

    #[test]
    fn test_defensive_items() {
        let members = vec![
            computed("toxapex", [1; 6]).item("black-sludge"),
            computed("garchomp", [1; 6]).item("life-orb"),
        ];
        assert_eq!(summarize(&members, &catalog()).defensive_items, 1);

        let members = vec![
            computed("toxapex", [1; 6]).item("unknown-item"),
            computed("garchomp", [1; 6]).item("life-orb"),
        ];
        assert_eq!(summarize(&members, &catalog()).defensive_items, 0);
    }

    #[test]
    fn test_unresolved_members_skipped() {
        let members = vec![
            computed("missingno", [999; 6]).item("black-sludge"),
            PartyMember::new("garchomp").with_move("roost"),
            computed("toxapex", [10, 1, 2, 3, 4, 5]),
        ];
        let summary = summarize(&members, &catalog());
        assert_eq!(summary.features(), [10, 3, 2, 4, 5, 0, 0]);
    }
}
