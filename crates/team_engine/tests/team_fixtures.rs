//! Data-driven team parsing tests.
//!
//! Every `tests/fixtures/teams/<name>.txt` is parsed against the shared
//! catalog and compared with `<name>.json`. Uses `libtest-mimic` so single
//! fixtures can be filtered with `cargo test --test team_fixtures stall`.

mod common;

use libtest_mimic::{Arguments, Failed, Trial};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use team_engine::pipeline::build_team;
use team_engine::{summarize, ParseError, ParseMode, PartyMember, PipelineError, StaticCatalog};

// ============================================================================
// Fixture Data Structures
// ============================================================================

#[derive(Deserialize, Debug)]
struct Expectation {
    #[serde(default)]
    mode: Option<String>,
    playstyle: Option<String>,
    #[serde(default)]
    members: Vec<ExpectedMember>,
    summary: Option<[u32; 7]>,
    /// Snake-case error name when the team must be rejected
    error: Option<String>,
}

#[derive(Deserialize, Debug)]
struct ExpectedMember {
    species_key: String,
    item_key: Option<String>,
    nature: String,
    evs: [u16; 6],
    ivs: [u16; 6],
    moves: Vec<String>,
    stats: [u16; 6],
}

// ============================================================================
// Test Helpers
// ============================================================================

fn error_name(err: &PipelineError) -> &'static str {
    match err {
        PipelineError::Parse(e) => match e {
            ParseError::MissingPlaystyle => "missing_playstyle",
            ParseError::MalformedStatLine { .. } => "malformed_stat_line",
            ParseError::EmptySpecies { .. } => "empty_species",
            ParseError::TooManyMoves { .. } => "too_many_moves",
            ParseError::NoMembers => "no_members",
            ParseError::TooManyMembers { .. } => "too_many_members",
        },
        PipelineError::NoResolvedMembers => "no_resolved_members",
        PipelineError::Store(_) => "store",
    }
}

fn check_member(index: usize, actual: &PartyMember, expected: &ExpectedMember) -> Result<(), String> {
    let label = format!("member {} ({})", index, expected.species_key);

    if actual.species_key != expected.species_key {
        return Err(format!(
            "{}: species expected {}, got {}",
            label, expected.species_key, actual.species_key
        ));
    }
    if actual.item_key != expected.item_key {
        return Err(format!(
            "{}: item expected {:?}, got {:?}",
            label, expected.item_key, actual.item_key
        ));
    }
    if actual.nature != expected.nature {
        return Err(format!("{}: nature expected {}, got {}", label, expected.nature, actual.nature));
    }
    if actual.effort_values.to_array() != expected.evs {
        return Err(format!(
            "{}: EVs expected {:?}, got {:?}",
            label,
            expected.evs,
            actual.effort_values.to_array()
        ));
    }
    if actual.individual_values.to_array() != expected.ivs {
        return Err(format!(
            "{}: IVs expected {:?}, got {:?}",
            label,
            expected.ivs,
            actual.individual_values.to_array()
        ));
    }
    if actual.moves != expected.moves {
        return Err(format!("{}: moves expected {:?}, got {:?}", label, expected.moves, actual.moves));
    }

    let stats = actual.derived_stats.map(|s| s.to_array());
    if stats != Some(expected.stats) {
        return Err(format!("{}: stats expected {:?}, got {:?}", label, expected.stats, stats));
    }
    Ok(())
}

// ============================================================================
// Test Runner
// ============================================================================

fn run_fixture(text: &str, expected: &Expectation, catalog: &StaticCatalog) -> Result<(), String> {
    let mode = match expected.mode.as_deref() {
        Some("strict") => ParseMode::Strict,
        _ => ParseMode::Tolerant,
    };

    let result = build_team(text, catalog, mode);

    if let Some(error) = &expected.error {
        return match result {
            Ok(team) => Err(format!("expected error {}, parsed {} members", error, team.members.len())),
            Err(e) if error_name(&e) == error => Ok(()),
            Err(e) => Err(format!("expected error {}, got {} ({})", error, error_name(&e), e)),
        };
    }

    let team = result.map_err(|e| format!("unexpected error: {}", e))?;

    if let Some(playstyle) = &expected.playstyle {
        if &team.playstyle != playstyle {
            return Err(format!("playstyle expected {}, got {}", playstyle, team.playstyle));
        }
    }

    if team.members.len() != expected.members.len() {
        return Err(format!(
            "expected {} members, got {}: {:?}",
            expected.members.len(),
            team.members.len(),
            team.species_keys().collect::<Vec<_>>()
        ));
    }
    for (i, (actual, exp)) in team.members.iter().zip(&expected.members).enumerate() {
        check_member(i, actual, exp)?;
    }

    if let Some(summary) = expected.summary {
        let actual = summarize(&team.members, catalog).features();
        if actual != summary {
            return Err(format!("summary expected {:?}, got {:?}", summary, actual));
        }
    }

    Ok(())
}

fn load_fixture(txt: &Path) -> Result<(String, Expectation), String> {
    let text = fs::read_to_string(txt).map_err(|e| format!("{}: {}", txt.display(), e))?;
    let json_path = txt.with_extension("json");
    let json = fs::read_to_string(&json_path).map_err(|e| format!("{}: {}", json_path.display(), e))?;
    let expected = serde_json::from_str(&json).map_err(|e| format!("{}: {}", json_path.display(), e))?;
    Ok((text, expected))
}

// ============================================================================
// Harness
// ============================================================================

fn main() {
    let args = Arguments::from_args();
    let catalog = common::load_catalog();

    let dir = common::fixtures_dir().join("teams");
    let mut paths: Vec<_> = fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("failed to read {}: {}", dir.display(), e))
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map_or(false, |ext| ext == "txt"))
        .collect();
    paths.sort();

    let tests: Vec<Trial> = paths
        .into_iter()
        .map(|path| {
            let name = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            let catalog = catalog.clone();

            Trial::test(name, move || {
                let (text, expected) = load_fixture(&path)?;
                run_fixture(&text, &expected, &catalog).map_err(Failed::from)
            })
        })
        .collect();

    libtest_mimic::run(&args, tests).exit();
}
