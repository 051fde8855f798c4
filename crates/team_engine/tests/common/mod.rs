//! Shared test utilities for the integration tests.

use std::path::PathBuf;
use team_engine::StaticCatalog;

/// `tests/fixtures` of this crate
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

/// Catalog shared by every fixture
pub fn load_catalog() -> StaticCatalog {
    let path = fixtures_dir().join("catalog.json");
    StaticCatalog::load(&path).unwrap_or_else(|e| panic!("failed to load {}: {}", path.display(), e))
}

/// Read `tests/fixtures/teams/<name>.txt`
#[allow(dead_code)]
pub fn team_text(name: &str) -> String {
    let path = fixtures_dir().join("teams").join(format!("{}.txt", name));
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("failed to read {}: {}", path.display(), e))
}
