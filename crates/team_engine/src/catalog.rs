//! Reference data lookups.
//!
//! The engine only reads the catalog. `StaticCatalog` is an in-memory
//! implementation that can be loaded from a JSON file shaped like:
//!
//! ```json
//! {
//!   "species": { "gliscor": { "types": ["ground", "flying"],
//!                             "base_stats": { "hp": 75, "attack": 95, ... } } },
//!   "moves":   { "roost": { "type": "flying", "category": "status", "healing": 50 } },
//!   "items":   { "leftovers": {} }
//! }
//! ```

use log::debug;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use crate::core_data::{BaseStats, ItemData, ItemFlags, MoveCategory, MoveData, MoveFlags, SpeciesData};
use crate::error::CatalogError;

/// Items counted as defensive when the catalog entry does not say otherwise
pub const DEFENSIVE_ITEMS: &[&str] = &[
    "heavy-duty-boots",
    "rocky-helmet",
    "shed-shell",
    "leftovers",
    "black-sludge",
    "eviolite",
];

/// Entry hazard moves
pub const HAZARD_MOVES: &[&str] = &[
    "stealth-rock",
    "sticky-web",
    "spikes",
    "toxic-spikes",
    "stone-axe",
    "ceaseless-edge",
];

/// Read-only reference data keyed by normalized name.
/// A miss is `None`, never an error.
pub trait Catalog {
    fn lookup_species(&self, key: &str) -> Option<&SpeciesData>;
    fn lookup_move(&self, key: &str) -> Option<&MoveData>;
    fn lookup_item(&self, key: &str) -> Option<&ItemData>;
}

impl<C: Catalog + ?Sized> Catalog for &C {
    fn lookup_species(&self, key: &str) -> Option<&SpeciesData> {
        (**self).lookup_species(key)
    }

    fn lookup_move(&self, key: &str) -> Option<&MoveData> {
        (**self).lookup_move(key)
    }

    fn lookup_item(&self, key: &str) -> Option<&ItemData> {
        (**self).lookup_item(key)
    }
}

// ============================================================================
// JSON file structures
// ============================================================================

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    species: BTreeMap<String, SpeciesEntry>,
    #[serde(default)]
    moves: BTreeMap<String, MoveEntry>,
    #[serde(default)]
    items: BTreeMap<String, ItemEntry>,
}

#[derive(Deserialize)]
struct SpeciesEntry {
    #[serde(default)]
    types: Vec<String>,
    base_stats: BaseStats,
}

#[derive(Deserialize)]
struct MoveEntry {
    #[serde(rename = "type")]
    move_type: Option<String>,
    #[serde(default, alias = "damage_class")]
    category: MoveCategory,
    power: Option<u16>,
    accuracy: Option<u8>,
    pp: Option<u8>,
    /// Percentage healed; positive means recovery
    #[serde(default)]
    healing: i32,
    #[serde(default)]
    flags: Vec<String>,
}

#[derive(Deserialize, Default)]
struct ItemEntry {
    defensive: Option<bool>,
}

fn move_flags(key: &str, entry: &MoveEntry) -> MoveFlags {
    let mut flags = MoveFlags::empty();
    if entry.healing > 0 {
        flags |= MoveFlags::RECOVERY;
    }
    if HAZARD_MOVES.contains(&key) {
        flags |= MoveFlags::HAZARD;
    }
    for flag in &entry.flags {
        match flag.as_str() {
            "recovery" => flags |= MoveFlags::RECOVERY,
            "hazard" => flags |= MoveFlags::HAZARD,
            other => debug!("move {}: unknown flag `{}` ignored", key, other),
        }
    }
    flags
}

fn item_flags(key: &str, entry: &ItemEntry) -> ItemFlags {
    let defensive = entry
        .defensive
        .unwrap_or_else(|| DEFENSIVE_ITEMS.contains(&key));
    if defensive {
        ItemFlags::DEFENSIVE
    } else {
        ItemFlags::empty()
    }
}

// ============================================================================
// In-memory catalog
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    species: HashMap<String, SpeciesData>,
    moves: HashMap<String, MoveData>,
    items: HashMap<String, ItemData>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        let mut catalog = Self::new();

        for (key, entry) in file.species {
            catalog.species.insert(
                key.clone(),
                SpeciesData {
                    name: key,
                    types: entry.types,
                    base_stats: entry.base_stats,
                },
            );
        }

        for (key, entry) in file.moves {
            let flags = move_flags(&key, &entry);
            catalog.moves.insert(
                key.clone(),
                MoveData {
                    name: key,
                    type_: entry.move_type,
                    category: entry.category,
                    power: entry.power,
                    accuracy: entry.accuracy,
                    pp: entry.pp,
                    flags,
                },
            );
        }

        for (key, entry) in file.items {
            let flags = item_flags(&key, &entry);
            catalog.items.insert(key.clone(), ItemData { name: key, flags });
        }

        debug!(
            "catalog loaded: {} species, {} moves, {} items",
            catalog.species.len(),
            catalog.moves.len(),
            catalog.items.len()
        );
        Ok(catalog)
    }

    pub fn insert_species(&mut self, key: impl Into<String>, base_stats: BaseStats) -> &mut Self {
        let key = key.into();
        self.species.insert(
            key.clone(),
            SpeciesData {
                name: key,
                types: Vec::new(),
                base_stats,
            },
        );
        self
    }

    pub fn insert_move(&mut self, key: impl Into<String>, flags: MoveFlags) -> &mut Self {
        let key = key.into();
        self.moves.insert(
            key.clone(),
            MoveData {
                name: key,
                type_: None,
                category: MoveCategory::default(),
                power: None,
                accuracy: None,
                pp: None,
                flags,
            },
        );
        self
    }

    pub fn insert_item(&mut self, key: impl Into<String>, flags: ItemFlags) -> &mut Self {
        let key = key.into();
        self.items.insert(key.clone(), ItemData { name: key, flags });
        self
    }

    pub fn species_count(&self) -> usize {
        self.species.len()
    }

    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

impl Catalog for StaticCatalog {
    fn lookup_species(&self, key: &str) -> Option<&SpeciesData> {
        self.species.get(key)
    }

    fn lookup_move(&self, key: &str) -> Option<&MoveData> {
        self.moves.get(key)
    }

    fn lookup_item(&self, key: &str) -> Option<&ItemData> {
        self.items.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG_JSON: &str = r#"{
        "species": {
            "gliscor": {
                "types": ["ground", "flying"],
                "base_stats": {"hp": 75, "attack": 95, "defense": 125,
                               "special-attack": 45, "special-defense": 75, "speed": 95}
            }
        },
        "moves": {
            "roost": {"type": "flying", "category": "status", "pp": 5, "healing": 50},
            "facade": {"type": "normal", "category": "physical", "power": 70, "accuracy": 100, "pp": 20},
            "stealth-rock": {"type": "rock", "category": "status", "pp": 20},
            "pain-split": {"category": "status", "flags": ["recovery"]}
        },
        "items": {
            "leftovers": {},
            "toxic-orb": {},
            "assault-vest": {"defensive": true},
            "eviolite": {"defensive": false}
        }
    }"#;

    #[test]
    fn test_species_lookup() {
        let catalog = StaticCatalog::from_json_str(CATALOG_JSON).unwrap();
        let gliscor = catalog.lookup_species("gliscor").expect("gliscor should exist");
        assert_eq!(gliscor.base_stats.to_array(), [75, 95, 125, 45, 75, 95]);
        assert_eq!(gliscor.types, ["ground", "flying"]);
        assert!(catalog.lookup_species("garchomp").is_none());
    }

    #[test]
    fn test_move_flags() {
        let catalog = StaticCatalog::from_json_str(CATALOG_JSON).unwrap();
        assert!(catalog.lookup_move("roost").unwrap().is_recovery());
        assert!(catalog.lookup_move("pain-split").unwrap().is_recovery());
        assert!(!catalog.lookup_move("facade").unwrap().is_recovery());
        assert!(catalog.lookup_move("stealth-rock").unwrap().is_hazard());

        let facade = catalog.lookup_move("facade").unwrap();
        assert_eq!(facade.category, MoveCategory::Physical);
        assert_eq!(facade.power, Some(70));
    }

    #[test]
    fn test_item_flags() {
        let catalog = StaticCatalog::from_json_str(CATALOG_JSON).unwrap();
        assert!(catalog.lookup_item("leftovers").unwrap().is_defensive());
        assert!(!catalog.lookup_item("toxic-orb").unwrap().is_defensive());
        // Explicit values win over the default list
        assert!(catalog.lookup_item("assault-vest").unwrap().is_defensive());
        assert!(!catalog.lookup_item("eviolite").unwrap().is_defensive());
        assert_eq!(catalog.item_count(), 4);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            StaticCatalog::from_json_str("{\"species\": 3}"),
            Err(CatalogError::Json(_))
        ));
    }

    #[test]
    fn test_builder_inserts() {
        let mut catalog = StaticCatalog::new();
        catalog
            .insert_species("mew", BaseStats::splat(100))
            .insert_move("recover", MoveFlags::RECOVERY)
            .insert_item("rocky-helmet", ItemFlags::DEFENSIVE);
        assert_eq!(catalog.species_count(), 1);
        assert!(catalog.lookup_move("recover").unwrap().is_recovery());
        assert!(catalog.lookup_item("rocky-helmet").unwrap().is_defensive());
    }
}
