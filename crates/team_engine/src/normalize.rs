//! Name canonicalization for catalog lookups.
//!
//! Free-form export names (`"Meowstic (F)"`, `"Mr. Mime"`, `"- U-turn"`,
//! `"Heavy-Duty Boots"`) are turned into lowercase hyphenated catalog keys.
//! Species whose catalog key differs from the display name are handled by two
//! static tables: gendered forms and a fixed alias list.

use once_cell::sync::Lazy;
use phf::phf_map;
use regex::Regex;

/// Gender marker as written after a species name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            "M" => Some(Gender::Male),
            "F" => Some(Gender::Female),
            _ => None,
        }
    }
}

/// Catalog suffixes for a species with gender-dependent forms
#[derive(Debug, Clone, Copy)]
pub struct GenderedForms {
    pub male: &'static str,
    pub female: &'static str,
}

impl GenderedForms {
    /// Suffix for a marker; no marker selects the male form.
    pub const fn suffix(&self, gender: Option<Gender>) -> &'static str {
        match gender {
            Some(Gender::Female) => self.female,
            _ => self.male,
        }
    }
}

/// Species whose catalog entry depends on gender.
pub static GENDERED_SPECIES: phf::Map<&'static str, GenderedForms> = phf_map! {
    "meowstic" => GenderedForms { male: "-male", female: "-female" },
    "indeedee" => GenderedForms { male: "-male", female: "-female" },
    "basculegion" => GenderedForms { male: "-male", female: "-female" },
    "oinkologne" => GenderedForms { male: "-male", female: "-female" },
};

/// Display key -> catalog key for species whose default forme is stored
/// under a different name.
pub static SPECIES_ALIASES: phf::Map<&'static str, &'static str> = phf_map! {
    "ogerpon-wellspring" => "ogerpon-wellspring-mask",
    "ogerpon-hearthflame" => "ogerpon-hearthflame-mask",
    "ogerpon-cornerstone" => "ogerpon-cornerstone-mask",
    "keldeo" => "keldeo-ordinary",
    "landorus" => "landorus-incarnate",
    "thundurus" => "thundurus-incarnate",
    "tornadus" => "tornadus-incarnate",
    "enamorus" => "enamorus-incarnate",
    "sinistcha-masterpiece" => "sinistcha",
    "gastrodon-east" => "gastrodon",
    "gastrodon-west" => "gastrodon",
    "greninja-bond" => "greninja",
    "maushold" => "maushold-family-of-three",
    "mimikyu" => "mimikyu-busted",
    "tauros-paldea-blaze" => "tauros-paldea-blaze-breed",
    "tauros-paldea-aqua" => "tauros-paldea-aqua-breed",
    "tauros-paldea-combat" => "tauros-paldea-combat-breed",
    "meloetta" => "meloetta-aria",
};

static GENDER_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\((M|F)\)").expect("static gender pattern"));

static PARENTHESIZED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(([^()]+)\)").expect("static parenthesized pattern"));

/// Characters dropped from names before hyphenation
const STRIPPED_PUNCTUATION: [char; 5] = ['\'', '\u{2019}', '.', ':', ','];

/// Lowercase, drop punctuation, join whitespace-separated words with `-`.
fn to_key(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| !STRIPPED_PUNCTUATION.contains(c))
        .collect::<String>()
        .to_lowercase();
    cleaned.split_whitespace().collect::<Vec<_>>().join("-")
}

/// Split a species name into the name to normalize and its gender marker.
///
/// The gender marker is removed first. A remaining parenthesized part holds
/// the real name (the text outside it is a nickname), so it replaces the name
/// and is unwrapped again until no parentheses remain.
pub fn split_species_name(raw: &str) -> (String, Option<Gender>) {
    let gender = GENDER_MARKER
        .captures(raw)
        .and_then(|caps| Gender::from_marker(&caps[1]));

    let mut name = GENDER_MARKER.replace_all(raw, "").trim().to_string();
    while let Some(inner) = PARENTHESIZED
        .captures(&name)
        .map(|caps| caps[1].trim().to_string())
    {
        if inner.is_empty() || inner == name {
            break;
        }
        name = inner;
    }

    (name, gender)
}

/// Canonical catalog key for a species display name.
pub fn normalize_species(raw: &str) -> String {
    let (name, gender) = split_species_name(raw);
    let mut key = to_key(&name);

    if let Some(forms) = GENDERED_SPECIES.get(key.as_str()) {
        key.push_str(forms.suffix(gender));
    }

    match SPECIES_ALIASES.get(key.as_str()) {
        Some(alias) => (*alias).to_string(),
        None => key,
    }
}

/// Canonical catalog key for a move line (`"- Knock Off"` -> `"knock-off"`).
pub fn normalize_move(raw: &str) -> String {
    to_key(raw.trim().trim_start_matches(|c: char| c == '-' || c.is_whitespace()))
}

/// Canonical catalog key for a held item.
pub fn normalize_item(raw: &str) -> String {
    to_key(raw)
}
