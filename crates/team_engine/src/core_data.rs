//! Core data types shared by the parser, the stat engine and the catalog.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

/// Number of battle statistics
pub const STAT_COUNT: usize = 6;

/// The six battle statistics, in export order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum StatName {
    #[serde(rename = "hp")]
    Hp = 0,
    #[serde(rename = "attack")]
    Attack = 1,
    #[serde(rename = "defense")]
    Defense = 2,
    #[serde(rename = "sp_attack")]
    SpecialAttack = 3,
    #[serde(rename = "sp_defense")]
    SpecialDefense = 4,
    #[serde(rename = "speed")]
    Speed = 5,
}

impl StatName {
    pub const ALL: [StatName; STAT_COUNT] = [
        StatName::Hp,
        StatName::Attack,
        StatName::Defense,
        StatName::SpecialAttack,
        StatName::SpecialDefense,
        StatName::Speed,
    ];

    /// Parse the abbreviation used on `EVs:` / `IVs:` lines.
    /// Matching is exact: `HP`, `Atk`, `Def`, `SpA`, `SpD`, `Spe`.
    pub fn from_abbrev(abbrev: &str) -> Option<Self> {
        match abbrev {
            "HP" => Some(StatName::Hp),
            "Atk" => Some(StatName::Attack),
            "Def" => Some(StatName::Defense),
            "SpA" => Some(StatName::SpecialAttack),
            "SpD" => Some(StatName::SpecialDefense),
            "Spe" => Some(StatName::Speed),
            _ => None,
        }
    }

    pub const fn abbrev(self) -> &'static str {
        match self {
            StatName::Hp => "HP",
            StatName::Attack => "Atk",
            StatName::Defense => "Def",
            StatName::SpecialAttack => "SpA",
            StatName::SpecialDefense => "SpD",
            StatName::Speed => "Spe",
        }
    }

    /// Storage key (matches the serde field names of `StatSpread`)
    pub const fn key(self) -> &'static str {
        match self {
            StatName::Hp => "hp",
            StatName::Attack => "attack",
            StatName::Defense => "defense",
            StatName::SpecialAttack => "sp_attack",
            StatName::SpecialDefense => "sp_defense",
            StatName::Speed => "speed",
        }
    }
}

impl fmt::Display for StatName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One value per stat. Used for EVs, IVs, base stats and derived stats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatSpread {
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
    #[serde(alias = "special-attack", alias = "special_attack")]
    pub sp_attack: u16,
    #[serde(alias = "special-defense", alias = "special_defense")]
    pub sp_defense: u16,
    pub speed: u16,
}

/// Base stats of a species
pub type BaseStats = StatSpread;

impl StatSpread {
    /// Same value for every stat
    pub const fn splat(value: u16) -> Self {
        Self {
            hp: value,
            attack: value,
            defense: value,
            sp_attack: value,
            sp_defense: value,
            speed: value,
        }
    }

    /// Build from an `[HP, Atk, Def, SpA, SpD, Spe]` array
    pub const fn from_array(values: [u16; STAT_COUNT]) -> Self {
        Self {
            hp: values[0],
            attack: values[1],
            defense: values[2],
            sp_attack: values[3],
            sp_defense: values[4],
            speed: values[5],
        }
    }

    pub const fn to_array(&self) -> [u16; STAT_COUNT] {
        [
            self.hp,
            self.attack,
            self.defense,
            self.sp_attack,
            self.sp_defense,
            self.speed,
        ]
    }

    pub fn total(&self) -> u32 {
        self.to_array().iter().map(|&v| v as u32).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (StatName, u16)> + '_ {
        StatName::ALL.iter().map(move |&stat| (stat, self[stat]))
    }
}

impl Index<StatName> for StatSpread {
    type Output = u16;

    fn index(&self, stat: StatName) -> &u16 {
        match stat {
            StatName::Hp => &self.hp,
            StatName::Attack => &self.attack,
            StatName::Defense => &self.defense,
            StatName::SpecialAttack => &self.sp_attack,
            StatName::SpecialDefense => &self.sp_defense,
            StatName::Speed => &self.speed,
        }
    }
}

impl IndexMut<StatName> for StatSpread {
    fn index_mut(&mut self, stat: StatName) -> &mut u16 {
        match stat {
            StatName::Hp => &mut self.hp,
            StatName::Attack => &mut self.attack,
            StatName::Defense => &mut self.defense,
            StatName::SpecialAttack => &mut self.sp_attack,
            StatName::SpecialDefense => &mut self.sp_defense,
            StatName::Speed => &mut self.speed,
        }
    }
}

// ============================================================================
// Catalog entries
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveCategory {
    Physical,
    Special,
    #[default]
    Status,
}

bitflags! {
    /// Classification flags for moves
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct MoveFlags: u8 {
        const RECOVERY = 1 << 0;
        const HAZARD   = 1 << 1;
    }
}

bitflags! {
    /// Classification flags for held items
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct ItemFlags: u8 {
        const DEFENSIVE = 1 << 0;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeciesData {
    pub name: String,
    /// One or two type names
    pub types: Vec<String>,
    pub base_stats: BaseStats,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveData {
    pub name: String,
    pub type_: Option<String>,
    pub category: MoveCategory,
    pub power: Option<u16>,
    pub accuracy: Option<u8>,
    pub pp: Option<u8>,
    pub flags: MoveFlags,
}

impl MoveData {
    pub fn is_recovery(&self) -> bool {
        self.flags.contains(MoveFlags::RECOVERY)
    }

    pub fn is_hazard(&self) -> bool {
        self.flags.contains(MoveFlags::HAZARD)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemData {
    pub name: String,
    pub flags: ItemFlags,
}

impl ItemData {
    pub fn is_defensive(&self) -> bool {
        self.flags.contains(ItemFlags::DEFENSIVE)
    }
}
