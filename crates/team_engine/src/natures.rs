//! Nature definitions and stat modifiers.

use crate::core_data::StatName;
use phf::phf_map;

/// Battle nature.
///
/// Ordered in a 5x5 grid: `nature_id = plus_stat * 5 + minus_stat`, with the
/// non-HP stats indexed Atk=0, Def=1, SpA=2, SpD=3, Spe=4.
/// Diagonal entries (where plus == minus) are the neutral natures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum NatureId {
    Hardy = 0,
    Lonely = 1,
    Adamant = 2,
    Naughty = 3,
    Brave = 4,
    Bold = 5,
    Docile = 6,
    Impish = 7,
    Lax = 8,
    Relaxed = 9,
    Modest = 10,
    Mild = 11,
    Bashful = 12,
    Rash = 13,
    Quiet = 14,
    Calm = 15,
    Gentle = 16,
    Careful = 17,
    Quirky = 18,
    Sassy = 19,
    Timid = 20,
    Hasty = 21,
    Jolly = 22,
    Naive = 23,
    #[default]
    Serious = 24,
}

/// Export spelling -> nature. Exact and case-sensitive.
static NATURES_BY_NAME: phf::Map<&'static str, NatureId> = phf_map! {
    "Hardy" => NatureId::Hardy,
    "Lonely" => NatureId::Lonely,
    "Adamant" => NatureId::Adamant,
    "Naughty" => NatureId::Naughty,
    "Brave" => NatureId::Brave,
    "Bold" => NatureId::Bold,
    "Docile" => NatureId::Docile,
    "Impish" => NatureId::Impish,
    "Lax" => NatureId::Lax,
    "Relaxed" => NatureId::Relaxed,
    "Modest" => NatureId::Modest,
    "Mild" => NatureId::Mild,
    "Bashful" => NatureId::Bashful,
    "Rash" => NatureId::Rash,
    "Quiet" => NatureId::Quiet,
    "Calm" => NatureId::Calm,
    "Gentle" => NatureId::Gentle,
    "Careful" => NatureId::Careful,
    "Quirky" => NatureId::Quirky,
    "Sassy" => NatureId::Sassy,
    "Timid" => NatureId::Timid,
    "Hasty" => NatureId::Hasty,
    "Jolly" => NatureId::Jolly,
    "Naive" => NatureId::Naive,
    "Serious" => NatureId::Serious,
};

/// Grid index of a nature-affected stat. HP has none.
const fn grid_index(stat: StatName) -> Option<u8> {
    match stat {
        StatName::Hp => None,
        StatName::Attack => Some(0),
        StatName::Defense => Some(1),
        StatName::SpecialAttack => Some(2),
        StatName::SpecialDefense => Some(3),
        StatName::Speed => Some(4),
    }
}

const GRID_STATS: [StatName; 5] = [
    StatName::Attack,
    StatName::Defense,
    StatName::SpecialAttack,
    StatName::SpecialDefense,
    StatName::Speed,
];

impl NatureId {
    /// Look up a nature by its export name (`"Adamant"`, not `"adamant"`).
    #[inline]
    pub fn from_name(name: &str) -> Option<Self> {
        NATURES_BY_NAME.get(name).copied()
    }

    /// Resolve a nature name, treating anything unrecognized as neutral.
    pub fn resolve(name: &str) -> Self {
        Self::from_name(name).unwrap_or_default()
    }

    /// Get stat modifier for a given stat
    /// Returns: 9 (-10%), 10 (neutral), 11 (+10%)
    /// Multiply by stat/10 to apply
    #[inline]
    pub const fn stat_modifier(self, stat: StatName) -> u8 {
        let Some(stat_idx) = grid_index(stat) else {
            return 10;
        };
        let id = self as u8;
        let plus = id / 5;
        let minus = id % 5;

        if plus == minus {
            10
        } else if stat_idx == plus {
            11
        } else if stat_idx == minus {
            9
        } else {
            10
        }
    }

    /// Check if this is a neutral nature (no stat changes)
    #[inline]
    pub const fn is_neutral(self) -> bool {
        let id = self as u8;
        (id / 5) == (id % 5)
    }

    /// Stat raised by this nature, if any
    pub const fn increased(self) -> Option<StatName> {
        if self.is_neutral() {
            None
        } else {
            Some(GRID_STATS[(self as u8 / 5) as usize])
        }
    }

    /// Stat lowered by this nature, if any
    pub const fn decreased(self) -> Option<StatName> {
        if self.is_neutral() {
            None
        } else {
            Some(GRID_STATS[(self as u8 % 5) as usize])
        }
    }
}
