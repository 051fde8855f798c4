//! Stat calculation.
//!
//! HP: `floor((2 * Base + IV + floor(EV/4)) * Level / 100) + Level + 10`
//! Others: `floor((floor((2 * Base + IV + floor(EV/4)) * Level / 100) + 5) * Nature)`
//!
//! Teams are evaluated at level 100. Nature is applied in tenths
//! (9 = -10%, 10 = neutral, 11 = +10%) so the floor is exact.

use crate::core_data::{BaseStats, StatName, StatSpread};
use crate::natures::NatureId;
use crate::team::PartyMember;

/// Level every team member is evaluated at
pub const LEVEL: u8 = 100;

/// HP at an arbitrary level. Saturates at `u16::MAX` for out-of-range
/// investments, which are never rejected.
pub fn hp_at_level(base: u16, ev: u16, iv: u16, level: u8) -> u16 {
    let (base, ev, iv, level) = (base as u32, ev as u32, iv as u32, level as u32);
    let hp = ((2 * base + iv + ev / 4) * level / 100) + level + 10;
    u16::try_from(hp).unwrap_or(u16::MAX)
}

/// Non-HP stat at an arbitrary level, `modifier` in tenths
pub fn stat_at_level(base: u16, ev: u16, iv: u16, level: u8, modifier: u8) -> u16 {
    let (base, ev, iv, level) = (base as u32, ev as u32, iv as u32, level as u32);
    let raw = ((2 * base + iv + ev / 4) * level / 100) + 5;
    u16::try_from(raw * modifier as u32 / 10).unwrap_or(u16::MAX)
}

/// HP at level 100
pub fn compute_hp(base: u16, ev: u16, iv: u16) -> u16 {
    hp_at_level(base, ev, iv, LEVEL)
}

/// Non-HP stat at level 100. `nature_modifier` is 9, 10 or 11 (tenths).
pub fn compute_stat(base: u16, ev: u16, iv: u16, nature_modifier: u8) -> u16 {
    stat_at_level(base, ev, iv, LEVEL, nature_modifier)
}

/// Modifier (in tenths) a nature name applies to a stat.
/// Unrecognized names are neutral; HP is never modified.
pub fn nature_modifier(nature: &str, stat: StatName) -> u8 {
    NatureId::resolve(nature).stat_modifier(stat)
}

/// All six stats for one set of investments.
pub fn derive_stats(base: &BaseStats, evs: &StatSpread, ivs: &StatSpread, nature: &str) -> StatSpread {
    let nature = NatureId::resolve(nature);
    let mut stats = StatSpread::default();

    stats.hp = compute_hp(base.hp, evs.hp, ivs.hp);
    for stat in &StatName::ALL[1..] {
        let stat = *stat;
        stats[stat] = compute_stat(base[stat], evs[stat], ivs[stat], nature.stat_modifier(stat));
    }

    stats
}

/// Compute a member's stats and store them in `derived_stats`.
/// Recomputing with unchanged inputs writes the same values.
pub fn apply_derived_stats(member: &mut PartyMember, base: &BaseStats) -> StatSpread {
    let stats = derive_stats(
        base,
        &member.effort_values,
        &member.individual_values,
        &member.nature,
    );
    member.derived_stats = Some(stats);
    stats
}
