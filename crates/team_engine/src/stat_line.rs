//! `EVs:` / `IVs:` line parsing.
//!
//! Grammar: segments separated by `/`, each `<int> <abbrev>` with the
//! abbreviation one of `HP`, `Atk`, `Def`, `SpA`, `SpD`, `Spe`.
//! Values are not range- or budget-checked.

use crate::classify::{EVS_PREFIX, IVS_PREFIX};
use crate::core_data::{StatName, StatSpread};
use crate::error::StatLineError;

/// Default IVs (perfect)
pub const DEFAULT_IVS: StatSpread = StatSpread::splat(31);

/// Default EVs (none)
pub const DEFAULT_EVS: StatSpread = StatSpread::splat(0);

/// Parse an EV spread such as `"252 SpA / 4 SpD / 252 Spe"`.
/// Unlisted stats are 0. A leading `EVs:` label is accepted.
pub fn parse_effort_values(text: &str) -> Result<StatSpread, StatLineError> {
    let text = text.trim();
    let body = text.strip_prefix(EVS_PREFIX).unwrap_or(text);
    parse_spread(body, DEFAULT_EVS)
}

/// Parse an IV line such as `"IVs: 0 Atk / 0 Spe"`.
/// The `IVs:` label is stripped first; unlisted stats are 31.
pub fn parse_individual_values(text: &str) -> Result<StatSpread, StatLineError> {
    let text = text.trim();
    let body = text.strip_prefix(IVS_PREFIX).unwrap_or(text);
    parse_spread(body, DEFAULT_IVS)
}

fn parse_spread(body: &str, defaults: StatSpread) -> Result<StatSpread, StatLineError> {
    let mut spread = defaults;
    if body.trim().is_empty() {
        return Ok(spread);
    }

    for segment in body.split('/') {
        let (stat, value) = parse_segment(segment)?;
        spread[stat] = value;
    }

    Ok(spread)
}

fn parse_segment(segment: &str) -> Result<(StatName, u16), StatLineError> {
    let segment = segment.trim();
    let mut parts = segment.split_whitespace();

    let (Some(value), Some(abbrev), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(StatLineError::Shape {
            segment: segment.to_string(),
        });
    };

    let value = value.parse::<u16>().map_err(|_| StatLineError::Value {
        segment: segment.to_string(),
        value: value.to_string(),
    })?;

    let stat = StatName::from_abbrev(abbrev).ok_or_else(|| StatLineError::UnknownStat {
        segment: segment.to_string(),
        abbrev: abbrev.to_string(),
    })?;

    Ok((stat, value))
}
