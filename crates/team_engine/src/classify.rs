//! Line classification for team export blocks.
//!
//! Decides what kind of line something is, without touching parser state.
//! Each variant borrows the part of the line its handler needs.

pub const ABILITY_PREFIX: &str = "Ability:";
pub const TERA_TYPE_PREFIX: &str = "Tera Type:";
pub const EVS_PREFIX: &str = "EVs:";
pub const IVS_PREFIX: &str = "IVs:";
pub const NATURE_MARKER: &str = "Nature";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Empty or whitespace-only
    Blank,
    /// `Ability: ...` (value carried, not used)
    Ability(&'a str),
    /// `Tera Type: ...` (value carried, not used)
    TeraType(&'a str),
    /// `EVs: ...` with the prefix removed
    Effort(&'a str),
    /// Full `IVs: ...` line
    Individual(&'a str),
    /// `- Move Name` line as written
    Move(&'a str),
    /// `<Species>[ (M|F)][ (Nickname)][ @ <Item>]`
    Header(&'a str),
    /// Nature name (text before `Nature`)
    Nature(&'a str),
    /// Anything else (`Level: 50`, `Shiny: Yes`, ...)
    Other(&'a str),
}

impl LineKind<'_> {
    /// Whether the parser ignores this line
    pub fn is_ignored(&self) -> bool {
        matches!(
            self,
            LineKind::Blank | LineKind::Ability(_) | LineKind::TeraType(_) | LineKind::Other(_)
        )
    }
}

/// A lone token of word characters and hyphens, e.g. `Landorus-Therian`.
fn is_bare_token(line: &str) -> bool {
    !line.starts_with('-')
        && line
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
}

fn looks_like_header(line: &str) -> bool {
    line.contains('@') || line.contains('(') || line.contains(')') || is_bare_token(line)
}

/// Classify one line of a team block.
///
/// The prefix-anchored kinds are tested before the header heuristic. An
/// ability such as `Ability: Sword of Ruin (x)` or a move such as
/// `- Hidden Power (Fire)` would otherwise be taken for a species header
/// because of its parenthesis. No header starts with any of these prefixes.
pub fn classify_line(line: &str) -> LineKind<'_> {
    let line = line.trim();

    if line.is_empty() {
        return LineKind::Blank;
    }
    if let Some(rest) = line.strip_prefix(ABILITY_PREFIX) {
        return LineKind::Ability(rest.trim());
    }
    if let Some(rest) = line.strip_prefix(TERA_TYPE_PREFIX) {
        return LineKind::TeraType(rest.trim());
    }
    if let Some(rest) = line.strip_prefix(EVS_PREFIX) {
        return LineKind::Effort(rest.trim());
    }
    if line.starts_with(IVS_PREFIX) {
        return LineKind::Individual(line);
    }
    if line.starts_with('-') {
        return LineKind::Move(line);
    }
    if looks_like_header(line) {
        return LineKind::Header(line);
    }
    if let Some((name, _)) = line.split_once(NATURE_MARKER) {
        return LineKind::Nature(name.trim());
    }

    LineKind::Other(line)
}
