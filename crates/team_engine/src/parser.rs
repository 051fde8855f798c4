//! Team block parser.
//!
//! The first non-blank line declares the playstyle. Every following line is
//! classified and fed to a two-state machine:
//!
//! ```text
//! AwaitingHeader --header--> Accumulating --header--> Accumulating (flush)
//!                                         --end-----> flush
//! ```
//!
//! Lines other than headers mutate the member being accumulated and are
//! no-ops while awaiting the first header.

use log::{debug, warn};

use crate::classify::{classify_line, LineKind};
use crate::error::ParseError;
use crate::normalize::{normalize_item, normalize_move, normalize_species};
use crate::stat_line::{parse_effort_values, parse_individual_values};
use crate::team::{PartyMember, TeamSpec, MAX_MOVES, MAX_TEAM_SIZE};

pub const PLAYSTYLE_PREFIX: &str = "Playstyle:";

/// How recoverable line errors are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// A malformed EV/IV line is logged and skipped, extra moves are dropped
    #[default]
    Tolerant,
    /// Either of those fails the whole team
    Strict,
}

enum State {
    AwaitingHeader,
    Accumulating(PartyMember),
}

/// Assembles party members from classified lines.
struct Assembler {
    mode: ParseMode,
    state: State,
    members: Vec<PartyMember>,
}

impl Assembler {
    fn new(mode: ParseMode) -> Self {
        Self {
            mode,
            state: State::AwaitingHeader,
            members: Vec::new(),
        }
    }

    fn flush(&mut self) {
        if let State::Accumulating(member) =
            std::mem::replace(&mut self.state, State::AwaitingHeader)
        {
            self.members.push(member);
        }
    }

    fn feed(&mut self, line_no: usize, line: &str) -> Result<(), ParseError> {
        let kind = classify_line(line);

        if let LineKind::Header(header) = kind {
            self.flush();
            self.start_member(line_no, header)?;
            return Ok(());
        }

        if kind.is_ignored() {
            return Ok(());
        }

        let mode = self.mode;
        let State::Accumulating(member) = &mut self.state else {
            debug!("line {}: `{}` before any species header, ignored", line_no, line.trim());
            return Ok(());
        };

        match kind {
            LineKind::Nature(name) => {
                member.nature = name.to_string();
            }
            LineKind::Effort(text) => match parse_effort_values(text) {
                Ok(evs) => member.effort_values = evs,
                Err(source) => stat_line_failure(mode, line_no, &member.species_key, source)?,
            },
            LineKind::Individual(text) => match parse_individual_values(text) {
                Ok(ivs) => member.individual_values = ivs,
                Err(source) => stat_line_failure(mode, line_no, &member.species_key, source)?,
            },
            LineKind::Move(text) => {
                if member.moves.len() >= MAX_MOVES {
                    if mode == ParseMode::Strict {
                        return Err(ParseError::TooManyMoves {
                            line: line_no,
                            species: member.species_key.clone(),
                        });
                    }
                    warn!(
                        "line {}: {} already has {} moves, ignoring `{}`",
                        line_no,
                        member.species_key,
                        MAX_MOVES,
                        text
                    );
                } else {
                    let key = normalize_move(text);
                    if !key.is_empty() {
                        member.moves.push(key);
                    }
                }
            }
            _ => {}
        }

        Ok(())
    }

    fn start_member(&mut self, line_no: usize, header: &str) -> Result<(), ParseError> {
        let (name, item) = match header.split_once('@') {
            Some((name, item)) => (name, Some(item.trim())),
            None => (header, None),
        };

        let species_key = normalize_species(name);
        if species_key.is_empty() {
            if self.mode == ParseMode::Strict {
                return Err(ParseError::EmptySpecies {
                    line: line_no,
                    header: header.to_string(),
                });
            }
            warn!("line {}: header `{}` has no species name, skipped", line_no, header);
            return Ok(());
        }

        let mut member = PartyMember::new(species_key);
        member.item_key = item
            .map(normalize_item)
            .filter(|key| !key.is_empty());

        self.state = State::Accumulating(member);
        Ok(())
    }

    fn finish(mut self) -> Vec<PartyMember> {
        self.flush();
        self.members
    }
}

fn stat_line_failure(
    mode: ParseMode,
    line_no: usize,
    species: &str,
    source: crate::error::StatLineError,
) -> Result<(), ParseError> {
    match mode {
        ParseMode::Strict => Err(ParseError::MalformedStatLine {
            line: line_no,
            source,
        }),
        ParseMode::Tolerant => {
            warn!("line {}: {} ({}), line skipped", line_no, source, species);
            Ok(())
        }
    }
}

/// Parse `Playstyle: <label>`
fn parse_playstyle(line: &str) -> Result<String, ParseError> {
    let label = line
        .trim()
        .strip_prefix(PLAYSTYLE_PREFIX)
        .map(str::trim)
        .ok_or(ParseError::MissingPlaystyle)?;

    if label.is_empty() {
        return Err(ParseError::MissingPlaystyle);
    }
    Ok(label.to_string())
}

/// Team block parser. Stateless between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct TeamParser {
    mode: ParseMode,
}

impl TeamParser {
    pub fn new(mode: ParseMode) -> Self {
        Self { mode }
    }

    pub fn strict() -> Self {
        Self::new(ParseMode::Strict)
    }

    pub fn mode(&self) -> ParseMode {
        self.mode
    }

    /// Parse one team block into a `TeamSpec`.
    pub fn parse(&self, text: &str) -> Result<TeamSpec, ParseError> {
        // Line numbers are 1-based positions in `text`
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line))
            .skip_while(|(_, line)| line.trim().is_empty());

        let (_, first) = lines.next().ok_or(ParseError::MissingPlaystyle)?;
        let playstyle = parse_playstyle(first)?;

        let mut assembler = Assembler::new(self.mode);
        for (line_no, line) in lines {
            assembler.feed(line_no, line)?;
        }
        let members = assembler.finish();

        if members.is_empty() {
            return Err(ParseError::NoMembers);
        }
        if members.len() > MAX_TEAM_SIZE {
            return Err(ParseError::TooManyMembers {
                count: members.len(),
            });
        }

        Ok(TeamSpec { playstyle, members })
    }
}

/// Parse a team block in tolerant mode.
pub fn parse_team(text: &str) -> Result<TeamSpec, ParseError> {
    TeamParser::default().parse(text)
}
