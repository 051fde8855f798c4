//! Batch file splitting.
//!
//! A batch file holds many team exports, each under a header line:
//!
//! ```text
//! === [gen9ou] Spikes Stack~Stall ===
//! Gliscor @ Toxic Orb
//! ...
//! ```
//!
//! The part after `~` is the playstyle, `"Unknown"` when missing.

use once_cell::sync::Lazy;
use regex::Regex;
use team_engine::parser::PLAYSTYLE_PREFIX;
use team_engine::TeamInput;

pub const UNKNOWN_PLAYSTYLE: &str = "Unknown";

static BLOCK_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"===\s*\[([^\]]+)\]\s*([^=]+?)\s*===").expect("static block header pattern")
});

/// Split a batch file into one `TeamInput` per header.
///
/// Each block's text is prefixed with a `Playstyle:` line so it can be fed
/// to the team parser directly. Text before the first header is ignored.
pub fn split_batch(text: &str) -> Vec<TeamInput> {
    let headers: Vec<_> = BLOCK_HEADER.captures_iter(text).collect();
    let mut inputs = Vec::with_capacity(headers.len());

    for (i, caps) in headers.iter().enumerate() {
        let (Some(whole), Some(format), Some(title)) = (caps.get(0), caps.get(1), caps.get(2)) else {
            continue;
        };
        let end = headers
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map_or(text.len(), |m| m.start());
        let content = text[whole.end()..end].trim();

        let format = format.as_str().trim();
        let (name, playstyle) = match title.as_str().split_once('~') {
            Some((name, playstyle)) => (name.trim(), playstyle.trim()),
            None => (title.as_str().trim(), UNKNOWN_PLAYSTYLE),
        };
        let playstyle = if playstyle.is_empty() {
            UNKNOWN_PLAYSTYLE
        } else {
            playstyle
        };

        let mut input = TeamInput::new(
            format!("[{}] {}", format, name),
            format!("{} {}\n{}", PLAYSTYLE_PREFIX, playstyle, content),
        )
        .format(format);
        if !name.is_empty() {
            input = input.name(name);
        }
        inputs.push(input);
    }

    inputs
}

#[cfg(test)]
mod tests {
    use super::*;

    const BATCH: &str = "exported from the teambuilder

=== [gen9ou] Spikes Stack~Stall ===

Gliscor @ Toxic Orb
- Spikes

=== [gen9ou] No Label ===
Great Tusk @ Booster Energy
- Rapid Spin
=== [gen9vgc2024] Sun~ Hyper Offense ===
Torkoal @ Charcoal
";

    #[test]
    fn test_split_batch() {
        let inputs = split_batch(BATCH);
        assert_eq!(inputs.len(), 3);

        assert_eq!(inputs[0].label, "[gen9ou] Spikes Stack");
        assert_eq!(inputs[0].name.as_deref(), Some("Spikes Stack"));
        assert_eq!(inputs[0].format.as_deref(), Some("gen9ou"));
        assert_eq!(inputs[0].text, "Playstyle: Stall\nGliscor @ Toxic Orb\n- Spikes");

        assert_eq!(inputs[1].text, "Playstyle: Unknown\nGreat Tusk @ Booster Energy\n- Rapid Spin");
        assert_eq!(inputs[2].text, "Playstyle: Hyper Offense\nTorkoal @ Charcoal");
        assert_eq!(inputs[2].format.as_deref(), Some("gen9vgc2024"));
    }

    #[test]
    fn test_no_headers() {
        assert!(split_batch("Gliscor @ Toxic Orb\n- Spikes\n").is_empty());
    }

    #[test]
    fn test_blocks_parse() {
        let inputs = split_batch(BATCH);
        let team = team_engine::parse_team(&inputs[0].text).unwrap();
        assert_eq!(team.playstyle, "Stall");
        assert_eq!(team.species_keys().collect::<Vec<_>>(), ["gliscor"]);
    }
}
