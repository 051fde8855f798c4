use anyhow::Context;
use clap::Args;
use std::fs;
use std::path::PathBuf;

use crate::config::Config;
use crate::models::ParsedTeam;
use team_engine::pipeline::build_team;
use team_engine::summarize;

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Team block, starting with a `Playstyle:` line
    pub file: PathBuf,
}

pub fn execute(config: &Config, args: ParseArgs) -> anyhow::Result<()> {
    let text = fs::read_to_string(&args.file)
        .with_context(|| format!("reading {}", args.file.display()))?;
    let catalog = config.load_catalog()?;

    let team = build_team(&text, &catalog, config.mode)
        .with_context(|| format!("parsing {}", args.file.display()))?;
    let summary = summarize(&team.members, &catalog);

    let output = ParsedTeam {
        playstyle: team.playstyle,
        members: team.members,
        summary,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
