use clap::Args;

use crate::config::Config;
use crate::models::SummaryLine;
use team_engine::TeamStore;

#[derive(Args, Debug)]
pub struct SummariesArgs {
    /// Include teams that have not been summarized yet
    #[arg(long)]
    pub all: bool,
}

pub fn execute(config: &Config, args: SummariesArgs) -> anyhow::Result<()> {
    let store = config.open_store()?;

    for team in store.teams()? {
        if !args.all && !team.is_summarized() {
            continue;
        }
        println!("{}", serde_json::to_string(&SummaryLine::new(&team))?);
    }
    Ok(())
}
