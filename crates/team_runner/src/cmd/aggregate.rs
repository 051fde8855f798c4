use anyhow::Context;

use crate::config::Config;
use crate::models::AggregateReport;
use team_engine::summarize_pending;

pub fn execute(config: &Config) -> anyhow::Result<()> {
    let catalog = config.load_catalog()?;
    let mut store = config.open_store()?;

    let report = summarize_pending(&mut store, &catalog)
        .with_context(|| format!("aggregating {}", config.store_path.display()))?;

    let output = AggregateReport {
        summarized: report.summarized,
        skipped: report.skipped,
        failed: report.failed,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
