use anyhow::Context;
use clap::Args;
use std::fs;
use std::path::PathBuf;

use crate::config::Config;
use crate::models::{FailureInfo, IngestReport};
use crate::split::split_batch;
use team_engine::{process_batch, summarize_pending};

#[derive(Args, Debug)]
pub struct IngestArgs {
    /// Batch file with `=== [format] name~playstyle ===` headers
    pub file: PathBuf,

    /// Run the aggregation pass after storing
    #[arg(long)]
    pub aggregate: bool,
}

pub fn execute(config: &Config, args: IngestArgs) -> anyhow::Result<()> {
    let text = fs::read_to_string(&args.file)
        .with_context(|| format!("reading {}", args.file.display()))?;
    let inputs = split_batch(&text);
    if inputs.is_empty() {
        log::warn!("{}: no team headers found", args.file.display());
    }
    let blocks = inputs.len();

    let catalog = config.load_catalog()?;
    let mut store = config.open_store()?;

    let report = process_batch(inputs, &catalog, &mut store, config.mode);

    if args.aggregate {
        summarize_pending(&mut store, &catalog).context("aggregating stored teams")?;
    }

    let output = IngestReport {
        blocks,
        stored: report.processed,
        failures: report
            .failures
            .into_iter()
            .map(|(label, e)| FailureInfo {
                label,
                error: e.to_string(),
            })
            .collect(),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
