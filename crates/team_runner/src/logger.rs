//! Log output set-up.

use core::fmt::Arguments;
use log::{LevelFilter, Record};
use std::io;
use std::path::Path;

fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Console logging on stderr; stdout is kept for command output.
pub fn init(verbosity: u8, log_file: Option<&Path>) -> anyhow::Result<()> {
    let level = level_for(verbosity);

    let console = fern::Dispatch::new()
        .format(console_format)
        .level(level)
        .chain(io::stderr());

    let mut dispatch = fern::Dispatch::new().chain(console);

    if let Some(path) = log_file {
        let file = fern::Dispatch::new()
            .format(file_format)
            .level(level.max(LevelFilter::Info))
            .chain(fern::log_file(path)?);
        dispatch = dispatch.chain(file);
    }

    dispatch.apply()?;
    Ok(())
}

fn console_format(callback: fern::FormatCallback, message: &Arguments, record: &Record) {
    callback.finish(format_args!(
        "[{} {}] {}",
        record.level(),
        record.target(),
        message,
    ))
}

fn file_format(callback: fern::FormatCallback, message: &Arguments, record: &Record) {
    callback.finish(format_args!(
        "{} {} {} {}",
        chrono::Local::now().format("%F %T%.3f"),
        record.level(),
        record.target(),
        message,
    ))
}
