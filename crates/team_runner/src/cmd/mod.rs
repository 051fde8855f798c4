pub mod aggregate;
pub mod ingest;
pub mod parse;
pub mod summaries;
