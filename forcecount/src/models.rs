// src/models.rs
mod file_report;
mod force_tally;
mod run_summary;

pub use file_report::FileReport;
pub use force_tally::ForceTally;
pub use run_summary::RunSummary;
