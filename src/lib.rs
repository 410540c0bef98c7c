// Export modules for library usage
pub mod analysis;
pub mod cli;
pub mod commands;
pub mod core;
pub mod errors;
pub mod io;
pub mod report;

// Re-export commonly used types
pub use crate::analysis::{
    build_overview, query_file, track_persistent_issues, FileQuery, Overview, PersistenceScan,
    PersistentIssue, RunSnapshot,
};
pub use crate::core::{extract_issues, AnalysisDocument, ExtractionOutcome, IssueRecord};
pub use crate::errors::FatalError;
pub use crate::report::{markdown_to_html, render_report, ReportBuilder, ReportData};
