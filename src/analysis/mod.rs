//! Query and aggregation layers on top of the finding extractor.
//!
//! - `overview`: blast-radius ranking of all issues in one run
//! - `file_query`: per-file drill-down against one run
//! - `persistence`: cross-run recurrence tracking over a directory of runs

pub mod file_query;
pub mod overview;
pub mod persistence;

pub use file_query::{query_file, FileIssue, FileIssuesReport, FileQuery, DEFAULT_FILE_LIMIT};
pub use overview::{build_overview, Overview, OverviewIssue};
pub use persistence::{
    track_persistent_issues, Occurrence, PersistenceScan, PersistentIssue, RunSnapshot,
    DEFAULT_MIN_OCCURRENCES,
};
