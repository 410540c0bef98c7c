//! Core data model for Kantra analysis documents.
//!
//! A document is a list of rulesets; each ruleset maps rule ids to
//! violations; each violation carries the incidents observed in source. The
//! model deliberately stays close to the raw YAML (`serde_yaml::Value`) so
//! that extraction can skip malformed elements individually instead of
//! failing the whole document at deserialization time.

pub mod document;
pub mod extract;

pub use document::{file_uri_path, AnalysisDocument};
pub use extract::{extract_issues, ExtractionOutcome, IssueRecord, SkipDiagnostic};

/// URI scheme prefix that marks an incident as attributable to a file.
pub const FILE_SCHEME: &str = "file://";

/// Conventional name of a Kantra analysis output document.
pub const KANTRA_OUTPUT_NAME: &str = "output.yaml";
