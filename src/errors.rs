//! Fatal input errors for migmap operations.
//!
//! Only unrecoverable conditions live here: a required file or directory that
//! is absent, or a required document that is not valid structured data.
//! Everything else (malformed elements inside a valid document, missing
//! optional sections, unmatched queries) is absorbed at the point of
//! detection and never surfaces as an error.
//!
//! Each variant carries a remediation suggestion so the top-level entry point
//! can print a one-line cause and a one-line next step before exiting.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FatalError {
    /// Analysis output document does not exist
    #[error("Kantra output file not found: {}", path.display())]
    DocumentNotFound { path: PathBuf },

    /// A required document exists but could not be read
    #[error("failed to read {}: {source}", path.display())]
    DocumentUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Document parsed but is empty
    #[error("Kantra output file is empty: {}", path.display())]
    DocumentEmpty { path: PathBuf },

    /// Document is not valid YAML
    #[error("invalid YAML in {}: {message}", path.display())]
    DocumentInvalidYaml { path: PathBuf, message: String },

    /// Document parsed but is not a top-level list of rulesets
    #[error("invalid Kantra output format in {}: expected a list of rulesets", path.display())]
    DocumentWrongShape { path: PathBuf },

    /// Scan root for the persistence tracker does not exist
    #[error("directory not found: {}", path.display())]
    ScanRootMissing { path: PathBuf },

    /// Report workspace directory does not exist
    #[error("directory not found: {}", path.display())]
    WorkDirMissing { path: PathBuf },

    /// report-data.json absent from the report workspace
    #[error("report-data.json not found in {}", work_dir.display())]
    ReportDataMissing { work_dir: PathBuf },

    /// report-data.json present but not valid JSON
    #[error("invalid JSON in report-data.json: {message}")]
    ReportDataInvalid { message: String },
}

impl FatalError {
    /// One-line remediation hint printed alongside the error message.
    pub fn suggestion(&self) -> &'static str {
        match self {
            FatalError::DocumentNotFound { .. } | FatalError::DocumentEmpty { .. } => {
                "Check that Kantra analysis completed successfully. Expected path format: <workspace>/kantra-output/output.yaml"
            }
            FatalError::DocumentUnreadable { .. } => "Check file permissions",
            FatalError::DocumentInvalidYaml { .. } => {
                "File may be corrupted. Re-run Kantra analysis."
            }
            FatalError::DocumentWrongShape { .. } => {
                "Expected a list of rulesets with violations. Re-run Kantra analysis."
            }
            FatalError::ScanRootMissing { .. } => {
                "Pass the workspace directory that contains the kantra-output runs"
            }
            FatalError::WorkDirMissing { .. } => {
                "Pass the migration workspace directory as the first argument"
            }
            FatalError::ReportDataMissing { .. } => {
                "Generate report-data.json before rendering the report"
            }
            FatalError::ReportDataInvalid { .. } => {
                "Regenerate report-data.json; it must be a valid JSON object"
            }
        }
    }
}
