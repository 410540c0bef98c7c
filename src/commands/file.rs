//! `file` command: drill down into the issues affecting one file.

use crate::analysis::{query_file, FileQuery};
use crate::commands::emit_diagnostics;
use crate::core::{extract_issues, AnalysisDocument};
use anyhow::Result;
use serde_json::json;
use std::path::PathBuf;

pub struct FileConfig {
    pub output_file: PathBuf,
    pub target_file: String,
    pub limit: usize,
    pub verbosity: u8,
}

pub fn handle_file(config: FileConfig) -> Result<()> {
    let document = AnalysisDocument::load(&config.output_file)?;

    // The query walks the document itself; diagnostics come from a normal
    // extraction pass so the caller still sees what was skipped.
    if config.verbosity > 0 {
        emit_diagnostics(&extract_issues(&document).diagnostics, config.verbosity);
    }

    match query_file(&document, &config.target_file, config.limit) {
        FileQuery::Found(report) => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        FileQuery::NotFound { file } => {
            // A miss is a normal query outcome, not an error.
            let response = json!({
                "error": format!("No issues found for file: {file}"),
                "suggestion": "Verify the file path. Try using just the filename if full path does not match.",
            });
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }
    Ok(())
}
