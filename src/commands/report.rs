//! `report` command: build and render the migration report for a workspace.

use crate::errors::FatalError;
use crate::io::write_file;
use crate::report::{
    render_report, ReportBuilder, ReportData, REPORT_DATA_NAME, REPORT_OUTPUT_NAME,
};
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

pub struct ReportConfig {
    pub work_dir: PathBuf,
    pub output: Option<PathBuf>,
}

pub fn handle_report(config: ReportConfig) -> Result<()> {
    if !config.work_dir.is_dir() {
        return Err(FatalError::WorkDirMissing {
            path: config.work_dir.clone(),
        }
        .into());
    }

    let data = load_report_data(&config.work_dir)?;
    let sections = ReportBuilder::new(&config.work_dir).build(&data);
    let html = render_report(&data, &sections);

    let output_path = config
        .output
        .unwrap_or_else(|| config.work_dir.join(REPORT_OUTPUT_NAME));
    write_file(&output_path, &html)?;
    println!("{}", output_path.display());
    Ok(())
}

fn load_report_data(work_dir: &Path) -> Result<ReportData, FatalError> {
    let path = work_dir.join(REPORT_DATA_NAME);
    if !path.exists() {
        return Err(FatalError::ReportDataMissing {
            work_dir: work_dir.to_path_buf(),
        });
    }

    let content = fs::read_to_string(&path).map_err(|source| FatalError::DocumentUnreadable {
        path: path.clone(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|e| FatalError::ReportDataInvalid {
        message: e.to_string(),
    })
}
