//! `analyze` command: overview of all issues in one run.

use crate::analysis::{build_overview, Overview};
use crate::cli::OutputFormat;
use crate::commands::emit_diagnostics;
use crate::core::{extract_issues, AnalysisDocument};
use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

pub struct AnalyzeConfig {
    pub output_file: PathBuf,
    pub format: OutputFormat,
    pub verbosity: u8,
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    let document = AnalysisDocument::load(&config.output_file)?;
    let outcome = extract_issues(&document);
    emit_diagnostics(&outcome.diagnostics, config.verbosity);

    let overview = build_overview(&outcome);
    match config.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&overview)?),
        OutputFormat::Text => print_overview_text(&overview),
    }
    Ok(())
}

fn print_overview_text(overview: &Overview) {
    let rule = "=".repeat(80);
    println!("{rule}");
    println!("{}", "KANTRA MIGRATION ISSUES ANALYSIS".bold());
    println!("{rule}");
    println!("Total Issues: {}", overview.total_issues);
    println!();

    if overview.issues.is_empty() {
        println!("No migration issues found.");
        return;
    }

    println!("{:<40} {:<8} Description", "Rule ID", "Files");
    println!("{}", "-".repeat(80));
    for issue in &overview.issues {
        println!(
            "{:<40} {:<8} {}",
            issue.rule_id, issue.file_count, issue.description
        );
    }
    println!("{rule}");
}
