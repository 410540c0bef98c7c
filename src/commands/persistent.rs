//! `persistent` command: plain-text report of issues recurring across runs.

use crate::analysis::{track_persistent_issues, PersistenceScan, PersistentIssue};
use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

const TIMELINE_LIMIT: usize = 5;
const MESSAGE_LIMIT: usize = 3;

pub struct PersistentConfig {
    pub base_dir: PathBuf,
    pub min_occurrences: usize,
}

pub fn handle_persistent(config: PersistentConfig) -> Result<()> {
    let scan = track_persistent_issues(&config.base_dir, config.min_occurrences)?;
    print_scan_report(&scan);
    Ok(())
}

fn print_scan_report(scan: &PersistenceScan) {
    if scan.snapshots.is_empty() {
        println!(
            "No output.yaml files found in '{}'",
            scan.root.display()
        );
        return;
    }

    let rule = "=".repeat(80);
    println!("{rule}");
    println!("{}", "PERSISTENT ISSUES ANALYSIS".bold());
    println!("{rule}");
    println!("Base directory: {}", scan.root.display());
    println!("Output files found: {}", scan.snapshots.len());
    println!(
        "Analyzing issues appearing in {}+ files",
        scan.min_occurrences
    );
    println!();

    print_file_inventory(scan);

    for warning in &scan.warnings {
        eprintln!("{} {warning}", "Warning:".yellow());
    }

    if scan.persistent.is_empty() {
        println!("{rule}");
        println!("{} No persistent issues found!", "\u{2705}".green());
        println!(
            "All issues appeared in fewer than {} analysis runs.",
            scan.min_occurrences
        );
        println!("{rule}");
        return;
    }

    println!("{rule}");
    println!(
        "{} PERSISTENT ISSUES (appearing in {}+ files):",
        "\u{1f534}".red(),
        scan.min_occurrences
    );
    println!("{rule}");
    println!();

    for issue in &scan.persistent {
        print_issue_block(issue);
    }

    println!("{rule}");
    println!(
        "SUMMARY: {} persistent issues found",
        scan.persistent.len()
    );
    println!("{rule}");
}

fn print_file_inventory(scan: &PersistenceScan) {
    println!("\u{1f4c1} ANALYZING FILES (newest to oldest):");
    println!("{}", "-".repeat(80));

    for (idx, snapshot) in scan.snapshots.iter().enumerate() {
        println!("{}. {}", idx + 1, snapshot.relative.display());
        println!(
            "   Timestamp: {} ({} bytes)",
            snapshot.timestamp.format("%Y-%m-%d %H:%M:%S"),
            snapshot.size
        );
        if snapshot.issue_count == 0 {
            println!("   No issues found");
        } else {
            println!("   Issues: {}", snapshot.issue_count);
        }
        println!();
    }
}

fn print_issue_block(issue: &PersistentIssue) {
    let latest = issue.latest();

    println!("Issue: {}", issue.rule_id.bold());
    println!("Occurrences: {} times", issue.occurrences.len());
    println!("Description: {}", latest.description);
    println!("Category: {}", latest.category);
    println!("Ruleset: {}", latest.ruleset);

    if latest.incident_messages.is_empty() {
        println!("Messages: No specific messages available");
    } else {
        println!("Latest messages:");
        for message in latest.incident_messages.iter().take(MESSAGE_LIMIT) {
            println!("  - {message}");
        }
    }

    println!("Occurrence timeline:");
    for occurrence in issue.occurrences.iter().take(TIMELINE_LIMIT) {
        println!(
            "  - {}: {} ({} incidents)",
            occurrence.timestamp.format("%Y-%m-%d %H:%M:%S"),
            occurrence.relative.display(),
            occurrence.incident_count
        );
    }
    if issue.occurrences.len() > TIMELINE_LIMIT {
        println!(
            "  ... and {} more occurrences",
            issue.occurrences.len() - TIMELINE_LIMIT
        );
    }
    println!();
}
