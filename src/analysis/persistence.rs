//! Cross-run persistence tracking.
//!
//! Repeated fix-and-reanalyze cycles leave one `output.yaml` per run under
//! the workspace. An issue that keeps reappearing across those runs is
//! resisting automated remediation and needs a different strategy or human
//! review; surfacing that is the point of this module.

use crate::core::{extract_issues, AnalysisDocument, IssueRecord, KANTRA_OUTPUT_NAME};
use crate::errors::FatalError;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const DEFAULT_MIN_OCCURRENCES: usize = 3;

/// One discovered analysis run, never mutated after creation.
#[derive(Debug, Clone)]
pub struct RunSnapshot {
    pub path: PathBuf,
    /// Path relative to the scan root, for display.
    pub relative: PathBuf,
    pub timestamp: DateTime<Local>,
    pub size: u64,
    /// Issues extracted from this run; empty when the document failed to
    /// parse.
    pub issue_count: usize,
}

/// One appearance of a rule in one run.
#[derive(Debug, Clone)]
pub struct Occurrence {
    pub timestamp: DateTime<Local>,
    pub relative: PathBuf,
    pub incident_count: usize,
    pub issue: IssueRecord,
}

/// A rule that recurred in at least `min_occurrences` runs.
#[derive(Debug, Clone)]
pub struct PersistentIssue {
    pub rule_id: String,
    /// Newest first, matching the scan order.
    pub occurrences: Vec<Occurrence>,
}

impl PersistentIssue {
    /// Issue data from the most recent run the rule appeared in.
    pub fn latest(&self) -> &IssueRecord {
        &self.occurrences[0].issue
    }
}

/// Full result of a persistence scan.
#[derive(Debug, Clone)]
pub struct PersistenceScan {
    pub root: PathBuf,
    pub min_occurrences: usize,
    /// Discovered runs, newest first.
    pub snapshots: Vec<RunSnapshot>,
    /// Sorted by occurrence count descending.
    pub persistent: Vec<PersistentIssue>,
    /// Non-fatal problems hit during the scan (unstat-able files, documents
    /// that failed to parse).
    pub warnings: Vec<String>,
}

/// Scan `root` recursively for Kantra output documents and report every rule
/// recurring in at least `min_occurrences` of them.
///
/// A document that fails to parse contributes zero issues; only a missing
/// root directory is fatal.
pub fn track_persistent_issues(
    root: &Path,
    min_occurrences: usize,
) -> Result<PersistenceScan, FatalError> {
    if !root.exists() {
        return Err(FatalError::ScanRootMissing {
            path: root.to_path_buf(),
        });
    }

    let mut warnings = Vec::new();
    let mut snapshots = discover_runs(root, &mut warnings);
    // Newest first; ties keep discovery order.
    snapshots.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    // rule_id -> occurrence list, lists stay newest-first because snapshots
    // are processed newest-first.
    let mut occurrences: Vec<(String, Vec<Occurrence>)> = Vec::new();

    for snapshot in &mut snapshots {
        let document = match AnalysisDocument::load(&snapshot.path) {
            Ok(document) => document,
            Err(err) => {
                warnings.push(format!("{}: {}", snapshot.relative.display(), err));
                continue;
            }
        };

        let outcome = extract_issues(&document);
        snapshot.issue_count = outcome.issues.len();

        for issue in outcome.issues {
            let occurrence = Occurrence {
                timestamp: snapshot.timestamp,
                relative: snapshot.relative.clone(),
                incident_count: issue.incident_count,
                issue,
            };
            let rule_id = occurrence.issue.rule_id.clone();
            match occurrences.iter_mut().find(|(id, _)| *id == rule_id) {
                Some((_, list)) => list.push(occurrence),
                None => occurrences.push((rule_id, vec![occurrence])),
            }
        }
    }

    let mut persistent: Vec<PersistentIssue> = occurrences
        .into_iter()
        .filter(|(_, list)| list.len() >= min_occurrences)
        .map(|(rule_id, occurrences)| PersistentIssue {
            rule_id,
            occurrences,
        })
        .collect();
    persistent.sort_by(|a, b| b.occurrences.len().cmp(&a.occurrences.len()));

    Ok(PersistenceScan {
        root: root.to_path_buf(),
        min_occurrences,
        snapshots,
        persistent,
        warnings,
    })
}

fn discover_runs(root: &Path, warnings: &mut Vec<String>) -> Vec<RunSnapshot> {
    let mut snapshots = Vec::new();

    for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() || entry.file_name() != KANTRA_OUTPUT_NAME {
            continue;
        }

        let path = entry.path().to_path_buf();
        let metadata = match entry.metadata() {
            Ok(metadata) => metadata,
            Err(err) => {
                warnings.push(format!("could not stat {}: {err}", path.display()));
                continue;
            }
        };
        let modified = match metadata.modified() {
            Ok(modified) => modified,
            Err(err) => {
                warnings.push(format!("could not stat {}: {err}", path.display()));
                continue;
            }
        };

        let relative = path.strip_prefix(root).unwrap_or(&path).to_path_buf();
        snapshots.push(RunSnapshot {
            path,
            relative,
            timestamp: DateTime::<Local>::from(modified),
            size: metadata.len(),
            issue_count: 0,
        });
    }

    snapshots
}
