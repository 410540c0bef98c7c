//! Serde model of the migration summary document (`report-data.json`).
//!
//! Every field defaults so a partially populated document still renders;
//! missing data shows up as a neutral value, never as a failure.

use serde::{Deserialize, Serialize};

fn unknown_project() -> String {
    "Unknown Project".to_string()
}

fn unknown() -> String {
    "Unknown".to_string()
}

fn incomplete() -> String {
    "incomplete".to_string()
}

fn none_status() -> String {
    "NONE".to_string()
}

fn not_applicable() -> String {
    "N/A".to_string()
}

fn info_status() -> String {
    "info".to_string()
}

fn baseline_dir() -> String {
    "baseline".to_string()
}

fn post_migration_dir() -> String {
    "post-migration".to_string()
}

/// The aggregate record of one migration attempt, owned by the surrounding
/// workflow. migmap only reads it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportData {
    pub migration: MigrationInfo,
    pub summary: SummarySection,
    pub groups: Vec<FixGroup>,
    pub rounds: Vec<FixRound>,
    pub kantra_residual: KantraResidual,
    pub action_required: Vec<ActionItem>,
    pub visual: VisualSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MigrationInfo {
    #[serde(default = "unknown_project")]
    pub project: String,
    #[serde(default = "unknown")]
    pub source: String,
    #[serde(default = "unknown")]
    pub target: String,
    pub timestamp: String,
}

impl Default for MigrationInfo {
    fn default() -> Self {
        Self {
            project: unknown_project(),
            source: unknown(),
            target: unknown(),
            timestamp: String::new(),
        }
    }
}

/// Pass/fail/none status per check, plus the overall verdict.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarySection {
    #[serde(default = "incomplete")]
    pub status: String,
    pub total_rounds: u32,
    #[serde(default = "none_status")]
    pub build: String,
    #[serde(default = "none_status")]
    pub unit_tests: String,
    #[serde(default = "none_status")]
    pub e2e_tests: String,
    #[serde(default = "none_status")]
    pub lint: String,
    #[serde(default = "none_status")]
    pub target_validation: String,
}

impl Default for SummarySection {
    fn default() -> Self {
        Self {
            status: incomplete(),
            total_rounds: 0,
            build: none_status(),
            unit_tests: none_status(),
            e2e_tests: none_status(),
            lint: none_status(),
            target_validation: none_status(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FixGroup {
    pub name: String,
    #[serde(default = "incomplete")]
    pub status: String,
    pub issues_fixed: u64,
    pub description: String,
}

impl Default for FixGroup {
    fn default() -> Self {
        Self {
            name: String::new(),
            status: incomplete(),
            issues_fixed: 0,
            description: String::new(),
        }
    }
}

/// One fix iteration of the outer agent loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FixRound {
    pub number: u64,
    pub group: String,
    pub issues_fixed: u64,
    pub new_issues: u64,
    #[serde(default = "none_status")]
    pub build: String,
    #[serde(default = "not_applicable")]
    pub tests: String,
}

impl Default for FixRound {
    fn default() -> Self {
        Self {
            number: 0,
            group: String::new(),
            issues_fixed: 0,
            new_issues: 0,
            build: none_status(),
            tests: not_applicable(),
        }
    }
}

/// Incident categories left unfixed at the end of the run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KantraResidual {
    pub total_incidents: u64,
    pub categories: Vec<ResidualCategory>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResidualCategory {
    pub rule: String,
    pub count: u64,
    pub reason: String,
}

/// A flagged outcome needing human judgment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionItem {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub recommendation: String,
    pub details: String,
    pub page: String,
}

impl Default for ActionItem {
    fn default() -> Self {
        Self {
            kind: "unresolved_issue".to_string(),
            description: String::new(),
            recommendation: String::new(),
            details: String::new(),
            page: String::new(),
        }
    }
}

/// Screenshot comparison metadata, produced externally.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualSection {
    pub has_screenshots: bool,
    #[serde(default = "baseline_dir")]
    pub baseline_dir: String,
    #[serde(default = "post_migration_dir")]
    pub post_migration_dir: String,
    pub pages: Vec<PageComparison>,
}

impl Default for VisualSection {
    fn default() -> Self {
        Self {
            has_screenshots: false,
            baseline_dir: baseline_dir(),
            post_migration_dir: post_migration_dir(),
            pages: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PageComparison {
    #[serde(default = "unknown")]
    pub name: String,
    #[serde(default = "info_status")]
    pub status: String,
    pub notes: String,
    pub baseline: String,
    pub post_migration: String,
}

impl Default for PageComparison {
    fn default() -> Self {
        Self {
            name: unknown(),
            status: info_status(),
            notes: String::new(),
            baseline: String::new(),
            post_migration: String::new(),
        }
    }
}
