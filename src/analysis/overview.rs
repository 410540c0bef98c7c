//! Overview query: every issue in one run, ranked by blast radius.

use crate::core::ExtractionOutcome;
use serde::Serialize;

/// One issue in the overview, with its affected files.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OverviewIssue {
    pub rule_id: String,
    pub description: String,
    pub file_count: usize,
    pub files: Vec<String>,
}

/// Overview of all issues in one analysis run.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Overview {
    pub total_issues: usize,
    pub issues: Vec<OverviewIssue>,
}

/// Rank extracted issues by file count, descending.
///
/// The sort is stable: ties keep extraction encounter order. This is a
/// heuristic ranking by how widely an issue spreads, not a dependency-aware
/// priority order; deciding what actually blocks what is left to whoever
/// consumes the overview.
pub fn build_overview(outcome: &ExtractionOutcome) -> Overview {
    let mut issues: Vec<OverviewIssue> = outcome
        .issues
        .iter()
        .map(|issue| OverviewIssue {
            rule_id: issue.rule_id.clone(),
            description: issue.description.clone(),
            file_count: issue.files_affected.len(),
            files: issue.files_affected.iter().cloned().collect(),
        })
        .collect();

    issues.sort_by(|a, b| b.file_count.cmp(&a.file_count));

    Overview {
        total_issues: issues.len(),
        issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{extract_issues, AnalysisDocument};
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    fn overview_of(yaml: &str) -> Overview {
        let document =
            AnalysisDocument::from_value(serde_yaml::from_str(yaml).unwrap()).unwrap();
        build_overview(&extract_issues(&document))
    }

    #[test]
    fn sorts_by_file_count_descending_with_stable_ties() {
        let overview = overview_of(indoc! {"
            - name: rs
              violations:
                one-file-a:
                  incidents:
                    - uri: file:///a/A.java
                two-files:
                  incidents:
                    - uri: file:///a/A.java
                    - uri: file:///a/B.java
                one-file-b:
                  incidents:
                    - uri: file:///a/C.java
        "});

        let ids: Vec<_> = overview.issues.iter().map(|i| i.rule_id.as_str()).collect();
        assert_eq!(ids, vec!["two-files", "one-file-a", "one-file-b"]);
        assert_eq!(overview.total_issues, 3);
    }

    #[test]
    fn files_are_sorted_and_deduplicated() {
        let overview = overview_of(indoc! {"
            - name: rs
              violations:
                r1:
                  incidents:
                    - uri: file:///b/B.java
                    - uri: file:///a/A.java
                    - uri: file:///b/B.java
        "});

        assert_eq!(overview.issues[0].file_count, 2);
        assert_eq!(overview.issues[0].files, vec!["/a/A.java", "/b/B.java"]);
    }

    #[test]
    fn empty_document_yields_empty_overview() {
        let overview = overview_of("[]");
        assert_eq!(overview.total_issues, 0);
        assert!(overview.issues.is_empty());
    }
}
