//! Drill-down query: which rules fire against one particular file.
//!
//! Walks the raw document rather than the extractor's aggregate view so the
//! per-file message detail is derived on demand. The target may be a full
//! path or a bare filename; a bare name matches any incident path with that
//! suffix. Files in different directories sharing a basename can therefore
//! both match. That leniency is deliberate: callers often only know the
//! filename, and they are told to retry with one when a full path misses.

use crate::core::document::{file_uri_path, AnalysisDocument};
use serde::Serialize;
use serde_yaml::Value;
use std::collections::BTreeSet;

pub const DEFAULT_FILE_LIMIT: usize = 10;

const NO_MESSAGE_PLACEHOLDER: &str = "No specific message";

/// One rule affecting the queried file.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FileIssue {
    pub rule_id: String,
    pub description: String,
    pub messages: Vec<String>,
}

/// Successful drill-down result, truncated to the caller's limit.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FileIssuesReport {
    pub file: String,
    pub total_distinct_issues: usize,
    pub returned: usize,
    pub has_more: bool,
    pub issues: Vec<FileIssue>,
}

/// Outcome of a drill-down query. A miss is a normal outcome, never an
/// error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileQuery {
    Found(FileIssuesReport),
    NotFound { file: String },
}

/// Query one document for all distinct rules affecting `target`.
pub fn query_file(document: &AnalysisDocument, target: &str, limit: usize) -> FileQuery {
    let mut matched: Vec<FileIssue> = Vec::new();

    for ruleset in document.rulesets() {
        let Some(violations) = ruleset
            .as_mapping()
            .and_then(|m| m.get("violations"))
            .and_then(Value::as_mapping)
        else {
            continue;
        };

        for (rule_key, violation) in violations {
            let (Some(rule_id), Some(violation)) = (rule_key.as_str(), violation.as_mapping())
            else {
                continue;
            };
            let Some(incidents) = violation.get("incidents").and_then(Value::as_sequence)
            else {
                continue;
            };

            let mut messages = BTreeSet::new();
            let mut hits = 0usize;

            for incident in incidents {
                let Some(incident) = incident.as_mapping() else {
                    continue;
                };
                let Some(path) = incident
                    .get("uri")
                    .and_then(Value::as_str)
                    .and_then(file_uri_path)
                else {
                    continue;
                };

                if path == target || path.ends_with(target) {
                    hits += 1;
                    if let Some(message) =
                        incident.get("message").and_then(Value::as_str)
                    {
                        if !message.is_empty() {
                            messages.insert(message.to_string());
                        }
                    }
                }
            }

            if hits > 0 {
                let description = violation
                    .get("description")
                    .and_then(Value::as_str)
                    .unwrap_or("No description");
                let messages = if messages.is_empty() {
                    vec![NO_MESSAGE_PLACEHOLDER.to_string()]
                } else {
                    messages.into_iter().collect()
                };
                matched.push(FileIssue {
                    rule_id: rule_id.to_string(),
                    description: description.to_string(),
                    messages,
                });
            }
        }
    }

    if matched.is_empty() {
        return FileQuery::NotFound {
            file: target.to_string(),
        };
    }

    let total = matched.len();
    matched.truncate(limit);

    FileQuery::Found(FileIssuesReport {
        file: target.to_string(),
        total_distinct_issues: total,
        returned: matched.len(),
        has_more: total > limit,
        issues: matched,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    fn doc() -> AnalysisDocument {
        let yaml = indoc! {"
            - name: rs
              violations:
                rule-main:
                  description: main file rule
                  incidents:
                    - uri: file:///src/app/Main.java
                      message: fix the import
                    - uri: file:///src/app/Main.java
                rule-other:
                  description: other file rule
                  incidents:
                    - uri: file:///src/app/Other.java
                      message: unrelated
                rule-silent:
                  description: no message
                  incidents:
                    - uri: file:///src/app/Main.java
        "};
        AnalysisDocument::from_value(serde_yaml::from_str(yaml).unwrap()).unwrap()
    }

    #[test]
    fn bare_filename_matches_by_suffix() {
        let FileQuery::Found(report) = query_file(&doc(), "Main.java", DEFAULT_FILE_LIMIT)
        else {
            panic!("expected a match");
        };
        assert_eq!(report.total_distinct_issues, 2);
        assert_eq!(report.returned, 2);
        assert!(!report.has_more);
        assert_eq!(report.issues[0].rule_id, "rule-main");
        assert_eq!(report.issues[0].messages, vec!["fix the import"]);
    }

    #[test]
    fn full_path_matches_exactly() {
        let FileQuery::Found(report) =
            query_file(&doc(), "/src/app/Other.java", DEFAULT_FILE_LIMIT)
        else {
            panic!("expected a match");
        };
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].rule_id, "rule-other");
    }

    #[test]
    fn missing_messages_get_a_placeholder() {
        let FileQuery::Found(report) = query_file(&doc(), "Main.java", DEFAULT_FILE_LIMIT)
        else {
            panic!("expected a match");
        };
        let silent = report
            .issues
            .iter()
            .find(|i| i.rule_id == "rule-silent")
            .unwrap();
        assert_eq!(silent.messages, vec![NO_MESSAGE_PLACEHOLDER]);
    }

    #[test]
    fn unmatched_target_is_not_found_not_an_error() {
        assert_eq!(
            query_file(&doc(), "Nope.java", DEFAULT_FILE_LIMIT),
            FileQuery::NotFound {
                file: "Nope.java".to_string()
            }
        );
    }

    #[test]
    fn limit_truncates_and_sets_has_more() {
        let FileQuery::Found(report) = query_file(&doc(), "Main.java", 1) else {
            panic!("expected a match");
        };
        assert_eq!(report.total_distinct_issues, 2);
        assert_eq!(report.returned, 1);
        assert!(report.has_more);
    }
}
