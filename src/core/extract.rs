//! Finding extractor: one analysis document in, normalized issue records out.
//!
//! Extraction is best-effort. A malformed ruleset, violation, or incident is
//! skipped individually and recorded as a [`SkipDiagnostic`] so callers can
//! inspect what was dropped; the rest of the document still yields issues.

use crate::core::document::{file_uri_path, AnalysisDocument};
use serde::Serialize;
use serde_yaml::Value;
use std::collections::BTreeSet;

const NO_DESCRIPTION: &str = "No description";
const UNKNOWN_CATEGORY: &str = "unknown";
const UNKNOWN_RULESET: &str = "Unknown";

/// Aggregate of all incidents for one rule within one analysis run.
///
/// `files_affected` and `incident_messages` are sets: duplicate incidents
/// pointing at the same file or bearing the same message collapse to one
/// entry.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct IssueRecord {
    pub rule_id: String,
    pub description: String,
    pub category: String,
    pub ruleset: String,
    pub incident_count: usize,
    pub files_affected: BTreeSet<String>,
    pub incident_messages: BTreeSet<String>,
}

/// One malformed element skipped during extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipDiagnostic {
    /// Where in the document the element sat, e.g. `ruleset[2]` or
    /// `ruleset[0].rule-x.incidents[5]`.
    pub location: String,
    pub reason: String,
}

impl std::fmt::Display for SkipDiagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "skipped {}: {}", self.location, self.reason)
    }
}

/// Result of extracting one document: issues in encounter order plus the
/// skip diagnostics accumulated along the way.
#[derive(Debug, Clone, Default)]
pub struct ExtractionOutcome {
    pub issues: Vec<IssueRecord>,
    pub diagnostics: Vec<SkipDiagnostic>,
}

impl ExtractionOutcome {
    /// Look up an issue by rule id.
    pub fn get(&self, rule_id: &str) -> Option<&IssueRecord> {
        self.issues.iter().find(|i| i.rule_id == rule_id)
    }

    fn insert(&mut self, record: IssueRecord) {
        // Rule ids are unique within a document; if an upstream tool repeats
        // one, the later entry wins, keeping the original slot.
        match self.issues.iter_mut().find(|i| i.rule_id == record.rule_id) {
            Some(existing) => *existing = record,
            None => self.issues.push(record),
        }
    }

    fn skip(&mut self, location: String, reason: &str) {
        self.diagnostics.push(SkipDiagnostic {
            location,
            reason: reason.to_string(),
        });
    }
}

/// Extract every issue with at least one attributable file location.
///
/// Rules whose incidents carry no `file://` URI are dropped from the result:
/// without a location there is nothing to fix. Incident order within a
/// violation does not affect the output.
pub fn extract_issues(document: &AnalysisDocument) -> ExtractionOutcome {
    let mut outcome = ExtractionOutcome::default();

    for (ruleset_idx, ruleset) in document.rulesets().iter().enumerate() {
        let Some(ruleset_map) = ruleset.as_mapping() else {
            outcome.skip(format!("ruleset[{ruleset_idx}]"), "not a mapping");
            continue;
        };

        let Some(violations) = ruleset_map.get("violations") else {
            // Informational rulesets (tags only, no violations) are normal.
            continue;
        };
        let Some(violations) = violations.as_mapping() else {
            outcome.skip(
                format!("ruleset[{ruleset_idx}].violations"),
                "not a mapping",
            );
            continue;
        };

        let ruleset_name = ruleset_map
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN_RULESET);

        for (rule_key, violation) in violations {
            let Some(rule_id) = rule_key.as_str() else {
                outcome.skip(
                    format!("ruleset[{ruleset_idx}].violations"),
                    "rule id is not a string",
                );
                continue;
            };

            match extract_violation(rule_id, ruleset_name, violation) {
                Ok(Some(record)) => outcome.insert(record),
                Ok(None) => {} // no attributable files
                Err(reason) => {
                    outcome.skip(format!("ruleset[{ruleset_idx}].{rule_id}"), reason)
                }
            }
        }
    }

    outcome
}

/// Returns `Ok(None)` for a well-formed rule with no attributable files and
/// `Err` for a malformed one.
fn extract_violation(
    rule_id: &str,
    ruleset_name: &str,
    violation: &Value,
) -> Result<Option<IssueRecord>, &'static str> {
    let violation = violation.as_mapping().ok_or("violation is not a mapping")?;

    let incidents = violation
        .get("incidents")
        .and_then(Value::as_sequence)
        .ok_or("incidents is not a list")?;

    let mut files_affected = BTreeSet::new();
    let mut incident_messages = BTreeSet::new();

    for incident in incidents {
        let Some(incident) = incident.as_mapping() else {
            // One corrupt incident does not invalidate the rule.
            continue;
        };

        if let Some(uri) = incident.get("uri").and_then(Value::as_str) {
            if let Some(path) = file_uri_path(uri) {
                files_affected.insert(path.to_string());
            }
        }

        if let Some(message) = incident.get("message").and_then(Value::as_str) {
            if !message.is_empty() {
                incident_messages.insert(message.to_string());
            }
        }
    }

    if files_affected.is_empty() {
        return Ok(None);
    }

    let description = violation
        .get("description")
        .and_then(Value::as_str)
        .unwrap_or(NO_DESCRIPTION);
    let category = violation
        .get("category")
        .and_then(Value::as_str)
        .unwrap_or(UNKNOWN_CATEGORY);

    Ok(Some(IssueRecord {
        rule_id: rule_id.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        ruleset: ruleset_name.to_string(),
        incident_count: incidents.len(),
        files_affected,
        incident_messages,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    fn doc(yaml: &str) -> AnalysisDocument {
        AnalysisDocument::from_value(serde_yaml::from_str(yaml).unwrap()).unwrap()
    }

    #[test]
    fn extracts_files_and_messages_as_sets() {
        let document = doc(indoc! {"
            - name: quarkus/springboot
              violations:
                javax-to-jakarta-00001:
                  description: Replace javax import
                  category: mandatory
                  incidents:
                    - uri: file:///src/app/Main.java
                      message: Use jakarta.inject
                    - uri: file:///src/app/Main.java
                      message: Use jakarta.inject
                    - uri: file:///src/app/Other.java
        "});

        let outcome = extract_issues(&document);
        assert_eq!(outcome.issues.len(), 1);
        let issue = &outcome.issues[0];
        assert_eq!(issue.rule_id, "javax-to-jakarta-00001");
        assert_eq!(issue.ruleset, "quarkus/springboot");
        assert_eq!(issue.incident_count, 3);
        assert_eq!(issue.files_affected.len(), 2);
        assert_eq!(issue.incident_messages.len(), 1);
        assert!(outcome.diagnostics.is_empty());
    }

    #[test]
    fn drops_rules_without_attributable_files() {
        let document = doc(indoc! {"
            - name: rs
              violations:
                no-location:
                  description: nothing to point at
                  incidents:
                    - uri: http://example.com/doc
                      message: remote only
                has-location:
                  description: ok
                  incidents:
                    - uri: file:///src/A.java
        "});

        let outcome = extract_issues(&document);
        assert_eq!(outcome.issues.len(), 1);
        assert_eq!(outcome.issues[0].rule_id, "has-location");
        // A zero-file rule is a normal outcome, not a skip.
        assert!(outcome.diagnostics.is_empty());
    }

    #[test]
    fn malformed_elements_become_diagnostics_not_failures() {
        let document = doc(indoc! {"
            - just a string
            - name: bad-violations
              violations: [not, a, mapping]
            - name: ok
              violations:
                broken-rule: 17
                good-rule:
                  incidents:
                    - uri: file:///src/B.java
                no-incidents:
                  description: incidents key missing
        "});

        let outcome = extract_issues(&document);
        assert_eq!(outcome.issues.len(), 1);
        assert_eq!(outcome.issues[0].rule_id, "good-rule");
        assert_eq!(outcome.issues[0].description, NO_DESCRIPTION);
        assert_eq!(outcome.issues[0].category, UNKNOWN_CATEGORY);

        let locations: Vec<_> = outcome
            .diagnostics
            .iter()
            .map(|d| d.location.as_str())
            .collect();
        assert_eq!(
            locations,
            vec![
                "ruleset[0]",
                "ruleset[1].violations",
                "ruleset[2].broken-rule",
                "ruleset[2].no-incidents",
            ]
        );
    }

    #[test]
    fn ruleset_without_violations_is_not_a_diagnostic() {
        let document = doc("- name: tags-only\n  tags: [a, b]\n");
        let outcome = extract_issues(&document);
        assert!(outcome.issues.is_empty());
        assert!(outcome.diagnostics.is_empty());
    }

    #[test]
    fn corrupt_incident_is_skipped_inside_a_rule() {
        let document = doc(indoc! {"
            - name: rs
              violations:
                r1:
                  incidents:
                    - 42
                    - uri: file:///src/C.java
        "});

        let outcome = extract_issues(&document);
        let issue = outcome.get("r1").unwrap();
        assert_eq!(issue.files_affected.len(), 1);
        assert_eq!(issue.incident_count, 2);
    }
}
