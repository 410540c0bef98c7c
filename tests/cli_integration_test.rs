// End-to-end CLI checks: exit behavior, JSON shapes, and report output.

use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

fn migmap() -> Command {
    Command::cargo_bin("migmap").unwrap()
}

const SAMPLE_OUTPUT: &str = "\
- name: quarkus/springboot
  violations:
    javax-to-jakarta-00001:
      description: Replace javax import
      category: mandatory
      incidents:
        - uri: file:///src/app/Main.java
          message: Use jakarta.inject
        - uri: file:///src/app/Service.java
    cdi-to-quarkus-00030:
      description: Use Quarkus DI
      category: optional
      incidents:
        - uri: file:///src/app/Main.java
";

#[test]
fn analyze_emits_ranked_json_overview() {
    let tmp = TempDir::new().unwrap();
    let doc = tmp.path().join("output.yaml");
    fs::write(&doc, SAMPLE_OUTPUT).unwrap();

    let assert = migmap().arg("analyze").arg(&doc).assert().success();
    let output = assert.get_output();
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(parsed["total_issues"], 2);
    assert_eq!(parsed["issues"][0]["rule_id"], "javax-to-jakarta-00001");
    assert_eq!(parsed["issues"][0]["file_count"], 2);
    assert_eq!(parsed["issues"][1]["file_count"], 1);
}

#[test]
fn analyze_missing_file_is_fatal_with_suggestion() {
    let output = migmap()
        .arg("analyze")
        .arg("/no/such/output.yaml")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("Suggestion:"));
}

#[test]
fn file_query_miss_is_a_structured_success() {
    let tmp = TempDir::new().unwrap();
    let doc = tmp.path().join("output.yaml");
    fs::write(&doc, SAMPLE_OUTPUT).unwrap();

    let assert = migmap()
        .arg("file")
        .arg(&doc)
        .arg("Nowhere.java")
        .assert()
        .success();
    let parsed: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).unwrap();

    assert!(parsed["error"]
        .as_str()
        .unwrap()
        .contains("No issues found for file: Nowhere.java"));
    assert!(parsed["suggestion"].as_str().unwrap().contains("filename"));
}

#[test]
fn file_query_matches_by_bare_filename() {
    let tmp = TempDir::new().unwrap();
    let doc = tmp.path().join("output.yaml");
    fs::write(&doc, SAMPLE_OUTPUT).unwrap();

    let assert = migmap()
        .arg("file")
        .arg(&doc)
        .arg("Main.java")
        .assert()
        .success();
    let parsed: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).unwrap();

    assert_eq!(parsed["total_distinct_issues"], 2);
    assert_eq!(parsed["has_more"], false);
}

#[test]
fn report_writes_self_contained_artifact_and_prints_path() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("report-data.json"),
        r#"{"migration": {"project": "Demo"}, "summary": {"build": "PASS"}}"#,
    )
    .unwrap();

    let assert = migmap().arg("report").arg(tmp.path()).assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(stdout.contains("report.html"));

    let html = fs::read_to_string(tmp.path().join("report.html")).unwrap();
    assert!(html.contains("<h1>Demo</h1>"));
    assert!(html.contains(">PASS</span>"));
}

#[test]
fn report_without_data_file_is_fatal() {
    let tmp = TempDir::new().unwrap();
    let output = migmap().arg("report").arg(tmp.path()).output().unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("report-data.json"));
    assert!(!tmp.path().join("report.html").exists());
}

#[test]
fn persistent_missing_directory_is_fatal() {
    let output = migmap()
        .arg("persistent")
        .arg("/no/such/workspace")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("directory not found"));
}
