//! Tests for report output formats.
//!
//! These tests verify the JSON report shape written to disk and stdout, and
//! the SARIF 2.1.0 structure consumed by IDE and CI integrations.

#![cfg(feature = "tree-sitter")]

use std::path::PathBuf;

use tempfile::TempDir;

use docgap::config::ScanConfig;
use docgap::report::{self, Report};
use docgap::Scanner;

fn testdata_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata")
}

fn setup() {
    docgap::init();
}

/// Scan two fixtures with findings and return the report.
fn run_report() -> Report {
    setup();

    let files = vec![
        testdata_path().join("widget.cs"),
        testdata_path().join("bare.cs"),
    ];
    Scanner::new(&ScanConfig::default()).run(&files).report
}

const KNOWN_LABELS: &[&str] = &["Class", "Interface", "Enum", "Struct", "Member"];

#[test]
fn test_json_entry_fields() {
    let report = run_report();
    let value: serde_json::Value =
        serde_json::from_str(&report::to_json(&report).unwrap()).unwrap();

    let object = value.as_object().expect("report should be an object");
    assert!(!object.is_empty(), "should have findings");

    for (file, entries) in object {
        let entries = entries.as_array().expect("each file maps to an array");
        assert!(!entries.is_empty(), "{} should have entries", file);

        for entry in entries {
            let fields = entry.as_object().unwrap();
            assert_eq!(fields.len(), 3, "exactly line, type, and member");

            assert!(entry["line"].as_u64().unwrap() >= 1, "lines are 1-based");
            let label = entry["type"].as_str().unwrap();
            assert!(
                KNOWN_LABELS.contains(&label),
                "label should be a known kind, got {}",
                label
            );
            assert!(!entry["member"].as_str().unwrap().is_empty());
        }
    }
}

#[test]
fn test_json_file_order_matches_input() {
    let report = run_report();
    let json = report::to_json(&report).unwrap();

    let widget_pos = json.find("widget.cs").expect("widget.cs should appear");
    let bare_pos = json.find("bare.cs").expect("bare.cs should appear");
    assert!(
        widget_pos < bare_pos,
        "files should appear in scan input order"
    );
}

#[test]
fn test_saved_report_matches_json_output() {
    let report = run_report();

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("report.json");
    report::save_report(&report, &path).expect("should save report");

    let saved = std::fs::read_to_string(&path).expect("should read saved report");
    assert_eq!(
        saved,
        report::to_json(&report).unwrap(),
        "file bytes should match the json format exactly"
    );
}

#[test]
fn test_sarif_structure() {
    let report = run_report();
    let value: serde_json::Value =
        serde_json::from_str(&report::to_sarif(&report).unwrap()).unwrap();

    assert_eq!(value["version"], "2.1.0");
    assert!(value["$schema"].as_str().unwrap().contains("sarif"));

    let driver = &value["runs"][0]["tool"]["driver"];
    assert_eq!(driver["name"], "docgap");
    assert_eq!(driver["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(driver["rules"][0]["id"], "undocumented_declaration");

    let results = value["runs"][0]["results"].as_array().unwrap();
    assert_eq!(results.len(), report.entry_count());

    for result in results {
        assert_eq!(result["ruleId"], "undocumented_declaration");
        assert_eq!(result["level"], "warning");
        assert!(result["message"]["text"]
            .as_str()
            .unwrap()
            .contains("lacks documentation"));

        let location = &result["locations"][0]["physicalLocation"];
        assert!(!location["artifactLocation"]["uri"]
            .as_str()
            .unwrap()
            .is_empty());
        assert!(location["region"]["startLine"].as_u64().unwrap() >= 1);
    }
}

#[test]
fn test_sarif_message_format() {
    let report = run_report();
    let value: serde_json::Value =
        serde_json::from_str(&report::to_sarif(&report).unwrap()).unwrap();

    let messages: Vec<&str> = value["runs"][0]["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["message"]["text"].as_str().unwrap())
        .collect();

    assert!(messages.contains(&"Class lacks documentation: class Widget"));
    assert!(messages.contains(&"Member lacks documentation: public int Count"));
}

#[test]
fn test_empty_report_formats() {
    setup();

    let files = vec![testdata_path().join("documented.cs")];
    let report = Scanner::new(&ScanConfig::default()).run(&files).report;

    assert!(report.is_empty());
    assert_eq!(report::to_json(&report).unwrap(), "{}");

    let value: serde_json::Value =
        serde_json::from_str(&report::to_sarif(&report).unwrap()).unwrap();
    assert_eq!(value["runs"][0]["results"].as_array().unwrap().len(), 0);
}
