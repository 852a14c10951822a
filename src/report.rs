//! Report model and output formatting.
//!
//! Supports three output formats:
//! - Pretty: colored terminal output for human readability
//! - JSON: the canonical file-to-entries map, also written to the report file
//! - SARIF: Static Analysis Results Interchange Format for IDE/CI integration

use colored::*;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Local;

use crate::config::MemberScope;
use crate::summary::CoverageSummary;

/// One undocumented-declaration finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    /// 1-based start line of the declaration.
    pub line: usize,
    /// Label: the type's own kind name, or "Member" for member declarations.
    #[serde(rename = "type")]
    pub kind: String,
    /// Canonical one-line signature.
    pub member: String,
}

/// Accumulates findings while a scan runs.
///
/// Keys are used exactly as supplied; buckets keep insertion order and each
/// bucket keeps its entries in the order they were recorded.
#[derive(Debug, Default)]
pub struct ReportBuilder {
    order: Vec<String>,
    buckets: HashMap<String, Vec<ReportEntry>>,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry under a file key, creating the bucket on first use.
    pub fn record(&mut self, file: &str, entry: ReportEntry) {
        if !self.buckets.contains_key(file) {
            self.order.push(file.to_string());
        }
        self.buckets.entry(file.to_string()).or_default().push(entry);
    }

    /// Freeze the accumulated findings into an immutable report.
    pub fn finalize(self) -> Report {
        let mut buckets = self.buckets;
        let files = self
            .order
            .into_iter()
            .filter_map(|file| buckets.remove(&file).map(|entries| (file, entries)))
            .collect();
        Report { files }
    }
}

/// Finalized scan findings: file path to entries, in traversal order.
/// Read-only once built; serializes as a JSON object keyed by file path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    files: Vec<(String, Vec<ReportEntry>)>,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Number of files with findings.
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Total findings across all files.
    pub fn entry_count(&self) -> usize {
        self.files.iter().map(|(_, entries)| entries.len()).sum()
    }

    /// Iterate files and their entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ReportEntry])> {
        self.files
            .iter()
            .map(|(file, entries)| (file.as_str(), entries.as_slice()))
    }

    /// Entries recorded for one file key, if any.
    pub fn entries_for(&self, file: &str) -> Option<&[ReportEntry]> {
        self.files
            .iter()
            .find(|(key, _)| key == file)
            .map(|(_, entries)| entries.as_slice())
    }
}

impl Serialize for Report {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.files.len()))?;
        for (file, entries) in &self.files {
            map.serialize_entry(file, entries)?;
        }
        map.end()
    }
}

// =============================================================================
// JSON Format (the canonical report shape)
// =============================================================================

/// Render the report as pretty-printed JSON. The report file and the `json`
/// stdout format both use exactly these bytes.
pub fn to_json(report: &Report) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Write the report in JSON format to stdout.
pub fn write_json(report: &Report) -> anyhow::Result<()> {
    println!("{}", to_json(report)?);
    Ok(())
}

// =============================================================================
// Report persistence
// =============================================================================

/// Default report file name, stamped with local time:
/// `docgap_2026-08-22_13-45-09.json`.
pub fn default_report_path() -> PathBuf {
    let stamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
    PathBuf::from(format!("docgap_{}.json", stamp))
}

/// Write the report JSON to a file.
pub fn save_report(report: &Report, path: &Path) -> anyhow::Result<()> {
    let json = to_json(report)?;
    fs::write(path, json)
        .with_context(|| format!("failed to write report to {}", path.display()))?;
    Ok(())
}

// =============================================================================
// SARIF Format
// =============================================================================

const SARIF_VERSION: &str = "2.1.0";
const SARIF_SCHEMA: &str = "https://raw.githubusercontent.com/oasis-tcs/sarif-spec/master/Schemata/sarif-schema-2.1.0.json";
const TOOL_NAME: &str = "docgap";
const INFO_URI: &str = "https://github.com/zen-systems/docgap-rust";
const RULE_ID: &str = "undocumented_declaration";

#[derive(Serialize, Deserialize)]
struct SarifReport {
    version: String,
    #[serde(rename = "$schema")]
    schema: String,
    runs: Vec<SarifRun>,
}

#[derive(Serialize, Deserialize)]
struct SarifRun {
    tool: SarifTool,
    results: Vec<SarifResult>,
}

#[derive(Serialize, Deserialize)]
struct SarifTool {
    driver: SarifDriver,
}

#[derive(Serialize, Deserialize)]
struct SarifDriver {
    name: String,
    version: String,
    #[serde(rename = "informationUri")]
    information_uri: String,
    rules: Vec<SarifRule>,
}

#[derive(Serialize, Deserialize)]
struct SarifRule {
    id: String,
    name: String,
    #[serde(rename = "shortDescription")]
    short_description: SarifMessage,
    #[serde(rename = "fullDescription", skip_serializing_if = "Option::is_none")]
    full_description: Option<SarifMessage>,
    #[serde(rename = "helpUri", skip_serializing_if = "Option::is_none")]
    help_uri: Option<String>,
    #[serde(rename = "defaultConfiguration")]
    default_config: SarifRuleConfig,
}

#[derive(Serialize, Deserialize)]
struct SarifRuleConfig {
    level: String,
}

#[derive(Serialize, Deserialize)]
struct SarifResult {
    #[serde(rename = "ruleId")]
    rule_id: String,
    level: String,
    message: SarifMessage,
    locations: Vec<SarifLocation>,
}

#[derive(Serialize, Deserialize)]
struct SarifMessage {
    text: String,
}

#[derive(Serialize, Deserialize)]
struct SarifLocation {
    #[serde(rename = "physicalLocation")]
    physical_location: SarifPhysicalLocation,
}

#[derive(Serialize, Deserialize)]
struct SarifPhysicalLocation {
    #[serde(rename = "artifactLocation")]
    artifact_location: SarifArtifact,
    region: SarifRegion,
}

#[derive(Serialize, Deserialize)]
struct SarifArtifact {
    uri: String,
}

#[derive(Serialize, Deserialize)]
struct SarifRegion {
    #[serde(rename = "startLine")]
    start_line: usize,
}

/// Render the report as a SARIF 2.1.0 document.
pub fn to_sarif(report: &Report) -> anyhow::Result<String> {
    let rules = vec![SarifRule {
        id: RULE_ID.to_string(),
        name: "UndocumentedDeclaration".to_string(),
        short_description: SarifMessage {
            text: "Detects type and member declarations without a leading comment".to_string(),
        },
        full_description: Some(SarifMessage {
            text: "Flags every type declaration, and every member declaration within the \
                   configured visibility scope, that has no line, block, or documentation \
                   comment directly above it."
                .to_string(),
        }),
        help_uri: Some(INFO_URI.to_string()),
        default_config: SarifRuleConfig {
            level: "warning".to_string(),
        },
    }];

    let results: Vec<SarifResult> = report
        .iter()
        .flat_map(|(file, entries)| {
            entries.iter().map(move |entry| SarifResult {
                rule_id: RULE_ID.to_string(),
                level: "warning".to_string(),
                message: SarifMessage {
                    text: format!("{} lacks documentation: {}", entry.kind, entry.member),
                },
                locations: vec![SarifLocation {
                    physical_location: SarifPhysicalLocation {
                        artifact_location: SarifArtifact {
                            uri: file.replace('\\', "/"),
                        },
                        region: SarifRegion {
                            start_line: if entry.line > 0 { entry.line } else { 1 },
                        },
                    },
                }],
            })
        })
        .collect();

    let document = SarifReport {
        version: SARIF_VERSION.to_string(),
        schema: SARIF_SCHEMA.to_string(),
        runs: vec![SarifRun {
            tool: SarifTool {
                driver: SarifDriver {
                    name: TOOL_NAME.to_string(),
                    version: env!("CARGO_PKG_VERSION").to_string(),
                    information_uri: INFO_URI.to_string(),
                    rules,
                },
            },
            results,
        }],
    };

    Ok(serde_json::to_string_pretty(&document)?)
}

/// Write the report in SARIF format to stdout.
pub fn write_sarif(report: &Report) -> anyhow::Result<()> {
    println!("{}", to_sarif(report)?);
    Ok(())
}

// =============================================================================
// Pretty Format
// =============================================================================

/// Write the report and run summary in pretty (human-readable) format.
pub fn write_pretty(report: &Report, summary: &CoverageSummary, scope: MemberScope) {
    // Header
    println!();
    print!("  ");
    print!("{}", "docgap".cyan().bold());
    println!(" v{}", env!("CARGO_PKG_VERSION"));
    println!();

    // Scan info
    print!("  {}", "Scope: ".dimmed());
    println!("{}", scope);
    print!("  {}", "Files: ".dimmed());
    print!("{} scanned", summary.files_scanned);
    if summary.files_skipped > 0 {
        print!("  {}", format!("({} skipped)", summary.files_skipped).yellow());
    }
    println!();
    println!();

    // Result summary
    write_result_summary(report, summary);
    println!();

    // Findings per file
    if !report.is_empty() {
        write_findings(report);
    }

    // Coverage breakdown
    write_coverage(summary);
    println!();
}

fn write_result_summary(report: &Report, summary: &CoverageSummary) {
    if report.is_empty() {
        print!("  {}", "✓ PASS".green());
        print!("  every eligible declaration is documented");
    } else {
        print!("  {}", "✗ FAIL".red());
        let files = report.file_count();
        print!(
            "  {} undocumented declaration{} in {} file{}",
            summary.undocumented,
            if summary.undocumented != 1 { "s" } else { "" },
            files,
            if files != 1 { "s" } else { "" }
        );
    }
    println!();
}

fn write_findings(report: &Report) {
    for (file, entries) in report.iter() {
        println!("  {} ({}):", file.blue(), entries.len());
        for entry in entries {
            print!("    {}", format!("{:>5}", entry.line).dimmed());
            print!("  {}", kind_cell(&entry.kind).yellow());
            println!("{}", entry.member);
        }
        println!();
    }
}

/// Kind column, padded before coloring; a format width applied to the colored
/// string would count the escape codes.
fn kind_cell(kind: &str) -> String {
    format!("{:<11}", kind)
}

fn write_coverage(summary: &CoverageSummary) {
    print!("  {}", "Coverage: ".bold());
    write_colored_coverage(summary.coverage_percent());
    println!(
        "  ({} of {} eligible declarations documented)",
        summary.documented, summary.eligible
    );

    if !summary.by_label.is_empty() {
        println!("  {}", "Undocumented by kind:".dimmed());

        // Sort labels by count descending, name ascending for ties
        let mut labels: Vec<(&String, &usize)> = summary.by_label.iter().collect();
        labels.sort_by(|a, b| b.1.cmp(a.1).then(a.0.cmp(b.0)));

        for (label, count) in labels {
            println!("    {:<12} {:>4}", label, count);
        }
    }
}

fn write_colored_coverage(percent: f64) {
    let text = format!("{:.1}%", percent);
    match percent {
        p if p >= 90.0 => print!("{}", text.green().bold()),
        p if p >= 75.0 => print!("{}", text.green()),
        p if p >= 50.0 => print!("{}", text.yellow()),
        p if p >= 25.0 => print!("{}", text.yellow().bold()),
        _ => print!("{}", text.red()),
    }
}
