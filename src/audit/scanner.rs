//! Per-file audit and parallel scan orchestration.

use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};

use crate::audit::docs::is_documented;
use crate::audit::eligibility::is_eligible;
use crate::audit::extract::extract;
use crate::audit::signature::render;
use crate::config::{MemberScope, ScanConfig};
use crate::parser;
use crate::report::{Report, ReportBuilder, ReportEntry};
use crate::summary::CoverageSummary;

/// Findings and counters for a single audited file.
#[derive(Debug)]
pub struct FileAudit {
    /// File key, spelled exactly as the path was supplied.
    pub path: String,
    /// Undocumented eligible declarations, in document order.
    pub entries: Vec<ReportEntry>,
    /// Declarations that passed the eligibility filter.
    pub eligible: usize,
    /// Eligible declarations with a leading comment.
    pub documented: usize,
    /// True when the parse tree contains error nodes.
    pub degraded: bool,
}

/// Aggregated result of one scan run.
#[derive(Debug)]
pub struct ScanOutcome {
    pub report: Report,
    pub summary: CoverageSummary,
}

/// Audits source files against the configured member scope.
pub struct Scanner {
    scope: MemberScope,
}

impl Scanner {
    pub fn new(config: &ScanConfig) -> Self {
        Self {
            scope: config.scope,
        }
    }

    /// Parse one file and collect its undocumented eligible declarations.
    pub fn audit_file(&self, path: &Path) -> anyhow::Result<FileAudit> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let parser = parser::get_parser(ext)
            .ok_or_else(|| anyhow!("no parser registered for {}", path.display()))?;

        let source = fs::read(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let tree = parser
            .parse(path, &source)
            .with_context(|| format!("failed to parse {}", path.display()))?;

        let mut audit = FileAudit {
            path: path.display().to_string(),
            entries: Vec::new(),
            eligible: 0,
            documented: 0,
            degraded: tree.has_errors,
        };

        for decl in extract(&tree) {
            if !is_eligible(&decl, self.scope) {
                continue;
            }
            audit.eligible += 1;
            if is_documented(&decl) {
                audit.documented += 1;
            } else {
                audit.entries.push(ReportEntry {
                    line: decl.line,
                    kind: decl.kind.label().to_string(),
                    member: render(&decl),
                });
            }
        }

        Ok(audit)
    }

    /// Audit files in parallel and merge the results in input order.
    ///
    /// A file that cannot be read or parsed is skipped with a warning on
    /// stderr; it never aborts the run.
    pub fn run(&self, files: &[PathBuf]) -> ScanOutcome {
        let audits: Vec<anyhow::Result<FileAudit>> =
            files.par_iter().map(|path| self.audit_file(path)).collect();

        let mut builder = ReportBuilder::new();
        let mut summary = CoverageSummary::default();

        for audit in audits {
            match audit {
                Ok(audit) => {
                    summary.files_scanned += 1;
                    summary.eligible += audit.eligible;
                    summary.documented += audit.documented;
                    if audit.degraded {
                        eprintln!(
                            "Warning: syntax errors in {}; results may be incomplete",
                            audit.path
                        );
                    }
                    for entry in audit.entries {
                        summary.undocumented += 1;
                        *summary.by_label.entry(entry.kind.clone()).or_insert(0) += 1;
                        builder.record(&audit.path, entry);
                    }
                }
                Err(e) => {
                    summary.files_skipped += 1;
                    eprintln!("Warning: failed to scan file: {}", e);
                }
            }
        }

        ScanOutcome {
            report: builder.finalize(),
            summary,
        }
    }
}
