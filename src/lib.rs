//! Docgap - documentation coverage auditor.
//!
//! Docgap scans C# source trees and reports every type declaration, and
//! every member declaration within the configured visibility scope, that has
//! no comment directly above it. Findings are grouped per file, in document
//! order, and persisted as a timestamped JSON report.
//!
//! # Architecture
//!
//! The codebase uses tree-sitter for AST-based extraction:
//!
//! - `parser`: Language parsers producing resolved declaration trees
//! - `audit`: Extraction, eligibility, documentation check, and scanning
//! - `config`: YAML scan configuration schema
//! - `report`: Report model and output formatting (pretty, JSON, SARIF)
//! - `summary`: Run-level coverage accounting
//!
//! # Adding a New Language
//!
//! Implement `SourceParser` in a new module under `src/parser/` and register
//! it in `parser/mod.rs`; the audit pipeline is language-agnostic above the
//! resolved tree.

pub mod audit;
pub mod cli;
pub mod config;
pub mod parser;
pub mod report;
pub mod summary;

pub use audit::{extract, is_documented, is_eligible, render, Declaration, DeclarationKind, Scanner};
pub use config::{MemberScope, ScanConfig};
pub use parser::{get_parser, register_parsers, SourceParser, SyntaxTree};
pub use report::{Report, ReportBuilder, ReportEntry};
pub use summary::CoverageSummary;

/// Initialize all subsystems.
///
/// Call this once at startup.
pub fn init() {
    register_parsers();
}
