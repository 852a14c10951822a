//! Command-line interface for docgap.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::audit::Scanner;
use crate::config::{self, MemberScope, ScanConfig};
use crate::parser;
use crate::report;

/// Exit codes.
pub const EXIT_CLEAN: i32 = 0;
pub const EXIT_GAPS: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Default config file names to search for.
const DEFAULT_CONFIG_NAMES: &[&str] = &["docgap.yaml", ".docgap.yaml"];

/// Starter configuration written by `docgap init`.
const STARTER_CONFIG: &str = include_str!("templates/docgap.yaml");

/// Documentation coverage auditor - reports undocumented types and members.
///
/// Docgap walks C# source trees and flags every type declaration, and every
/// member declaration within the configured visibility scope, that has no
/// comment directly above it. Findings are grouped per file and written as a
/// timestamped JSON report.
#[derive(Parser)]
#[command(name = "docgap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan source files for undocumented declarations
    #[command(visible_alias = "audit")]
    Scan(ScanArgs),
    /// Create a starter docgap configuration file
    Init(InitArgs),
}

/// Arguments for the scan command.
#[derive(Parser)]
pub struct ScanArgs {
    /// Paths to scan (files or directories; default: config include list, else ".")
    pub paths: Vec<PathBuf>,

    /// Path to config YAML file (default: auto-discover)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Folder name to exclude, case-insensitive (repeatable or comma separated)
    #[arg(short, long = "exclude", value_name = "FOLDER", value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Glob pattern for paths to exclude (repeatable or comma separated)
    #[arg(long = "exclude-path", value_name = "GLOB", value_delimiter = ',')]
    pub exclude_path: Vec<String>,

    /// Member visibility scope: all, public, or private
    #[arg(short, long)]
    pub scope: Option<String>,

    /// Output format: pretty, json, or sarif
    #[arg(short, long, default_value = "pretty")]
    pub format: String,

    /// Report file path (default: docgap_<timestamp>.json)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Skip writing the report file
    #[arg(long)]
    pub no_save: bool,
}

/// Arguments for the init command.
#[derive(Parser)]
pub struct InitArgs {
    /// Output file path
    #[arg(short, long, default_value = "docgap.yaml")]
    pub output: PathBuf,
}

/// Discover a config file in the current directory.
fn discover_config() -> Option<PathBuf> {
    DEFAULT_CONFIG_NAMES
        .iter()
        .map(PathBuf::from)
        .find(|path| path.exists())
}

/// Collect scannable files under the given roots.
///
/// Directories are walked with hidden and excluded folders pruned and only
/// files with a registered parser extension kept; entries are visited in
/// name order so reports are reproducible. A root that is itself a file is
/// taken as given. Unreadable entries are skipped with a warning.
fn collect_files(roots: &[PathBuf], config: &ScanConfig) -> Vec<PathBuf> {
    let supported = parser::supported_extensions();

    let mut files = Vec::new();

    for root in roots {
        if root.is_file() {
            files.push(root.clone());
            continue;
        }

        for entry in WalkDir::new(root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| {
                if !e.file_type().is_dir() {
                    return true;
                }
                let name = e.file_name().to_string_lossy();
                // Skip hidden directories, but never a root the user gave us
                if e.depth() > 0 && name.starts_with('.') {
                    return false;
                }
                !config.is_folder_excluded(&name)
            })
        {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    eprintln!("Warning: {}", e);
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
            if !supported.contains(&ext) {
                continue;
            }
            if config.is_path_excluded(path) {
                continue;
            }
            files.push(path.to_path_buf());
        }
    }

    files
}

/// Run the scan command.
pub fn run_scan(args: &ScanArgs) -> anyhow::Result<i32> {
    // Initialize tree-sitter parsers (no-op if feature disabled)
    parser::register_parsers();

    // Validate format
    if args.format != "pretty" && args.format != "json" && args.format != "sarif" {
        eprintln!(
            "Error: invalid format {:?}, must be 'pretty', 'json', or 'sarif'",
            args.format
        );
        return Ok(EXIT_ERROR);
    }

    // Load config: explicit path, discovered file, or built-in defaults
    let config_path = match &args.config {
        Some(path) => Some(path.clone()),
        None => discover_config(),
    };
    let mut config = match &config_path {
        Some(path) => match ScanConfig::parse_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error parsing config: {}", e);
                return Ok(EXIT_ERROR);
            }
        },
        None => ScanConfig::default(),
    };

    // Command-line arguments override the file: paths and scope replace,
    // exclusion lists append
    if !args.paths.is_empty() {
        config.include = args.paths.clone();
    }
    if let Some(scope) = &args.scope {
        config.scope = MemberScope::parse(scope);
    }
    config.exclude_folders.extend(args.exclude.iter().cloned());
    config.exclude_paths.extend(args.exclude_path.iter().cloned());

    // Validate config
    if let Err(e) = config::validate(&config) {
        eprintln!("Error: invalid config: {}", e);
        return Ok(EXIT_ERROR);
    }

    // Collect files to scan
    let roots = if config.include.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        config.include.clone()
    };
    let files = collect_files(&roots, &config);

    if files.is_empty() {
        eprintln!("Warning: no files to scan");
        return Ok(EXIT_CLEAN);
    }

    // Run the audit
    let scanner = Scanner::new(&config);
    let outcome = scanner.run(&files);

    // Output results
    match args.format.as_str() {
        "json" => report::write_json(&outcome.report)?,
        "sarif" => report::write_sarif(&outcome.report)?,
        _ => report::write_pretty(&outcome.report, &outcome.summary, config.scope),
    }

    // Persist the report
    if !args.no_save {
        let path = args
            .output
            .clone()
            .unwrap_or_else(report::default_report_path);
        report::save_report(&outcome.report, &path)?;
        // Keep stdout machine-readable for json and sarif
        if args.format == "pretty" {
            println!("Report saved to: {}", path.display());
        } else {
            eprintln!("Report saved to: {}", path.display());
        }
    }

    // Return appropriate exit code
    if outcome.report.is_empty() {
        Ok(EXIT_CLEAN)
    } else {
        Ok(EXIT_GAPS)
    }
}

/// Run the init command.
pub fn run_init(args: &InitArgs) -> anyhow::Result<i32> {
    // Check if output already exists
    if args.output.exists() {
        eprintln!("Error: file already exists: {}", args.output.display());
        eprintln!("Remove it or use --output to specify a different path");
        return Ok(EXIT_ERROR);
    }

    // Create output directory if needed
    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() && parent != Path::new(".") {
            if let Err(e) = std::fs::create_dir_all(parent) {
                eprintln!("Error: failed to create directory: {}", e);
                return Ok(EXIT_ERROR);
            }
        }
    }

    // Write config file
    if let Err(e) = std::fs::write(&args.output, STARTER_CONFIG) {
        eprintln!("Error: failed to write config: {}", e);
        return Ok(EXIT_ERROR);
    }

    // Success message
    println!("Created {}", args.output.display());
    println!();
    println!("Next steps:");
    println!(
        "  1. Edit {} to set include paths and scope",
        args.output.display()
    );
    println!(
        "  2. Run: docgap scan --config {}",
        args.output.display()
    );

    Ok(EXIT_CLEAN)
}
