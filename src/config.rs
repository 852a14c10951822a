//! Scan configuration for docgap.
//!
//! A configuration fixes what a run scans and which members count: include
//! paths, folder and glob exclusions, and the member visibility scope.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Member visibility scope applied to member (not type) declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberScope {
    All,
    Public,
    Private,
}

impl MemberScope {
    /// Parse a scope name. Unrecognized values degrade to `All`.
    pub fn parse(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "public" => MemberScope::Public,
            "private" => MemberScope::Private,
            // "all" and anything unrecognized scan everything
            _ => MemberScope::All,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MemberScope::All => "all",
            MemberScope::Public => "public",
            MemberScope::Private => "private",
        }
    }
}

impl Default for MemberScope {
    fn default() -> Self {
        MemberScope::All
    }
}

impl std::fmt::Display for MemberScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl<'de> Deserialize<'de> for MemberScope {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(MemberScope::parse(&raw))
    }
}

impl Serialize for MemberScope {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Top-level scan configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ScanConfig {
    /// Paths to scan. Files are taken as-is, directories recursively.
    #[serde(default)]
    pub include: Vec<PathBuf>,
    /// Folder basenames to skip while walking, matched case-insensitively
    /// (e.g., "obj", "bin").
    #[serde(default)]
    pub exclude_folders: Vec<String>,
    /// Glob patterns for paths to exclude from the scan (e.g., "**/*.generated.cs")
    #[serde(default)]
    pub exclude_paths: Vec<String>,
    /// Member visibility scope: all, public, or private.
    #[serde(default)]
    pub scope: MemberScope,
}

impl ScanConfig {
    /// Parse a configuration from a YAML file.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: ScanConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Check if a directory basename is excluded from the walk.
    pub fn is_folder_excluded(&self, name: &str) -> bool {
        self.exclude_folders
            .iter()
            .any(|folder| folder.eq_ignore_ascii_case(name))
    }

    /// Check if a path should be excluded based on exclude_paths patterns.
    /// Uses globset for matching, which supports `**` for recursive directory matching.
    pub fn is_path_excluded(&self, path: &Path) -> bool {
        if self.exclude_paths.is_empty() {
            return false;
        }

        let path_str = path.to_string_lossy();

        for pattern in &self.exclude_paths {
            if let Ok(glob) = globset::Glob::new(pattern) {
                let matcher = glob.compile_matcher();
                if matcher.is_match(&*path_str) {
                    return true;
                }
            }
        }
        false
    }
}

/// Validate a configuration for correctness.
pub fn validate(config: &ScanConfig) -> anyhow::Result<()> {
    // Validate exclude_paths glob patterns compile
    for pattern in &config.exclude_paths {
        globset::Glob::new(pattern)
            .map_err(|e| anyhow::anyhow!("invalid exclude_paths pattern {:?}: {}", pattern, e))?;
    }

    Ok(())
}
