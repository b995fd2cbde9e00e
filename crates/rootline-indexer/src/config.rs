//! Analyzer configuration, read from `rootline.toml`

use globset::{Glob, GlobSet, GlobSetBuilder};
use rootline_core::{AnalyzerError, Result};
use serde::Deserialize;
use std::path::Path;

/// File name looked up in the workspace root.
pub const CONFIG_FILE: &str = "rootline.toml";

/// Files larger than this are never read for dependencies (1 MiB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzerConfig {
    /// Byte size above which a file is treated as unreadable.
    pub max_file_size: u64,
    /// Substrings marking a reference as external.
    pub external_markers: Vec<String>,
    /// http(s) URL prefixes that markup and stylesheet extraction still report.
    pub external_url_whitelist: Vec<String>,
    /// Directory names skipped by the catalog.
    pub exclude_dirs: Vec<String>,
    /// Glob patterns for file names skipped by the catalog.
    pub exclude_files: Vec<String>,
    /// Whether the catalog loads file content while scanning.
    pub load_content: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            external_markers: vec![
                "node_modules/".to_string(),
                "https://cdn.".to_string(),
                "https://unpkg.com/".to_string(),
                "https://cdn.jsdelivr.net/".to_string(),
            ],
            external_url_whitelist: Vec::new(),
            exclude_dirs: [
                "node_modules", ".git", "dist", "build", "out", "coverage", ".vscode", "target",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            exclude_files: ["*.lock", "*.log", ".DS_Store", "*.min.js", "*.map"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            load_content: true,
        }
    }
}

impl AnalyzerConfig {
    /// Load `rootline.toml` from the workspace root, defaults when absent.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        if !path.exists() {
            tracing::debug!("No {} in {}, using defaults", CONFIG_FILE, root.display());
            return Ok(Self::default());
        }
        Self::from_file(&path)
    }

    /// Parse an explicit configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| AnalyzerError::UnreadableFile {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| AnalyzerError::InvalidConfig {
            path: path.to_path_buf(),
            source,
        })
    }

    /// True when the specifier names something outside the project.
    pub fn is_external(&self, specifier: &str) -> bool {
        self.external_markers.iter().any(|m| specifier.contains(m.as_str()))
            || !(specifier.starts_with('.') || specifier.starts_with('/'))
    }

    /// True when an http(s) URL may still be reported by markup/stylesheet extraction.
    pub fn is_whitelisted_url(&self, url: &str) -> bool {
        self.external_url_whitelist.iter().any(|prefix| url.starts_with(prefix.as_str()))
    }

    /// Compile `exclude_files` into a matcher.
    pub fn exclude_matcher(&self) -> Result<GlobSet> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &self.exclude_files {
            let glob = Glob::new(pattern).map_err(|source| AnalyzerError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;
            builder.add(glob);
        }
        builder.build().map_err(|source| AnalyzerError::InvalidPattern {
            pattern: self.exclude_files.join(","),
            source,
        })
    }
}
