//! Reference extractor trait definition

use crate::config::AnalyzerConfig;
use rootline_core::{DependencyKind, Result};
use std::path::Path;

/// How the analyzer decides whether a reference points outside the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Linkage {
    /// Apply the configured external policy.
    Detect,
    /// Always resolved against the source file.
    Internal,
    /// Never resolved; the specifier is the target.
    External,
}

/// A raw reference found in a file, before policy and resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// The path or package name as written.
    pub specifier: String,
    pub kind: DependencyKind,
    /// The full matched text, used for line attribution.
    pub snippet: String,
    pub linkage: Linkage,
}

impl Reference {
    pub fn new(specifier: impl Into<String>, kind: DependencyKind, snippet: impl Into<String>, linkage: Linkage) -> Self {
        Reference {
            specifier: specifier.into(),
            kind,
            snippet: snippet.into(),
            linkage,
        }
    }
}

pub trait ReferenceExtractor: Send + Sync {
    fn extract(&self, path: &Path, content: &str, config: &AnalyzerConfig) -> Result<Vec<Reference>>;
}
