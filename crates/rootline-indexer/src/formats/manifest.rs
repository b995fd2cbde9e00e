//! package.json dependency extraction

use crate::config::AnalyzerConfig;
use crate::extractor::{Linkage, Reference, ReferenceExtractor};
use rootline_core::{AnalyzerError, DependencyKind, Result};
use serde_json::Value;
use std::path::Path;

/// Manifest sections listing packages, in reporting order.
pub const DEPENDENCY_SECTIONS: &[&str] = &[
    "dependencies",
    "devDependencies",
    "peerDependencies",
    "optionalDependencies",
];

pub struct ManifestExtractor;

impl ReferenceExtractor for ManifestExtractor {
    fn extract(&self, path: &Path, content: &str, _config: &AnalyzerConfig) -> Result<Vec<Reference>> {
        let manifest: Value = serde_json::from_str(content).map_err(|source| AnalyzerError::MalformedManifest {
            path: path.to_path_buf(),
            source,
        })?;

        let references = DEPENDENCY_SECTIONS
            .iter()
            .filter_map(|section| manifest.get(section).and_then(Value::as_object))
            .flat_map(|packages| packages.keys())
            .map(|name| {
                Reference::new(
                    format!("node_modules/{name}"),
                    DependencyKind::Import,
                    format!("\"{name}\""),
                    Linkage::External,
                )
            })
            .collect();

        Ok(references)
    }
}
