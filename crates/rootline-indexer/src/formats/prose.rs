//! Markdown link and image extraction

use super::is_http_url;
use crate::config::AnalyzerConfig;
use crate::extractor::{Linkage, Reference, ReferenceExtractor};
use regex::{Captures, Regex};
use rootline_core::{DependencyKind, Result};
use std::path::Path;
use std::sync::LazyLock;

static IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").expect("markdown image pattern"));

static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]*)\]\(([^)]+)\)").expect("markdown link pattern"));

pub struct ProseExtractor;

impl ProseExtractor {
    /// Link destination without an optional `"title"`, or `None` when skipped.
    fn destination<'a>(caps: &Captures<'a>) -> Option<&'a str> {
        let target = caps.get(2)?.as_str().split_whitespace().next()?;
        if is_http_url(target) || target.starts_with('#') || target.contains('@') {
            return None;
        }
        Some(target)
    }
}

impl ReferenceExtractor for ProseExtractor {
    fn extract(&self, _path: &Path, content: &str, _config: &AnalyzerConfig) -> Result<Vec<Reference>> {
        let mut references = Vec::new();

        for caps in IMAGE.captures_iter(content) {
            if let Some(target) = Self::destination(&caps) {
                references.push(Reference::new(target, DependencyKind::Reference, &caps[0], Linkage::Internal));
            }
        }

        for caps in LINK.captures_iter(content) {
            let start = caps.get(0).map_or(0, |m| m.start());
            // the bracket part of an image was handled above
            if content[..start].ends_with('!') {
                continue;
            }
            if let Some(target) = Self::destination(&caps) {
                references.push(Reference::new(target, DependencyKind::Reference, &caps[0], Linkage::Internal));
            }
        }

        Ok(references)
    }
}
