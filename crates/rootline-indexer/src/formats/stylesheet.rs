//! CSS/SCSS reference extraction

use super::{is_data_url, is_http_url};
use crate::config::AnalyzerConfig;
use crate::extractor::{Linkage, Reference, ReferenceExtractor};
use regex::Regex;
use rootline_core::{DependencyKind, Result};
use std::ops::Range;
use std::path::Path;
use std::sync::LazyLock;

/// `@import 'x.css'` and `@import url("x.css")`
static IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"@import\s+(?:url\(\s*)?['"]([^'"]+)['"]\s*\)?"#).expect("css import pattern")
});

/// `url(x.png)`, quoted or not
static URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"url\(\s*['"]?([^'")\s]+)['"]?\s*\)"#).expect("css url pattern")
});

pub struct StylesheetExtractor;

impl StylesheetExtractor {
    fn keep(target: &str, config: &AnalyzerConfig) -> bool {
        if is_data_url(target) || target.starts_with('#') {
            return false;
        }
        !is_http_url(target) || config.is_whitelisted_url(target)
    }
}

impl ReferenceExtractor for StylesheetExtractor {
    fn extract(&self, _path: &Path, content: &str, config: &AnalyzerConfig) -> Result<Vec<Reference>> {
        let mut references = Vec::new();
        let mut import_spans: Vec<Range<usize>> = Vec::new();

        for caps in IMPORT.captures_iter(content) {
            let whole = caps.get(0).map_or(0..0, |m| m.range());
            import_spans.push(whole);
            if Self::keep(&caps[1], config) {
                references.push(Reference::new(&caps[1], DependencyKind::StyleImport, &caps[0], Linkage::Detect));
            }
        }

        for caps in URL.captures_iter(content) {
            let start = caps.get(0).map_or(0, |m| m.start());
            if import_spans.iter().any(|span| span.contains(&start)) {
                continue;
            }
            if Self::keep(&caps[1], config) {
                references.push(Reference::new(&caps[1], DependencyKind::StyleImport, &caps[0], Linkage::Detect));
            }
        }

        Ok(references)
    }
}
