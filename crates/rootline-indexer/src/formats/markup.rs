//! HTML reference extraction

use super::{is_data_url, is_http_url};
use crate::config::AnalyzerConfig;
use crate::extractor::{Linkage, Reference, ReferenceExtractor};
use regex::Regex;
use rootline_core::{DependencyKind, Result};
use std::path::Path;
use std::sync::LazyLock;

static SCRIPT_SRC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<script\b[^>]*?\bsrc\s*=\s*["']([^"']+)["']"#).expect("script src pattern")
});

static LINK_HREF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<link\b[^>]*?\bhref\s*=\s*["']([^"']+)["']"#).expect("link href pattern")
});

static IMG_SRC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<img\b[^>]*?\bsrc\s*=\s*["']([^"']+)["']"#).expect("img src pattern")
});

pub struct MarkupExtractor;

impl ReferenceExtractor for MarkupExtractor {
    fn extract(&self, path: &Path, content: &str, config: &AnalyzerConfig) -> Result<Vec<Reference>> {
        let mut references = Vec::new();

        for re in [&*SCRIPT_SRC, &*LINK_HREF, &*IMG_SRC] {
            for caps in re.captures_iter(content) {
                let target = caps[1].trim();
                if is_data_url(target) {
                    continue;
                }
                if is_http_url(target) && !config.is_whitelisted_url(target) {
                    tracing::trace!("Skipping external URL {} in {}", target, path.display());
                    continue;
                }
                references.push(Reference::new(
                    target,
                    DependencyKind::MarkupLink,
                    &caps[0],
                    Linkage::Detect,
                ));
            }
        }

        Ok(references)
    }
}
