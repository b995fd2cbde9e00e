//! Reference extractors for the supported file formats

pub mod manifest;
pub mod markup;
pub mod prose;
pub mod script;
pub mod stylesheet;

use crate::extractor::ReferenceExtractor;
use rootline_core::{FileCategory, FileDescriptor};

/// File name of the only structured-data format that carries dependencies.
pub const MANIFEST_NAME: &str = "package.json";

/// Get the appropriate extractor for a file based on its category
pub fn get_extractor(file: &FileDescriptor) -> Option<Box<dyn ReferenceExtractor>> {
    match file.category {
        FileCategory::Script => Some(Box::new(script::ScriptExtractor)),
        FileCategory::Markup => Some(Box::new(markup::MarkupExtractor)),
        FileCategory::Stylesheet => Some(Box::new(stylesheet::StylesheetExtractor)),
        FileCategory::StructuredData if file.name.ends_with(MANIFEST_NAME) => {
            Some(Box::new(manifest::ManifestExtractor))
        }
        FileCategory::Prose => Some(Box::new(prose::ProseExtractor)),
        _ => None,
    }
}

/// True for absolute http(s) URLs.
pub(crate) fn is_http_url(specifier: &str) -> bool {
    let lower = specifier.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// True for inline `data:` URLs.
pub(crate) fn is_data_url(specifier: &str) -> bool {
    specifier.trim_start().to_ascii_lowercase().starts_with("data:")
}
