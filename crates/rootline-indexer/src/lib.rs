//! File catalog, reference extraction and dependency analysis

pub mod analyzer;
pub mod catalog;
pub mod config;
pub mod extractor;
pub mod formats;
pub mod resolver;
pub mod summary;


#[cfg(test)]
pub mod test_utils;

pub use analyzer::DependencyAnalyzer;
pub use catalog::{ScanProgress, scan_catalog, scan_catalog_with_progress};
pub use config::AnalyzerConfig;
pub use extractor::{Linkage, Reference, ReferenceExtractor};
pub use resolver::PathResolver;
pub use summary::{render_summary, summarize};
