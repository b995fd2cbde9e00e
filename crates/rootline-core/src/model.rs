//! Core data structures for the dependency graph

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Extensions that are never read for dependency purposes, besides images.
pub const BINARY_EXTENSIONS: &[&str] = &[
    "pdf", "zip", "gz", "tar", "tgz", "7z", "rar", "exe", "dll", "so", "dylib", "wasm", "woff",
    "woff2", "ttf", "otf", "eot", "mp3", "mp4", "wav", "ogg", "webm", "mov", "avi", "bin", "class",
    "o", "a",
];

/// Broad category of a file, inferred from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileCategory {
    Script,
    Markup,
    Stylesheet,
    StructuredData,
    Prose,
    Image,
    Unknown,
}

impl FileCategory {
    /// Detect category from a (dot-less, any case) file extension.
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "js" | "jsx" | "ts" | "tsx" | "mjs" | "cjs" => FileCategory::Script,
            "html" | "htm" => FileCategory::Markup,
            "css" | "scss" | "sass" | "less" => FileCategory::Stylesheet,
            "json" | "yaml" | "yml" | "toml" | "xml" => FileCategory::StructuredData,
            "md" | "markdown" | "mdx" => FileCategory::Prose,
            "png" | "jpg" | "jpeg" | "gif" | "svg" | "webp" | "ico" | "bmp" => FileCategory::Image,
            _ => FileCategory::Unknown,
        }
    }

    /// Detect category from a path.
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|e| e.to_str())
            .map_or(FileCategory::Unknown, Self::from_extension)
    }
}

/// Identity of one scanned file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FileDescriptor {
    /// Absolute path, unique key in the catalog and the graph.
    pub path: PathBuf,
    /// Path relative to the workspace root.
    pub relative_path: PathBuf,
    pub name: String,
    /// Extension without the leading dot, empty when there is none.
    pub extension: String,
    pub category: FileCategory,
    /// Size in bytes.
    pub size: u64,
    pub modified: DateTime<Utc>,
    /// Content loaded by the catalog, if any.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub content: Option<String>,
}

impl FileDescriptor {
    /// Build a descriptor for `path`, deriving name, extension and category.
    pub fn new(root: &Path, path: PathBuf, size: u64, modified: DateTime<Utc>) -> Self {
        let relative_path = path.strip_prefix(root).unwrap_or(&path).to_path_buf();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_default();
        let category = FileCategory::from_extension(&extension);

        FileDescriptor {
            path,
            relative_path,
            name,
            extension,
            category,
            size,
            modified,
            content: None,
        }
    }

    /// Copy of this descriptor with content attached.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// True for images and other known binary formats.
    pub fn is_binary(&self) -> bool {
        self.category == FileCategory::Image
            || BINARY_EXTENSIONS.contains(&self.extension.to_ascii_lowercase().as_str())
    }
}

/// How a reference was expressed in the source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DependencyKind {
    Import,
    Export,
    Reference,
    Usage,
    StyleImport,
    MarkupLink,
    Unknown,
}

impl DependencyKind {
    pub const ALL: [DependencyKind; 7] = [
        DependencyKind::Import,
        DependencyKind::Export,
        DependencyKind::Reference,
        DependencyKind::Usage,
        DependencyKind::StyleImport,
        DependencyKind::MarkupLink,
        DependencyKind::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DependencyKind::Import => "import",
            DependencyKind::Export => "export",
            DependencyKind::Reference => "reference",
            DependencyKind::Usage => "usage",
            DependencyKind::StyleImport => "style-import",
            DependencyKind::MarkupLink => "markup-link",
            DependencyKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A directed edge `source -> target` in the dependency graph.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dependency {
    pub source: PathBuf,
    /// Resolved path for internal references, the raw specifier otherwise.
    pub target: PathBuf,
    pub kind: DependencyKind,
    /// Zero-based lines where the reference text occurs. Empty when unknown.
    #[serde(default)]
    pub lines: Vec<usize>,
    pub is_external: bool,
}

/// A closed walk: the first path repeats as the last element.
pub type Cycle = Vec<PathBuf>;
