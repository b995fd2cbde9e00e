//! Resolution of raw reference strings to file paths

use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

/// Extensions tried, in order, for references written without one.
pub const CANDIDATE_EXTENSIONS: &[&str] = &[
    ".js", ".jsx", ".ts", ".tsx", ".json", ".css", ".scss", ".html", ".md",
];

/// Maps `(source file, reference)` to a canonical path.
///
/// Resolution fails soft: when no candidate exists on disk the extension-less
/// path comes back unchanged and simply never matches a graph node.
#[derive(Debug, Clone, Default)]
pub struct PathResolver {
    root: Option<PathBuf>,
}

impl PathResolver {
    pub fn new(root: Option<PathBuf>) -> Self {
        PathResolver { root }
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    pub fn resolve(&self, source: &Path, reference: &str) -> PathBuf {
        if reference.starts_with("http://") || reference.starts_with("https://") {
            return PathBuf::from(reference);
        }

        let joined = match reference.strip_prefix('/') {
            Some(rooted) => match &self.root {
                Some(root) => root.join(rooted),
                None => return PathBuf::from(reference),
            },
            None => source.parent().unwrap_or(Path::new("")).join(reference),
        };
        let resolved = normalize(&joined);

        if resolved.extension().is_some() {
            return resolved;
        }

        with_existing_extension(&resolved)
            .or_else(|| with_existing_extension(&resolved.join("index")))
            .unwrap_or(resolved)
    }
}

fn with_existing_extension(base: &Path) -> Option<PathBuf> {
    CANDIDATE_EXTENSIONS.iter().find_map(|ext| {
        let mut candidate = OsString::from(base.as_os_str());
        candidate.push(ext);
        let candidate = PathBuf::from(candidate);
        candidate.exists().then_some(candidate)
    })
}

/// Fold `.` and `..` components without touching the filesystem.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if out.file_name().is_some() {
                    out.pop();
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
