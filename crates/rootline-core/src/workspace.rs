//! Workspace root handling and project type detection

use crate::error::{AnalyzerError, Result};
use std::path::{Path, PathBuf};

/// The project root every analysis runs against.
///
/// Passed explicitly to the catalog and the resolver; nothing reads it from
/// ambient process state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    root: PathBuf,
    kind: Option<WorkspaceType>,
}

impl Workspace {
    /// Open `root`, failing when it does not exist or is not a directory.
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let root = root
            .canonicalize()
            .ok()
            .filter(|p| p.is_dir())
            .ok_or_else(|| AnalyzerError::WorkspaceUnavailable {
                path: root.to_path_buf(),
            })?;
        let kind = detect_workspace(&root);

        tracing::debug!("Opened workspace {} ({:?})", root.display(), kind);
        Ok(Workspace { root, kind })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn kind(&self) -> Option<WorkspaceType> {
        self.kind
    }

    /// `path` relative to the root, or `path` itself when it lies outside.
    pub fn relativize<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }
}

/// Detect if this is a workspace (npm, Cargo, etc.)
pub fn detect_workspace(root: &Path) -> Option<WorkspaceType> {
    if root.join("package.json").exists() {
        Some(WorkspaceType::Npm)
    } else if root.join("Cargo.toml").exists() {
        Some(WorkspaceType::Cargo)
    } else if root.join("go.mod").exists() {
        Some(WorkspaceType::GoModules)
    } else if root.join("pom.xml").exists() {
        Some(WorkspaceType::Maven)
    } else if root.join("build.gradle").exists() {
        Some(WorkspaceType::Gradle)
    } else {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkspaceType {
    Npm,
    Cargo,
    GoModules,
    Maven,
    Gradle,
}
