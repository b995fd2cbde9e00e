//! Rootline core: dependency graph data model, cycle detection and cache

pub mod cache;
pub mod cycles;
pub mod error;
pub mod graph;
pub mod model;
pub mod workspace;

#[cfg(test)]
pub mod tests;

#[cfg(test)]
pub mod test_utils;

pub use cache::DependencyCache;
pub use cycles::{find_circular_dependencies, is_rotation};
pub use error::{AnalyzerError, Result};
pub use graph::DependencyGraph;
pub use model::{BINARY_EXTENSIONS, Cycle, Dependency, DependencyKind, FileCategory, FileDescriptor};
pub use workspace::{Workspace, WorkspaceType, detect_workspace};
