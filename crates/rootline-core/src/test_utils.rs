//! Test utilities for Rootline core

use crate::graph::DependencyGraph;
use crate::model::{Dependency, DependencyKind, FileDescriptor};
use chrono::{TimeZone, Utc};
use std::path::{Path, PathBuf};

pub const ROOT: &str = "/project";

/// Absolute path of `name` under the fake project root.
pub fn p(name: &str) -> PathBuf {
    Path::new(ROOT).join(name)
}

/// Descriptor for a file that only exists in memory.
pub fn descriptor(name: &str) -> FileDescriptor {
    let modified = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    FileDescriptor::new(Path::new(ROOT), p(name), 128, modified)
}

pub fn import(source: &str, target: &str) -> Dependency {
    Dependency {
        source: p(source),
        target: p(target),
        kind: DependencyKind::Import,
        lines: vec![0],
        is_external: false,
    }
}

/// Graph over `nodes` with an import edge for every `(source, target)` pair.
pub fn graph_from_edges(nodes: &[&str], edges: &[(&str, &str)]) -> DependencyGraph {
    let mut graph = DependencyGraph::with_nodes(nodes.iter().map(|n| descriptor(n)));
    for (source, target) in edges {
        assert!(graph.insert_edge(import(source, target)), "edge {source} -> {target}");
    }
    graph
}
