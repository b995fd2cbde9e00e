//! Whole-project dependency graph keyed by absolute file path

use crate::model::*;
use petgraph::algo::is_cyclic_directed;
use petgraph::dot::Dot;
use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::{Path, PathBuf};

/// Nodes are catalog entries, edges are resolved dependencies between them.
///
/// At most one edge is kept per ordered pair of files; inserting a second one
/// replaces the first.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct DependencyGraph {
    nodes: BTreeMap<PathBuf, FileDescriptor>,
    edges: BTreeMap<PathBuf, BTreeMap<PathBuf, Dependency>>,
}

impl std::fmt::Debug for DependencyGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependencyGraph")
            .field("node_count", &self.node_count())
            .field("edge_count", &self.edge_count())
            .finish()
    }
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Graph with one node and an empty edge map per descriptor.
    pub fn with_nodes(files: impl IntoIterator<Item = FileDescriptor>) -> Self {
        let mut graph = Self::new();
        for file in files {
            graph.add_node(file);
        }
        graph
    }

    /// Add a node, replacing any descriptor with the same path.
    pub fn add_node(&mut self, file: FileDescriptor) {
        self.edges.entry(file.path.clone()).or_default();
        self.nodes.insert(file.path.clone(), file);
    }

    /// Insert or overwrite the edge `source -> target`.
    ///
    /// Returns `false` and leaves the graph untouched when either endpoint is
    /// not a node.
    pub fn insert_edge(&mut self, dependency: Dependency) -> bool {
        if !self.nodes.contains_key(&dependency.source) || !self.nodes.contains_key(&dependency.target) {
            return false;
        }
        self.edges
            .entry(dependency.source.clone())
            .or_default()
            .insert(dependency.target.clone(), dependency);
        true
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.nodes.contains_key(path)
    }

    pub fn node(&self, path: &Path) -> Option<&FileDescriptor> {
        self.nodes.get(path)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &FileDescriptor> {
        self.nodes.values()
    }

    pub fn paths(&self) -> impl Iterator<Item = &PathBuf> {
        self.nodes.keys()
    }

    pub fn edge(&self, source: &Path, target: &Path) -> Option<&Dependency> {
        self.edges.get(source).and_then(|targets| targets.get(target))
    }

    /// Outgoing edges of a node, ordered by target path.
    pub fn dependencies_of(&self, source: &Path) -> impl Iterator<Item = &Dependency> {
        self.edges.get(source).into_iter().flat_map(|targets| targets.values())
    }

    /// Incoming edges of a node.
    pub fn dependents_of<'a>(&'a self, target: &'a Path) -> impl Iterator<Item = &'a Dependency> + 'a {
        self.edges
            .values()
            .filter_map(move |targets| targets.get(target))
    }

    pub fn all_edges(&self) -> impl Iterator<Item = &Dependency> {
        self.edges.values().flat_map(|targets| targets.values())
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(BTreeMap::len).sum()
    }

    /// Induced subgraph over `paths`; unknown paths are ignored.
    pub fn subgraph<'a>(&self, paths: impl IntoIterator<Item = &'a Path>) -> DependencyGraph {
        let keep: BTreeSet<&Path> = paths.into_iter().filter(|p| self.contains(p)).collect();
        let mut sub = DependencyGraph::with_nodes(keep.iter().filter_map(|p| self.node(p)).cloned());

        for source in &keep {
            for dependency in self.dependencies_of(source) {
                if keep.contains(dependency.target.as_path()) {
                    sub.insert_edge(dependency.clone());
                }
            }
        }
        sub
    }

    /// petgraph view for renderers, node weights are workspace-relative paths.
    pub fn to_digraph(&self) -> StableDiGraph<String, DependencyKind> {
        let mut digraph = StableDiGraph::new();
        let mut indices: HashMap<&Path, NodeIndex> = HashMap::new();

        for node in self.nodes.values() {
            let idx = digraph.add_node(node.relative_path.display().to_string());
            indices.insert(node.path.as_path(), idx);
        }
        for edge in self.all_edges() {
            if let (Some(&a), Some(&b)) = (
                indices.get(edge.source.as_path()),
                indices.get(edge.target.as_path()),
            ) {
                digraph.add_edge(a, b, edge.kind);
            }
        }
        digraph
    }

    /// Graphviz rendering of the graph.
    pub fn to_dot(&self) -> String {
        let digraph = self.to_digraph();
        format!("{}", Dot::new(&digraph))
    }

    /// Cheap yes/no cycle check, independent of the exhaustive detector.
    pub fn has_cycles(&self) -> bool {
        is_cyclic_directed(&self.to_digraph())
    }
}
