//! Exhaustive circular dependency detection
//!
//! Every node is tried as a start point. From each start the graph is walked
//! depth first; whenever the walk reaches a node that is already on the current
//! path, the loop from that node back to itself is recorded unless a rotation
//! of it was recorded before. A node whose outgoing edges have all been
//! explored is not expanded again from the same start.
//!
//! Branches do not share path state, so the same node can be walked along
//! many different paths. The output is not a minimal cycle basis, and the
//! running time is exponential on dense graphs.

use crate::graph::DependencyGraph;
use crate::model::Cycle;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// One link of a path snapshot: a node and the snapshot it extends.
struct PathLink {
    node: usize,
    parent: Option<usize>,
}

enum Frame {
    /// Visit `node`, reached along the snapshot `path`.
    Enter { node: usize, path: Option<usize> },
    /// Every outgoing edge of `node` has been explored.
    Exit { node: usize },
}

/// Report every distinct cycle of `graph`, closed on its first element.
pub fn find_circular_dependencies(graph: &DependencyGraph) -> Vec<Cycle> {
    let paths: Vec<&PathBuf> = graph.paths().collect();
    let index: HashMap<&Path, usize> = paths
        .iter()
        .enumerate()
        .map(|(i, p)| (p.as_path(), i))
        .collect();
    let adjacency: Vec<Vec<usize>> = paths
        .iter()
        .map(|p| {
            graph
                .dependencies_of(p)
                .filter_map(|dep| index.get(dep.target.as_path()).copied())
                .collect()
        })
        .collect();

    let mut cycles: Vec<Vec<usize>> = Vec::new();
    let mut arena: Vec<PathLink> = Vec::new();
    let mut processed = vec![false; paths.len()];
    let mut stack: Vec<Frame> = Vec::new();

    for start in 0..paths.len() {
        arena.clear();
        processed.fill(false);
        stack.push(Frame::Enter { node: start, path: None });

        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Exit { node } => processed[node] = true,
                Frame::Enter { node, path } => {
                    if let Some(cycle) = close_cycle(&arena, path, node) {
                        if !cycles.iter().any(|known| is_rotation(known, &cycle)) {
                            tracing::debug!("Cycle of length {} found", cycle.len() - 1);
                            cycles.push(cycle);
                        }
                        continue;
                    }
                    if processed[node] {
                        continue;
                    }

                    arena.push(PathLink { node, parent: path });
                    let snapshot = Some(arena.len() - 1);

                    // Children are popped in edge order, each subtree finishing
                    // before the next sibling is entered.
                    stack.push(Frame::Exit { node });
                    for &next in adjacency[node].iter().rev() {
                        stack.push(Frame::Enter { node: next, path: snapshot });
                    }
                }
            }
        }
    }

    cycles
        .into_iter()
        .map(|cycle| cycle.into_iter().map(|i| paths[i].clone()).collect())
        .collect()
}

/// If `node` lies on the snapshot `path`, the closed walk from its occurrence
/// to the end of the path and back to `node`.
fn close_cycle(arena: &[PathLink], path: Option<usize>, node: usize) -> Option<Vec<usize>> {
    let mut walk = Vec::new();
    let mut cursor = path;

    while let Some(i) = cursor {
        let link = &arena[i];
        walk.push(link.node);
        if link.node == node {
            walk.reverse();
            walk.push(node);
            return Some(walk);
        }
        cursor = link.parent;
    }
    None
}

/// Two closed walks describe the same loop when one is a rotation of the other.
pub fn is_rotation<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    if a.len() != b.len() || a.is_empty() {
        return false;
    }
    let a = &a[..a.len() - 1];
    let b = &b[..b.len() - 1];
    let n = a.len();
    if n == 0 {
        return true;
    }

    (0..n).any(|shift| (0..n).all(|i| a[(i + shift) % n] == b[i]))
}
