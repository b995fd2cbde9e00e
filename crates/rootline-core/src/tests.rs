//! Unit tests for rootline-core module

use crate::test_utils::{ROOT, descriptor, graph_from_edges, import, p};
use crate::*;
use std::path::{Path, PathBuf};

#[test]
fn test_category_detection() {
    let cases = vec![
        ("app.ts", FileCategory::Script),
        ("app.MJS", FileCategory::Script),
        ("index.html", FileCategory::Markup),
        ("site.scss", FileCategory::Stylesheet),
        ("package.json", FileCategory::StructuredData),
        ("README.md", FileCategory::Prose),
        ("logo.svg", FileCategory::Image),
        ("Makefile", FileCategory::Unknown),
        ("main.rs", FileCategory::Unknown),
    ];

    for (name, expected) in cases {
        assert_eq!(FileCategory::from_path(Path::new(name)), expected, "category of {name}");
    }
}

#[test]
fn test_descriptor_fields() {
    let file = descriptor("src/components/button.tsx");

    assert_eq!(file.path, PathBuf::from("/project/src/components/button.tsx"));
    assert_eq!(file.relative_path, PathBuf::from("src/components/button.tsx"));
    assert_eq!(file.name, "button.tsx");
    assert_eq!(file.extension, "tsx");
    assert_eq!(file.category, FileCategory::Script);
    assert!(file.content.is_none());
    assert!(!file.is_binary());

    assert!(descriptor("fonts/inter.woff2").is_binary());
    assert!(descriptor("img/logo.PNG").is_binary());
}

#[test]
fn test_kind_rendering() {
    assert_eq!(DependencyKind::StyleImport.to_string(), "style-import");
    assert_eq!(DependencyKind::MarkupLink.as_str(), "markup-link");
    assert_eq!(
        serde_json::to_string(&DependencyKind::StyleImport).unwrap(),
        "\"style-import\""
    );
}

#[test]
fn test_edges_require_known_nodes() {
    let mut graph = DependencyGraph::with_nodes([descriptor("a.ts"), descriptor("b.ts")]);

    assert!(graph.insert_edge(import("a.ts", "b.ts")));
    assert!(!graph.insert_edge(import("a.ts", "missing.ts")));
    assert!(!graph.insert_edge(import("missing.ts", "a.ts")));

    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 1);
    for edge in graph.all_edges() {
        assert!(graph.contains(&edge.source));
        assert!(graph.contains(&edge.target));
    }
}

#[test]
fn test_last_edge_wins() {
    let mut graph = DependencyGraph::with_nodes([descriptor("a.ts"), descriptor("b.ts")]);

    graph.insert_edge(import("a.ts", "b.ts"));
    let mut second = import("a.ts", "b.ts");
    second.kind = DependencyKind::Reference;
    second.lines = vec![7];
    graph.insert_edge(second.clone());

    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.edge(&p("a.ts"), &p("b.ts")), Some(&second));
}

#[test]
fn test_dependents_and_subgraph() {
    let graph = graph_from_edges(
        &["a.ts", "b.ts", "c.ts", "d.ts"],
        &[("a.ts", "c.ts"), ("b.ts", "c.ts"), ("c.ts", "d.ts"), ("d.ts", "a.ts")],
    );

    let mut dependents: Vec<_> = graph.dependents_of(&p("c.ts")).map(|d| d.source.clone()).collect();
    dependents.sort();
    assert_eq!(dependents, vec![p("a.ts"), p("b.ts")]);

    let sub = graph.subgraph([p("a.ts").as_path(), p("c.ts").as_path(), Path::new("/elsewhere.ts")]);
    assert_eq!(sub.node_count(), 2);
    assert_eq!(sub.edge_count(), 1);
    assert!(sub.edge(&p("a.ts"), &p("c.ts")).is_some());
}

#[test]
fn test_dot_and_cycle_check() {
    let acyclic = graph_from_edges(&["a.ts", "b.ts"], &[("a.ts", "b.ts")]);
    assert!(!acyclic.has_cycles());

    let dot = acyclic.to_dot();
    assert!(dot.starts_with("digraph {"));
    assert!(dot.contains("a.ts"));
    assert!(dot.contains("label = \"import\""));

    let cyclic = graph_from_edges(&["a.ts", "b.ts"], &[("a.ts", "b.ts"), ("b.ts", "a.ts")]);
    assert!(cyclic.has_cycles());
}

#[test]
fn test_graph_json_shape() {
    let graph = graph_from_edges(&["a.ts", "b.ts"], &[("a.ts", "b.ts")]);
    let json = serde_json::to_value(&graph).unwrap();

    assert!(json["nodes"][format!("{ROOT}/a.ts")].is_object());
    assert_eq!(json["edges"][format!("{ROOT}/a.ts")][format!("{ROOT}/b.ts")]["kind"], "import");
}

#[test]
fn test_spec_triangle_cycle() {
    let graph = graph_from_edges(
        &["a.ts", "b.ts", "c.ts"],
        &[("a.ts", "b.ts"), ("b.ts", "c.ts"), ("c.ts", "a.ts")],
    );
    let cycles = find_circular_dependencies(&graph);

    assert_eq!(cycles.len(), 1);
    let cycle = &cycles[0];
    assert_eq!(cycle.first(), cycle.last());
    for name in ["a.ts", "b.ts", "c.ts"] {
        assert!(cycle.contains(&p(name)));
    }
}

#[test]
fn test_no_rotational_duplicates() {
    // two triangles sharing node c, plus a self loop
    let graph = graph_from_edges(
        &["a.ts", "b.ts", "c.ts", "d.ts", "e.ts"],
        &[
            ("a.ts", "b.ts"),
            ("b.ts", "c.ts"),
            ("c.ts", "a.ts"),
            ("c.ts", "d.ts"),
            ("d.ts", "e.ts"),
            ("e.ts", "c.ts"),
            ("e.ts", "e.ts"),
        ],
    );
    let cycles = find_circular_dependencies(&graph);

    assert_eq!(cycles.len(), 3);
    for (i, a) in cycles.iter().enumerate() {
        for b in cycles.iter().skip(i + 1) {
            assert!(!is_rotation(a, b), "{a:?} and {b:?} are the same loop");
        }
    }
}

#[test]
fn test_workspace_unavailable() {
    let err = Workspace::open("/definitely/not/a/real/root").unwrap_err();
    assert!(matches!(err, AnalyzerError::WorkspaceUnavailable { .. }));
}

#[test]
fn test_workspace_detection() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("package.json"), "{}").unwrap();

    let workspace = Workspace::open(dir.path()).unwrap();
    assert_eq!(workspace.kind(), Some(WorkspaceType::Npm));

    let inner = workspace.root().join("src/a.ts");
    assert_eq!(workspace.relativize(&inner), Path::new("src/a.ts"));
}
