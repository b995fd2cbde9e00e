//! Integration tests for Rootline
//!
//! These tests run the catalog, graph, cycle and summary stages together and
//! drive the CLI binary against a temporary project.

use rootline_core::{Workspace, find_circular_dependencies};
use rootline_indexer::{AnalyzerConfig, DependencyAnalyzer, scan_catalog, summarize};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn create_project() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().canonicalize().unwrap();
    fs::create_dir_all(root.join("lib")).unwrap();
    fs::create_dir_all(root.join("styles")).unwrap();

    fs::write(root.join("package.json"), r#"{ "name": "ring", "dependencies": { "react": "^18.0.0" } }"#).unwrap();
    fs::write(root.join("lib/a.js"), "const b = require('./b');\nmodule.exports = () => b;\n").unwrap();
    fs::write(root.join("lib/b.js"), "import c from './c.js';\nexport default c;\n").unwrap();
    fs::write(root.join("lib/c.js"), "import a from './a';\nimport React from 'react';\nexport default a;\n").unwrap();
    fs::write(root.join("styles/main.css"), "@import url('./base.css');\n").unwrap();
    fs::write(root.join("styles/base.css"), "html { color: black; }\n").unwrap();
    fs::write(root.join("index.html"), "<link rel=\"stylesheet\" href=\"./styles/main.css\">\n<script src=\"./lib/a.js\"></script>\n").unwrap();

    (temp_dir, root)
}

fn rootline(root: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rootline"))
        .arg("--root")
        .arg(root)
        .args(args)
        .env("RUST_LOG", "off")
        .env_remove("OPENAI_API_KEY")
        .output()
        .expect("Failed to execute rootline")
}

#[tokio::test]
async fn test_pipeline_end_to_end() {
    let (_dir, root) = create_project();
    let workspace = Workspace::open(&root).unwrap();
    let files = scan_catalog(&workspace, &AnalyzerConfig::default()).await.unwrap();
    assert_eq!(files.len(), 7);

    let analyzer = DependencyAnalyzer::for_workspace(&workspace, AnalyzerConfig::default());
    let graph = analyzer.build_graph(&files);
    assert_eq!(graph.edge_count(), 6);

    let cycles = find_circular_dependencies(&graph);
    assert_eq!(
        cycles,
        vec![vec![root.join("lib/a.js"), root.join("lib/b.js"), root.join("lib/c.js"), root.join("lib/a.js")]]
    );

    let report = summarize(&analyzer, &graph, &root.join("lib/c.js")).unwrap();
    assert!(report.starts_with("Dependencies of lib/c.js\n"));
    assert!(report.contains("    lib/a.js (line 1)\n"));
    assert!(report.contains("    react (line 2)\n"));
    // a.js -> b.js is outside the neighbourhood of c.js, so the ring is not closed
    assert!(!report.contains("Circular dependencies detected:"));

    let report = summarize(&analyzer, &graph, &root.join("lib/b.js")).unwrap();
    assert!(!report.contains("Circular"));
}

#[test]
fn test_cli_cycles() {
    let (_dir, root) = create_project();
    let output = rootline(&root, &["cycles"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Circular dependencies detected:"));
    assert!(stdout.contains("lib/a.js -> lib/b.js -> lib/c.js -> lib/a.js"));
}

#[test]
fn test_cli_summary_and_dependents() {
    let (_dir, root) = create_project();

    let output = rootline(&root, &["summary", "styles/main.css"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("style-import"));
    assert!(stdout.contains("styles/base.css (line 1)"));

    let output = rootline(&root, &["dependents", "lib/a.js"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("index.html (markup-link, line 2)"));
    assert!(stdout.contains("lib/c.js (import, line 1)"));

    let output = rootline(&root, &["summary", "lib/missing.js"]);
    assert!(!output.status.success());
}

#[test]
fn test_cli_graph_json() {
    let (_dir, root) = create_project();
    let output = rootline(&root, &["graph", "--format", "json"]);
    assert!(output.status.success());

    let graph: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(graph["nodes"].as_object().unwrap().len(), 7);
    let a = root.join("lib/a.js").to_string_lossy().into_owned();
    assert_eq!(graph["nodes"][&a]["category"], "script");
    assert!(graph["nodes"][&a].get("content").is_none());
}

#[test]
fn test_cli_chat_offline() {
    let (_dir, root) = create_project();
    let output = rootline(&root, &["chat", "lib/a.js", "Are there any cycles?", "--provider", "local"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("lib/a.js -> lib/b.js -> lib/c.js -> lib/a.js"));

    let output = rootline(&root, &["chat", "lib/a.js", "Hi", "--provider", "openai"]);
    assert!(!output.status.success());
}

#[test]
fn test_cli_version() {
    let output = rootline(Path::new("."), &["version"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("Rootline v"));
}
