//! Human-readable dependency report for a single file

use crate::analyzer::DependencyAnalyzer;
use rootline_core::{
    AnalyzerError, Cycle, Dependency, DependencyGraph, DependencyKind, FileDescriptor, Result,
    find_circular_dependencies,
};
use std::fmt::Write;
use std::path::Path;

/// Report the dependencies of `path` and any cycle among the file and its
/// direct internal dependencies.
pub fn summarize(analyzer: &DependencyAnalyzer, graph: &DependencyGraph, path: &Path) -> Result<String> {
    let file = graph.node(path).ok_or_else(|| AnalyzerError::FileNotInCatalog {
        path: path.to_path_buf(),
    })?;
    let dependencies = analyzer.analyze_dependencies(file);

    let neighbourhood = std::iter::once(path).chain(
        dependencies
            .iter()
            .filter(|d| !d.is_external && graph.contains(&d.target))
            .map(|d| d.target.as_path()),
    );
    let cycles = find_circular_dependencies(&graph.subgraph(neighbourhood));

    Ok(render_summary(file, &dependencies, &cycles, analyzer.resolver().root()))
}

/// Dependencies grouped by kind, then internal before external. Line numbers
/// are printed 1-based.
pub fn render_summary(
    file: &FileDescriptor,
    dependencies: &[Dependency],
    cycles: &[Cycle],
    root: Option<&Path>,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Dependencies of {}", file.relative_path.display());

    if dependencies.is_empty() {
        let _ = writeln!(out, "\nNo dependencies found.");
    }

    for kind in DependencyKind::ALL {
        let of_kind: Vec<&Dependency> = dependencies.iter().filter(|d| d.kind == kind).collect();
        if of_kind.is_empty() {
            continue;
        }
        let _ = writeln!(out, "\n{}", kind);

        for (label, external) in [("internal", false), ("external", true)] {
            let group: Vec<&&Dependency> = of_kind.iter().filter(|d| d.is_external == external).collect();
            if group.is_empty() {
                continue;
            }
            let _ = writeln!(out, "  {}", label);
            for dependency in group {
                let target = if dependency.is_external {
                    dependency.target.as_path()
                } else {
                    relative(&dependency.target, root)
                };
                let _ = writeln!(out, "    {}{}", target.display(), format_lines(&dependency.lines));
            }
        }
    }

    if !cycles.is_empty() {
        let _ = writeln!(out, "\nCircular dependencies detected:");
        for cycle in cycles {
            let chain: Vec<String> = cycle
                .iter()
                .map(|p| relative(p, root).display().to_string())
                .collect();
            let _ = writeln!(out, "  {}", chain.join(" -> "));
        }
    }

    out
}

fn relative<'a>(path: &'a Path, root: Option<&Path>) -> &'a Path {
    root.and_then(|r| path.strip_prefix(r).ok()).unwrap_or(path)
}

fn format_lines(lines: &[usize]) -> String {
    match lines {
        [] => String::new(),
        [line] => format!(" (line {})", line + 1),
        _ => {
            let numbers: Vec<String> = lines.iter().map(|l| (l + 1).to_string()).collect();
            format!(" (lines {})", numbers.join(", "))
        }
    }
}
