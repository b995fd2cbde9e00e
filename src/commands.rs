//! CLI command implementations

use anyhow::Context;
use rootline_ai::{ChatSession, PromptBuilder, create_provider};
use rootline_core::{
    Cycle, DependencyGraph, FileDescriptor, Workspace, find_circular_dependencies,
};
use rootline_indexer::resolver::normalize;
use rootline_indexer::{AnalyzerConfig, DependencyAnalyzer, scan_catalog, summarize};
use std::path::{Path, PathBuf};

/// A cataloged project and the analyzer bound to it.
struct Project {
    workspace: Workspace,
    analyzer: DependencyAnalyzer,
    files: Vec<FileDescriptor>,
}

impl Project {
    async fn open(root: &Path, config_path: Option<&Path>) -> anyhow::Result<Self> {
        let workspace = Workspace::open(root)?;
        let config = match config_path {
            Some(path) => AnalyzerConfig::from_file(path)?,
            None => AnalyzerConfig::load(workspace.root())?,
        };
        Self::with_config(workspace, config).await
    }

    async fn with_config(workspace: Workspace, config: AnalyzerConfig) -> anyhow::Result<Self> {
        if let Some(kind) = workspace.kind() {
            tracing::info!("Detected {:?} project at {}", kind, workspace.root().display());
        }

        let files = scan_catalog(&workspace, &config).await?;
        let analyzer = DependencyAnalyzer::for_workspace(&workspace, config);
        Ok(Self {
            workspace,
            analyzer,
            files,
        })
    }

    fn graph(&self) -> DependencyGraph {
        self.analyzer.build_graph(&self.files)
    }

    /// Absolute catalog key for a path given on the command line.
    fn locate(&self, file: &Path) -> PathBuf {
        if file.is_absolute() {
            normalize(file)
        } else {
            normalize(&self.workspace.root().join(file))
        }
    }

    fn display_cycle(&self, cycle: &Cycle) -> String {
        cycle
            .iter()
            .map(|p| self.workspace.relativize(p).display().to_string())
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}

fn project_cycles(graph: &DependencyGraph) -> Vec<Cycle> {
    if graph.has_cycles() {
        find_circular_dependencies(graph)
    } else {
        Vec::new()
    }
}

pub async fn scan(root: &Path, config: Option<&Path>) -> anyhow::Result<()> {
    let project = Project::open(root, config).await?;

    for file in &project.files {
        println!("{:<16} {:>9}  {}", format!("{:?}", file.category), file.size, file.relative_path.display());
    }
    println!("{} files", project.files.len());
    Ok(())
}

pub async fn cycles(root: &Path, config: Option<&Path>) -> anyhow::Result<()> {
    let project = Project::open(root, config).await?;
    let cycles = project_cycles(&project.graph());

    if cycles.is_empty() {
        println!("No circular dependencies found.");
        return Ok(());
    }

    println!("Circular dependencies detected:");
    for cycle in &cycles {
        println!("  {}", project.display_cycle(cycle));
    }
    Ok(())
}

pub async fn summary(root: &Path, config: Option<&Path>, file: &Path) -> anyhow::Result<()> {
    let project = Project::open(root, config).await?;
    let graph = project.graph();
    let path = project.locate(file);

    let report = summarize(&project.analyzer, &graph, &path)?;
    print!("{}", report);
    Ok(())
}

pub async fn dependents(root: &Path, config: Option<&Path>, file: &Path) -> anyhow::Result<()> {
    let project = Project::open(root, config).await?;
    let target = project.locate(file);

    let dependents = project.analyzer.find_dependents(&target, &project.files);
    if dependents.is_empty() {
        println!("No files depend on {}", project.workspace.relativize(&target).display());
        return Ok(());
    }

    for dependency in &dependents {
        let lines: Vec<String> = dependency.lines.iter().map(|l| (l + 1).to_string()).collect();
        println!(
            "{} ({}, line {})",
            project.workspace.relativize(&dependency.source).display(),
            dependency.kind,
            if lines.is_empty() { "?".to_string() } else { lines.join(", ") }
        );
    }
    Ok(())
}

pub async fn graph_dot(root: &Path, config: Option<&Path>) -> anyhow::Result<()> {
    let project = Project::open(root, config).await?;
    print!("{}", project.graph().to_dot());
    Ok(())
}

/// JSON dump of the graph. Content is never loaded so it stays out of the output.
pub async fn graph_json(root: &Path, config_path: Option<&Path>) -> anyhow::Result<()> {
    let workspace = Workspace::open(root)?;
    let mut config = match config_path {
        Some(path) => AnalyzerConfig::from_file(path)?,
        None => AnalyzerConfig::load(workspace.root())?,
    };
    config.load_content = false;

    let project = Project::with_config(workspace, config).await?;
    let json = serde_json::to_string_pretty(&project.graph()).context("Failed to serialize graph")?;
    println!("{}", json);
    Ok(())
}

pub async fn chat(
    root: &Path,
    config: Option<&Path>,
    file: &Path,
    question: &str,
    provider: &str,
    model: Option<String>,
    endpoint: Option<String>,
) -> anyhow::Result<()> {
    let project = Project::open(root, config).await?;
    let graph = project.graph();
    let path = project.locate(file);

    let report = summarize(&project.analyzer, &graph, &path)?;
    let cycles = project_cycles(&graph);
    let prompt = PromptBuilder::new(project.workspace.relativize(&path))
        .with_report(report)
        .with_cycles(&cycles, Some(project.workspace.root()))
        .build();

    let provider = create_provider(provider, None, endpoint, model)?;
    let mut session = ChatSession::new(provider, prompt);
    tracing::info!("Asking {}", session.provider_name());

    let answer = session
        .ask(question)
        .await
        .with_context(|| format!("{} could not answer", session.provider_name()))?;
    println!("{}", answer);
    Ok(())
}
