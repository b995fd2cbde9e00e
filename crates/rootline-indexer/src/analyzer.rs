//! Per-file dependency analysis and whole-project graph building

use crate::config::AnalyzerConfig;
use crate::extractor::{Linkage, Reference};
use crate::formats::get_extractor;
use crate::resolver::PathResolver;
use rayon::prelude::*;
use rootline_core::{
    AnalyzerError, Dependency, DependencyCache, DependencyGraph, FileDescriptor, Result, Workspace,
};
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Extracts, resolves and caches the dependencies of catalog files.
///
/// Results are cached per path for the analyzer's lifetime. A file edited
/// after its first analysis keeps reporting the original result.
pub struct DependencyAnalyzer {
    config: AnalyzerConfig,
    resolver: PathResolver,
    cache: DependencyCache,
}

impl DependencyAnalyzer {
    pub fn new(config: AnalyzerConfig, root: Option<PathBuf>) -> Self {
        DependencyAnalyzer {
            config,
            resolver: PathResolver::new(root),
            cache: DependencyCache::new(),
        }
    }

    pub fn for_workspace(workspace: &Workspace, config: AnalyzerConfig) -> Self {
        Self::new(config, Some(workspace.root().to_path_buf()))
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn resolver(&self) -> &PathResolver {
        &self.resolver
    }

    pub fn cache(&self) -> &DependencyCache {
        &self.cache
    }

    /// Dependencies of one file, computed once per path.
    ///
    /// Unreadable files and malformed manifests are logged and reported as
    /// having no dependencies.
    pub fn analyze_dependencies(&self, file: &FileDescriptor) -> Vec<Dependency> {
        if let Some(cached) = self.cache.get(&file.path) {
            return cached;
        }

        let dependencies = match self.extract(file) {
            Ok(dependencies) => dependencies,
            Err(e) => {
                warn!("{}; treating it as having no dependencies", e);
                Vec::new()
            }
        };
        debug!("{}: {} dependencies", file.relative_path.display(), dependencies.len());

        self.cache.insert_if_absent(file.path.clone(), dependencies)
    }

    fn extract(&self, file: &FileDescriptor) -> Result<Vec<Dependency>> {
        if file.size > self.config.max_file_size || file.is_binary() {
            debug!("Skipping {} (binary or {} bytes)", file.relative_path.display(), file.size);
            return Ok(Vec::new());
        }
        let Some(extractor) = get_extractor(file) else {
            return Ok(Vec::new());
        };

        let content = match &file.content {
            Some(content) => Cow::Borrowed(content.as_str()),
            None => Cow::Owned(std::fs::read_to_string(&file.path).map_err(|source| {
                AnalyzerError::UnreadableFile {
                    path: file.path.clone(),
                    source,
                }
            })?),
        };

        let references = extractor.extract(&file.path, &content, &self.config)?;
        Ok(references
            .into_iter()
            .map(|reference| self.to_dependency(&file.path, &content, reference))
            .collect())
    }

    fn to_dependency(&self, source: &Path, content: &str, reference: Reference) -> Dependency {
        let is_external = match reference.linkage {
            Linkage::Internal => false,
            Linkage::External => true,
            Linkage::Detect => self.config.is_external(&reference.specifier),
        };
        let target = if is_external {
            PathBuf::from(&reference.specifier)
        } else {
            self.resolver.resolve(source, &reference.specifier)
        };

        Dependency {
            source: source.to_path_buf(),
            target,
            kind: reference.kind,
            lines: lines_containing(content, &reference.snippet),
            is_external,
        }
    }

    /// Graph over `files`, keeping only edges whose target is one of them.
    pub fn build_graph(&self, files: &[FileDescriptor]) -> DependencyGraph {
        let mut graph = DependencyGraph::with_nodes(files.iter().cloned());

        let per_file: Vec<Vec<Dependency>> = files
            .par_iter()
            .map(|file| self.analyze_dependencies(file))
            .collect();

        let mut dropped = 0usize;
        for dependency in per_file.into_iter().flatten() {
            if !graph.insert_edge(dependency) {
                dropped += 1;
            }
        }

        info!(
            "Built dependency graph: {} files, {} edges ({} unresolved or external references dropped)",
            graph.node_count(),
            graph.edge_count(),
            dropped
        );
        graph
    }

    /// Every dependency in `files` that points at `target`.
    ///
    /// Walks all files on each call; no reverse index is kept between calls.
    pub fn find_dependents(&self, target: &Path, files: &[FileDescriptor]) -> Vec<Dependency> {
        files
            .iter()
            .flat_map(|file| self.analyze_dependencies(file))
            .filter(|dependency| dependency.target == target)
            .collect()
    }
}

/// Zero-based indices of every line containing `snippet` verbatim.
pub fn lines_containing(content: &str, snippet: &str) -> Vec<usize> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| line.contains(snippet))
        .map(|(i, _)| i)
        .collect()
}
