//! Concurrent file enumeration under the workspace root

use crate::config::AnalyzerConfig;
use chrono::{DateTime, Utc};
use futures_util::future::{BoxFuture, FutureExt, join_all};
use globset::GlobSet;
use rootline_core::{AnalyzerError, FileCategory, FileDescriptor, Result, Workspace};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::fs::DirEntry;
use tracing::{debug, info, warn};

/// Counters shared by every scanning task.
///
/// `discovered` grows as directories are listed, so the percentage can move
/// backwards before reaching 100.
#[derive(Debug, Default)]
pub struct ScanProgress {
    discovered: AtomicUsize,
    finished: AtomicUsize,
}

impl ScanProgress {
    fn discover(&self, entries: usize) {
        self.discovered.fetch_add(entries, Ordering::SeqCst);
    }

    fn finish(&self) {
        let finished = self.finished.fetch_add(1, Ordering::SeqCst) + 1;
        let discovered = self.discovered.load(Ordering::SeqCst);
        debug!("Scan progress: {}/{} entries ({}%)", finished, discovered, percent(finished, discovered));
    }

    pub fn discovered(&self) -> usize {
        self.discovered.load(Ordering::SeqCst)
    }

    pub fn finished(&self) -> usize {
        self.finished.load(Ordering::SeqCst)
    }

    pub fn percent(&self) -> usize {
        percent(self.finished(), self.discovered())
    }
}

fn percent(finished: usize, discovered: usize) -> usize {
    if discovered == 0 {
        100
    } else {
        finished * 100 / discovered
    }
}

struct ScanContext {
    root: PathBuf,
    config: AnalyzerConfig,
    excludes: GlobSet,
    progress: Arc<ScanProgress>,
}

/// List every eligible file under the workspace root, sorted by path.
pub async fn scan_catalog(workspace: &Workspace, config: &AnalyzerConfig) -> Result<Vec<FileDescriptor>> {
    scan_catalog_with_progress(workspace, config, Arc::new(ScanProgress::default())).await
}

pub async fn scan_catalog_with_progress(
    workspace: &Workspace,
    config: &AnalyzerConfig,
    progress: Arc<ScanProgress>,
) -> Result<Vec<FileDescriptor>> {
    let root = workspace.root().to_path_buf();
    let is_dir = tokio::fs::metadata(&root).await.map(|m| m.is_dir()).unwrap_or(false);
    if !is_dir {
        return Err(AnalyzerError::WorkspaceUnavailable { path: root });
    }

    let ctx = Arc::new(ScanContext {
        root: root.clone(),
        config: config.clone(),
        excludes: config.exclude_matcher()?,
        progress,
    });

    let mut files = scan_dir(ctx, root.clone()).await;
    files.sort_by(|a, b| a.path.cmp(&b.path));

    info!("Cataloged {} files under {}", files.len(), root.display());
    Ok(files)
}

/// Scan all entries of `dir` concurrently; resolves once every child is done.
fn scan_dir(ctx: Arc<ScanContext>, dir: PathBuf) -> BoxFuture<'static, Vec<FileDescriptor>> {
    async move {
        let mut reader = match tokio::fs::read_dir(&dir).await {
            Ok(reader) => reader,
            Err(e) => {
                warn!("Cannot read directory {}: {}", dir.display(), e);
                return Vec::new();
            }
        };

        let mut entries = Vec::new();
        loop {
            match reader.next_entry().await {
                Ok(Some(entry)) => entries.push(entry),
                Ok(None) => break,
                Err(e) => {
                    warn!("Cannot read entry in {}: {}", dir.display(), e);
                    break;
                }
            }
        }
        ctx.progress.discover(entries.len());

        let tasks = entries.into_iter().map(|entry| scan_entry(ctx.clone(), entry));
        join_all(tasks).await.into_iter().flatten().collect()
    }
    .boxed()
}

async fn scan_entry(ctx: Arc<ScanContext>, entry: DirEntry) -> Vec<FileDescriptor> {
    let path = entry.path();
    let file_name = entry.file_name();
    let name = file_name.to_string_lossy();

    let file_type = match entry.file_type().await {
        Ok(file_type) => file_type,
        Err(e) => {
            warn!("Cannot stat {}: {}", path.display(), e);
            ctx.progress.finish();
            return Vec::new();
        }
    };

    if file_type.is_dir() {
        ctx.progress.finish();
        if ctx.config.exclude_dirs.iter().any(|d| d.as_str() == name) {
            debug!("Excluding directory {}", path.display());
            return Vec::new();
        }
        return scan_dir(ctx, path).await;
    }

    if !file_type.is_file() || ctx.excludes.is_match(&*name) {
        ctx.progress.finish();
        return Vec::new();
    }

    let descriptor = load_descriptor(&ctx, path).await;
    ctx.progress.finish();
    descriptor.into_iter().collect()
}

async fn load_descriptor(ctx: &ScanContext, path: PathBuf) -> Option<FileDescriptor> {
    let metadata = match tokio::fs::metadata(&path).await {
        Ok(metadata) => metadata,
        Err(e) => {
            warn!("Cannot read metadata of {}: {}", path.display(), e);
            return None;
        }
    };
    let modified = metadata
        .modified()
        .map(DateTime::<Utc>::from)
        .unwrap_or_else(|_| Utc::now());
    let mut descriptor = FileDescriptor::new(&ctx.root, path, metadata.len(), modified);

    let wants_content = ctx.config.load_content
        && descriptor.category != FileCategory::Unknown
        && !descriptor.is_binary()
        && descriptor.size <= ctx.config.max_file_size;
    if wants_content {
        match tokio::fs::read_to_string(&descriptor.path).await {
            Ok(content) => descriptor.content = Some(content),
            Err(e) => warn!("Cannot read {}: {}", descriptor.path.display(), e),
        }
    }

    Some(descriptor)
}
