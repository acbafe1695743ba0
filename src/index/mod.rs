//! Flat filesystem index
//!
//! Walks one or more roots top-down and records every entry beneath them
//! (files, directories and symlinks alike) as an absolute path string. The
//! result stays in memory or is streamed to a newline-delimited file.

pub mod store;

use crate::error::{Result, SiftError};
use crate::progress::ProgressSink;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use walkdir::WalkDir;

pub use store::{read_index, write_index};

/// Set of unique path strings
pub type PathSet = BTreeSet<String>;

/// What to index and where to put it
#[derive(Debug, Clone, Default)]
pub struct IndexRequest {
    pub roots: Vec<PathBuf>,
    pub output: Option<PathBuf>,
    pub overwrite: bool,
}

impl IndexRequest {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self {
            roots,
            ..Self::default()
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>, overwrite: bool) -> Self {
        self.output = Some(output.into());
        self.overwrite = overwrite;
        self
    }
}

/// Result of an indexing run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexOutcome {
    /// Paths in discovery order; overlapping roots may yield duplicates
    InMemory(Vec<String>),
    /// A fresh index file was written
    Written { path: PathBuf, entries: usize },
    /// The output file already existed and overwriting was not requested
    Reused(PathBuf),
}

impl IndexOutcome {
    /// Collapse the outcome into a path set, reading the file if needed.
    pub fn into_path_set(self) -> Result<PathSet> {
        match self {
            Self::InMemory(paths) => Ok(paths.into_iter().collect()),
            Self::Written { path, .. } | Self::Reused(path) => read_index(&path),
        }
    }
}

/// Destination for discovered paths
enum Sink {
    Memory(Vec<String>),
    File { path: PathBuf, writer: BufWriter<File>, entries: usize },
}

impl Sink {
    fn push(&mut self, entry: String) -> Result<()> {
        match self {
            Self::Memory(paths) => paths.push(entry),
            Self::File { path, writer, entries } => {
                writeln!(writer, "{entry}").map_err(|e| SiftError::filesystem(&*path, e))?;
                *entries += 1;
            }
        }
        Ok(())
    }

    fn finish(self) -> Result<IndexOutcome> {
        match self {
            Self::Memory(paths) => Ok(IndexOutcome::InMemory(paths)),
            Self::File { path, mut writer, entries } => {
                writer.flush().map_err(|e| SiftError::filesystem(&path, e))?;
                Ok(IndexOutcome::Written { path, entries })
            }
        }
    }
}

/// Build an index of every entry beneath the requested roots.
///
/// All roots are checked before anything is written. An existing output
/// file is returned untouched unless `overwrite` is set.
pub fn build_index(request: &IndexRequest, progress: &dyn ProgressSink) -> Result<IndexOutcome> {
    let span = tracing::debug_span!("index", roots = request.roots.len());
    let _guard = span.enter();

    if let Some(missing) = request.roots.iter().find(|root| !root.exists()) {
        return Err(SiftError::NotFound(missing.clone()));
    }

    if let Some(output) = &request.output {
        if output.exists() && !request.overwrite {
            tracing::info!(
                "Index {} already exists and overwrite is off, reusing it",
                output.display()
            );
            return Ok(IndexOutcome::Reused(output.clone()));
        }
    }

    let mut sink = match &request.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| SiftError::filesystem(path, e))?;
            Sink::File {
                path: path.clone(),
                writer: BufWriter::new(file),
                entries: 0,
            }
        }
        None => Sink::Memory(Vec::new()),
    };

    let mut skipped = 0usize;
    for root in &request.roots {
        for entry in WalkDir::new(root).min_depth(1).follow_links(false) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    // Unreadable subtrees are skipped; the walk continues
                    tracing::warn!("Skipping entry during index walk: {}", e);
                    skipped += 1;
                    continue;
                }
            };
            match entry.path().to_str() {
                Some(path) => {
                    tracing::trace!("Indexed {}", path);
                    sink.push(path.to_string())?;
                }
                None => {
                    tracing::warn!("Skipping non UTF-8 path: {}", entry.path().display());
                    skipped += 1;
                }
            }
            progress.tick();
        }
    }
    progress.finish();

    let outcome = sink.finish()?;
    tracing::debug!(
        "Indexed {} roots ({} entries skipped)",
        request.roots.len(),
        skipped
    );
    Ok(outcome)
}
