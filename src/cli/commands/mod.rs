use crate::cli::Output;
use crate::config::{Settings, SiftConfig};
use crate::index::{IndexRequest, PathSet, build_index};
use crate::progress::{self, ProgressSink};
use anyhow::{Context as _, Result};
use std::path::PathBuf;

pub mod class;
pub mod config;
pub mod dupes;
pub mod find;
pub mod index;
pub mod sample;
pub mod search;

/// Everything a command handler needs after arguments and config are resolved
pub struct Context {
    pub output: Output,
    pub settings: Settings,
    pub config: SiftConfig,
}

impl Context {
    /// Progress sink honouring `general.progress` and `--quiet`
    pub fn progress(&self, message: &str) -> Box<dyn ProgressSink> {
        progress::sink(
            self.settings.general.progress && !self.output.is_quiet(),
            message,
        )
    }
}

/// Load paths from an index file or by walking roots in memory.
pub(crate) fn load_paths(db: Option<PathBuf>, roots: Vec<PathBuf>, ctx: &Context) -> Result<PathSet> {
    if let Some(db) = db {
        ctx.output.verbose(&format!("Reading index {}", db.display()));
        return crate::index::read_index(&db)
            .with_context(|| format!("Failed to read index {}", db.display()));
    }

    let progress = ctx.progress("Indexing");
    let outcome = build_index(&IndexRequest::new(roots), progress.as_ref())
        .context("Failed to build index")?;
    Ok(outcome.into_path_set()?)
}

/// Print a path set to stdout or write it to `output`.
pub(crate) fn emit_paths(paths: &PathSet, output: Option<&PathBuf>, ctx: &Context) -> Result<()> {
    match output {
        Some(file) => {
            let written = crate::index::write_index(file, paths)
                .with_context(|| format!("Failed to write {}", file.display()))?;
            ctx.output
                .success(&format!("Wrote {} paths to {}", written, file.display()));
        }
        None => {
            for path in paths {
                println!("{path}");
            }
            ctx.output.count("🔎", "Matching paths", paths.len());
        }
    }
    Ok(())
}
