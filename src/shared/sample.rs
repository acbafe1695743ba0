//! Random sub-sampling of a directory tree into a mirror location.
//!
//! The source is indexed in memory, a uniform sample of entries is drawn and
//! every sampled file is copied to the same relative path under the
//! destination. Dry runs only plan the copies.

use crate::error::{Result, SiftError};
use crate::index::{IndexOutcome, IndexRequest, build_index};
use crate::progress::{ProgressSink, SilentProgress};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct SampleRequest {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub count: usize,
    pub dry_run: bool,
    /// Fixed seed for reproducible samples
    pub seed: Option<u64>,
}

/// One planned copy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedCopy {
    pub from: PathBuf,
    pub to: PathBuf,
}

#[derive(Debug, Clone, Default)]
pub struct SampleReport {
    /// Files selected for copying
    pub planned: Vec<PlannedCopy>,
    /// Sampled entries that are not regular files
    pub skipped: Vec<PathBuf>,
    /// Copies that failed and were skipped
    pub failed: Vec<PathBuf>,
    /// Files actually copied (zero for dry runs)
    pub copied: usize,
}

/// Sample entries of `source` and mirror the sampled files under `destination`.
pub fn sample_and_copy(request: &SampleRequest, progress: &dyn ProgressSink) -> Result<SampleReport> {
    let span = tracing::debug_span!("sample", count = request.count, dry_run = request.dry_run);
    let _guard = span.enter();

    let entries = match build_index(&IndexRequest::new(vec![request.source.clone()]), &SilentProgress)? {
        IndexOutcome::InMemory(entries) => entries,
        other => other.into_path_set()?.into_iter().collect(),
    };

    let mut rng = match request.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let selected: Vec<&String> = entries
        .choose_multiple(&mut rng, request.count.min(entries.len()))
        .collect();
    tracing::debug!("Sampled {} of {} entries", selected.len(), entries.len());

    let mut report = SampleReport::default();
    progress.set_total(selected.len() as u64);

    for entry in selected {
        let from = PathBuf::from(entry);
        progress.tick();

        if !from.is_file() {
            tracing::debug!("Skipping {} because it is not a file", from.display());
            report.skipped.push(from);
            continue;
        }

        let to = mirror_path(&from, &request.source, &request.destination)?;
        if request.dry_run {
            tracing::info!("Would copy {} to {}", from.display(), to.display());
        } else if let Err(e) = copy_file(&from, &to) {
            tracing::warn!("Skipping {}: {}", from.display(), e);
            report.failed.push(from);
            continue;
        } else {
            report.copied += 1;
        }
        report.planned.push(PlannedCopy { from, to });
    }
    progress.finish();

    Ok(report)
}

/// Same relative location under `destination`
fn mirror_path(path: &Path, source: &Path, destination: &Path) -> Result<PathBuf> {
    let relative = path.strip_prefix(source).map_err(|_| {
        SiftError::invalid(format!(
            "{} is not inside {}",
            path.display(),
            source.display()
        ))
    })?;
    Ok(destination.join(relative))
}

fn copy_file(from: &Path, to: &Path) -> Result<()> {
    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent).map_err(|e| SiftError::filesystem(parent, e))?;
    }
    fs::copy(from, to).map_err(|e| SiftError::filesystem(from, e))?;
    Ok(())
}
