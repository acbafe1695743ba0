//! Three-pass filter engine
//!
//! ```text
//! index ──▶ RequireAll (one matcher per term, AND)
//!       ──▶ RequireAny (one matcher, OR)
//!       ──▶ ExcludeAny (one matcher, NOT)
//!       ──▶ result set
//! ```
//!
//! Passes run strictly in that order and each one receives the set produced
//! by the previous pass. A pass whose term set is empty is skipped. Matchers
//! are compiled fresh for every run and dropped when it ends.

use super::passes::{ExcludeAny, MatchOptions, RequireAll, RequireAny};
use super::traits::PathFilter;
use crate::error::Result;
use crate::index::{PathSet, read_index, write_index};
use crate::matcher::{Anchoring, TermSet};
use crate::progress::ProgressSink;
use std::path::{Path, PathBuf};

/// Where the candidate paths come from
#[derive(Debug, Clone)]
pub enum IndexSource {
    /// Paths already in memory
    Memory(PathSet),
    /// A newline-delimited index file
    File(PathBuf),
}

impl IndexSource {
    /// Load the candidates, trimming each path and dropping blanks.
    pub fn load(self) -> Result<PathSet> {
        match self {
            Self::Memory(paths) => Ok(paths
                .into_iter()
                .map(|path| path.trim().to_string())
                .filter(|path| !path.is_empty())
                .collect()),
            Self::File(path) => read_index(&path),
        }
    }
}

impl From<PathSet> for IndexSource {
    fn from(paths: PathSet) -> Self {
        Self::Memory(paths)
    }
}

impl From<Vec<String>> for IndexSource {
    fn from(paths: Vec<String>) -> Self {
        Self::Memory(paths.into_iter().collect())
    }
}

impl From<PathBuf> for IndexSource {
    fn from(path: PathBuf) -> Self {
        Self::File(path)
    }
}

/// Term sets and matching options for one filter run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterRequest {
    /// Every term must occur
    pub search_terms: TermSet,
    /// At least one term must occur
    pub include_terms: TermSet,
    /// No term may occur
    pub exclude_terms: TermSet,
    pub case_sensitive: bool,
    pub anchoring: Anchoring,
}

impl FilterRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, terms: TermSet) -> Self {
        self.search_terms = terms;
        self
    }

    pub fn with_include(mut self, terms: TermSet) -> Self {
        self.include_terms = terms;
        self
    }

    pub fn with_exclude(mut self, terms: TermSet) -> Self {
        self.exclude_terms = terms;
        self
    }

    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn anchoring(mut self, anchoring: Anchoring) -> Self {
        self.anchoring = anchoring;
        self
    }

    fn options(&self) -> MatchOptions {
        MatchOptions {
            case_sensitive: self.case_sensitive,
            anchoring: self.anchoring,
        }
    }

    /// True when no pass would run
    pub fn is_identity(&self) -> bool {
        self.search_terms.is_empty() && self.include_terms.is_empty() && self.exclude_terms.is_empty()
    }
}

/// Compiled passes for one run; `None` means the pass is skipped
struct Pipeline {
    require_all: Option<RequireAll>,
    require_any: Option<RequireAny>,
    exclude_any: Option<ExcludeAny>,
}

impl Pipeline {
    fn compile(request: &FilterRequest) -> Result<Self> {
        let options = request.options();
        let require_all = (!request.search_terms.is_empty())
            .then(|| RequireAll::new(&request.search_terms, options))
            .transpose()?;
        let require_any = (!request.include_terms.is_empty())
            .then(|| RequireAny::new(&request.include_terms, options))
            .transpose()?;
        let exclude_any = (!request.exclude_terms.is_empty())
            .then(|| ExcludeAny::new(&request.exclude_terms, options))
            .transpose()?;
        Ok(Self {
            require_all,
            require_any,
            exclude_any,
        })
    }

    fn run(&self, paths: PathSet, progress: &dyn ProgressSink) -> PathSet {
        let paths = run_pass(self.require_all.as_ref(), paths, progress);
        let paths = run_pass(self.require_any.as_ref(), paths, progress);
        run_pass(self.exclude_any.as_ref(), paths, progress)
    }
}

fn run_pass<F: PathFilter>(pass: Option<&F>, paths: PathSet, progress: &dyn ProgressSink) -> PathSet {
    match pass {
        Some(pass) => pass.apply(&paths, progress),
        None => paths,
    }
}

/// Filter an index through the three passes.
///
/// Term sets are compiled before the index is loaded, so an invalid term
/// fails without touching the filesystem.
pub fn filter(
    source: impl Into<IndexSource>,
    request: &FilterRequest,
    progress: &dyn ProgressSink,
) -> Result<PathSet> {
    let span = tracing::debug_span!(
        "filter",
        search = request.search_terms.len(),
        include = request.include_terms.len(),
        exclude = request.exclude_terms.len(),
        case_sensitive = request.case_sensitive
    );
    let _guard = span.enter();

    let pipeline = Pipeline::compile(request)?;
    let paths = source.into().load()?;
    let candidates = paths.len();
    let result = pipeline.run(paths, progress);
    progress.finish();

    tracing::debug!("Filtered {} candidates down to {}", candidates, result.len());
    Ok(result)
}

/// Filter an index and write the survivors to `output`, one per line.
///
/// Returns the output path together with the number of paths written.
pub fn filter_to_file(
    source: impl Into<IndexSource>,
    request: &FilterRequest,
    output: &Path,
    progress: &dyn ProgressSink,
) -> Result<(PathBuf, usize)> {
    let result = filter(source, request, progress)?;
    let written = write_index(output, &result)?;
    Ok((output.to_path_buf(), written))
}
