//! Core filter traits for the filtering pipeline
//!
//! Every pass and post-filter implements [`Filter`] so they compose the same
//! way and can be exercised in isolation.

use crate::error::Result;
use crate::index::PathSet;
use crate::progress::ProgressSink;

/// Base filter trait that all filters implement
pub trait Filter {
    /// The input type this filter processes
    type Input: ?Sized;
    /// The output type this filter produces
    type Output;

    /// Apply the filter to the input
    fn filter(&self, input: &Self::Input) -> Result<Self::Output>;

    /// Get the name of this filter for debugging/logging
    fn name(&self) -> &'static str;
}

/// Decision for whether a path survives a filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterDecision {
    /// Keep this path
    Keep,
    /// Drop this path with a reason
    Drop(&'static str),
}

/// Per-path filter that can be applied to a whole path set
pub trait PathFilter: Filter<Input = str, Output = FilterDecision> {
    /// Returns true if the path survives this filter
    fn keeps(&self, path: &str) -> bool {
        matches!(self.filter(path), Ok(FilterDecision::Keep))
    }

    /// Produce a new set holding only the surviving paths.
    ///
    /// The input set is left untouched. One tick is reported per survivor.
    fn apply(&self, paths: &PathSet, progress: &dyn ProgressSink) -> PathSet {
        progress.set_total(paths.len() as u64);
        let survivors: PathSet = paths
            .iter()
            .filter(|path| {
                let keep = self.keeps(path.as_str());
                if keep {
                    progress.tick();
                } else {
                    tracing::trace!("{} dropped {}", self.name(), path);
                }
                keep
            })
            .cloned()
            .collect();
        tracing::debug!(
            "{}: {} of {} paths survived",
            self.name(),
            survivors.len(),
            paths.len()
        );
        survivors
    }
}
