//! Class filter: keep or drop paths by their kind on the live filesystem.
//!
//! Nothing cached in the index is trusted. Each path is checked with a fresh
//! stat call, and a path that no longer exists belongs to no class.

use super::traits::{Filter, FilterDecision, PathFilter};
use crate::error::{Result, SiftError};
use crate::index::PathSet;
use crate::progress::ProgressSink;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Filesystem kind of an index entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileClass {
    File,
    Folder,
    Symlink,
}

impl FileClass {
    /// Does the entry at `path` currently belong to this class?
    ///
    /// `File` and `Folder` follow symlinks, so a link to a file is both a
    /// `File` and a `Symlink`.
    pub fn matches(self, path: &Path) -> bool {
        match self {
            Self::File => fs::metadata(path).map(|m| m.is_file()).unwrap_or(false),
            Self::Folder => fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false),
            Self::Symlink => fs::symlink_metadata(path)
                .map(|m| m.file_type().is_symlink())
                .unwrap_or(false),
        }
    }
}

impl FromStr for FileClass {
    type Err = SiftError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "file" => Ok(Self::File),
            "folder" | "directory" | "dir" => Ok(Self::Folder),
            "symlink" | "link" => Ok(Self::Symlink),
            other => Err(SiftError::invalid(format!(
                "unknown class '{other}', expected 'file', 'folder' or 'symlink'"
            ))),
        }
    }
}

impl fmt::Display for FileClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::File => "file",
            Self::Folder => "folder",
            Self::Symlink => "symlink",
        };
        f.write_str(name)
    }
}

/// Keeps entries of one class (`inclusive`) or everything else.
#[derive(Debug, Clone, Copy)]
pub struct ClassFilter {
    class: FileClass,
    inclusive: bool,
}

impl ClassFilter {
    pub fn new(class: FileClass, inclusive: bool) -> Self {
        Self { class, inclusive }
    }
}

impl Filter for ClassFilter {
    type Input = str;
    type Output = FilterDecision;

    fn filter(&self, path: &str) -> Result<FilterDecision> {
        if self.class.matches(Path::new(path)) == self.inclusive {
            Ok(FilterDecision::Keep)
        } else if self.inclusive {
            Ok(FilterDecision::Drop("not of the requested class"))
        } else {
            Ok(FilterDecision::Drop("of the excluded class"))
        }
    }

    fn name(&self) -> &'static str {
        "ClassFilter"
    }
}

impl PathFilter for ClassFilter {}

/// Filter an index by filesystem class named as a string.
///
/// Unknown class names fail with `InvalidArgument`.
pub fn filter_by_class(
    paths: &PathSet,
    kind: &str,
    inclusive: bool,
    progress: &dyn ProgressSink,
) -> Result<PathSet> {
    let class: FileClass = kind.parse()?;
    let span = tracing::debug_span!("class_filter", %class, inclusive);
    let _guard = span.enter();
    let survivors = ClassFilter::new(class, inclusive).apply(paths, progress);
    progress.finish();
    Ok(survivors)
}
