//! Glob pattern utilities
//!
//! Locates entries under a base directory by glob pattern. `*` stays within a
//! path component and `**` crosses directories.

use crate::error::{Result, SiftError};
use globset::{GlobBuilder, GlobMatcher};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Check if a string contains glob pattern characters
pub fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?') || pattern.contains('[')
}

fn compile(pattern: &str) -> Result<GlobMatcher> {
    let glob = GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map_err(|e| SiftError::invalid(format!("invalid glob pattern '{pattern}': {e}")))?;
    Ok(glob.compile_matcher())
}

/// Find every entry (file, directory or symlink) matching `pattern`.
///
/// Literal patterns resolve to that single path if it exists. Glob patterns
/// are tested against both the full path and the path relative to `base_dir`.
pub fn find_files<P: AsRef<Path>>(pattern: &str, base_dir: P) -> Result<Vec<PathBuf>> {
    let base_dir = base_dir.as_ref();

    if !is_glob_pattern(pattern) {
        let path = if Path::new(pattern).is_absolute() {
            PathBuf::from(pattern)
        } else {
            base_dir.join(pattern)
        };
        return Ok(if path.exists() { vec![path] } else { Vec::new() });
    }

    if !base_dir.exists() {
        return Err(SiftError::NotFound(base_dir.to_path_buf()));
    }

    let matcher = compile(pattern)?;
    let mut matching_paths = Vec::new();

    for entry in WalkDir::new(base_dir).min_depth(1) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Skipping entry during glob walk: {}", e);
                continue;
            }
        };
        let path = entry.path();
        let matches = matcher.is_match(path)
            || path
                .strip_prefix(base_dir)
                .map(|rel_path| matcher.is_match(rel_path))
                .unwrap_or(false);

        if matches {
            matching_paths.push(path.to_path_buf());
        }
    }

    tracing::debug!("Glob '{}' matched {} entries", pattern, matching_paths.len());
    Ok(matching_paths)
}
