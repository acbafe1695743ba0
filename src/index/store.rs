//! Newline-delimited index files: one path per line, UTF-8, no header.

use super::PathSet;
use crate::error::{Result, SiftError};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Read an index file fully into memory.
///
/// Every line is trimmed; blank lines are dropped.
pub fn read_index(path: &Path) -> Result<PathSet> {
    if !path.exists() {
        return Err(SiftError::NotFound(path.to_path_buf()));
    }
    let raw = fs::read_to_string(path).map_err(|e| SiftError::filesystem(path, e))?;
    let paths: PathSet = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    tracing::debug!("Read {} paths from {}", paths.len(), path.display());
    Ok(paths)
}

/// Write paths one per line, each trimmed, overwriting `path`.
pub fn write_index<'a, I>(path: &Path, paths: I) -> Result<usize>
where
    I: IntoIterator<Item = &'a String>,
{
    let file = File::create(path).map_err(|e| SiftError::filesystem(path, e))?;
    let mut writer = BufWriter::new(file);
    let mut written = 0;
    for entry in paths {
        writeln!(writer, "{}", entry.trim()).map_err(|e| SiftError::filesystem(path, e))?;
        written += 1;
    }
    writer.flush().map_err(|e| SiftError::filesystem(path, e))?;
    tracing::debug!("Wrote {} paths to {}", written, path.display());
    Ok(written)
}
