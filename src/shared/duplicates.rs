//! Duplicate file-name detection over an index.

use std::collections::BTreeMap;
use std::path::Path;

/// File name → directories it appears in, for names seen in more than one place.
pub type DuplicateNames = BTreeMap<String, Vec<String>>;

/// Group paths by final component and keep names that occur more than once.
///
/// Directories are listed in input order. Paths without a file name
/// (such as `/`) are ignored.
pub fn find_duplicate_names<'a, I>(paths: I) -> DuplicateNames
where
    I: IntoIterator<Item = &'a String>,
{
    let mut by_name: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for path in paths {
        let path = Path::new(path.as_str());
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let directory = path
            .parent()
            .and_then(Path::to_str)
            .unwrap_or_default()
            .to_string();
        by_name.entry(name.to_string()).or_default().push(directory);
    }

    by_name.retain(|_, directories| directories.len() > 1);
    tracing::debug!("Found {} duplicated file names", by_name.len());
    by_name
}
