//! On-disk matcher definitions
//!
//! Automata are not serialized directly. Instead the normalized term set and
//! case flag are written as JSON together with a BLAKE3 fingerprint, and the
//! automaton is recompiled on load. The fingerprint makes staleness explicit:
//! a file whose contents no longer hash to its stamp is rejected, and a file
//! built for a different term set is rebuilt rather than silently reused.

use super::{Matcher, TermSet};
use crate::error::{Result, SiftError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Bumped whenever the persisted layout or fingerprint scheme changes
pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredMatcher {
    pub version: u32,
    pub terms: Vec<String>,
    pub case_sensitive: bool,
    pub fingerprint: String,
}

impl StoredMatcher {
    pub fn new(terms: &TermSet, case_sensitive: bool) -> Self {
        let terms = terms.normalized(case_sensitive);
        let fingerprint = fingerprint(&terms, case_sensitive);
        Self {
            version: FORMAT_VERSION,
            terms,
            case_sensitive,
            fingerprint,
        }
    }

    /// Does the stored stamp still describe the stored terms?
    pub fn is_consistent(&self) -> bool {
        self.version == FORMAT_VERSION
            && self.fingerprint == fingerprint(&self.terms, self.case_sensitive)
    }

    pub fn compile(&self) -> Result<Matcher> {
        Matcher::new(&TermSet::new(self.terms.iter().cloned()), self.case_sensitive)
    }
}

/// Hash of the normalized terms and the case flag.
///
/// Terms are length-prefixed so `["ab", "c"]` and `["a", "bc"]` differ.
pub fn fingerprint(normalized_terms: &[String], case_sensitive: bool) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(&FORMAT_VERSION.to_le_bytes());
    hasher.update(&[u8::from(case_sensitive)]);
    for term in normalized_terms {
        hasher.update(&(term.len() as u64).to_le_bytes());
        hasher.update(term.as_bytes());
    }
    hasher.finalize().to_hex().to_string()
}

/// Compile a matcher and persist its definition to `path`.
pub fn save_matcher(path: &Path, terms: &TermSet, case_sensitive: bool) -> Result<Matcher> {
    let matcher = Matcher::new(terms, case_sensitive)?;
    let stored = StoredMatcher::new(terms, case_sensitive);
    let json = serde_json::to_string_pretty(&stored)
        .map_err(|e| SiftError::invalid(format!("cannot serialize matcher: {e}")))?;
    fs::write(path, json).map_err(|e| SiftError::filesystem(path, e))?;
    tracing::debug!("Persisted matcher with {} terms to {}", stored.terms.len(), path.display());
    Ok(matcher)
}

/// Read a persisted matcher definition and verify its fingerprint.
pub fn load_stored(path: &Path) -> Result<StoredMatcher> {
    if !path.exists() {
        return Err(SiftError::NotFound(path.to_path_buf()));
    }
    let raw = fs::read_to_string(path).map_err(|e| SiftError::filesystem(path, e))?;
    let stored: StoredMatcher = serde_json::from_str(&raw).map_err(|e| {
        SiftError::invalid(format!("malformed matcher file {}: {e}", path.display()))
    })?;
    if !stored.is_consistent() {
        return Err(SiftError::StaleMatcher(path.to_path_buf()));
    }
    Ok(stored)
}

/// Load a persisted matcher and recompile it.
pub fn load_matcher(path: &Path) -> Result<Matcher> {
    load_stored(path)?.compile()
}

/// Reuse the persisted matcher when it was built for exactly these terms,
/// otherwise build a fresh one and overwrite the file.
pub fn load_or_build(path: &Path, terms: &TermSet, case_sensitive: bool) -> Result<Matcher> {
    let wanted = StoredMatcher::new(terms, case_sensitive);
    match load_stored(path) {
        Ok(stored) if stored.fingerprint == wanted.fingerprint => {
            tracing::debug!("Reusing persisted matcher at {}", path.display());
            return stored.compile();
        }
        Ok(_) => {
            tracing::info!("Persisted matcher at {} was built for other terms, rebuilding", path.display());
        }
        Err(SiftError::NotFound(_)) => {}
        Err(e) => {
            tracing::warn!("Discarding persisted matcher: {}", e);
        }
    }
    save_matcher(path, terms, case_sensitive)
}
