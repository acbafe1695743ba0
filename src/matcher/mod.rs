//! Multi-pattern matchers built on Aho-Corasick
//!
//! A [`Matcher`] is compiled once from one [`TermSet`] at one case setting and
//! never mutated afterwards. Matching cost is linear in the haystack length
//! regardless of how many terms the automaton holds.
//!
//! Candidates are prepared as a [`Haystack`] before matching. With
//! [`Anchoring::Framed`] the path is wrapped in literal `^`/`$` markers, so a
//! term such as `"^/srv/"` only matches at the start of a path and `".log$"`
//! only at its end. With [`Anchoring::Plain`] the raw path is searched.

pub mod persist;

use crate::error::{Result, SiftError};
use aho_corasick::AhoCorasick;
use serde::{Deserialize, Serialize};

/// Literal marker placed before a framed path
pub const START_MARKER: char = '^';
/// Literal marker placed after a framed path
pub const END_MARKER: char = '$';

/// Ordered sequence of literal search terms.
///
/// A lone literal has to be wrapped explicitly with [`TermSet::single`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TermSet(Vec<String>);

impl TermSet {
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(terms.into_iter().map(Into::into).collect())
    }

    pub fn single(term: impl Into<String>) -> Self {
        Self(vec![term.into()])
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Terms as they are compiled: lowercased unless matching is case sensitive.
    pub fn normalized(&self, case_sensitive: bool) -> Vec<String> {
        self.0
            .iter()
            .map(|term| {
                if case_sensitive {
                    term.clone()
                } else {
                    term.to_lowercase()
                }
            })
            .collect()
    }
}

impl From<Vec<String>> for TermSet {
    fn from(terms: Vec<String>) -> Self {
        Self(terms)
    }
}

impl<S: Into<String>> FromIterator<S> for TermSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// How a candidate path is presented to the automata.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Anchoring {
    /// Match against `^<path>$` with literal markers
    #[default]
    Framed,
    /// Match against the raw path
    Plain,
}

/// A candidate path prepared for matching.
///
/// Folding and framing happen once here so several matchers can share it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Haystack {
    text: String,
    case_sensitive: bool,
}

impl Haystack {
    pub fn new(path: &str, case_sensitive: bool, anchoring: Anchoring) -> Self {
        let mut text = String::with_capacity(path.len() + 2);
        if anchoring == Anchoring::Framed {
            text.push(START_MARKER);
        }
        if case_sensitive {
            text.push_str(path);
        } else {
            text.push_str(&path.to_lowercase());
        }
        if anchoring == Anchoring::Framed {
            text.push(END_MARKER);
        }
        Self {
            text,
            case_sensitive,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }
}

/// Precompiled multi-pattern automaton for one term set.
#[derive(Debug, Clone)]
pub struct Matcher {
    automaton: AhoCorasick,
    terms: Vec<String>,
    case_sensitive: bool,
}

impl Matcher {
    /// Compile a matcher from a term set.
    ///
    /// An empty term set yields a matcher that matches nothing. Empty-string
    /// terms are rejected because they would match every haystack.
    pub fn new(terms: &TermSet, case_sensitive: bool) -> Result<Self> {
        if let Some(position) = terms.iter().position(str::is_empty) {
            return Err(SiftError::invalid(format!(
                "term {} of {} is an empty string",
                position + 1,
                terms.len()
            )));
        }

        let terms = terms.normalized(case_sensitive);
        let automaton = AhoCorasick::new(&terms)
            .map_err(|e| SiftError::invalid(format!("failed to build automaton: {e}")))?;

        tracing::trace!(
            "Built matcher with {} terms (case_sensitive = {})",
            terms.len(),
            case_sensitive
        );

        Ok(Self {
            automaton,
            terms,
            case_sensitive,
        })
    }

    /// Does any registered term occur in the prepared haystack?
    pub fn is_match(&self, haystack: &Haystack) -> bool {
        debug_assert_eq!(
            haystack.is_case_sensitive(),
            self.case_sensitive,
            "haystack folded with a different case setting than the matcher"
        );
        self.automaton.is_match(haystack.as_str())
    }

    /// Match raw text, folding it first when the matcher is case insensitive.
    pub fn is_match_text(&self, text: &str) -> bool {
        if self.case_sensitive {
            self.automaton.is_match(text)
        } else {
            self.automaton.is_match(text.to_lowercase().as_str())
        }
    }

    /// Terms as compiled (already folded when case insensitive).
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn pattern_count(&self) -> usize {
        self.automaton.patterns_len()
    }
}
