//! The three term passes: require-all, require-any and exclude-any.

use super::traits::{Filter, FilterDecision, PathFilter};
use crate::error::Result;
use crate::matcher::{Anchoring, Haystack, Matcher, TermSet};

/// Case and anchoring settings shared by every pass of one filter run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchOptions {
    pub case_sensitive: bool,
    pub anchoring: Anchoring,
}

impl MatchOptions {
    fn haystack(&self, path: &str) -> Haystack {
        Haystack::new(path, self.case_sensitive, self.anchoring)
    }
}

/// Keeps a path only if every term occurs in it.
///
/// Each term gets its own matcher; the results are intersected.
pub struct RequireAll {
    matchers: Vec<Matcher>,
    options: MatchOptions,
}

impl RequireAll {
    pub fn new(terms: &TermSet, options: MatchOptions) -> Result<Self> {
        let matchers = terms
            .iter()
            .map(|term| Matcher::new(&TermSet::single(term), options.case_sensitive))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { matchers, options })
    }
}

impl Filter for RequireAll {
    type Input = str;
    type Output = FilterDecision;

    fn filter(&self, path: &str) -> Result<FilterDecision> {
        let haystack = self.options.haystack(path);
        if self.matchers.iter().all(|matcher| matcher.is_match(&haystack)) {
            Ok(FilterDecision::Keep)
        } else {
            Ok(FilterDecision::Drop("missing a required term"))
        }
    }

    fn name(&self) -> &'static str {
        "RequireAll"
    }
}

impl PathFilter for RequireAll {}

/// Keeps a path if at least one include term occurs in it.
pub struct RequireAny {
    matcher: Matcher,
    options: MatchOptions,
}

impl RequireAny {
    pub fn new(terms: &TermSet, options: MatchOptions) -> Result<Self> {
        Ok(Self {
            matcher: Matcher::new(terms, options.case_sensitive)?,
            options,
        })
    }
}

impl Filter for RequireAny {
    type Input = str;
    type Output = FilterDecision;

    fn filter(&self, path: &str) -> Result<FilterDecision> {
        if self.matcher.is_match(&self.options.haystack(path)) {
            Ok(FilterDecision::Keep)
        } else {
            Ok(FilterDecision::Drop("no include term"))
        }
    }

    fn name(&self) -> &'static str {
        "RequireAny"
    }
}

impl PathFilter for RequireAny {}

/// Drops a path if any exclude term occurs in it.
///
/// Exclude terms see the same prepared haystack as the other passes, so in
/// framed mode `^/x` excludes paths starting with `/x`. The earlier flat-file
/// tool matched exclude terms against the raw path, where such a term never
/// matched.
pub struct ExcludeAny {
    matcher: Matcher,
    options: MatchOptions,
}

impl ExcludeAny {
    pub fn new(terms: &TermSet, options: MatchOptions) -> Result<Self> {
        Ok(Self {
            matcher: Matcher::new(terms, options.case_sensitive)?,
            options,
        })
    }
}

impl Filter for ExcludeAny {
    type Input = str;
    type Output = FilterDecision;

    fn filter(&self, path: &str) -> Result<FilterDecision> {
        if self.matcher.is_match(&self.options.haystack(path)) {
            Ok(FilterDecision::Drop("matched an exclude term"))
        } else {
            Ok(FilterDecision::Keep)
        }
    }

    fn name(&self) -> &'static str {
        "ExcludeAny"
    }
}

impl PathFilter for ExcludeAny {}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(case_sensitive: bool) -> MatchOptions {
        MatchOptions {
            case_sensitive,
            anchoring: Anchoring::Framed,
        }
    }

    #[test]
    fn test_require_all_needs_every_term() {
        let pass = RequireAll::new(&TermSet::new(["/x/", ".txt"]), options(true)).unwrap();
        assert!(pass.keeps("/x/a.txt"));
        assert!(!pass.keeps("/y/a.txt"));
        assert!(!pass.keeps("/x/a.csv"));
    }

    #[test]
    fn test_require_any_needs_one_term() {
        let pass = RequireAny::new(&TermSet::new(["/x/", "/y/"]), options(true)).unwrap();
        assert!(pass.keeps("/x/a.txt"));
        assert!(pass.keeps("/y/a.txt"));
        assert!(!pass.keeps("/z/a.txt"));
    }

    #[test]
    fn test_exclude_any_drops_matches() {
        let pass = ExcludeAny::new(&TermSet::new(["b.txt", ".tmp"]), options(false)).unwrap();
        assert!(pass.keeps("/x/a.txt"));
        assert!(!pass.keeps("/x/B.TXT"));
        assert_eq!(
            pass.filter("/x/cache.tmp").unwrap(),
            FilterDecision::Drop("matched an exclude term")
        );
    }

    #[test]
    fn test_anchored_terms() {
        let pass = RequireAll::new(&TermSet::single("^/x/"), options(true)).unwrap();
        assert!(pass.keeps("/x/a.txt"));
        assert!(!pass.keeps("/data/x/a.txt"));

        let suffix = ExcludeAny::new(&TermSet::single(".txt$"), options(true)).unwrap();
        assert!(!suffix.keeps("/x/a.txt"));
        assert!(suffix.keeps("/x/a.txt.bak"));
    }

    #[test]
    fn test_empty_term_is_rejected_by_each_pass() {
        let bad = TermSet::new(["ok", ""]);
        assert!(RequireAll::new(&bad, options(true)).is_err());
        assert!(RequireAny::new(&bad, options(true)).is_err());
        assert!(ExcludeAny::new(&bad, options(true)).is_err());
    }

    #[test]
    fn test_exclude_start_marker_follows_anchoring() {
        let framed = ExcludeAny::new(&TermSet::single("^/x"), options(true)).unwrap();
        assert!(!framed.keeps("/x/a.txt"));
        assert!(framed.keeps("/y/a.txt"));

        let plain = MatchOptions {
            case_sensitive: true,
            anchoring: Anchoring::Plain,
        };
        let raw = ExcludeAny::new(&TermSet::single("^/x"), plain).unwrap();
        assert!(raw.keeps("/x/a.txt"));
        assert!(raw.keeps("/y/a.txt"));
    }
}
