//! Matcher resolution
//!
//! Decides which matchers govern a classification run. Precedence is an
//! explicit ordered list of strategies, each returning an applicable set or
//! nothing, evaluated in fixed priority order:
//!
//! 1. a compiling, non-empty custom pattern wins outright (authoritative
//!    maintainer intent, never merged with language inference);
//! 2. otherwise catalog hits for the supplied languages, input order
//!    preserved, unknown languages contributing nothing;
//! 3. otherwise the default matcher alone.
//!
//! The result is never empty: every commit can be classified.

use super::matcher::{self, MatcherSet, TestMatcher};

/// Resolve the matcher set for one classification run
///
/// `custom_pattern` is the raw pattern from repository configuration, if
/// any; `languages` is the best-effort language list, most-used first.
#[must_use]
pub fn resolve(custom_pattern: Option<&str>, languages: &[String]) -> MatcherSet {
    custom_strategy(custom_pattern)
        .or_else(|| language_strategy(languages))
        .unwrap_or_else(default_strategy)
}

/// Strategy 1: explicit repository configuration
///
/// Not applicable when the pattern is absent, empty, or fails to compile;
/// degrading to language inference is a first-class branch, not an error.
fn custom_strategy(custom_pattern: Option<&str>) -> Option<MatcherSet> {
    let matcher = TestMatcher::new(custom_pattern?)?;
    Some(MatcherSet::new(vec![matcher]))
}

/// Strategy 2: language-aware catalog lookup
///
/// Not applicable when no supplied language has a catalog entry.
fn language_strategy(languages: &[String]) -> Option<MatcherSet> {
    let matchers: Vec<TestMatcher> = languages
        .iter()
        .filter_map(|lang| matcher::language_matcher(lang).cloned())
        .collect();

    if matchers.is_empty() {
        None
    } else {
        Some(MatcherSet::new(matchers))
    }
}

/// Strategy 3: the permissive language-independent fallback
fn default_strategy() -> MatcherSet {
    MatcherSet::new(vec![matcher::default_matcher().clone()])
}
