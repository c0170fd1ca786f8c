//! Test file-name matchers
//!
//! A `TestMatcher` is one compiled pattern with an unanchored search
//! predicate. The catalog maps lower-cased language names to canonical
//! matchers; a permissive default matcher guarantees classification never
//! runs with zero matchers.
//!
//! The catalog is an immutable process-wide table initialized once; no
//! runtime registration exists.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

/// A single compiled file-name pattern
#[derive(Debug, Clone)]
pub struct TestMatcher {
    regex: Regex,
}

impl TestMatcher {
    /// Compile a matcher from a user-supplied pattern
    ///
    /// Fails soft: an empty or non-compiling pattern yields `None`, which
    /// callers treat as "no usable matcher" rather than an error.
    #[must_use]
    pub fn new(pattern: &str) -> Option<Self> {
        if pattern.trim().is_empty() {
            return None;
        }
        match Regex::new(pattern) {
            Ok(regex) => Some(Self { regex }),
            Err(err) => {
                log::warn!("ignoring invalid test pattern {pattern:?}: {err}");
                None
            },
        }
    }

    /// Compile a catalog pattern known to be valid
    fn canonical(pattern: &str) -> Self {
        Self {
            regex: Regex::new(pattern).expect("catalog patterns are static and compile"),
        }
    }

    /// Unanchored search: true iff the pattern matches anywhere in the path
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }

    /// The pattern source this matcher was compiled from
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

/// Canonical language matchers, keyed by lower-cased language name
static CATALOG: LazyLock<HashMap<&'static str, TestMatcher>> = LazyLock::new(|| {
    HashMap::from([
        ("java", TestMatcher::canonical(r"(Test|TestCase|IT)\.java$")),
        ("go", TestMatcher::canonical(r"_test\.go$")),
        ("javascript", TestMatcher::canonical(r"\.(test|spec)\.js$")),
        ("typescript", TestMatcher::canonical(r"\.(test|spec)\.tsx?$")),
        ("python", TestMatcher::canonical(r"((^|/)test[^/]*|[^/]*test)\.py$")),
        ("groovy", TestMatcher::canonical(r"(Test|TestCase|IT)\.groovy$")),
    ])
});

/// Language-independent fallback: any path segment containing a
/// case-insensitive "test" token. Intentionally permissive; kept as-is for
/// behavior compatibility with existing repositories.
static DEFAULT: LazyLock<TestMatcher> =
    LazyLock::new(|| TestMatcher::canonical(r"(?i)(^|/)[^/]*test[^/]*(/|$)"));

/// Look up the canonical matcher for a language (case-insensitive)
///
/// Unknown languages yield `None` and are silently skipped by callers.
#[must_use]
pub fn language_matcher(language: &str) -> Option<&'static TestMatcher> {
    CATALOG.get(language.to_lowercase().as_str())
}

/// The language-independent default matcher
#[must_use]
pub fn default_matcher() -> &'static TestMatcher {
    &DEFAULT
}

/// The ordered set of matchers governing one classification run
///
/// Insertion order follows the input language order; duplicates are
/// harmless. Resolution guarantees the set is never empty.
#[derive(Debug, Clone)]
pub struct MatcherSet {
    matchers: Vec<TestMatcher>,
}

impl MatcherSet {
    /// Build a set from matchers, preserving order
    #[must_use]
    pub const fn new(matchers: Vec<TestMatcher>) -> Self {
        Self { matchers }
    }

    /// Number of matchers in the set
    #[must_use]
    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    /// Whether the set holds no matchers
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// True iff any matcher in the set matches the file name
    #[must_use]
    pub fn matches_any(&self, name: &str) -> bool {
        self.matchers.iter().any(|m| m.matches(name))
    }

    /// Iterate the matchers in order
    pub fn iter(&self) -> impl Iterator<Item = &TestMatcher> {
        self.matchers.iter()
    }
}
