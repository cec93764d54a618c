//! Glob filtering of resolved paths.
//!
//! Patterns are matched against the full resolved path, e.g.
//! `s3://logs-bucket/*.zst`. A path passes if it matches ANY pattern;
//! an empty filter passes everything.
//!
//! # Pattern Syntax
//!
//! - `*` matches any sequence of characters, including `/`
//! - `?` matches any single character
//! - `[abc]` matches any character in the brackets
//! - `[!abc]` matches any character not in the brackets

use glob::Pattern;
use qp_error::ConfigError;

/// A compiled set of path patterns with OR logic.
#[derive(Debug, Clone, Default)]
pub struct PathFilter {
    patterns: Vec<Pattern>,
}

impl PathFilter {
    /// Compile a filter from glob patterns.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPathFilter`] for the first pattern
    /// that does not compile.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self, ConfigError> {
        let mut compiled = Vec::with_capacity(patterns.len());
        for pattern in patterns {
            let pattern = pattern.as_ref();
            compiled.push(Pattern::new(pattern).map_err(|e| ConfigError::InvalidPathFilter {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })?);
        }

        Ok(Self { patterns: compiled })
    }

    /// A filter that accepts every path.
    pub fn match_all() -> Self {
        Self::default()
    }

    /// Check if a path matches any of the patterns.
    pub fn matches(&self, path: &str) -> bool {
        // Empty patterns matches everything
        if self.patterns.is_empty() {
            return true;
        }
        self.patterns.iter().any(|p| p.matches(path))
    }

    /// Returns true if no patterns are configured.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Get the pattern strings.
    pub fn patterns(&self) -> Vec<&str> {
        self.patterns.iter().map(|p| p.as_str()).collect()
    }
}
