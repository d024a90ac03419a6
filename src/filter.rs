//! Exclusion filter.
//!
//! Applied exactly once, after every candidate directory has been
//! searched, so exclusions never influence traversal, only which of the
//! accumulated results survive.

use glob::{MatchOptions, Pattern};
use std::path::{Path, PathBuf};

/// Drop every result that matches one of `except`, preserving discovery
/// order. Patterns match by exact string equality or shell glob; a
/// malformed pattern matches nothing.
pub(crate) fn apply_exclusions(results: Vec<PathBuf>, except: &[String]) -> Vec<PathBuf> {
    if except.is_empty() {
        return results;
    }

    results
        .into_iter()
        .filter(|path| !except.iter().any(|pattern| matches(pattern, path)))
        .collect()
}

fn matches(pattern: &str, path: &Path) -> bool {
    let text = path.to_string_lossy();
    if pattern == text {
        return true;
    }
    // Shell-style matching: a single `*` never crosses a path separator.
    let options = MatchOptions {
        require_literal_separator: true,
        ..MatchOptions::default()
    };
    Pattern::new(pattern)
        .map(|p| p.matches_with(&text, options))
        .unwrap_or(false)
}
