//! Per-query search options.
//!
//! This module provides the [`SearchOptions`] struct for configuring a
//! single resolution query: result cardinality, recursive descent,
//! symlink handling, exclusion patterns, and the search deadline.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default search deadline applied when `timeout` is unset or zero.
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Configuration options for a single search.
///
/// Options are immutable per query. Every field has a stated default, and
/// unset/zero values are normalized to those defaults before the search
/// runs.
///
/// # Default Behavior
///
/// - `all`: `false`; callers typically want the first hit. The full match
///   set is always computed either way, so exclusions apply fairly across
///   every candidate; `all` only documents intended consumption.
/// - `recursive`: `true`; glob matching descends into subdirectories.
/// - `follow_symlinks`: `false`; no secondary pass through symlinked
///   directories.
/// - `except`: empty; nothing is excluded.
/// - `timeout`: 5 seconds. A zero timeout always normalizes to the
///   default, never to "no timeout".
///
/// # Example
///
/// ```rust
/// use whereabouts::SearchOptions;
/// use std::time::Duration;
///
/// // Defaults
/// let opts = SearchOptions::default();
/// assert!(opts.recursive);
///
/// // Every match, with a longer deadline
/// let opts = SearchOptions {
///     all: true,
///     timeout: Duration::from_secs(10),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Return every match instead of just the first.
    #[serde(default)]
    pub all: bool,

    /// Descend into subdirectories of each candidate directory when glob
    /// matching.
    #[serde(default = "default_true")]
    pub recursive: bool,

    /// Run a secondary pass that resolves symlinked candidate directories
    /// and re-maps matches back onto the symlinked path.
    #[serde(default)]
    pub follow_symlinks: bool,

    /// Exclusion patterns applied after matching completes. Each entry is
    /// matched against result paths by exact equality or shell glob.
    #[serde(default)]
    pub except: Vec<String>,

    /// Deadline for the whole search, checked before each candidate
    /// directory. Zero resolves to the 5-second default.
    #[serde(default)]
    pub timeout: Duration,
}

fn default_true() -> bool {
    true
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            all: false,
            recursive: true,
            follow_symlinks: false,
            except: Vec::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl SearchOptions {
    /// Return a copy with defaults applied to unset/zero fields.
    ///
    /// Currently only `timeout` needs normalization: a zero duration is
    /// replaced with the 5-second default.
    pub(crate) fn normalized(&self) -> Self {
        let mut opts = self.clone();
        if opts.timeout.is_zero() {
            opts.timeout = DEFAULT_TIMEOUT;
        }
        opts
    }
}
