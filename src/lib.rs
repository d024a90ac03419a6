//! # whereabouts
//!
//! Cross-platform executable path resolution over PATH-like environment
//! variables, mimicking shell command lookup (`which`/`where`).
//!
//! The crate resolves an executable name to one or more absolute paths by
//! walking the directories in `PATH` (plus configured alternates),
//! applying per-platform executability rules, optional glob/recursive
//! matching, deduplication, exclusion filters, and a search deadline. It
//! does not launch anything, cache anything, or watch the filesystem.
//!
//! ## Features
//!
//! - [`Resolver`] facade with `find`, `find_first`, `find_all`, and
//!   `find_except` queries
//! - [`SearchOptions`] per-query configuration (recursion, symlink
//!   handling, exclusion patterns, timeout)
//! - [`ResolverConfig`] process-lifetime configuration (alternate
//!   directories, extra executable extensions)
//! - [`ExecutablePolicy`] seam for per-platform executability rules
//! - [`FallbackLocator`] seam for a last-resort external locator
//!
//! ## Example
//!
//! ```rust,no_run
//! use whereabouts::{Resolver, ResolverConfig, SearchOptions};
//!
//! let mut config = ResolverConfig::default();
//! config.add_alternate_dir("/opt/tools");
//!
//! let resolver = Resolver::new(config);
//! let paths = resolver.find("node", SearchOptions::default())?;
//! println!("first match: {}", paths[0].display());
//! # Ok::<(), whereabouts::WhereError>(())
//! ```

mod config;
mod error;
mod fallback;
mod filter;
mod matching;
mod options;
mod paths;
mod policy;
mod resolver;

pub use config::ResolverConfig;
pub use error::WhereError;
pub use fallback::FallbackLocator;
#[cfg(windows)]
pub use fallback::SystemLocator;
pub use options::SearchOptions;
pub use policy::{ExecutablePolicy, HostPolicy};
pub use resolver::Resolver;

use std::path::PathBuf;

/// Resolve `executable` with a default resolver and default options.
///
/// Convenience wrapper around [`Resolver::find`] for one-off lookups;
/// build a [`Resolver`] once instead when querying repeatedly.
///
/// # Example
///
/// ```rust,no_run
/// let paths = whereabouts::find("node")?;
/// println!("{}", paths[0].display());
/// # Ok::<(), whereabouts::WhereError>(())
/// ```
pub fn find(executable: &str) -> Result<Vec<PathBuf>, WhereError> {
    Resolver::default().find(executable, SearchOptions::default())
}
