//! Resolver facade.
//!
//! Ties the pieces together into a single timeout-bounded query: path
//! enumeration, per-directory matching, exclusion filtering, and the
//! optional fallback locator. One [`Resolver`] is meant to be built at
//! startup and shared by every query; concurrent `find` calls are
//! independent (no query-local state is shared), while reconfiguration
//! requires `&mut self` and therefore cannot race an in-flight search.

use crate::fallback::{system_fallback, FallbackLocator};
use crate::matching::{self, MatchContext, MatchSet};
use crate::{filter, paths, ExecutablePolicy, HostPolicy, ResolverConfig, SearchOptions, WhereError};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::debug;

/// Executable path resolver.
///
/// # Example
///
/// ```rust,no_run
/// use whereabouts::{Resolver, SearchOptions};
///
/// let resolver = Resolver::default();
/// match resolver.find("node", SearchOptions::default()) {
///     Ok(paths) => println!("node lives at {:?}", paths[0]),
///     Err(e) => eprintln!("{e}"),
/// }
/// ```
pub struct Resolver {
    config: ResolverConfig,
    policy: Box<dyn ExecutablePolicy>,
    fallback: Option<Box<dyn FallbackLocator>>,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(ResolverConfig::default())
    }
}

impl Resolver {
    /// Create a resolver with the host platform policy and, on Windows,
    /// the system `where` fallback locator.
    pub fn new(config: ResolverConfig) -> Self {
        Self {
            config,
            policy: Box::new(HostPolicy::new()),
            fallback: system_fallback(),
        }
    }

    /// Replace the executability policy.
    pub fn with_policy(mut self, policy: Box<dyn ExecutablePolicy>) -> Self {
        self.policy = policy;
        self
    }

    /// Replace the fallback locator, or remove it with `None`.
    pub fn with_fallback(mut self, fallback: Option<Box<dyn FallbackLocator>>) -> Self {
        self.fallback = fallback;
        self
    }

    /// Mutable access to the shared configuration, for the
    /// "configure once, query many times" pattern.
    pub fn config_mut(&mut self) -> &mut ResolverConfig {
        &mut self.config
    }

    /// Resolve `executable` to every matching path, in PATH discovery
    /// order, deduplicated.
    ///
    /// Directory components in `executable` are stripped; only the base
    /// name is searched for. The search is bounded by
    /// [`SearchOptions::timeout`], checked before each candidate
    /// directory: on expiry the whole operation fails with
    /// [`WhereError::Timeout`] and partial results are discarded.
    ///
    /// An empty final set is always [`WhereError::NotFound`], including
    /// when every match was removed by an exclusion pattern.
    pub fn find(
        &self,
        executable: &str,
        options: SearchOptions,
    ) -> Result<Vec<PathBuf>, WhereError> {
        let options = options.normalized();
        let name = base_name(executable);
        let deadline = Instant::now() + options.timeout;

        let dirs = paths::candidate_directories(&self.config);
        debug!(name = %name, directories = dirs.len(), "searching for executable");

        let ctx = MatchContext {
            name: &name,
            options: &options,
            config: &self.config,
            policy: self.policy.as_ref(),
        };

        let mut set = MatchSet::new();
        for dir in &dirs {
            // Cooperative deadline: individual filesystem calls are not
            // cancellable, so the check sits between directories.
            if Instant::now() >= deadline {
                debug!(name = %name, "search deadline elapsed");
                return Err(WhereError::Timeout {
                    duration: options.timeout,
                });
            }
            matching::scan_directory(dir, &ctx, &mut set);
        }

        let results = filter::apply_exclusions(set.into_vec(), &options.except);
        if results.is_empty() {
            if let Some(fallback) = &self.fallback {
                if let Some(path) = fallback.locate(&name) {
                    debug!(name = %name, path = %path.display(), "fallback locator hit");
                    return Ok(vec![path]);
                }
            }
            return Err(WhereError::NotFound { name });
        }

        debug!(name = %name, matches = results.len(), "search complete");
        Ok(results)
    }

    /// Resolve `executable` to the first matching path.
    pub fn find_first(
        &self,
        executable: &str,
        options: SearchOptions,
    ) -> Result<PathBuf, WhereError> {
        let name = base_name(executable);
        self.find(executable, options)?
            .into_iter()
            .next()
            .ok_or(WhereError::NotFound { name })
    }

    /// Resolve every match of `executable`.
    pub fn find_all(&self, executable: &str) -> Result<Vec<PathBuf>, WhereError> {
        self.find(
            executable,
            SearchOptions {
                all: true,
                ..Default::default()
            },
        )
    }

    /// Resolve every match of `executable`, minus those matching the
    /// given exclusion patterns.
    pub fn find_except(
        &self,
        executable: &str,
        except: Vec<String>,
    ) -> Result<Vec<PathBuf>, WhereError> {
        self.find(
            executable,
            SearchOptions {
                all: true,
                except,
                ..Default::default()
            },
        )
    }
}

/// Strip any directory components the caller passed.
fn base_name(executable: &str) -> String {
    Path::new(executable)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| executable.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedLocator(Option<PathBuf>);

    impl FallbackLocator for FixedLocator {
        fn locate(&self, _name: &str) -> Option<PathBuf> {
            self.0.clone()
        }
    }

    #[test]
    fn test_base_name_strips_directories() {
        assert_eq!(base_name("node"), "node");
        assert_eq!(base_name("bin/node"), "node");
        assert_eq!(base_name("/usr/local/bin/node"), "node");
    }

    #[test]
    fn test_not_found_for_improbable_name() {
        let resolver = Resolver::default();
        // Extension present, so only fast direct checks run
        let result = resolver.find("whereabouts_no_such_tool.zzz", SearchOptions::default());
        assert_eq!(
            result,
            Err(WhereError::NotFound {
                name: "whereabouts_no_such_tool.zzz".to_string()
            })
        );
    }

    #[test]
    fn test_tiny_timeout_reports_timeout() {
        let resolver = Resolver::default();
        let options = SearchOptions {
            timeout: std::time::Duration::from_nanos(1),
            ..Default::default()
        };
        let result = resolver.find("whereabouts_no_such_tool.zzz", options);
        assert!(matches!(result, Err(WhereError::Timeout { .. })));
    }

    #[test]
    fn test_fallback_consulted_on_empty_result() {
        let resolver = Resolver::default().with_fallback(Some(Box::new(FixedLocator(Some(
            PathBuf::from("/somewhere/tool"),
        )))));
        let result = resolver.find("whereabouts_no_such_tool.zzz", SearchOptions::default());
        assert_eq!(result, Ok(vec![PathBuf::from("/somewhere/tool")]));
    }

    #[test]
    fn test_fallback_miss_is_not_found() {
        let resolver = Resolver::default().with_fallback(Some(Box::new(FixedLocator(None))));
        let result = resolver.find("whereabouts_no_such_tool.zzz", SearchOptions::default());
        assert!(matches!(result, Err(WhereError::NotFound { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_alternate_directory_searched() {
        use crate::matching::tests::executable;

        let dir = tempfile::tempdir().unwrap();
        executable(&dir.path().join("whereabouts_lint.sh"));

        let mut config = ResolverConfig::default();
        config.add_alternate_dir(dir.path());
        let resolver = Resolver::new(config).with_fallback(None);

        let result = resolver
            .find("whereabouts_lint", SearchOptions::default())
            .unwrap();
        assert_eq!(result, vec![dir.path().join("whereabouts_lint.sh")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_find_first_takes_discovery_order() {
        use crate::matching::tests::executable;

        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        executable(&first.path().join("whereabouts_tool.sh"));
        executable(&second.path().join("whereabouts_tool.sh"));

        let mut config = ResolverConfig::default();
        config.add_alternate_dir(first.path());
        config.add_alternate_dir(second.path());
        let resolver = Resolver::new(config);

        let path = resolver
            .find_first("whereabouts_tool", SearchOptions::default())
            .unwrap();
        assert_eq!(path, first.path().join("whereabouts_tool.sh"));
    }

    #[cfg(unix)]
    #[test]
    fn test_excluding_every_match_is_not_found() {
        use crate::matching::tests::executable;

        let dir = tempfile::tempdir().unwrap();
        executable(&dir.path().join("whereabouts_tool.sh"));

        let mut config = ResolverConfig::default();
        config.add_alternate_dir(dir.path());
        let resolver = Resolver::new(config).with_fallback(None);

        let everything = format!("{}/*", dir.path().display());
        let result = resolver.find_except("whereabouts_tool", vec![everything]);
        assert!(matches!(result, Err(WhereError::NotFound { .. })));
    }
}
