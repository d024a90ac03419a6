//! Candidate-directory enumeration.
//!
//! Splits the `PATH` environment variable on the platform separator and
//! appends any configured alternate directories, in that order. The list
//! is deliberately not deduplicated (matches are deduplicated downstream)
//! and entries are not checked for existence (missing directories simply
//! contribute no matches).

use crate::ResolverConfig;
use std::ffi::OsStr;
use std::path::PathBuf;

/// Enumerate every directory a search should visit, in search order:
/// PATH entries first, then alternate directories.
pub(crate) fn candidate_directories(config: &ResolverConfig) -> Vec<PathBuf> {
    from_path_var(std::env::var_os("PATH").as_deref(), config)
}

/// Enumeration over an explicit PATH value, split out for deterministic
/// tests that should not depend on the process environment.
pub(crate) fn from_path_var(path_var: Option<&OsStr>, config: &ResolverConfig) -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = match path_var {
        Some(value) => std::env::split_paths(value).collect(),
        None => Vec::new(),
    };
    dirs.extend(config.alternate_dirs().iter().cloned());
    dirs
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn joined(entries: &[&str]) -> OsString {
        std::env::join_paths(entries.iter().map(PathBuf::from)).unwrap()
    }

    #[test]
    fn test_splits_on_platform_separator() {
        let path = joined(&["/usr/bin", "/usr/local/bin"]);
        let dirs = from_path_var(Some(&path), &ResolverConfig::default());
        assert_eq!(
            dirs,
            vec![PathBuf::from("/usr/bin"), PathBuf::from("/usr/local/bin")]
        );
    }

    #[test]
    fn test_alternates_appended_after_path_entries() {
        let path = joined(&["/usr/bin"]);
        let mut config = ResolverConfig::default();
        config.add_alternate_dir("/opt/tools");
        config.add_alternate_dir("/opt/more");

        let dirs = from_path_var(Some(&path), &config);
        assert_eq!(
            dirs,
            vec![
                PathBuf::from("/usr/bin"),
                PathBuf::from("/opt/tools"),
                PathBuf::from("/opt/more"),
            ]
        );
    }

    #[test]
    fn test_missing_path_var_yields_only_alternates() {
        let mut config = ResolverConfig::default();
        config.add_alternate_dir("/opt/tools");
        let dirs = from_path_var(None, &config);
        assert_eq!(dirs, vec![PathBuf::from("/opt/tools")]);
    }

    #[test]
    fn test_duplicates_are_not_removed() {
        let path = joined(&["/usr/bin", "/usr/bin"]);
        let dirs = from_path_var(Some(&path), &ResolverConfig::default());
        assert_eq!(dirs.len(), 2);
    }
}
