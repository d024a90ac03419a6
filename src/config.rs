//! Process-lifetime resolver configuration.
//!
//! Unlike [`SearchOptions`](crate::SearchOptions), which is scoped to a
//! single query, this configuration is meant to be built once at startup
//! and then read by every search a [`Resolver`](crate::Resolver) runs:
//! extra directories appended to the PATH list, extra executable
//! extensions, and the switch that disables extension checking entirely.

use std::path::PathBuf;

/// Configuration shared by every search a resolver runs.
///
/// The typical pattern is "configure once, query many times": build the
/// configuration at startup, hand it to a [`Resolver`](crate::Resolver),
/// and leave it alone while searches are in flight.
///
/// # Example
///
/// ```rust,no_run
/// use whereabouts::{Resolver, ResolverConfig};
///
/// let mut config = ResolverConfig::default();
/// config.add_alternate_dir("/opt/tools");
/// config.add_extension(".ps1");
///
/// let resolver = Resolver::new(config);
/// let _ = resolver.find("lint", Default::default());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ResolverConfig {
    /// Extra search directories appended after the PATH-derived list, in
    /// insertion order.
    alternate_dirs: Vec<PathBuf>,

    /// Extensions merged with the platform seed set when deciding whether
    /// a file qualifies as executable by name.
    extra_extensions: Vec<String>,

    /// When set, extension membership never qualifies a file; only the
    /// platform-native executability check applies.
    extension_checking_disabled: bool,
}

impl ResolverConfig {
    /// Create an empty configuration (no alternates, no extra extensions,
    /// extension checking enabled).
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a directory to search after all PATH entries.
    ///
    /// Duplicate or non-existent directories are harmless: matches are
    /// deduplicated downstream and missing directories contribute nothing.
    pub fn add_alternate_dir(&mut self, dir: impl Into<PathBuf>) -> &mut Self {
        self.alternate_dirs.push(dir.into());
        self
    }

    /// Add an extension (e.g. `".ps1"`) to the executable-extension set.
    ///
    /// Entries may also be glob patterns; an empty string means "no
    /// extension required".
    pub fn add_extension(&mut self, ext: impl Into<String>) -> &mut Self {
        self.extra_extensions.push(ext.into());
        self
    }

    /// Disable extension-based qualification for every subsequent search.
    ///
    /// With checking disabled, only the platform-native executability
    /// check (permission bits on Unix) can qualify a file.
    pub fn disable_extension_checking(&mut self) -> &mut Self {
        self.extension_checking_disabled = true;
        self
    }

    pub(crate) fn alternate_dirs(&self) -> &[PathBuf] {
        &self.alternate_dirs
    }

    pub(crate) fn extra_extensions(&self) -> &[String] {
        &self.extra_extensions
    }

    pub(crate) fn extension_checking_disabled(&self) -> bool {
        self.extension_checking_disabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_empty() {
        let config = ResolverConfig::new();
        assert!(config.alternate_dirs().is_empty());
        assert!(config.extra_extensions().is_empty());
        assert!(!config.extension_checking_disabled());
    }

    #[test]
    fn test_add_alternate_dir_preserves_order() {
        let mut config = ResolverConfig::new();
        config.add_alternate_dir("/opt/tools");
        config.add_alternate_dir("/opt/more");
        assert_eq!(
            config.alternate_dirs(),
            &[PathBuf::from("/opt/tools"), PathBuf::from("/opt/more")]
        );
    }

    #[test]
    fn test_add_extension() {
        let mut config = ResolverConfig::new();
        config.add_extension(".ps1").add_extension(".nu");
        assert_eq!(config.extra_extensions(), &[".ps1", ".nu"]);
    }

    #[test]
    fn test_disable_extension_checking() {
        let mut config = ResolverConfig::new();
        config.disable_extension_checking();
        assert!(config.extension_checking_disabled());
    }
}
