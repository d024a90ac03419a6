//! Best-effort fallback locator.
//!
//! When the filesystem search finishes with zero results, the resolver
//! may consult one last collaborator: the platform's own command-locator
//! utility. It is modeled as a capability trait so the core resolver
//! stays platform-independent and testable without spawning real
//! subprocesses; the system implementation shells out to `where` on
//! Windows.

use std::path::PathBuf;

/// One-operation capability: locate an executable by name, best effort.
///
/// Implementations must absorb their own failures: a locator that
/// cannot answer returns `None`, never an error.
pub trait FallbackLocator: Send + Sync {
    fn locate(&self, name: &str) -> Option<PathBuf>;
}

/// Locator backed by the native `where` utility (Windows).
///
/// Output parsing takes the first line of stdout; any spawn failure,
/// non-zero exit, or empty output collapses to `None`.
#[cfg(windows)]
#[derive(Debug, Default)]
pub struct SystemLocator;

#[cfg(windows)]
impl FallbackLocator for SystemLocator {
    fn locate(&self, name: &str) -> Option<PathBuf> {
        let output = std::process::Command::new("where").arg(name).output().ok()?;
        if !output.status.success() {
            return None;
        }
        let stdout = String::from_utf8_lossy(&output.stdout);
        let first = stdout.lines().next()?.trim();
        if first.is_empty() {
            return None;
        }
        Some(PathBuf::from(first))
    }
}

/// The locator a default-constructed resolver carries: the system
/// locator on Windows, nothing elsewhere.
pub(crate) fn system_fallback() -> Option<Box<dyn FallbackLocator>> {
    #[cfg(windows)]
    {
        Some(Box::new(SystemLocator))
    }
    #[cfg(not(windows))]
    {
        None
    }
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
    fn test_locator_is_object_safe() {
        let hit: Box<dyn FallbackLocator> = Box::new(FixedLocator(Some(PathBuf::from("/x/tool"))));
        assert_eq!(hit.locate("tool"), Some(PathBuf::from("/x/tool")));

        let miss: Box<dyn FallbackLocator> = Box::new(FixedLocator(None));
        assert_eq!(miss.locate("tool"), None);
    }

    #[cfg(not(windows))]
    #[test]
    fn test_no_system_fallback_off_windows() {
        assert!(system_fallback().is_none());
    }
}
