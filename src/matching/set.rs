//! Ordered, deduplicating result set.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Accumulates matches in discovery order while guaranteeing that the
/// same absolute path is never recorded twice, regardless of which pass
/// (direct, glob, symlink) produced it.
#[derive(Debug, Default)]
pub(crate) struct MatchSet {
    ordered: Vec<PathBuf>,
    seen: HashSet<PathBuf>,
}

impl MatchSet {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Record a match. Returns `false` if the path was already present.
    pub(crate) fn insert(&mut self, path: PathBuf) -> bool {
        if self.seen.contains(&path) {
            return false;
        }
        self.seen.insert(path.clone());
        self.ordered.push(path);
        true
    }

    /// Whether the path has already been recorded; used by later passes
    /// to skip re-evaluation.
    pub(crate) fn contains(&self, path: &Path) -> bool {
        self.seen.contains(path)
    }

    pub(crate) fn into_vec(self) -> Vec<PathBuf> {
        self.ordered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_preserves_order() {
        let mut set = MatchSet::new();
        assert!(set.insert(PathBuf::from("/b/tool")));
        assert!(set.insert(PathBuf::from("/a/tool")));
        assert_eq!(
            set.into_vec(),
            vec![PathBuf::from("/b/tool"), PathBuf::from("/a/tool")]
        );
    }

    #[test]
    fn test_duplicate_insert_rejected() {
        let mut set = MatchSet::new();
        assert!(set.insert(PathBuf::from("/a/tool")));
        assert!(!set.insert(PathBuf::from("/a/tool")));
        assert_eq!(set.into_vec().len(), 1);
    }

    #[test]
    fn test_contains() {
        let mut set = MatchSet::new();
        set.insert(PathBuf::from("/a/tool"));
        assert!(set.contains(Path::new("/a/tool")));
        assert!(!set.contains(Path::new("/b/tool")));
    }
}
