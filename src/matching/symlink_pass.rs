//! Symlink-remap matcher strategy.
//!
//! Glob evaluation does not traverse through symlinked intermediate
//! directories on all platforms, so when a search opts into
//! `follow_symlinks` this pass resolves the candidate directory, lists
//! the resolved directory's entries directly, and re-maps every accepted
//! entry back onto the original (symlinked) path: callers should see
//! results under the directory they searched, not its target.

use super::{qualifies, MatchContext, MatchSet};
use glob::Pattern;
use std::path::Path;
use tracing::trace;

/// Scan the symlink-resolved form of `dir`, if it differs from `dir`
/// itself, and record matches remapped onto `dir`.
pub(crate) fn run(dir: &Path, ctx: &MatchContext<'_>, set: &mut MatchSet) {
    let Ok(original) = std::path::absolute(dir) else {
        return;
    };
    let Ok(resolved) = std::fs::canonicalize(dir) else {
        return;
    };
    if resolved == original {
        return;
    }

    let Ok(pattern) = Pattern::new(&format!("{}.*", ctx.name)) else {
        return;
    };
    let Ok(entries) = std::fs::read_dir(&resolved) else {
        return;
    };

    for entry in entries.flatten() {
        if entry.file_type().map(|t| t.is_dir()).unwrap_or(false) && !ctx.options.recursive {
            continue;
        }
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        if !pattern.matches(name) {
            continue;
        }

        // Accept against the resolved file, report under the searched path.
        let remapped = dir.join(name);
        if set.contains(&remapped) {
            continue;
        }
        if qualifies(ctx, &entry.path()) {
            trace!(path = %remapped.display(), "symlink match accepted");
            set.insert(remapped);
        }
    }
}
