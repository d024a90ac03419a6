//! Glob matcher strategy.
//!
//! Runs whenever the searched name has no extension: a `name.*` pattern is
//! evaluated under the candidate directory (through `**` when the search
//! is recursive) to pick up extension variants the direct check cannot
//! see, e.g. `node.exe` alongside `node`. Glob failures are local to the
//! directory and never abort the search.

use super::{qualifies, MatchContext, MatchSet};
use std::path::Path;
use tracing::trace;

/// Evaluate the glob pattern for `ctx.name` under `dir`, feeding accepted
/// matches through the shared dedup gate. `direct` is the step-one direct
/// check path; a glob match equal to it is accepted unconditionally, which
/// covers extension-less hits.
pub(crate) fn run(dir: &Path, direct: &Path, ctx: &MatchContext<'_>, set: &mut MatchSet) {
    let file_pattern = format!("{}.*", ctx.name);
    let root = if ctx.options.recursive {
        dir.join("**")
    } else {
        dir.to_path_buf()
    };

    let pattern = root.join(&file_pattern);
    let Some(pattern) = pattern.to_str() else {
        return;
    };

    // A malformed pattern means this directory contributes no glob
    // matches; it is not fatal for the whole search.
    let Ok(entries) = glob::glob(pattern) else {
        return;
    };

    for entry in entries.flatten() {
        if set.contains(&entry) {
            continue;
        }
        if qualifies(ctx, &entry) || entry == direct {
            trace!(path = %entry.display(), "glob match accepted");
            set.insert(entry);
        }
    }
}
