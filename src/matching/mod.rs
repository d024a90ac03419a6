//! Match engine.
//!
//! One candidate directory at a time, three ways to find a hit:
//!
//! - a direct check of `dir/name`,
//! - a glob pass (`name.*`, optionally through `**`) when the name has
//!   no extension,
//! - a symlink pass that scans the resolved form of a symlinked
//!   directory and re-maps hits onto the searched path.
//!
//! All three feed the same accept gate and the same ordered,
//! deduplicating [`MatchSet`], so a path found by several passes is
//! recorded once, in discovery order.

mod glob_pass;
mod set;
mod symlink_pass;

pub(crate) use set::MatchSet;

use crate::{ExecutablePolicy, ResolverConfig, SearchOptions};
use glob::Pattern;
use std::path::Path;
use tracing::trace;

/// Everything a matching pass needs to evaluate candidates: the (base)
/// executable name, the per-query options, the resolver configuration,
/// and the platform policy.
pub(crate) struct MatchContext<'a> {
    pub(crate) name: &'a str,
    pub(crate) options: &'a SearchOptions,
    pub(crate) config: &'a ResolverConfig,
    pub(crate) policy: &'a dyn ExecutablePolicy,
}

/// Search one candidate directory, recording accepted matches in `set`.
///
/// The raw directory string has environment references expanded first;
/// the direct check always runs, the glob and symlink passes only when
/// the searched name carries no extension.
pub(crate) fn scan_directory(raw_dir: &Path, ctx: &MatchContext<'_>, set: &mut MatchSet) {
    let expanded = ctx.policy.expand(&raw_dir.to_string_lossy());
    let dir = Path::new(&expanded);

    // Direct check: existence probed on the link itself, so a broken
    // symlink still counts as present.
    let direct = dir.join(ctx.name);
    if std::fs::symlink_metadata(&direct).is_ok()
        && qualifies(ctx, &direct)
        && set.insert(direct.clone())
    {
        trace!(path = %direct.display(), "direct match accepted");
    }

    if !has_extension(ctx.name) {
        glob_pass::run(dir, &direct, ctx, set);
        if ctx.options.follow_symlinks {
            symlink_pass::run(dir, ctx, set);
        }
    }
}

/// The shared accept gate: a candidate qualifies when the filesystem
/// reports it executable, or (unless extension checking is disabled) its
/// extension is in the merged executable-extension set.
pub(crate) fn qualifies(ctx: &MatchContext<'_>, path: &Path) -> bool {
    if ctx.policy.is_executable(path) {
        return true;
    }
    if ctx.config.extension_checking_disabled() {
        return false;
    }
    let ext = file_extension(path);
    in_extension_set(ctx.policy.default_extensions(), &ext)
        || in_extension_set(ctx.config.extra_extensions(), &ext)
}

/// Whether `name` carries an extension: a dot after the first character.
/// A leading dot (hidden files) does not count.
pub(crate) fn has_extension(name: &str) -> bool {
    name.char_indices().any(|(i, c)| c == '.' && i > 0)
}

/// The extension of the final path component, including the dot
/// (`".sh"`), or the empty string when there is none. A leading dot does
/// not start an extension.
fn file_extension(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    match name.char_indices().rfind(|&(i, c)| c == '.' && i > 0) {
        Some((i, _)) => name[i..].to_string(),
        None => String::new(),
    }
}

/// Membership test for the executable-extension set: exact equality or
/// glob-pattern entry.
fn in_extension_set(set: &[String], ext: &str) -> bool {
    set.iter().any(|entry| {
        entry == ext
            || Pattern::new(entry)
                .map(|p| p.matches(ext))
                .unwrap_or(false)
    })
}
