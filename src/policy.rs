//! Platform executability policy.
//!
//! Each platform has its own notion of "executable by name": a seed set of
//! file extensions that qualify a file without consulting permission bits,
//! and a syntax for environment-variable references embedded in PATH
//! entries (`%VAR%` on Windows, `$VAR`/`${VAR}` elsewhere). The
//! [`ExecutablePolicy`] trait captures that knowledge behind one seam so
//! the resolver itself stays platform-independent; [`HostPolicy`] is the
//! implementation for the build platform.

use std::path::Path;

/// Platform knowledge the match engine needs: executable extensions,
/// environment expansion, and the native executability check.
///
/// All operations are pure functions of the process environment at call
/// time; none of them mutate anything.
pub trait ExecutablePolicy: Send + Sync {
    /// Seed set of extensions that qualify a file as executable by name.
    ///
    /// An empty string entry means "no extension is required".
    fn default_extensions(&self) -> &[String];

    /// Substitute environment-variable references embedded in `text`.
    ///
    /// References that cannot be resolved are left unchanged in the
    /// output; expansion never fails.
    fn expand(&self, text: &str) -> String;

    /// Whether the filesystem itself reports `path` as executable
    /// (permission bits on Unix; always false on Windows, where
    /// executability is a property of the extension).
    fn is_executable(&self, path: &Path) -> bool;
}

/// Extensions considered executable on Unix-like systems. The empty entry
/// qualifies extension-less files, the common case for Unix binaries.
#[cfg(not(windows))]
const UNIX_EXTENSIONS: &[&str] = &[".bin", ".pkg", ".sh", "", ".bash", ".zsh", ".command", ".run"];

/// Fallback extensions on Windows when `PATHEXT` is unset or empty.
#[cfg(windows)]
const WINDOWS_EXTENSIONS: &[&str] = &[".exe", ".cmd", ".com", ".bat"];

/// [`ExecutablePolicy`] for the platform this crate was built for.
///
/// On Windows the extension seed is read from the `PATHEXT` environment
/// variable at construction time (lowercased), falling back to
/// `.exe,.cmd,.com,.bat` when that variable is unset or empty.
#[derive(Debug)]
pub struct HostPolicy {
    extensions: Vec<String>,
}

impl HostPolicy {
    pub fn new() -> Self {
        Self {
            extensions: seed_extensions(),
        }
    }
}

impl Default for HostPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl ExecutablePolicy for HostPolicy {
    fn default_extensions(&self) -> &[String] {
        &self.extensions
    }

    fn expand(&self, text: &str) -> String {
        #[cfg(windows)]
        {
            expand_percent(text)
        }
        #[cfg(not(windows))]
        {
            expand_posix(text)
        }
    }

    fn is_executable(&self, path: &Path) -> bool {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::metadata(path)
                .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
                .unwrap_or(false)
        }
        #[cfg(not(unix))]
        {
            let _ = path;
            false
        }
    }
}

#[cfg(not(windows))]
fn seed_extensions() -> Vec<String> {
    UNIX_EXTENSIONS.iter().map(|e| e.to_string()).collect()
}

#[cfg(windows)]
fn seed_extensions() -> Vec<String> {
    let from_pathext: Vec<String> = std::env::var("PATHEXT")
        .unwrap_or_default()
        .split(';')
        .filter(|e| !e.is_empty())
        .map(|e| e.to_ascii_lowercase())
        .collect();

    if from_pathext.is_empty() {
        WINDOWS_EXTENSIONS.iter().map(|e| e.to_string()).collect()
    } else {
        from_pathext
    }
}

/// Expand `$VAR` and `${VAR}` references. Unresolvable references are
/// copied through unchanged.
#[cfg(any(not(windows), test))]
fn expand_posix(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'$' && i + 1 < bytes.len() {
            if bytes[i + 1] == b'{' {
                if let Some(close) = text[i + 2..].find('}') {
                    let name = &text[i + 2..i + 2 + close];
                    if let Ok(value) = std::env::var(name) {
                        out.push_str(&value);
                        i += close + 3;
                        continue;
                    }
                }
            } else {
                let start = i + 1;
                let mut end = start;
                while end < bytes.len()
                    && (bytes[end].is_ascii_alphanumeric() || bytes[end] == b'_')
                {
                    end += 1;
                }
                if end > start {
                    if let Ok(value) = std::env::var(&text[start..end]) {
                        out.push_str(&value);
                        i = end;
                        continue;
                    }
                }
            }
        }

        if let Some(ch) = text[i..].chars().next() {
            out.push(ch);
            i += ch.len_utf8();
        } else {
            break;
        }
    }

    out
}

/// Expand `%VAR%` references. Unresolvable or unterminated references are
/// copied through unchanged.
#[cfg(any(windows, test))]
fn expand_percent(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find('%') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        match after.find('%') {
            Some(close) => {
                let name = &after[..close];
                match std::env::var(name) {
                    Ok(value) if !name.is_empty() => out.push_str(&value),
                    _ => {
                        out.push('%');
                        out.push_str(name);
                        out.push('%');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push('%');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
