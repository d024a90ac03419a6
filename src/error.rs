//! Error types for executable resolution.
//!
//! Only two conditions are ever surfaced to callers: the search completed
//! with zero results, or the search deadline elapsed first. Everything else
//! (malformed glob patterns, failed environment expansion, unreadable
//! directories) degrades to "this directory contributed nothing" and is
//! absorbed inside the match engine.

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while resolving an executable name.
///
/// # Example
///
/// ```rust,no_run
/// use whereabouts::{find, WhereError};
///
/// match find("definitely_not_a_real_tool_xyz123") {
///     Ok(paths) => println!("found: {:?}", paths),
///     Err(WhereError::NotFound { name }) => println!("{} is not on PATH", name),
///     Err(WhereError::Timeout { duration }) => println!("gave up after {:?}", duration),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WhereError {
    /// No candidate directory yielded a qualifying match after exclusions.
    ///
    /// This also covers the case where every match was removed by an
    /// exclusion pattern; the resolver does not distinguish the two.
    #[error("executable not found: {name}")]
    NotFound {
        /// The (base) executable name that was searched for.
        name: String,
    },

    /// The configured deadline elapsed before every candidate directory was
    /// examined. Partial results are discarded, never returned.
    #[error("search timed out after {duration:?}")]
    Timeout {
        /// The timeout the search was configured with.
        duration: Duration,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let error = WhereError::NotFound {
            name: "node".to_string(),
        };
        assert_eq!(error.to_string(), "executable not found: node");
    }

    #[test]
    fn test_timeout_display() {
        let error = WhereError::Timeout {
            duration: Duration::from_secs(5),
        };
        assert!(error.to_string().contains("timed out"));
        assert!(error.to_string().contains("5s"));
    }

    #[test]
    fn test_error_equality() {
        let a = WhereError::NotFound {
            name: "node".to_string(),
        };
        let b = WhereError::NotFound {
            name: "node".to_string(),
        };
        assert_eq!(a, b);
        assert_ne!(
            a,
            WhereError::Timeout {
                duration: Duration::from_secs(5)
            }
        );
    }
}
