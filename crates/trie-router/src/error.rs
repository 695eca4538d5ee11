//! Error types for routing.

use thiserror::Error;

/// Router-specific errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    /// No route matched the request.
    ///
    /// Covers an unknown method, a trie walk that dead-ends, and a walk that
    /// stops on a node with no registered pattern.
    #[error("no route matched: {method} {path}")]
    NotFound { method: String, path: String },

    /// A pattern was rejected at registration time.
    #[error("invalid path pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// Router configuration could not be loaded.
    #[error("invalid router configuration: {0}")]
    InvalidConfig(String),
}

impl RouterError {
    pub(crate) fn not_found(method: &str, path: &str) -> Self {
        Self::NotFound {
            method: method.to_string(),
            path: path.to_string(),
        }
    }

    pub(crate) fn invalid_pattern(pattern: &str, reason: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.into(),
        }
    }

    /// Returns true for the expected "no route" outcome.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type alias for router operations.
pub type Result<T> = std::result::Result<T, RouterError>;
