//! Router configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RouterError};

/// Options controlling how a [`Router`](crate::Router) treats patterns.
///
/// Deserializable so it can live in an application's config file; missing
/// fields take their defaults.
///
/// ```
/// use trie_router::RouterConfig;
///
/// let config = RouterConfig::from_json(r#"{ "strict_patterns": false }"#).unwrap();
/// assert!(!config.strict_patterns);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Reject malformed patterns at registration instead of truncating them.
    pub strict_patterns: bool,
    /// Log every resolve outcome at debug level.
    pub trace_resolve: bool,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            strict_patterns: true,
            trace_resolve: true,
        }
    }
}

impl RouterConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether malformed patterns are rejected.
    #[must_use]
    pub const fn strict_patterns(mut self, strict: bool) -> Self {
        self.strict_patterns = strict;
        self
    }

    /// Sets whether resolve outcomes are logged.
    #[must_use]
    pub const fn trace_resolve(mut self, enabled: bool) -> Self {
        self.trace_resolve = enabled;
        self
    }

    /// Loads a configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::InvalidConfig`] if the document is not valid JSON
    /// or a field has the wrong type.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| RouterError::InvalidConfig(e.to_string()))
    }
}
