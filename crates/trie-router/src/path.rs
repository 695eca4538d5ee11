//! Path and pattern segmentation.

use std::collections::HashSet;

use tracing::debug;

use crate::error::{Result, RouterError};
use crate::request::PathParams;

/// A classified segment of a route pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSegment<'a> {
    /// A literal segment, compared by string equality.
    Literal(&'a str),
    /// A `:name` segment capturing exactly one path segment.
    Param(&'a str),
    /// A `*name` segment capturing the rest of the path. The name may be empty.
    Wildcard(&'a str),
}

impl<'a> PathSegment<'a> {
    /// Classifies a single segment by its leading character.
    #[must_use]
    pub fn classify(segment: &'a str) -> Self {
        if let Some(name) = segment.strip_prefix(':') {
            Self::Param(name)
        } else if let Some(name) = segment.strip_prefix('*') {
            Self::Wildcard(name)
        } else {
            Self::Literal(segment)
        }
    }
}

/// Splits a pattern or a request path into segments.
///
/// Empty segments are dropped, so leading, trailing and repeated slashes
/// collapse. Everything after the first segment starting with `*` is
/// discarded because a wildcard consumes the remainder of the path.
///
/// # Example
///
/// ```
/// use trie_router::parse_segments;
///
/// assert_eq!(parse_segments("//users/:id/"), vec!["users", ":id"]);
/// assert_eq!(parse_segments("/static/*file/ignored"), vec!["static", "*file"]);
/// assert!(parse_segments("/").is_empty());
/// ```
#[must_use]
pub fn parse_segments(pattern: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    for part in pattern.split('/').filter(|s| !s.is_empty()) {
        segments.push(part);
        if part.starts_with('*') {
            break;
        }
    }
    segments
}

/// Checks a pattern before it is inserted into a trie.
///
/// The empty pattern is always rejected. In strict mode the pattern must also
/// name every `:` parameter uniquely and keep a `*` wildcard as its last
/// segment. In lenient mode trailing segments after a wildcard are dropped by
/// [`parse_segments`]. A missing leading `/` is accepted in both modes since
/// empty segments collapse anyway.
pub(crate) fn validate_pattern(pattern: &str, strict: bool) -> Result<()> {
    if pattern.is_empty() {
        return Err(RouterError::invalid_pattern(pattern, "pattern is empty"));
    }

    let raw: Vec<&str> = pattern.split('/').filter(|s| !s.is_empty()).collect();
    // Position of a wildcard that still has segments after it.
    let trailing = raw
        .iter()
        .position(|s| s.starts_with('*'))
        .filter(|pos| pos + 1 < raw.len());

    if !strict {
        if let Some(pos) = trailing {
            debug!(
                pattern,
                dropped = raw.len() - pos - 1,
                "truncating segments after wildcard"
            );
        }
        return Ok(());
    }

    if let Some(pos) = trailing {
        return Err(RouterError::invalid_pattern(
            pattern,
            format!("wildcard segment {:?} must be the last segment", raw[pos]),
        ));
    }

    let mut seen = HashSet::new();
    for segment in &raw {
        match PathSegment::classify(segment) {
            PathSegment::Param("") => {
                return Err(RouterError::invalid_pattern(
                    pattern,
                    "parameter segment ':' has no name",
                ));
            }
            PathSegment::Param(name) | PathSegment::Wildcard(name) if !name.is_empty() => {
                if !seen.insert(name) {
                    return Err(RouterError::invalid_pattern(
                        pattern,
                        format!("duplicate parameter name {name:?}"),
                    ));
                }
            }
            _ => {}
        }
    }

    Ok(())
}

/// Binds the placeholders of `pattern` against the segments of `path`.
///
/// Both sides are split with [`parse_segments`], so a request segment starting
/// with `*` ends the path just as it ends a pattern. Bindings are positional:
/// the `i`-th pattern segment is compared with the `i`-th path segment. A
/// named wildcard takes the remaining path segments joined with `/` and ends
/// the walk.
#[must_use]
pub fn extract_params(pattern: &str, path: &str) -> PathParams {
    let pattern_segments = parse_segments(pattern);
    let path_segments = parse_segments(path);
    let mut params = PathParams::new();

    for (i, segment) in pattern_segments.iter().enumerate() {
        match PathSegment::classify(segment) {
            PathSegment::Param(name) => {
                if let Some(value) = path_segments.get(i) {
                    params.insert(name, *value);
                }
            }
            PathSegment::Wildcard(name) => {
                if !name.is_empty() {
                    let rest = path_segments.get(i..).unwrap_or_default();
                    params.insert(name, rest.join("/"));
                }
                break;
            }
            PathSegment::Literal(_) => {}
        }
    }

    params
}

/// Generates a concrete path from a pattern and parameter values.
///
/// Returns `None` when a named placeholder has no value or the pattern ends in
/// an anonymous wildcard.
///
/// # Example
///
/// ```
/// use trie_router::{build_path, PathParams};
///
/// let mut params = PathParams::new();
/// params.insert("id", "42");
/// assert_eq!(build_path("/users/:id", &params), Some("/users/42".to_string()));
/// ```
#[must_use]
pub fn build_path(pattern: &str, params: &PathParams) -> Option<String> {
    let mut path = String::new();

    for segment in parse_segments(pattern) {
        path.push('/');
        match PathSegment::classify(segment) {
            PathSegment::Literal(s) => path.push_str(s),
            PathSegment::Param(name) | PathSegment::Wildcard(name) => {
                path.push_str(params.get(name)?);
            }
        }
    }

    if path.is_empty() {
        path.push('/');
    }

    Some(path)
}
