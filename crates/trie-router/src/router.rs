//! Main router implementation.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::RouterConfig;
use crate::error::{Result, RouterError};
use crate::path::{extract_params, validate_pattern};
use crate::request::PathParams;
use crate::service::Handler;
use crate::trie::PathTrie;

/// The outcome of a successful [`Router::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    /// The registered pattern that matched, e.g. `/hello/:name`.
    pub pattern: String,
    /// Values bound to the pattern's placeholders. Possibly empty.
    pub params: PathParams,
}

/// A registered (method, pattern) pair.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct RouteInfo {
    /// HTTP method.
    pub method: String,
    /// Route pattern as registered.
    pub pattern: String,
}

/// Routes requests by method and path to handlers of type `H`.
///
/// Registration takes `&mut self`; resolution takes `&self`, so a fully built
/// router can be shared across tasks without locking. Use
/// [`SharedRouter`](crate::SharedRouter) to keep registering after serving
/// has started.
pub struct Router<H = Handler> {
    config: RouterConfig,
    /// One trie per method, created on first registration.
    method_tries: HashMap<String, PathTrie>,
    /// Handlers keyed by (method, pattern).
    handlers: HashMap<(String, String), H>,
}

impl<H> Default for Router<H> {
    fn default() -> Self {
        Self::with_config(RouterConfig::default())
    }
}

impl<H> fmt::Debug for Router<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("config", &self.config)
            .field("method_tries", &self.method_tries)
            .field("routes", &self.handlers.len())
            .finish()
    }
}

impl<H> Router<H> {
    /// Creates a new empty router.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty router with the given configuration.
    #[must_use]
    pub fn with_config(config: RouterConfig) -> Self {
        Self {
            config,
            method_tries: HashMap::new(),
            handlers: HashMap::new(),
        }
    }

    /// The configuration this router was built with.
    pub const fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Registers `handler` for `method` and `pattern`.
    ///
    /// Registering the same pair again replaces the handler and leaves the
    /// trie unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::InvalidPattern`] when the pattern is rejected by
    /// validation (see [`RouterConfig::strict_patterns`]).
    pub fn register(&mut self, method: &str, pattern: &str, handler: H) -> Result<()> {
        validate_pattern(pattern, self.config.strict_patterns)?;

        let trie = self.method_tries.entry(method.to_string()).or_default();
        if let Some(previous) = trie.insert(pattern).filter(|p| p != pattern) {
            warn!(
                method,
                pattern,
                shadowed = %previous,
                "pattern replaces another route on the same trie node"
            );
        }

        let replaced = self
            .handlers
            .insert((method.to_string(), pattern.to_string()), handler)
            .is_some();
        debug!(method, pattern, replaced, "registered route");

        Ok(())
    }

    /// Resolves a request to its matched pattern and path parameters.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::NotFound`] if no trie exists for `method` or the
    /// trie has no route for `path`.
    pub fn resolve(&self, method: &str, path: &str) -> Result<RouteMatch> {
        let result = self.find_route(method, path);

        if self.config.trace_resolve {
            match &result {
                Ok(matched) => debug!(
                    method,
                    path,
                    pattern = %matched.pattern,
                    params = matched.params.len(),
                    "resolved route"
                ),
                Err(_) => debug!(method, path, "no route matched"),
            }
        }

        result
    }

    /// Resolves a request and returns the handler registered for the match.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::NotFound`] under the same conditions as
    /// [`Router::resolve`].
    pub fn lookup(&self, method: &str, path: &str) -> Result<(&H, RouteMatch)> {
        let matched = self.resolve(method, path)?;
        let handler = self
            .handler(method, &matched.pattern)
            .ok_or_else(|| RouterError::not_found(method, path))?;
        Ok((handler, matched))
    }

    fn find_route(&self, method: &str, path: &str) -> Result<RouteMatch> {
        let pattern = self
            .method_tries
            .get(method)
            .and_then(|trie| trie.find(path))
            .and_then(|node| node.pattern())
            .ok_or_else(|| RouterError::not_found(method, path))?;

        Ok(RouteMatch {
            pattern: pattern.to_string(),
            params: extract_params(pattern, path),
        })
    }

    /// The handler registered under exactly `method` and `pattern`.
    ///
    /// This is a key lookup, not routing: `/users/42` will not find the
    /// handler of `/users/:id`.
    pub fn handler(&self, method: &str, pattern: &str) -> Option<&H> {
        self.handlers
            .get(&(method.to_string(), pattern.to_string()))
    }

    /// Whether `pattern` was registered for `method`.
    pub fn contains(&self, method: &str, pattern: &str) -> bool {
        self.handler(method, pattern).is_some()
    }

    /// The trie for `method`, if any route was registered for it.
    pub fn trie(&self, method: &str) -> Option<&PathTrie> {
        self.method_tries.get(method)
    }

    /// Every registered route, sorted by method then pattern.
    pub fn routes(&self) -> Vec<RouteInfo> {
        let mut routes: Vec<RouteInfo> = self
            .handlers
            .keys()
            .map(|(method, pattern)| RouteInfo {
                method: method.clone(),
                pattern: pattern.clone(),
            })
            .collect();
        routes.sort();
        routes
    }

    /// Number of registered (method, pattern) pairs.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// True if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Registers every route of a group.
    ///
    /// # Errors
    ///
    /// Stops at the first pattern rejected by [`Router::register`]; routes
    /// registered before it stay registered.
    pub fn mount(&mut self, group: RouteGroup<H>) -> Result<()> {
        for (method, pattern, handler) in group.routes {
            self.register(&method, &pattern, handler)?;
        }
        Ok(())
    }
}

/// A batch of routes sharing a path prefix.
pub struct RouteGroup<H = Handler> {
    prefix: String,
    routes: Vec<(String, String, H)>,
}

impl<H> RouteGroup<H> {
    /// Creates a new route group with the given prefix.
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.trim_end_matches('/').to_string(),
            routes: Vec::new(),
        }
    }

    /// Adds a route under the group prefix.
    #[must_use]
    pub fn add(mut self, method: &str, path: &str, handler: H) -> Self {
        let full = self.full_path(path);
        self.routes.push((method.to_string(), full, handler));
        self
    }

    /// Joins the prefix and a route path.
    pub fn full_path(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        match (self.prefix.is_empty(), path.is_empty()) {
            (true, true) => "/".to_string(),
            (true, false) => format!("/{path}"),
            (false, true) => self.prefix.clone(),
            (false, false) => format!("{}/{path}", self.prefix),
        }
    }

    /// The patterns this group will register, in insertion order.
    pub fn patterns(&self) -> impl Iterator<Item = (&str, &str)> {
        self.routes
            .iter()
            .map(|(method, pattern, _)| (method.as_str(), pattern.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router(routes: &[(&str, &str)]) -> Router<&'static str> {
        let mut router = Router::new();
        for (method, pattern) in routes {
            router.register(method, pattern, "h").unwrap();
        }
        router
    }

    #[test]
    fn test_resolve_param() {
        let router = router(&[("GET", "/hello/:name")]);
        let matched = router.resolve("GET", "/hello/world").unwrap();
        assert_eq!(matched.pattern, "/hello/:name");
        assert_eq!(matched.params.get("name"), Some("world"));
        assert_eq!(matched.params.len(), 1);
    }

    #[test]
    fn test_resolve_root() {
        let router = router(&[("GET", "/")]);
        let matched = router.resolve("GET", "/").unwrap();
        assert_eq!(matched.pattern, "/");
        assert!(matched.params.is_empty());
    }

    #[test]
    fn test_unknown_method() {
        let router = router(&[("GET", "/")]);
        let err = router.resolve("DELETE", "/").unwrap_err();
        assert_eq!(
            err,
            RouterError::NotFound {
                method: "DELETE".to_string(),
                path: "/".to_string()
            }
        );
    }

    #[test]
    fn test_method_is_case_sensitive() {
        let router = router(&[("GET", "/")]);
        assert!(router.resolve("get", "/").unwrap_err().is_not_found());
    }

    #[test]
    fn test_reregister_replaces_handler() {
        let mut router = Router::new();
        router.register("GET", "/a/:id", 1).unwrap();
        let nodes = router.trie("GET").unwrap().node_count();

        router.register("GET", "/a/:id", 2).unwrap();
        assert_eq!(router.trie("GET").unwrap().node_count(), nodes);
        assert_eq!(router.len(), 1);

        let (handler, matched) = router.lookup("GET", "/a/7").unwrap();
        assert_eq!(*handler, 2);
        assert_eq!(matched.params.get("id"), Some("7"));
    }

    #[test]
    fn test_handler_is_exact_key_lookup() {
        let router = router(&[("GET", "/users/:id")]);
        assert!(router.contains("GET", "/users/:id"));
        assert!(router.handler("GET", "/users/42").is_none());
        assert!(router.lookup("GET", "/users/42").is_ok());
    }

    #[test]
    fn test_invalid_pattern_registers_nothing() {
        let mut router: Router<u8> = Router::new();
        let err = router.register("GET", "/a/*rest/b", 0).unwrap_err();
        assert!(matches!(err, RouterError::InvalidPattern { .. }));
        assert!(router.is_empty());
        assert!(router.trie("GET").is_none());
    }

    #[test]
    fn test_lenient_truncates_after_wildcard() {
        let mut router = Router::with_config(RouterConfig::new().strict_patterns(false));
        router.register("GET", "/a/*rest/b", ()).unwrap();

        let matched = router.resolve("GET", "/a/x/y").unwrap();
        assert_eq!(matched.pattern, "/a/*rest/b");
        assert_eq!(matched.params.get("rest"), Some("x/y"));
    }

    #[test]
    fn test_routes_listing() {
        let router = router(&[("POST", "/users"), ("GET", "/users/:id"), ("GET", "/")]);
        let listed: Vec<(String, String)> = router
            .routes()
            .into_iter()
            .map(|r| (r.method, r.pattern))
            .collect();
        assert_eq!(
            listed,
            vec![
                ("GET".to_string(), "/".to_string()),
                ("GET".to_string(), "/users/:id".to_string()),
                ("POST".to_string(), "/users".to_string()),
            ]
        );
    }

    #[test]
    fn test_route_group_paths() {
        let group: RouteGroup<()> = RouteGroup::new("/api/v1/");
        assert_eq!(group.full_path("/users"), "/api/v1/users");
        assert_eq!(group.full_path("/"), "/api/v1");

        let root: RouteGroup<()> = RouteGroup::new("");
        assert_eq!(root.full_path("/"), "/");
        assert_eq!(root.full_path("users"), "/users");
    }

    #[test]
    fn test_mount_group() {
        let group = RouteGroup::new("/api")
            .add("GET", "/users/:id", "user")
            .add("POST", "/users", "create");
        assert_eq!(group.patterns().count(), 2);

        let mut router = Router::new();
        router.mount(group).unwrap();

        let (handler, matched) = router.lookup("GET", "/api/users/5").unwrap();
        assert_eq!(*handler, "user");
        assert_eq!(matched.params.get("id"), Some("5"));
        assert!(router.contains("POST", "/api/users"));
    }
}
