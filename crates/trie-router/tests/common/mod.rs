#![allow(dead_code)]

use trie_router::{RouteMatch, Router, RouterError};

/// Builds a router whose handler value is the pattern it was registered with.
pub fn router_with(routes: &[(&str, &str)]) -> Router<String> {
    let mut router = Router::new();
    for (method, pattern) in routes {
        router
            .register(method, pattern, (*pattern).to_string())
            .unwrap_or_else(|e| panic!("Failed to register {method} {pattern}: {e}"));
    }
    router
}

pub fn resolve_ok(router: &Router<String>, method: &str, path: &str) -> RouteMatch {
    router
        .resolve(method, path)
        .unwrap_or_else(|e| panic!("Expected a route for {method} {path}, got {e}"))
}

pub fn resolve_err(router: &Router<String>, method: &str, path: &str) -> RouterError {
    router
        .resolve(method, path)
        .expect_err(&format!("Expected no route for {method} {path}"))
}

pub fn params_of(matched: &RouteMatch) -> Vec<(String, String)> {
    let mut params: Vec<(String, String)> = matched
        .params
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    params.sort();
    params
}
