//! # trie-router
//!
//! A small HTTP request router built on a per-method segment trie.
//!
//! This crate provides:
//! - Static segments, `:name` parameters and `*name` suffix wildcards
//! - One prefix tree per HTTP method, matched in O(depth)
//! - Typed path parameters handed to async handlers
//! - Route groups with prefixes
//! - A lock-guarded router for registering routes while serving
//!
//! ## Quick Start
//!
//! ```
//! use trie_router::{Request, Response, Router};
//!
//! async fn hello(req: Request) -> Response {
//!     let name = req.param("name").unwrap_or("world");
//!     Response::text(format!("Hello, {name}!"))
//! }
//!
//! # fn main() -> trie_router::Result<()> {
//! let router = Router::new().get("/hello/:name", hello)?;
//!
//! let matched = router.resolve("GET", "/hello/ferris")?;
//! assert_eq!(matched.pattern, "/hello/:name");
//! assert_eq!(matched.params.get("name"), Some("ferris"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Matching
//!
//! Patterns are split on `/`, empty segments are dropped and a `*` segment
//! swallows the rest of the path:
//!
//! ```
//! use trie_router::Router;
//!
//! let mut router: Router<&str> = Router::new();
//! router.register("GET", "/user/*action", "user").unwrap();
//!
//! let matched = router.resolve("GET", "/user/profile/edit").unwrap();
//! assert_eq!(matched.params.get("action"), Some("profile/edit"));
//! assert!(router.resolve("GET", "/user").is_err());
//! ```
//!
//! Child selection is greedy and never backtracks. When a literal and a
//! placeholder sibling overlap, the one registered first wins.
//!
//! ## Handling requests
//!
//! [`Router::handle`] always resolves through the trie, writes the bound
//! parameters into [`Request::params`] and runs the handler. Unmatched
//! requests get a 404 response.

mod config;
mod error;
mod path;
mod request;
mod response;
mod router;
mod service;
mod shared;
mod trie;

pub use config::RouterConfig;
pub use error::{Result, RouterError};
pub use path::{PathSegment, build_path, extract_params, parse_segments};
pub use request::{Method, PathParams, Request};
pub use response::Response;
pub use router::{RouteGroup, RouteInfo, RouteMatch, Router};
pub use service::{Handler, handler};
pub use shared::SharedRouter;
pub use trie::{PathTrie, TrieNode};
