//! Async handler layer on top of [`Router`].
//!
//! Everything a request reaches goes through [`Router::resolve`]; the bound
//! parameters are written into [`Request::params`] before the handler runs.

use std::future::Future;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;

use crate::error::Result;
use crate::request::{Method, Request};
use crate::response::Response;
use crate::router::{RouteGroup, Router};

/// A boxed async handler function.
pub type Handler = Arc<dyn Fn(Request) -> BoxFuture<'static, Response> + Send + Sync>;

/// Boxes an async function into a [`Handler`].
pub fn handler<F, Fut>(f: F) -> Handler
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Response> + Send + 'static,
{
    Arc::new(move |req| f(req).boxed())
}

impl Router<Handler> {
    /// Adds a route with any method.
    ///
    /// # Errors
    ///
    /// Returns the error of [`Router::register`] for a rejected pattern.
    pub fn route<F, Fut>(mut self, method: impl Into<Method>, path: &str, f: F) -> Result<Self>
    where
        F: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        self.register(method.into().as_str(), path, handler(f))?;
        Ok(self)
    }

    /// Adds a GET route.
    ///
    /// # Errors
    ///
    /// See [`Router::route`].
    pub fn get<F, Fut>(self, path: &str, f: F) -> Result<Self>
    where
        F: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        self.route(Method::Get, path, f)
    }

    /// Adds a POST route.
    ///
    /// # Errors
    ///
    /// See [`Router::route`].
    pub fn post<F, Fut>(self, path: &str, f: F) -> Result<Self>
    where
        F: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        self.route(Method::Post, path, f)
    }

    /// Adds a PUT route.
    ///
    /// # Errors
    ///
    /// See [`Router::route`].
    pub fn put<F, Fut>(self, path: &str, f: F) -> Result<Self>
    where
        F: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        self.route(Method::Put, path, f)
    }

    /// Adds a PATCH route.
    ///
    /// # Errors
    ///
    /// See [`Router::route`].
    pub fn patch<F, Fut>(self, path: &str, f: F) -> Result<Self>
    where
        F: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        self.route(Method::Patch, path, f)
    }

    /// Adds a DELETE route.
    ///
    /// # Errors
    ///
    /// See [`Router::route`].
    pub fn delete<F, Fut>(self, path: &str, f: F) -> Result<Self>
    where
        F: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        self.route(Method::Delete, path, f)
    }

    /// Adds a route group.
    ///
    /// # Errors
    ///
    /// See [`Router::mount`].
    pub fn group(mut self, group: RouteGroup<Handler>) -> Result<Self> {
        self.mount(group)?;
        Ok(self)
    }

    /// Handles an incoming request.
    ///
    /// Resolves the route, binds the path parameters onto the request and runs
    /// the handler. A request with no matching route gets a 404.
    pub fn handle(&self, mut request: Request) -> BoxFuture<'_, Response> {
        async move {
            match self.lookup(request.method.as_str(), &request.path) {
                Ok((route_handler, matched)) => {
                    request.params = matched.params;
                    route_handler(request).await
                }
                Err(_) => Response::not_found(),
            }
        }
        .boxed()
    }
}

impl RouteGroup<Handler> {
    /// Adds a GET route to the group.
    #[must_use]
    pub fn get<F, Fut>(self, path: &str, f: F) -> Self
    where
        F: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        self.add(Method::Get.as_str(), path, handler(f))
    }

    /// Adds a POST route to the group.
    #[must_use]
    pub fn post<F, Fut>(self, path: &str, f: F) -> Self
    where
        F: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        self.add(Method::Post.as_str(), path, handler(f))
    }

    /// Adds a DELETE route to the group.
    #[must_use]
    pub fn delete<F, Fut>(self, path: &str, f: F) -> Self
    where
        F: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        self.add(Method::Delete.as_str(), path, handler(f))
    }
}
