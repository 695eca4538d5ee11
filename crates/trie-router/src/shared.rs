//! A router that can take new routes while it is serving.

use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use parking_lot::{RwLock, RwLockReadGuard};

use crate::error::Result;
use crate::request::Request;
use crate::response::Response;
use crate::router::{RouteMatch, Router};
use crate::service::Handler;

/// Cloneable handle to a [`Router`] behind a reader-writer lock.
///
/// Resolution takes the read lock and registration the write lock, so
/// lookups run in parallel and never observe a half-inserted route. Handlers
/// are cloned out before they run; no lock is held across an `.await`.
pub struct SharedRouter<H = Handler> {
    inner: Arc<RwLock<Router<H>>>,
}

impl<H> Clone for SharedRouter<H> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<H> Default for SharedRouter<H> {
    fn default() -> Self {
        Self::new(Router::default())
    }
}

impl<H> From<Router<H>> for SharedRouter<H> {
    fn from(router: Router<H>) -> Self {
        Self::new(router)
    }
}

impl<H> SharedRouter<H> {
    /// Wraps an already built router.
    pub fn new(router: Router<H>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(router)),
        }
    }

    /// Registers a route under the write lock.
    ///
    /// # Errors
    ///
    /// See [`Router::register`].
    pub fn register(&self, method: &str, pattern: &str, handler: H) -> Result<()> {
        self.inner.write().register(method, pattern, handler)
    }

    /// Resolves a request under the read lock.
    ///
    /// # Errors
    ///
    /// See [`Router::resolve`].
    pub fn resolve(&self, method: &str, path: &str) -> Result<RouteMatch> {
        self.inner.read().resolve(method, path)
    }

    /// Read access to the underlying router.
    pub fn read(&self) -> RwLockReadGuard<'_, Router<H>> {
        self.inner.read()
    }
}

impl<H: Clone> SharedRouter<H> {
    /// Resolves a request and clones out the matched handler.
    ///
    /// # Errors
    ///
    /// See [`Router::lookup`].
    pub fn lookup(&self, method: &str, path: &str) -> Result<(H, RouteMatch)> {
        let router = self.inner.read();
        let (handler, matched) = router.lookup(method, path)?;
        Ok((handler.clone(), matched))
    }
}

impl SharedRouter<Handler> {
    /// Handles a request against the current route set.
    pub fn handle(&self, mut request: Request) -> BoxFuture<'static, Response> {
        let found = self.lookup(request.method.as_str(), &request.path);
        async move {
            match found {
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
