use arc_swap::{ArcSwap, Guard};
use http::Method;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::info;

use super::core::Router;
use crate::error::RouterError;

/// Router that accepts new routes while requests are being served
///
/// Readers load the current [`Router`] snapshot without taking a lock.
/// Writers are serialized by an exclusive lock; each one clones the current
/// snapshot, registers into the clone and publishes it, so a reader never
/// sees a child list halfway through an append.
pub struct SharedRouter<H> {
    current: ArcSwap<Router<H>>,
    writer: Mutex<()>,
}

impl<H> SharedRouter<H> {
    #[must_use]
    pub fn new(router: Router<H>) -> Self {
        Self {
            current: ArcSwap::from_pointee(router),
            writer: Mutex::new(()),
        }
    }

    /// Current snapshot, owned
    #[must_use]
    pub fn load(&self) -> Arc<Router<H>> {
        self.current.load_full()
    }

    /// Current snapshot, for short-lived use on the request path
    #[must_use]
    pub fn snapshot(&self) -> Guard<Arc<Router<H>>> {
        self.current.load()
    }

    /// Add a route to a copy of the current router and publish it
    ///
    /// # Errors
    ///
    /// Same as [`Router::add_route`]; on error nothing is published.
    pub fn add_route(
        &self,
        method: Method,
        template: &str,
        handler: H,
    ) -> Result<Option<Arc<H>>, RouterError> {
        let _writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let mut next: Router<H> = (**self.current.load()).clone();
        let previous = next.add_route(method, template, handler)?;
        self.current.store(Arc::new(next));
        Ok(previous)
    }

    /// Publish a completely new router (e.g. after reloading a route table)
    pub fn replace(&self, router: Router<H>) {
        let _writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        info!(routes_count = router.route_count(), "Router replaced");
        self.current.store(Arc::new(router));
    }
}

impl<H> Default for SharedRouter<H> {
    fn default() -> Self {
        Self::new(Router::default())
    }
}
