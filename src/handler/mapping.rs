use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::handler::Handler;
use crate::http::error::HttpError;

/// What happens to a path that has no route.
#[derive(Clone)]
pub enum UnmatchedRoute {
    /// Hand the request to this handler.
    Default(Arc<dyn Handler>),
    /// Fail with [`HttpError::RouteNotFound`].
    Reject,
}

impl fmt::Debug for UnmatchedRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnmatchedRoute::Default(_) => f.write_str("Default(..)"),
            UnmatchedRoute::Reject => f.write_str("Reject"),
        }
    }
}

/// Routing table from exact path to handler.
pub struct RequestMapping {
    routes: HashMap<String, Arc<dyn Handler>>,
    unmatched: UnmatchedRoute,
}

impl RequestMapping {
    pub fn builder() -> RequestMappingBuilder {
        RequestMappingBuilder::new()
    }

    /// Finds the handler for `path`; the query string must already be removed.
    pub fn resolve(&self, path: &str) -> Result<Arc<dyn Handler>, HttpError> {
        if let Some(handler) = self.routes.get(path) {
            return Ok(Arc::clone(handler));
        }

        match &self.unmatched {
            UnmatchedRoute::Default(handler) => Ok(Arc::clone(handler)),
            UnmatchedRoute::Reject => Err(HttpError::route_not_found(path)),
        }
    }

    pub fn contains(&self, path: &str) -> bool {
        self.routes.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl fmt::Debug for RequestMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut paths: Vec<_> = self.routes.keys().collect();
        paths.sort();
        f.debug_struct("RequestMapping")
            .field("routes", &paths)
            .field("unmatched", &self.unmatched)
            .finish()
    }
}

pub struct RequestMappingBuilder {
    routes: HashMap<String, Arc<dyn Handler>>,
    unmatched: UnmatchedRoute,
}

impl RequestMappingBuilder {
    fn new() -> Self {
        Self {
            routes: HashMap::new(),
            unmatched: UnmatchedRoute::Reject,
        }
    }

    /// Binds `path` to `handler`, replacing an earlier binding.
    pub fn route(mut self, path: impl Into<String>, handler: impl Handler + 'static) -> Self {
        self.routes.insert(path.into(), Arc::new(handler));
        self
    }

    pub fn route_shared(mut self, path: impl Into<String>, handler: Arc<dyn Handler>) -> Self {
        self.routes.insert(path.into(), handler);
        self
    }

    pub fn unmatched(mut self, unmatched: UnmatchedRoute) -> Self {
        self.unmatched = unmatched;
        self
    }

    pub fn build(self) -> RequestMapping {
        RequestMapping {
            routes: self.routes,
            unmatched: self.unmatched,
        }
    }
}
