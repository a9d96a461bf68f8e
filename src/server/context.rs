use std::sync::Arc;

use crate::handler::RequestMapping;
use crate::session::SessionStore;

/// State shared by every connection: the routing table and the session store.
#[derive(Debug)]
pub struct ServerContext {
    pub mapping: RequestMapping,
    pub sessions: Arc<SessionStore>,
}

impl ServerContext {
    pub fn new(mapping: RequestMapping, sessions: Arc<SessionStore>) -> Self {
        Self { mapping, sessions }
    }
}
