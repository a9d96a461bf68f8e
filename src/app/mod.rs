//! Application side: pages, accounts and the route table built at startup.

pub mod controller;
pub mod resource;
pub mod user;

use std::sync::Arc;

use anyhow::Context;

use crate::config::{Config, UnmatchedPolicy};
use crate::handler::{Handler, RequestMapping, UnmatchedRoute};
use crate::server::context::ServerContext;
use crate::session::SessionStore;

use controller::{ErrorPageHandler, LoginHandler, RegisterHandler, StaticFileHandler, WelcomeHandler};
use resource::StaticResources;
use user::UserRepository;

/// Builds the routing table: fixed routes plus one route per static file.
///
/// `/401.html` is served with a 401 status rather than as a plain file.
pub fn build_mapping(
    policy: UnmatchedPolicy,
    resources: Arc<StaticResources>,
    sessions: Arc<SessionStore>,
    users: Arc<UserRepository>,
) -> anyhow::Result<RequestMapping> {
    let static_paths = resources
        .discover()
        .with_context(|| format!("failed to scan {}", resources.root().display()))?;

    let static_files: Arc<dyn Handler> = Arc::new(StaticFileHandler::new(Arc::clone(&resources)));
    let mut builder = RequestMapping::builder();
    for path in static_paths {
        tracing::debug!(path = %path, "Static route registered");
        builder = builder.route_shared(path, Arc::clone(&static_files));
    }

    let unmatched = match policy {
        UnmatchedPolicy::Default => UnmatchedRoute::Default(Arc::new(WelcomeHandler)),
        UnmatchedPolicy::Reject => UnmatchedRoute::Reject,
    };

    Ok(builder
        .route("/", WelcomeHandler)
        .route(
            "/login",
            LoginHandler::new(Arc::clone(&resources), sessions, Arc::clone(&users)),
        )
        .route("/401.html", ErrorPageHandler::unauthorized(Arc::clone(&resources)))
        .route("/register", RegisterHandler::new(resources, users))
        .unmatched(unmatched)
        .build())
}

/// Wires a fresh session store and user repository into a server context.
pub fn bootstrap(cfg: &Config) -> anyhow::Result<ServerContext> {
    let sessions = Arc::new(SessionStore::new());
    let resources = Arc::new(StaticResources::new(cfg.static_files.root.clone()));
    let users = Arc::new(UserRepository::with_defaults());

    let mapping = build_mapping(cfg.routing.unmatched, resources, Arc::clone(&sessions), users)?;
    tracing::info!(routes = mapping.len(), "Routes registered");

    Ok(ServerContext::new(mapping, sessions))
}
