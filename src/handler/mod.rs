//! Request handlers and the routing table that selects them.

pub mod mapping;

pub use mapping::{RequestMapping, RequestMappingBuilder, UnmatchedRoute};

use crate::http::error::HttpError;
use crate::http::request::{HttpRequest, Method};
use crate::http::response::HttpResponse;

/// Application logic bound to a route.
///
/// Both entry points default to doing nothing, so a handler implements only
/// the methods it serves. A GET sent to a POST-only handler leaves the
/// response untouched.
pub trait Handler: Send + Sync {
    fn get(&self, _request: &HttpRequest, _response: &mut HttpResponse) -> Result<(), HttpError> {
        Ok(())
    }

    fn post(&self, _request: &HttpRequest, _response: &mut HttpResponse) -> Result<(), HttpError> {
        Ok(())
    }
}

/// Invokes the entry point of `handler` that matches the request method.
pub fn dispatch(
    handler: &dyn Handler,
    request: &HttpRequest,
    response: &mut HttpResponse,
) -> Result<(), HttpError> {
    match request.method() {
        Method::GET => handler.get(request, response),
        Method::POST => handler.post(request, response),
        other => Err(HttpError::unsupported_method(other.as_str())),
    }
}
