use std::io;
use thiserror::Error;

/// Failures raised while turning a connection's bytes into a response.
///
/// Only [`HttpError::UnsupportedContentType`] has a client-visible mapping
/// (406 Not Acceptable). Every other variant is fatal for the request: the
/// connection is closed without a response.
#[derive(Debug, Error)]
pub enum HttpError {
    #[error("malformed request line: {line:?}")]
    MalformedRequestLine { line: String },

    #[error("malformed header line: {line:?}")]
    MalformedHeader { line: String },

    #[error("malformed body: {reason}")]
    MalformedBody { reason: String },

    #[error("unsupported http method: {method}")]
    UnsupportedMethod { method: String },

    #[error("unsupported content type: {accept}")]
    UnsupportedContentType { accept: String },

    #[error("no route for path: {path}")]
    RouteNotFound { path: String },

    #[error("resource not found: {path}")]
    NotFound { path: String },

    #[error("unauthorized")]
    Unauthorized,

    #[error("io error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

impl HttpError {
    pub fn malformed_request_line<S: ToString>(line: S) -> Self {
        Self::MalformedRequestLine { line: line.to_string() }
    }

    pub fn malformed_header<S: ToString>(line: S) -> Self {
        Self::MalformedHeader { line: line.to_string() }
    }

    pub fn malformed_body<S: ToString>(reason: S) -> Self {
        Self::MalformedBody { reason: reason.to_string() }
    }

    pub fn unsupported_method<S: ToString>(method: S) -> Self {
        Self::UnsupportedMethod { method: method.to_string() }
    }

    pub fn unsupported_content_type<S: ToString>(accept: S) -> Self {
        Self::UnsupportedContentType { accept: accept.to_string() }
    }

    pub fn route_not_found<S: ToString>(path: S) -> Self {
        Self::RouteNotFound { path: path.to_string() }
    }

    pub fn not_found<S: ToString>(path: S) -> Self {
        Self::NotFound { path: path.to_string() }
    }
}
