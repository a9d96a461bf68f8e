use crate::http::content_type::ContentType;
use crate::http::headers::Headers;
use crate::http::request::{CONTENT_LENGTH, CONTENT_TYPE};
use crate::session::{SESSION_COOKIE, Session};

pub const LOCATION: &str = "Location";
pub const SET_COOKIE: &str = "Set-Cookie";
const DEFAULT_CHARSET: &str = ";charset=utf-8";

/// HTTP status codes the server emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 302 Found, used for redirects
    Found,
    /// 401 Unauthorized
    Unauthorized,
    /// 404 Not Found
    NotFound,
    /// 406 Not Acceptable
    NotAcceptable,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use minicat::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotAcceptable.as_u16(), 406);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::Found => 302,
            StatusCode::Unauthorized => 401,
            StatusCode::NotFound => 404,
            StatusCode::NotAcceptable => 406,
        }
    }

    /// Name written after the code on the status line.
    ///
    /// # Example
    ///
    /// ```
    /// # use minicat::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.name(), "OK");
    /// assert_eq!(StatusCode::Found.name(), "FOUND");
    /// ```
    pub fn name(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Found => "FOUND",
            StatusCode::Unauthorized => "UNAUTHORIZED",
            StatusCode::NotFound => "NOT_FOUND",
            StatusCode::NotAcceptable => "NOT_ACCEPTABLE",
        }
    }
}

/// An outgoing response, filled in by a handler and then serialized.
///
/// Headers are written in the order they were first set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: Headers,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Headers::new(),
            body: String::new(),
        }
    }

    /// A 200 response that already carries the negotiated `Content-Type`.
    pub fn with_content_type(content_type: ContentType) -> Self {
        let mut response = Self::new(StatusCode::Ok);
        response.set_content_type(content_type);
        response
    }

    pub fn set_status(&mut self, status: StatusCode) {
        self.status = status;
    }

    pub fn set_header(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.headers.insert(key, value);
    }

    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key)
    }

    pub fn set_content_type(&mut self, content_type: ContentType) {
        self.set_header(CONTENT_TYPE, format!("{}{}", content_type.as_str(), DEFAULT_CHARSET));
    }

    /// Replaces the body and sets `Content-Length` to its byte length.
    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = body.into();
        self.set_header(CONTENT_LENGTH, self.body.len().to_string());
    }

    pub fn redirect(&mut self, location: impl Into<String>) {
        self.set_status(StatusCode::Found);
        self.set_header(LOCATION, location);
    }

    pub fn set_session_cookie(&mut self, session: &Session) {
        self.set_header(SET_COOKIE, format!("{}={}", SESSION_COOKIE, session.id()));
    }

    pub fn not_acceptable() -> Self {
        Self::new(StatusCode::NotAcceptable)
    }
}
