use std::cell::OnceCell;
use std::collections::HashMap;
use std::sync::Arc;

use url::form_urlencoded;

use crate::http::headers::Headers;
use crate::session::Session;

pub const CONTENT_LENGTH: &str = "Content-Length";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const COOKIE: &str = "Cookie";
pub const FORM_URL_ENCODED: &str = "application/x-www-form-urlencoded";

/// Declared body length in characters; 0 if absent or not a number.
pub fn content_length(headers: &Headers) -> usize {
    headers
        .get(CONTENT_LENGTH)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(0)
}

/// HTTP request methods.
///
/// Every method here parses, but only GET and POST reach a handler. The rest
/// are rejected at dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// POST - Create or submit data
    POST,
    /// PUT - Replace a resource
    PUT,
    /// DELETE - Delete a resource
    DELETE,
    /// HEAD - Like GET but without the response body
    HEAD,
    /// OPTIONS - Describe communication options
    OPTIONS,
    /// PATCH - Partial modification of a resource
    PATCH,
}

impl Method {
    /// Parses an HTTP method from a string.
    ///
    /// Matching is case-sensitive, so `"get"` is not a method.
    ///
    /// # Example
    ///
    /// ```
    /// # use minicat::http::request::Method;
    /// assert_eq!(Method::from_str("GET"), Some(Method::GET));
    /// assert_eq!(Method::from_str("get"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::GET),
            "POST" => Some(Method::POST),
            "PUT" => Some(Method::PUT),
            "DELETE" => Some(Method::DELETE),
            "HEAD" => Some(Method::HEAD),
            "OPTIONS" => Some(Method::OPTIONS),
            "PATCH" => Some(Method::PATCH),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::DELETE => "DELETE",
            Method::HEAD => "HEAD",
            Method::OPTIONS => "OPTIONS",
            Method::PATCH => "PATCH",
        }
    }
}

/// The first line of a request, with the target split at the first `?`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub protocol: String,
}

impl RequestLine {
    pub fn new(method: Method, target: &str, protocol: impl Into<String>) -> Self {
        let (path, query) = match target.split_once('?') {
            Some((path, query)) => (path.to_string(), Some(query.to_string())),
            None => (target.to_string(), None),
        };

        Self {
            method,
            path,
            query,
            protocol: protocol.into(),
        }
    }

    /// Text after the last `.` of the path, if any.
    pub fn file_extension(&self) -> Option<&str> {
        self.path.rsplit_once('.').map(|(_, ext)| ext)
    }
}

/// A parsed HTTP request.
///
/// Owned by the connection that parsed it. The session, when present, is a
/// shared handle into the session store.
#[derive(Debug)]
pub struct HttpRequest {
    pub request_line: RequestLine,
    pub headers: Headers,
    pub body: String,
    form: OnceCell<HashMap<String, String>>,
    session: Option<Arc<Session>>,
}

impl HttpRequest {
    pub fn new(request_line: RequestLine, headers: Headers, body: String) -> Self {
        Self {
            request_line,
            headers,
            body,
            form: OnceCell::new(),
            session: None,
        }
    }

    pub fn method(&self) -> Method {
        self.request_line.method
    }

    pub fn path(&self) -> &str {
        &self.request_line.path
    }

    pub fn query(&self) -> Option<&str> {
        self.request_line.query.as_deref()
    }

    pub fn protocol(&self) -> &str {
        &self.request_line.protocol
    }

    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key)
    }

    /// Body length in characters; 0 if the header is missing or not a number.
    pub fn content_length(&self) -> usize {
        content_length(&self.headers)
    }

    pub fn is_form_encoded(&self) -> bool {
        self.header(CONTENT_TYPE)
            .is_some_and(|v| v.contains(FORM_URL_ENCODED))
    }

    /// Decoded form parameters.
    ///
    /// Empty unless the body is non-empty and declared as
    /// `application/x-www-form-urlencoded`. Decoded on first access.
    pub fn form(&self) -> &HashMap<String, String> {
        self.form.get_or_init(|| {
            if self.body.is_empty() || !self.is_form_encoded() {
                return HashMap::new();
            }

            form_urlencoded::parse(self.body.trim_end().as_bytes())
                .into_owned()
                .collect()
        })
    }

    pub fn form_param(&self, key: &str) -> Option<&str> {
        self.form().get(key).map(|v| v.as_str())
    }

    /// Looks up a cookie by name in the `Cookie` header.
    pub fn cookie(&self, name: &str) -> Option<&str> {
        self.header(COOKIE)?
            .split(';')
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v)
    }

    pub fn session(&self) -> Option<&Arc<Session>> {
        self.session.as_ref()
    }

    pub fn attach_session(&mut self, session: Arc<Session>) {
        self.session = Some(session);
    }
}

/// Builder for constructing requests without going through the parser.
pub struct RequestBuilder {
    method: Option<Method>,
    target: Option<String>,
    protocol: Option<String>,
    headers: Headers,
    body: String,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            method: None,
            target: None,
            protocol: None,
            headers: Headers::new(),
            body: String::new(),
        }
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    /// Sets the request target; a `?` splits it into path and query.
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = Some(protocol.into());
        self
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key, value);
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn build(self) -> Result<HttpRequest, &'static str> {
        let method = self.method.ok_or("method missing")?;
        let target = self.target.ok_or("target missing")?;
        let protocol = self.protocol.unwrap_or_else(|| "HTTP/1.1".to_string());

        Ok(HttpRequest::new(
            RequestLine::new(method, &target, protocol),
            self.headers,
            self.body,
        ))
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
