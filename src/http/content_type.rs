use crate::http::error::HttpError;
use crate::http::request::HttpRequest;

pub const ACCEPT: &str = "Accept";

/// Media types the server knows how to answer with.
///
/// `ALL` only ever appears on the request side as an `Accept` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    PlainText,
    Html,
    Css,
    Js,
    All,
}

const TABLE: [(ContentType, &str, &str); 5] = [
    (ContentType::PlainText, "PLAIN_TEXT", "text/plain"),
    (ContentType::Html, "HTML", "text/html"),
    (ContentType::Css, "CSS", "text/css"),
    (ContentType::Js, "JS", "text/javascript"),
    (ContentType::All, "ALL", "*/*"),
];

const DEFAULT: ContentType = ContentType::Html;

impl ContentType {
    pub fn name(&self) -> &'static str {
        TABLE.iter().find(|(t, _, _)| t == self).map_or("", |(_, name, _)| *name)
    }

    pub fn as_str(&self) -> &'static str {
        TABLE.iter().find(|(t, _, _)| t == self).map_or("", |(_, _, wire)| *wire)
    }

    /// Exact match on the wire string, e.g. `text/css`.
    pub fn from_wire(wire: &str) -> Option<Self> {
        TABLE.iter().find(|(_, _, w)| *w == wire).map(|(t, _, _)| *t)
    }

    /// Case-insensitive match on the symbolic name, e.g. `css` or `JS`.
    ///
    /// The wildcard has no name here; a path can never ask for `*/*`.
    pub fn from_name(name: &str) -> Option<Self> {
        TABLE
            .iter()
            .filter(|(t, _, _)| *t != ContentType::All)
            .find(|(_, n, _)| n.eq_ignore_ascii_case(name))
            .map(|(t, _, _)| *t)
    }

    /// Picks the response media type for `request`.
    ///
    /// The first comma-separated `Accept` entry wins, parameters stripped. A
    /// wildcard or missing header falls back to the path's extension, then to
    /// HTML. An `Accept` entry that names no known type is an error.
    pub fn negotiate(request: &HttpRequest) -> Result<Self, HttpError> {
        if let Some(accept) = request.header(ACCEPT) {
            let first = accept.split(',').next().unwrap_or_default();
            let media = first.split(';').next().unwrap_or_default().trim();

            match Self::from_wire(media) {
                Some(ContentType::All) => {}
                Some(content_type) => return Ok(content_type),
                None => return Err(HttpError::unsupported_content_type(accept)),
            }
        }

        Ok(request
            .request_line
            .file_extension()
            .and_then(Self::from_name)
            .unwrap_or(DEFAULT))
    }
}
