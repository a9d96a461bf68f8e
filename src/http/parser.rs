use std::io::ErrorKind;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt};

use crate::http::error::HttpError;
use crate::http::headers::Headers;
use crate::http::request::{HttpRequest, Method, RequestLine, content_length};

/// Reads one request from a line-buffered stream.
///
/// The header block ends at the first empty line or at end of stream. A body
/// is read only when `Content-Length` is a positive integer, and is that many
/// characters long; if the stream ends early the body holds whatever arrived.
pub async fn parse_request<R>(reader: &mut R) -> Result<HttpRequest, HttpError>
where
    R: AsyncBufRead + Unpin,
{
    let request_line = read_request_line(reader).await?;
    let headers = read_headers(reader).await?;
    let body = read_body(reader, &headers).await?;

    Ok(HttpRequest::new(request_line, headers, body))
}

async fn read_request_line<R>(reader: &mut R) -> Result<RequestLine, HttpError>
where
    R: AsyncBufRead + Unpin,
{
    let line = read_line(reader)
        .await?
        .ok_or_else(|| HttpError::malformed_request_line(""))?;

    let mut parts = line.split(' ');

    let (Some(method), Some(target), Some(protocol)) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(HttpError::malformed_request_line(&line));
    };

    if method.is_empty() || target.is_empty() || protocol.is_empty() {
        return Err(HttpError::malformed_request_line(&line));
    }

    let method = Method::from_str(method).ok_or_else(|| HttpError::unsupported_method(method))?;

    Ok(RequestLine::new(method, target, protocol))
}

async fn read_headers<R>(reader: &mut R) -> Result<Headers, HttpError>
where
    R: AsyncBufRead + Unpin,
{
    let mut headers = Headers::new();

    while let Some(line) = read_line(reader).await? {
        if line.is_empty() {
            break;
        }

        let (key, value) = line
            .split_once(':')
            .ok_or_else(|| HttpError::malformed_header(&line))?;

        headers.insert(key.trim(), value.trim());
    }

    Ok(headers)
}

async fn read_body<R>(reader: &mut R, headers: &Headers) -> Result<String, HttpError>
where
    R: AsyncBufRead + Unpin,
{
    let content_length = content_length(headers);
    let mut body = String::new();

    for _ in 0..content_length {
        match read_char(reader).await? {
            Some(c) => body.push(c),
            None => break,
        }
    }

    Ok(body)
}

/// Next UTF-8 encoded character, or `None` at end of stream.
async fn read_char<R>(reader: &mut R) -> Result<Option<char>, HttpError>
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = [0u8; 4];
    if reader.read(&mut buf[..1]).await? == 0 {
        return Ok(None);
    }

    let width = utf8_width(buf[0]).ok_or_else(|| HttpError::malformed_body("invalid utf-8 lead byte"))?;

    if let Err(e) = reader.read_exact(&mut buf[1..width]).await {
        return Err(match e.kind() {
            ErrorKind::UnexpectedEof => HttpError::malformed_body("stream ended inside a character"),
            _ => HttpError::from(e),
        });
    }

    std::str::from_utf8(&buf[..width])
        .ok()
        .and_then(|s| s.chars().next())
        .map(Some)
        .ok_or_else(|| HttpError::malformed_body("invalid utf-8 sequence"))
}

fn utf8_width(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

/// Next line without its terminator, or `None` at end of stream.
async fn read_line<R>(reader: &mut R) -> Result<Option<String>, HttpError>
where
    R: AsyncBufRead + Unpin,
{
    let mut line = String::new();
    if reader.read_line(&mut line).await? == 0 {
        return Ok(None);
    }

    let len = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(len);
    Ok(Some(line))
}
