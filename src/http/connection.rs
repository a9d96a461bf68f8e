use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncRead, AsyncWrite, BufReader};
use tracing::{debug, warn};

use crate::handler::dispatch;
use crate::http::content_type::ContentType;
use crate::http::error::HttpError;
use crate::http::parser::parse_request;
use crate::http::request::HttpRequest;
use crate::http::response::HttpResponse;
use crate::http::writer::ResponseWriter;
use crate::server::context::ServerContext;
use crate::session::SESSION_COOKIE;

/// Serves exactly one request on a stream, then lets it close.
pub struct Connection<S> {
    stream: BufReader<S>,
    context: Arc<ServerContext>,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(HttpRequest),
    Writing(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, context: Arc<ServerContext>) -> Self {
        Self {
            stream: BufReader::new(stream),
            context,
            state: ConnectionState::Reading,
        }
    }

    /// Runs parse, dispatch and write once.
    ///
    /// Any error returned here means nothing was written; the caller logs it
    /// and drops the stream.
    pub async fn run(mut self) -> anyhow::Result<()> {
        loop {
            match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Reading => {
                    let request = parse_request(&mut self.stream)
                        .await
                        .context("HTTP parse error")?;
                    self.state = ConnectionState::Processing(request);
                }

                ConnectionState::Processing(mut request) => {
                    let response = self
                        .handle_request(&mut request)
                        .with_context(|| format!("failed to serve {} {}", request.method().as_str(), request.path()))?;
                    self.state = ConnectionState::Writing(ResponseWriter::new(&response));
                }

                ConnectionState::Writing(mut writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    fn handle_request(&self, request: &mut HttpRequest) -> Result<HttpResponse, HttpError> {
        self.attach_session(request);

        match self.service(request) {
            Err(HttpError::UnsupportedContentType { accept }) => {
                warn!(accept = %accept, path = %request.path(), "Not acceptable");
                Ok(HttpResponse::not_acceptable())
            }
            other => other,
        }
    }

    fn service(&self, request: &HttpRequest) -> Result<HttpResponse, HttpError> {
        let handler = self.context.mapping.resolve(request.path())?;
        let mut response = HttpResponse::with_content_type(ContentType::negotiate(request)?);

        dispatch(handler.as_ref(), request, &mut response)?;

        debug!(
            method = request.method().as_str(),
            path = %request.path(),
            status = response.status.as_u16(),
            "Request served"
        );
        Ok(response)
    }

    fn attach_session(&self, request: &mut HttpRequest) {
        let session = request
            .cookie(SESSION_COOKIE)
            .and_then(|id| self.context.sessions.find(id));

        if let Some(session) = session {
            request.attach_session(session);
        }
    }
}
