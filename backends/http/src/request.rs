//! The request wrapper and the logging view over it.

use std::io::Read;

use bytes::Bytes;
use encoding_rs::{Encoding, UTF_8};
use http::header::CONTENT_TYPE;
use http::Uri;
use mime::Mime;
use wirelog_interface::{Headers, HttpRequest, Localhost, Result};

use crate::payload::Payload;

/// An outbound request as issued by the client.
///
/// Client libraries may rewrite a request before transmission, typically to
/// origin-form when routing through a proxy or connection layer. The variant
/// records whether that happened, so the logging view can always report the
/// target URI the caller originally specified.
#[derive(Debug)]
pub enum ClientRequest {
    /// The request exactly as the caller built it.
    Direct(http::Request<Option<Payload>>),
    /// A request rewritten by a routing layer, keeping the original target.
    Rerouted {
        /// The rewritten request that will go on the wire.
        request: http::Request<Option<Payload>>,
        /// The absolute URI the caller specified before rewriting.
        original: Uri,
    },
}

impl ClientRequest {
    /// Wraps a request that a routing layer has rewritten, remembering the
    /// target URI it was built with.
    pub fn rerouted(request: http::Request<Option<Payload>>, original: Uri) -> Self {
        ClientRequest::Rerouted { request, original }
    }

    /// Returns the target URI as the caller originally specified it.
    pub fn original_uri(&self) -> &Uri {
        match self {
            ClientRequest::Direct(request) => request.uri(),
            ClientRequest::Rerouted { original, .. } => original,
        }
    }

    /// Releases the wrapped request for transmission.
    pub fn into_request(self) -> http::Request<Option<Payload>> {
        match self {
            ClientRequest::Direct(request) => request,
            ClientRequest::Rerouted { request, .. } => request,
        }
    }

    fn request(&self) -> &http::Request<Option<Payload>> {
        match self {
            ClientRequest::Direct(request) => request,
            ClientRequest::Rerouted { request, .. } => request,
        }
    }

    fn request_mut(&mut self) -> &mut http::Request<Option<Payload>> {
        match self {
            ClientRequest::Direct(request) => request,
            ClientRequest::Rerouted { request, .. } => request,
        }
    }
}

impl From<http::Request<Option<Payload>>> for ClientRequest {
    fn from(request: http::Request<Option<Payload>>) -> Self {
        ClientRequest::Direct(request)
    }
}

/// Logging view over one outbound request.
///
/// Owns the wrapped request for the duration of the capture, so nothing else
/// can touch the payload stream while it is being buffered and replaced.
/// After the log entry is emitted, [`into_request`](LoggedRequest::into_request)
/// hands the request back with a replayable payload in place of the
/// original single-read stream.
pub struct LoggedRequest<L> {
    request: ClientRequest,
    localhost: L,
    body: Option<Bytes>,
}

impl<L: Localhost> LoggedRequest<L> {
    /// Wraps an outbound request together with a local address resolver.
    pub fn new(request: impl Into<ClientRequest>, localhost: L) -> Self {
        Self {
            request: request.into(),
            localhost,
            body: None,
        }
    }

    /// Releases the wrapped request for transmission.
    pub fn into_request(self) -> http::Request<Option<Payload>> {
        self.request.into_request()
    }

    fn request(&self) -> &http::Request<Option<Payload>> {
        self.request.request()
    }
}

impl<L: Localhost> HttpRequest for LoggedRequest<L> {
    fn remote(&self) -> String {
        match self.localhost.address() {
            Ok(address) => address,
            Err(err) => panic!("failed to resolve local address: {err}"),
        }
    }

    fn method(&self) -> &str {
        self.request().method().as_str()
    }

    fn uri(&self) -> Uri {
        self.request.original_uri().clone()
    }

    fn headers(&self) -> Headers {
        self.request()
            .headers()
            .iter()
            .map(|(name, value)| (name.as_str(), String::from_utf8_lossy(value.as_bytes())))
            .collect()
    }

    fn content_type(&self) -> String {
        self.request()
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_owned()
    }

    fn charset(&self) -> &'static Encoding {
        let content_type = self
            .request()
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse::<Mime>().ok());
        content_type
            .as_ref()
            .and_then(|mime| mime.get_param("charset").map(|charset| charset.as_str()))
            .and_then(|charset| Encoding::for_label(charset.as_bytes()))
            .unwrap_or(UTF_8)
    }

    fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    fn buffer_body(&mut self) -> Result<()> {
        let payload = self.request.request_mut().body_mut();
        let captured = match payload.take() {
            Some(Payload::Stream { mut stream, .. }) => {
                let mut buffered = Vec::new();
                stream.read_to_end(&mut buffered)?;
                let buffered = Bytes::from(buffered);
                *payload = Some(Payload::bytes(buffered.clone()));
                buffered
            }
            // Already captured once: recapture the same bytes.
            Some(Payload::Buffered(cursor)) => {
                let buffered = cursor.get_ref().clone();
                *payload = Some(Payload::Buffered(cursor));
                buffered
            }
            None => Bytes::new(),
        };
        self.body = Some(captured);
        Ok(())
    }
}
