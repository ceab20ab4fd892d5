//! Structured emission of captured requests.

use tracing::info;
use wirelog_interface::HttpRequest;

/// Configuration options for a [`TrafficLogger`].
#[derive(Debug, Clone)]
pub struct LogOptions {
    /// Whether to include the full header multimap in the log event.
    pub include_headers: bool,
    /// Maximum number of body bytes to decode into the log event, or `None`
    /// to omit the body text entirely.
    pub body_preview_limit: Option<usize>,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            include_headers: true,
            body_preview_limit: None,
        }
    }
}

/// Emits one structured `tracing` event per outbound request.
///
/// The logger drives the capture itself: [`log_request`](TrafficLogger::log_request)
/// buffers the payload through the view, then records the event. Afterwards
/// the caller releases the request to the client, which transmits the
/// replayable payload left behind by the capture.
#[derive(Debug, Clone, Default)]
pub struct TrafficLogger {
    options: LogOptions,
}

impl TrafficLogger {
    /// Creates a logger with the given options.
    pub fn new(options: LogOptions) -> Self {
        Self { options }
    }

    /// Buffers the request body and emits the log event.
    ///
    /// Fails if reading the payload stream fails; no event is emitted in
    /// that case.
    pub fn log_request(&self, request: &mut dyn HttpRequest) -> wirelog_interface::Result<()> {
        request.buffer_body()?;

        let body = request.body().unwrap_or_default();
        let headers = self.options.include_headers.then(|| request.headers());
        let preview = self.options.body_preview_limit.map(|limit| {
            let (text, _, _) = request.charset().decode(&body[..body.len().min(limit)]);
            text.into_owned()
        });

        info!(
            remote = %request.remote(),
            method = %request.method(),
            uri = %request.uri(),
            content_type = %request.content_type(),
            charset = request.charset().name(),
            body_size = body.len(),
            headers = ?headers,
            body = preview.as_deref(),
            "outbound request"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use encoding_rs::{Encoding, UTF_8};
    use http::Uri;
    use wirelog_interface::{Headers, HttpRequest};

    use super::{LogOptions, TrafficLogger};

    struct StubRequest {
        body: Option<Vec<u8>>,
    }

    impl HttpRequest for StubRequest {
        fn remote(&self) -> String {
            "192.0.2.1".to_owned()
        }

        fn method(&self) -> &str {
            "POST"
        }

        fn uri(&self) -> Uri {
            Uri::from_static("http://example.com/submit")
        }

        fn headers(&self) -> Headers {
            [("content-type", "text/plain")].into_iter().collect()
        }

        fn content_type(&self) -> String {
            "text/plain".to_owned()
        }

        fn charset(&self) -> &'static Encoding {
            UTF_8
        }

        fn body(&self) -> Option<&[u8]> {
            self.body.as_deref()
        }

        fn buffer_body(&mut self) -> wirelog_interface::Result<()> {
            self.body = Some(b"stub body".to_vec());
            Ok(())
        }
    }

    #[test]
    fn log_request_buffers_before_emitting() {
        let mut request = StubRequest { body: None };
        let logger = TrafficLogger::new(LogOptions {
            include_headers: true,
            body_preview_limit: Some(4),
        });

        logger.log_request(&mut request).unwrap();
        assert_eq!(request.body(), Some(&b"stub body"[..]));
    }
}
