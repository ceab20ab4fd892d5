//! The request view consumed by the logging pipeline.

use encoding_rs::Encoding;
use http::Uri;

use crate::headers::Headers;

/// Read-only view of one outbound HTTP request.
///
/// Adapters implement this trait over a concrete client library's request
/// object. A view wraps exactly one request for its entire lifetime and is
/// discarded once the log entry is emitted and the request proceeds to
/// transmission.
///
/// The body accessor returns `None` until [`buffer_body`] has completed;
/// callers are expected to buffer once per request before inspecting it.
///
/// [`buffer_body`]: HttpRequest::buffer_body
pub trait HttpRequest {
    /// Returns the address of the host emitting the request, for log
    /// attribution.
    ///
    /// # Panics
    ///
    /// Panics if local address resolution fails. Not knowing the local
    /// address is an environment misconfiguration, not a per-request
    /// condition.
    fn remote(&self) -> String;

    /// Returns the HTTP method token, unmodified.
    fn method(&self) -> &str;

    /// Returns the target URI as the client originally specified it.
    ///
    /// If the wrapped request was rewritten by an intermediate routing
    /// layer, the view unwraps one level to recover the pre-rewrite URI.
    fn uri(&self) -> Uri;

    /// Returns all headers, one entry per header occurrence.
    fn headers(&self) -> Headers;

    /// Returns the raw `Content-Type` header value, or `""` if absent.
    fn content_type(&self) -> String;

    /// Returns the charset named by the `Content-Type` header.
    ///
    /// Falls back to UTF-8 when the header is absent, unparsable, or
    /// carries no charset parameter.
    fn charset(&self) -> &'static Encoding;

    /// Returns the captured body, or `None` if [`buffer_body`] has not run.
    ///
    /// [`buffer_body`]: HttpRequest::buffer_body
    fn body(&self) -> Option<&[u8]>;

    /// Buffers the request payload so it can be both logged and transmitted.
    ///
    /// Payload streams are single-read, so the adapter drains the stream
    /// into memory and swaps a replayable in-memory stream back into the
    /// wrapped request. A request without a payload captures an empty body
    /// and is left untouched. Calling this again recaptures the bytes
    /// buffered by the first call.
    fn buffer_body(&mut self) -> crate::Result<()>;
}
