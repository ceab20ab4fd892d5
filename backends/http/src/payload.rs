//! Payload types for outbound requests with blocking bodies.

use std::fmt;
use std::io::{self, Cursor, Read};

use bytes::Bytes;

/// Trait for blocking payload streams.
pub trait PayloadStream: Read + Send + 'static {}

/// Type alias for boxed payload streams.
pub type BoxedStream = Box<dyn PayloadStream>;

impl<S: Read + Send + 'static + ?Sized> PayloadStream for S {}

/// The entity attached to an outbound request.
///
/// A payload starts out as a single-read [`Stream`](Payload::Stream); once a
/// [`LoggedRequest`](crate::LoggedRequest) captures it, the request carries a
/// [`Buffered`](Payload::Buffered) payload instead, which the transmission
/// path reads like any other body.
pub enum Payload {
    /// A single-read stream, consumed when the request is transmitted.
    Stream {
        /// The stream backing the payload.
        stream: BoxedStream,
        /// Declared length of the stream, if known.
        content_length: Option<u64>,
    },
    /// In-memory bytes left behind after the payload has been captured.
    Buffered(Cursor<Bytes>),
}

impl Payload {
    /// Creates a payload backed by a single-read stream.
    pub fn stream(stream: impl Read + Send + 'static, content_length: Option<u64>) -> Self {
        Payload::Stream {
            stream: Box::new(stream),
            content_length,
        }
    }

    /// Creates a payload backed by in-memory bytes.
    pub fn bytes(content: impl Into<Bytes>) -> Self {
        Payload::Buffered(Cursor::new(content.into()))
    }

    /// Returns the declared payload length, if known.
    pub fn content_length(&self) -> Option<u64> {
        match self {
            Payload::Stream { content_length, .. } => *content_length,
            Payload::Buffered(cursor) => Some(cursor.get_ref().len() as u64),
        }
    }
}

impl Read for Payload {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Payload::Stream { stream, .. } => stream.read(buf),
            Payload::Buffered(cursor) => cursor.read(buf),
        }
    }
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::Stream { content_length, .. } => f
                .debug_struct("Stream")
                .field("content_length", content_length)
                .finish_non_exhaustive(),
            Payload::Buffered(cursor) => f
                .debug_tuple("Buffered")
                .field(&cursor.get_ref().len())
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Read};

    use super::Payload;

    #[test]
    fn stream_payload_reads_through() {
        let mut payload = Payload::stream(Cursor::new(b"abc".to_vec()), Some(3));
        assert_eq!(payload.content_length(), Some(3));
        let mut out = Vec::new();
        payload.read_to_end(&mut out).unwrap();
        assert_eq!(out, b"abc");
    }

    #[test]
    fn buffered_payload_reports_exact_length() {
        let mut payload = Payload::bytes(&b"abcdef"[..]);
        assert_eq!(payload.content_length(), Some(6));
        let mut out = Vec::new();
        payload.read_to_end(&mut out).unwrap();
        assert_eq!(out, b"abcdef");
    }
}
