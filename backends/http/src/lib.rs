//! wirelog adapter for outbound requests modeled with the [`http`] crate.
//!
//! Blocking HTTP clients commonly describe an outbound request as an
//! [`http::Request`] whose body is an [`io::Read`](std::io::Read) stream.
//! This crate wraps such a request in a [`LoggedRequest`] view implementing
//! [`wirelog_interface::HttpRequest`], so a logging pipeline can inspect it
//! and still hand the request back for transmission afterward.
//!
//! Payload streams are single-read: [`LoggedRequest`] drains the stream into
//! memory once and swaps a replayable [`Payload`] back into the request, so
//! the bytes read for the log entry are the bytes that go on the wire.

mod payload;
mod request;

pub use payload::{BoxedStream, Payload, PayloadStream};
pub use request::{ClientRequest, LoggedRequest};
