//! Structured capture and logging of outbound HTTP traffic.
//!
//! ## Overview
//!
//! Wirelog lets an application log the HTTP requests it is about to send —
//! method, URI, headers, content type, charset, and body — without coupling
//! the logging pipeline to the HTTP client library in use. An adapter crate
//! wraps the client's request object in a view implementing [`HttpRequest`];
//! this crate consumes that view and emits one structured [`tracing`] event
//! per request.
//!
//! Request payload streams are single-read, so the view buffers the payload
//! into memory once and swaps a replayable stream back into the request:
//! the bytes that appear in the log entry are exactly the bytes the client
//! then puts on the wire.
//!
//! ## The `wirelog` crate
//!
//! This crate is the user-facing facade. It re-exports the adapter contract
//! from [`wirelog-interface`] and provides [`TrafficLogger`], which buffers
//! a request view and emits the log event in one call. Adapters for concrete
//! request models live in separate crates; `wirelog-backend-http` covers
//! clients that model requests with the `http` crate and blocking payload
//! streams.
//!
//! ## Usage
//!
//! ```no_run
//! use wirelog::{LogOptions, TrafficLogger};
//! # fn wrap_somehow() -> Box<dyn wirelog::HttpRequest> { unimplemented!() }
//!
//! let logger = TrafficLogger::new(LogOptions::default());
//! let mut view = wrap_somehow();
//! logger.log_request(&mut *view)?;
//! // hand the request back to the client for transmission
//! # Ok::<(), wirelog::Error>(())
//! ```
//!
//! [`wirelog-interface`]: wirelog_interface

#![forbid(missing_docs)]

mod logger;

pub use logger::{LogOptions, TrafficLogger};
pub use wirelog_interface::{Error, Headers, HttpRequest, Localhost, Result, SystemLocalhost};
