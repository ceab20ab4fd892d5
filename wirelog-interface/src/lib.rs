//! Interface definitions for wirelog request adapters.
//!
//! This crate provides the contract that adapters must implement so that a
//! traffic-logging pipeline can inspect outbound HTTP requests without
//! depending on the HTTP client library that produced them. It defines the
//! [`HttpRequest`] view trait, the ordered [`Headers`] multimap, the
//! [`Localhost`] resolver collaborator, and the shared error types.
//!
//! ## Adapters
//!
//! An adapter wraps one outbound request from a concrete HTTP client library
//! and implements [`HttpRequest`] over it. The pipeline buffers the payload
//! once via [`HttpRequest::buffer_body`], reads the accessors to build a log
//! entry, and then releases the request so the client can still transmit it.

#![deny(missing_docs)]

mod error;
mod headers;
mod localhost;
mod request;

pub use error::{Error, Result};
pub use headers::Headers;
pub use localhost::{Localhost, SystemLocalhost};
pub use request::HttpRequest;
