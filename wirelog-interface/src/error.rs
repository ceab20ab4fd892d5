//! Error types for wirelog request capture.

use thiserror::Error;

/// Errors that can occur while capturing an outbound request.
///
/// Local address resolution failing is deliberately not represented here:
/// it signals an environment misconfiguration rather than a per-request
/// condition, and surfaces as a panic from [`HttpRequest::remote`] instead.
///
/// [`HttpRequest::remote`]: crate::HttpRequest::remote
#[derive(Debug, Error)]
pub enum Error {
    /// Reading the request payload stream failed.
    #[error("IO Error")]
    Io(#[from] std::io::Error),
}

/// Result type for wirelog request capture.
pub type Result<T> = std::result::Result<T, Error>;
