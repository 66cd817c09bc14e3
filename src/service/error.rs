//! Error types for the review service client.

use thiserror::Error;

/// Errors surfaced by the HTTP client.
///
/// Non-2xx status codes are NOT errors at this layer; they are reported as
/// part of the [`ApiResponse`](crate::service::ApiResponse) so the caller can
/// judge them against the operation's acceptable set.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Connection failures, timeouts, and protocol-level breakage.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}
