//! Error types for the update flow.

use thiserror::Error;

/// Error type for HTTP transport failures.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, TLS errors, connection
    /// refused, and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The service did not respond within the request timeout.
    #[error("Request timed out")]
    Timeout,
}

/// Error type for a failed update call.
///
/// Either the transport failed or the service responded with something
/// other than the expected confirmation. In both cases the whole update
/// fails; there is no partial success.
#[derive(Debug, Error)]
pub enum UpdateError {
    /// Transport-level failure while contacting the service.
    #[error("Connection to the update service failed: {0}")]
    Http(#[from] HttpError),

    /// The service responded, but without the expected confirmation.
    ///
    /// Carries the full response body for diagnostics; the body usually
    /// names the cause (bad key, unknown host, rate limiting).
    #[error("Update not confirmed by the service")]
    UnexpectedResponse {
        /// Raw response body
        body: String,
    },
}
