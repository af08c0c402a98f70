//! Error types for Glossa API calls.

use thiserror::Error;

/// Errors surfaced by [`GlossaClient`](crate::GlossaClient) operations.
///
/// Errors propagate to the caller unmodified; the client never retries and
/// never returns partial results.
#[derive(Debug, Error)]
pub enum GlossaError {
    /// Network-level failure: DNS resolution, refused connection, timeout,
    /// or a dropped connection while reading the response body.
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Request {
        /// HTTP status code of the response.
        status: u16,
        /// Server-provided message body, verbatim.
        body: String,
    },

    /// The response body is not valid JSON or does not match the shape
    /// expected for the endpoint.
    #[error("decode error: {0}")]
    Decode(String),

    /// The caller supplied a disallowed combination of inputs. Raised
    /// before any network I/O.
    #[error("invalid input: {0}")]
    Validation(String),
}
