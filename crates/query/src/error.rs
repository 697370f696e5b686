//! Error types for query execution.
//!
//! This layer defines no error taxonomy of its own beyond what is needed to
//! surface client failures: transport errors propagate unchanged, and
//! non-success HTTP responses carry the status and body text back to the
//! caller. There is no retry, recovery, or fallback logic.

use thiserror::Error;

/// The error type for all query operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The client could not be constructed from the connection config.
    #[error("failed to build elasticsearch client: {message}")]
    ConnectionFailed {
        /// Description of what went wrong while building the transport.
        message: String,
    },

    /// A transport-level failure from the underlying client.
    #[error(transparent)]
    Transport(#[from] elasticsearch::Error),

    /// The server answered with a non-success HTTP status.
    #[error("request failed with status {status}: {body}")]
    Request {
        /// The HTTP status code returned by the server.
        status: u16,
        /// The response body text, as returned by the server.
        body: String,
    },

    /// The response body could not be decoded.
    #[error("failed to decode response: {message}")]
    InvalidResponse {
        /// Description of the decoding failure.
        message: String,
    },
}

/// Result alias for query operations.
pub type Result<T> = std::result::Result<T, Error>;
