use thiserror::Error;

/// Substituted when an error response body is not parseable JSON (or absent).
pub const CONNECTION_ERROR_MESSAGE: &str = "An error occurred while connecting to the server";

/// Substituted when an error body parses as JSON but carries no `message` field.
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred";

/// Error surfaced by every client operation.
///
/// The taxonomy is deliberately flat: the server draws no distinction between
/// validation, authorization, and internal failures at this boundary, so a
/// non-success status always becomes [`RequestError::Api`] carrying the
/// human-readable message resolved from the error body. Errors are never
/// caught or retried inside the client layer; they propagate to the caller.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The server answered with a non-success status.
    ///
    /// The message is the `message` field of the JSON error body when present,
    /// otherwise one of the fixed fallback strings.
    #[error("{0}")]
    Api(String),

    /// The request never produced an HTTP response.
    #[error("Request failed: {0}")]
    Transport(String),

    /// A success response body could not be decoded into the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Input rejected before any request was issued.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Local file access failed while preparing a request.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RequestError {
    pub fn api(msg: impl Into<String>) -> Self {
        Self::Api(msg.into())
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api(_))
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}
