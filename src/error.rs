/// Error type returned by this crate.
#[derive(Debug, thiserror::Error)]
pub enum PdfSuitError {
    /// An absent document was handed to a send operation.
    #[error("document cannot be null")]
    DocumentNil,
    /// Client configuration is unusable (e.g. empty base URL).
    #[error("invalid client configuration: {0}")]
    InvalidConfig(String),
    /// A byte-source reader was given zero-length input.
    #[error("document is empty")]
    EmptyDocument,
    /// The document file path does not exist.
    #[error("file not found: {0}")]
    FileNotFound(String),
    /// Document JSON failed structural decoding.
    #[error("invalid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),
    /// Network or request execution error from `reqwest`, before any
    /// response was received.
    #[error("transport error: {0}")]
    Transport(reqwest::Error),
    /// The service rejected the credentials (HTTP 401). Never retried.
    #[error("unauthorized: invalid or missing credentials")]
    Unauthorized,
    /// Non-success HTTP status code with the raw response body.
    #[error("http error {status}: {body}")]
    Http {
        /// Numeric status code.
        status: u16,
        /// Response body as lossy UTF-8 text, kept for diagnostics.
        body: String,
    },
    /// The retry budget ran out; carries the last observed failure.
    #[error("maximum retry attempts exceeded")]
    MaxRetriesExceeded(#[source] Box<PdfSuitError>),
    /// The per-call deadline fired before the call resolved.
    #[error("call cancelled before completion")]
    Cancelled,
    /// The request body could not be encoded as JSON.
    #[error("failed to serialize request body: {0}")]
    Serialization(#[source] serde_json::Error),
    /// Filesystem error while writing a rendered artifact.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl PdfSuitError {
    /// Returns the HTTP status code when the error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Unauthorized => Some(401),
            Self::MaxRetriesExceeded(inner) => inner.status(),
            _ => None,
        }
    }
}
