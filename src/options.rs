/// Configures HTTP timeout, retry behavior, and the rendering endpoint.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClientOptions {
    /// Per-attempt request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Maximum number of retries after the initial attempt.
    pub max_retries: usize,
    /// Base retry backoff in milliseconds (exponential strategy).
    pub retry_backoff_ms: u64,
    /// Optional wall-clock budget for a whole call in milliseconds,
    /// covering attempts and backoff waits. When it fires during an
    /// inter-attempt wait the call resolves to `Cancelled`.
    pub deadline_ms: Option<u64>,
    /// Path of the template-rendering endpoint, joined to the base URL.
    pub endpoint: String,
    /// Default headers attached to every request. Later entries win over
    /// earlier ones with the same name, and any entry overlays the
    /// client's own defaults (such as the JSON content type on POST).
    pub headers: Vec<(String, String)>,
}

/// Endpoint path used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "/api/v1/generate/template-pdf";

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout_ms: 30_000,
            max_retries: 3,
            retry_backoff_ms: 1_000,
            deadline_ms: None,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            headers: Vec::new(),
        }
    }
}

impl ClientOptions {
    /// Adds a default header, keeping earlier entries intact so a repeated
    /// name resolves last-write-wins at request build time.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{ClientOptions, DEFAULT_ENDPOINT};

    #[test]
    fn defaults_match_documented_values() {
        let opts = ClientOptions::default();
        assert_eq!(opts.timeout_ms, 30_000);
        assert_eq!(opts.max_retries, 3);
        assert_eq!(opts.retry_backoff_ms, 1_000);
        assert_eq!(opts.deadline_ms, None);
        assert_eq!(opts.endpoint, DEFAULT_ENDPOINT);
        assert!(opts.headers.is_empty());
    }

    #[test]
    fn with_header_appends_in_order() {
        let opts = ClientOptions::default()
            .with_header("X-Tenant", "a")
            .with_header("X-Tenant", "b");
        assert_eq!(opts.headers.len(), 2);
        assert_eq!(opts.headers[1].1, "b");
    }
}
