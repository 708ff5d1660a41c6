use std::fmt;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use serde::Serialize;

use crate::executor::{RequestExecutor, RetryingExecutor};
use crate::retry::RetryPolicy;
use crate::{ClientOptions, Document, PdfSuitError, Result};

/// HTTP client for the PdfSuit template-rendering service.
///
/// The retry/execution chain is assembled once at configuration time and is
/// immutable afterwards; the client is cheap to clone and safe to share
/// across tasks.
#[derive(Clone)]
pub struct PdfSuitClient {
    executor: RetryingExecutor,
    base_url: String,
    options: ClientOptions,
    policy: Option<Arc<dyn RetryPolicy>>,
}

impl fmt::Debug for PdfSuitClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header_names: Vec<&str> = self
            .options
            .headers
            .iter()
            .map(|(name, _)| name.as_str())
            .collect();
        f.debug_struct("PdfSuitClient")
            .field("base_url", &self.base_url)
            .field("endpoint", &self.options.endpoint)
            .field("headers", &header_names)
            .field("max_retries", &self.options.max_retries)
            .finish()
    }
}

impl PdfSuitClient {
    /// Creates a client with default options.
    ///
    /// Fails with [`PdfSuitError::InvalidConfig`] when the base URL is
    /// empty.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::assemble(base_url.into(), ClientOptions::default(), None)
    }

    /// Creates a client from the `PDFSUIT_BASE_URL` environment variable.
    ///
    /// Returns [`PdfSuitError::InvalidConfig`] if the variable is missing
    /// or empty.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("PDFSUIT_BASE_URL").map_err(|_| {
            PdfSuitError::InvalidConfig("missing PDFSUIT_BASE_URL environment variable".to_owned())
        })?;
        Self::new(base_url)
    }

    /// Applies client options such as timeout, retry behavior, endpoint
    /// path, and default headers, rebuilding the execution chain.
    pub fn with_options(self, options: ClientOptions) -> Result<Self> {
        Self::assemble(self.base_url, options, self.policy)
    }

    /// Installs a custom retry policy, replacing the default
    /// exponential-backoff/transient-error classification.
    pub fn with_retry_policy(self, policy: Arc<dyn RetryPolicy>) -> Self {
        Self {
            executor: self.executor.with_policy(policy.clone()),
            base_url: self.base_url,
            options: self.options,
            policy: Some(policy),
        }
    }

    fn assemble(
        base_url: String,
        options: ClientOptions,
        policy: Option<Arc<dyn RetryPolicy>>,
    ) -> Result<Self> {
        if base_url.trim().is_empty() {
            return Err(PdfSuitError::InvalidConfig(
                "base URL cannot be empty".to_owned(),
            ));
        }

        let request = RequestExecutor::new(
            reqwest::Client::new(),
            &options.headers,
            Duration::from_millis(options.timeout_ms),
        )?;
        let executor = RetryingExecutor::new(
            request,
            options.max_retries,
            Duration::from_millis(options.retry_backoff_ms),
            options.deadline_ms.map(Duration::from_millis),
            policy.clone(),
        );

        Ok(Self {
            executor,
            base_url,
            options,
            policy,
        })
    }

    /// Sends a POST request with a JSON-encoded body and returns the raw
    /// response bytes.
    pub async fn post<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<Vec<u8>> {
        let payload = serde_json::to_vec(body).map_err(PdfSuitError::Serialization)?;
        let url = self.join_url(path);
        self.executor
            .execute(Method::POST, &url, Some(payload))
            .await
    }

    /// Sends a GET request and returns the raw response bytes.
    pub async fn get(&self, path: &str) -> Result<Vec<u8>> {
        let url = self.join_url(path);
        self.executor.execute(Method::GET, &url, None).await
    }

    /// Sends a document to the configured rendering endpoint and returns
    /// the rendered artifact as opaque bytes.
    pub async fn send(&self, doc: &Document) -> Result<Vec<u8>> {
        self.post(&self.options.endpoint, doc).await
    }

    /// Sends an untyped JSON document. A `null` value is rejected with
    /// [`PdfSuitError::DocumentNil`] before any network activity.
    pub async fn send_json(&self, doc: &serde_json::Value) -> Result<Vec<u8>> {
        if doc.is_null() {
            return Err(PdfSuitError::DocumentNil);
        }
        self.post(&self.options.endpoint, doc).await
    }

    /// Sends a document and writes the rendered artifact to `path`.
    ///
    /// Filesystem failures surface as [`PdfSuitError::Io`], distinct from
    /// every network error.
    pub async fn send_to_file(&self, doc: &Document, path: impl AsRef<Path>) -> Result<()> {
        let artifact = self.send(doc).await?;
        tokio::fs::write(path, &artifact)
            .await
            .map_err(PdfSuitError::Io)
    }

    fn join_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::PdfSuitClient;
    use crate::{ClientOptions, PdfSuitError};

    #[test]
    fn empty_base_url_is_rejected() {
        let err = PdfSuitClient::new("  ").expect_err("must fail");
        assert!(matches!(err, PdfSuitError::InvalidConfig(_)));
    }

    #[test]
    fn invalid_header_name_is_rejected() {
        let options = ClientOptions::default().with_header("bad header\n", "value");
        let err = PdfSuitClient::new("http://localhost:8080")
            .expect("must build")
            .with_options(options)
            .expect_err("must fail");
        assert!(matches!(err, PdfSuitError::InvalidConfig(_)));
    }

    #[test]
    fn debug_redacts_header_values() {
        let options = ClientOptions::default().with_header("Authorization", "secret-token");
        let client = PdfSuitClient::new("http://localhost:8080")
            .expect("must build")
            .with_options(options)
            .expect("headers must be valid");
        let debug = format!("{client:?}");
        assert!(debug.contains("Authorization"));
        assert!(!debug.contains("secret-token"));
    }
}
