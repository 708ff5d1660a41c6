//! Layered request execution.
//!
//! [`RequestExecutor`] performs exactly one classified HTTP attempt;
//! [`RetryingExecutor`] wraps it and owns the attempt loop, body replay,
//! and deadline handling. The chain is assembled once when the client is
//! configured and never changes afterwards.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use tokio::time::{sleep, sleep_until, Instant};

use crate::retry::{exponential_backoff, is_retryable, RetryPolicy};
use crate::{PdfSuitError, Result};

/// Sends a single request and classifies the outcome. Never retries.
#[derive(Clone)]
pub(crate) struct RequestExecutor {
    http: reqwest::Client,
    headers: HeaderMap,
    timeout: Duration,
}

impl RequestExecutor {
    /// Builds the executor, resolving the configured header pairs into a
    /// header map with last-write-wins semantics.
    pub(crate) fn new(
        http: reqwest::Client,
        header_pairs: &[(String, String)],
        timeout: Duration,
    ) -> Result<Self> {
        let mut headers = HeaderMap::new();
        for (name, value) in header_pairs {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|err| {
                PdfSuitError::InvalidConfig(format!("invalid header name '{name}': {err}"))
            })?;
            let value = HeaderValue::from_str(value).map_err(|err| {
                PdfSuitError::InvalidConfig(format!("invalid value for header '{name:?}': {err}"))
            })?;
            headers.insert(name, value);
        }

        Ok(Self {
            http,
            headers,
            timeout,
        })
    }

    /// Executes one attempt: fresh request, default headers (a configured
    /// content type overlays the JSON default for POST), per-attempt
    /// timeout, then outcome classification.
    pub(crate) async fn execute(
        &self,
        method: Method,
        url: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Vec<u8>> {
        let mut headers = self.headers.clone();
        if method == Method::POST && !headers.contains_key(CONTENT_TYPE) {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        let mut request = self
            .http
            .request(method, url)
            .headers(headers)
            .timeout(self.timeout);
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await.map_err(PdfSuitError::Transport)?;
        let status = response.status();
        // Read the body to completion in all cases so the connection can be
        // reused.
        let bytes = response.bytes().await.map_err(PdfSuitError::Transport)?;

        if status.is_success() {
            return Ok(bytes.to_vec());
        }
        if status == StatusCode::UNAUTHORIZED {
            return Err(PdfSuitError::Unauthorized);
        }

        Err(PdfSuitError::Http {
            status: status.as_u16(),
            body: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }
}

/// Wraps a [`RequestExecutor`] with the bounded attempt loop.
#[derive(Clone)]
pub(crate) struct RetryingExecutor {
    inner: RequestExecutor,
    max_retries: usize,
    base_delay: Duration,
    deadline: Option<Duration>,
    policy: Option<Arc<dyn RetryPolicy>>,
}

impl RetryingExecutor {
    pub(crate) fn new(
        inner: RequestExecutor,
        max_retries: usize,
        base_delay: Duration,
        deadline: Option<Duration>,
        policy: Option<Arc<dyn RetryPolicy>>,
    ) -> Self {
        Self {
            inner,
            max_retries,
            base_delay,
            deadline,
            policy,
        }
    }

    pub(crate) fn with_policy(mut self, policy: Arc<dyn RetryPolicy>) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Runs up to `max_retries + 1` attempts. The body is buffered by the
    /// caller exactly once; every attempt receives its own copy, so a failed
    /// attempt can never leave a partially consumed payload behind.
    pub(crate) async fn execute(
        &self,
        method: Method,
        url: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Vec<u8>> {
        let deadline = self.deadline.map(|budget| Instant::now() + budget);
        let mut attempt = 0usize;

        loop {
            if attempt > 0 {
                // The delay is indexed by the attempt that just failed.
                let wait = self.wait_before(attempt - 1);

                #[cfg(feature = "tracing")]
                tracing::debug!(
                    attempt,
                    delay_ms = wait.as_millis() as u64,
                    "retrying request after backoff"
                );

                if !pause(wait, deadline).await {
                    return Err(PdfSuitError::Cancelled);
                }
            }

            let err = match self.inner.execute(method.clone(), url, body.clone()).await {
                Ok(bytes) => return Ok(bytes),
                Err(PdfSuitError::Unauthorized) => return Err(PdfSuitError::Unauthorized),
                Err(err) => err,
            };

            let wants_retry = match &self.policy {
                Some(policy) => policy.should_retry(attempt, &err),
                None => is_retryable(&err),
            };
            if !wants_retry {
                return Err(err);
            }
            if attempt >= self.max_retries {
                return Err(PdfSuitError::MaxRetriesExceeded(Box::new(err)));
            }
            attempt += 1;
        }
    }

    fn wait_before(&self, failed_attempt: usize) -> Duration {
        match &self.policy {
            Some(policy) => policy.wait_duration(failed_attempt),
            None => exponential_backoff(self.base_delay, failed_attempt),
        }
    }
}

/// Sleeps for `wait` unless `deadline` fires first. Returns `false` the
/// instant the deadline wins the race.
async fn pause(wait: Duration, deadline: Option<Instant>) -> bool {
    match deadline {
        Some(deadline) if Instant::now() + wait >= deadline => {
            sleep_until(deadline).await;
            false
        }
        _ => {
            sleep(wait).await;
            true
        }
    }
}
