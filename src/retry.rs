use std::time::Duration;

use crate::PdfSuitError;

/// Pluggable retry decision for failed attempts.
///
/// `attempt` is the 0-based index of the attempt that just failed. The
/// executor bounds the loop by its configured maximum regardless of what
/// [`RetryPolicy::should_retry`] answers, and it never consults the policy
/// for terminal failures such as [`PdfSuitError::Unauthorized`].
pub trait RetryPolicy: Send + Sync {
    /// Whether another attempt is warranted after `error`.
    fn should_retry(&self, attempt: usize, error: &PdfSuitError) -> bool;

    /// How long to wait before the attempt following `attempt`.
    fn wait_duration(&self, attempt: usize) -> Duration;
}

/// Exponential backoff: `base * 2^attempt`, with the exponent capped so the
/// shift cannot overflow and the multiply saturating.
pub fn exponential_backoff(base: Duration, attempt: usize) -> Duration {
    let exp = attempt.min(16) as u32;
    base.saturating_mul(1 << exp)
}

/// Default retryability classification: transport-level failures and 5xx
/// responses are transient; everything else is surfaced as-is.
pub(crate) fn is_retryable(error: &PdfSuitError) -> bool {
    match error {
        PdfSuitError::Transport(_) => true,
        PdfSuitError::Http { status, .. } => *status >= 500,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{exponential_backoff, is_retryable};
    use crate::PdfSuitError;

    #[test]
    fn backoff_doubles_per_attempt() {
        let base = Duration::from_millis(100);
        assert_eq!(exponential_backoff(base, 0), Duration::from_millis(100));
        assert_eq!(exponential_backoff(base, 1), Duration::from_millis(200));
        assert_eq!(exponential_backoff(base, 2), Duration::from_millis(400));
    }

    #[test]
    fn backoff_exponent_is_capped() {
        let base = Duration::from_millis(1);
        assert_eq!(exponential_backoff(base, 64), exponential_backoff(base, 16));
    }

    #[test]
    fn server_errors_are_retryable() {
        assert!(is_retryable(&PdfSuitError::Http {
            status: 503,
            body: String::new(),
        }));
        assert!(is_retryable(&PdfSuitError::Http {
            status: 500,
            body: String::new(),
        }));
    }

    #[test]
    fn client_errors_are_not_retryable() {
        assert!(!is_retryable(&PdfSuitError::Http {
            status: 404,
            body: String::new(),
        }));
        assert!(!is_retryable(&PdfSuitError::Unauthorized));
        assert!(!is_retryable(&PdfSuitError::DocumentNil));
    }
}
