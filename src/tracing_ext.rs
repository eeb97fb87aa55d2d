//! Structured failure logging via the `tracing` ecosystem.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.3", features = ["tracing"] }
//! ```
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use pin_project_lite::pin_project;
use tracing::Span;

use crate::types::Outcome;

impl<T> Outcome<T> {
    /// Emits a `warn` event describing the failure, then returns the
    /// outcome unchanged. Successes pass through silently.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::<i32>::failure("disk full").log_failure("save_invoice");
    /// assert!(outcome.is_failure());
    /// ```
    pub fn log_failure(self, operation: &str) -> Self {
        if self.is_failure() {
            tracing::warn!(
                operation,
                kind = self.kind().label(),
                detail = %self.failure_detail(),
                "operation failed"
            );
        }
        self
    }
}

/// Extension trait for futures of outcomes that logs failures inside a
/// tracing span.
///
/// # Example
///
/// ```rust,ignore
/// use outcome_rail::tracing_ext::FutureOutcomeSpanExt;
/// use tracing::info_span;
///
/// async fn fetch_user(id: u64) -> Outcome<User> {
///     repository
///         .get_user(id)
///         .with_span(info_span!("fetch_user", user_id = id))
///         .await
/// }
/// ```
pub trait FutureOutcomeSpanExt<T>: Future<Output = Outcome<T>> + Sized {
    /// Runs the future inside the current span, logging any failure there.
    fn with_span_logging(self) -> TracedOutcomeFuture<Self> {
        TracedOutcomeFuture {
            inner: self,
            span: Span::current(),
        }
    }

    /// Runs the future inside the given span, logging any failure there.
    fn with_span(self, span: Span) -> TracedOutcomeFuture<Self> {
        TracedOutcomeFuture { inner: self, span }
    }
}

impl<T, F> FutureOutcomeSpanExt<T> for F where F: Future<Output = Outcome<T>> {}

pin_project! {
    /// Future wrapper that logs failing outcomes within a span.
    ///
    /// Created by [`FutureOutcomeSpanExt::with_span_logging`] or
    /// [`FutureOutcomeSpanExt::with_span`].
    #[must_use = "futures do nothing unless polled"]
    pub struct TracedOutcomeFuture<F> {
        #[pin]
        inner: F,
        span: Span,
    }
}

impl<T, F> Future for TracedOutcomeFuture<F>
where
    F: Future<Output = Outcome<T>>,
{
    type Output = Outcome<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        let _guard = this.span.enter();
        match this.inner.poll(cx) {
            Poll::Ready(outcome) => {
                if outcome.is_failure() {
                    tracing::warn!(
                        kind = outcome.kind().label(),
                        detail = %outcome.failure_detail(),
                        "operation failed"
                    );
                }
                Poll::Ready(outcome)
            }
            Poll::Pending => Poll::Pending,
        }
    }
}
