//! Async combinator variants over futures of outcomes.
//!
//! Each combinator awaits its input exactly once and composes sequentially
//! in a single logical pipeline; there is no fan-out, no retry, and no
//! cancellation handling here. A caller needing a timeout wraps the whole
//! chain externally.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::async_ext::FutureOutcomeExt;
//! use outcome_rail::Outcome;
//!
//! async fn fetch_user(id: u64) -> Outcome<String> {
//!     Outcome::success(format!("user-{}", id))
//! }
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let name = fetch_user(7)
//!     .map_async(|name| name.to_uppercase())
//!     .await;
//! assert_eq!(name.payload(), Some(&"USER-7".to_string()));
//! # });
//! ```
use alloc::string::String;
use core::future::Future;

use crate::types::{MessageVec, Outcome};

/// Extension trait adding outcome combinators to any future resolving to
/// an [`Outcome`].
///
/// Every method returns a future implementing the trait again, so
/// combinators chain the same way their synchronous counterparts do.
pub trait FutureOutcomeExt<T>: Future<Output = Outcome<T>> + Sized {
    /// Awaits the outcome, then transforms the payload if successful.
    ///
    /// Short-circuits exactly like [`Outcome::map`]: on failure the
    /// transform is never invoked.
    fn map_async<U, F>(self, f: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> U,
    {
        async move { self.await.map(f) }
    }

    /// Awaits the outcome, then chains an async outcome-producing function
    /// if successful.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::async_ext::FutureOutcomeExt;
    /// use outcome_rail::Outcome;
    ///
    /// async fn load(id: u64) -> Outcome<u64> { Outcome::success(id) }
    /// async fn enrich(id: u64) -> Outcome<String> { Outcome::success(format!("#{}", id)) }
    ///
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// let result = load(3).and_then_async(enrich).await;
    /// assert_eq!(result.payload(), Some(&"#3".to_string()));
    /// # });
    /// ```
    fn and_then_async<U, F, Fut>(self, f: F) -> impl Future<Output = Outcome<U>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U>>,
    {
        async move {
            let outcome = self.await;
            if outcome.is_success() {
                match outcome.payload {
                    Some(payload) => f(payload).await,
                    None => outcome.retag(),
                }
            } else {
                outcome.retag()
            }
        }
    }

    /// Awaits the outcome, then replaces the error list if it failed.
    fn map_errors_async<F, I, S>(self, f: F) -> impl Future<Output = Outcome<T>>
    where
        F: FnOnce(MessageVec) -> I,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        async move { self.await.map_errors(f) }
    }

    /// Awaits the outcome, then runs exactly one of the two async handlers.
    fn fold_async<R, S, F, SFut, FFut>(self, on_success: S, on_failure: F) -> impl Future<Output = R>
    where
        S: FnOnce(Option<T>) -> SFut,
        F: FnOnce(MessageVec) -> FFut,
        SFut: Future<Output = R>,
        FFut: Future<Output = R>,
    {
        async move {
            let outcome = self.await;
            if outcome.is_success() {
                on_success(outcome.payload).await
            } else {
                on_failure(outcome.errors).await
            }
        }
    }
}

impl<T, Fut> FutureOutcomeExt<T> for Fut where Fut: Future<Output = Outcome<T>> {}
