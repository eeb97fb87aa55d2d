//! Status-code mapping for HTTP boundaries.
//!
//! The adapter stops at `http::StatusCode` plus the full outcome as the
//! body; wiring those into a concrete framework response (axum, actix,
//! anything speaking the `http` types) is the caller's one-liner. The body
//! is always the whole outcome, empty collections included, never just the
//! payload.
//!
//! # Examples
//!
//! ```
//! use http::StatusCode;
//! use outcome_rail::{http::respond, Outcome};
//!
//! let (status, body) = respond(Outcome::success(42).with_count(1));
//! assert_eq!(status, StatusCode::OK);
//! assert_eq!(body.payload(), Some(&42));
//! assert_eq!(body.count(), 1);
//!
//! let (status, body) = respond(Outcome::<i32>::not_found().with_message("user 7"));
//! assert_eq!(status, StatusCode::NOT_FOUND);
//! assert_eq!(body.message(), Some("user 7"));
//! assert!(body.errors().is_empty());
//! ```
use http::StatusCode;

use crate::types::{Outcome, OutcomeKind};

impl OutcomeKind {
    /// The HTTP status for this kind, from the
    /// [`status_code`](OutcomeKind::status_code) table.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

/// Splits an outcome into the HTTP status for its kind and the outcome
/// itself as the response body.
#[must_use]
pub fn respond<T>(outcome: Outcome<T>) -> (StatusCode, Outcome<T>) {
    (outcome.kind().status(), outcome)
}
