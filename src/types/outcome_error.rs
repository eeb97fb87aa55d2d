//! The raised-fault form of a failing outcome.

use alloc::string::String;
use core::fmt;

use super::OutcomeKind;

/// Error returned when a failing outcome is forced into its payload.
///
/// [`Outcome::into_result`](super::Outcome::into_result) is the single
/// sanctioned point where an expected failure becomes a raised fault, for
/// call sites that have already decided the failure is non-recoverable.
///
/// # Examples
///
/// ```
/// use outcome_rail::{Outcome, OutcomeKind};
///
/// let outcome: Outcome<i32> = Outcome::failure("disk full");
/// let err = outcome.into_result().unwrap_err();
///
/// assert_eq!(err.kind(), OutcomeKind::GeneralError);
/// assert_eq!(err.to_string(), "Error: disk full");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutcomeError {
    kind: OutcomeKind,
    detail: String,
}

impl OutcomeError {
    pub(crate) fn new(kind: OutcomeKind, detail: String) -> Self {
        Self { kind, detail }
    }

    /// The kind of the outcome that produced this error.
    #[must_use]
    #[inline]
    pub fn kind(&self) -> OutcomeKind {
        self.kind
    }

    /// Joined error, validation, and message text of the failing outcome.
    #[must_use]
    #[inline]
    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl fmt::Display for OutcomeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.detail.is_empty() {
            f.write_str(self.kind.label())
        } else {
            write!(f, "{}: {}", self.kind.label(), self.detail)
        }
    }
}

impl core::error::Error for OutcomeError {}
