//! Core outcome types.
//!
//! The tagged outcome value lives here: its discriminant kind, the ordered
//! field-error multimap carried by validation failures, and the unwrapping
//! error raised when a failing outcome is forced into a payload.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::types::{Outcome, OutcomeKind};
//!
//! let outcome = Outcome::success(7).with_message("created");
//! assert_eq!(outcome.kind(), OutcomeKind::None);
//! assert_eq!(outcome.message(), Some("created"));
//! ```
use alloc::string::String;

use smallvec::SmallVec;

pub mod field_errors;
pub mod kind;
pub mod outcome;
pub mod outcome_error;

pub use field_errors::{FieldErrors, GENERAL_FIELD};
pub use kind::{OutcomeKind, SortDirection};
pub use outcome::{Outcome, UnitOutcome};
pub use outcome_error::OutcomeError;

/// SmallVec-backed collection used for error message sequences.
///
/// Uses inline storage for a single element, since the overwhelmingly
/// common failure carries exactly one message.
pub type MessageVec = SmallVec<[String; 1]>;
