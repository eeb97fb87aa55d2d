//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use outcome_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`field_errors!`](crate::field_errors)
//! - **Types**: [`Outcome`], [`UnitOutcome`], [`OutcomeKind`],
//!   [`FieldErrors`], [`OutcomeError`], [`Paging`], [`OrderBy`], [`Search`]
//! - **Traits**: [`ApplyPaging`]
//! - **Functions**: the [`convert`](crate::convert) cross-shape mappers
//!
//! # Examples
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn lookup(id: u64) -> Outcome<u64> {
//!     if id == 0 {
//!         Outcome::not_found().with_message("no such id")
//!     } else {
//!         Outcome::success(id)
//!     }
//! }
//!
//! assert!(lookup(0).is_failure());
//! ```

pub use crate::field_errors;

pub use crate::convert::{into_collection, into_empty, map_collection, map_outcome};
pub use crate::query::{ApplyPaging, OrderBy, Paging, Search};
pub use crate::types::{
    FieldErrors, Outcome, OutcomeError, OutcomeKind, SortDirection, UnitOutcome,
};

#[cfg(feature = "async")]
pub use crate::async_ext::FutureOutcomeExt;

#[cfg(feature = "tracing")]
pub use crate::tracing_ext::FutureOutcomeSpanExt;
