//! A `no_std` compatible tagged operation-outcome type with functional
//! combinators, cross-shape mapping, and boundary helpers for HTTP status
//! codes, paging and persistence write results.
//!
//! An [`Outcome<T>`](Outcome) carries a closed [`OutcomeKind`], an optional
//! payload, a message, an ordered error list, and a field-scoped
//! [`FieldErrors`] map, so fallible operations compose without exceptions.
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `outcome_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Producing and composing outcomes
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! fn half(n: i32) -> Outcome<i32> {
//!     if n % 2 == 0 {
//!         Outcome::success(n / 2)
//!     } else {
//!         Outcome::failure("not divisible by two")
//!     }
//! }
//!
//! let result = half(42).map(|n| n * 10);
//! assert!(result.is_success());
//! assert_eq!(result.payload(), Some(&210));
//!
//! let failed = half(7).map(|n| n * 10);
//! assert!(failed.is_failure());
//! assert_eq!(failed.errors(), ["not divisible by two"]);
//! ```
//!
//! ## Field-scoped validation failures
//!
//! ```
//! use outcome_rail::{field_errors, Outcome, OutcomeKind};
//!
//! let outcome: Outcome<()> = Outcome::validation_failure(field_errors! {
//!     "name" => ["required"],
//!     "age" => ["must be positive"],
//! });
//!
//! assert_eq!(outcome.kind(), OutcomeKind::ValidationError);
//! assert_eq!(
//!     outcome.validation_errors().get("name"),
//!     Some(&["required".to_string()][..])
//! );
//! ```
//!
//! ## Cross-shape mapping at a layer boundary
//!
//! ```
//! use outcome_rail::{convert, Outcome};
//!
//! struct User { id: u64 }
//!
//! let found = Outcome::success(User { id: 7 });
//! let dto = convert::map_outcome(Some(found), |user| user.id);
//! assert_eq!(dto.payload(), Some(&7));
//!
//! // A missing source normalizes into a general failure instead of panicking.
//! let missing: Option<Outcome<User>> = None;
//! let dto = convert::map_outcome(missing, |user| user.id);
//! assert_eq!(dto.errors(), [convert::INTERNAL_ERROR]);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Cross-shape mapping between outcome payload shapes
pub mod convert;
/// Rows-affected to outcome conversion for persistence layers
pub mod db;
/// Macros for literal construction of field error maps
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Paging, ordering and search application for query collections
pub mod query;
/// Core outcome types: kind, payload, errors, field errors
pub mod types;

/// Async combinator variants over futures of outcomes (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Status-code mapping for HTTP boundaries (requires `http` feature)
#[cfg(feature = "http")]
pub mod http;

/// Structured failure logging via `tracing` (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use convert::INTERNAL_ERROR;
pub use query::{ApplyPaging, OrderBy, Paging, Search, DEFAULT_PAGE_SIZE};
pub use types::{
    FieldErrors, MessageVec, Outcome, OutcomeError, OutcomeKind, SortDirection, UnitOutcome,
    GENERAL_FIELD,
};

#[cfg(feature = "async")]
pub use async_ext::FutureOutcomeExt;
