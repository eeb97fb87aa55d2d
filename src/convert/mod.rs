//! Cross-shape mapping between outcome payload shapes.
//!
//! These adapters translate an `Outcome<T1>` produced by one layer into the
//! `Outcome<T2>` the next layer speaks: single value to single value, single
//! value to collection, or any shape down to the payload-free outcome.
//!
//! Every function takes `Option<Outcome<..>>` and normalizes an absent
//! source into a general failure with [`INTERNAL_ERROR`] rather than
//! panicking; that is deliberate defensive normalization at layer
//! boundaries, not exception-based control flow.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{convert, Outcome};
//!
//! struct Row { id: u64, name: String }
//! struct Dto { id: u64 }
//!
//! let row = Outcome::success(Row { id: 3, name: "ada".into() });
//! let dto = convert::map_outcome(Some(row), |row| Dto { id: row.id });
//! assert_eq!(dto.payload().map(|d| d.id), Some(3));
//! ```
use alloc::vec::Vec;

use crate::types::{Outcome, OutcomeKind};

/// Constant failure message used when a source outcome is unexpectedly
/// absent.
pub const INTERNAL_ERROR: &str = "Internal error";

/// Maps an outcome onto a new payload type, kind by kind.
///
/// * absent source: general failure with [`INTERNAL_ERROR`];
/// * `GeneralError`: errors and message carry over, payload is dropped;
/// * `NotFound` / `Unauthorized` / `Forbidden`: kind and message carry over;
/// * `ValidationError`: field errors, count and message carry over, and a
///   partial payload is mapped through `mapper` when present;
/// * success: the payload is mapped when present, count and message carry
///   over either way.
///
/// `mapper` is only invoked on a present payload.
///
/// # Examples
///
/// ```
/// use outcome_rail::{convert, field_errors, Outcome, OutcomeKind};
///
/// let invalid: Outcome<u64> = Outcome::validation_failure(field_errors! {
///     "name" => ["required"],
/// });
/// let mapped = convert::map_outcome(Some(invalid), |id| id.to_string());
/// assert_eq!(mapped.kind(), OutcomeKind::ValidationError);
/// assert!(mapped.payload().is_none());
/// assert_eq!(mapped.validation_errors().len(), 1);
/// ```
pub fn map_outcome<T, U, F>(source: Option<Outcome<T>>, mapper: F) -> Outcome<U>
where
    F: FnOnce(T) -> U,
{
    let Some(source) = source else {
        return Outcome::failure(INTERNAL_ERROR);
    };
    match source.kind() {
        OutcomeKind::None => {
            let count = source.count;
            let message = source.message;
            let mut mapped = match source.payload {
                Some(payload) => Outcome::success(mapper(payload)),
                None => Outcome::success_empty(),
            };
            mapped.count = count;
            mapped.message = message;
            mapped
        }
        OutcomeKind::ValidationError => {
            let mut mapped =
                Outcome::validation_failure(source.validation_errors);
            mapped.payload = source.payload.map(mapper);
            mapped.count = source.count;
            mapped.message = source.message;
            mapped
        }
        // GeneralError, NotFound, Unauthorized, Forbidden: payload cannot
        // survive the type change, everything else carries over.
        _ => source.retag(),
    }
}

/// Maps a collection-shaped outcome onto a new element type, preserving the
/// count on success and on validation failures carrying partial data.
///
/// # Examples
///
/// ```
/// use outcome_rail::{convert, Outcome};
///
/// let rows = Outcome::success(vec![1, 2, 3]).with_count(3);
/// let mapped = convert::map_collection(Some(rows), |rows| {
///     rows.into_iter().map(|n| n * 10).collect()
/// });
/// assert_eq!(mapped.payload(), Some(&vec![10, 20, 30]));
/// assert_eq!(mapped.count(), 3);
/// ```
pub fn map_collection<T, U, F>(source: Option<Outcome<Vec<T>>>, mapper: F) -> Outcome<Vec<U>>
where
    F: FnOnce(Vec<T>) -> Vec<U>,
{
    map_outcome(source, mapper)
}

/// Maps a single-value outcome into a collection-shaped one.
///
/// A successful source with a payload yields a collection success with
/// count 1; a successful source without a payload yields count 0. Failing
/// kinds map exactly as in [`map_outcome`].
///
/// # Examples
///
/// ```
/// use outcome_rail::{convert, Outcome};
///
/// let one = Outcome::success(5);
/// let listed = convert::into_collection(Some(one), |n| vec![n]);
/// assert_eq!(listed.payload(), Some(&vec![5]));
/// assert_eq!(listed.count(), 1);
/// ```
pub fn into_collection<T, U, F>(source: Option<Outcome<T>>, mapper: F) -> Outcome<Vec<U>>
where
    F: FnOnce(T) -> Vec<U>,
{
    let Some(source) = source else {
        return Outcome::failure(INTERNAL_ERROR);
    };
    if source.kind() == OutcomeKind::None {
        let message = source.message;
        let mut mapped = match source.payload {
            Some(payload) => Outcome::success(mapper(payload)).with_count(1),
            None => Outcome::success_empty(),
        };
        mapped.message = message;
        mapped
    } else {
        map_outcome(Some(source), |payload| mapper(payload))
    }
}

/// Collapses any outcome to the payload-free outcome, preserving kind,
/// errors, validation errors and message while dropping payload and count.
///
/// # Examples
///
/// ```
/// use outcome_rail::{convert, Outcome, OutcomeKind};
///
/// let failed = Outcome::<i32>::failure("boom").with_message("save failed");
/// let collapsed = convert::into_empty(Some(failed));
/// assert_eq!(collapsed.kind(), OutcomeKind::GeneralError);
/// assert_eq!(collapsed.errors(), ["boom"]);
/// assert_eq!(collapsed.message(), Some("save failed"));
/// ```
pub fn into_empty<T>(source: Option<Outcome<T>>) -> Outcome<()> {
    let Some(source) = source else {
        return Outcome::failure(INTERNAL_ERROR);
    };
    let mut collapsed: Outcome<()> = source.retag();
    collapsed.count = 0;
    if collapsed.is_success() {
        collapsed.payload = Some(());
    }
    collapsed
}
