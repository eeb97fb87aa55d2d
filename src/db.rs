//! Rows-affected to outcome conversion for persistence layers.
//!
//! A write that touched at least one row is a success; anything else is a
//! general failure carrying either the caller's trimmed message or a
//! default derived from the payload type.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::db;
//!
//! struct Invoice;
//!
//! let saved = db::from_rows_affected(Invoice, 1, None);
//! assert!(saved.is_success());
//!
//! let unsaved = db::from_rows_affected(Invoice, 0, None);
//! assert_eq!(unsaved.errors(), ["Error saving Invoice"]);
//! ```
use alloc::format;
use alloc::string::String;

use crate::types::{Outcome, UnitOutcome};

/// Default failure message for payload-free write operations.
const DB_OPERATION_FAILED: &str = "Database operation failed.";

/// Converts a write operation on `payload` into an outcome.
///
/// `rows_affected > 0` yields a success wrapping the payload; otherwise a
/// general failure with `error_message` (trimmed, if non-blank) or
/// `"Error saving {TypeName}"`.
pub fn from_rows_affected<T>(
    payload: T,
    rows_affected: u64,
    error_message: Option<&str>,
) -> Outcome<T> {
    if rows_affected > 0 {
        Outcome::success(payload)
    } else {
        Outcome::failure(
            custom_message(error_message)
                .unwrap_or_else(|| format!("Error saving {}", short_type_name::<T>())),
        )
    }
}

/// Payload-free variant of [`from_rows_affected`].
///
/// # Examples
///
/// ```
/// use outcome_rail::db;
///
/// let outcome = db::unit_from_rows_affected(0, Some("  delete failed  "));
/// assert_eq!(outcome.errors(), ["delete failed"]);
///
/// assert!(db::unit_from_rows_affected(2, None).is_success());
/// ```
pub fn unit_from_rows_affected(rows_affected: u64, error_message: Option<&str>) -> UnitOutcome {
    if rows_affected > 0 {
        Outcome::done()
    } else {
        Outcome::failure(custom_message(error_message).unwrap_or_else(|| String::from(DB_OPERATION_FAILED)))
    }
}

fn custom_message(error_message: Option<&str>) -> Option<String> {
    error_message
        .map(str::trim)
        .filter(|message| !message.is_empty())
        .map(String::from)
}

/// Last path segment of the type name, without generic arguments.
fn short_type_name<T>() -> &'static str {
    let full = core::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
