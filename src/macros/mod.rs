//! Macros for literal construction of validation error maps.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{field_errors, Outcome};
//!
//! let outcome: Outcome<()> = Outcome::validation_failure(field_errors! {
//!     "name" => ["required", "too short"],
//!     "age" => ["must be positive"],
//! });
//!
//! assert_eq!(outcome.validation_errors().len(), 2);
//! ```

/// Builds a [`FieldErrors`](crate::FieldErrors) map from literals.
///
/// # Syntax
///
/// - `field_errors!()` - An empty map
/// - `field_errors! { "field" => ["message", ...], ... }` - One entry per
///   field, with an ordered list of messages
///
/// Repeating a field name appends to the earlier entry, matching
/// [`FieldErrors::push`](crate::FieldErrors::push) semantics.
///
/// # Examples
///
/// ```
/// use outcome_rail::field_errors;
///
/// let errors = field_errors! {
///     "email" => ["required"],
///     "email" => ["not an address"],
/// };
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors.get("email").unwrap().len(), 2);
/// ```
#[macro_export]
macro_rules! field_errors {
    () => {
        $crate::FieldErrors::new()
    };
    ($($field:expr => [$($message:expr),* $(,)?]),* $(,)?) => {{
        let mut map = $crate::FieldErrors::new();
        $($(
            map.push($field, $message);
        )*)*
        map
    }};
}
