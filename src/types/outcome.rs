//! The tagged outcome value and its combinators.

use alloc::string::{String, ToString};
use core::iter;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{FieldErrors, MessageVec, OutcomeError, OutcomeKind};

/// Fallback primary error used when a wrapped error renders to nothing.
const UNKNOWN_ERROR: &str = "Unknown error";

/// The outcome of a fallible operation, without exceptions.
///
/// An `Outcome<T>` carries exactly one active [`OutcomeKind`] plus the data
/// that kind is allowed to carry:
///
/// * success (`OutcomeKind::None`) — optional payload, count, message;
/// * `GeneralError` — an ordered list of error messages;
/// * `ValidationError` — a field-scoped [`FieldErrors`] map, and optionally
///   a partial payload when partial data is still meaningful;
/// * `NotFound` / `Unauthorized` / `Forbidden` — the message is the carrier.
///
/// Outcomes are created exclusively through the named factories below, which
/// establish those invariants atomically; there is no public field access and
/// no public default constructor. After construction the value is immutable
/// except through [`add_error`](Self::add_error) and
/// [`add_validation_error`](Self::add_validation_error), which are intended
/// for the original builder before the outcome is handed off.
///
/// # Examples
///
/// ```
/// use outcome_rail::{Outcome, OutcomeKind};
///
/// let listed = Outcome::success(vec![1, 2, 3]).with_count(3);
/// assert_eq!(listed.count(), 3);
///
/// let missing: Outcome<i32> = Outcome::not_found().with_message("user 7");
/// assert_eq!(missing.kind(), OutcomeKind::NotFound);
/// assert_eq!(missing.message(), Some("user 7"));
/// assert!(missing.errors().is_empty());
/// ```
#[must_use]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome<T> {
    pub(crate) kind: OutcomeKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub(crate) payload: Option<T>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub(crate) count: usize,
    #[cfg_attr(feature = "serde", serde(default))]
    pub(crate) message: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub(crate) errors: MessageVec,
    #[cfg_attr(feature = "serde", serde(default))]
    pub(crate) validation_errors: FieldErrors,
}

/// The payload-free outcome; the original non-generic result is this
/// specialization rather than a parallel type.
pub type UnitOutcome = Outcome<()>;

impl<T> Outcome<T> {
    fn bare(kind: OutcomeKind) -> Self {
        Self {
            kind,
            payload: None,
            count: 0,
            message: None,
            errors: MessageVec::new(),
            validation_errors: FieldErrors::new(),
        }
    }

    // ---------- factories ----------

    /// Creates a successful outcome wrapping `payload`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::success(42);
    /// assert!(outcome.is_success());
    /// assert_eq!(outcome.payload(), Some(&42));
    /// ```
    #[inline]
    pub fn success(payload: T) -> Self {
        let mut outcome = Self::bare(OutcomeKind::None);
        outcome.payload = Some(payload);
        outcome
    }

    /// Creates a successful outcome without a payload.
    ///
    /// This is the target of cross-shape mappings whose source succeeded
    /// without data; [`success`](Self::success) is the normal entry point.
    #[inline]
    pub fn success_empty() -> Self {
        Self::bare(OutcomeKind::None)
    }

    /// Creates a general failure from a single error message.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, OutcomeKind};
    ///
    /// let outcome: Outcome<()> = Outcome::failure("disk full");
    /// assert_eq!(outcome.kind(), OutcomeKind::GeneralError);
    /// assert_eq!(outcome.errors(), ["disk full"]);
    /// ```
    #[inline]
    pub fn failure(error: impl Into<String>) -> Self {
        Self::failure_many(iter::once(error.into()))
    }

    /// Creates a general failure from a sequence of error messages.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome: Outcome<()> = Outcome::failure_many(["bad input", "bad state"]);
    /// assert_eq!(outcome.errors().len(), 2);
    /// ```
    #[inline]
    pub fn failure_many<I, S>(errors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut outcome = Self::bare(OutcomeKind::GeneralError);
        outcome.errors = errors.into_iter().map(Into::into).collect();
        outcome
    }

    /// Creates a general failure from an error value.
    ///
    /// The primary error is the error's rendered text, falling back to
    /// `"Unknown error"` when it renders empty; the inner cause's text, if
    /// present, becomes the outcome message.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
    /// let outcome: Outcome<String> = Outcome::from_error(&io);
    /// assert_eq!(outcome.errors(), ["no such file"]);
    /// ```
    pub fn from_error<E>(error: &E) -> Self
    where
        E: core::error::Error + ?Sized,
    {
        let primary = error.to_string();
        let primary = if primary.is_empty() {
            String::from(UNKNOWN_ERROR)
        } else {
            primary
        };
        let mut outcome = Self::failure(primary);
        if let Some(source) = error.source() {
            outcome.message = Some(source.to_string());
        }
        outcome
    }

    /// Creates a validation failure carrying field-scoped messages.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{field_errors, Outcome, OutcomeKind};
    ///
    /// let outcome: Outcome<()> = Outcome::validation_failure(field_errors! {
    ///     "email" => ["required"],
    /// });
    /// assert_eq!(outcome.kind(), OutcomeKind::ValidationError);
    /// assert!(outcome.errors().is_empty());
    /// ```
    #[inline]
    pub fn validation_failure(field_errors: FieldErrors) -> Self {
        let mut outcome = Self::bare(OutcomeKind::ValidationError);
        outcome.validation_errors = field_errors;
        outcome
    }

    /// Creates a validation failure that still carries a partial payload.
    ///
    /// Payload on a non-success outcome is a deliberate, documented
    /// exception: validation failures may retain partial data so the caller
    /// can re-render what was submitted.
    #[inline]
    pub fn validation_failure_with_payload(field_errors: FieldErrors, payload: T) -> Self {
        let mut outcome = Self::validation_failure(field_errors);
        outcome.payload = Some(payload);
        outcome
    }

    /// Creates a validation failure from a single message, recorded under
    /// the [`GENERAL_FIELD`](crate::GENERAL_FIELD) key.
    #[inline]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::validation_failure(FieldErrors::general(message))
    }

    /// Creates a validation failure with a single message for one field.
    #[inline]
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut field_errors = FieldErrors::new();
        field_errors.push(field, message);
        Self::validation_failure(field_errors)
    }

    /// Creates a not-found outcome; attach detail via
    /// [`with_message`](Self::with_message).
    #[inline]
    pub fn not_found() -> Self {
        Self::bare(OutcomeKind::NotFound)
    }

    /// Creates an unauthorized outcome.
    #[inline]
    pub fn unauthorized() -> Self {
        Self::bare(OutcomeKind::Unauthorized)
    }

    /// Creates a forbidden outcome.
    #[inline]
    pub fn forbidden() -> Self {
        Self::bare(OutcomeKind::Forbidden)
    }

    // ---------- builder finishers ----------

    /// Sets the human-readable message; valid on any kind.
    #[inline]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the auxiliary cardinality, e.g. the total row count behind a
    /// paged success.
    #[inline]
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    // ---------- queries ----------

    /// The active discriminant.
    #[must_use]
    #[inline]
    pub fn kind(&self) -> OutcomeKind {
        self.kind
    }

    /// Returns `true` when the operation succeeded.
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        !self.kind.is_error()
    }

    /// Returns `true` for any non-success kind.
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        self.kind.is_error()
    }

    /// Equivalent predicate to [`is_failure`](Self::is_failure), kept for
    /// compatibility with the original naming.
    #[must_use]
    #[inline]
    pub fn has_error(&self) -> bool {
        self.is_failure()
    }

    /// The carried payload, if any.
    #[must_use]
    #[inline]
    pub fn payload(&self) -> Option<&T> {
        self.payload.as_ref()
    }

    /// Mutable access to the carried payload, if any.
    #[must_use]
    #[inline]
    pub fn payload_mut(&mut self) -> Option<&mut T> {
        self.payload.as_mut()
    }

    /// The human-readable message, if any.
    #[must_use]
    #[inline]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Auxiliary cardinality; meaningful only for collection-shaped
    /// successes, 0 otherwise.
    #[must_use]
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Error messages; non-empty only for `GeneralError`.
    #[must_use]
    #[inline]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Field-scoped validation messages; non-empty only for
    /// `ValidationError`.
    #[must_use]
    #[inline]
    pub fn validation_errors(&self) -> &FieldErrors {
        &self.validation_errors
    }

    // ---------- mutators (original builder only) ----------

    /// Appends a general error, transitioning the kind to `GeneralError`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, OutcomeKind};
    ///
    /// let mut outcome = Outcome::success(1);
    /// outcome.add_error("post-check failed");
    /// assert_eq!(outcome.kind(), OutcomeKind::GeneralError);
    /// assert_eq!(outcome.errors(), ["post-check failed"]);
    /// ```
    #[inline]
    pub fn add_error(&mut self, error: impl Into<String>) {
        self.kind = OutcomeKind::GeneralError;
        self.errors.push(error.into());
    }

    /// Appends validation messages for `field`, transitioning the kind to
    /// `ValidationError`.
    ///
    /// Repeated calls for the same field name APPEND under one key; field
    /// insertion order is preserved.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let mut outcome: Outcome<()> = Outcome::success_empty();
    /// outcome.add_validation_error("name", ["required"]);
    /// outcome.add_validation_error("name", ["too short"]);
    ///
    /// assert_eq!(outcome.validation_errors().get("name").unwrap().len(), 2);
    /// ```
    #[inline]
    pub fn add_validation_error<I, S>(&mut self, field: impl Into<String>, messages: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.kind = OutcomeKind::ValidationError;
        self.validation_errors.extend_field(field, messages);
    }

    // ---------- unwrapping ----------

    /// Converts into a plain `Result`, surfacing failure as an
    /// [`OutcomeError`] carrying the joined error and message text.
    ///
    /// A successful outcome without a payload is also an error here, since
    /// there is nothing to unwrap.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::success(5).into_result().unwrap(), 5);
    ///
    /// let failed: Outcome<i32> = Outcome::failure("bad input");
    /// assert!(failed.into_result().is_err());
    /// ```
    pub fn into_result(self) -> Result<T, OutcomeError> {
        if self.is_success() {
            match self.payload {
                Some(payload) => Ok(payload),
                None => Err(OutcomeError::new(
                    OutcomeKind::None,
                    String::from("successful outcome carried no payload"),
                )),
            }
        } else {
            let detail = self.failure_detail();
            Err(OutcomeError::new(self.kind, detail))
        }
    }

    /// Consumes the outcome, returning the payload if present.
    #[must_use]
    #[inline]
    pub fn into_payload(self) -> Option<T> {
        self.payload
    }

    /// Returns the payload or `fallback`, never failing.
    #[must_use]
    #[inline]
    pub fn payload_or(self, fallback: T) -> T {
        self.payload.unwrap_or(fallback)
    }

    /// Returns the payload or computes a fallback from a closure.
    #[must_use]
    #[inline]
    pub fn payload_or_else(self, fallback: impl FnOnce() -> T) -> T {
        self.payload.unwrap_or_else(fallback)
    }

    /// Joined failure text: errors, flattened validation messages, and the
    /// message when it adds information. Empty for successes.
    #[must_use]
    pub fn failure_detail(&self) -> String {
        if self.is_success() {
            return String::new();
        }
        let mut parts = MessageVec::new();
        parts.extend(self.errors.iter().cloned());
        self.validation_errors.flatten_into(&mut parts);
        if let Some(message) = &self.message {
            if !parts.iter().any(|part| part == message) {
                parts.push(message.clone());
            }
        }
        parts.join("; ")
    }

    // ---------- combining ----------

    /// Combines two outcomes: if both succeed, the left operand is returned
    /// unchanged; otherwise a general failure concatenating each failing
    /// side's error text, left to right.
    ///
    /// A failing side without explicit errors (not-found, validation)
    /// contributes its flattened validation messages or its message text
    /// instead, so no failing side is silently dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let both = Outcome::success(1).combine(Outcome::success(1));
    /// assert_eq!(both.payload(), Some(&1));
    ///
    /// let mixed = Outcome::<i32>::failure("left broke")
    ///     .combine(Outcome::failure("right broke"));
    /// assert_eq!(mixed.errors(), ["left broke", "right broke"]);
    /// ```
    pub fn combine(self, other: Self) -> Self {
        if self.is_success() && other.is_success() {
            return self;
        }
        let mut errors = MessageVec::new();
        self.collect_failure_text(&mut errors);
        other.collect_failure_text(&mut errors);
        Self::failure_many(errors)
    }

    fn collect_failure_text(&self, out: &mut MessageVec) {
        if self.is_success() {
            return;
        }
        if !self.errors.is_empty() {
            out.extend(self.errors.iter().cloned());
        } else if !self.validation_errors.is_empty() {
            self.validation_errors.flatten_into(out);
        } else if let Some(message) = &self.message {
            out.push(message.clone());
        }
    }

    // ---------- combinators ----------

    /// Rebinds the payload type, dropping any payload. Kind, count, message,
    /// errors and validation errors all carry over.
    pub(crate) fn retag<U>(self) -> Outcome<U> {
        Outcome {
            kind: self.kind,
            payload: None,
            count: self.count,
            message: self.message,
            errors: self.errors,
            validation_errors: self.validation_errors,
        }
    }

    /// Transforms the payload if successful.
    ///
    /// On failure `f` is never invoked and kind, errors, validation errors
    /// and message carry over unchanged. A payload-free success propagates
    /// as a payload-free success.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, OutcomeKind};
    ///
    /// let doubled = Outcome::success(21).map(|n| n * 2);
    /// assert_eq!(doubled.payload(), Some(&42));
    ///
    /// let failed = Outcome::<i32>::failure("bad input")
    ///     .with_message("create failed")
    ///     .map(|n| n * 2);
    /// assert_eq!(failed.kind(), OutcomeKind::GeneralError);
    /// assert_eq!(failed.errors(), ["bad input"]);
    /// assert_eq!(failed.message(), Some("create failed"));
    /// ```
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        if self.is_success() {
            Outcome {
                kind: OutcomeKind::None,
                payload: self.payload.map(f),
                count: self.count,
                message: self.message,
                errors: self.errors,
                validation_errors: self.validation_errors,
            }
        } else {
            self.retag()
        }
    }

    /// Chains another outcome-producing function if successful.
    ///
    /// On success the callee's outcome is returned verbatim; on failure the
    /// chain short-circuits with this outcome's error state.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// fn positive(n: i32) -> Outcome<i32> {
    ///     if n > 0 { Outcome::success(n) } else { Outcome::failure("not positive") }
    /// }
    ///
    /// let chained = Outcome::success(3).and_then(positive);
    /// assert_eq!(chained.payload(), Some(&3));
    ///
    /// let short = Outcome::<i32>::failure("earlier failure").and_then(positive);
    /// assert_eq!(short.errors(), ["earlier failure"]);
    /// ```
    pub fn and_then<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        if self.is_success() {
            match self.payload {
                Some(payload) => f(payload),
                None => self.retag(),
            }
        } else {
            self.retag()
        }
    }

    /// Replaces the error list if the outcome is a failure; successes pass
    /// through untouched.
    ///
    /// Only `errors` is rewritten; kind, message and validation errors are
    /// preserved.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::<i32>::failure("raw sql error")
    ///     .map_errors(|errors| errors.into_iter().map(|e| format!("db: {}", e)));
    /// assert_eq!(outcome.errors(), ["db: raw sql error"]);
    /// ```
    pub fn map_errors<F, I, S>(mut self, f: F) -> Self
    where
        F: FnOnce(MessageVec) -> I,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if self.is_failure() {
            let errors = core::mem::take(&mut self.errors);
            self.errors = f(errors).into_iter().map(Into::into).collect();
        }
        self
    }

    /// Runs exactly one of the two handlers: `on_success` with the optional
    /// payload, or `on_failure` with the error list.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let rendered = Outcome::success(7).fold(
    ///     |payload| format!("got {:?}", payload),
    ///     |errors| format!("{} errors", errors.len()),
    /// );
    /// assert_eq!(rendered, "got Some(7)");
    /// ```
    pub fn fold<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(Option<T>) -> R,
        F: FnOnce(MessageVec) -> R,
    {
        if self.is_success() {
            on_success(self.payload)
        } else {
            on_failure(self.errors)
        }
    }
}

impl Outcome<()> {
    /// Creates a successful payload-free outcome, hiding the unit payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, UnitOutcome};
    ///
    /// let outcome: UnitOutcome = Outcome::done();
    /// assert!(outcome.is_success());
    /// ```
    #[inline]
    pub fn done() -> Self {
        Self::success(())
    }

    /// Match variant for payload-free outcomes: the success handler
    /// receives the message instead of a payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let rendered = Outcome::done().with_message("saved").fold_message(
    ///     |message| message.unwrap_or_default(),
    ///     |errors| errors.join(", "),
    /// );
    /// assert_eq!(rendered, "saved");
    /// ```
    pub fn fold_message<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(Option<String>) -> R,
        F: FnOnce(MessageVec) -> R,
    {
        if self.is_success() {
            on_success(self.message)
        } else {
            on_failure(self.errors)
        }
    }
}
