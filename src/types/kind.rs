//! Outcome discriminants and sort directions.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The closed set of outcome discriminants.
///
/// Exactly one kind is active per outcome instance; [`OutcomeKind::None`]
/// is the success case. The enumeration is serialized by its stable
/// variant name, never by ordinal, so new kinds can be appended without
/// breaking existing consumers.
///
/// # Examples
///
/// ```
/// use outcome_rail::OutcomeKind;
///
/// assert!(!OutcomeKind::None.is_error());
/// assert!(OutcomeKind::NotFound.is_error());
/// assert_eq!(OutcomeKind::NotFound.status_code(), 404);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OutcomeKind {
    /// The operation succeeded.
    #[default]
    None,
    /// Caller input was invalid; messages are field-scoped.
    ValidationError,
    /// A referenced entity is absent; the message is the carrier.
    NotFound,
    /// The caller is not authenticated.
    Unauthorized,
    /// The caller is authenticated but not permitted.
    Forbidden,
    /// Everything else, including wrapped errors and internal failures.
    GeneralError,
}

impl OutcomeKind {
    /// Human-readable label for the kind.
    ///
    /// A static table resolved at compile time; there is no runtime
    /// reflection involved.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::OutcomeKind;
    ///
    /// assert_eq!(OutcomeKind::ValidationError.label(), "Validation Error");
    /// assert_eq!(OutcomeKind::GeneralError.label(), "Error");
    /// ```
    #[must_use]
    #[inline]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::ValidationError => "Validation Error",
            Self::NotFound => "Not Found",
            Self::Unauthorized => "Unauthorized",
            Self::Forbidden => "Forbidden",
            Self::GeneralError => "Error",
        }
    }

    /// Transport-agnostic status code for the kind.
    ///
    /// This is the single source of truth for boundary adapters mapping
    /// outcomes onto HTTP responses.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::OutcomeKind;
    ///
    /// assert_eq!(OutcomeKind::None.status_code(), 200);
    /// assert_eq!(OutcomeKind::ValidationError.status_code(), 400);
    /// assert_eq!(OutcomeKind::Unauthorized.status_code(), 401);
    /// assert_eq!(OutcomeKind::Forbidden.status_code(), 403);
    /// assert_eq!(OutcomeKind::NotFound.status_code(), 404);
    /// assert_eq!(OutcomeKind::GeneralError.status_code(), 500);
    /// ```
    #[must_use]
    #[inline]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::None => 200,
            Self::ValidationError => 400,
            Self::Unauthorized => 401,
            Self::Forbidden => 403,
            Self::NotFound => 404,
            Self::GeneralError => 500,
        }
    }

    /// Returns `true` for every kind except [`OutcomeKind::None`].
    #[must_use]
    #[inline]
    pub const fn is_error(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Direction of an ordering instruction.
///
/// # Examples
///
/// ```
/// use outcome_rail::SortDirection;
///
/// assert_eq!(SortDirection::Ascending.label(), "Asc");
/// assert_eq!(SortDirection::Descending.label(), "Desc");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Short label for the direction.
    #[must_use]
    #[inline]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Ascending => "Asc",
            Self::Descending => "Desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
