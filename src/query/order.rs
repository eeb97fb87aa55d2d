//! Ordering instructions and combined search application.

use alloc::borrow::Cow;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use crate::types::SortDirection;

use super::paging::{ApplyPaging, Paging};

/// An ordering instruction: a named field comparator plus a direction.
///
/// Equality and hashing consider the canonical field name and the
/// direction, not the comparator itself, so two instructions built
/// independently for the same field compare equal.
///
/// # Examples
///
/// ```
/// use outcome_rail::{OrderBy, SortDirection};
///
/// let by_len = OrderBy::<&str>::new("len", |a, b| a.len().cmp(&b.len()), SortDirection::Descending);
/// let mut words = vec!["be", "a", "cat"];
/// by_len.sort(&mut words);
/// assert_eq!(words, ["cat", "be", "a"]);
///
/// let same = OrderBy::<&str>::new("len", |a, b| b.len().cmp(&a.len()), SortDirection::Descending);
/// assert_eq!(by_len, same);
/// ```
pub struct OrderBy<T> {
    field: Cow<'static, str>,
    compare: fn(&T, &T) -> Ordering,
    direction: SortDirection,
}

// Manual impl: every field is Clone regardless of T, so the derive's
// T: Clone bound would only get in the way.
impl<T> Clone for OrderBy<T> {
    fn clone(&self) -> Self {
        Self {
            field: self.field.clone(),
            compare: self.compare,
            direction: self.direction,
        }
    }
}

impl<T> OrderBy<T> {
    /// Creates an ordering instruction.
    #[must_use]
    pub fn new(
        field: impl Into<Cow<'static, str>>,
        compare: fn(&T, &T) -> Ordering,
        direction: SortDirection,
    ) -> Self {
        Self {
            field: field.into(),
            compare,
            direction,
        }
    }

    /// Shorthand for an ascending instruction.
    #[must_use]
    pub fn ascending(field: impl Into<Cow<'static, str>>, compare: fn(&T, &T) -> Ordering) -> Self {
        Self::new(field, compare, SortDirection::Ascending)
    }

    /// Shorthand for a descending instruction.
    #[must_use]
    pub fn descending(
        field: impl Into<Cow<'static, str>>,
        compare: fn(&T, &T) -> Ordering,
    ) -> Self {
        Self::new(field, compare, SortDirection::Descending)
    }

    /// Canonical name of the ordered field.
    #[must_use]
    #[inline]
    pub fn field(&self) -> &str {
        &self.field
    }

    #[must_use]
    #[inline]
    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Compares two elements honoring the direction.
    #[must_use]
    #[inline]
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        let ordering = (self.compare)(a, b);
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    /// Stable-sorts a slice by this instruction.
    #[inline]
    pub fn sort(&self, items: &mut [T]) {
        items.sort_by(|a, b| self.compare(a, b));
    }
}

impl<T> PartialEq for OrderBy<T> {
    fn eq(&self, other: &Self) -> bool {
        self.field == other.field && self.direction == other.direction
    }
}

impl<T> Eq for OrderBy<T> {}

impl<T> Hash for OrderBy<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.field.hash(state);
        self.direction.hash(state);
    }
}

impl<T> fmt::Debug for OrderBy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderBy")
            .field("field", &self.field)
            .field("direction", &self.direction)
            .finish_non_exhaustive()
    }
}

/// Search configuration: an optional ordering plus paging.
///
/// # Examples
///
/// ```
/// use outcome_rail::{OrderBy, Paging, Search};
///
/// let search = Search {
///     order: Some(OrderBy::ascending("value", i32::cmp)),
///     paging: Paging::new(1, 2),
/// };
/// assert_eq!(search.apply(vec![3, 1, 2]), [1, 2]);
/// ```
#[derive(Clone, Debug)]
pub struct Search<T> {
    pub order: Option<OrderBy<T>>,
    pub paging: Paging,
}

impl<T> Search<T> {
    /// Unordered search over the default first page.
    #[must_use]
    pub fn new() -> Self {
        Self {
            order: None,
            paging: Paging::default(),
        }
    }

    /// Sorts (when ordered) and pages the given collection.
    #[must_use]
    pub fn apply(&self, mut items: Vec<T>) -> Vec<T> {
        if let Some(order) = &self.order {
            order.sort(&mut items);
        }
        items.into_iter().apply_paging(&self.paging).collect()
    }
}

impl<T> Default for Search<T> {
    fn default() -> Self {
        Self::new()
    }
}
