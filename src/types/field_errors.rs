//! Ordered field-to-messages multimap for validation failures.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use super::MessageVec;

/// Reserved field name for validation messages that are not scoped to a
/// specific field.
pub const GENERAL_FIELD: &str = "General";

/// Insertion-order-preserving mapping from field name to an ordered list
/// of validation messages.
///
/// Unlike a hash map, iteration yields fields in the order they were first
/// reported, which keeps rendered validation output stable. Adding messages
/// for an existing field APPENDS to that field's list rather than
/// overwriting it.
///
/// # Examples
///
/// ```
/// use outcome_rail::FieldErrors;
///
/// let mut errors = FieldErrors::new();
/// errors.push("name", "required");
/// errors.push("name", "too short");
/// errors.push("age", "must be positive");
///
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors.get("name").unwrap().len(), 2);
/// assert_eq!(errors.fields().collect::<Vec<_>>(), ["name", "age"]);
/// ```
#[must_use]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: Vec<(String, MessageVec)>,
}

impl FieldErrors {
    /// Creates an empty map.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a map with a single message under the [`GENERAL_FIELD`] key.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{FieldErrors, GENERAL_FIELD};
    ///
    /// let errors = FieldErrors::general("payload malformed");
    /// assert_eq!(errors.get(GENERAL_FIELD).unwrap().len(), 1);
    /// ```
    #[inline]
    pub fn general(message: impl Into<String>) -> Self {
        let mut map = Self::new();
        map.push(GENERAL_FIELD, message);
        map
    }

    /// Appends a single message to `field`, inserting the field at the end
    /// of the iteration order if it is new.
    #[inline]
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.entry_mut(field.into()).push(message.into());
    }

    /// Appends every message in `messages` to `field`, preserving both the
    /// field insertion order and the message order.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::FieldErrors;
    ///
    /// let mut errors = FieldErrors::new();
    /// errors.extend_field("name", ["required"]);
    /// errors.extend_field("name", ["too short", "forbidden characters"]);
    ///
    /// assert_eq!(errors.get("name").unwrap().len(), 3);
    /// ```
    #[inline]
    pub fn extend_field<I, S>(&mut self, field: impl Into<String>, messages: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entry_mut(field.into())
            .extend(messages.into_iter().map(Into::into));
    }

    /// Returns the messages recorded for `field`, if any.
    #[must_use]
    #[inline]
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, messages)| messages.as_slice())
    }

    /// Number of distinct fields with recorded messages.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no field has any message.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates field names in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Iterates `(field, messages)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, messages)| (name.as_str(), messages.as_slice()))
    }

    /// Writes all messages as `field: message` lines into `out`, used when
    /// a validation failure has to be flattened into plain error text.
    pub(crate) fn flatten_into(&self, out: &mut MessageVec) {
        use alloc::format;

        for (field, messages) in self.iter() {
            for message in messages {
                out.push(format!("{}: {}", field, message));
            }
        }
    }

    fn entry_mut(&mut self, field: String) -> &mut MessageVec {
        if let Some(index) = self.entries.iter().position(|(name, _)| *name == field) {
            &mut self.entries[index].1
        } else {
            self.entries.push((field, MessageVec::new()));
            let last = self.entries.len() - 1;
            &mut self.entries[last].1
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in self.iter() {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{}: {}", field, message)?;
                first = false;
            }
        }
        Ok(())
    }
}

impl<F, I, S> FromIterator<(F, I)> for FieldErrors
where
    F: Into<String>,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (F, I)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (field, messages) in iter {
            map.extend_field(field, messages);
        }
        map
    }
}

impl IntoIterator for FieldErrors {
    type Item = (String, MessageVec);
    type IntoIter = alloc::vec::IntoIter<(String, MessageVec)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for FieldErrors {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, messages) in &self.entries {
            map.serialize_entry(field, messages.as_slice())?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for FieldErrors {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct MapVisitor;

        impl<'de> serde::de::Visitor<'de> for MapVisitor {
            type Value = FieldErrors;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map of field names to message lists")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                let mut map = FieldErrors::new();
                while let Some((field, messages)) = access.next_entry::<String, Vec<String>>()? {
                    map.extend_field(field, messages);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(MapVisitor)
    }
}
