//! Stable identifiers for questions.
//!
//! Question identifiers key the choice permutations stored in a
//! [`Layout`](crate::layout::Layout), so they must survive serialization
//! unchanged. [`QuestionId`] is a transparent wrapper over the stored string.

use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};

/// Identifier of a single question within a test version.
///
/// # Examples
///
/// ```
/// use exam_layout_core::identifier::QuestionId;
///
/// let id = QuestionId::new("q-grammar-01");
/// assert_eq!(id, "q-grammar-01");
/// assert_eq!(id.to_string(), "q-grammar-01");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(String);

impl QuestionId {
    /// Creates a `QuestionId` from anything convertible into a `String`.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for QuestionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for QuestionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for QuestionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for QuestionId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for QuestionId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
