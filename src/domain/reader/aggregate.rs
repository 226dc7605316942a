//! Reader aggregate entity.
//!
//! A reader is a named participant following the reading schedule.
//! Readers own exactly one day record per schedule day; those records
//! are persisted alongside the reader and never exist without it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{ReaderId, Timestamp, ValidationError};

/// Validated, non-empty reader name.
///
/// Only emptiness is checked; surrounding whitespace is kept as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ReaderName(String);

impl ReaderName {
    /// Creates a reader name.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if `name` is empty
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ReaderName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ReaderName> for String {
    fn from(name: ReaderName) -> Self {
        name.0
    }
}

impl fmt::Display for ReaderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A reader that has not been persisted yet.
///
/// `created_at` is stored for record keeping only; readers are listed in
/// id order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReader {
    pub name: ReaderName,
    pub created_at: Timestamp,
}

impl NewReader {
    /// Prepares a reader created now.
    pub fn new(name: ReaderName) -> Self {
        Self {
            name,
            created_at: Timestamp::now(),
        }
    }
}

/// A persisted reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reader {
    id: ReaderId,
    name: ReaderName,
}

impl Reader {
    /// Reconstitute a reader from persistence (no validation).
    pub fn reconstitute(id: ReaderId, name: ReaderName) -> Self {
        Self { id, name }
    }

    /// Attach the storage-assigned id to a freshly inserted reader.
    pub fn from_new(id: ReaderId, new: NewReader) -> Self {
        Self::reconstitute(id, new.name)
    }

    pub fn id(&self) -> ReaderId {
        self.id
    }

    pub fn name(&self) -> &ReaderName {
        &self.name
    }
}
