//! Shared types used across trait boundaries.

use serde::{Deserialize, Serialize};

use crate::storage::StoredDog;

/// The externally visible shape of a dog record.
///
/// Carries the same fields as a stored record minus its identity; the
/// system-assigned id is never exposed to callers. On the wire, tail
/// length uses the snake-case key `tail_length`, which matches the field
/// name here, so no rename mapping is needed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dog {
    /// Dog name; unique across all records, case-sensitive.
    pub name: String,
    /// Coat color.
    pub color: String,
    /// Tail length; must be at least 1.
    pub tail_length: i64,
    /// Weight; must be at least 1.
    pub weight: i64,
}

impl Dog {
    /// Create a new transfer representation.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        color: impl Into<String>,
        tail_length: i64,
        weight: i64,
    ) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            tail_length,
            weight,
        }
    }

    /// Check the field-level shape constraints.
    ///
    /// The transport layer runs this at the request-binding step, before
    /// the service is invoked; the service itself only enforces the
    /// uniqueness rule.
    ///
    /// # Errors
    ///
    /// Returns a caller-facing message describing the first violated
    /// constraint.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.is_empty() {
            return Err("Name must not be empty");
        }
        if self.color.is_empty() {
            return Err("Color must not be empty");
        }
        if self.tail_length < 1 {
            return Err("Tail length must be greater than 0");
        }
        if self.weight < 1 {
            return Err("Weight must be greater than 0");
        }
        Ok(())
    }
}

impl From<StoredDog> for Dog {
    /// Map a stored record to its transfer representation, dropping the
    /// identity field.
    fn from(stored: StoredDog) -> Self {
        Self {
            name: stored.name,
            color: stored.color,
            tail_length: stored.tail_length,
            weight: stored.weight,
        }
    }
}
