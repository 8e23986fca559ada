//! Storage data types.

/// A persisted dog record.
///
/// The `id` is assigned by the database on insert and never leaves the
/// service; the transfer representation [`crate::traits::Dog`] carries
/// every other field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredDog {
    /// System-assigned unique identity.
    pub id: i64,
    /// Dog name; unique across all records.
    pub name: String,
    /// Coat color.
    pub color: String,
    /// Tail length.
    pub tail_length: i64,
    /// Weight.
    pub weight: i64,
}
