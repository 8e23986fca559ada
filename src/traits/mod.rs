//! Trait definitions for mockable dependencies.
//!
//! This module defines [`DogStore`], the storage contract consumed by the
//! record service, and re-exports the shared transfer type from the
//! `types` submodule.
//!
//! # Mocking
//!
//! The trait is annotated with `#[cfg_attr(test, mockall::automock)]`
//! which generates a mock implementation automatically for testing, so the
//! service can be exercised without a database.

mod types;

pub use types::Dog;

// Re-export the stored record type alongside the contract that yields it.
pub use crate::storage::StoredDog;

use async_trait::async_trait;

use crate::error::StorageError;
use crate::query::QueryPlan;

/// Storage contract for dog records.
///
/// Implementations must order before windowing when a plan carries both a
/// sort and a page instruction, and must signal a distinguishable
/// [`StorageError::UniqueViolation`] when an insert collides with an
/// existing name at commit time. A shared handle may be used from
/// concurrent calls only if the implementation itself is safe for
/// concurrent use.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DogStore: Send + Sync {
    /// Fetch records according to a validated plan.
    ///
    /// When the plan has no sort instruction, the result order is
    /// unspecified.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the query fails.
    async fn list_dogs(&self, plan: &QueryPlan) -> Result<Vec<StoredDog>, StorageError>;

    /// Look up a record by exact name match.
    ///
    /// Returns `None` if no record has that name.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the query fails.
    async fn find_dog_by_name(&self, name: &str) -> Result<Option<StoredDog>, StorageError>;

    /// Insert a new record, assigning a fresh identity.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::UniqueViolation`] if the name already
    /// exists at commit time, or another [`StorageError`] for any other
    /// failure.
    async fn insert_dog(&self, dog: &Dog) -> Result<StoredDog, StorageError>;
}
