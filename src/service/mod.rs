//! Record service orchestrating query planning against storage.
//!
//! [`DogService`] exposes the two operations of the system: listing with
//! validated sorting/paging, and creation with unique-name enforcement.
//! It holds the storage handle it was constructed with and no other
//! state, so a single instance may serve concurrent calls whenever the
//! store itself is safe for concurrent use.

use std::sync::Arc;

use crate::error::{ServiceError, StorageError};
use crate::query::QueryPlan;
use crate::traits::{Dog, DogStore};

/// The record service.
///
/// Construct it with any [`DogStore`] implementation; tests substitute a
/// mock store, production wires in the `SQLite` backend.
pub struct DogService {
    store: Arc<dyn DogStore>,
}

impl DogService {
    /// Create a new service over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn DogStore>) -> Self {
        Self { store }
    }

    /// List dog records with optional sorting and paging.
    ///
    /// Parameter validation is delegated entirely to the query planner and
    /// its errors propagate unchanged. Sorting always precedes paging so a
    /// page reflects the globally sorted order; without a sort instruction
    /// the order is unspecified. Results are mapped to transfer
    /// representations, dropping the identity field.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Query`] for invalid parameters, or
    /// [`ServiceError::Storage`] if the store fails.
    pub async fn list_dogs(
        &self,
        attribute: &str,
        order: &str,
        page_number: Option<i64>,
        page_size: Option<i64>,
    ) -> Result<Vec<Dog>, ServiceError> {
        let plan = QueryPlan::build(attribute, order, page_number, page_size)?;
        let stored = self.store.list_dogs(&plan).await?;
        Ok(stored.into_iter().map(Dog::from).collect())
    }

    /// Create a new dog record.
    ///
    /// Performs an optimistic pre-check by exact name before writing, for
    /// a fast, friendly error in the common case. The pre-check and the
    /// insert are not atomic with respect to concurrent callers, so the
    /// store's uniqueness constraint is the correctness guarantee: when
    /// the insert loses that race, the constraint failure is re-signaled
    /// as the same [`ServiceError::DuplicateName`] the pre-check produces.
    ///
    /// Field-level shape constraints are validated at the transport
    /// binding step and are assumed already satisfied here.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::DuplicateName`] if the name is taken, or
    /// [`ServiceError::Storage`] for any other store failure.
    pub async fn create_dog(&self, dog: &Dog) -> Result<(), ServiceError> {
        if self.store.find_dog_by_name(&dog.name).await?.is_some() {
            return Err(ServiceError::DuplicateName);
        }

        match self.store.insert_dog(dog).await {
            Ok(_) => Ok(()),
            Err(StorageError::UniqueViolation { .. }) => Err(ServiceError::DuplicateName),
            Err(e) => Err(e.into()),
        }
    }
}
