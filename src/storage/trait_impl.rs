//! [`DogStore`] implementation for [`SqliteStorage`].

use async_trait::async_trait;

use super::core::SqliteStorage;
use super::types::StoredDog;
use crate::error::StorageError;
use crate::query::QueryPlan;
use crate::traits::{Dog, DogStore};

#[async_trait]
impl DogStore for SqliteStorage {
    async fn list_dogs(&self, plan: &QueryPlan) -> Result<Vec<StoredDog>, StorageError> {
        self.list_stored_dogs(plan).await
    }

    async fn find_dog_by_name(&self, name: &str) -> Result<Option<StoredDog>, StorageError> {
        self.get_stored_dog_by_name(name).await
    }

    async fn insert_dog(&self, dog: &Dog) -> Result<StoredDog, StorageError> {
        self.insert_stored_dog(dog).await
    }
}
