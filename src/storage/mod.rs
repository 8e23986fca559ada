//! Storage backend.
//!
//! This module provides the `SQLite` implementation of the storage
//! contract consumed by the record service.
//!
//! # Architecture
//!
//! The storage layer uses `SQLite` with the `sqlx` crate for async
//! operations. The implementation is split across submodules:
//! - `core`: Pool management, migrations, and helper functions
//! - `dogs`: Dog record queries (list, find by name, insert)
//! - `trait_impl`: [`crate::traits::DogStore`] implementation
//!
//! The unique index on `dogs.name` (created by migration 001) is the
//! uniqueness backstop behind the service-level pre-check.
//!
//! # Example
//!
//! ```ignore
//! use dogshouse::storage::SqliteStorage;
//!
//! let storage = SqliteStorage::new("./data/dogshouse.db").await?;
//! let dogs = storage.list_stored_dogs(&plan).await?;
//! ```

mod core;
mod dogs;
mod trait_impl;
mod types;

pub use self::core::SqliteStorage;
pub use types::StoredDog;
