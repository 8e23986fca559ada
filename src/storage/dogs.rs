//! Dog record storage operations.

#![allow(clippy::missing_errors_doc)]

use sqlx::Row;

use super::core::SqliteStorage;
use super::types::StoredDog;
use crate::error::StorageError;
use crate::query::QueryPlan;
use crate::traits::Dog;

const SELECT_COLUMNS: &str = "SELECT id, name, color, tail_length, weight FROM dogs";

impl SqliteStorage {
    /// Fetch dog records according to a validated plan.
    ///
    /// The ORDER BY clause is built from the plan's enumerated sort field
    /// and direction, so only fixed column names and keywords ever reach
    /// the SQL text; paging binds as LIMIT/OFFSET parameters after
    /// ordering. Without a sort instruction the row order is whatever
    /// `SQLite` returns by default.
    pub async fn list_stored_dogs(
        &self,
        plan: &QueryPlan,
    ) -> Result<Vec<StoredDog>, StorageError> {
        let mut sql = String::from(SELECT_COLUMNS);
        if let Some(sort) = &plan.sort {
            sql.push_str(" ORDER BY ");
            sql.push_str(sort.field.column());
            sql.push(' ');
            sql.push_str(sort.direction.sql());
        }
        if plan.page.is_some() {
            sql.push_str(" LIMIT ? OFFSET ?");
        }

        let mut query = sqlx::query(&sql);
        if let Some(page) = &plan.page {
            query = query.bind(page.limit).bind(page.offset);
        }

        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| Self::query_error("SELECT dogs", format!("{e}")))?;

        Ok(rows.iter().map(row_to_dog).collect())
    }

    /// Look up a dog record by exact name match.
    pub async fn get_stored_dog_by_name(
        &self,
        name: &str,
    ) -> Result<Option<StoredDog>, StorageError> {
        let row = sqlx::query(&format!("{SELECT_COLUMNS} WHERE name = ?"))
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| Self::query_error("SELECT dogs by name", format!("{e}")))?;

        Ok(row.as_ref().map(row_to_dog))
    }

    /// Insert a new dog record, assigning a fresh rowid identity.
    ///
    /// A rejection by the unique index on `name` is reported as
    /// [`StorageError::UniqueViolation`] so the service can distinguish a
    /// lost uniqueness race from any other storage failure.
    pub async fn insert_stored_dog(&self, dog: &Dog) -> Result<StoredDog, StorageError> {
        let result =
            sqlx::query("INSERT INTO dogs (name, color, tail_length, weight) VALUES (?, ?, ?, ?)")
                .bind(&dog.name)
                .bind(&dog.color)
                .bind(dog.tail_length)
                .bind(dog.weight)
                .execute(&self.pool)
                .await
                .map_err(|e| match &e {
                    sqlx::Error::Database(db) if db.is_unique_violation() => {
                        StorageError::UniqueViolation {
                            constraint: "dogs.name".to_string(),
                        }
                    }
                    _ => Self::query_error("INSERT dogs", format!("{e}")),
                })?;

        Ok(StoredDog {
            id: result.last_insert_rowid(),
            name: dog.name.clone(),
            color: dog.color.clone(),
            tail_length: dog.tail_length,
            weight: dog.weight,
        })
    }
}

fn row_to_dog(row: &sqlx::sqlite::SqliteRow) -> StoredDog {
    StoredDog {
        id: row.get("id"),
        name: row.get("name"),
        color: row.get("color"),
        tail_length: row.get("tail_length"),
        weight: row.get("weight"),
    }
}
