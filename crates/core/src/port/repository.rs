// Repository Port (Interface)

use crate::domain::{Entity, EntityId, FieldValue};
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Outcome of [`Repository::create_or_update`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreateOrUpdateStatus {
    Created,
    Updated,
}

/// CRUD access to one entity table
///
/// Rows are always returned in storage order (ascending id). Deletes of rows
/// that do not exist are no-ops reporting zero affected rows.
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// Insert a new row; the store assigns the id and writes it back into `entity`
    async fn create(&self, entity: &mut E) -> Result<()>;

    /// Insert all entities in one transaction, in order
    async fn create_all(&self, entities: &mut [E]) -> Result<u64>;

    /// Update the row with the entity's id, or insert when there is no such row
    async fn create_or_update(&self, entity: &mut E) -> Result<CreateOrUpdateStatus>;

    /// Move an existing row to a new primary key
    async fn update_id(&self, entity: &mut E, new_id: EntityId) -> Result<u64>;

    /// Find rows whose column equals `value` (null-safe)
    async fn query_for_eq(&self, column: E::Column, value: FieldValue) -> Result<Vec<E>>;

    async fn query_for_all(&self) -> Result<Vec<E>>;

    async fn query_for_id(&self, id: EntityId) -> Result<Option<E>>;

    /// Delete the row matching every current field of `entity`, id included
    async fn delete(&self, entity: &E) -> Result<u64>;

    /// Delete every entity that still matches a row, in one transaction
    async fn delete_all(&self, entities: &[E]) -> Result<u64>;

    async fn delete_by_id(&self, id: EntityId) -> Result<u64>;

    async fn id_exists(&self, id: EntityId) -> Result<bool>;

    async fn count_of(&self) -> Result<i64>;

    /// Remove every row of the table
    async fn clear(&self) -> Result<u64>;
}
