// Entity and Column abstractions shared by every persisted type

use std::fmt;

use super::error::{DomainError, Result};
use super::field::{ColumnKind, EntityId};

/// A named, typed column of an entity table
pub trait Column: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// Every column of the table, primary key first
    const ALL: &'static [Self];

    /// Entity name used in error messages
    const ENTITY: &'static str;

    /// SQL column name
    fn as_str(&self) -> &'static str;

    fn kind(&self) -> ColumnKind;

    /// Look a column up by its SQL name
    fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == name)
            .ok_or_else(|| DomainError::UnknownColumn {
                entity: Self::ENTITY.to_string(),
                column: name.to_string(),
            })
    }
}

/// A record persisted in the relational store
///
/// Ids are owned by the store: an entity that was never persisted has no id,
/// and `set_id` is only called by repositories after an insert or id update.
pub trait Entity: Clone + fmt::Debug + Send + Sync + 'static {
    type Column: Column;

    fn id(&self) -> Option<EntityId>;

    fn set_id(&mut self, id: EntityId);
}
