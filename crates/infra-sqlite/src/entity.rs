// Explicit table mapping for persisted entities

use jobboard_core::domain::{Column, Entity, FieldValue};
use jobboard_core::error::Result;
use sqlx::query::Query;
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{FromRow, Sqlite};

pub(crate) type SqliteQuery<'q> = Query<'q, Sqlite, SqliteArguments<'q>>;

/// Describes how an entity maps onto its table
///
/// `DATA_COLUMNS` lists every column except the primary key, in the order
/// `values()` produces bind values.
pub trait SqliteEntity: Entity {
    const TABLE: &'static str;

    const DATA_COLUMNS: &'static [Self::Column];

    /// Raw row as read from the table
    type Row: for<'r> FromRow<'r, SqliteRow> + Send + Unpin;

    fn values(&self) -> Vec<FieldValue>;

    fn from_row(row: Self::Row) -> Result<Self>;
}

/// Bind one value; timestamps are stored as epoch milliseconds
pub(crate) fn bind_value(query: SqliteQuery<'_>, value: FieldValue) -> SqliteQuery<'_> {
    match value {
        FieldValue::Null => query.bind(None::<i64>),
        FieldValue::Text(s) => query.bind(s),
        FieldValue::Integer(i) => query.bind(i),
        FieldValue::Bool(b) => query.bind(b),
        FieldValue::Timestamp(t) => query.bind(t.timestamp_millis()),
    }
}

pub(crate) fn bind_values(mut query: SqliteQuery<'_>, values: Vec<FieldValue>) -> SqliteQuery<'_> {
    for value in values {
        query = bind_value(query, value);
    }
    query
}

/// Pre-built SQL for one table
#[derive(Debug, Clone)]
pub(crate) struct Statements {
    pub insert: String,
    pub update: String,
    pub update_id: String,
    pub select_all: String,
    pub select_by_id: String,
    pub delete_exact: String,
    pub delete_by_id: String,
    pub exists: String,
    pub count: String,
    pub clear: String,
    table: &'static str,
    select_list: String,
}

impl Statements {
    pub fn for_entity<E: SqliteEntity>() -> Self {
        let table = E::TABLE;
        let names: Vec<&str> = E::DATA_COLUMNS.iter().map(|c| c.as_str()).collect();
        let placeholders = vec!["?"; names.len()].join(", ");
        let select_list = format!("id, {}", names.join(", "));
        let assignments = names
            .iter()
            .map(|n| format!("{} = ?", n))
            .collect::<Vec<_>>()
            .join(", ");
        // IS instead of = so NULL columns match NULL values
        let exact_match = names
            .iter()
            .map(|n| format!("{} IS ?", n))
            .collect::<Vec<_>>()
            .join(" AND ");

        Self {
            insert: format!(
                "INSERT INTO {} ({}) VALUES ({}) RETURNING id",
                table,
                names.join(", "),
                placeholders
            ),
            update: format!("UPDATE {} SET {} WHERE id = ?", table, assignments),
            update_id: format!("UPDATE {} SET id = ? WHERE id = ?", table),
            select_all: format!("SELECT {} FROM {} ORDER BY id ASC", select_list, table),
            select_by_id: format!("SELECT {} FROM {} WHERE id = ?", select_list, table),
            delete_exact: format!("DELETE FROM {} WHERE id = ? AND {}", table, exact_match),
            delete_by_id: format!("DELETE FROM {} WHERE id = ?", table),
            exists: format!("SELECT EXISTS (SELECT 1 FROM {} WHERE id = ?)", table),
            count: format!("SELECT COUNT(*) FROM {}", table),
            clear: format!("DELETE FROM {}", table),
            table,
            select_list,
        }
    }

    /// Equality query on one column (null-safe)
    pub fn select_eq(&self, column: &str) -> String {
        format!(
            "SELECT {} FROM {} WHERE {} IS ? ORDER BY id ASC",
            self.select_list, self.table, column
        )
    }
}
