// `employers` table mapping

use crate::entity::SqliteEntity;
use jobboard_core::domain::{Employer, EmployerColumn, FieldValue};
use jobboard_core::error::Result;

/// SQLite row representation
#[derive(Debug, sqlx::FromRow)]
pub struct EmployerRow {
    id: i64,
    name: String,
    category: String,
    summary: String,
}

impl SqliteEntity for Employer {
    const TABLE: &'static str = "employers";

    const DATA_COLUMNS: &'static [EmployerColumn] = &[
        EmployerColumn::Name,
        EmployerColumn::Category,
        EmployerColumn::Summary,
    ];

    type Row = EmployerRow;

    fn values(&self) -> Vec<FieldValue> {
        vec![
            self.name.clone().into(),
            self.category.clone().into(),
            self.summary.clone().into(),
        ]
    }

    fn from_row(row: EmployerRow) -> Result<Self> {
        Ok(Employer {
            id: Some(row.id),
            name: row.name,
            category: row.category,
            summary: row.summary,
        })
    }
}
