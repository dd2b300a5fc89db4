// `jobs` table mapping

use crate::entity::SqliteEntity;
use jobboard_core::domain::field::{from_millis, truncate_millis};
use jobboard_core::domain::{FieldValue, Job, JobColumn};
use jobboard_core::error::{AppError, Result};

/// SQLite row representation
#[derive(Debug, sqlx::FromRow)]
pub struct JobRow {
    id: i64,
    title: Option<String>,
    posted_at: i64,  // epoch ms
    updated_at: i64, // epoch ms
    domain: String,
    location: String,
    remote: i32,    // SQLite boolean as integer
    full_time: i32, // SQLite boolean as integer
    requirements: String,
    salary: i64,
    employer_id: Option<i64>,
}

fn timestamp(column: &str, id: i64, millis: i64) -> Result<chrono::DateTime<chrono::Utc>> {
    from_millis(millis).ok_or_else(|| {
        AppError::Database(format!(
            "Job {} has out-of-range {} value {}",
            id, column, millis
        ))
    })
}

impl SqliteEntity for Job {
    const TABLE: &'static str = "jobs";

    const DATA_COLUMNS: &'static [JobColumn] = &[
        JobColumn::Title,
        JobColumn::PostedAt,
        JobColumn::UpdatedAt,
        JobColumn::Domain,
        JobColumn::Location,
        JobColumn::Remote,
        JobColumn::FullTime,
        JobColumn::Requirements,
        JobColumn::Salary,
        JobColumn::EmployerId,
    ];

    type Row = JobRow;

    fn values(&self) -> Vec<FieldValue> {
        vec![
            self.title.clone().into(),
            truncate_millis(self.posted_at).into(),
            truncate_millis(self.updated_at).into(),
            self.domain.clone().into(),
            self.location.clone().into(),
            self.remote.into(),
            self.full_time.into(),
            self.requirements.clone().into(),
            self.salary.into(),
            self.employer_id.into(),
        ]
    }

    fn from_row(row: JobRow) -> Result<Self> {
        Ok(Job {
            id: Some(row.id),
            title: row.title,
            posted_at: timestamp("posted_at", row.id, row.posted_at)?,
            updated_at: timestamp("updated_at", row.id, row.updated_at)?,
            domain: row.domain,
            location: row.location,
            remote: row.remote != 0,
            full_time: row.full_time != 0,
            requirements: row.requirements,
            salary: row.salary,
            employer_id: row.employer_id,
        })
    }
}
