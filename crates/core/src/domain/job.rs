// Job Domain Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::employer::Employer;
use super::entity::{Column, Entity};
use super::error::DomainError;
use super::field::{truncate_millis, ColumnKind, EntityId};

/// Job posting
///
/// `title` is optional in memory so that a missing title reaches the store
/// and is rejected there by the NOT NULL constraint. The owning employer is
/// referenced by id only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: Option<EntityId>,
    pub title: Option<String>,
    pub posted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub domain: String,
    pub location: String,
    pub remote: bool,
    pub full_time: bool,
    pub requirements: String,
    pub salary: i64,
    pub employer_id: Option<EntityId>,
}

impl Job {
    /// Create an unsaved job posted (and last updated) at `posted_at`.
    ///
    /// Timestamps are truncated to millisecond precision so a job read back
    /// from the store compares equal to the one that was written.
    pub fn new(title: impl Into<String>, posted_at: DateTime<Utc>) -> Self {
        let posted_at = truncate_millis(posted_at);
        Self {
            id: None,
            title: Some(title.into()),
            posted_at,
            updated_at: posted_at,
            domain: String::new(),
            location: String::new(),
            remote: false,
            full_time: false,
            requirements: String::new(),
            salary: 0,
            employer_id: None,
        }
    }

    /// Attach the job to a persisted employer (unsaved employers leave it unowned)
    pub fn with_employer(mut self, employer: &Employer) -> Self {
        self.employer_id = employer.id;
        self
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_flags(mut self, remote: bool, full_time: bool) -> Self {
        self.remote = remote;
        self.full_time = full_time;
        self
    }

    pub fn with_requirements(mut self, requirements: impl Into<String>) -> Self {
        self.requirements = requirements.into();
        self
    }

    pub fn with_salary(mut self, salary: i64) -> Self {
        self.salary = salary;
        self
    }

    pub fn with_updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = truncate_millis(updated_at);
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

impl Entity for Job {
    type Column = JobColumn;

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = Some(id);
    }
}

/// Columns of the `jobs` table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobColumn {
    Id,
    Title,
    PostedAt,
    UpdatedAt,
    Domain,
    Location,
    Remote,
    FullTime,
    Requirements,
    Salary,
    EmployerId,
}

impl Column for JobColumn {
    const ALL: &'static [Self] = &[
        JobColumn::Id,
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

    const ENTITY: &'static str = "job";

    fn as_str(&self) -> &'static str {
        match self {
            JobColumn::Id => "id",
            JobColumn::Title => "title",
            JobColumn::PostedAt => "posted_at",
            JobColumn::UpdatedAt => "updated_at",
            JobColumn::Domain => "domain",
            JobColumn::Location => "location",
            JobColumn::Remote => "remote",
            JobColumn::FullTime => "full_time",
            JobColumn::Requirements => "requirements",
            JobColumn::Salary => "salary",
            JobColumn::EmployerId => "employer_id",
        }
    }

    fn kind(&self) -> ColumnKind {
        match self {
            JobColumn::Id | JobColumn::Salary | JobColumn::EmployerId => ColumnKind::Integer,
            JobColumn::PostedAt | JobColumn::UpdatedAt => ColumnKind::Timestamp,
            JobColumn::Remote | JobColumn::FullTime => ColumnKind::Bool,
            JobColumn::Title | JobColumn::Domain | JobColumn::Location | JobColumn::Requirements => {
                ColumnKind::Text
            }
        }
    }
}

impl fmt::Display for JobColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobColumn {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}
