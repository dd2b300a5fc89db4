// Catalog Service - read-side use cases behind the HTTP API

use crate::domain::{Column, Employer, EntityId, FieldValue, Job, JobColumn};
use crate::error::{AppError, Result};
use crate::port::Repository;
use std::sync::Arc;
use tracing::debug;

/// Typed equality filter on the jobs table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobFilter {
    pub column: JobColumn,
    pub value: FieldValue,
}

impl JobFilter {
    pub fn new(column: JobColumn, value: impl Into<FieldValue>) -> Self {
        Self {
            column,
            value: value.into(),
        }
    }

    /// Build a filter from a raw `column=value` pair (query string, CLI flag)
    pub fn parse(column: &str, raw_value: &str) -> Result<Self> {
        let column: JobColumn = column.trim().parse()?;
        let value = FieldValue::parse(column.as_str(), column.kind(), raw_value)?;
        Ok(Self { column, value })
    }
}

/// Read access to jobs and employers
pub struct CatalogService {
    jobs: Arc<dyn Repository<Job>>,
    employers: Arc<dyn Repository<Employer>>,
}

impl CatalogService {
    pub fn new(jobs: Arc<dyn Repository<Job>>, employers: Arc<dyn Repository<Employer>>) -> Self {
        Self { jobs, employers }
    }

    /// All jobs in storage order, optionally narrowed by one equality filter
    pub async fn list_jobs(&self, filter: Option<JobFilter>) -> Result<Vec<Job>> {
        match filter {
            Some(JobFilter { column, value }) => {
                debug!(column = %column, value = %value, "Listing jobs with filter");
                self.jobs.query_for_eq(column, value).await
            }
            None => self.jobs.query_for_all().await,
        }
    }

    pub async fn get_job(&self, id: EntityId) -> Result<Job> {
        self.jobs
            .query_for_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Job {} not found", id)))
    }

    pub async fn list_employers(&self) -> Result<Vec<Employer>> {
        self.employers.query_for_all().await
    }

    pub async fn get_employer(&self, id: EntityId) -> Result<Employer> {
        self.employers
            .query_for_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Employer {} not found", id)))
    }

    /// Round-trip to the store; used by health probes
    pub async fn ping(&self) -> Result<()> {
        self.jobs.count_of().await.map(|_| ())
    }
}
