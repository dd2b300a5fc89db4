// SQLite Repository Implementation (generic over mapped entities)

use crate::entity::{bind_value, bind_values, SqliteEntity, Statements};
use crate::error::map_sqlx_error;
use async_trait::async_trait;
use jobboard_core::domain::{Column, EntityId, FieldValue};
use jobboard_core::error::{AppError, Result};
use jobboard_core::port::{CreateOrUpdateStatus, Repository};
use sqlx::{FromRow, Row, Sqlite, SqliteConnection, SqlitePool, Transaction};
use std::marker::PhantomData;
use tracing::debug;

pub struct SqliteRepository<E: SqliteEntity> {
    pool: SqlitePool,
    sql: Statements,
    _entity: PhantomData<fn() -> E>,
}

impl<E: SqliteEntity> SqliteRepository<E> {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            sql: Statements::for_entity::<E>(),
            _entity: PhantomData,
        }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn begin(&self) -> Result<Transaction<'static, Sqlite>> {
        self.pool.begin().await.map_err(map_sqlx_error)
    }

    /// Insert on the given connection and return the generated id
    async fn insert_on(&self, conn: &mut SqliteConnection, entity: &E) -> Result<EntityId> {
        let row = bind_values(sqlx::query(&self.sql.insert), entity.values())
            .fetch_one(&mut *conn)
            .await
            .map_err(map_sqlx_error)?;

        row.try_get::<i64, _>("id").map_err(map_sqlx_error)
    }

    async fn delete_on(&self, conn: &mut SqliteConnection, entity: &E) -> Result<u64> {
        let Some(id) = entity.id() else {
            return Ok(0);
        };

        let query = bind_values(
            sqlx::query(&self.sql.delete_exact).bind(id),
            entity.values(),
        );
        let result = query.execute(&mut *conn).await.map_err(map_sqlx_error)?;
        Ok(result.rows_affected())
    }

    fn decode_all(rows: Vec<E::Row>) -> Result<Vec<E>> {
        rows.into_iter().map(<E as SqliteEntity>::from_row).collect()
    }
}

#[async_trait]
impl<E: SqliteEntity> Repository<E> for SqliteRepository<E> {
    async fn create(&self, entity: &mut E) -> Result<()> {
        let mut conn = self.pool.acquire().await.map_err(map_sqlx_error)?;
        let id = self.insert_on(&mut conn, entity).await?;
        entity.set_id(id);

        debug!(table = E::TABLE, id, "Row created");
        Ok(())
    }

    async fn create_all(&self, entities: &mut [E]) -> Result<u64> {
        let mut tx = self.begin().await?;

        // Ids are only written back once the whole batch is committed
        let mut ids = Vec::with_capacity(entities.len());
        for entity in entities.iter() {
            ids.push(self.insert_on(&mut tx, entity).await?);
        }
        tx.commit().await.map_err(map_sqlx_error)?;

        for (entity, id) in entities.iter_mut().zip(ids) {
            entity.set_id(id);
        }

        debug!(table = E::TABLE, count = entities.len(), "Batch created");
        Ok(entities.len() as u64)
    }

    async fn create_or_update(&self, entity: &mut E) -> Result<CreateOrUpdateStatus> {
        if let Some(id) = entity.id() {
            let result = bind_values(sqlx::query(&self.sql.update), entity.values())
                .bind(id)
                .execute(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

            if result.rows_affected() > 0 {
                debug!(table = E::TABLE, id, "Row updated");
                return Ok(CreateOrUpdateStatus::Updated);
            }
        }

        self.create(entity).await?;
        Ok(CreateOrUpdateStatus::Created)
    }

    async fn update_id(&self, entity: &mut E, new_id: EntityId) -> Result<u64> {
        let id = entity.id().ok_or_else(|| {
            AppError::Validation(format!(
                "Cannot change the id of an unsaved {} row",
                E::TABLE
            ))
        })?;

        let result = sqlx::query(&self.sql.update_id)
            .bind(new_id)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        let affected = result.rows_affected();
        if affected > 0 {
            entity.set_id(new_id);
            debug!(table = E::TABLE, from = id, to = new_id, "Row id changed");
        }
        Ok(affected)
    }

    async fn query_for_eq(&self, column: E::Column, value: FieldValue) -> Result<Vec<E>> {
        let sql = self.sql.select_eq(column.as_str());
        let rows = bind_value(sqlx::query(&sql), value)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        debug!(table = E::TABLE, column = column.as_str(), matched = rows.len(), "Equality query");
        rows.iter()
            .map(|row| E::Row::from_row(row).map_err(map_sqlx_error))
            .collect::<Result<Vec<_>>>()
            .and_then(Self::decode_all)
    }

    async fn query_for_all(&self) -> Result<Vec<E>> {
        let rows: Vec<E::Row> = sqlx::query_as(&self.sql.select_all)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Self::decode_all(rows)
    }

    async fn query_for_id(&self, id: EntityId) -> Result<Option<E>> {
        let row: Option<E::Row> = sqlx::query_as(&self.sql.select_by_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        row.map(<E as SqliteEntity>::from_row).transpose()
    }

    async fn delete(&self, entity: &E) -> Result<u64> {
        let mut conn = self.pool.acquire().await.map_err(map_sqlx_error)?;
        let deleted = self.delete_on(&mut conn, entity).await?;

        debug!(table = E::TABLE, id = ?entity.id(), deleted, "Delete by value");
        Ok(deleted)
    }

    async fn delete_all(&self, entities: &[E]) -> Result<u64> {
        let mut tx = self.begin().await?;

        let mut deleted = 0;
        for entity in entities {
            deleted += self.delete_on(&mut tx, entity).await?;
        }
        tx.commit().await.map_err(map_sqlx_error)?;

        debug!(table = E::TABLE, requested = entities.len(), deleted, "Batch deleted");
        Ok(deleted)
    }

    async fn delete_by_id(&self, id: EntityId) -> Result<u64> {
        let result = sqlx::query(&self.sql.delete_by_id)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }

    async fn id_exists(&self, id: EntityId) -> Result<bool> {
        let exists: i64 = sqlx::query_scalar(&self.sql.exists)
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(exists != 0)
    }

    async fn count_of(&self) -> Result<i64> {
        sqlx::query_scalar(&self.sql.count)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)
    }

    async fn clear(&self) -> Result<u64> {
        let result = sqlx::query(&self.sql.clear)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        debug!(table = E::TABLE, deleted = result.rows_affected(), "Table cleared");
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_pool, run_migrations};
    use chrono::Utc;
    use jobboard_core::domain::{Employer, EmployerColumn, Job, JobColumn};

    async fn setup_test_db() -> SqlitePool {
        let pool = create_pool(":memory:", 1).await.unwrap();
        run_migrations(&pool).await.unwrap();
        pool
    }

    async fn saved_employer(pool: &SqlitePool) -> Employer {
        let repo = SqliteRepository::<Employer>::new(pool.clone());
        let mut employer = Employer::new("Kraft Heinz", "Food", "A global food company");
        repo.create(&mut employer).await.unwrap();
        employer
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_round_trips() {
        let pool = setup_test_db().await;
        let employer = saved_employer(&pool).await;
        let repo = SqliteRepository::<Job>::new(pool);

        let mut job = Job::new("Ketchup taster", Utc::now())
            .with_domain("here")
            .with_location("Some dark alleyway")
            .with_flags(true, false)
            .with_requirements("have good taste")
            .with_salary(18)
            .with_employer(&employer);
        repo.create(&mut job).await.unwrap();

        let id = job.id.expect("id assigned");
        let found = repo.query_for_id(id).await.unwrap();
        assert_eq!(found, Some(job));
    }

    #[tokio::test]
    async fn test_create_ignores_caller_id() {
        let pool = setup_test_db().await;
        let repo = SqliteRepository::<Employer>::new(pool);

        let mut employer = Employer::new("Apple", "Tech", "Summary");
        employer.id = Some(42);
        repo.create(&mut employer).await.unwrap();

        assert_eq!(employer.id, Some(1));
        assert!(!repo.id_exists(42).await.unwrap());
    }

    #[tokio::test]
    async fn test_empty_title_is_rejected() {
        let pool = setup_test_db().await;
        let repo = SqliteRepository::<Job>::new(pool);

        let mut job = Job::new("", Utc::now());
        let err = repo.create(&mut job).await.unwrap_err();
        assert!(err.is_constraint_violation(), "unexpected error: {err}");
        assert_eq!(job.id, None);
    }

    #[tokio::test]
    async fn test_create_or_update_reports_status() {
        let pool = setup_test_db().await;
        let repo = SqliteRepository::<Employer>::new(pool);

        let mut employer = Employer::new("Apple", "Tech", "Summary");
        let status = repo.create_or_update(&mut employer).await.unwrap();
        assert_eq!(status, CreateOrUpdateStatus::Created);

        employer.category = "Hardware".to_string();
        let status = repo.create_or_update(&mut employer).await.unwrap();
        assert_eq!(status, CreateOrUpdateStatus::Updated);
        assert_eq!(repo.count_of().await.unwrap(), 1);

        let found = repo
            .query_for_eq(EmployerColumn::Category, "Hardware".into())
            .await
            .unwrap();
        assert_eq!(found, vec![employer]);
    }

    #[tokio::test]
    async fn test_create_or_update_with_stale_id_inserts() {
        let pool = setup_test_db().await;
        let repo = SqliteRepository::<Employer>::new(pool);

        let mut employer = Employer::new("Apple", "Tech", "Summary");
        employer.id = Some(99);
        let status = repo.create_or_update(&mut employer).await.unwrap();

        assert_eq!(status, CreateOrUpdateStatus::Created);
        assert_eq!(employer.id, Some(1));
    }

    #[tokio::test]
    async fn test_update_id_without_id_is_validation_error() {
        let pool = setup_test_db().await;
        let repo = SqliteRepository::<Employer>::new(pool);

        let mut employer = Employer::new("Apple", "Tech", "Summary");
        let err = repo.update_id(&mut employer, 5).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_id_missing_row_changes_nothing() {
        let pool = setup_test_db().await;
        let repo = SqliteRepository::<Employer>::new(pool);

        let mut employer = Employer::new("Apple", "Tech", "Summary");
        employer.id = Some(3);
        assert_eq!(repo.update_id(&mut employer, 5).await.unwrap(), 0);
        assert_eq!(employer.id, Some(3));
    }

    #[tokio::test]
    async fn test_delete_requires_all_fields_to_match() {
        let pool = setup_test_db().await;
        let repo = SqliteRepository::<Job>::new(pool);

        let mut job = Job::new("Designer", Utc::now()).with_location("Ontario, Canada");
        repo.create(&mut job).await.unwrap();

        let mut stale = job.clone();
        stale.location = "The Moon".to_string();
        assert_eq!(repo.delete(&stale).await.unwrap(), 0);
        assert_eq!(repo.count_of().await.unwrap(), 1);

        assert_eq!(repo.delete(&job).await.unwrap(), 1);
        assert_eq!(repo.count_of().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_unsaved_entity_is_noop() {
        let pool = setup_test_db().await;
        let repo = SqliteRepository::<Job>::new(pool);

        let job = Job::new("Designer", Utc::now());
        assert_eq!(repo.delete(&job).await.unwrap(), 0);
        assert_eq!(repo.delete_by_id(10).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_null_employer_matches_eq_null() {
        let pool = setup_test_db().await;
        let repo = SqliteRepository::<Job>::new(pool);

        let mut job = Job::new("Freelancer", Utc::now());
        repo.create(&mut job).await.unwrap();

        let unowned = repo
            .query_for_eq(JobColumn::EmployerId, FieldValue::Null)
            .await
            .unwrap();
        assert_eq!(unowned, vec![job]);
    }

    #[tokio::test]
    async fn test_employer_id_change_cascades_to_jobs() {
        let pool = setup_test_db().await;
        let mut employer = saved_employer(&pool).await;
        let employers = SqliteRepository::<Employer>::new(pool.clone());
        let jobs = SqliteRepository::<Job>::new(pool);

        let mut job = Job::new("Ketchup taster", Utc::now()).with_employer(&employer);
        jobs.create(&mut job).await.unwrap();

        employers.update_id(&mut employer, 50).await.unwrap();

        let reloaded = jobs.query_for_id(job.id.unwrap()).await.unwrap().unwrap();
        assert_eq!(reloaded.employer_id, Some(50));
    }

    #[tokio::test]
    async fn test_deleting_employer_keeps_jobs() {
        let pool = setup_test_db().await;
        let employer = saved_employer(&pool).await;
        let employers = SqliteRepository::<Employer>::new(pool.clone());
        let jobs = SqliteRepository::<Job>::new(pool);

        let mut job = Job::new("Ketchup taster", Utc::now()).with_employer(&employer);
        jobs.create(&mut job).await.unwrap();

        assert_eq!(employers.delete(&employer).await.unwrap(), 1);

        let reloaded = jobs.query_for_id(job.id.unwrap()).await.unwrap().unwrap();
        assert_eq!(reloaded.employer_id, None);
    }

    #[tokio::test]
    async fn test_unknown_employer_reference_is_rejected() {
        let pool = setup_test_db().await;
        let jobs = SqliteRepository::<Job>::new(pool);

        let mut job = Job::new("Ghost", Utc::now());
        job.employer_id = Some(404);
        let err = jobs.create(&mut job).await.unwrap_err();
        assert!(err.is_constraint_violation());
    }

    #[tokio::test]
    async fn test_clear_empties_table() {
        let pool = setup_test_db().await;
        let repo = SqliteRepository::<Employer>::new(pool);

        let mut batch = vec![
            Employer::new("A", "x", "y"),
            Employer::new("B", "x", "y"),
        ];
        assert_eq!(repo.create_all(&mut batch).await.unwrap(), 2);
        assert_eq!(repo.clear().await.unwrap(), 2);
        assert_eq!(repo.count_of().await.unwrap(), 0);
        assert!(repo.pool().acquire().await.is_ok());
    }
}
