use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::Result;
use crate::models::job_application::{JobApplication, NewJobApplication};

/// Thin CRUD + pagination contract over the job_applications table. No
/// input validation happens at this layer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobApplicationRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<JobApplication>>;

    /// Page slice ordered by date_applied descending, plus the full row
    /// count. Page numbers are 1-based.
    async fn get_all_paged(
        &self,
        page_number: i64,
        page_size: i64,
    ) -> Result<(Vec<JobApplication>, i64)>;

    async fn get_by_id(&self, id: i32) -> Result<Option<JobApplication>>;

    async fn create(&self, new: NewJobApplication) -> Result<JobApplication>;

    /// Persists the mutable fields of an existing row and stamps
    /// updated_at. The row must already exist.
    async fn update(&self, entity: &JobApplication) -> Result<JobApplication>;

    /// True if a row was removed, false if the id was absent.
    async fn delete(&self, id: i32) -> Result<bool>;

    async fn exists(&self, id: i32) -> Result<bool>;
}

#[derive(Clone)]
pub struct PgJobApplicationRepository {
    pool: PgPool,
}

impl PgJobApplicationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT_COLUMNS: &str =
    "id, company_name, position, status, date_applied, created_at, updated_at";

#[async_trait]
impl JobApplicationRepository for PgJobApplicationRepository {
    async fn get_all(&self) -> Result<Vec<JobApplication>> {
        let rows = sqlx::query_as::<_, JobApplication>(&format!(
            "SELECT {} FROM job_applications",
            SELECT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn get_all_paged(
        &self,
        page_number: i64,
        page_size: i64,
    ) -> Result<(Vec<JobApplication>, i64)> {
        let total_count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM job_applications")
            .fetch_one(&self.pool)
            .await?;

        let offset = (page_number - 1) * page_size;
        let items = sqlx::query_as::<_, JobApplication>(&format!(
            "SELECT {} FROM job_applications ORDER BY date_applied DESC LIMIT $1 OFFSET $2",
            SELECT_COLUMNS
        ))
        .bind(page_size)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok((items, total_count))
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<JobApplication>> {
        let row = sqlx::query_as::<_, JobApplication>(&format!(
            "SELECT {} FROM job_applications WHERE id = $1",
            SELECT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn create(&self, new: NewJobApplication) -> Result<JobApplication> {
        let row = sqlx::query_as::<_, JobApplication>(&format!(
            "INSERT INTO job_applications (company_name, position, status, date_applied)
             VALUES ($1, $2, $3, $4)
             RETURNING {}",
            SELECT_COLUMNS
        ))
        .bind(new.company_name)
        .bind(new.position)
        .bind(new.status)
        .bind(new.date_applied)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn update(&self, entity: &JobApplication) -> Result<JobApplication> {
        let row = sqlx::query_as::<_, JobApplication>(&format!(
            "UPDATE job_applications
             SET company_name = $2, position = $3, status = $4, updated_at = NOW()
             WHERE id = $1
             RETURNING {}",
            SELECT_COLUMNS
        ))
        .bind(entity.id)
        .bind(&entity.company_name)
        .bind(&entity.position)
        .bind(entity.status)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        let res = sqlx::query("DELETE FROM job_applications WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(res.rows_affected() > 0)
    }

    async fn exists(&self, id: i32) -> Result<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM job_applications WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }
}
