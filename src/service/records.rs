//! Record access layer: CRUD for student records.
//!
//! Duplicate and missing identifiers are reported through the return value
//! (`bool` / `Option`), never as errors. `Err` means the store itself failed.

use crate::error::AppError;
use crate::model::StudentRecord;
use crate::sql;
use async_trait::async_trait;
use sqlx::PgPool;

#[async_trait]
pub trait StudentStore: Send + Sync {
    /// Create the `students` table if it does not exist. Safe to call repeatedly.
    async fn create_table(&self) -> Result<(), AppError>;

    /// Persist `record`. Returns `false` when the identifier is already taken.
    ///
    /// Existence check and write are separate round trips; two concurrent inserts of
    /// the same new id can both pass the check. The primary key still rejects the
    /// second write, which is reported as `false` as well.
    async fn insert(&self, record: &StudentRecord) -> Result<bool, AppError>;

    /// All records in natural store order.
    async fn get_all(&self) -> Result<Vec<StudentRecord>, AppError>;

    async fn get_by_id(&self, student_id: i32) -> Result<Option<StudentRecord>, AppError>;

    /// Overwrite every non-key field of the record with `record.student_id`.
    /// Returns `false` if no such record exists.
    async fn update(&self, record: &StudentRecord) -> Result<bool, AppError>;

    /// Returns whether a record was actually removed.
    async fn delete_by_id(&self, student_id: i32) -> Result<bool, AppError>;

    /// Round trip to the store, used by readiness checks.
    async fn ping(&self) -> Result<(), AppError>;
}

/// PostgreSQL-backed store. Holds the injected pool; each call borrows one connection.
#[derive(Clone)]
pub struct PgStudentStore {
    pool: PgPool,
}

impl PgStudentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn exists(&self, student_id: i32) -> Result<bool, AppError> {
        tracing::debug!(sql = %sql::EXISTS_BY_ID, student_id, "query");
        let row: (bool,) = sqlx::query_as(sql::EXISTS_BY_ID)
            .bind(student_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.0)
    }

    /// The write half of `insert`. A primary-key collision reports `false`.
    async fn insert_new(&self, record: &StudentRecord) -> Result<bool, AppError> {
        tracing::debug!(sql = %sql::INSERT, student_id = record.student_id, "query");
        let result = sqlx::query(sql::INSERT)
            .bind(record.student_id)
            .bind(&record.name)
            .bind(record.age)
            .bind(&record.gender)
            .bind(&record.subject)
            .bind(record.marks)
            .execute(&self.pool)
            .await;
        match result {
            Ok(_) => Ok(true),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                tracing::warn!(student_id = record.student_id, "insert lost race on identifier");
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl StudentStore for PgStudentStore {
    async fn create_table(&self) -> Result<(), AppError> {
        tracing::debug!(sql = %sql::CREATE_STUDENTS_TABLE, "query");
        sqlx::query(sql::CREATE_STUDENTS_TABLE)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn insert(&self, record: &StudentRecord) -> Result<bool, AppError> {
        if self.exists(record.student_id).await? {
            tracing::warn!(student_id = record.student_id, "insert rejected: identifier exists");
            return Ok(false);
        }
        self.insert_new(record).await
    }

    async fn get_all(&self) -> Result<Vec<StudentRecord>, AppError> {
        tracing::debug!(sql = %sql::SELECT_ALL, "query");
        let rows = sqlx::query_as::<_, StudentRecord>(sql::SELECT_ALL)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get_by_id(&self, student_id: i32) -> Result<Option<StudentRecord>, AppError> {
        tracing::debug!(sql = %sql::SELECT_BY_ID, student_id, "query");
        let row = sqlx::query_as::<_, StudentRecord>(sql::SELECT_BY_ID)
            .bind(student_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(&self, record: &StudentRecord) -> Result<bool, AppError> {
        tracing::debug!(sql = %sql::UPDATE, student_id = record.student_id, "query");
        let result = sqlx::query(sql::UPDATE)
            .bind(record.student_id)
            .bind(&record.name)
            .bind(record.age)
            .bind(&record.gender)
            .bind(&record.subject)
            .bind(record.marks)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_id(&self, student_id: i32) -> Result<bool, AppError> {
        tracing::debug!(sql = %sql::DELETE_BY_ID, student_id, "query");
        let result = sqlx::query(sql::DELETE_BY_ID)
            .bind(student_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}
