//! In-memory `StudentStore`. Same signals as the PostgreSQL store; used in tests
//! and for running the API without a database.

use crate::error::AppError;
use crate::model::StudentRecord;
use crate::service::StudentStore;
use async_trait::async_trait;
use tokio::sync::Mutex;

/// Rows are kept in insertion order, which is this store's natural order.
#[derive(Default)]
pub struct MemoryStudentStore {
    rows: Mutex<Vec<StudentRecord>>,
}

impl MemoryStudentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<StudentRecord>) -> Self {
        Self {
            rows: Mutex::new(records),
        }
    }
}

#[async_trait]
impl StudentStore for MemoryStudentStore {
    async fn create_table(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn insert(&self, record: &StudentRecord) -> Result<bool, AppError> {
        let mut rows = self.rows.lock().await;
        if rows.iter().any(|r| r.student_id == record.student_id) {
            return Ok(false);
        }
        rows.push(record.clone());
        Ok(true)
    }

    async fn get_all(&self) -> Result<Vec<StudentRecord>, AppError> {
        Ok(self.rows.lock().await.clone())
    }

    async fn get_by_id(&self, student_id: i32) -> Result<Option<StudentRecord>, AppError> {
        let rows = self.rows.lock().await;
        Ok(rows.iter().find(|r| r.student_id == student_id).cloned())
    }

    async fn update(&self, record: &StudentRecord) -> Result<bool, AppError> {
        let mut rows = self.rows.lock().await;
        match rows.iter_mut().find(|r| r.student_id == record.student_id) {
            Some(row) => {
                *row = record.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_by_id(&self, student_id: i32) -> Result<bool, AppError> {
        let mut rows = self.rows.lock().await;
        let before = rows.len();
        rows.retain(|r| r.student_id != student_id);
        Ok(rows.len() < before)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
