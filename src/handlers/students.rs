//! Student CRUD handlers. The only place record access signals become HTTP errors.

use crate::error::AppError;
use crate::extractors::{JsonBody, StudentIdPath};
use crate::model::{NewStudent, StudentPatch, StudentRecord, StudentResponse};
use crate::response::{created, listed, ok};
use crate::service::RequestValidator;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};
use serde::Serialize;

#[derive(Serialize)]
pub struct Deleted {
    pub student_id: i32,
    pub message: String,
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = state.store.get_all().await?;
    let data: Vec<StudentResponse> = rows.into_iter().map(StudentResponse::from).collect();
    Ok(listed(data))
}

pub async fn read(
    State(state): State<AppState>,
    StudentIdPath(id): StudentIdPath,
) -> Result<impl IntoResponse, AppError> {
    let row = state
        .store
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::student_not_found(id))?;
    Ok(ok(StudentResponse::from(row)))
}

pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<NewStudent>,
) -> Result<impl IntoResponse, AppError> {
    RequestValidator::validate_new(&body)?;
    let record = StudentRecord::from(body);
    if !state.store.insert(&record).await? {
        return Err(AppError::DuplicateIdentifier(record.student_id));
    }
    tracing::info!(student_id = record.student_id, "student created");
    Ok(created(StudentResponse::from(record)))
}

/// Partial update: fields missing from the body keep their stored values.
/// Read and write are separate round trips; a concurrent delete in between yields 404.
pub async fn update(
    State(state): State<AppState>,
    StudentIdPath(id): StudentIdPath,
    JsonBody(patch): JsonBody<StudentPatch>,
) -> Result<impl IntoResponse, AppError> {
    RequestValidator::validate_patch(&patch)?;
    let existing = state
        .store
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::student_not_found(id))?;
    if patch.is_empty() {
        return Ok(ok(StudentResponse::from(existing)));
    }
    let merged = patch.merge_into(existing);
    if !state.store.update(&merged).await? {
        return Err(AppError::student_not_found(id));
    }
    Ok(ok(StudentResponse::from(merged)))
}

pub async fn delete(
    State(state): State<AppState>,
    StudentIdPath(id): StudentIdPath,
) -> Result<impl IntoResponse, AppError> {
    if !state.store.delete_by_id(id).await? {
        return Err(AppError::student_not_found(id));
    }
    tracing::info!(student_id = id, "student deleted");
    Ok(ok(Deleted {
        student_id: id,
        message: format!("Student {} deleted successfully", id),
    }))
}
