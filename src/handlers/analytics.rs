//! Read-only analytics handlers over the full record set.

use crate::analytics::{AnalyticsService, DEFAULT_TOP_LIMIT};
use crate::error::AppError;
use crate::model::StudentResponse;
use crate::response::{listed, ok};
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use std::collections::HashMap;

fn usize_param(params: &HashMap<String, String>, key: &str, default: usize) -> Result<usize, AppError> {
    match params.get(key) {
        None => Ok(default),
        Some(v) => v
            .parse()
            .map_err(|_| AppError::BadRequest(format!("{} must be a non-negative integer", key))),
    }
}

pub async fn subject_averages(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let averages = AnalyticsService::average_marks_by_subject(state.store.as_ref()).await?;
    Ok(ok(averages))
}

pub async fn top(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let limit = usize_param(&params, "limit", DEFAULT_TOP_LIMIT)?;
    let rows = AnalyticsService::top_students(state.store.as_ref(), limit).await?;
    let data: Vec<StudentResponse> = rows.into_iter().map(StudentResponse::from).collect();
    Ok(listed(data))
}

/// `data` is null when there are no records.
pub async fn overall(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let stats = AnalyticsService::overall_stats(state.store.as_ref()).await?;
    Ok(ok(stats))
}

pub async fn summary(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let top_n = usize_param(&params, "top", DEFAULT_TOP_LIMIT)?;
    let summary = AnalyticsService::summary(state.store.as_ref(), top_n).await?;
    Ok(ok(summary))
}
