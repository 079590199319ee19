//! Extract the student identifier from the `/students/:id` path segment.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

#[derive(Clone, Copy, Debug)]
pub struct StudentIdPath(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for StudentIdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        raw.trim()
            .parse::<i32>()
            .map(StudentIdPath)
            .map_err(|_| AppError::BadRequest(format!("invalid student id: {}", raw)))
    }
}
