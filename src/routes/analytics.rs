//! Marks analytics routes.

use crate::handlers::analytics::{overall, subject_averages, summary, top};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn analytics_routes(state: AppState) -> Router {
    Router::new()
        .route("/analytics/subjects", get(subject_averages))
        .route("/analytics/top", get(top))
        .route("/analytics/overall", get(overall))
        .route("/analytics/summary", get(summary))
        .with_state(state)
}
