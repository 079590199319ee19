//! Route assembly.

mod analytics;
mod common;
mod students;

pub use analytics::analytics_routes;
pub use common::common_routes;
pub use students::student_routes;

use crate::config::ServerConfig;
use crate::state::AppState;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Full API: common, student and analytics routes with request tracing and a body size limit.
pub fn app_router(state: AppState, server: &ServerConfig) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(student_routes(state.clone()))
        .merge(analytics_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(server.body_limit_bytes)),
        )
}
