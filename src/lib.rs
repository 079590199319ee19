//! Student roster: REST backend over a PostgreSQL `students` table with marks analytics.

pub mod analytics;
pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use analytics::{AnalyticsService, AnalyticsSummary, MarkStats};
pub use config::{DatabaseConfig, RosterConfig, ServerConfig};
pub use error::{AppError, ConfigError};
pub use model::{NewStudent, StudentPatch, StudentRecord, StudentResponse};
pub use response::{created, listed, ok, Envelope, ListEnvelope};
pub use routes::{analytics_routes, app_router, common_routes, student_routes};
pub use service::{MemoryStudentStore, PgStudentStore, StudentStore};
pub use state::AppState;
pub use store::{connect_pool, ensure_database_exists};
