//! Student roster API server.
//!
//! Reads configuration from the environment (and `.env`), makes sure the database
//! and the `students` table exist, then serves the API.
//! Run from repo root: `cargo run -p roster-server`

use student_roster::{
    app_router, connect_pool, ensure_database_exists, AppState, PgStudentStore, RosterConfig,
    StudentStore,
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("student_roster=info,roster_server=info,tower_http=info")
            }),
        )
        .init();

    let config = RosterConfig::from_env()?;
    ensure_database_exists(&config.database).await?;
    let pool = connect_pool(&config.database).await?;

    let store = PgStudentStore::new(pool);
    store.create_table().await?;
    tracing::info!("students table ready");

    let app = app_router(AppState::new(store), &config.server);
    let listener = TcpListener::bind(&config.server.bind_addr).await?;
    tracing::info!(
        "student roster API listening on {} (public base URL {})",
        listener.local_addr()?,
        config.server.api_base_url
    );
    axum::serve(listener, app).await?;
    Ok(())
}
