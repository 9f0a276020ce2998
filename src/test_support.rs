//! Shared fixtures for unit tests

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::common::{migrations, AppState, Locale};
use crate::validation::{PolicyResolver, SqliteCatalog, ValidationFacade};

/// In-memory database with the schema applied. A single connection keeps
/// every query on the same memory database.
pub async fn memory_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    migrations::run_migrations(&pool, false).await.unwrap();
    pool
}

pub fn test_state(pool: SqlitePool) -> Arc<AppState> {
    Arc::new(AppState {
        db: pool.clone(),
        validation: ValidationFacade::new(
            PolicyResolver::default(),
            Arc::new(SqliteCatalog::new(pool)),
        ),
        default_locale: Locale::En,
    })
}
