// Application state shared across all modules

use sqlx::SqlitePool;

use super::messages::Locale;
use crate::validation::ValidationFacade;

/// Application state containing the database pool and the validation engine
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub validation: ValidationFacade,
    pub default_locale: Locale,
}
