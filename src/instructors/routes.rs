use super::handlers;
use axum::{routing::get, Router};

/// Creates the instructors router
pub fn instructors_routes() -> Router {
    Router::new()
        .route(
            "/api/instructors",
            get(handlers::get_instructors).post(handlers::create_instructor),
        )
        .route(
            "/api/instructors/:id",
            get(handlers::get_instructor_by_id)
                .put(handlers::update_instructor)
                .delete(handlers::delete_instructor),
        )
}
