use super::handlers;
use axum::{routing::get, Router};

/// Creates the courses router
pub fn courses_routes() -> Router {
    Router::new()
        .route(
            "/api/courses",
            get(handlers::get_courses).post(handlers::create_course),
        )
        .route(
            "/api/courses/:id",
            get(handlers::get_course_by_id)
                .put(handlers::update_course)
                .delete(handlers::delete_course),
        )
        .route("/api/courses/:id/students", get(handlers::get_course_students))
}
