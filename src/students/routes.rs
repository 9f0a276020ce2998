use super::handlers;
use axum::{
    routing::{get, post},
    Router,
};

/// Creates the students router with CRUD and enrollment routes
pub fn students_routes() -> Router {
    Router::new()
        .route(
            "/api/students",
            get(handlers::get_students).post(handlers::create_student),
        )
        .route(
            "/api/students/:id",
            get(handlers::get_student_by_id)
                .put(handlers::update_student)
                .delete(handlers::delete_student),
        )
        .route("/api/students/:id/courses", get(handlers::get_student_courses))
        .route(
            "/api/students/:id/courses/:course_id",
            post(handlers::enroll_student).delete(handlers::withdraw_student),
        )
}
