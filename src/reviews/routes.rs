use super::handlers;
use axum::{routing::get, Router};

/// Creates the reviews router
pub fn reviews_routes() -> Router {
    Router::new()
        .route(
            "/api/courses/:id/reviews",
            get(handlers::get_course_reviews).post(handlers::create_review),
        )
        .route(
            "/api/reviews/:id",
            get(handlers::get_review_by_id)
                .put(handlers::update_review)
                .delete(handlers::delete_review),
        )
}
