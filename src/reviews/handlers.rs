use super::models::ReviewRequest;
use super::services::ReviewsService;
use crate::auth::{CallerRole, RequestLocale};
use crate::common::{not_found_response, reject_outcome, ApiError, AppState, MessageResponse};
use crate::validation::{ActionType, EntityKind};
use axum::{
    extract::{Extension, Path},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

/// GET /api/courses/:id/reviews - Reviews for a course
pub async fn get_course_reviews(
    Extension(state): Extension<Arc<AppState>>,
    role: CallerRole,
    RequestLocale(locale): RequestLocale,
    Path(course_id): Path<i64>,
) -> Result<Response, ApiError> {
    let outcome = state
        .validation
        .validate_id_for_action(EntityKind::Course, course_id, ActionType::Read, role.token())
        .await?;
    if let Some(response) = reject_outcome(outcome, locale)? {
        return Ok(response);
    }

    let reviews = ReviewsService::new(state.db.clone())
        .get_by_course(course_id)
        .await?;

    Ok(Json(reviews).into_response())
}

/// POST /api/courses/:id/reviews - Post a review for a course
pub async fn create_review(
    Extension(state): Extension<Arc<AppState>>,
    role: CallerRole,
    RequestLocale(locale): RequestLocale,
    Path(course_id): Path<i64>,
    Json(request): Json<ReviewRequest>,
) -> Result<Response, ApiError> {
    // The course must exist before the review itself is looked at.
    let outcome = state
        .validation
        .validate_id_for_action(EntityKind::Course, course_id, ActionType::Read, role.token())
        .await?;
    if let Some(response) = reject_outcome(outcome, locale)? {
        return Ok(response);
    }

    let outcome = state
        .validation
        .validate_for_action(&request.to_subject(0), ActionType::Create, role.token())
        .await?;
    if let Some(response) = reject_outcome(outcome, locale)? {
        return Ok(response);
    }

    let review = ReviewsService::new(state.db.clone())
        .create(course_id, &request)
        .await?;

    Ok(Json(review).into_response())
}

/// GET /api/reviews/:id - Get review by ID
pub async fn get_review_by_id(
    Extension(state): Extension<Arc<AppState>>,
    role: CallerRole,
    RequestLocale(locale): RequestLocale,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    let outcome = state
        .validation
        .validate_id_for_action(EntityKind::Review, id, ActionType::Read, role.token())
        .await?;
    if let Some(response) = reject_outcome(outcome, locale)? {
        return Ok(response);
    }

    match ReviewsService::new(state.db.clone()).find_by_id(id).await? {
        Some(review) => Ok(Json(review).into_response()),
        None => Ok(not_found_response(EntityKind::Review, id, locale)),
    }
}

/// PUT /api/reviews/:id - Update review
pub async fn update_review(
    Extension(state): Extension<Arc<AppState>>,
    role: CallerRole,
    RequestLocale(locale): RequestLocale,
    Path(id): Path<i64>,
    Json(request): Json<ReviewRequest>,
) -> Result<Response, ApiError> {
    let outcome = state
        .validation
        .validate_for_action(&request.to_subject(id), ActionType::Update, role.token())
        .await?;
    if let Some(response) = reject_outcome(outcome, locale)? {
        return Ok(response);
    }

    let review = ReviewsService::new(state.db.clone())
        .update(id, &request)
        .await?;

    Ok(Json(review).into_response())
}

/// DELETE /api/reviews/:id - Delete review
pub async fn delete_review(
    Extension(state): Extension<Arc<AppState>>,
    role: CallerRole,
    RequestLocale(locale): RequestLocale,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    let outcome = state
        .validation
        .validate_id_for_action(EntityKind::Review, id, ActionType::Delete, role.token())
        .await?;
    if let Some(response) = reject_outcome(outcome, locale)? {
        return Ok(response);
    }

    ReviewsService::new(state.db.clone()).delete(id).await?;

    Ok(Json(MessageResponse {
        message: "Review deleted successfully".to_string(),
    })
    .into_response())
}
