use super::models::InstructorRequest;
use super::services::InstructorsService;
use crate::auth::{CallerRole, RequestLocale};
use crate::common::{not_found_response, reject_outcome, ApiError, AppState, MessageResponse};
use crate::validation::{ActionType, EntityKind};
use axum::{
    extract::{Extension, Path},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

// ============================================================================
// Instructor CRUD Handlers
// ============================================================================

/// GET /api/instructors - List all instructors
pub async fn get_instructors(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let instructors = InstructorsService::new(state.db.clone()).get_all().await?;
    Ok(Json(instructors))
}

/// POST /api/instructors - Create an instructor
pub async fn create_instructor(
    Extension(state): Extension<Arc<AppState>>,
    role: CallerRole,
    RequestLocale(locale): RequestLocale,
    Json(request): Json<InstructorRequest>,
) -> Result<Response, ApiError> {
    let outcome = state
        .validation
        .validate_for_action(&request.to_subject(0), ActionType::Create, role.token())
        .await?;
    if let Some(response) = reject_outcome(outcome, locale)? {
        return Ok(response);
    }

    let instructor = InstructorsService::new(state.db.clone())
        .create(&request)
        .await?;

    Ok(Json(instructor).into_response())
}

/// GET /api/instructors/:id - Get instructor by ID
pub async fn get_instructor_by_id(
    Extension(state): Extension<Arc<AppState>>,
    role: CallerRole,
    RequestLocale(locale): RequestLocale,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    let outcome = state
        .validation
        .validate_id_for_action(EntityKind::Instructor, id, ActionType::Read, role.token())
        .await?;
    if let Some(response) = reject_outcome(outcome, locale)? {
        return Ok(response);
    }

    match InstructorsService::new(state.db.clone()).find_by_id(id).await? {
        Some(instructor) => Ok(Json(instructor).into_response()),
        None => Ok(not_found_response(EntityKind::Instructor, id, locale)),
    }
}

/// PUT /api/instructors/:id - Update instructor
pub async fn update_instructor(
    Extension(state): Extension<Arc<AppState>>,
    role: CallerRole,
    RequestLocale(locale): RequestLocale,
    Path(id): Path<i64>,
    Json(request): Json<InstructorRequest>,
) -> Result<Response, ApiError> {
    let outcome = state
        .validation
        .validate_for_action(&request.to_subject(id), ActionType::Update, role.token())
        .await?;
    if let Some(response) = reject_outcome(outcome, locale)? {
        return Ok(response);
    }

    let instructor = InstructorsService::new(state.db.clone())
        .update(id, &request)
        .await?;

    Ok(Json(instructor).into_response())
}

/// DELETE /api/instructors/:id - Delete instructor
pub async fn delete_instructor(
    Extension(state): Extension<Arc<AppState>>,
    role: CallerRole,
    RequestLocale(locale): RequestLocale,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    let outcome = state
        .validation
        .validate_id_for_action(EntityKind::Instructor, id, ActionType::Delete, role.token())
        .await?;
    if let Some(response) = reject_outcome(outcome, locale)? {
        return Ok(response);
    }

    InstructorsService::new(state.db.clone()).delete(id).await?;

    Ok(Json(MessageResponse {
        message: "Instructor deleted successfully".to_string(),
    })
    .into_response())
}
