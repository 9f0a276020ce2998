use super::models::CourseRequest;
use super::services::CoursesService;
use crate::auth::{CallerRole, RequestLocale};
use crate::common::{
    not_found_response, reject_outcome, ApiError, AppState, Locale, MessageResponse,
};
use crate::students::services::StudentsService;
use crate::validation::{ActionType, EntityKind};
use axum::{
    extract::{Extension, Path},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

// ============================================================================
// Course CRUD Handlers
// ============================================================================

/// GET /api/courses - List all courses
pub async fn get_courses(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let courses = CoursesService::new(state.db.clone()).get_all().await?;
    Ok(Json(courses))
}

/// POST /api/courses - Create a course
pub async fn create_course(
    Extension(state): Extension<Arc<AppState>>,
    role: CallerRole,
    RequestLocale(locale): RequestLocale,
    Json(request): Json<CourseRequest>,
) -> Result<Response, ApiError> {
    let outcome = state
        .validation
        .validate_for_action(&request.to_subject(0), ActionType::Create, role.token())
        .await?;
    if let Some(response) = reject_outcome(outcome, locale)? {
        return Ok(response);
    }
    if let Some(response) = check_instructor(&state, &request, &role, locale).await? {
        return Ok(response);
    }

    let course = CoursesService::new(state.db.clone()).create(&request).await?;

    Ok(Json(course).into_response())
}

/// GET /api/courses/:id - Get course by ID
pub async fn get_course_by_id(
    Extension(state): Extension<Arc<AppState>>,
    role: CallerRole,
    RequestLocale(locale): RequestLocale,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    let outcome = state
        .validation
        .validate_id_for_action(EntityKind::Course, id, ActionType::Read, role.token())
        .await?;
    if let Some(response) = reject_outcome(outcome, locale)? {
        return Ok(response);
    }

    match CoursesService::new(state.db.clone()).find_by_id(id).await? {
        Some(course) => Ok(Json(course).into_response()),
        None => Ok(not_found_response(EntityKind::Course, id, locale)),
    }
}

/// PUT /api/courses/:id - Update course
pub async fn update_course(
    Extension(state): Extension<Arc<AppState>>,
    role: CallerRole,
    RequestLocale(locale): RequestLocale,
    Path(id): Path<i64>,
    Json(request): Json<CourseRequest>,
) -> Result<Response, ApiError> {
    let outcome = state
        .validation
        .validate_for_action(&request.to_subject(id), ActionType::Update, role.token())
        .await?;
    if let Some(response) = reject_outcome(outcome, locale)? {
        return Ok(response);
    }
    if let Some(response) = check_instructor(&state, &request, &role, locale).await? {
        return Ok(response);
    }

    let course = CoursesService::new(state.db.clone())
        .update(id, &request)
        .await?;

    Ok(Json(course).into_response())
}

/// DELETE /api/courses/:id - Delete course
pub async fn delete_course(
    Extension(state): Extension<Arc<AppState>>,
    role: CallerRole,
    RequestLocale(locale): RequestLocale,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    let outcome = state
        .validation
        .validate_id_for_action(EntityKind::Course, id, ActionType::Delete, role.token())
        .await?;
    if let Some(response) = reject_outcome(outcome, locale)? {
        return Ok(response);
    }

    CoursesService::new(state.db.clone()).delete(id).await?;

    Ok(Json(MessageResponse {
        message: "Course deleted successfully".to_string(),
    })
    .into_response())
}

/// GET /api/courses/:id/students - Students enrolled in a course
pub async fn get_course_students(
    Extension(state): Extension<Arc<AppState>>,
    role: CallerRole,
    RequestLocale(locale): RequestLocale,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    let outcome = state
        .validation
        .validate_id_for_action(EntityKind::Course, id, ActionType::Read, role.token())
        .await?;
    if let Some(response) = reject_outcome(outcome, locale)? {
        return Ok(response);
    }

    let students = StudentsService::new(state.db.clone())
        .get_by_course(id)
        .await?;

    Ok(Json(students).into_response())
}

// ============================================================================
// Helpers
// ============================================================================

/// A referenced instructor must exist.
async fn check_instructor(
    state: &AppState,
    request: &CourseRequest,
    role: &CallerRole,
    locale: Locale,
) -> Result<Option<Response>, ApiError> {
    let Some(instructor_id) = request.instructor_id else {
        return Ok(None);
    };

    let outcome = state
        .validation
        .validate_id_for_action(
            EntityKind::Instructor,
            instructor_id,
            ActionType::Read,
            role.token(),
        )
        .await?;

    reject_outcome(outcome, locale)
}
