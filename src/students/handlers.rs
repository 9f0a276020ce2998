use super::models::{EnrollmentResponse, StudentRequest};
use super::services::StudentsService;
use crate::auth::{CallerRole, RequestLocale};
use crate::common::{
    not_found_response, reject_outcome, ApiError, AppState, Locale, MessageResponse,
};
use crate::courses::services::CoursesService;
use crate::validation::{ActionType, EntityKind};
use axum::{
    extract::{Extension, Path},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

// ============================================================================
// Student CRUD Handlers
// ============================================================================

/// GET /api/students - List all students
pub async fn get_students(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let students = StudentsService::new(state.db.clone()).get_all().await?;
    Ok(Json(students))
}

/// POST /api/students - Create a student
pub async fn create_student(
    Extension(state): Extension<Arc<AppState>>,
    role: CallerRole,
    RequestLocale(locale): RequestLocale,
    Json(request): Json<StudentRequest>,
) -> Result<Response, ApiError> {
    let outcome = state
        .validation
        .validate_for_action(&request.to_subject(0), ActionType::Create, role.token())
        .await?;
    if let Some(response) = reject_outcome(outcome, locale)? {
        return Ok(response);
    }

    let student = StudentsService::new(state.db.clone()).create(&request).await?;

    Ok(Json(student).into_response())
}

/// GET /api/students/:id - Get student by ID
pub async fn get_student_by_id(
    Extension(state): Extension<Arc<AppState>>,
    role: CallerRole,
    RequestLocale(locale): RequestLocale,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    let outcome = state
        .validation
        .validate_id_for_action(EntityKind::Student, id, ActionType::Read, role.token())
        .await?;
    if let Some(response) = reject_outcome(outcome, locale)? {
        return Ok(response);
    }

    match StudentsService::new(state.db.clone()).find_by_id(id).await? {
        Some(student) => Ok(Json(student).into_response()),
        None => Ok(not_found_response(EntityKind::Student, id, locale)),
    }
}

/// PUT /api/students/:id - Update student
pub async fn update_student(
    Extension(state): Extension<Arc<AppState>>,
    role: CallerRole,
    RequestLocale(locale): RequestLocale,
    Path(id): Path<i64>,
    Json(request): Json<StudentRequest>,
) -> Result<Response, ApiError> {
    let outcome = state
        .validation
        .validate_for_action(&request.to_subject(id), ActionType::Update, role.token())
        .await?;
    if let Some(response) = reject_outcome(outcome, locale)? {
        return Ok(response);
    }

    let student = StudentsService::new(state.db.clone())
        .update(id, &request)
        .await?;

    Ok(Json(student).into_response())
}

/// DELETE /api/students/:id - Delete student
pub async fn delete_student(
    Extension(state): Extension<Arc<AppState>>,
    role: CallerRole,
    RequestLocale(locale): RequestLocale,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    let outcome = state
        .validation
        .validate_id_for_action(EntityKind::Student, id, ActionType::Delete, role.token())
        .await?;
    if let Some(response) = reject_outcome(outcome, locale)? {
        return Ok(response);
    }

    StudentsService::new(state.db.clone()).delete(id).await?;

    Ok(Json(MessageResponse {
        message: "Student deleted successfully".to_string(),
    })
    .into_response())
}

/// GET /api/students/:id/courses - Courses a student is enrolled in
pub async fn get_student_courses(
    Extension(state): Extension<Arc<AppState>>,
    role: CallerRole,
    RequestLocale(locale): RequestLocale,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    let outcome = state
        .validation
        .validate_id_for_action(EntityKind::Student, id, ActionType::Read, role.token())
        .await?;
    if let Some(response) = reject_outcome(outcome, locale)? {
        return Ok(response);
    }

    let courses = CoursesService::new(state.db.clone())
        .get_by_student(id)
        .await?;

    Ok(Json(courses).into_response())
}

// ============================================================================
// Enrollment Handlers
// ============================================================================

/// POST /api/students/:id/courses/:course_id - Enroll a student
pub async fn enroll_student(
    Extension(state): Extension<Arc<AppState>>,
    role: CallerRole,
    RequestLocale(locale): RequestLocale,
    Path((student_id, course_id)): Path<(i64, i64)>,
) -> Result<Response, ApiError> {
    if let Some(response) =
        check_enrollment(&state, student_id, course_id, ActionType::Enroll, &role, locale).await?
    {
        return Ok(response);
    }

    let enrolled = StudentsService::new(state.db.clone())
        .enroll(student_id, course_id)
        .await?;
    if !enrolled {
        return Err(ApiError::BadRequest(
            "Student is already enrolled in this course".to_string(),
        ));
    }

    Ok(Json(EnrollmentResponse {
        student_id,
        course_id,
        message: "Student enrolled successfully".to_string(),
    })
    .into_response())
}

/// DELETE /api/students/:id/courses/:course_id - Withdraw a student
pub async fn withdraw_student(
    Extension(state): Extension<Arc<AppState>>,
    role: CallerRole,
    RequestLocale(locale): RequestLocale,
    Path((student_id, course_id)): Path<(i64, i64)>,
) -> Result<Response, ApiError> {
    if let Some(response) =
        check_enrollment(&state, student_id, course_id, ActionType::Withdraw, &role, locale)
            .await?
    {
        return Ok(response);
    }

    let withdrawn = StudentsService::new(state.db.clone())
        .withdraw(student_id, course_id)
        .await?;
    if !withdrawn {
        return Err(ApiError::BadRequest(
            "Student is not enrolled in this course".to_string(),
        ));
    }

    Ok(Json(EnrollmentResponse {
        student_id,
        course_id,
        message: "Student withdrawn successfully".to_string(),
    })
    .into_response())
}

/// Gates the enrollment action on the student, then requires the course.
async fn check_enrollment(
    state: &AppState,
    student_id: i64,
    course_id: i64,
    action: ActionType,
    role: &CallerRole,
    locale: Locale,
) -> Result<Option<Response>, ApiError> {
    let outcome = state
        .validation
        .validate_id_for_action(EntityKind::Student, student_id, action, role.token())
        .await?;
    if let Some(response) = reject_outcome(outcome, locale)? {
        return Ok(Some(response));
    }

    let outcome = state
        .validation
        .validate_id_for_action(EntityKind::Course, course_id, ActionType::Read, role.token())
        .await?;
    reject_outcome(outcome, locale)
}
