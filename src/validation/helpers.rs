// src/validation/helpers.rs

use async_trait::async_trait;

use super::field::{
    email_uniqueness, title_uniqueness, validate_email_format, validate_not_blank,
};
use super::lookup::CatalogLookup;
use super::models::{
    ActionType, CourseSubject, FailureCode, InstructorSubject, ReviewSubject, StudentSubject,
    ValidatableObject, ValidationFailure,
};
use crate::common::{ApiError, EntityValidator, FailureList};

// ============================================================================
// Instructor Validator
// ============================================================================

pub struct InstructorValidator;

#[async_trait]
impl EntityValidator<InstructorSubject> for InstructorValidator {
    async fn validate(
        &self,
        data: &InstructorSubject,
        action: ActionType,
        lookup: &dyn CatalogLookup,
    ) -> Result<FailureList, ApiError> {
        let mut result = FailureList::new();

        result.push(validate_not_blank(&data.first_name, FailureCode::FirstNameEmpty));
        result.push(validate_not_blank(&data.last_name, FailureCode::LastNameEmpty));
        result.push(validate_not_blank(&data.email, FailureCode::EmailEmpty));
        result.push(validate_email_format(&data.email, FailureCode::EmailInvalid));

        if action.writes_fields() {
            result.push(email_uniqueness(&data.email, data.id, lookup).await?);
        }

        Ok(result)
    }
}

// ============================================================================
// Course Validator
// ============================================================================

pub struct CourseValidator;

#[async_trait]
impl EntityValidator<CourseSubject> for CourseValidator {
    async fn validate(
        &self,
        data: &CourseSubject,
        action: ActionType,
        lookup: &dyn CatalogLookup,
    ) -> Result<FailureList, ApiError> {
        let mut result = FailureList::new();

        result.push(validate_not_blank(&data.title, FailureCode::TitleEmpty));

        if action.writes_fields() {
            result.push(title_uniqueness(&data.title, data.id, lookup).await?);
        }

        Ok(result)
    }
}

// ============================================================================
// Review Validator
// ============================================================================

pub struct ReviewValidator;

#[async_trait]
impl EntityValidator<ReviewSubject> for ReviewValidator {
    async fn validate(
        &self,
        data: &ReviewSubject,
        _action: ActionType,
        _lookup: &dyn CatalogLookup,
    ) -> Result<FailureList, ApiError> {
        let mut result = FailureList::new();
        result.push(validate_not_blank(&data.comment, FailureCode::CommentEmpty));
        Ok(result)
    }
}

// ============================================================================
// Student Validator
// ============================================================================

/// Students carry no field rules.
pub struct StudentValidator;

#[async_trait]
impl EntityValidator<StudentSubject> for StudentValidator {
    async fn validate(
        &self,
        _data: &StudentSubject,
        _action: ActionType,
        _lookup: &dyn CatalogLookup,
    ) -> Result<FailureList, ApiError> {
        Ok(FailureList::new())
    }
}

// ============================================================================
// Dispatch
// ============================================================================

/// Runs the helper matching the object's tag and returns failures in the
/// order the checks ran.
pub async fn validate_fields(
    object: &ValidatableObject,
    action: ActionType,
    lookup: &dyn CatalogLookup,
) -> Result<Vec<ValidationFailure>, ApiError> {
    let result = match object {
        ValidatableObject::Instructor(data) => {
            InstructorValidator.validate(data, action, lookup).await?
        }
        ValidatableObject::Course(data) => CourseValidator.validate(data, action, lookup).await?,
        ValidatableObject::Review(data) => ReviewValidator.validate(data, action, lookup).await?,
        ValidatableObject::Student(data) => {
            StudentValidator.validate(data, action, lookup).await?
        }
    };

    Ok(result.into_vec())
}
