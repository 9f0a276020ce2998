// src/validation/field.rs

use once_cell::sync::Lazy;
use regex::Regex;

use super::lookup::CatalogLookup;
use super::models::{EntityKind, FailureCode, ValidationFailure, ValidationOutcome};
use crate::common::ApiError;

// ============================================================================
// Pure Field Validators
// ============================================================================

/// Matched against the upper-cased, space-stripped value.
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z0-9._%+-]+@[A-Z0-9.-]+$").unwrap());

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Fails with `code` when the value is empty or whitespace only.
pub fn validate_not_blank(value: &str, code: FailureCode) -> Option<ValidationFailure> {
    if is_blank(value) {
        Some(ValidationFailure::new(code))
    } else {
        None
    }
}

/// Fails with `code` when a non-blank value is not an email address.
///
/// Blank values pass; the not-blank check reports those.
pub fn validate_email_format(value: &str, code: FailureCode) -> Option<ValidationFailure> {
    if is_blank(value) {
        return None;
    }

    let normalized: String = value.to_uppercase().chars().filter(|c| *c != ' ').collect();
    if EMAIL_REGEX.is_match(&normalized) {
        None
    } else {
        Some(ValidationFailure::new(code))
    }
}

/// A natural key conflicts only when it belongs to a different record.
fn conflicts(existing_id: Option<i64>, candidate_id: i64) -> bool {
    matches!(existing_id, Some(id) if id != candidate_id)
}

// ============================================================================
// Lookup-backed Validators
// ============================================================================

pub async fn email_uniqueness(
    email: &str,
    candidate_id: i64,
    lookup: &dyn CatalogLookup,
) -> Result<Option<ValidationFailure>, ApiError> {
    if is_blank(email) {
        return Ok(None);
    }

    let existing = lookup.find_instructor_by_email(email.trim()).await?;
    if conflicts(existing.map(|i| i.id), candidate_id) {
        Ok(Some(ValidationFailure::new(FailureCode::EmailAlreadyExists)))
    } else {
        Ok(None)
    }
}

pub async fn title_uniqueness(
    title: &str,
    candidate_id: i64,
    lookup: &dyn CatalogLookup,
) -> Result<Option<ValidationFailure>, ApiError> {
    if is_blank(title) {
        return Ok(None);
    }

    let existing = lookup.find_course_by_title(title.trim()).await?;
    if conflicts(existing.map(|c| c.id), candidate_id) {
        Ok(Some(ValidationFailure::new(FailureCode::TitleAlreadyExists)))
    } else {
        Ok(None)
    }
}

/// Existence gate for by-id paths.
///
/// Returns `Some(NotFound)` to abort the operation; this is never appended to
/// a failure list.
pub async fn exists_by_id(
    kind: EntityKind,
    id: i64,
    lookup: &dyn CatalogLookup,
) -> Result<Option<ValidationOutcome>, ApiError> {
    let found = match kind {
        EntityKind::Instructor => lookup.find_instructor(id).await?.is_some(),
        EntityKind::Course => lookup.find_course(id).await?.is_some(),
        EntityKind::Review => lookup.find_review(id).await?.is_some(),
        EntityKind::Student => lookup.find_student(id).await?.is_some(),
    };

    if found {
        Ok(None)
    } else {
        Ok(Some(ValidationOutcome::NotFound { kind, id }))
    }
}
