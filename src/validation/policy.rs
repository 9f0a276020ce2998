//! Per-role action policies.
//!
//! Each policy answers one question, `decide(kind, action)`, and the shared
//! trait methods turn that decision into an outcome:
//!
//! 1. `Reject` short-circuits with `ActionInvalid` before anything else runs.
//! 2. Every action except `Create` needs the subject to exist.
//! 3. `Validate` runs the entity helper; `PassThrough` skips it.

use async_trait::async_trait;

use super::field::exists_by_id;
use super::helpers::validate_fields;
use super::lookup::CatalogLookup;
use super::models::{ActionType, EntityKind, Role, ValidatableObject, ValidationOutcome};
use crate::common::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Reject,
    Validate,
    PassThrough,
}

#[async_trait]
pub trait ActionPolicy: Send + Sync {
    fn role(&self) -> Role;

    fn decide(&self, kind: EntityKind, action: ActionType) -> Decision;

    /// Validates a full object for `action`.
    async fn validate(
        &self,
        object: &ValidatableObject,
        action: ActionType,
        lookup: &dyn CatalogLookup,
    ) -> Result<ValidationOutcome, ApiError> {
        let decision = self.decide(object.kind(), action);
        if decision == Decision::Reject {
            return Ok(ValidationOutcome::ActionInvalid(action));
        }

        if action != ActionType::Create {
            if let Some(not_found) = exists_by_id(object.kind(), object.id(), lookup).await? {
                return Ok(not_found);
            }
        }

        match decision {
            Decision::Validate => Ok(ValidationOutcome::from_failures(
                validate_fields(object, action, lookup).await?,
            )),
            Decision::PassThrough | Decision::Reject => Ok(ValidationOutcome::Valid),
        }
    }

    /// Validates a by-id operation (read, delete, enrollment).
    async fn validate_id(
        &self,
        kind: EntityKind,
        id: i64,
        action: ActionType,
        lookup: &dyn CatalogLookup,
    ) -> Result<ValidationOutcome, ApiError> {
        if self.decide(kind, action) == Decision::Reject {
            return Ok(ValidationOutcome::ActionInvalid(action));
        }

        match exists_by_id(kind, id, lookup).await? {
            Some(not_found) => Ok(not_found),
            None => Ok(ValidationOutcome::Valid),
        }
    }
}

fn is_enrollment(action: ActionType) -> bool {
    matches!(action, ActionType::Enroll | ActionType::Withdraw)
}

/// Student records carry no CRUD policy under any role.
fn unconstrained(kind: EntityKind, action: ActionType) -> bool {
    kind == EntityKind::Student && !is_enrollment(action)
}

/// Enrollment is about a student; any other subject kind is rejected.
fn enrollment_subject(kind: EntityKind) -> Decision {
    if kind == EntityKind::Student {
        Decision::PassThrough
    } else {
        Decision::Reject
    }
}

// ============================================================================
// Admin
// ============================================================================

pub struct AdminPolicy;

#[async_trait]
impl ActionPolicy for AdminPolicy {
    fn role(&self) -> Role {
        Role::Admin
    }

    fn decide(&self, kind: EntityKind, action: ActionType) -> Decision {
        if unconstrained(kind, action) {
            return Decision::PassThrough;
        }

        match action {
            ActionType::Create | ActionType::Read | ActionType::Update => Decision::Validate,
            ActionType::Delete | ActionType::Enroll | ActionType::Withdraw => {
                Decision::PassThrough
            }
        }
    }
}

// ============================================================================
// Instructor
// ============================================================================

pub struct InstructorPolicy;

#[async_trait]
impl ActionPolicy for InstructorPolicy {
    fn role(&self) -> Role {
        Role::Instructor
    }

    fn decide(&self, kind: EntityKind, action: ActionType) -> Decision {
        if unconstrained(kind, action) {
            return Decision::PassThrough;
        }

        match action {
            ActionType::Create | ActionType::Read | ActionType::Update => Decision::Validate,
            ActionType::Delete => Decision::Reject,
            ActionType::Enroll | ActionType::Withdraw => enrollment_subject(kind),
        }
    }
}

// ============================================================================
// Student
// ============================================================================

pub struct StudentPolicy;

#[async_trait]
impl ActionPolicy for StudentPolicy {
    fn role(&self) -> Role {
        Role::Student
    }

    fn decide(&self, kind: EntityKind, action: ActionType) -> Decision {
        if unconstrained(kind, action) {
            return Decision::PassThrough;
        }

        match (action, kind) {
            (ActionType::Create, EntityKind::Review) => Decision::Validate,
            (ActionType::Create, _) => Decision::Reject,
            (ActionType::Read, _) => Decision::Validate,
            (ActionType::Update, _) | (ActionType::Delete, _) => Decision::Reject,
            (ActionType::Enroll, _) | (ActionType::Withdraw, _) => enrollment_subject(kind),
        }
    }
}

pub static ADMIN_POLICY: AdminPolicy = AdminPolicy;
pub static INSTRUCTOR_POLICY: InstructorPolicy = InstructorPolicy;
pub static STUDENT_POLICY: StudentPolicy = StudentPolicy;
