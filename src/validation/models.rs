//! Value types shared by the validation engine

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Roles and Actions
// ============================================================================

/// Caller role as supplied by the client.
///
/// `Unknown` is a real value: an absent, empty or misspelled role token maps
/// here and the resolver substitutes the configured default policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Instructor,
    Student,
    Unknown,
}

impl Role {
    /// Parses a role token. Matching is case-insensitive and tolerates a
    /// `ROLE_` prefix, so `"admin"`, `"ADMIN"` and `"ROLE_ADMIN"` are equal.
    pub fn from_token(token: Option<&str>) -> Self {
        let Some(raw) = token else {
            return Role::Unknown;
        };

        let normalized = raw.trim().to_uppercase();
        let name = normalized.strip_prefix("ROLE_").unwrap_or(&normalized);

        match name {
            "ADMIN" => Role::Admin,
            "INSTRUCTOR" => Role::Instructor,
            "STUDENT" => Role::Student,
            _ => Role::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Instructor => "INSTRUCTOR",
            Role::Student => "STUDENT",
            Role::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionType {
    Create,
    Read,
    Update,
    Delete,
    Enroll,
    Withdraw,
}

impl ActionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionType::Create => "CREATE",
            ActionType::Read => "READ",
            ActionType::Update => "UPDATE",
            ActionType::Delete => "DELETE",
            ActionType::Enroll => "ENROLL",
            ActionType::Withdraw => "WITHDRAW",
        }
    }

    /// Actions that write a natural key and therefore need uniqueness checks.
    pub fn writes_fields(&self) -> bool {
        matches!(self, ActionType::Create | ActionType::Update)
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Validation Subjects
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Instructor,
    Course,
    Review,
    Student,
}

impl EntityKind {
    /// Display name used in rendered messages ("Course with id=1 not found.").
    pub fn display_name(&self) -> &'static str {
        match self {
            EntityKind::Instructor => "Instructor",
            EntityKind::Course => "Course",
            EntityKind::Review => "Review",
            EntityKind::Student => "Student",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructorSubject {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseSubject {
    pub id: i64,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewSubject {
    pub id: i64,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentSubject {
    pub id: i64,
}

/// Tagged union of everything the engine can validate. An id of `0` marks an
/// object that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatableObject {
    Instructor(InstructorSubject),
    Course(CourseSubject),
    Review(ReviewSubject),
    Student(StudentSubject),
}

impl ValidatableObject {
    pub fn kind(&self) -> EntityKind {
        match self {
            ValidatableObject::Instructor(_) => EntityKind::Instructor,
            ValidatableObject::Course(_) => EntityKind::Course,
            ValidatableObject::Review(_) => EntityKind::Review,
            ValidatableObject::Student(_) => EntityKind::Student,
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            ValidatableObject::Instructor(i) => i.id,
            ValidatableObject::Course(c) => c.id,
            ValidatableObject::Review(r) => r.id,
            ValidatableObject::Student(s) => s.id,
        }
    }
}

// ============================================================================
// Failures and Outcomes
// ============================================================================

/// Stable failure identifiers. The serialized names are part of the wire
/// contract and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FailureCode {
    FirstNameEmpty,
    LastNameEmpty,
    EmailEmpty,
    EmailInvalid,
    EmailAlreadyExists,
    TitleEmpty,
    TitleAlreadyExists,
    CommentEmpty,
    ActionInvalid,
}

impl FailureCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureCode::FirstNameEmpty => "FIRST_NAME_EMPTY",
            FailureCode::LastNameEmpty => "LAST_NAME_EMPTY",
            FailureCode::EmailEmpty => "EMAIL_EMPTY",
            FailureCode::EmailInvalid => "EMAIL_INVALID",
            FailureCode::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            FailureCode::TitleEmpty => "TITLE_EMPTY",
            FailureCode::TitleAlreadyExists => "TITLE_ALREADY_EXISTS",
            FailureCode::CommentEmpty => "COMMENT_EMPTY",
            FailureCode::ActionInvalid => "ACTION_INVALID",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValidationFailure {
    pub code: FailureCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<ActionType>,
}

impl ValidationFailure {
    pub fn new(code: FailureCode) -> Self {
        Self { code, action: None }
    }

    pub fn action_invalid(action: ActionType) -> Self {
        Self {
            code: FailureCode::ActionInvalid,
            action: Some(action),
        }
    }
}

/// Result of running a policy. Built fresh per request and consumed once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    ActionInvalid(ActionType),
    Failed(Vec<ValidationFailure>),
    NotFound { kind: EntityKind, id: i64 },
}

impl ValidationOutcome {
    /// Turns an aggregated failure list into an outcome.
    pub fn from_failures(failures: Vec<ValidationFailure>) -> Self {
        if failures.is_empty() {
            ValidationOutcome::Valid
        } else {
            ValidationOutcome::Failed(failures)
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    /// Failure list view; an action rejection is a single `ACTION_INVALID`.
    pub fn failures(&self) -> Vec<ValidationFailure> {
        match self {
            ValidationOutcome::Failed(failures) => failures.clone(),
            ValidationOutcome::ActionInvalid(action) => {
                vec![ValidationFailure::action_invalid(*action)]
            }
            ValidationOutcome::Valid | ValidationOutcome::NotFound { .. } => Vec::new(),
        }
    }

    pub fn codes(&self) -> Vec<FailureCode> {
        self.failures().into_iter().map(|f| f.code).collect()
    }
}
