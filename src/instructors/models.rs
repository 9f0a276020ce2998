use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::validation::{InstructorSubject, ValidatableObject};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Instructor {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Body for create and update. Missing fields deserialize as empty strings
/// so they are reported by validation instead of the JSON extractor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InstructorRequest {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
}

impl InstructorRequest {
    pub fn to_subject(&self, id: i64) -> ValidatableObject {
        ValidatableObject::Instructor(InstructorSubject {
            id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
        })
    }
}
