use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::validation::{StudentSubject, ValidatableObject};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Student {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentRequest {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
}

impl StudentRequest {
    pub fn to_subject(&self, id: i64) -> ValidatableObject {
        ValidatableObject::Student(StudentSubject { id })
    }
}

#[derive(Debug, Serialize)]
pub struct EnrollmentResponse {
    pub student_id: i64,
    pub course_id: i64,
    pub message: String,
}
