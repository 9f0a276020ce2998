use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::validation::{CourseSubject, ValidatableObject};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub instructor_id: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourseRequest {
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
    pub instructor_id: Option<i64>,
}

impl CourseRequest {
    pub fn to_subject(&self, id: i64) -> ValidatableObject {
        ValidatableObject::Course(CourseSubject {
            id,
            title: self.title.clone(),
        })
    }
}
