use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::validation::{ReviewSubject, ValidatableObject};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Review {
    pub id: i64,
    pub course_id: i64,
    pub comment: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReviewRequest {
    #[serde(default)]
    pub comment: String,
}

impl ReviewRequest {
    pub fn to_subject(&self, id: i64) -> ValidatableObject {
        ValidatableObject::Review(ReviewSubject {
            id,
            comment: self.comment.clone(),
        })
    }
}
