//! Read-only persistence lookups consumed by the validators

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::common::ApiError;
use crate::courses::models::Course;
use crate::courses::services::CoursesService;
use crate::instructors::models::Instructor;
use crate::instructors::services::InstructorsService;
use crate::reviews::models::Review;
use crate::reviews::services::ReviewsService;
use crate::students::models::Student;
use crate::students::services::StudentsService;

/// Lookups the engine needs from the store.
///
/// Errors are opaque to the engine and propagate to the boundary untouched.
#[async_trait]
pub trait CatalogLookup: Send + Sync {
    async fn find_instructor(&self, id: i64) -> Result<Option<Instructor>, ApiError>;
    async fn find_instructor_by_email(&self, email: &str)
        -> Result<Option<Instructor>, ApiError>;
    async fn find_course(&self, id: i64) -> Result<Option<Course>, ApiError>;
    async fn find_course_by_title(&self, title: &str) -> Result<Option<Course>, ApiError>;
    async fn find_review(&self, id: i64) -> Result<Option<Review>, ApiError>;
    async fn find_student(&self, id: i64) -> Result<Option<Student>, ApiError>;
}

/// `CatalogLookup` backed by the SQLite services.
#[derive(Clone)]
pub struct SqliteCatalog {
    db: SqlitePool,
}

impl SqliteCatalog {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CatalogLookup for SqliteCatalog {
    async fn find_instructor(&self, id: i64) -> Result<Option<Instructor>, ApiError> {
        InstructorsService::new(self.db.clone()).find_by_id(id).await
    }

    async fn find_instructor_by_email(
        &self,
        email: &str,
    ) -> Result<Option<Instructor>, ApiError> {
        InstructorsService::new(self.db.clone())
            .find_by_email(email)
            .await
    }

    async fn find_course(&self, id: i64) -> Result<Option<Course>, ApiError> {
        CoursesService::new(self.db.clone()).find_by_id(id).await
    }

    async fn find_course_by_title(&self, title: &str) -> Result<Option<Course>, ApiError> {
        CoursesService::new(self.db.clone()).find_by_title(title).await
    }

    async fn find_review(&self, id: i64) -> Result<Option<Review>, ApiError> {
        ReviewsService::new(self.db.clone()).find_by_id(id).await
    }

    async fn find_student(&self, id: i64) -> Result<Option<Student>, ApiError> {
        StudentsService::new(self.db.clone()).find_by_id(id).await
    }
}
