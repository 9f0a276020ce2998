use super::models::{Course, CourseRequest};
use crate::common::ApiError;
use sqlx::SqlitePool;
use tracing::info;

pub struct CoursesService {
    db: SqlitePool,
}

impl CoursesService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    // ============================================================================
    // Course CRUD Operations
    // ============================================================================

    /// Get all courses
    pub async fn get_all(&self) -> Result<Vec<Course>, ApiError> {
        let courses = sqlx::query_as::<_, Course>(
            r#"
            SELECT id, title, description, instructor_id, created_at, updated_at
            FROM courses
            ORDER BY title ASC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(courses)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Course>, ApiError> {
        let course = sqlx::query_as::<_, Course>(
            r#"
            SELECT id, title, description, instructor_id, created_at, updated_at
            FROM courses
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(course)
    }

    pub async fn find_by_title(&self, title: &str) -> Result<Option<Course>, ApiError> {
        let course = sqlx::query_as::<_, Course>(
            r#"
            SELECT id, title, description, instructor_id, created_at, updated_at
            FROM courses
            WHERE title = ? COLLATE NOCASE
            ORDER BY id ASC
            LIMIT 1
            "#,
        )
        .bind(title)
        .fetch_optional(&self.db)
        .await?;

        Ok(course)
    }

    /// Courses a student is enrolled in
    pub async fn get_by_student(&self, student_id: i64) -> Result<Vec<Course>, ApiError> {
        let courses = sqlx::query_as::<_, Course>(
            r#"
            SELECT c.id, c.title, c.description, c.instructor_id, c.created_at, c.updated_at
            FROM courses c
            INNER JOIN course_students cs ON cs.course_id = c.id
            WHERE cs.student_id = ?
            ORDER BY c.title ASC
            "#,
        )
        .bind(student_id)
        .fetch_all(&self.db)
        .await?;

        Ok(courses)
    }

    /// Insert a validated course
    pub async fn create(&self, request: &CourseRequest) -> Result<Course, ApiError> {
        let now = chrono::Utc::now().to_rfc3339();

        let result = sqlx::query(
            r#"
            INSERT INTO courses (title, description, instructor_id, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(request.title.trim())
        .bind(&request.description)
        .bind(request.instructor_id)
        .bind(&now)
        .bind(&now)
        .execute(&self.db)
        .await?;

        let id = result.last_insert_rowid();
        info!(course_id = id, title = %request.title.trim(), "Created course");

        self.fetch(id).await
    }

    /// Update a validated course
    pub async fn update(&self, id: i64, request: &CourseRequest) -> Result<Course, ApiError> {
        let now = chrono::Utc::now().to_rfc3339();

        sqlx::query(
            r#"
            UPDATE courses
            SET title = ?, description = ?, instructor_id = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(request.title.trim())
        .bind(&request.description)
        .bind(request.instructor_id)
        .bind(&now)
        .bind(id)
        .execute(&self.db)
        .await?;

        info!(course_id = id, "Updated course");

        self.fetch(id).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        sqlx::query("DELETE FROM courses WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await?;

        info!(course_id = id, "Deleted course");
        Ok(())
    }

    async fn fetch(&self, id: i64) -> Result<Course, ApiError> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::InternalServer(format!("Course {} vanished after write", id)))
    }
}
