use super::models::{Instructor, InstructorRequest};
use crate::common::{safe_email_log, ApiError};
use sqlx::SqlitePool;
use tracing::info;

pub struct InstructorsService {
    db: SqlitePool,
}

impl InstructorsService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Get all instructors
    pub async fn get_all(&self) -> Result<Vec<Instructor>, ApiError> {
        let instructors = sqlx::query_as::<_, Instructor>(
            r#"
            SELECT id, first_name, last_name, email, created_at, updated_at
            FROM instructors
            ORDER BY last_name ASC, first_name ASC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(instructors)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Instructor>, ApiError> {
        let instructor = sqlx::query_as::<_, Instructor>(
            r#"
            SELECT id, first_name, last_name, email, created_at, updated_at
            FROM instructors
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(instructor)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Instructor>, ApiError> {
        let instructor = sqlx::query_as::<_, Instructor>(
            r#"
            SELECT id, first_name, last_name, email, created_at, updated_at
            FROM instructors
            WHERE email = ? COLLATE NOCASE
            ORDER BY id ASC
            LIMIT 1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.db)
        .await?;

        Ok(instructor)
    }

    /// Insert a validated instructor
    pub async fn create(&self, request: &InstructorRequest) -> Result<Instructor, ApiError> {
        let now = chrono::Utc::now().to_rfc3339();

        let result = sqlx::query(
            r#"
            INSERT INTO instructors (first_name, last_name, email, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(request.first_name.trim())
        .bind(request.last_name.trim())
        .bind(request.email.trim())
        .bind(&now)
        .bind(&now)
        .execute(&self.db)
        .await?;

        let id = result.last_insert_rowid();
        info!(
            instructor_id = id,
            email = %safe_email_log(&request.email),
            "Created instructor"
        );

        self.fetch(id).await
    }

    /// Update a validated instructor
    pub async fn update(
        &self,
        id: i64,
        request: &InstructorRequest,
    ) -> Result<Instructor, ApiError> {
        let now = chrono::Utc::now().to_rfc3339();

        sqlx::query(
            r#"
            UPDATE instructors
            SET first_name = ?, last_name = ?, email = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(request.first_name.trim())
        .bind(request.last_name.trim())
        .bind(request.email.trim())
        .bind(&now)
        .bind(id)
        .execute(&self.db)
        .await?;

        info!(instructor_id = id, "Updated instructor");

        self.fetch(id).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        sqlx::query("DELETE FROM instructors WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await?;

        info!(instructor_id = id, "Deleted instructor");
        Ok(())
    }

    async fn fetch(&self, id: i64) -> Result<Instructor, ApiError> {
        self.find_by_id(id).await?.ok_or_else(|| {
            ApiError::InternalServer(format!("Instructor {} vanished after write", id))
        })
    }
}
