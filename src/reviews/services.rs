use super::models::{Review, ReviewRequest};
use crate::common::ApiError;
use sqlx::SqlitePool;
use tracing::info;

pub struct ReviewsService {
    db: SqlitePool,
}

impl ReviewsService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Review>, ApiError> {
        let review = sqlx::query_as::<_, Review>(
            "SELECT id, course_id, comment, created_at FROM reviews WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(review)
    }

    /// Reviews for a course, oldest first
    pub async fn get_by_course(&self, course_id: i64) -> Result<Vec<Review>, ApiError> {
        let reviews = sqlx::query_as::<_, Review>(
            r#"
            SELECT id, course_id, comment, created_at
            FROM reviews
            WHERE course_id = ?
            ORDER BY id ASC
            "#,
        )
        .bind(course_id)
        .fetch_all(&self.db)
        .await?;

        Ok(reviews)
    }

    pub async fn create(
        &self,
        course_id: i64,
        request: &ReviewRequest,
    ) -> Result<Review, ApiError> {
        let now = chrono::Utc::now().to_rfc3339();

        let result = sqlx::query(
            "INSERT INTO reviews (course_id, comment, created_at) VALUES (?, ?, ?)",
        )
        .bind(course_id)
        .bind(request.comment.trim())
        .bind(&now)
        .execute(&self.db)
        .await?;

        let id = result.last_insert_rowid();
        info!(review_id = id, course_id, "Created review");

        self.fetch(id).await
    }

    pub async fn update(&self, id: i64, request: &ReviewRequest) -> Result<Review, ApiError> {
        sqlx::query("UPDATE reviews SET comment = ? WHERE id = ?")
            .bind(request.comment.trim())
            .bind(id)
            .execute(&self.db)
            .await?;

        info!(review_id = id, "Updated review");

        self.fetch(id).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        sqlx::query("DELETE FROM reviews WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await?;

        info!(review_id = id, "Deleted review");
        Ok(())
    }

    async fn fetch(&self, id: i64) -> Result<Review, ApiError> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::InternalServer(format!("Review {} vanished after write", id)))
    }
}
