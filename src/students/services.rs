use super::models::{Student, StudentRequest};
use crate::common::{safe_email_log, ApiError};
use sqlx::SqlitePool;
use tracing::info;

pub struct StudentsService {
    db: SqlitePool,
}

impl StudentsService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    // ============================================================================
    // Student CRUD Operations
    // ============================================================================

    pub async fn get_all(&self) -> Result<Vec<Student>, ApiError> {
        let students = sqlx::query_as::<_, Student>(
            r#"
            SELECT id, first_name, last_name, email, created_at, updated_at
            FROM students
            ORDER BY last_name ASC, first_name ASC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(students)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Student>, ApiError> {
        let student = sqlx::query_as::<_, Student>(
            r#"
            SELECT id, first_name, last_name, email, created_at, updated_at
            FROM students
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(student)
    }

    /// Students enrolled in a course
    pub async fn get_by_course(&self, course_id: i64) -> Result<Vec<Student>, ApiError> {
        let students = sqlx::query_as::<_, Student>(
            r#"
            SELECT s.id, s.first_name, s.last_name, s.email, s.created_at, s.updated_at
            FROM students s
            INNER JOIN course_students cs ON cs.student_id = s.id
            WHERE cs.course_id = ?
            ORDER BY s.last_name ASC, s.first_name ASC
            "#,
        )
        .bind(course_id)
        .fetch_all(&self.db)
        .await?;

        Ok(students)
    }

    pub async fn create(&self, request: &StudentRequest) -> Result<Student, ApiError> {
        let now = chrono::Utc::now().to_rfc3339();

        let result = sqlx::query(
            r#"
            INSERT INTO students (first_name, last_name, email, created_at, updated_at)
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
            student_id = id,
            email = %safe_email_log(&request.email),
            "Created student"
        );

        self.fetch(id).await
    }

    pub async fn update(&self, id: i64, request: &StudentRequest) -> Result<Student, ApiError> {
        let now = chrono::Utc::now().to_rfc3339();

        sqlx::query(
            r#"
            UPDATE students
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

        info!(student_id = id, "Updated student");

        self.fetch(id).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await?;

        info!(student_id = id, "Deleted student");
        Ok(())
    }

    // ============================================================================
    // Enrollment
    // ============================================================================

    /// Returns `false` when the student was already enrolled.
    pub async fn enroll(&self, student_id: i64, course_id: i64) -> Result<bool, ApiError> {
        let now = chrono::Utc::now().to_rfc3339();

        let result = sqlx::query(
            r#"
            INSERT OR IGNORE INTO course_students (course_id, student_id, enrolled_at)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(course_id)
        .bind(student_id)
        .bind(&now)
        .execute(&self.db)
        .await?;

        let enrolled = result.rows_affected() > 0;
        if enrolled {
            info!(student_id, course_id, "Student enrolled");
        }
        Ok(enrolled)
    }

    /// Returns `false` when the student was not enrolled.
    pub async fn withdraw(&self, student_id: i64, course_id: i64) -> Result<bool, ApiError> {
        let result =
            sqlx::query("DELETE FROM course_students WHERE course_id = ? AND student_id = ?")
                .bind(course_id)
                .bind(student_id)
                .execute(&self.db)
                .await?;

        let withdrawn = result.rows_affected() > 0;
        if withdrawn {
            info!(student_id, course_id, "Student withdrawn");
        }
        Ok(withdrawn)
    }

    async fn fetch(&self, id: i64) -> Result<Student, ApiError> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::InternalServer(format!("Student {} vanished after write", id)))
    }
}
