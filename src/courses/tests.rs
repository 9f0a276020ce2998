//! Tests for courses module
//!
//! These tests verify the SQLite-backed course service:
//! - Create and update with an optional instructor
//! - Title lookups used by the uniqueness check
//! - Enrollment joins

#[cfg(test)]
mod tests {
    use super::super::models::CourseRequest;
    use super::super::services::CoursesService;
    use crate::instructors::models::InstructorRequest;
    use crate::instructors::services::InstructorsService;
    use crate::students::models::StudentRequest;
    use crate::students::services::StudentsService;
    use crate::test_support::memory_pool;

    fn course(title: &str, instructor_id: Option<i64>) -> CourseRequest {
        CourseRequest {
            title: title.to_string(),
            description: Some("An introduction".to_string()),
            instructor_id,
        }
    }

    #[tokio::test]
    async fn test_create_and_find_by_title() {
        let service = CoursesService::new(memory_pool().await);

        let created = service.create(&course("  Rust 101 ", None)).await.unwrap();
        assert_eq!(created.title, "Rust 101");
        assert_eq!(created.instructor_id, None);

        let found = service.find_by_title("Rust 101").await.unwrap();
        assert_eq!(found.map(|c| c.id), Some(created.id));
        assert!(service.find_by_title("Go 101").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_by_title_ignores_case() {
        let service = CoursesService::new(memory_pool().await);
        let created = service.create(&course("Rust 101", None)).await.unwrap();

        let found = service.find_by_title("RUST 101").await.unwrap();
        assert_eq!(found.map(|c| c.id), Some(created.id));
    }

    #[tokio::test]
    async fn test_update_assigns_instructor() {
        let pool = memory_pool().await;
        let instructor = InstructorsService::new(pool.clone())
            .create(&InstructorRequest {
                first_name: "Barbara".to_string(),
                last_name: "Liskov".to_string(),
                email: "barbara@example.com".to_string(),
            })
            .await
            .unwrap();

        let service = CoursesService::new(pool);
        let created = service.create(&course("Abstraction", None)).await.unwrap();
        let updated = service
            .update(created.id, &course("Data Abstraction", Some(instructor.id)))
            .await
            .unwrap();

        assert_eq!(updated.title, "Data Abstraction");
        assert_eq!(updated.instructor_id, Some(instructor.id));
    }

    #[tokio::test]
    async fn test_deleting_instructor_unassigns_course() {
        let pool = memory_pool().await;
        let instructors = InstructorsService::new(pool.clone());
        let instructor = instructors
            .create(&InstructorRequest {
                first_name: "Edsger".to_string(),
                last_name: "Dijkstra".to_string(),
                email: "ewd@example.com".to_string(),
            })
            .await
            .unwrap();

        let service = CoursesService::new(pool);
        let created = service
            .create(&course("Structured Programming", Some(instructor.id)))
            .await
            .unwrap();

        instructors.delete(instructor.id).await.unwrap();

        let reloaded = service.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(reloaded.instructor_id, None);
    }

    #[tokio::test]
    async fn test_get_by_student() {
        let pool = memory_pool().await;
        let courses = CoursesService::new(pool.clone());
        let students = StudentsService::new(pool);

        let algebra = courses.create(&course("Algebra", None)).await.unwrap();
        courses.create(&course("Biology", None)).await.unwrap();
        let student = students
            .create(&StudentRequest {
                first_name: "Sam".to_string(),
                last_name: "Student".to_string(),
                email: "sam@example.com".to_string(),
            })
            .await
            .unwrap();

        students.enroll(student.id, algebra.id).await.unwrap();

        let enrolled = courses.get_by_student(student.id).await.unwrap();
        assert_eq!(enrolled.len(), 1);
        assert_eq!(enrolled[0].title, "Algebra");
    }
}
