//! End-to-end tests through the router
//!
//! Requests go through the same layers as in production, against an
//! in-memory database:
//! - Outcome to status mapping (400 for failures, 200 for missing subjects)
//! - Role header and locale handling
//! - Enrollment and review flows

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::build_router;
    use crate::test_support::{memory_pool, test_state};

    async fn app() -> Router {
        build_router(test_state(memory_pool().await), &[])
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        role: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        send_with_locale(app, method, uri, role, body, None).await
    }

    async fn send_with_locale(
        app: &Router,
        method: Method,
        uri: &str,
        role: Option<&str>,
        body: Option<Value>,
        language: Option<&str>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json");
        if let Some(role) = role {
            builder = builder.header("x-role", role);
        }
        if let Some(language) = language {
            builder = builder.header("accept-language", language);
        }

        let body = match body {
            Some(json) => Body::from(serde_json::to_vec(&json).unwrap()),
            None => Body::empty(),
        };

        let response = app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn create_course(app: &Router, title: &str) -> i64 {
        let (status, body) = send(
            app,
            Method::POST,
            "/api/courses",
            Some("ADMIN"),
            Some(json!({ "title": title })),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "{}", body);
        body["id"].as_i64().unwrap()
    }

    async fn create_student(app: &Router, email: &str) -> i64 {
        let (status, body) = send(
            app,
            Method::POST,
            "/api/students",
            Some("ADMIN"),
            Some(json!({ "first_name": "Sam", "last_name": "Student", "email": email })),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "{}", body);
        body["id"].as_i64().unwrap()
    }

    // ========================================================================
    // Basics
    // ========================================================================

    #[tokio::test]
    async fn test_health() {
        let app = app().await;
        let (status, body) = send(&app, Method::GET, "/api/health", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let app = app().await;
        let (status, body) = send(&app, Method::GET, "/api/departments", None, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");
    }

    // ========================================================================
    // Outcome mapping
    // ========================================================================

    #[tokio::test]
    async fn test_missing_course_is_200_with_message() {
        let app = app().await;

        let (status, body) = send(&app, Method::GET, "/api/courses/999", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "Course with id=999 not found." }));

        let (status, body) = send(
            &app,
            Method::PUT,
            "/api/courses/999",
            Some("ADMIN"),
            Some(json!({ "title": "x" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Course with id=999 not found.");
    }

    #[tokio::test]
    async fn test_blank_title_is_400() {
        let app = app().await;
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/courses",
            Some("ADMIN"),
            Some(json!({ "title": "" })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_FAILED");
        assert_eq!(body["error"], "Validation failed");
        assert_eq!(
            body["errors"],
            json!([{ "code": "TITLE_EMPTY", "message": "Title must not be empty." }])
        );
    }

    #[tokio::test]
    async fn test_failures_keep_order() {
        let app = app().await;
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/instructors",
            Some("ADMIN"),
            Some(json!({ "first_name": "", "last_name": "", "email": "nope" })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let codes: Vec<&str> = body["errors"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["code"].as_str().unwrap())
            .collect();
        assert_eq!(codes, vec!["FIRST_NAME_EMPTY", "LAST_NAME_EMPTY", "EMAIL_INVALID"]);
    }

    #[tokio::test]
    async fn test_rejected_action_is_400() {
        let app = app().await;
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/courses",
            Some("STUDENT"),
            Some(json!({ "title": "Rust" })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "ACTION_INVALID");
        assert_eq!(body["error"], "Action CREATE is not valid.");
        assert_eq!(body["errors"][0]["code"], "ACTION_INVALID");
    }

    #[tokio::test]
    async fn test_absent_role_uses_student_policy() {
        let app = app().await;
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/courses",
            None,
            Some(json!({ "title": "Rust" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "ACTION_INVALID");

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/courses",
            Some("ROLE_NOT_EXIST"),
            Some(json!({ "title": "Rust" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "ACTION_INVALID");
    }

    #[tokio::test]
    async fn test_spanish_messages() {
        let app = app().await;
        let (status, body) = send_with_locale(
            &app,
            Method::POST,
            "/api/courses",
            Some("ADMIN"),
            Some(json!({ "title": " " })),
            Some("es-ES,es;q=0.9"),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "La validación falló");
        assert_eq!(body["errors"][0]["message"], "El título no debe estar vacío.");

        let (status, body) = send_with_locale(
            &app,
            Method::GET,
            "/api/courses/5",
            None,
            None,
            Some("es"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Curso con id=5 no encontrado.");
    }

    // ========================================================================
    // Flows
    // ========================================================================

    #[tokio::test]
    async fn test_instructor_lifecycle() {
        let app = app().await;

        let (status, created) = send(
            &app,
            Method::POST,
            "/api/instructors",
            Some("ADMIN"),
            Some(json!({
                "first_name": "Ada",
                "last_name": "Lovelace",
                "email": "ada@example.com"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let id = created["id"].as_i64().unwrap();

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/instructors",
            Some("INSTRUCTOR"),
            Some(json!({
                "first_name": "Other",
                "last_name": "Person",
                "email": "ada@example.com"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"][0]["code"], "EMAIL_ALREADY_EXISTS");

        // Keeping one's own email is not a conflict.
        let (status, body) = send(
            &app,
            Method::PUT,
            &format!("/api/instructors/{}", id),
            Some("ADMIN"),
            Some(json!({ "first_name": "Ada", "last_name": "King", "email": "ada@example.com" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["last_name"], "King");

        let (status, body) = send(
            &app,
            Method::DELETE,
            &format!("/api/instructors/{}", id),
            Some("INSTRUCTOR"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Action DELETE is not valid.");

        let (status, _) = send(
            &app,
            Method::DELETE,
            &format!("/api/instructors/{}", id),
            Some("ADMIN"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(
            &app,
            Method::GET,
            &format!("/api/instructors/{}", id),
            None,
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], format!("Instructor with id={} not found.", id));
    }

    #[tokio::test]
    async fn test_duplicate_email_in_other_case() {
        let app = app().await;
        let (status, _) = send(
            &app,
            Method::POST,
            "/api/instructors",
            Some("ADMIN"),
            Some(json!({ "first_name": "Ada", "last_name": "Lovelace", "email": "dup@x.com" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/instructors",
            Some("ADMIN"),
            Some(json!({ "first_name": "Alan", "last_name": "Turing", "email": "DUP@X.COM" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"][0]["code"], "EMAIL_ALREADY_EXISTS");

        let (_, instructors) = send(&app, Method::GET, "/api/instructors", None, None).await;
        assert_eq!(instructors.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_course_requires_existing_instructor() {
        let app = app().await;
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/courses",
            Some("ADMIN"),
            Some(json!({ "title": "Rust", "instructor_id": 77 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Instructor with id=77 not found.");

        let (_, courses) = send(&app, Method::GET, "/api/courses", None, None).await;
        assert_eq!(courses, json!([]));
    }

    #[tokio::test]
    async fn test_duplicate_course_title() {
        let app = app().await;
        create_course(&app, "Rust").await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/courses",
            Some("INSTRUCTOR"),
            Some(json!({ "title": "Rust" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"][0]["message"], "Title already exists.");
    }

    #[tokio::test]
    async fn test_enrollment_flow() {
        let app = app().await;
        let course_id = create_course(&app, "Rust").await;
        let student_id = create_student(&app, "sam@example.com").await;
        let enroll_uri = format!("/api/students/{}/courses/{}", student_id, course_id);

        let (status, body) = send(&app, Method::POST, &enroll_uri, Some("STUDENT"), None).await;
        assert_eq!(status, StatusCode::OK, "{}", body);
        assert_eq!(body["message"], "Student enrolled successfully");

        let (status, body) = send(&app, Method::POST, &enroll_uri, Some("STUDENT"), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "BAD_REQUEST");

        let (_, students) = send(
            &app,
            Method::GET,
            &format!("/api/courses/{}/students", course_id),
            None,
            None,
        )
        .await;
        assert_eq!(students.as_array().unwrap().len(), 1);

        let (_, courses) = send(
            &app,
            Method::GET,
            &format!("/api/students/{}/courses", student_id),
            None,
            None,
        )
        .await;
        assert_eq!(courses[0]["title"], "Rust");

        let (status, _) = send(&app, Method::DELETE, &enroll_uri, Some("INSTRUCTOR"), None).await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = send(&app, Method::DELETE, &enroll_uri, Some("INSTRUCTOR"), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_enrollment_missing_subjects() {
        let app = app().await;
        let student_id = create_student(&app, "sam@example.com").await;

        let (status, body) = send(
            &app,
            Method::POST,
            &format!("/api/students/{}/courses/42", student_id),
            Some("ADMIN"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Course with id=42 not found.");

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/students/9/courses/42",
            Some("ADMIN"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Student with id=9 not found.");
    }

    #[tokio::test]
    async fn test_review_flow() {
        let app = app().await;
        let course_id = create_course(&app, "Rust").await;
        let reviews_uri = format!("/api/courses/{}/reviews", course_id);

        let (status, review) = send(
            &app,
            Method::POST,
            &reviews_uri,
            Some("STUDENT"),
            Some(json!({ "comment": "Great course" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "{}", review);
        assert_eq!(review["course_id"], course_id);

        let (status, body) = send(
            &app,
            Method::POST,
            &reviews_uri,
            Some("STUDENT"),
            Some(json!({ "comment": "" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"][0]["code"], "COMMENT_EMPTY");

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/courses/404/reviews",
            Some("STUDENT"),
            Some(json!({ "comment": "Lost" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Course with id=404 not found.");

        let review_uri = format!("/api/reviews/{}", review["id"].as_i64().unwrap());
        let (status, body) = send(&app, Method::DELETE, &review_uri, Some("STUDENT"), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "ACTION_INVALID");

        let (status, _) = send(&app, Method::DELETE, &review_uri, Some("ADMIN"), None).await;
        assert_eq!(status, StatusCode::OK);

        let (_, reviews) = send(&app, Method::GET, &reviews_uri, None, None).await;
        assert_eq!(reviews, json!([]));
    }
}
