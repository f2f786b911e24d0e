//! Integration tests for the course backend client

use coursedesk_core::{
    ApiError, AuthFailure, AuthGateway, CatalogAction, Course, CourseApi, CourseId, CourseService,
    LoginRequest, MemorySessionStore, RegisterRequest, StudentId,
};
use coursedesk_http::{ClientError, CourseClient};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_client_builder() {
    let client = CourseClient::builder()
        .base_url("http://localhost:5000/")
        .build();

    assert!(client.is_ok());
    let client = client.unwrap();
    assert_eq!(client.base_url(), "http://localhost:5000");
}

#[tokio::test]
async fn test_client_builder_requires_base_url() {
    let result = CourseClient::builder().build();
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn test_login_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"username": "abc12", "password": "Abcdef1!"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Login successful",
            "student": {"id": 3, "username": "abc12", "email": "a@b.com"}
        })))
        .mount(&mock_server)
        .await;

    let client = CourseClient::new(mock_server.uri()).unwrap();
    let response = client
        .login(&LoginRequest {
            username: "abc12".into(),
            password: "Abcdef1!".into(),
        })
        .await
        .unwrap();

    assert!(response.success);
    let student = response.student.unwrap();
    assert_eq!(student.id, StudentId::new("3"));
    assert_eq!(student.email(), Some("a@b.com"));
}

#[tokio::test]
async fn test_business_error_with_4xx_is_an_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "success": false,
            "message": "Invalid username or password"
        })))
        .mount(&mock_server)
        .await;

    let client = CourseClient::new(mock_server.uri()).unwrap();
    let gateway = AuthGateway::new(client, MemorySessionStore::new());

    let err = gateway.login("abc12", "wrong").await.unwrap_err();
    assert!(matches!(err, AuthFailure::Rejected(_)));
    assert_eq!(err.to_string(), "Invalid username or password");
    assert_eq!(gateway.current_student_id(), None);
}

#[tokio::test]
async fn test_register_sends_camel_case_confirmation() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/register"))
        .and(body_json(json!({
            "username": "abc12",
            "password": "Abcdef1!",
            "confirmPassword": "Abcdef1!",
            "email": "a@b.com"
        })))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "success": false,
            "message": "Username already taken"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = CourseClient::new(mock_server.uri()).unwrap();
    let response = client
        .register(&RegisterRequest {
            username: "abc12".into(),
            password: "Abcdef1!".into(),
            confirm_password: "Abcdef1!".into(),
            email: "a@b.com".into(),
        })
        .await
        .unwrap();

    assert!(!response.success);
    assert_eq!(response.message.as_deref(), Some("Username already taken"));
}

#[tokio::test]
async fn test_course_lists() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/courses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 5, "name": "Compilers", "instructor": "Dr. Ada"},
            {"id": 7, "name": "Databases"}
        ])))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/student_courses/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 7, "name": "Databases"}
        ])))
        .mount(&mock_server)
        .await;

    let client = CourseClient::new(mock_server.uri()).unwrap();

    let catalog = client.courses().await.unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog[0].instructor().as_deref(), Some("Dr. Ada"));

    let enrolled = client.student_courses(&StudentId::new("3")).await.unwrap();
    assert_eq!(enrolled[0].id, CourseId::Number(7));
}

#[tokio::test]
async fn test_unknown_student_is_an_error_for_lists() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/student_courses/99"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "success": false,
            "message": "Student not found"
        })))
        .mount(&mock_server)
        .await;

    let client = CourseClient::new(mock_server.uri()).unwrap();

    let result = client.student_courses(&StudentId::new("99")).await;
    assert!(matches!(result, Err(ClientError::NotFound(ref m)) if m == "Student not found"));

    let api_err = CourseApi::student_courses(&client, &StudentId::new("99"))
        .await
        .unwrap_err();
    assert_eq!(
        api_err,
        ApiError::Status {
            status: 404,
            message: "Student not found".into()
        }
    );
}

#[tokio::test]
async fn test_enroll_posts_course_unchanged() {
    let mock_server = MockServer::start().await;
    let course_json = json!({"id": 5, "name": "Compilers", "credits": 4});

    Mock::given(method("POST"))
        .and(path("/enroll/3"))
        .and(body_json(course_json.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Course enrolled successfully"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = CourseClient::new(mock_server.uri()).unwrap();
    let service = CourseService::new(client);
    let course: Course = serde_json::from_value(course_json).unwrap();

    let action = service.enroll(Some(&StudentId::new("3")), &course).await;
    assert_eq!(action, CatalogAction::Enrolled(course));
}

#[tokio::test]
async fn test_drop_rejection_and_server_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/drop/3"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "success": false,
            "message": "Course not found in enrollment"
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/drop/4"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = CourseClient::new(mock_server.uri()).unwrap();
    let service = CourseService::new(client);
    let course = Course::new(5);

    assert_eq!(
        service.drop_course(Some(&StudentId::new("3")), &course).await,
        CatalogAction::ActionFailed {
            course_id: CourseId::Number(5),
            message: "Course not found in enrollment".into(),
        }
    );
    assert_eq!(
        service.drop_course(Some(&StudentId::new("4")), &course).await,
        CatalogAction::ActionFailed {
            course_id: CourseId::Number(5),
            message: "Could not drop course.".into(),
        }
    );
}

#[tokio::test]
async fn test_error_handling() {
    // Nothing listens on this port
    let client = CourseClient::new("http://127.0.0.1:9").unwrap();

    let result = client.courses().await;
    assert!(matches!(result, Err(ClientError::Request(_))));

    let gateway = AuthGateway::new(client, MemorySessionStore::new());
    let err = gateway.login("abc12", "Abcdef1!").await.unwrap_err();
    assert_eq!(err.to_string(), "Server error. Please try again.");
}

#[tokio::test]
async fn test_malformed_success_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/courses"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/enroll/3"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = CourseClient::new(mock_server.uri()).unwrap();
    assert!(client.courses().await.is_err());

    let result = client.enroll(&StudentId::new("3"), &Course::new(5)).await;
    assert!(matches!(result, Err(ClientError::Serialization(_))));
}
