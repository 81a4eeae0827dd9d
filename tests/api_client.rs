use teachdeck::api::{ApiClient, ApiError, Course, Enrollment, Student};
use teachdeck::config::ApiConfig;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ApiClient {
    let config = ApiConfig::new(
        Some("test-api-key".to_string()),
        Some(server.uri()),
    )
    .expect("valid test config");
    ApiClient::new(config)
}

fn students_body() -> serde_json::Value {
    serde_json::json!({
        "users": [
            { "id": 1, "name": "John Doe", "email": "john@example.com" },
            { "id": 2, "name": "Jane Smith", "email": "jane@example.com" }
        ]
    })
}

fn courses_body() -> serde_json::Value {
    serde_json::json!({
        "courses": [
            {
                "id": "1",
                "name": "React Basics",
                "image_url": "https://example.com/react.jpg",
                "heading": "Learn React",
                "is_published": true
            },
            {
                "id": "2",
                "name": "Advanced TypeScript",
                "image_url": "https://example.com/typescript.jpg",
                "heading": "Master TypeScript",
                "is_published": true,
                "description": "Generics and beyond"
            }
        ]
    })
}

#[tokio::test]
async fn every_request_carries_api_key_and_accept_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .and(header("apikey", "test-api-key"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(students_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.fetch_students().await.expect("students fetch");
}

#[tokio::test]
async fn success_body_is_returned_unmodified() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(students_body()))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client.fetch_students().await.expect("students fetch");
    assert_eq!(
        response.users,
        vec![
            Student {
                id: 1,
                name: "John Doe".to_string(),
                email: "john@example.com".to_string(),
            },
            Student {
                id: 2,
                name: "Jane Smith".to_string(),
                email: "jane@example.com".to_string(),
            },
        ]
    );
}

#[tokio::test]
async fn courses_roundtrip_includes_optional_description() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/courses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(courses_body()))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client.fetch_courses().await.expect("courses fetch");
    assert_eq!(response.courses.len(), 2);
    assert_eq!(
        response.courses[0],
        Course {
            id: "1".to_string(),
            name: "React Basics".to_string(),
            image_url: "https://example.com/react.jpg".to_string(),
            heading: "Learn React".to_string(),
            is_published: true,
            description: None,
        }
    );
    assert_eq!(
        response.courses[1].description.as_deref(),
        Some("Generics and beyond")
    );
}

#[tokio::test]
async fn enrollments_path_interpolates_course_id_as_given() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/courses/abc-123/enrollments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "enrollments": [
                { "user_id": 1, "percent_complete": 75 },
                { "user_id": 2, "percent_complete": 100 }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client
        .fetch_students_in_course("abc-123")
        .await
        .expect("enrollments fetch");
    assert_eq!(
        response.enrollments,
        vec![
            Enrollment {
                user_id: 1,
                percent_complete: 75,
            },
            Enrollment {
                user_id: 2,
                percent_complete: 100,
            },
        ]
    );
}

#[tokio::test]
async fn non_2xx_students_fails_with_fixed_message() {
    for status in [404u16, 500] {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(status).set_body_string("irrelevant detail"))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch_students().await.unwrap_err();
        assert!(matches!(err, ApiError::Endpoint { .. }));
        assert_eq!(err.to_string(), "Failed to fetch students");
    }
}

#[tokio::test]
async fn non_2xx_courses_fails_with_fixed_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/courses"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_courses().await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to fetch courses");
}

#[tokio::test]
async fn non_2xx_enrollments_fails_with_fixed_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/courses/9/enrollments"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch_students_in_course("9")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Failed to fetch course enrollments");
}

#[tokio::test]
async fn malformed_body_on_2xx_is_a_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/courses"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/json")
                .set_body_string("not json"),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_courses().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
    assert_ne!(err.to_string(), "Failed to fetch courses");
}
