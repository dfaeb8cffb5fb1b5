//! Mock backend tests for the HTTP repository.
//!
//! These tests use wiremock to simulate the students REST API and check the
//! request shapes and the response handling without a real server.

use roster_core::{ApiUrl, StudentId, StudentPayload, StudentRepository};
use roster_http::HttpStudentRepository;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper to create a repository pointed at a mock server.
fn mock_repository(server: &MockServer) -> HttpStudentRepository {
    let api = ApiUrl::new(format!("http://127.0.0.1:{}", server.address().port())).unwrap();
    HttpStudentRepository::new(api)
}

// ============================================================================
// Listing
// ============================================================================

#[tokio::test]
async fn test_list_paged_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/students"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                {"id": 1, "name": "Alice", "email": "alice@example.com", "gender": "Female"},
                {"id": 2, "name": "Bob", "email": "bob@example.com", "gender": "Male"}
            ],
            "totalCount": 2,
            "page": 1,
            "pageSize": 10
        })))
        .expect(1)
        .mount(&server)
        .await;

    let repo = mock_repository(&server);
    let result = repo.list_paged().await.unwrap();

    let items = result.items.clone().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].name.as_deref(), Some("Alice"));
    assert_eq!(result.total_count, Some(2));
    assert_eq!(result.page_size, Some(10));
}

#[tokio::test]
async fn test_search_sends_name_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/students"))
        .and(query_param("name", " Bob & Co "))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"id": 2, "name": "Bob", "email": "bob@example.com", "gender": "Male"}],
            "totalCount": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let repo = mock_repository(&server);
    let result = repo.list_paged_by_name(" Bob & Co ").await.unwrap();

    assert_eq!(result.items.unwrap().len(), 1);
    assert_eq!(result.page, None);
}

#[tokio::test]
async fn test_list_all_without_items_is_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/students"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"totalCount": 0})))
        .mount(&server)
        .await;

    let repo = mock_repository(&server);
    assert!(repo.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_find_by_name_extracts_items() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/students"))
        .and(query_param("name", "Cara"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"id": 3, "name": "Cara", "email": "cara@example.com", "gender": "Female"}]
        })))
        .mount(&server)
        .await;

    let repo = mock_repository(&server);
    let students = repo.find_by_name("Cara").await.unwrap();

    assert_eq!(students.len(), 1);
    assert_eq!(students[0].id, Some(StudentId::new(3)));
}

// ============================================================================
// CRUD
// ============================================================================

#[tokio::test]
async fn test_get_by_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/students/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7, "name": "Dan", "email": "dan@example.com", "gender": "Male"
        })))
        .mount(&server)
        .await;

    let repo = mock_repository(&server);
    let student = repo.get(StudentId::new(7)).await.unwrap();

    assert_eq!(student.name.as_deref(), Some("Dan"));
}

#[tokio::test]
async fn test_create_posts_payload_without_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/students"))
        .and(body_json(json!({
            "name": "Alice",
            "email": "alice@example.com",
            "gender": "Female"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 99, "name": "Alice", "email": "alice@example.com", "gender": "Female"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let repo = mock_repository(&server);
    let payload = StudentPayload::new("Alice", "alice@example.com", "Female");
    let created = repo.create(&payload).await.unwrap();

    assert_eq!(created.id, Some(StudentId::new(99)));
}

#[tokio::test]
async fn test_update_returns_optional_message() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/students/10"))
        .and(body_json(json!({
            "name": "Bobby",
            "email": "bob@example.com",
            "gender": "Male"
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"message": "Student was updated successfully."})),
        )
        .mount(&server)
        .await;

    let repo = mock_repository(&server);
    let payload = StudentPayload::new("Bobby", "bob@example.com", "Male");
    let response = repo.update(StudentId::new(10), &payload).await.unwrap();

    assert_eq!(response.message(), Some("Student was updated successfully."));
}

#[tokio::test]
async fn test_delete_with_empty_body() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/students/4"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let repo = mock_repository(&server);
    let response = repo.delete(StudentId::new(4)).await.unwrap();

    assert!(response.as_value().is_null());
    assert_eq!(response.message(), None);
}

#[tokio::test]
async fn test_delete_all_targets_collection_root() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/students"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"message": "3 Students were deleted successfully!"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let repo = mock_repository(&server);
    let response = repo.delete_all().await.unwrap();

    assert_eq!(
        response.message(),
        Some("3 Students were deleted successfully!")
    );
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[tokio::test]
async fn test_error_body_message_is_kept() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/students"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "error": "Conflict",
            "message": "Email already registered"
        })))
        .mount(&server)
        .await;

    let repo = mock_repository(&server);
    let payload = StudentPayload::new("Alice", "alice@example.com", "Female");
    let err = repo.create(&payload).await.unwrap_err();

    assert_eq!(err.status(), Some(409));
    assert_eq!(err.server_message(), Some("Email already registered"));
}

#[tokio::test]
async fn test_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/students/404"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let repo = mock_repository(&server);
    let err = repo.get(StudentId::new(404)).await.unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.server_message(), None);
}

#[tokio::test]
async fn test_non_json_error_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/students"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_string("Internal Server Error")
                .insert_header("content-type", "text/plain"),
        )
        .mount(&server)
        .await;

    let repo = mock_repository(&server);
    let err = repo.list_paged().await.unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn test_malformed_success_body_is_a_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/students/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let repo = mock_repository(&server);
    let err = repo.get(StudentId::new(1)).await.unwrap_err();

    assert!(matches!(err, roster_core::Error::Transport(_)));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_connection_refused() {
    let server = MockServer::start().await;
    let repo = mock_repository(&server);
    drop(server);

    let err = repo.list_paged().await.unwrap_err();
    assert!(matches!(err, roster_core::Error::Transport(_)));
}
