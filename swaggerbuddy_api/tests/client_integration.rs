use std::sync::{Arc, Mutex};
use std::time::Duration;

use swaggerbuddy_api::types::{CreateProjectRequest, SwaggerFile};
use swaggerbuddy_api::{Client, Error};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[tokio::test]
async fn get_projects_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("projects.json");

    Mock::given(method("GET"))
        .and(path("/v1/project/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let projects = client.get_projects().await.unwrap();
    assert_eq!(projects.len(), 3);
    assert_eq!(projects[0].id, "3f1c9a2e-pets");
    assert_eq!(projects[1].name, "Billing API");
    assert!(projects[2].created_at.is_none());
}

#[tokio::test]
async fn get_project_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("project.json");

    Mock::given(method("GET"))
        .and(path("/v1/project/3f1c9a2e-pets"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let project = client.get_project("3f1c9a2e-pets").await.unwrap();
    assert_eq!(project.name, "Petstore");
    assert_eq!(project.sections.len(), 3);
    assert_eq!(project.endpoint_count(), 5);
}

#[tokio::test]
async fn get_project_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/project/missing"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_string(r#"{"message":"Project missing not found","status_code":404,"data":null}"#),
        )
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let err = client.get_project("missing").await.unwrap_err();
    assert!(matches!(err, Error::NotFound));
    assert_eq!(err.to_string(), "Resource not found");
}

#[tokio::test]
async fn get_projects_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/project/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let err = client.get_projects().await.unwrap_err();
    assert_eq!(err.to_string(), "Internal server error");
}

#[tokio::test]
async fn unexpected_status_surfaces_backend_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/project/"))
        .respond_with(ResponseTemplate::new(422).set_body_string(load_fixture("error_422.json")))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let request = CreateProjectRequest::new("Broken", "https://api.example.com")
        .with_url("https://api.example.com/swagger.json");
    let err = client.create_project(&request).await.unwrap_err();
    assert_eq!(err.to_string(), "Could not parse the Swagger document");
    assert_eq!(err.status(), Some(422));
}

#[tokio::test]
async fn get_projects_malformed_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/project/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let err = client.get_projects().await.unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    // Port 1 is never served in the test environment.
    let client = Client::with_base_url("http://127.0.0.1:1").unwrap();
    let err = client.get_projects().await.unwrap_err();
    assert!(matches!(err, Error::Network));
    assert!(err.to_string().starts_with("Network error"));
}

#[tokio::test]
async fn create_project_from_url_sends_form_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/project/"))
        .and(body_string_contains("name=\"project_name\""))
        .and(body_string_contains("Empty API"))
        .and(body_string_contains("name=\"swagger_url\""))
        .and(body_string_contains("https://empty.example.com/openapi.yaml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("project_minimal.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let request = CreateProjectRequest::new("Empty API", "https://empty.example.com")
        .with_url("https://empty.example.com/openapi.yaml");
    let project = client.create_project(&request).await.unwrap();
    assert_eq!(project.id, "new-project-1");
    assert!(project.sections.is_empty());
}

#[tokio::test]
async fn create_project_with_progress_reports_upload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/project/"))
        .and(body_string_contains("name=\"swagger_file\"; filename=\"openapi.json\""))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("project_minimal.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let document = format!("{{\"openapi\":\"3.0.0\",\"padding\":\"{}\"}}", "x".repeat(200 * 1024));
    let request = CreateProjectRequest::new("Empty API", "https://empty.example.com")
        .with_file(SwaggerFile::new("openapi.json", "application/json", document.into_bytes()));

    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let project = client
        .create_project_with_progress(&request, move |p| sink.lock().unwrap().push(p))
        .await
        .unwrap();
    assert_eq!(project.name, "Empty API");

    let seen = seen.lock().unwrap();
    assert!(seen.len() > 1, "expected several progress reports, got {:?}", seen);
    assert!(seen.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(*seen.last().unwrap(), 100);
}

#[tokio::test]
async fn delete_project_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/project/3f1c9a2e-pets"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("delete_ok.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    assert!(client.delete_project("3f1c9a2e-pets").await.is_ok());
}

#[tokio::test]
async fn delete_project_rejected_in_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/project/locked"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("delete_rejected.json")))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let err = client.delete_project("locked").await.unwrap_err();
    assert!(matches!(err, Error::Rejected(_)));
    assert_eq!(err.to_string(), "Project is locked and cannot be deleted");
}

#[tokio::test]
async fn delete_project_rejected_without_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/project/quiet"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"message":"","status_code":400,"data":null}"#),
        )
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let err = client.delete_project("quiet").await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to delete project");
}

#[tokio::test]
async fn delete_project_without_envelope_is_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/project/gone"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri()).unwrap();
    let err = client.delete_project("gone").await.unwrap_err();
    assert!(matches!(err, Error::Rejected(_)));
    assert_eq!(err.to_string(), "Failed to delete project");
}

#[tokio::test]
async fn slow_backend_times_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/project/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(load_fixture("projects.json"))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&mock_server)
        .await;

    let client = Client::with_timeout(&mock_server.uri(), Duration::from_millis(50)).unwrap();
    let err = client.get_projects().await.unwrap_err();
    assert!(matches!(err, Error::Timeout));
    assert_eq!(err.to_string(), "Request timeout");
    assert_eq!(err.status(), None);
}
