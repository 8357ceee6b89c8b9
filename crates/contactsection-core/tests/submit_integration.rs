//! Integration tests for contact form submission
//!
//! Drives `ContactClient` against a local wiremock server and checks the
//! form state after each outcome.

use contactsection_core::{
    contact_endpoint, ContactClient, ContactError, ContactForm, FormField, FormState,
    SubmissionStatus, CONTACT_PATH,
};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn filled_form() -> ContactForm {
    let mut form = ContactForm::new();
    form.update(FormField::Name, "Grace Hopper");
    form.update(FormField::Email, "grace@example.com");
    form.update(FormField::Message, "Found a moth in relay 70.");
    form
}

fn client_for(server: &MockServer) -> ContactClient {
    ContactClient::new(contact_endpoint(&server.uri()).unwrap())
}

/// An address nothing is listening on
fn dead_endpoint() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_submit_posts_json_once() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(CONTACT_PATH))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({
            "name": "Grace Hopper",
            "email": "grace@example.com",
            "message": "Found a moth in relay 70.",
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut form = filled_form();

    let status = client.submit(&mut form).await.unwrap();
    assert_eq!(status, SubmissionStatus::Success);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let sent: FormState = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(
        sent,
        FormState::new("Grace Hopper", "grace@example.com", "Found a moth in relay 70.")
    );
}

#[tokio::test]
async fn test_success_clears_fields() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(CONTACT_PATH))
        .respond_with(ResponseTemplate::new(201).set_body_string("{\"ok\":true}"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut form = filled_form();
    client.submit(&mut form).await.unwrap();

    assert_eq!(form.status(), SubmissionStatus::Success);
    assert!(form.fields().is_empty());
    assert!(!form.is_submitting());
    assert!(form.status().message().is_some());
}

#[tokio::test]
async fn test_error_response_keeps_fields() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(CONTACT_PATH))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut form = filled_form();
    let status = client.submit(&mut form).await.unwrap();

    assert_eq!(status, SubmissionStatus::Error);
    assert_eq!(form.fields(), filled_form().fields());
    assert!(!form.is_submitting());
}

#[tokio::test]
async fn test_send_reports_rejected_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(CONTACT_PATH))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let payload = filled_form().fields().clone();
    let err = client.send(&payload).await.unwrap_err();
    assert!(matches!(err, ContactError::Rejected(404)));
}

#[tokio::test]
async fn test_not_modified_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(CONTACT_PATH))
        .respond_with(ResponseTemplate::new(304))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut form = filled_form();
    let status = client.submit(&mut form).await.unwrap();

    assert_eq!(status, SubmissionStatus::Error);
    assert_eq!(form.fields(), filled_form().fields());
}

#[tokio::test]
async fn test_network_error_keeps_fields() {
    let client = ContactClient::new(contact_endpoint(&dead_endpoint()).unwrap());
    let mut form = filled_form();

    let payload = form.begin_submit().unwrap();
    assert!(form.is_submitting());

    let outcome = client.send(&payload).await;
    assert!(matches!(outcome, Err(ContactError::Http(_))));

    form.finish(&outcome);
    assert_eq!(form.status(), SubmissionStatus::Error);
    assert_eq!(form.field(FormField::Email), "grace@example.com");
    assert!(!form.is_submitting());
}

#[tokio::test]
async fn test_incomplete_form_sends_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut form = filled_form();
    form.update(FormField::Message, "");

    let err = client.submit(&mut form).await.unwrap_err();
    assert!(matches!(err, ContactError::MissingField(FormField::Message)));
    assert_eq!(form.status(), SubmissionStatus::None);
    assert!(!form.is_submitting());
}

#[tokio::test]
async fn test_submit_control_disabled_only_in_flight() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(CONTACT_PATH))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut form = filled_form();
    assert!(!form.is_submitting());

    let payload = form.begin_submit().unwrap();
    assert!(form.is_submitting());
    // A second click while in flight is refused
    assert!(matches!(form.begin_submit(), Err(ContactError::AlreadySubmitting)));

    let outcome = client.send(&payload).await;
    form.finish(&outcome);
    assert!(!form.is_submitting());

    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}
