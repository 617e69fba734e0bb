
use actix_web::{http::StatusCode, test};
use serde_json::{json, Value};
use test_utils::{InMemoryStore, TestApp};

#[actix_web::test]
async fn valid_message_is_stored_with_timestamp() {
    let app = TestApp::spawn();

    let resp = app
        .post_contact(json!({"name": "Karan", "email": "karan@example.com", "message": "Hello"}))
        .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"success": true}));

    let messages = app.store.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].name, "Karan");
    assert_eq!(messages[0].email, "karan@example.com");
    assert!(messages[0].created_at <= chrono::Utc::now());
}

#[actix_web::test]
async fn only_the_first_invalid_field_is_reported() {
    let app = TestApp::spawn();

    let resp = app
        .post_contact(json!({"name": "", "email": "not-an-email", "message": "Hi"}))
        .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"message": "Name is required", "field": "name"}));
    assert!(app.store.messages().is_empty());
}

#[actix_web::test]
async fn invalid_email_is_reported_when_name_is_present() {
    let app = TestApp::spawn();

    let resp = app
        .post_contact(json!({"name": "Karan", "email": "not-an-email", "message": ""}))
        .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["field"], "email");
    assert_eq!(body["message"], "Invalid email address");
}

#[actix_web::test]
async fn missing_field_is_a_field_error() {
    let app = TestApp::spawn();

    let resp = app
        .post_contact(json!({"name": "Karan", "email": "karan@example.com"}))
        .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["field"], "message");
}

#[actix_web::test]
async fn null_name_is_a_field_error() {
    let app = TestApp::spawn();

    let resp = app
        .post_contact(json!({"name": null, "email": "karan@example.com", "message": "Hello"}))
        .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"message": "Name is required", "field": "name"}));
    assert!(app.store.messages().is_empty());
}

#[actix_web::test]
async fn wrongly_typed_email_is_a_field_error() {
    let app = TestApp::spawn();

    let resp = app
        .post_contact(json!({"name": "Karan", "email": 5, "message": "Hello"}))
        .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["field"], "email");
    assert_eq!(body["message"], "Expected string, received number");
}

#[actix_web::test]
async fn malformed_json_is_rejected() {
    let app = TestApp::spawn();

    let req = test::TestRequest::post()
        .uri("/api/contact")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"name\": ");
    let resp = app.send(req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"].as_str().unwrap().starts_with("Invalid request body"));
    assert!(body.get("field").is_none());
    assert!(app.store.messages().is_empty());
}

#[actix_web::test]
async fn non_json_content_type_is_rejected() {
    let app = TestApp::spawn();

    let req = test::TestRequest::post()
        .uri("/api/contact")
        .insert_header(("content-type", "text/plain"))
        .set_payload(r#"{"name": "Karan", "email": "karan@example.com", "message": "Hello"}"#);
    let resp = app.send(req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"].as_str().unwrap().starts_with("Invalid request body"));
    assert!(app.store.messages().is_empty());
}

#[actix_web::test]
async fn store_failure_is_a_server_error() {
    let app = TestApp::with_store(InMemoryStore::unavailable());

    let resp = app
        .post_contact(json!({"name": "Karan", "email": "karan@example.com", "message": "Hello"}))
        .await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[actix_web::test]
async fn contact_path_only_accepts_post() {
    let app = TestApp::spawn();

    let resp = app.send(test::TestRequest::get().uri("/api/contact")).await;
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}
