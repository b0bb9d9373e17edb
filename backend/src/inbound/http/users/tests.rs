//! Tests for user registry JSON handlers.

use super::*;
use std::sync::Arc;

use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use rstest::rstest;
use serde_json::{Value, json};

use crate::domain::ErrorCode;
use crate::domain::ports::{MockUserRegistry, UserRegistry};
use crate::inbound::http::configure;
use crate::test_support::fixture_registry;

async fn test_app(
    registry: Arc<dyn UserRegistry>,
) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error> {
    actix_test::init_service(
        App::new()
            .app_data(web::Data::new(HttpState::new(registry)))
            .configure(configure),
    )
    .await
}

fn alice() -> Value {
    json!({ "login": "alice", "name": "Alice", "surname": "A", "birth_year": 1990 })
}

async fn send(
    app: &impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
    request: actix_test::TestRequest,
) -> (StatusCode, Value) {
    let response = actix_test::call_service(app, request.to_request()).await;
    let status = response.status();
    let body = actix_test::read_body(response).await;
    let value = serde_json::from_slice(&body).expect("JSON body");
    (status, value)
}

fn add(body: Value) -> actix_test::TestRequest {
    actix_test::TestRequest::post().uri("/user/add").set_json(body)
}

#[actix_web::test]
async fn add_returns_message_and_record() {
    let app = test_app(Arc::new(fixture_registry())).await;

    let (status, body) = send(&app, add(alice())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], ADDED_MESSAGE);
    assert_eq!(
        body["user"],
        json!({ "login": "alice", "name": "Alice", "surname": "A", "age": 34 })
    );
}

#[actix_web::test]
async fn duplicate_add_is_rejected() {
    let app = test_app(Arc::new(fixture_registry())).await;
    send(&app, add(alice())).await;

    let (status, body) = send(&app, add(alice())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "duplicate_key");
    assert_eq!(body["message"], "a user with this login already exists");
}

#[rstest]
#[case(json!({ "login": "  ", "name": "A", "surname": "B", "birth_year": 1990 }), "empty_login")]
#[case(
    json!({ "login": "x", "name": "A", "surname": "B", "birth_year": i32::MIN }),
    "age_out_of_range"
)]
#[actix_web::test]
async fn invalid_add_payloads_are_rejected(#[case] payload: Value, #[case] detail_code: &str) {
    let app = test_app(Arc::new(fixture_registry())).await;

    let (status, body) = send(&app, add(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["details"]["code"], detail_code);
}

#[rstest]
#[case(json!({ "login": "alice", "name": "Alice" }))]
#[case(json!({ "login": "alice", "name": "Alice", "surname": "A", "birth_year": "1990" }))]
#[actix_web::test]
async fn malformed_bodies_use_error_envelope(#[case] payload: Value) {
    let app = test_app(Arc::new(fixture_registry())).await;

    let (status, body) = send(&app, add(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_request");
    assert!(body["details"]["reason"].is_string());
}

#[actix_web::test]
async fn edit_updates_only_supplied_fields() {
    let app = test_app(Arc::new(fixture_registry())).await;
    send(&app, add(alice())).await;

    let (status, body) = send(
        &app,
        actix_test::TestRequest::put()
            .uri("/user/edit/alice")
            .set_json(json!({ "surname": "B" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], UPDATED_MESSAGE);
    assert_eq!(body["user"]["name"], "Alice");
    assert_eq!(body["user"]["surname"], "B");
    assert_eq!(body["user"]["age"], 34);
}

#[actix_web::test]
async fn edit_birth_year_recomputes_age() {
    let app = test_app(Arc::new(fixture_registry())).await;
    send(&app, add(alice())).await;

    let (_, body) = send(
        &app,
        actix_test::TestRequest::put()
            .uri("/user/edit/alice")
            .set_json(json!({ "birth_year": 2000 })),
    )
    .await;

    assert_eq!(body["user"]["age"], 24);
}

#[rstest]
#[case(actix_test::TestRequest::put().uri("/user/edit/ghost").set_json(json!({ "name": "X" })))]
#[case(actix_test::TestRequest::delete().uri("/user/delete/ghost"))]
#[case(actix_test::TestRequest::get().uri("/user/ghost"))]
#[case(actix_test::TestRequest::get().uri("/user/%20"))]
#[actix_web::test]
async fn unknown_login_is_not_found(#[case] request: actix_test::TestRequest) {
    let app = test_app(Arc::new(fixture_registry())).await;

    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "not_found");
    assert_eq!(body["message"], "user not found");
}

#[actix_web::test]
async fn delete_reports_login_and_removes_record() {
    let app = test_app(Arc::new(fixture_registry())).await;
    send(&app, add(alice())).await;

    let (status, body) = send(
        &app,
        actix_test::TestRequest::delete().uri("/user/delete/alice"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "User alice deleted successfully" }));

    let (status, _) = send(&app, actix_test::TestRequest::get().uri("/user/alice")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn empty_listing_carries_message() {
    let app = test_app(Arc::new(fixture_registry())).await;

    let (status, body) = send(&app, actix_test::TestRequest::get().uri("/user/get-all/json")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": EMPTY_LIST_MESSAGE, "users": [] }));
}

#[actix_web::test]
async fn listing_preserves_insertion_order() {
    let app = test_app(Arc::new(fixture_registry())).await;
    for login in ["zed", "amy", "bob"] {
        send(
            &app,
            add(json!({ "login": login, "name": "N", "surname": "S", "birth_year": 2000 })),
        )
        .await;
    }

    let (_, body) = send(&app, actix_test::TestRequest::get().uri("/user/get-all/json")).await;

    assert!(body.get("message").is_none());
    let logins: Vec<&str> = body["users"]
        .as_array()
        .expect("users array")
        .iter()
        .filter_map(|u| u["login"].as_str())
        .collect();
    assert_eq!(logins, ["zed", "amy", "bob"]);
}

#[rstest]
#[case("add-form")]
#[case("get-all")]
#[actix_web::test]
async fn literal_routes_are_not_treated_as_logins(#[case] segment: &str) {
    let app = test_app(Arc::new(fixture_registry())).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/user/{segment}"))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(actix_web::http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .expect("content type");
    assert!(content_type.starts_with("text/html"));
}

#[actix_web::test]
async fn registry_failure_is_redacted() {
    let mut mock = MockUserRegistry::new();
    mock.expect_get()
        .times(1)
        .returning(|_| Err(Error::internal("user registry lock poisoned")));
    let app = test_app(Arc::new(mock)).await;

    let (status, body) = send(&app, actix_test::TestRequest::get().uri("/user/alice")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let payload: Error = serde_json::from_value(body).expect("error payload");
    assert_eq!(payload.code(), ErrorCode::InternalError);
    assert_eq!(payload.message(), "Internal server error");
}

#[actix_web::test]
async fn add_forwards_validated_input_to_registry() {
    let mut mock = MockUserRegistry::new();
    mock.expect_add()
        .withf(|user| user.login.as_ref() == "alice" && user.birth_year == 1990)
        .times(1)
        .returning(|user| Ok(User::new(user.login, user.name, user.surname, 34)));
    let app = test_app(Arc::new(mock)).await;

    let (status, body) = send(&app, add(alice())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["login"], "alice");
}
