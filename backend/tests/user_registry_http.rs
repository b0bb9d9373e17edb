//! End-to-end checks of the public router with a fixed-year registry.

use std::sync::Arc;

use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use user_registry::Trace;
use user_registry::domain::TRACE_ID_HEADER;
use user_registry::inbound::http::configure;
use user_registry::inbound::http::state::HttpState;
use user_registry::test_support::fixture_registry;

#[fixture]
fn state() -> web::Data<HttpState> {
    web::Data::new(HttpState::new(Arc::new(fixture_registry())))
}

async fn app(
    state: web::Data<HttpState>,
) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error> {
    actix_test::init_service(App::new().app_data(state).wrap(Trace).configure(configure)).await
}

async fn json_call(
    app: &impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
    request: actix_test::TestRequest,
) -> (StatusCode, Value) {
    let response = actix_test::call_service(app, request.to_request()).await;
    let status = response.status();
    let trace_id = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
        .expect("every response carries a trace id");
    let body: Value =
        serde_json::from_slice(&actix_test::read_body(response).await).expect("JSON body");
    if let Some(body_trace) = body.get("traceId") {
        assert_eq!(body_trace, &json!(trace_id), "error trace id matches header");
    }
    (status, body)
}

#[rstest]
#[actix_web::test]
async fn worked_example_round_trip(state: web::Data<HttpState>) {
    let app = app(state).await;
    let alice = json!({ "login": "alice", "name": "Alice", "surname": "A", "birth_year": 1990 });

    let (status, body) = json_call(
        &app,
        actix_test::TestRequest::post().uri("/user/add").set_json(&alice),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["age"], 34);

    let (status, body) = json_call(
        &app,
        actix_test::TestRequest::post().uri("/user/add").set_json(&alice),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "duplicate_key");

    let (status, body) = json_call(
        &app,
        actix_test::TestRequest::put()
            .uri("/user/edit/alice")
            .set_json(json!({ "surname": "B" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["user"],
        json!({ "login": "alice", "name": "Alice", "surname": "B", "age": 34 })
    );

    let (status, _) =
        json_call(&app, actix_test::TestRequest::delete().uri("/user/delete/alice")).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = json_call(&app, actix_test::TestRequest::get().uri("/user/alice")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "not_found");
    assert!(body["traceId"].is_string());
}

#[rstest]
#[actix_web::test]
async fn logins_are_case_sensitive(state: web::Data<HttpState>) {
    let app = app(state).await;
    for login in ["alice", "Alice"] {
        let (status, _) = json_call(
            &app,
            actix_test::TestRequest::post().uri("/user/add").set_json(json!({
                "login": login, "name": "N", "surname": "S", "birth_year": 2000
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, body) = json_call(&app, actix_test::TestRequest::get().uri("/user/get-all/json")).await;
    assert_eq!(body["users"].as_array().map(Vec::len), Some(2));
}

#[rstest]
#[actix_web::test]
async fn html_table_escapes_user_input(state: web::Data<HttpState>) {
    let app = app(state).await;
    json_call(
        &app,
        actix_test::TestRequest::post().uri("/user/add").set_json(json!({
            "login": "mallory",
            "name": "<script>alert(1)</script>",
            "surname": "S",
            "birth_year": 2000
        })),
    )
    .await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/user/get-all").to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = String::from_utf8(actix_test::read_body(response).await.to_vec()).expect("utf-8");
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(!html.contains("<script>alert(1)</script>"));
}

#[rstest]
#[actix_web::test]
async fn empty_registry_reports_empty_state(state: web::Data<HttpState>) {
    let app = app(state).await;

    let (status, body) =
        json_call(&app, actix_test::TestRequest::get().uri("/user/get-all/json")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "User list is empty", "users": [] }));
}
