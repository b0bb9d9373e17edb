//! Tests for the application bootstrap, covering metrics initialisation,
//! readiness signalling and the assembled app.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

#[cfg(feature = "metrics")]
use super::{PrometheusMetricsBuilder, initialize_metrics};
use super::server::{ServerConfig, build_app, create_server, drain};
use actix_web::http::StatusCode;
use actix_web::{test as actix_test, web};
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use user_registry::domain::TRACE_ID_HEADER;
use user_registry::inbound::http::health::HealthState;
use user_registry::inbound::http::state::HttpState;
use user_registry::test_support::{FixtureClock, fixture_registry};

#[fixture]
fn health_state() -> web::Data<HealthState> {
    web::Data::new(HealthState::new())
}

#[fixture]
fn server_config() -> ServerConfig {
    ServerConfig::new(SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 0))
        .with_clock(Arc::new(FixtureClock::default()))
}

#[cfg(feature = "metrics")]
#[test]
fn initialize_metrics_returns_none_on_error() {
    let metrics = initialize_metrics(|| -> Result<_, &str> { Err("boom") });
    assert!(metrics.is_none(), "expected metrics to be absent on error");
}

#[cfg(feature = "metrics")]
#[test]
fn initialize_metrics_returns_metrics_on_success() {
    let metrics = initialize_metrics(|| {
        PrometheusMetricsBuilder::new("test")
            .endpoint("/metrics")
            .build()
    });
    assert!(metrics.is_some(), "expected metrics to be present on success");
}

#[rstest]
#[actix_rt::test]
async fn create_server_marks_ready(
    health_state: web::Data<HealthState>,
    server_config: ServerConfig,
) {
    assert!(!health_state.is_ready(), "state should start unready");

    let _server = create_server(health_state.clone(), server_config).expect("server should build");

    assert!(health_state.is_ready(), "server creation should mark readiness");
}

#[rstest]
#[actix_rt::test]
async fn drain_fails_liveness_and_stops_server(
    health_state: web::Data<HealthState>,
    server_config: ServerConfig,
) {
    let server = create_server(health_state.clone(), server_config).expect("server should build");
    let handle = server.handle();
    let running = actix_rt::spawn(server);
    assert!(health_state.is_alive(), "server should start live");

    drain(health_state.clone(), handle).await;

    assert!(!health_state.is_alive(), "draining should fail liveness");
    running
        .await
        .expect("server task joins")
        .expect("server stops cleanly");
}

#[rstest]
#[actix_rt::test]
async fn assembled_app_serves_registry_and_probes(health_state: web::Data<HealthState>) {
    health_state.mark_ready();
    let http_state = web::Data::new(HttpState::new(Arc::new(fixture_registry())));
    let app = actix_test::init_service(build_app(health_state, http_state)).await;

    let ready = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/health/ready").to_request(),
    )
    .await;
    assert_eq!(ready.status(), StatusCode::OK);
    assert!(ready.headers().contains_key(TRACE_ID_HEADER));

    let added = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/user/add")
            .set_json(json!({
                "login": "alice",
                "name": "Alice",
                "surname": "A",
                "birth_year": 1990
            }))
            .to_request(),
    )
    .await;
    assert_eq!(added.status(), StatusCode::OK);
    assert!(added.headers().contains_key(TRACE_ID_HEADER));

    let fetched: Value = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get().uri("/user/alice").to_request(),
    )
    .await;
    assert_eq!(fetched["age"], 34);
}
