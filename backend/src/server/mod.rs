//! Server construction and middleware wiring.

mod config;
#[cfg(feature = "metrics")]
mod metrics;

pub use config::{ServerConfig, ServerSettings};

#[cfg(feature = "metrics")]
use metrics::MetricsLayer;

use actix_web::dev::{Server, ServerHandle, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use std::io;
use std::sync::Arc;
use tokio::signal;
use tracing::{info, warn};

use user_registry::Trace;
#[cfg(debug_assertions)]
use user_registry::doc::ApiDoc;
use user_registry::domain::InMemoryUserRegistry;
use user_registry::domain::ports::UserRegistry;
use user_registry::inbound::http::configure;
use user_registry::inbound::http::health::{HealthState, live, ready};
use user_registry::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

pub(crate) fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(ready)
        .service(live)
        .configure(configure);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server serving one shared registry.
///
/// The registry is created here, outside the worker factory, so every worker
/// thread reads and writes the same collection.
///
/// Actix's own signal handling is disabled; pair the server with
/// [`drain_on_shutdown_signal`] so liveness fails before workers stop.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> io::Result<Server> {
    let server_health_state = health_state.clone();
    let ServerConfig {
        bind_addr,
        clock,
        #[cfg(feature = "metrics")]
        prometheus,
    } = config;

    let registry: Arc<dyn UserRegistry> = Arc::new(InMemoryUserRegistry::new(clock));
    let http_state = web::Data::new(HttpState::new(registry));

    #[cfg(feature = "metrics")]
    let metrics_layer = MetricsLayer::from_option(prometheus);

    let server = HttpServer::new(move || {
        let app = build_app(server_health_state.clone(), http_state.clone());

        #[cfg(feature = "metrics")]
        let app = app.wrap(metrics_layer.clone());

        app
    })
    .disable_signals()
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, "user registry listening");
    health_state.mark_ready();
    Ok(server)
}

/// Fail liveness probes, then stop the server once in-flight requests finish.
pub async fn drain(health_state: web::Data<HealthState>, handle: ServerHandle) {
    health_state.mark_unhealthy();
    info!("draining user registry");
    handle.stop(true).await;
}

/// Wait for Ctrl-C or SIGTERM.
async fn shutdown_signal() -> io::Result<()> {
    #[cfg(unix)]
    {
        let mut terminate = signal::unix::signal(signal::unix::SignalKind::terminate())?;
        tokio::select! {
            result = signal::ctrl_c() => result?,
            _ = terminate.recv() => {}
        }
    }
    #[cfg(not(unix))]
    signal::ctrl_c().await?;
    Ok(())
}

/// Drain `server` when the process receives a shutdown signal.
///
/// If the signal handlers cannot be installed the server is drained
/// immediately rather than left without a shutdown path.
pub fn drain_on_shutdown_signal(server: &Server, health_state: web::Data<HealthState>) {
    let handle = server.handle();
    actix_web::rt::spawn(async move {
        match shutdown_signal().await {
            Ok(()) => info!("shutdown signal received"),
            Err(e) => warn!(error = %e, "shutdown signal handler failed"),
        }
        drain(health_state, handle).await;
    });
}
