//! HTTP server configuration.
//!
//! [`ServerSettings`] is the user-facing layer loaded by OrthoConfig from CLI
//! flags, `USER_REGISTRY_*` environment variables and config files.
//! [`ServerConfig`] is the resolved form handed to `create_server`.

use std::io;
use std::net::{SocketAddr, ToSocketAddrs};
use std::sync::Arc;

#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetrics;
use mockable::{Clock, DefaultClock};
use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "127.0.0.1";

/// Listener settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USER_REGISTRY")]
pub struct ServerSettings {
    /// Host name or IP address to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    #[ortho_config(default = 8001)]
    pub port: u16,
}

impl ServerSettings {
    /// Return the configured host, falling back to the loopback address.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Resolve the host and port into the first matching socket address.
    ///
    /// # Errors
    /// Returns [`io::Error`] when the host cannot be resolved.
    pub fn bind_addr(&self) -> io::Result<SocketAddr> {
        let (host, port) = (self.host(), self.port());
        (host, port).to_socket_addrs()?.next().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::AddrNotAvailable,
                format!("no socket address for {host}:{port}"),
            )
        })
    }
}

/// Resolved configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) clock: Arc<dyn Clock>,
    #[cfg(feature = "metrics")]
    pub(crate) prometheus: Option<PrometheusMetrics>,
}

impl ServerConfig {
    /// Bind to `bind_addr` and derive ages from the system clock.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            clock: Arc::new(DefaultClock),
            #[cfg(feature = "metrics")]
            prometheus: None,
        }
    }

    /// Replace the clock used to derive ages.
    #[cfg_attr(
        not(test),
        expect(dead_code, reason = "Clock injection is exercised by tests only")
    )]
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    #[cfg_attr(
        not(test),
        expect(dead_code, reason = "Exercised by tests for fixture access")
    )]
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    #[cfg(feature = "metrics")]
    /// Attach Prometheus middleware to the configuration.
    #[must_use]
    pub fn with_metrics(mut self, prometheus: Option<PrometheusMetrics>) -> Self {
        self.prometheus = prometheus;
        self
    }
}
