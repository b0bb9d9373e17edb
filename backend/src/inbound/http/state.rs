//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without a running server.

use std::sync::Arc;

use crate::domain::ports::UserRegistry;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Registry holding every user record for the lifetime of the process.
    pub registry: Arc<dyn UserRegistry>,
}

impl HttpState {
    /// Construct state around a registry implementation.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use mockable::DefaultClock;
    /// use user_registry::domain::InMemoryUserRegistry;
    /// use user_registry::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(Arc::new(InMemoryUserRegistry::new(Arc::new(DefaultClock))));
    /// let _registry = state.registry.clone();
    /// ```
    pub fn new(registry: Arc<dyn UserRegistry>) -> Self {
        Self { registry }
    }
}
