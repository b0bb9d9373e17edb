//! HTTP inbound adapter exposing the user registry as JSON and HTML.

pub mod error;
pub mod health;
pub mod pages;
pub mod schemas;
pub mod state;
pub mod users;
pub mod views;

use actix_web::web;

pub use error::ApiResult;

/// Register every registry route and the JSON body configuration.
///
/// Literal `/user/...` paths are registered ahead of `/user/{login}` so they
/// are never captured as logins. Callers supply [`state::HttpState`] as
/// `web::Data`.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::{App, web};
/// use mockable::DefaultClock;
/// use user_registry::domain::InMemoryUserRegistry;
/// use user_registry::inbound::http::{configure, state::HttpState};
///
/// let state = HttpState::new(Arc::new(InMemoryUserRegistry::new(Arc::new(DefaultClock))));
/// let _app = App::new().app_data(web::Data::new(state)).configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .service(pages::landing)
        .service(pages::add_form)
        .service(users::add_user)
        .service(users::edit_user)
        .service(users::delete_user)
        .service(pages::users_table)
        .service(users::list_users)
        .service(users::get_user);
}
