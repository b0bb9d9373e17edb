//! HTML page handlers.
//!
//! Pages are rendered from the view structs in [`super::views`]; the only one
//! that touches the registry is the user table.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, get, web};

use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::views::{AddUserForm, LandingPage, UsersPage};

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok().content_type(ContentType::html()).body(body)
}

/// Landing page with navigation links.
#[get("/")]
pub async fn landing() -> HttpResponse {
    html(LandingPage.to_string())
}

/// Form for registering a user.
#[get("/user/add-form")]
pub async fn add_form() -> HttpResponse {
    html(AddUserForm.to_string())
}

/// Table of every user, or an empty-state notice.
#[get("/user/get-all")]
pub async fn users_table(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let users = state.registry.list().await?;
    Ok(html(UsersPage::new(&users).to_string()))
}
