//! User registry JSON handlers.
//!
//! ```text
//! POST /user/add {"login":"alice","name":"Alice","surname":"A","birth_year":1990}
//! PUT /user/edit/alice {"surname":"B"}
//! DELETE /user/delete/alice
//! GET /user/get-all/json
//! GET /user/alice
//! ```

use actix_web::{delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{Error, Login, NewUser, User, UserPatch, UserValidationError};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, UserSchema};
use crate::inbound::http::state::HttpState;

pub(crate) const ADDED_MESSAGE: &str = "User added successfully";
pub(crate) const UPDATED_MESSAGE: &str = "User information updated";
pub(crate) const EMPTY_LIST_MESSAGE: &str = "User list is empty";

/// Request body for `POST /user/add`.
///
/// Example JSON:
/// `{"login":"alice","name":"Alice","surname":"A","birth_year":1990}`
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct AddUserRequest {
    /// Unique, case-sensitive login.
    #[schema(example = "alice")]
    pub login: String,
    #[schema(example = "Alice")]
    pub name: String,
    #[schema(example = "A")]
    pub surname: String,
    /// Used to derive the stored age; not retained.
    #[schema(example = 1990)]
    pub birth_year: i32,
}

impl TryFrom<AddUserRequest> for NewUser {
    type Error = UserValidationError;

    fn try_from(value: AddUserRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            login: Login::new(value.login)?,
            name: value.name,
            surname: value.surname,
            birth_year: value.birth_year,
        })
    }
}

/// Request body for `PUT /user/edit/{login}`. Omitted fields keep their value.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct EditUserRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_year: Option<i32>,
}

impl From<EditUserRequest> for UserPatch {
    fn from(value: EditUserRequest) -> Self {
        Self {
            name: value.name,
            surname: value.surname,
            birth_year: value.birth_year,
        }
    }
}

/// Confirmation message paired with the affected record.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserMessageResponse {
    #[schema(example = "User added successfully")]
    pub message: String,
    #[schema(value_type = UserSchema)]
    pub user: User,
}

/// Bare confirmation message.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "User alice deleted successfully")]
    pub message: String,
}

/// Every registered user. `message` is present only when the list is empty.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserListResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "User list is empty")]
    pub message: Option<String>,
    #[schema(value_type = Vec<UserSchema>)]
    pub users: Vec<User>,
}

impl From<Vec<User>> for UserListResponse {
    fn from(users: Vec<User>) -> Self {
        let message = users.is_empty().then(|| EMPTY_LIST_MESSAGE.to_owned());
        Self { message, users }
    }
}

/// Resolve a login taken from the URL path.
///
/// A blank segment can never name a registered user, so it is reported as
/// missing rather than malformed.
pub(crate) fn path_login(raw: String) -> Result<Login, Error> {
    Login::new(raw.clone()).map_err(|_| {
        Error::not_found("user not found").with_details(json!({ "login": raw }))
    })
}

/// Register a new user.
#[utoipa::path(
    post,
    path = "/user/add",
    request_body = AddUserRequest,
    responses(
        (status = 200, description = "User added", body = UserMessageResponse),
        (status = 400, description = "Duplicate login or invalid request", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "addUser"
)]
#[post("/user/add")]
pub async fn add_user(
    state: web::Data<HttpState>,
    payload: web::Json<AddUserRequest>,
) -> ApiResult<web::Json<UserMessageResponse>> {
    let new_user = NewUser::try_from(payload.into_inner()).map_err(Error::from)?;
    let user = state.registry.add(new_user).await?;
    Ok(web::Json(UserMessageResponse {
        message: ADDED_MESSAGE.to_owned(),
        user,
    }))
}

/// Overwrite the supplied fields of an existing user.
#[utoipa::path(
    put,
    path = "/user/edit/{login}",
    params(("login" = String, Path, description = "Login of the user to edit")),
    request_body = EditUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserMessageResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "User not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "editUser"
)]
#[put("/user/edit/{login}")]
pub async fn edit_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<EditUserRequest>,
) -> ApiResult<web::Json<UserMessageResponse>> {
    let login = path_login(path.into_inner())?;
    let user = state
        .registry
        .update(&login, payload.into_inner().into())
        .await?;
    Ok(web::Json(UserMessageResponse {
        message: UPDATED_MESSAGE.to_owned(),
        user,
    }))
}

/// Remove a user.
#[utoipa::path(
    delete,
    path = "/user/delete/{login}",
    params(("login" = String, Path, description = "Login of the user to delete")),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 404, description = "User not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/user/delete/{login}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<MessageResponse>> {
    let login = path_login(path.into_inner())?;
    let deleted = state.registry.delete(&login).await?;
    Ok(web::Json(MessageResponse {
        message: format!("User {deleted} deleted successfully"),
    }))
}

/// List every user as JSON in insertion order.
#[utoipa::path(
    get,
    path = "/user/get-all/json",
    responses(
        (status = 200, description = "Users", body = UserListResponse),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/user/get-all/json")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<UserListResponse>> {
    let users = state.registry.list().await?;
    Ok(web::Json(users.into()))
}

/// Fetch a single user by login.
#[utoipa::path(
    get,
    path = "/user/{login}",
    params(("login" = String, Path, description = "Login of the user to fetch")),
    responses(
        (status = 200, description = "User", body = UserSchema),
        (status = 404, description = "User not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/user/{login}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<User>> {
    let login = path_login(path.into_inner())?;
    let user = state.registry.get(&login).await?;
    Ok(web::Json(user))
}

#[cfg(test)]
mod tests;
