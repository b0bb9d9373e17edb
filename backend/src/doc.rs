//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the JSON registry endpoints, the health probes and
//! the schema wrappers standing in for domain types. HTML pages are left out
//! of the document. The output backs Swagger UI in debug builds and the
//! `openapi-dump` binary.

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, UserSchema};
use crate::inbound::http::users::{
    AddUserRequest, EditUserRequest, MessageResponse, UserListResponse, UserMessageResponse,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User registry API",
        description = "Add, edit, delete and list users held in process memory.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::add_user,
        crate::inbound::http::users::edit_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserSchema,
        ErrorSchema,
        ErrorCodeSchema,
        AddUserRequest,
        EditUserRequest,
        UserMessageResponse,
        MessageResponse,
        UserListResponse,
    )),
    tags(
        (name = "users", description = "User registry operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
