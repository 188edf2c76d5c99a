//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::user_handler;
use crate::domain::{CreateUser, UpdateUser, User, UserStats};

/// OpenAPI documentation for the user-record service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "TeleWebManager API",
        version = "0.1.0",
        description = "User records shared by the TeleWebManager bots",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    paths(
        user_handler::list_users,
        user_handler::get_user,
        user_handler::get_user_by_nickname,
        user_handler::create_user,
        user_handler::update_user,
        user_handler::delete_user,
        user_handler::user_stats,
    ),
    components(schemas(User, CreateUser, UpdateUser, UserStats)),
    modifiers(&SecurityAddon),
    tags(
        (name = "Users", description = "User record operations")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for the static bearer token
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .description(Some("Shared service token (AUTH_TOKEN)"))
                        .build(),
                ),
            );
        }
    }
}
