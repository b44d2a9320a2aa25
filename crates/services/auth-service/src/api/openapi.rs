//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use super::handlers::{self, LoginResponse, MessageResponse};
use domain::Credentials;

/// OpenAPI documentation for the auth service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Auth Service",
        version = "0.1.0",
        description = "Credential registration and cookie-based session login",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3500", description = "Local development server")
    ),
    paths(handlers::register, handlers::login),
    components(schemas(Credentials, MessageResponse, LoginResponse)),
    tags(
        (name = "Authentication", description = "User registration and login")
    )
)]
pub struct ApiDoc;
