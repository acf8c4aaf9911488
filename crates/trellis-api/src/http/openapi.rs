//! OpenAPI document for the HTTP surface.
//!
//! Served as JSON at `/docs` when `enable_swagger` is set.

use axum::Json;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use trellis_types::item::{ExampleItem, NewItem};

use crate::http::handlers::health::{HealthStatus, ServiceInfo};
use crate::http::handlers::protected::ProtectedResponse;

/// Adds the Bearer API-key security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .description(Some(
                            "Static API key. Configure accepted keys via API_KEYS.",
                        ))
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Trellis API Template",
        description = "Starter API service with bearer API-key authentication.\n\nAuthentication: `Authorization: Bearer <api key>`. `/` and `/health` never require a key."
    ),
    paths(
        crate::http::handlers::health::root,
        crate::http::handlers::health::health_check,
        crate::http::handlers::protected::protected_endpoint,
        crate::http::handlers::item::list_items,
        crate::http::handlers::item::create_item,
    ),
    components(schemas(
        HealthStatus,
        ServiceInfo,
        ProtectedResponse,
        ExampleItem,
        NewItem,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "service", description = "Liveness and metadata"),
        (name = "auth", description = "API-key protected examples"),
        (name = "items", description = "Example data model"),
    )
)]
pub struct ApiDoc;

/// GET /docs - The OpenAPI document.
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
