//! GET /protected - Example endpoint behind the API-key gate.

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::http::extractors::auth::RequireAuth;

#[derive(Debug, Serialize, ToSchema)]
pub struct ProtectedResponse {
    pub message: String,
    pub authenticated: bool,
}

/// GET /protected - Requires a valid API key when auth is enabled.
#[utoipa::path(
    get,
    path = "/protected",
    responses(
        (status = 200, description = "Caller is authorized", body = ProtectedResponse),
        (status = 401, description = "Missing or invalid API key"),
    ),
    security(("bearer_auth" = [])),
    tag = "auth"
)]
pub async fn protected_endpoint(_auth: RequireAuth) -> Json<ProtectedResponse> {
    Json(ProtectedResponse {
        message: "This is a protected endpoint".to_string(),
        authenticated: true,
    })
}
