//! Axum router configuration with middleware.
//!
//! Routes: `/`, `/health`, `/protected`, `/items`, and `/docs` when the
//! OpenAPI document is enabled. Middleware: CORS, request tracing.

use axum::Router;
use axum::http::HeaderValue;
use axum::routing::get;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::{handlers, openapi};
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.settings.cors_origins);

    let mut router: Router<AppState> = Router::new()
        .route("/", get(handlers::health::root))
        .route("/health", get(handlers::health::health_check))
        .route("/protected", get(handlers::protected::protected_endpoint))
        .route(
            "/items",
            get(handlers::item::list_items).post(handlers::item::create_item),
        );

    if state.settings.enable_swagger {
        router = router.route("/docs", get(openapi::openapi_json));
    }

    router
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS policy from the configured origins.
///
/// Credentials are allowed, so methods and headers mirror the preflight
/// request instead of using a wildcard. An origin of `*` mirrors any origin.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request());

    if origins.iter().any(|o| o.trim() == "*") {
        return base.allow_origin(AllowOrigin::mirror_request());
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin.trim()) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    base.allow_origin(AllowOrigin::list(allowed))
}
