//! Example item endpoints.
//!
//! GET  /items - List items. Anonymous while auth is disabled.
//! POST /items - Create an item. Requires an API key when auth is enabled.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;

use trellis_core::item::validate_new_item;
use trellis_infra::sqlite::item::{insert_item, list_items as fetch_items};
use trellis_types::error::ItemError;
use trellis_types::item::{ExampleItem, NewItem};

use crate::http::error::AppError;
use crate::http::extractors::auth::{OptionalAuth, RequireAuth};
use crate::http::extractors::json::extract_json;
use crate::http::extractors::session::Db;
use crate::state::AppState;

/// GET /items - All example items, oldest first.
#[utoipa::path(
    get,
    path = "/items",
    responses(
        (status = 200, description = "Example items", body = [ExampleItem]),
        (status = 401, description = "Missing or invalid API key"),
    ),
    security((), ("bearer_auth" = [])),
    tag = "items"
)]
pub async fn list_items(
    OptionalAuth(auth): OptionalAuth,
    State(state): State<AppState>,
    mut db: Db,
) -> Result<Json<Vec<ExampleItem>>, AppError> {
    tracing::debug!(identified = auth.is_some(), "listing example items");
    let items = fetch_items(&mut db)
        .await
        .map_err(|e| storage_error(&state, "failed to list items", e))?;
    Ok(Json(items))
}

/// POST /items - Validate and store a new example item.
#[utoipa::path(
    post,
    path = "/items",
    request_body = NewItem,
    responses(
        (status = 201, description = "Item created", body = ExampleItem),
        (status = 400, description = "Malformed body or invalid item"),
        (status = 401, description = "Missing or invalid API key"),
    ),
    security(("bearer_auth" = [])),
    tag = "items"
)]
pub async fn create_item(
    _auth: RequireAuth,
    State(state): State<AppState>,
    mut db: Db,
    body: Result<Json<NewItem>, JsonRejection>,
) -> Result<(StatusCode, Json<ExampleItem>), AppError> {
    let item = validate_new_item(extract_json(body)?)?;
    let created = insert_item(&mut db, &item)
        .await
        .map_err(|e| storage_error(&state, "failed to create item", e))?;
    tracing::info!(item_id = created.id, "example item created");
    Ok((StatusCode::CREATED, Json(created)))
}

fn storage_error(state: &AppState, context: &str, err: ItemError) -> AppError {
    match err {
        ItemError::Storage(msg) => state.internal_error(context, msg),
        other => AppError::Item(other),
    }
}
