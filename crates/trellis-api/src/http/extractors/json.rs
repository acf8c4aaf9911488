//! JSON body extraction with errors in the service's own format.

use axum::Json;
use axum::extract::rejection::JsonRejection;

use crate::http::error::AppError;

/// Unwrap a JSON body, turning axum's rejection into [`AppError::BadRequest`].
///
/// Handlers take `body: Result<Json<T>, JsonRejection>` and call this first.
pub fn extract_json<T>(result: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    result
        .map(|Json(value)| value)
        .map_err(|err| AppError::BadRequest(err.body_text()))
}
