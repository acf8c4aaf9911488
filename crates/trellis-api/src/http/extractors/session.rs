//! Per-request database session extractor.

use std::ops::{Deref, DerefMut};

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use trellis_infra::sqlite::pool::DbSession;

use crate::http::error::AppError;
use crate::state::AppState;

/// A pooled connection held for the lifetime of one handler call.
///
/// Dropped with the handler's future, so the connection goes back to the
/// pool however the handler exits.
pub struct Db(pub DbSession);

impl FromRequestParts<AppState> for Db {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = state
            .db
            .session()
            .await
            .map_err(|e| state.internal_error("failed to acquire database session", e))?;
        Ok(Db(session))
    }
}

impl Deref for Db {
    type Target = DbSession;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Db {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
