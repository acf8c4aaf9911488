//! Application state shared by every request.
//!
//! Settings and the auth gate are built once at startup and shared
//! read-only behind `Arc`; the database handle is a cheap pool clone.

use std::fmt::Display;
use std::sync::Arc;

use anyhow::Context;

use trellis_core::auth::AuthGate;
use trellis_infra::sqlite::pool::Database;
use trellis_types::config::Settings;

use crate::http::error::AppError;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub gate: Arc<AuthGate>,
    pub db: Database,
}

impl AppState {
    /// Wire state from already-loaded settings and an open database.
    pub fn new(settings: Settings, db: Database) -> Self {
        let gate = AuthGate::from_settings(&settings);
        Self {
            settings: Arc::new(settings),
            gate: Arc::new(gate),
            db,
        }
    }

    /// Open the configured database, then wire state.
    pub async fn init(settings: Settings) -> anyhow::Result<Self> {
        let db = Database::connect(&settings.database_url)
            .await
            .with_context(|| format!("failed to open database {}", settings.database_url))?;
        Ok(Self::new(settings, db))
    }

    /// Log an internal failure and turn it into a 500.
    ///
    /// The detail reaches the client only when `debug` is enabled.
    pub fn internal_error(&self, context: &str, err: impl Display) -> AppError {
        tracing::error!(error = %err, "{context}");
        if self.settings.debug {
            AppError::Internal(format!("{context}: {err}"))
        } else {
            AppError::Internal("Internal server error".to_string())
        }
    }
}
