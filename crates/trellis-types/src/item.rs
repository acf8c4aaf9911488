//! Example item model.
//!
//! A deliberately small table that shows the common column shapes: integer
//! primary key, required and optional strings, a boolean flag with a default,
//! a timestamp, and an integer with a default. Replace it with real models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Maximum length of [`ExampleItem::name`], in characters.
pub const NAME_MAX_LEN: usize = 100;

/// Maximum length of [`ExampleItem::description`], in characters.
pub const DESCRIPTION_MAX_LEN: usize = 500;

/// Priority assigned when a new item does not specify one.
pub const DEFAULT_PRIORITY: i32 = 1;

/// A persisted example item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ExampleItem {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub priority: i32,
}

/// Request body for creating an example item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NewItem {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Defaults to `true`.
    #[serde(default)]
    pub is_active: Option<bool>,
    /// Defaults to [`DEFAULT_PRIORITY`].
    #[serde(default)]
    pub priority: Option<i32>,
}
