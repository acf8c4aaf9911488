//! Shared domain types for Trellis.
//!
//! Settings, credentials, the example item model and their error types.
//! Zero infrastructure dependencies -- only serde, chrono, thiserror, utoipa.

pub mod auth;
pub mod config;
pub mod error;
pub mod item;
