//! HTTP/REST API layer for Trellis.
//!
//! Axum router with API-key authentication extractors, per-request
//! database sessions, CORS, request tracing, and an OpenAPI document.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod router;
