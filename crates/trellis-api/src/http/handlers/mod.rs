//! HTTP request handlers for the REST API.

pub mod health;
pub mod item;
pub mod protected;
