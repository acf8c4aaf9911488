//! Infrastructure layer for Trellis.
//!
//! Settings loading from files and the environment, and SQLite storage
//! (pool, per-request sessions, the example item store).

pub mod config;
pub mod sqlite;
