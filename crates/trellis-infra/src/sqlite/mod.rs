//! SQLite storage layer.
//!
//! A single pool in WAL mode; handlers check out one [`pool::DbSession`]
//! per request and run store functions against it.

pub mod item;
pub mod pool;
