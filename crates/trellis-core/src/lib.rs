//! Domain logic for Trellis.
//!
//! Holds the API-key gate and the example item rules. Depends only on
//! `trellis-types` and pure computation crates -- never on `trellis-infra`,
//! an HTTP framework, or any IO crate.

pub mod auth;
pub mod item;
