//! API-key authentication.
//!
//! [`gate::AuthGate`] is a stateless predicate over an optional bearer
//! credential, built once from settings and shared across requests.

pub mod gate;
pub mod key_set;

pub use gate::AuthGate;
pub use key_set::ApiKeySet;
