//! Credential and authorization result types.
//!
//! A [`Credential`] is the bearer token lifted out of one request's
//! `Authorization` header. It never outlives the request that carried it.

use std::fmt;

/// Authorization scheme accepted in the `Authorization` header.
pub const BEARER_SCHEME: &str = "Bearer";

/// A bearer token presented by a caller.
///
/// Guaranteed non-empty. `Debug` output never includes the token.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a raw token. Returns `None` for empty or whitespace-only input.
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        let trimmed = token.trim();
        if trimmed.is_empty() {
            return None;
        }
        if trimmed.len() == token.len() {
            Some(Self(token))
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Parse an `Authorization` header value of the form `Bearer <token>`.
    ///
    /// The scheme is matched case-insensitively; the token is kept verbatim.
    /// Any other scheme, or a missing token, yields `None`.
    pub fn from_authorization(value: &str) -> Option<Self> {
        let (scheme, token) = value.trim().split_once(char::is_whitespace)?;
        if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
            return None;
        }
        Self::new(token)
    }

    /// The raw token string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Outcome of a successful gate check.
///
/// Failures are reported through [`crate::error::AuthError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthResult {
    /// The token is a configured API key, or authentication is disabled.
    Authorized,
}
