//! API key authentication extractors.
//!
//! Reads `Authorization: Bearer <key>` and runs it through the shared
//! [`AuthGate`](trellis_core::auth::AuthGate). Add [`RequireAuth`] to a
//! handler's arguments to demand a valid key, or [`OptionalAuth`] to accept
//! anonymous callers while auth is disabled.

use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use trellis_types::auth::{AuthResult, Credential};

use crate::http::error::AppError;
use crate::state::AppState;

/// Extracting this validates the bearer token (or passes when auth is off).
#[derive(Debug)]
pub struct RequireAuth(pub AuthResult);

/// `None` when auth is disabled; otherwise behaves exactly like
/// [`RequireAuth`], failures included.
#[derive(Debug)]
pub struct OptionalAuth(pub Option<AuthResult>);

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let credential = bearer_credential(&parts.headers);
        let result = state.gate.require(credential.as_ref())?;
        Ok(RequireAuth(result))
    }
}

impl FromRequestParts<AppState> for OptionalAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let credential = bearer_credential(&parts.headers);
        let result = state.gate.optional(credential.as_ref())?;
        Ok(OptionalAuth(result))
    }
}

/// Pull the bearer credential out of the headers.
///
/// A missing header, a value that is not visible ASCII, or a non-Bearer
/// scheme all count as no credential.
fn bearer_credential(headers: &HeaderMap) -> Option<Credential> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    Credential::from_authorization(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &'static [u8]) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(AUTHORIZATION, HeaderValue::from_bytes(value).unwrap());
        map
    }

    #[test]
    fn test_bearer_credential_present() {
        let cred = bearer_credential(&headers(b"Bearer dev-key-123")).unwrap();
        assert_eq!(cred.as_str(), "dev-key-123");
    }

    #[test]
    fn test_no_header_is_absent() {
        assert!(bearer_credential(&HeaderMap::new()).is_none());
    }

    #[test]
    fn test_basic_scheme_is_absent() {
        assert!(bearer_credential(&headers(b"Basic dXNlcjpwYXNz")).is_none());
    }

    #[test]
    fn test_non_ascii_header_is_absent() {
        assert!(bearer_credential(&headers(b"Bearer \xffkey")).is_none());
    }
}
