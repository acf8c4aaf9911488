//! The API-key gate.
//!
//! Pure and synchronous: reads immutable configuration and the caller's
//! credential, nothing else. Safe to share behind an `Arc` across any
//! number of concurrent requests.

use trellis_types::auth::{AuthResult, Credential};
use trellis_types::config::Settings;
use trellis_types::error::AuthError;

use super::key_set::ApiKeySet;

/// Decides whether a request's bearer credential is acceptable.
#[derive(Debug, Clone)]
pub struct AuthGate {
    enabled: bool,
    keys: ApiKeySet,
}

impl AuthGate {
    pub fn new(enabled: bool, keys: ApiKeySet) -> Self {
        Self { enabled, keys }
    }

    /// Build the gate from `enable_auth` and `api_keys`.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.enable_auth,
            ApiKeySet::from_keys(&settings.api_keys),
        )
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Number of distinct configured keys.
    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    /// Require a valid credential.
    ///
    /// - Auth disabled: always [`AuthResult::Authorized`], no lookup.
    /// - Auth enabled, no credential: [`AuthError::Unauthenticated`].
    /// - Auth enabled, unknown credential: [`AuthError::InvalidCredential`].
    pub fn require(&self, credential: Option<&Credential>) -> Result<AuthResult, AuthError> {
        if !self.enabled {
            return Ok(AuthResult::Authorized);
        }
        let credential = credential.ok_or(AuthError::Unauthenticated)?;
        if self.keys.contains(credential.as_str()) {
            Ok(AuthResult::Authorized)
        } else {
            Err(AuthError::InvalidCredential)
        }
    }

    /// Like [`AuthGate::require`], but yields `None` when auth is disabled.
    ///
    /// When auth is enabled the outcome of `require` is propagated exactly,
    /// failures included.
    pub fn optional(
        &self,
        credential: Option<&Credential>,
    ) -> Result<Option<AuthResult>, AuthError> {
        if !self.enabled {
            return Ok(None);
        }
        self.require(credential).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate(enabled: bool) -> AuthGate {
        AuthGate::new(enabled, ApiKeySet::from_keys(["dev-key-123", "dev-key-456"]))
    }

    fn cred(token: &str) -> Credential {
        Credential::new(token).unwrap()
    }

    const PROBES: &[&str] = &["dev-key-123", "wrong-key", "DEV-KEY-123", "x", "dev-key-1234"];

    #[test]
    fn test_disabled_authorizes_any_token() {
        let gate = gate(false);
        for token in PROBES {
            assert_eq!(gate.require(Some(&cred(token))), Ok(AuthResult::Authorized));
        }
        assert_eq!(gate.require(None), Ok(AuthResult::Authorized));
    }

    #[test]
    fn test_disabled_with_no_keys_still_authorizes() {
        let gate = AuthGate::new(false, ApiKeySet::default());
        assert_eq!(gate.require(None), Ok(AuthResult::Authorized));
    }

    #[test]
    fn test_enabled_accepts_configured_keys() {
        let gate = gate(true);
        assert_eq!(gate.require(Some(&cred("dev-key-123"))), Ok(AuthResult::Authorized));
        assert_eq!(gate.require(Some(&cred("dev-key-456"))), Ok(AuthResult::Authorized));
    }

    #[test]
    fn test_enabled_rejects_unknown_keys() {
        let gate = gate(true);
        for token in ["wrong-key", "DEV-KEY-123", "dev-key-1234", "x"] {
            assert_eq!(
                gate.require(Some(&cred(token))),
                Err(AuthError::InvalidCredential),
                "token {token} should be rejected"
            );
        }
    }

    #[test]
    fn test_enabled_without_credential_is_unauthenticated() {
        assert_eq!(gate(true).require(None), Err(AuthError::Unauthenticated));
    }

    #[test]
    fn test_enabled_with_empty_key_set_rejects_everything() {
        let gate = AuthGate::new(true, ApiKeySet::default());
        assert_eq!(gate.require(Some(&cred("dev-key-123"))), Err(AuthError::InvalidCredential));
        assert_eq!(gate.require(None), Err(AuthError::Unauthenticated));
    }

    #[test]
    fn test_optional_is_none_when_disabled() {
        let gate = gate(false);
        for token in PROBES {
            assert_eq!(gate.optional(Some(&cred(token))), Ok(None));
        }
        assert_eq!(gate.optional(None), Ok(None));
    }

    #[test]
    fn test_optional_delegates_when_enabled() {
        let gate = gate(true);
        assert_eq!(
            gate.optional(Some(&cred("dev-key-123"))),
            Ok(Some(AuthResult::Authorized))
        );
        assert_eq!(
            gate.optional(Some(&cred("wrong-key"))),
            Err(AuthError::InvalidCredential)
        );
        assert_eq!(gate.optional(None), Err(AuthError::Unauthenticated));
    }

    #[test]
    fn test_from_settings() {
        let settings = Settings {
            enable_auth: true,
            api_keys: vec!["only-key".to_string()],
            ..Settings::default()
        };
        let gate = AuthGate::from_settings(&settings);
        assert!(gate.is_enabled());
        assert_eq!(gate.key_count(), 1);
        assert!(gate.require(Some(&cred("only-key"))).is_ok());
        assert!(gate.require(Some(&cred("dev-key-123"))).is_err());
    }
}
