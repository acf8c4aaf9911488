use thiserror::Error;

/// Reasons a request fails the API-key gate.
///
/// Both variants surface to HTTP callers as the same 401 response; the
/// distinction only exists for callers inside the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("no bearer credential supplied")]
    Unauthenticated,

    #[error("bearer credential is not a recognized API key")]
    InvalidCredential,
}

/// Errors raised while loading settings at startup. All of them are fatal.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("failed to parse configuration: {0}")]
    Parse(String),

    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

impl ConfigError {
    /// Shorthand for [`ConfigError::InvalidValue`].
    pub fn invalid(key: &str, message: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            key: key.to_string(),
            message: message.into(),
        }
    }
}

/// Errors related to example item operations.
#[derive(Debug, Error)]
pub enum ItemError {
    #[error("invalid item name: {0}")]
    InvalidName(String),

    #[error("invalid item description: {0}")]
    InvalidDescription(String),

    #[error("storage error: {0}")]
    Storage(String),
}
