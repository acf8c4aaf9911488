//! Allow-set of configured API keys.
//!
//! Keys are SHA-256 hashed on construction; lookups hash the presented
//! token and test membership. Equality of digests is exact, case-sensitive
//! string equality of the underlying keys.

use std::collections::HashSet;

use sha2::{Digest, Sha256};

/// Set of accepted API keys, stored as lowercase-hex SHA-256 digests.
#[derive(Debug, Clone, Default)]
pub struct ApiKeySet {
    digests: HashSet<String>,
}

impl ApiKeySet {
    /// Build the set from plaintext keys. Keys are trimmed the same way
    /// presented tokens are; duplicates collapse and blank entries are
    /// dropped.
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let digests = keys
            .into_iter()
            .filter_map(|k| {
                let key = k.as_ref().trim();
                (!key.is_empty()).then(|| hash_api_key(key))
            })
            .collect();
        Self { digests }
    }

    /// Whether `token` is one of the configured keys.
    pub fn contains(&self, token: &str) -> bool {
        self.digests.contains(&hash_api_key(token))
    }

    pub fn len(&self) -> usize {
        self.digests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digests.is_empty()
    }
}

/// Compute SHA-256 hash of an API key (lowercase hex).
pub fn hash_api_key(key: &str) -> String {
    let digest = Sha256::digest(key.as_bytes());
    format!("{:x}", digest)
}
