//! Process-wide settings for Trellis.
//!
//! `Settings` is loaded once at startup (defaults, then `trellis.toml`, then
//! `.env` and the process environment) and never mutated afterwards.

use std::fmt;

use serde::de::{self, Deserializer, SeqAccess, Unexpected, Visitor};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level service settings. All fields have defaults suited to local
/// development.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// sqlx-style SQLite URL, e.g. `sqlite://app.db` or `sqlite::memory:`.
    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// Accepted bearer tokens. Order is irrelevant; treated as a set.
    #[serde(default = "default_api_keys", deserialize_with = "string_list")]
    pub api_keys: Vec<String>,

    /// When false every request is authorized without looking at its token.
    #[serde(default = "default_true", deserialize_with = "flexible_bool")]
    pub enable_auth: bool,

    /// Expose internal error details in 500 responses.
    #[serde(default = "default_true", deserialize_with = "flexible_bool")]
    pub debug: bool,

    /// Default log level when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Serve the OpenAPI JSON document at `/docs`. No interactive UI and no
    /// `/redoc` page are mounted.
    #[serde(default = "default_true", deserialize_with = "flexible_bool")]
    pub enable_swagger: bool,

    /// Origins allowed by the CORS layer. `*` mirrors any origin.
    #[serde(default = "default_cors_origins", deserialize_with = "string_list")]
    pub cors_origins: Vec<String>,

    /// Address the HTTP server binds to.
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_database_url() -> String {
    "sqlite://app.db".to_string()
}

fn default_api_keys() -> Vec<String> {
    vec!["dev-key-123".to_string(), "dev-key-456".to_string()]
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "INFO".to_string()
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_string(),
        "http://localhost:8000".to_string(),
    ]
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

/// Boolean from a native bool, `0`/`1`, or `true/false`, `yes/no`, `on/off`
/// (case-insensitive). Environment values arrive as strings or numbers.
fn flexible_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    struct BoolVisitor;

    impl<'de> Visitor<'de> for BoolVisitor {
        type Value = bool;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a boolean (true/false, 1/0, yes/no, on/off)")
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<bool, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<bool, E> {
            match v {
                0 => Ok(false),
                1 => Ok(true),
                _ => Err(E::invalid_value(Unexpected::Unsigned(v), &self)),
            }
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<bool, E> {
            match v {
                0 => Ok(false),
                1 => Ok(true),
                _ => Err(E::invalid_value(Unexpected::Signed(v), &self)),
            }
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<bool, E> {
            match v.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" | "y" | "t" => Ok(true),
                "0" | "false" | "no" | "off" | "n" | "f" => Ok(false),
                _ => Err(E::invalid_value(Unexpected::Str(v), &self)),
            }
        }
    }

    deserializer.deserialize_any(BoolVisitor)
}

/// String list from a sequence, a JSON array string (`["a","b"]`), or a
/// comma-separated string. Comma-separated entries are trimmed and blanks
/// dropped.
fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct ListVisitor;

    impl<'de> Visitor<'de> for ListVisitor {
        type Value = Vec<String>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a list of strings, a JSON array, or a comma-separated string")
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Vec<String>, A::Error> {
            let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
            while let Some(item) = seq.next_element::<String>()? {
                items.push(item);
            }
            Ok(items)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Vec<String>, E> {
            let trimmed = v.trim();
            if trimmed.starts_with('[') {
                return serde_json::from_str(trimmed)
                    .map_err(|e| E::custom(format!("invalid JSON list: {e}")));
            }
            Ok(trimmed
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Vec<String>, E> {
            Ok(vec![v.to_string()])
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Vec<String>, E> {
            Ok(vec![v.to_string()])
        }
    }

    deserializer.deserialize_any(ListVisitor)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            api_keys: default_api_keys(),
            enable_auth: true,
            debug: true,
            log_level: default_log_level(),
            enable_swagger: true,
            cors_origins: default_cors_origins(),
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Settings {
    /// Map `log_level` onto a `tracing` filter directive.
    ///
    /// Also accepts `WARNING` and `CRITICAL`.
    pub fn tracing_directive(&self) -> Result<&'static str, ConfigError> {
        match self.log_level.trim().to_ascii_uppercase().as_str() {
            "TRACE" => Ok("trace"),
            "DEBUG" => Ok("debug"),
            "INFO" => Ok("info"),
            "WARN" | "WARNING" => Ok("warn"),
            "ERROR" | "CRITICAL" => Ok("error"),
            other => Err(ConfigError::invalid(
                "LOG_LEVEL",
                format!("unknown log level '{other}'"),
            )),
        }
    }

    /// Check cross-field constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tracing_directive()?;
        if self.database_url.trim().is_empty() {
            return Err(ConfigError::invalid("DATABASE_URL", "must not be empty"));
        }
        if self.host.trim().is_empty() {
            return Err(ConfigError::invalid("HOST", "must not be empty"));
        }
        Ok(())
    }

    /// `host:port` for the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
