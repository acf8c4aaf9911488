//! Settings loader for Trellis.
//!
//! Resolution order, later sources winning:
//! 1. built-in defaults ([`Settings::default`])
//! 2. `trellis.toml` in the working directory, or an explicit `--config` path
//! 3. a `.env` file in the working directory (never overrides real env vars)
//! 4. the process environment (`ENABLE_AUTH`, `API_KEYS`, ...)
//!
//! Every failure is returned to the caller; the binary treats them as fatal.

use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};

use trellis_types::config::Settings;
use trellis_types::error::ConfigError;

/// Settings file read when no explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "trellis.toml";

/// Environment variables consulted, one per settings field.
pub const ENV_KEYS: &[&str] = &[
    "DATABASE_URL",
    "API_KEYS",
    "ENABLE_AUTH",
    "DEBUG",
    "LOG_LEVEL",
    "ENABLE_SWAGGER",
    "CORS_ORIGINS",
    "HOST",
    "PORT",
];

/// Load settings from all sources and validate the result.
///
/// An explicit `config_path` must exist; the default file is optional.
pub fn load_settings(config_path: Option<&Path>) -> Result<Settings, ConfigError> {
    load_dotenv()?;

    let settings: Settings = settings_figment(config_path)?
        .extract()
        .map_err(config_error)?;
    settings.validate()?;
    Ok(settings)
}

/// Layered provider: defaults, then the TOML file, then the environment.
pub fn settings_figment(config_path: Option<&Path>) -> Result<Figment, ConfigError> {
    let file = match config_path {
        Some(path) if !path.is_file() => {
            return Err(ConfigError::Read {
                path: path.display().to_string(),
                message: "file not found".to_string(),
            });
        }
        Some(path) => path,
        None => Path::new(DEFAULT_CONFIG_FILE),
    };

    Ok(Figment::new()
        .merge(Serialized::defaults(Settings::default()))
        .merge(Toml::file(file))
        .merge(Env::raw().only(ENV_KEYS)))
}

fn load_dotenv() -> Result<(), ConfigError> {
    match dotenvy::dotenv() {
        Ok(_) => Ok(()),
        Err(err) if err.not_found() => Ok(()),
        Err(err) => Err(ConfigError::Read {
            path: ".env".to_string(),
            message: err.to_string(),
        }),
    }
}

/// Field-level errors are keyed by the upper-cased field name, which is also
/// its environment variable. Anything else is a syntax error in the file.
fn config_error(err: figment::Error) -> ConfigError {
    if err.path.is_empty() {
        ConfigError::Parse(err.to_string())
    } else {
        ConfigError::InvalidValue {
            key: err.path.join(".").to_ascii_uppercase(),
            message: err.kind.to_string(),
        }
    }
}
