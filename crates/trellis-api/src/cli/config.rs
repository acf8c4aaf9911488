//! `trellis config` - show the effective settings.

use anyhow::Result;
use console::style;

use trellis_types::config::Settings;

const REDACTED: &str = "********";

/// Copy of `settings` that is safe to print.
pub fn redacted(settings: &Settings) -> Settings {
    Settings {
        api_keys: settings.api_keys.iter().map(|_| REDACTED.to_string()).collect(),
        ..settings.clone()
    }
}

/// Print the effective settings, as JSON or as a styled summary.
pub fn show_config(settings: &Settings, json: bool) -> Result<()> {
    let safe = redacted(settings);

    if json {
        println!("{}", serde_json::to_string_pretty(&safe)?);
        return Ok(());
    }

    let on_off = |flag: bool| {
        if flag {
            format!("{}", style("on").green())
        } else {
            format!("{}", style("off").red())
        }
    };

    println!();
    println!("  {} Trellis v{}", style("⚙").bold(), env!("CARGO_PKG_VERSION"));
    println!();
    println!("  Listen:        {}", style(safe.bind_address()).cyan());
    println!("  Database:      {}", safe.database_url);
    println!("  Auth:          {}", on_off(safe.enable_auth));
    println!("  API keys:      {} configured", safe.api_keys.len());
    println!("  Debug:         {}", on_off(safe.debug));
    println!("  Log level:     {}", safe.log_level);
    println!("  OpenAPI docs:  {}", on_off(safe.enable_swagger));
    println!("  CORS origins:  {}", safe.cors_origins.join(", "));
    println!();
    Ok(())
}
