//! Status command implementation

use colored::Colorize;

use solarz::client::{API_BASE_URL, DEFAULT_TIMEOUT};
use solarz::config::Config;
use solarz::error::{ConfigError, Error, Result};

use crate::cli::GlobalOptions;

/// Run the status command to display configuration status
///
/// Reads only the local config file; no API call is made.
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "SolarZ Configuration Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;

    let config = match Config::load_at(opts.config_ref()) {
        Ok(config) => config,
        Err(Error::Config(ConfigError::NotFound)) => {
            println!("{} No configuration found", "✗".red());
            println!("  → Run 'solarz init' to get started");
            return Ok(());
        }
        Err(err) => return Err(err),
    };

    println!("Config file: {}", config_path.display().to_string().cyan());
    println!();

    match config.username.as_deref() {
        Some(user) if !user.is_empty() => println!("{} Login: {}", "✓".green(), user),
        _ => {
            println!("{} Login not configured", "✗".red());
            println!("  → Run 'solarz init' to configure");
        }
    }

    if config.password.as_deref().is_some_and(|p| !p.is_empty()) {
        println!("{} Password saved", "✓".green());
    } else {
        println!("{} Password not saved", "✗".red());
    }

    let (host, source) = match (opts.api_host_ref(), config.api_host.as_deref()) {
        (Some(flag), _) => (flag, "(via --api-host)"),
        (None, Some(cfg)) => (cfg, "(from config)"),
        (None, None) => (API_BASE_URL, "(default)"),
    };
    println!("{} API host: {} {}", "○".dimmed(), host, source.dimmed());

    let timeout = config
        .timeout_secs
        .unwrap_or_else(|| DEFAULT_TIMEOUT.as_secs());
    println!("{} Request timeout: {}s", "○".dimmed(), timeout);

    Ok(())
}
