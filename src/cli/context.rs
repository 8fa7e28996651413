//! Command execution context
//!
//! Provides a unified context for command execution, eliminating boilerplate
//! for config loading, login, and client initialization.

use log::debug;
use serde_json::Value;

use solarz::client::{AuthApi, PlantApi, SolarZClient};
use solarz::config::Config;
use solarz::error::Result;

use crate::cli::{GlobalOptions, OutputFormat};
use crate::output;

/// Context for command execution containing the client and runtime options.
pub struct CommandContext {
    /// Logged-in API client
    pub client: SolarZClient,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Load config, build the client and log in.
    ///
    /// # Errors
    /// Returns error if config cannot be loaded, credentials are missing, or
    /// the login is rejected.
    pub async fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?;
        let (username, password) = config.credentials()?;

        let client = SolarZClient::new(config.client_options(opts.api_host_ref()))?;
        debug!("Logging in to {}", client.base_url());
        client.authenticate(username, password).await?;

        Ok(Self {
            client,
            format: opts.format,
        })
    }

    /// Like [`new`](Self::new), then load the client context so plant
    /// commands have a plant to work on.
    pub async fn with_plant(opts: &GlobalOptions) -> Result<Self> {
        let ctx = Self::new(opts).await?;
        ctx.client.get_client_context().await?;
        Ok(ctx)
    }

    /// Print a vendor payload in the selected format.
    pub fn print(&self, data: &Value) -> Result<()> {
        output::print(data, self.format)
    }
}
