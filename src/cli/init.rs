//! Init command implementation

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};

use solarz::client::{AuthApi, SolarZClient};
use solarz::config::Config;
use solarz::error::Result;

use crate::cli::GlobalOptions;

/// Run the init command
///
/// Prompts for the login, verifies it against the API, and saves it.
/// Connection settings already in the config file are kept.
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}", "Welcome to SolarZ!".bold().green());
    println!("Let's set up your SolarZ login.\n");

    let mut config = Config::load_at(opts.config_ref()).unwrap_or_default();
    if let Some(host) = opts.api_host.clone() {
        config.api_host = Some(host);
    }

    let theme = ColorfulTheme::default();
    let mut prompt = Input::<String>::with_theme(&theme).with_prompt("E-mail");
    if let Some(existing) = config.username.clone() {
        prompt = prompt.with_initial_text(existing);
    }
    let username = prompt.interact_text()?;

    let password = Password::with_theme(&theme)
        .with_prompt("Password")
        .interact()?;

    println!("\n{}", "Authenticating...".cyan());
    let client = SolarZClient::new(config.client_options(None))?;
    client.authenticate(&username, &password).await?;
    println!("{}", "✓ Authentication successful!".green());

    config.username = Some(username);
    config.password = Some(password);
    config.save_at(opts.config_ref())?;

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        config_path.display()
    );

    println!("\n{}", "You're all set! Try running:".bold());
    println!("  {} - Show configuration status", "solarz status".cyan());
    println!("  {} - Current plant status", "solarz plant status".cyan());

    Ok(())
}
