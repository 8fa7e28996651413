//! Savings and notification command implementations

use colored::Colorize;

use solarz::client::AccountApi;
use solarz::error::Result;

use crate::cli::{CommandContext, GlobalOptions, OutputFormat};

/// Run the savings command
pub async fn savings(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let data = ctx.client.get_economized().await?;
    ctx.print(&data)
}

/// Run the notifications list command
pub async fn notifications(opts: &GlobalOptions, page: u32) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let data = ctx.client.get_notifications(page).await?;
    ctx.print(&data)
}

/// Run the notifications seen command
pub async fn mark_seen(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    ctx.client.mark_all_notifications_seen().await?;

    match ctx.format {
        OutputFormat::Json => ctx.print(&serde_json::json!({ "seen": true })),
        OutputFormat::Pretty => {
            println!("{} All notifications marked as seen", "✓".green());
            Ok(())
        }
    }
}
