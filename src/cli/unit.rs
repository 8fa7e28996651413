//! Billing unit command implementations

use log::debug;

use solarz::client::UnitApi;
use solarz::client::models::DateRange;
use solarz::error::Result;

use crate::cli::{CommandContext, GlobalOptions};

/// Run the unit sums command
pub async fn sums(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let data = ctx.client.get_unidade_sums().await?;
    ctx.print(&data)
}

/// Run the unit credit command
pub async fn credit(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let data = ctx.client.get_unidade_credit().await?;
    ctx.print(&data)
}

/// Run the unit period command
pub async fn period(opts: &GlobalOptions, start: &str, end: &str) -> Result<()> {
    DateRange::parse(start, end)?;

    let ctx = CommandContext::new(opts).await?;
    let data = ctx.client.get_unidade_by_period(start, end).await?;
    if let Some(months) = data.as_array() {
        debug!("Fetched {} monthly entries", months.len());
    }
    ctx.print(&data)
}
