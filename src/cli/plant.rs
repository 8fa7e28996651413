//! Plant command implementations

use log::debug;

use solarz::client::models::{DateRange, parse_date};
use solarz::client::{DEFAULT_UNITE_PORTALS_DAY, Period, PlantApi};
use solarz::error::Result;

use crate::cli::{CommandContext, GlobalOptions};

/// Run the context command
pub async fn context(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let data = ctx.client.get_client_context().await?;
    ctx.print(&data)
}

/// Run the plant status command
pub async fn status(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::with_plant(opts).await?;
    let data = ctx.client.get_last_status().await?;
    ctx.print(&data)
}

/// Run the plant report command
pub async fn report(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::with_plant(opts).await?;
    let data = ctx.client.get_last_report().await?;
    ctx.print(&data)
}

/// Run the generation day command
pub async fn generation_day(
    opts: &GlobalOptions,
    date: &str,
    separate_portals: bool,
) -> Result<()> {
    // Reject typos before logging in
    parse_date(date)?;

    let unite_portals = DEFAULT_UNITE_PORTALS_DAY && !separate_portals;
    debug!("Fetching generation for {} (unitePortals={})", date, unite_portals);

    let ctx = CommandContext::with_plant(opts).await?;
    let data = ctx.client.get_generation_day(date, unite_portals).await?;
    ctx.print(&data)
}

/// Run the generation period command
pub async fn generation_period(
    opts: &GlobalOptions,
    start: &str,
    end: &str,
    period: Period,
    unite_months: bool,
    unite_portals: bool,
) -> Result<()> {
    DateRange::parse(start, end)?;
    debug!("Fetching generation {}..{} by {}", start, end, period);

    let ctx = CommandContext::with_plant(opts).await?;
    let data = ctx
        .client
        .get_generation_period(start, end, period, unite_months, unite_portals)
        .await?;
    ctx.print(&data)
}
