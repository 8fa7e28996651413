//! SolarZ CLI - read solar plant data from the SolarZ platform

use clap::Parser;

mod cli;
mod output;

use cli::{
    Cli, Commands, GenerationCommands, GlobalOptions, NotificationCommands, PlantCommands,
    UnitCommands,
};
use solarz::error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// `--debug` wins over `RUST_LOG`; the default only shows warnings.
fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init => cli::init::run(&opts).await,
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("solarz version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Context => cli::plant::context(&opts).await,
        Commands::Plant(plant_cmd) => match plant_cmd {
            PlantCommands::Status => cli::plant::status(&opts).await,
            PlantCommands::Report => cli::plant::report(&opts).await,
            PlantCommands::Generation(GenerationCommands::Day {
                date,
                separate_portals,
            }) => cli::plant::generation_day(&opts, &date, separate_portals).await,
            PlantCommands::Generation(GenerationCommands::Period {
                start,
                end,
                period,
                unite_months,
                unite_portals,
            }) => {
                cli::plant::generation_period(
                    &opts,
                    &start,
                    &end,
                    period,
                    unite_months,
                    unite_portals,
                )
                .await
            }
        },
        Commands::Savings => cli::account::savings(&opts).await,
        Commands::Unit(unit_cmd) => match unit_cmd {
            UnitCommands::Sums => cli::unit::sums(&opts).await,
            UnitCommands::Credit => cli::unit::credit(&opts).await,
            UnitCommands::Period { start, end } => cli::unit::period(&opts, &start, &end).await,
        },
        Commands::Notifications(cmd) => match cmd {
            NotificationCommands::List { page } => cli::account::notifications(&opts, page).await,
            NotificationCommands::Seen => cli::account::mark_seen(&opts).await,
        },
    }
}
