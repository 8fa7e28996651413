//! CLI command definitions and handlers

use clap::{Parser, Subcommand};

use solarz::client::Period;

pub mod account;
pub mod args;
pub mod context;
pub mod init;
pub mod plant;
pub mod status;
pub mod unit;

pub use args::{GlobalOptions, OutputFormat};
pub use context::CommandContext;

/// SolarZ CLI - read your solar plant data from the command line
#[derive(Parser, Debug)]
#[command(name = "solarz")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, json)
    #[arg(
        long,
        global = true,
        env = "SOLARZ_FORMAT",
        default_value = "pretty",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "SOLARZ_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override the API base URL
    #[arg(long, global = true, env = "SOLARZ_API_HOST", hide_env = true)]
    pub api_host: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "SOLARZ_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Save your SolarZ login
    Init,

    /// Show configuration status
    Status,

    /// Display version information
    Version,

    /// Show account context (plants, tariff flag)
    Context,

    /// Plant status, reports and generation
    #[command(subcommand)]
    Plant(PlantCommands),

    /// Show savings (per month, cumulative, total return)
    Savings,

    /// Billing unit balances
    #[command(subcommand)]
    Unit(UnitCommands),

    /// Read and acknowledge notifications
    #[command(subcommand)]
    Notifications(NotificationCommands),
}

/// Plant subcommands
#[derive(Subcommand, Debug)]
pub enum PlantCommands {
    /// Current plant status
    Status,

    /// Most recent plant report
    Report,

    /// Generation series
    #[command(subcommand)]
    Generation(GenerationCommands),
}

/// Generation subcommands
#[derive(Subcommand, Debug)]
pub enum GenerationCommands {
    /// Generation for a single day
    Day {
        /// Day to query (YYYY-MM-DD)
        date: String,

        /// Report each portal separately instead of uniting them
        #[arg(long)]
        separate_portals: bool,
    },

    /// Generation between two dates
    Period {
        /// First day (YYYY-MM-DD)
        start: String,

        /// Last day (YYYY-MM-DD)
        end: String,

        /// Bucket size: day, week, month or year
        #[arg(long, default_value_t = Period::Month, value_parser = args::parse_period)]
        period: Period,

        /// Unite months into a single series
        #[arg(long)]
        unite_months: bool,

        /// Unite portals into a single series
        #[arg(long)]
        unite_portals: bool,
    },
}

/// Billing unit subcommands
#[derive(Subcommand, Debug)]
pub enum UnitCommands {
    /// Total generation, consumption and running credit per unit
    Sums,

    /// Running credit per unit
    Credit,

    /// Monthly generation, consumption and credit between two dates
    Period {
        /// First day (YYYY-MM-DD)
        start: String,

        /// Last day (YYYY-MM-DD)
        end: String,
    },
}

/// Notification subcommands
#[derive(Subcommand, Debug)]
pub enum NotificationCommands {
    /// List one page of notifications
    List {
        /// Page number, starting at 0
        #[arg(long, default_value_t = 0)]
        page: u32,
    },

    /// Mark all notifications as seen
    Seen,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_generation_period_defaults() {
        let cli = Cli::parse_from([
            "solarz",
            "plant",
            "generation",
            "period",
            "2024-01-01",
            "2024-09-17",
        ]);

        match cli.command {
            Commands::Plant(PlantCommands::Generation(GenerationCommands::Period {
                period,
                unite_months,
                unite_portals,
                ..
            })) => {
                assert_eq!(period, Period::Month);
                assert!(!unite_months);
                assert!(!unite_portals);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_generation_period_rejects_unknown_period() {
        let result = Cli::try_parse_from([
            "solarz",
            "plant",
            "generation",
            "period",
            "2024-01-01",
            "2024-09-17",
            "--period",
            "hour",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_notifications_page_default() {
        let cli = Cli::parse_from(["solarz", "notifications", "list"]);
        match cli.command {
            Commands::Notifications(NotificationCommands::List { page }) => assert_eq!(page, 0),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
