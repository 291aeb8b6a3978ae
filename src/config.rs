//! Command line configuration

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use rusty_money::iso::{self, Currency};

use pizzago::{
    parse::parse_topping_edit, placement::ToppingPlacement, sizes::Size, toppings::Topping,
};

/// Pizzago pizza builder
#[derive(Debug, Parser)]
#[command(name = "pizzago", about = "Build a pizza, see its price and place an order", long_about = None)]
pub struct AppConfig {
    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Currency prices are shown in
    #[arg(long, env = "PIZZAGO_CURRENCY", value_enum, default_value_t = CurrencyCode::Usd)]
    pub currency: CurrencyCode,

    /// Directory containing pizza fixtures
    #[arg(long, env = "PIZZAGO_FIXTURES_DIR", default_value = "./fixtures")]
    pub fixtures_dir: PathBuf,

    /// Action to run
    #[command(subcommand)]
    pub command: Command,
}

impl AppConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}

/// Actions
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List toppings, sizes and placements with their surcharges
    Menu,

    /// Build a pizza from edits, then place the order
    Build(BuildArgs),

    /// Load a pizza fixture by name, then place the order
    Fixture {
        /// Fixture name, e.g. `hero`
        name: String,
    },

    /// List available pizza fixtures
    Fixtures,
}

/// Arguments for building a pizza
#[derive(Debug, Args)]
pub struct BuildArgs {
    /// Pizza size (small, medium, large)
    #[arg(short, long, default_value = "small")]
    pub size: Size,

    /// Topping edit as TOPPING=PLACEMENT (left, right, all, none); repeatable, applied in order
    #[arg(short, long = "topping", value_parser = parse_topping_edit)]
    pub toppings: Vec<(Topping, Option<ToppingPlacement>)>,
}

/// Supported display currencies
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CurrencyCode {
    /// Pound sterling
    Gbp,

    /// US dollar
    Usd,

    /// Euro
    Eur,
}

impl CurrencyCode {
    /// ISO currency for this code.
    #[must_use]
    pub fn currency(self) -> &'static Currency {
        match self {
            CurrencyCode::Gbp => iso::GBP,
            CurrencyCode::Usd => iso::USD,
            CurrencyCode::Eur => iso::EUR,
        }
    }
}

/// Log output format.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}
