//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{PnlArgs, PriceArgs};

/// Deltamark - scenario PnL and floating-rate bond analytics CLI
#[derive(Parser)]
#[command(name = "deltamark")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Compute per-transaction scenario PnL against a baseline date
    Pnl(PnlArgs),

    /// Price a floating-rate bond off a zero curve
    Price(PriceArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the values)
    Minimal,
}
