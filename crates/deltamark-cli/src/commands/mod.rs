//! CLI command implementations.

pub mod pnl;
pub mod price;

// Re-export argument structs for the clap definitions
pub use pnl::PnlArgs;
pub use price::PriceArgs;

use rust_decimal::Decimal;
use std::str::FromStr;

use deltamark_core::Date;

use crate::error::{CliError, CliResult};

/// Parses a date string in YYYY-MM-DD format.
pub fn parse_date(s: &str) -> CliResult<Date> {
    Date::parse(s).map_err(|_| CliError::InvalidDate(s.to_string()))
}

/// Parses a percentage string ("0.2" meaning 0.2%) into a decimal rate.
pub fn parse_percent(s: &str) -> CliResult<Decimal> {
    let value = Decimal::from_str(s.trim()).map_err(|_| CliError::InvalidRate(s.to_string()))?;
    Ok(value / Decimal::from(100))
}

/// Parses a tenor like "6m" or "5y" into months.
pub fn parse_tenor(s: &str) -> CliResult<u32> {
    let trimmed = s.trim();
    let (number, unit) = trimmed.split_at(trimmed.len().saturating_sub(1));
    let count: u32 = number
        .parse()
        .map_err(|_| CliError::InvalidTenor(s.to_string()))?;

    match unit {
        "m" | "M" => Ok(count),
        "y" | "Y" => Ok(count * 12),
        _ => Err(CliError::InvalidTenor(s.to_string())),
    }
}
