//! Deltamark CLI - scenario PnL and floating-rate bond pricing.
//!
//! # Usage
//!
//! ```bash
//! # Compute scenario PnL from a manifest of MTM files
//! deltamark pnl --manifest ./config.csv --baseline 2020-06-11
//!
//! # Write the result CSV instead of printing it
//! deltamark pnl --manifest ./config.csv --baseline 2020-06-11 --output pnl.csv
//!
//! # Price a floating-rate bond off a zero curve
//! deltamark price --evaluation-date 2014-10-08 --issue 2014-08-08 \
//!     --maturity 2019-08-08 --rates 0.2,0.2,0.2,0.2 --fixing 2014-08-06=0.2
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let format = cli.format;

    match cli.command {
        Commands::Pnl(args) => commands::pnl::execute(args, format)?,
        Commands::Price(args) => commands::price::execute(args, format)?,
    }

    Ok(())
}
