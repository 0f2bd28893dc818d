//! Pnl command implementation.
//!
//! Runs the scenario PnL batch: manifest -> MTM files -> baseline join.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use tabled::Tabled;

use deltamark_scenario::{write_pnl_file, PnlRecord, ScenarioRun, SCENARIO_DATE_FORMAT};

use crate::cli::OutputFormat;
use crate::commands::parse_date;
use crate::output::{print_header, print_output};

/// Arguments for the pnl command.
#[derive(Args, Debug)]
pub struct PnlArgs {
    /// Manifest CSV listing the MTM source files in a File column
    #[arg(short, long)]
    pub manifest: PathBuf,

    /// Baseline valuation date (YYYY-MM-DD)
    #[arg(short, long)]
    pub baseline: String,

    /// Write the result CSV to this path instead of printing
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// One rendered PnL row.
#[derive(Debug, Serialize, Tabled)]
pub struct PnlRow {
    /// Scenario date in the input's fixed format.
    #[tabled(rename = "ScenarioDate")]
    #[serde(rename = "ScenarioDate")]
    pub scenario_date: String,
    /// Transaction identifier.
    #[tabled(rename = "TransactionID")]
    #[serde(rename = "TransactionID")]
    pub transaction_id: String,
    /// PnL against the baseline.
    #[tabled(rename = "pnl")]
    #[serde(rename = "pnl")]
    pub pnl: String,
}

impl From<&PnlRecord> for PnlRow {
    fn from(record: &PnlRecord) -> Self {
        Self {
            scenario_date: record.scenario_date.format_with(SCENARIO_DATE_FORMAT),
            transaction_id: record.transaction_id.to_string(),
            pnl: record.pnl.to_string(),
        }
    }
}

/// Execute the pnl command.
pub fn execute(args: PnlArgs, format: OutputFormat) -> Result<()> {
    let baseline = parse_date(&args.baseline)?;

    let pnl = ScenarioRun::new(&args.manifest, baseline).run()?;

    if let Some(path) = args.output {
        write_pnl_file(&pnl, &path)?;
        println!("Wrote {} PnL rows to {}", pnl.len(), path.display());
        return Ok(());
    }

    let rows: Vec<PnlRow> = pnl.iter().map(PnlRow::from).collect();
    print_header("Scenario PnL", format);
    print_output(&rows, format)?;

    Ok(())
}
