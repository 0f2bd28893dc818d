//! Writing PnL results as CSV.

use std::io::Write;
use std::path::Path;

use crate::error::ScenarioResult;
use crate::records::{PnlRecord, SCENARIO_DATE_FORMAT};

/// The output header, in contract order.
const HEADER: [&str; 3] = ["ScenarioDate", "TransactionID", "pnl"];

/// Writes PnL records as CSV to an arbitrary writer.
///
/// Exactly three columns in contract order; dates are formatted with the
/// same fixed `%Y/%m/%d` format the inputs use.
pub fn write_pnl<W: Write>(records: &[PnlRecord], writer: W) -> ScenarioResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(HEADER)?;

    for record in records {
        csv_writer.write_record([
            record.scenario_date.format_with(SCENARIO_DATE_FORMAT),
            record.transaction_id.to_string(),
            record.pnl.to_string(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Writes PnL records as a CSV file.
pub fn write_pnl_file(records: &[PnlRecord], path: impl AsRef<Path>) -> ScenarioResult<()> {
    let file = std::fs::File::create(path)?;
    write_pnl(records, file)
}
