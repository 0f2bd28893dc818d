//! Loading MTM records from delimited source files.

use std::path::Path;
use std::str::FromStr;

use rust_decimal::Decimal;

use deltamark_core::Date;

use crate::error::{ScenarioError, ScenarioResult};
use crate::manifest::Manifest;
use crate::records::{MtmRecord, SCENARIO_DATE_FORMAT};

const TRANSACTION_COLUMN: &str = "TransactionID";
const DATE_COLUMN: &str = "ScenarioDate";
const MTM_COLUMN: &str = "MTM";

/// Loads the MTM records of one source file.
///
/// The file must carry a header row with at least `TransactionID`,
/// `ScenarioDate`, and `MTM`; extra columns are ignored. Transaction
/// identifiers are kept verbatim, dates must match the fixed `%Y/%m/%d`
/// format, MTM values must be decimal numbers. Any malformed value aborts
/// the load with its file position; there is no partial result.
pub fn load_mtm_file(path: impl AsRef<Path>) -> ScenarioResult<Vec<MtmRecord>> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(ScenarioError::MissingInput {
            path: path.display().to_string(),
        });
    }
    let display = path.display().to_string();

    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();
    let column = |name: &'static str| -> ScenarioResult<usize> {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| ScenarioError::Schema {
                path: display.clone(),
                column: name,
            })
    };
    let transaction_idx = column(TRANSACTION_COLUMN)?;
    let date_idx = column(DATE_COLUMN)?;
    let mtm_idx = column(MTM_COLUMN)?;

    let mut records = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        // 1-based position in the file, counting the header row.
        let line = row + 2;

        let transaction_id = record.get(transaction_idx).unwrap_or("").to_string();

        let date_value = record.get(date_idx).unwrap_or("").trim();
        let scenario_date = Date::parse_with_format(date_value, SCENARIO_DATE_FORMAT).map_err(
            |_| ScenarioError::Parse {
                path: display.clone(),
                line,
                column: DATE_COLUMN,
                value: date_value.to_string(),
            },
        )?;

        let mtm_value = record.get(mtm_idx).unwrap_or("").trim();
        let mtm = Decimal::from_str(mtm_value).map_err(|_| ScenarioError::Parse {
            path: display.clone(),
            line,
            column: MTM_COLUMN,
            value: mtm_value.to_string(),
        })?;

        records.push(MtmRecord {
            transaction_id: transaction_id.into(),
            scenario_date,
            mtm,
        });
    }

    Ok(records)
}

/// Loads and concatenates the records of every file in the manifest.
pub fn load_all(manifest: &Manifest) -> ScenarioResult<Vec<MtmRecord>> {
    let mut records = Vec::new();
    for path in manifest.files() {
        let loaded = load_mtm_file(path)?;
        log::debug!("loaded {} MTM records from {}", loaded.len(), path.display());
        records.extend(loaded);
    }
    Ok(records)
}
