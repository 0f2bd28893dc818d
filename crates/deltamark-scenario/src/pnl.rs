//! The scenario PnL transform.

use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;

use deltamark_core::Date;

use crate::error::{ScenarioError, ScenarioResult};
use crate::records::{MtmRecord, PnlRecord, TransactionId};

/// Computes per-transaction PnL for every non-baseline scenario date.
///
/// Records whose scenario date equals `baseline_date` form the baseline
/// set; every other distinct date is inner-joined against it on
/// transaction identity, and each matched pair yields one row with
/// `pnl = scenario MTM - baseline MTM`. Transactions present on only one
/// side of a join are dropped, which is the defined semantic rather than
/// an error. Output rows are grouped by scenario date, dates ascending.
///
/// The function is pure: identical inputs produce identical output.
///
/// # Errors
///
/// Returns [`ScenarioError::AmbiguousBaseline`] when a transaction has
/// more than one baseline row; the join would multiply rows for it, so
/// the whole run is rejected.
pub fn compute_pnl(records: &[MtmRecord], baseline_date: Date) -> ScenarioResult<Vec<PnlRecord>> {
    let baseline = index_baseline(records, baseline_date)?;

    // Group the remainder by scenario date; BTreeMap gives the ascending
    // date order the output is grouped by.
    let mut by_date: BTreeMap<Date, Vec<&MtmRecord>> = BTreeMap::new();
    for record in records {
        if record.scenario_date != baseline_date {
            by_date.entry(record.scenario_date).or_default().push(record);
        }
    }

    let mut output = Vec::new();
    for (date, rows) in by_date {
        for record in rows {
            if let Some(baseline_mtm) = baseline.get(&record.transaction_id).copied() {
                output.push(PnlRecord {
                    scenario_date: date,
                    transaction_id: record.transaction_id.clone(),
                    pnl: record.mtm - baseline_mtm,
                });
            }
        }
    }

    Ok(output)
}

/// Indexes the baseline set by transaction, rejecting duplicates.
fn index_baseline(
    records: &[MtmRecord],
    baseline_date: Date,
) -> ScenarioResult<HashMap<&TransactionId, Decimal>> {
    let mut baseline = HashMap::new();
    let mut duplicate: Option<&TransactionId> = None;

    for record in records.iter().filter(|r| r.scenario_date == baseline_date) {
        if baseline.insert(&record.transaction_id, record.mtm).is_some() && duplicate.is_none() {
            duplicate = Some(&record.transaction_id);
        }
    }

    if let Some(transaction_id) = duplicate {
        let count = records
            .iter()
            .filter(|r| r.scenario_date == baseline_date && r.transaction_id == *transaction_id)
            .count();
        log::warn!(
            "baseline {} carries {count} rows for transaction {transaction_id}",
            baseline_date.format_with(crate::records::SCENARIO_DATE_FORMAT)
        );
        return Err(ScenarioError::AmbiguousBaseline {
            transaction_id: transaction_id.clone(),
            count,
        });
    }

    Ok(baseline)
}
