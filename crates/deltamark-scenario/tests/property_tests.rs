//! Property-based tests for the PnL transform invariants:
//!
//! - the baseline date never appears in the output
//! - every row is exactly scenario MTM minus baseline MTM
//! - a row exists iff both sides of the join exist
//! - the transform is pure (identical reruns agree)
//! - duplicated baseline rows are rejected, never multiplied

use std::collections::HashSet;

use proptest::prelude::*;
use rust_decimal::Decimal;

use deltamark_core::Date;
use deltamark_scenario::{compute_pnl, MtmRecord, ScenarioError, TransactionId};

fn baseline_date() -> Date {
    Date::from_ymd(2020, 6, 11).unwrap()
}

/// Offset 0 is the baseline date itself.
fn scenario_date(offset: u8) -> Date {
    baseline_date().add_days(i64::from(offset))
}

/// Generates records with unique (transaction, date) keys, covering the
/// baseline date and a handful of scenario dates.
fn records_strategy() -> impl Strategy<Value = Vec<MtmRecord>> {
    proptest::collection::vec((0u8..6, 0u8..5, -1_000_000i64..1_000_000), 0..40).prop_map(
        |entries| {
            let mut seen = HashSet::new();
            let mut records = Vec::new();
            for (txn, offset, mtm) in entries {
                if seen.insert((txn, offset)) {
                    records.push(MtmRecord::new(
                        format!("TXN{txn}"),
                        scenario_date(offset),
                        Decimal::from(mtm),
                    ));
                }
            }
            records
        },
    )
}

proptest! {
    #[test]
    fn baseline_date_excluded_from_output(records in records_strategy()) {
        let pnl = compute_pnl(&records, baseline_date()).unwrap();
        prop_assert!(pnl.iter().all(|r| r.scenario_date != baseline_date()));
    }

    #[test]
    fn pnl_is_scenario_minus_baseline(records in records_strategy()) {
        let pnl = compute_pnl(&records, baseline_date()).unwrap();
        for row in &pnl {
            let scenario = records
                .iter()
                .find(|r| {
                    r.transaction_id == row.transaction_id
                        && r.scenario_date == row.scenario_date
                })
                .expect("output row without scenario record");
            let baseline = records
                .iter()
                .find(|r| {
                    r.transaction_id == row.transaction_id
                        && r.scenario_date == baseline_date()
                })
                .expect("output row without baseline record");
            prop_assert_eq!(row.pnl, scenario.mtm - baseline.mtm);
        }
    }

    #[test]
    fn inner_join_completeness(records in records_strategy()) {
        let pnl = compute_pnl(&records, baseline_date()).unwrap();

        let baseline_txns: HashSet<&TransactionId> = records
            .iter()
            .filter(|r| r.scenario_date == baseline_date())
            .map(|r| &r.transaction_id)
            .collect();

        let expected: HashSet<(Date, &TransactionId)> = records
            .iter()
            .filter(|r| r.scenario_date != baseline_date())
            .filter(|r| baseline_txns.contains(&r.transaction_id))
            .map(|r| (r.scenario_date, &r.transaction_id))
            .collect();

        let produced: HashSet<(Date, &TransactionId)> = pnl
            .iter()
            .map(|r| (r.scenario_date, &r.transaction_id))
            .collect();

        prop_assert_eq!(produced.len(), pnl.len(), "duplicate output rows");
        prop_assert_eq!(produced, expected);
    }

    #[test]
    fn transform_is_pure(records in records_strategy()) {
        let first = compute_pnl(&records, baseline_date()).unwrap();
        let second = compute_pnl(&records, baseline_date()).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn duplicated_baseline_is_rejected(
        records in records_strategy(),
        txn in 0u8..6,
        first_mtm in -1000i64..1000,
        second_mtm in -1000i64..1000,
    ) {
        let mut records = records;
        records.push(MtmRecord::new(
            format!("TXN{txn}"),
            baseline_date(),
            Decimal::from(first_mtm),
        ));
        records.push(MtmRecord::new(
            format!("TXN{txn}"),
            baseline_date(),
            Decimal::from(second_mtm),
        ));

        match compute_pnl(&records, baseline_date()) {
            Err(ScenarioError::AmbiguousBaseline { transaction_id, count }) => {
                prop_assert_eq!(transaction_id, TransactionId::new(format!("TXN{txn}")));
                prop_assert!(count >= 2);
            }
            other => prop_assert!(false, "expected ambiguous baseline, got {:?}", other.map(|v| v.len())),
        }
    }
}
