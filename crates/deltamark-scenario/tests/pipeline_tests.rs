//! End-to-end tests of the CSV pipeline: manifest -> load -> join ->
//! write.

use std::io::Write;
use std::path::PathBuf;

use rust_decimal_macros::dec;

use deltamark_core::Date;
use deltamark_scenario::{write_pnl_file, ScenarioError, ScenarioRun, TransactionId};

fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    write!(file, "{content}").unwrap();
    path
}

#[test]
fn worked_example_through_the_full_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    write_file(
        &dir,
        "mtm.csv",
        "TransactionID,ScenarioDate,MTM\n\
         TXN1,2020/06/11,100\n\
         TXN1,2020/06/12,120\n\
         TXN2,2020/06/12,50\n",
    );
    let manifest = write_file(&dir, "config.csv", "File\nmtm.csv\n");

    let baseline = Date::from_ymd(2020, 6, 11).unwrap();
    let pnl = ScenarioRun::new(&manifest, baseline).run().unwrap();

    // TXN2 has no baseline row and is silently dropped.
    assert_eq!(pnl.len(), 1);
    assert_eq!(pnl[0].scenario_date, Date::from_ymd(2020, 6, 12).unwrap());
    assert_eq!(pnl[0].transaction_id, TransactionId::new("TXN1"));
    assert_eq!(pnl[0].pnl, dec!(20));
}

#[test]
fn records_concatenate_across_manifest_files() {
    let dir = tempfile::tempdir().unwrap();
    write_file(
        &dir,
        "book_a.csv",
        "TransactionID,ScenarioDate,MTM\n\
         A1,2020/06/11,10\n\
         A1,2020/06/12,14\n",
    );
    write_file(
        &dir,
        "book_b.csv",
        "TransactionID,ScenarioDate,MTM\n\
         B1,2020/06/11,-5\n\
         B1,2020/06/12,-2\n\
         B1,2020/06/15,1\n",
    );
    let manifest = write_file(&dir, "config.csv", "File\nbook_a.csv\nbook_b.csv\n");

    let baseline = Date::from_ymd(2020, 6, 11).unwrap();
    let pnl = ScenarioRun::new(&manifest, baseline).run().unwrap();

    assert_eq!(pnl.len(), 3);
    // Grouped by date ascending.
    assert_eq!(pnl[0].scenario_date, Date::from_ymd(2020, 6, 12).unwrap());
    assert_eq!(pnl[1].scenario_date, Date::from_ymd(2020, 6, 12).unwrap());
    assert_eq!(pnl[2].scenario_date, Date::from_ymd(2020, 6, 15).unwrap());
    assert_eq!(pnl[2].pnl, dec!(6));
}

#[test]
fn malformed_date_anywhere_aborts_the_run() {
    let dir = tempfile::tempdir().unwrap();
    write_file(
        &dir,
        "good.csv",
        "TransactionID,ScenarioDate,MTM\nTXN1,2020/06/11,100\n",
    );
    write_file(
        &dir,
        "bad.csv",
        "TransactionID,ScenarioDate,MTM\nTXN1,12-06-2020,120\n",
    );
    let manifest = write_file(&dir, "config.csv", "File\ngood.csv\nbad.csv\n");

    let baseline = Date::from_ymd(2020, 6, 11).unwrap();
    let err = ScenarioRun::new(&manifest, baseline).run().unwrap_err();
    assert!(matches!(err, ScenarioError::Parse { .. }));
}

#[test]
fn missing_source_file_aborts_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = write_file(&dir, "config.csv", "File\nno_such_file.csv\n");

    let baseline = Date::from_ymd(2020, 6, 11).unwrap();
    let err = ScenarioRun::new(&manifest, baseline).run().unwrap_err();
    assert!(matches!(err, ScenarioError::MissingInput { .. }));
}

#[test]
fn duplicate_baseline_rows_abort_the_run() {
    let dir = tempfile::tempdir().unwrap();
    write_file(
        &dir,
        "mtm.csv",
        "TransactionID,ScenarioDate,MTM\n\
         TXN1,2020/06/11,100\n\
         TXN1,2020/06/11,101\n\
         TXN1,2020/06/12,120\n",
    );
    let manifest = write_file(&dir, "config.csv", "File\nmtm.csv\n");

    let baseline = Date::from_ymd(2020, 6, 11).unwrap();
    let err = ScenarioRun::new(&manifest, baseline).run().unwrap_err();
    assert!(matches!(err, ScenarioError::AmbiguousBaseline { count: 2, .. }));
}

#[test]
fn empty_manifest_yields_empty_output() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = write_file(&dir, "config.csv", "File\n");

    let baseline = Date::from_ymd(2020, 6, 11).unwrap();
    let pnl = ScenarioRun::new(&manifest, baseline).run().unwrap();
    assert!(pnl.is_empty());
}

#[test]
fn result_file_round_trips_the_contract_columns() {
    let dir = tempfile::tempdir().unwrap();
    write_file(
        &dir,
        "mtm.csv",
        "TransactionID,ScenarioDate,MTM\n\
         00123,2020/06/11,100\n\
         00123,2020/06/12,99.75\n",
    );
    let manifest = write_file(&dir, "config.csv", "File\nmtm.csv\n");

    let baseline = Date::from_ymd(2020, 6, 11).unwrap();
    let pnl = ScenarioRun::new(&manifest, baseline).run().unwrap();

    let out = dir.path().join("pnl.csv");
    write_pnl_file(&pnl, &out).unwrap();

    let written = std::fs::read_to_string(&out).unwrap();
    assert_eq!(
        written,
        "ScenarioDate,TransactionID,pnl\n2020/06/12,00123,-0.25\n"
    );
}
