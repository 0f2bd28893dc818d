//! End-to-end CLI tests.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use std::path::PathBuf;

fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    write!(file, "{content}").unwrap();
    path
}

fn deltamark() -> Command {
    Command::cargo_bin("deltamark").unwrap()
}

#[test]
fn pnl_command_prints_the_joined_rows() {
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

    deltamark()
        .args([
            "--format",
            "csv",
            "pnl",
            "--manifest",
            manifest.to_str().unwrap(),
            "--baseline",
            "2020-06-11",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("2020/06/12,TXN1,20"))
        .stdout(predicate::str::contains("TXN2").not());
}

#[test]
fn pnl_command_writes_an_output_file() {
    let dir = tempfile::tempdir().unwrap();
    write_file(
        &dir,
        "mtm.csv",
        "TransactionID,ScenarioDate,MTM\n\
         00123,2020/06/11,100\n\
         00123,2020/06/12,99.75\n",
    );
    let manifest = write_file(&dir, "config.csv", "File\nmtm.csv\n");
    let output = dir.path().join("pnl.csv");

    deltamark()
        .args([
            "pnl",
            "--manifest",
            manifest.to_str().unwrap(),
            "--baseline",
            "2020-06-11",
            "--output",
            output.to_str().unwrap(),
        ])
        .assert()
        .success();

    let written = std::fs::read_to_string(&output).unwrap();
    assert_eq!(
        written,
        "ScenarioDate,TransactionID,pnl\n2020/06/12,00123,-0.25\n"
    );
}

#[test]
fn pnl_command_fails_on_missing_manifest() {
    deltamark()
        .args([
            "pnl",
            "--manifest",
            "/nonexistent/config.csv",
            "--baseline",
            "2020-06-11",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn pnl_command_rejects_bad_baseline_date() {
    deltamark()
        .args([
            "pnl",
            "--manifest",
            "config.csv",
            "--baseline",
            "11/06/2020",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn price_command_values_the_reference_bond_near_par() {
    deltamark()
        .args([
            "--format",
            "json",
            "price",
            "--evaluation-date",
            "2014-10-08",
            "--issue",
            "2014-08-08",
            "--maturity",
            "2019-08-08",
            "--rates",
            "0.2,0.2,0.2,0.2",
            "--fixing",
            "2014-08-06=0.2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("NPV"))
        .stdout(predicate::str::contains("\"value\": \"100."));
}

#[test]
fn price_command_fails_without_the_started_period_fixing() {
    deltamark()
        .args([
            "price",
            "--evaluation-date",
            "2014-10-08",
            "--issue",
            "2014-08-08",
            "--maturity",
            "2019-08-08",
            "--rates",
            "0.2,0.2,0.2,0.2",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing EURIBOR-6M fixing"));
}
