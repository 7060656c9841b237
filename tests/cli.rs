//! End-to-end tests driving the txn-analyzer binary

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SAMPLE: &str = r#"[
  {"transaction_id": "1", "transaction_date": "2024-01-05", "transaction_amount": 100,
   "transaction_type": "debit", "transaction_description": "x", "merchant_name": "A"},
  {"transaction_id": "2", "transaction_date": "2024-02-10", "transaction_amount": 50,
   "transaction_type": "credit", "transaction_description": "y", "merchant_name": "B"}
]"#;

struct Fixture {
    home: TempDir,
}

impl Fixture {
    fn new() -> Self {
        Self {
            home: TempDir::new().unwrap(),
        }
    }

    fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.home.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("txn-analyzer").unwrap();
        cmd.env("TXN_ANALYZER_HOME", self.home.path())
            .env_remove("TXN_ANALYZER_DATA_FILE")
            .env_remove("RUST_LOG");
        cmd
    }

    fn with_sample(&self) -> Command {
        let data = self.write("sample.json", SAMPLE);
        let mut cmd = self.cmd();
        cmd.arg("--data").arg(data);
        cmd
    }
}

#[test]
fn query_total_and_average() {
    let fx = Fixture::new();
    fx.with_sample()
        .args(["query", "total"])
        .assert()
        .success()
        .stdout("Total amount: $150.00\n");
    fx.with_sample()
        .args(["query", "average"])
        .assert()
        .success()
        .stdout("Average amount: $75.00\n");
}

#[test]
fn query_months_and_dominant_type() {
    let fx = Fixture::new();
    fx.with_sample()
        .args(["query", "top-month"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 (January)"));
    fx.with_sample()
        .args(["query", "dominant"])
        .assert()
        .success()
        .stdout(predicate::str::contains("equal"));
}

#[test]
fn query_find_by_id() {
    let fx = Fixture::new();
    fx.with_sample()
        .args(["query", "find", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Transaction with ID 2:"));
    fx.with_sample()
        .args(["query", "find", "99"])
        .assert()
        .success()
        .stdout("Transaction with ID 99 not found.\n");
}

#[test]
fn query_total_by_date_compares_text() {
    let fx = Fixture::new();
    fx.with_sample()
        .args(["query", "total-by-date", "--month", "02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$50.00"));
    fx.with_sample()
        .args(["query", "total-by-date", "--month", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$0.00"));
}

#[test]
fn average_of_empty_file_fails() {
    let fx = Fixture::new();
    let data = fx.write("empty.json", "[]");
    fx.cmd()
        .arg("--data")
        .arg(data)
        .args(["query", "average"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No data"));
}

#[test]
fn invalid_date_is_rejected() {
    let fx = Fixture::new();
    fx.with_sample()
        .args(["query", "before", "2024/02/10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn missing_data_file_fails() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["query", "total"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn default_data_file_under_home() {
    let fx = Fixture::new();
    fx.write("transactions.json", SAMPLE);
    fx.cmd()
        .args(["query", "total-debit"])
        .assert()
        .success()
        .stdout("Total debit amount: $100.00\n");
}

#[test]
fn csv_data_file() {
    let fx = Fixture::new();
    let data = fx.write(
        "sample.csv",
        "transaction_id,transaction_date,transaction_amount,transaction_type,transaction_description,merchant_name\n\
         1,2024-01-05,10.50,debit,Coffee,Cafe\n\
         2,2024-01-06,4.50,debit,Bagel,Cafe\n",
    );
    fx.cmd()
        .arg("--data")
        .arg(data)
        .args(["query", "merchant", "Cafe"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 transaction(s)"));
}

#[test]
fn menu_runs_until_exit() {
    let fx = Fixture::new();
    fx.with_sample()
        .write_stdin("3\n\n15\n1\n\n18\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total amount: $150.00"))
        .stdout(predicate::str::contains("Transaction with ID 1:"))
        .stdout(predicate::str::contains("Exiting."));
}

#[test]
fn menu_add_then_query_in_same_session() {
    let fx = Fixture::new();
    fx.with_sample()
        .write_stdin("17\n3\n2024-03-01\n25\ndebit\nBooks\nShop\n\n10\n\n18\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added transaction:"))
        .stdout(predicate::str::contains("Total debit amount: $125.00"))
        .stdout(predicate::str::contains("\x1b[2J").not());
}

#[test]
fn menu_rejects_huge_amount() {
    let fx = Fixture::new();
    fx.with_sample()
        .write_stdin("9\n0\n99999999999999999\n\n18\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Invalid argument: Invalid amount"));
}

#[test]
fn query_amount_range_includes_three_decimal_bound() {
    let fx = Fixture::new();
    let data = fx.write(
        "fractions.json",
        r#"[{"transaction_id": "1", "transaction_date": "2024-01-05", "transaction_amount": 10.999,
             "transaction_type": "debit"}]"#,
    );
    fx.cmd()
        .arg("--data")
        .arg(data)
        .args(["query", "amount-range", "0", "10.999"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 transaction(s)"));
}

#[test]
fn time_based_date_format_is_config_error() {
    let fx = Fixture::new();
    fx.write("config.json", r#"{"date_format": "%Y-%m-%d %H:%M"}"#);
    fx.with_sample()
        .args(["query", "all"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format"));
}

#[test]
fn menu_exits_on_end_of_input() {
    let fx = Fixture::new();
    fx.with_sample()
        .arg("menu")
        .write_stdin("abc\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid input"));
}

#[test]
fn add_shows_updated_register() {
    let fx = Fixture::new();
    fx.with_sample()
        .args(["add", "2024-03-01", "20", "debit", "--id", "3", "-m", "C"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added transaction:"))
        .stdout(predicate::str::contains("3 transaction(s)"));
}

#[test]
fn export_csv_to_file() {
    let fx = Fixture::new();
    let out = fx.home.path().join("out.csv");
    fx.with_sample()
        .args(["export", "--format", "csv", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 transactions"));

    let written = fs::read_to_string(out).unwrap();
    assert!(written.starts_with("transaction_id,"));
    assert_eq!(written.lines().count(), 3);
}

#[test]
fn export_json_to_stdout() {
    let fx = Fixture::new();
    fx.with_sample()
        .args(["export", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"schema_version\": \"1.0.0\""));
}

#[test]
fn config_does_not_need_data() {
    let fx = Fixture::new();
    fx.cmd()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Currency symbol: $"));
}
