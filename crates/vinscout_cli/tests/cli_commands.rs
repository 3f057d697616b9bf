//! Integration tests for `lookup` and `history` against a mock vPIC server.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::{TempDir, tempdir};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const HONDA: &str = "1HGCM82633A004352";
const VOLKSWAGEN: &str = "WVWMA63B1XE042415";

fn vinscout_cmd(dir: &Path, server: &MockServer) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_vinscout"));
    cmd.current_dir(dir)
        .env("VINSCOUT_API_URL", server.uri())
        .env("VINSCOUT_HISTORY_DIR", dir.join("history"));
    cmd
}

fn history_file(dir: &TempDir) -> PathBuf {
    dir.path().join("history").join("VINLookupHistory.json")
}

fn stored_vins(dir: &TempDir) -> Vec<String> {
    let content = fs::read_to_string(history_file(dir)).unwrap();
    let value: Value = serde_json::from_str(&content).unwrap();
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["vin"].as_str().unwrap().to_string())
        .collect()
}

fn results(pairs: &[(&str, Option<&str>)]) -> String {
    let items: Vec<Value> = pairs
        .iter()
        .map(|(name, value)| serde_json::json!({ "Variable": name, "Value": value }))
        .collect();
    serde_json::json!({ "Count": items.len(), "Results": items }).to_string()
}

async fn mount_vehicle(server: &MockServer, vin: &str, make: &str, model: &str, year: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/api/vehicles/DecodeVin/{vin}")))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(results(&[
            ("Model Year", Some(year)),
            ("Make", Some(make)),
            ("Model", Some(model)),
            ("Trim", Some("EX")),
            ("Body Class", Some("Coupe")),
            ("Drive Type", None),
        ])))
        .mount(server)
        .await;
}

// The binary runs synchronously, so the mock server needs its own worker
// threads to answer.
#[tokio::test(flavor = "multi_thread")]
async fn lookup_prints_vehicle_and_records_history() {
    let server = MockServer::start().await;
    mount_vehicle(&server, HONDA, "HONDA", "Accord", "2003").await;
    let dir = tempdir().unwrap();

    vinscout_cmd(dir.path(), &server)
        .args(["lookup", "1hgcm82633a004352"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2003 HONDA Accord"))
        .stdout(predicate::str::contains("EX"))
        .stdout(predicate::str::contains("Coupe"))
        .stdout(predicate::str::contains("N/A"));

    assert_eq!(stored_vins(&dir), vec![HONDA]);
}

#[tokio::test(flavor = "multi_thread")]
async fn lookup_json_output_is_a_record() {
    let server = MockServer::start().await;
    mount_vehicle(&server, HONDA, "HONDA", "Accord", "2003").await;
    let dir = tempdir().unwrap();

    let output = vinscout_cmd(dir.path(), &server)
        .args(["lookup", HONDA, "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let record: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(record["vin"], HONDA);
    assert_eq!(record["modelYear"], "2003");
    assert_eq!(record["make"], "HONDA");
    assert_eq!(record["trim"], "EX");
    assert!(record.get("driveType").is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn invalid_vin_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let dir = tempdir().unwrap();

    vinscout_cmd(dir.path(), &server)
        .args(["lookup", "INVALIDVIN"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("exactly 17 characters"));

    assert!(!history_file(&dir).exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_core_fields_fail_without_recording() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(results(&[("Make", Some("HONDA")), ("Model", Some(""))])),
        )
        .mount(&server)
        .await;
    let dir = tempdir().unwrap();

    vinscout_cmd(dir.path(), &server)
        .args(["lookup", HONDA])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to fetch vehicle info"))
        .stderr(predicate::str::contains("Model Year, Model"));

    assert!(!history_file(&dir).exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn server_error_fails_lookup() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let dir = tempdir().unwrap();

    vinscout_cmd(dir.path(), &server)
        .args(["lookup", HONDA])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to fetch vehicle info"));
}

#[tokio::test(flavor = "multi_thread")]
async fn history_lists_newest_first_then_remove_and_clear() {
    let server = MockServer::start().await;
    mount_vehicle(&server, HONDA, "HONDA", "Accord", "2003").await;
    mount_vehicle(&server, VOLKSWAGEN, "VOLKSWAGEN", "Jetta", "1999").await;
    let dir = tempdir().unwrap();

    for vin in [HONDA, VOLKSWAGEN] {
        vinscout_cmd(dir.path(), &server)
            .args(["lookup", vin])
            .assert()
            .success();
    }

    vinscout_cmd(dir.path(), &server)
        .args(["history", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "1. 1999 VOLKSWAGEN Jetta ({VOLKSWAGEN})\n2. 2003 HONDA Accord ({HONDA})"
        )));

    vinscout_cmd(dir.path(), &server)
        .args(["history", "remove", &HONDA.to_lowercase()])
        .assert()
        .success();
    assert_eq!(stored_vins(&dir), vec![VOLKSWAGEN]);

    vinscout_cmd(dir.path(), &server)
        .args(["history", "remove", HONDA])
        .assert()
        .success()
        .stderr(predicate::str::contains("not in the history"));
    assert_eq!(stored_vins(&dir), vec![VOLKSWAGEN]);

    vinscout_cmd(dir.path(), &server)
        .args(["history", "clear"])
        .assert()
        .success();
    assert!(stored_vins(&dir).is_empty());

    vinscout_cmd(dir.path(), &server)
        .args(["history", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No lookups yet"));
}

#[tokio::test(flavor = "multi_thread")]
async fn repeated_lookup_is_promoted() {
    let server = MockServer::start().await;
    mount_vehicle(&server, HONDA, "HONDA", "Accord", "2003").await;
    mount_vehicle(&server, VOLKSWAGEN, "VOLKSWAGEN", "Jetta", "1999").await;
    let dir = tempdir().unwrap();

    for vin in [HONDA, VOLKSWAGEN, HONDA] {
        vinscout_cmd(dir.path(), &server)
            .args(["lookup", vin])
            .assert()
            .success();
    }

    assert_eq!(stored_vins(&dir), vec![HONDA, VOLKSWAGEN]);

    let output = vinscout_cmd(dir.path(), &server)
        .args(["history", "list", "--format", "json"])
        .output()
        .unwrap();
    let listed: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(listed.as_array().unwrap().len(), 2);
    assert_eq!(listed[0]["model"], "Accord");
}

#[tokio::test(flavor = "multi_thread")]
async fn corrupted_history_file_lists_as_empty() {
    let server = MockServer::start().await;
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("history")).unwrap();
    fs::write(history_file(&dir), "{ not json").unwrap();

    vinscout_cmd(dir.path(), &server)
        .args(["history", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No lookups yet"));
}
