//! End-to-end lookups through the real HTTP client and file-backed history.

use std::time::Duration;

use pretty_assertions::assert_eq;
use tempfile::tempdir;
use vinscout_cache::{FileStore, HISTORY_CAPACITY, History};
use vinscout_core::{DecodeError, ScoutConfig, ValidationError};
use vinscout_lookup::{FetchError, LookupError, Scout, VpicClient};
use wiremock::matchers::{method, path_regex};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

/// Answers every VIN with a vehicle whose model is the VIN's serial part.
struct EchoVehicle;

impl Respond for EchoVehicle {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let vin = request
            .url
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .unwrap_or_default()
            .to_string();
        let body = serde_json::json!({
            "Count": 4,
            "Message": "Results returned successfully",
            "Results": [
                { "Variable": "Model Year", "Value": "2019" },
                { "Variable": "Make", "Value": "TESTMAKE" },
                { "Variable": "Model", "Value": &vin[11..] },
                { "Variable": "Fuel Type - Primary", "Value": "Gasoline" }
            ]
        });
        ResponseTemplate::new(200).set_body_json(body)
    }
}

async fn echo_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/api/vehicles/DecodeVin/[A-Z0-9]{17}$"))
        .respond_with(EchoVehicle)
        .mount(&server)
        .await;
    server
}

fn client(server: &MockServer) -> VpicClient {
    let config = ScoutConfig {
        api_base_url: server.uri(),
        timeout_secs: 5,
        ..ScoutConfig::default()
    };
    VpicClient::from_config(&config).unwrap()
}

const VINS: [&str; 6] = [
    "1HGCM82633A004352",
    "WVWMA63B1XE042415",
    "JKAEXVD129A115072",
    "JA32U8FW6AU023413",
    "11111111111111111",
    "1M8GDM9AXKP042788",
];

#[tokio::test]
async fn history_survives_restart_and_stays_bounded() {
    let server = echo_server().await;
    let dir = tempdir().unwrap();

    let mut scout = Scout::new(client(&server), FileStore::new(dir.path()));
    for vin in VINS {
        let record = scout.lookup(vin).await.unwrap();
        assert_eq!(record.model(), &vin[11..]);
        assert_eq!(record.details().fuel_type_primary.as_deref(), Some("Gasoline"));
    }
    drop(scout);

    let history = History::open(FileStore::new(dir.path()));
    let stored: Vec<&str> = history
        .entries()
        .iter()
        .map(|record| record.vin().as_str())
        .collect();
    let expected: Vec<&str> = VINS.iter().rev().take(HISTORY_CAPACITY).copied().collect();
    assert_eq!(stored, expected);
}

#[tokio::test]
async fn failures_leave_persisted_history_alone() {
    let server = echo_server().await;
    let dir = tempdir().unwrap();
    let mut scout = Scout::new(client(&server), FileStore::new(dir.path()));
    scout.lookup(VINS[0]).await.unwrap();
    let before = std::fs::read(dir.path().join("VINLookupHistory.json")).unwrap();

    let err = scout.lookup("WAUUPBFF2K1000000").await.unwrap_err();
    assert!(matches!(
        err,
        LookupError::Validation(ValidationError::InvalidCheckDigit {
            expected: '0',
            found: '2'
        })
    ));

    let after = std::fs::read(dir.path().join("VINLookupHistory.json")).unwrap();
    assert_eq!(before, after);
    assert_eq!(scout.history().len(), 1);
}

#[tokio::test]
async fn empty_results_are_a_decode_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"Results": []}"#))
        .mount(&server)
        .await;
    let dir = tempdir().unwrap();
    let mut scout = Scout::new(client(&server), FileStore::new(dir.path()));

    let err = scout.lookup(VINS[0]).await.unwrap_err();

    match err {
        LookupError::Decode(DecodeError::MissingCoreFields { missing }) => {
            assert_eq!(missing, vec!["Model Year", "Make", "Model"]);
        }
        other => panic!("Expected MissingCoreFields, got {:?}", other),
    }
    assert!(!dir.path().join("VINLookupHistory.json").exists());
}

#[tokio::test]
async fn slow_service_surfaces_as_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;
    let client = VpicClient::builder()
        .base_url(server.uri())
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();
    let dir = tempdir().unwrap();
    let mut scout = Scout::new(client, FileStore::new(dir.path()));

    let err = scout.lookup(VINS[1]).await.unwrap_err();

    assert!(matches!(err, LookupError::Fetch(FetchError::Network(_))));
    assert!(scout.history().is_empty());
}
