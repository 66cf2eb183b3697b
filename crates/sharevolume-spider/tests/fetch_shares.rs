mod common;

use common::{dead_relay, Responder, BIOGEN};
use sharevolume_spider::stock::sec::{Cik, SharesClient};
use sharevolume_spider::{Config, LoadError};

fn config(relay: String) -> Config {
    Config {
        relay,
        contact: Some("ops@example.com".to_string()),
        ..Config::default()
    }
}

fn biogen() -> Cik {
    Cik::parse("0000875045").unwrap()
}

#[tokio::test]
async fn loads_through_the_relay() {
    let server = Responder::start("200 OK", BIOGEN).await;
    let client = SharesClient::new(&config(server.relay())).unwrap();

    let model = client.load(&biogen()).await.unwrap();
    assert_eq!(model.entity_name, "BIOGEN INC.");
    assert_eq!((model.max.val, model.max.fy.as_str()), (150_207_598.0, "2021"));
    assert_eq!((model.min.val, model.min.fy.as_str()), (144_588_523.0, "2022"));

    let requests = server.requests.lock().await;
    assert_eq!(requests.len(), 1);
    let head = requests[0].to_ascii_lowercase();
    assert!(head.starts_with(
        "get /data.sec.gov/api/xbrl/companyconcept/cik0000875045/dei/entitycommonstocksharesoutstanding.json http/1.1"
    ));
    assert!(head.contains("from: ops@example.com"));
    assert!(head.contains("user-agent: sharevolume/1.0"));
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let server = Responder::start("404 Not Found", r#"{"error":"nope"}"#).await;
    let client = SharesClient::new(&config(server.relay())).unwrap();

    match client.load(&biogen()).await {
        Err(LoadError::Status(status)) => assert_eq!(status.as_u16(), 404),
        other => panic!("expected a status error, got {other:?}"),
    }
}

#[tokio::test]
async fn bad_json_is_an_error() {
    let server = Responder::start("200 OK", "Title: data.sec.gov\n\n<html>").await;
    let client = SharesClient::new(&config(server.relay())).unwrap();

    assert!(matches!(client.load(&biogen()).await, Err(LoadError::Parse(_))));
}

#[tokio::test]
async fn unreachable_relay_is_an_error() {
    let client = SharesClient::new(&config(dead_relay().await)).unwrap();

    assert!(matches!(client.load(&biogen()).await, Err(LoadError::Network(_))));
}

#[tokio::test]
async fn unexpected_shape_still_loads() {
    let server = Responder::start("200 OK", r#"{"units":{"USD":[]}}"#).await;
    let client = SharesClient::new(&config(server.relay())).unwrap();

    let model = client.load(&biogen()).await.unwrap();
    assert_eq!(model.entity_name, "Unknown Entity");
    assert!(model.max.val.is_nan() && model.min.fy.is_empty());
}

#[tokio::test]
async fn no_from_header_without_a_contact() {
    let server = Responder::start("200 OK", BIOGEN).await;
    let config = Config {
        relay: server.relay(),
        ..Config::default()
    };
    SharesClient::new(&config).unwrap().load(&biogen()).await.unwrap();

    let requests = server.requests.lock().await;
    let head = requests[0].to_ascii_lowercase();
    assert!(!head.contains("\r\nfrom:"));
    assert!(head.contains("user-agent: sharevolume/1.0"));
}
