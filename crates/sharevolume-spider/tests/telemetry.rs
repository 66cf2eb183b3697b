mod common;

use common::{dead_relay, Responder};
use sharevolume_spider::telemetry::ping;
use sharevolume_spider::Config;

#[tokio::test]
async fn ping_goes_straight_to_the_sec_base() {
    let server = Responder::start("503 Service Unavailable", "").await;
    let config = Config {
        sec_base: server.base(),
        relay: dead_relay().await,
        telemetry: true,
        ..Config::default()
    };

    let handle = ping(&config).expect("telemetry is on");
    // a failed reply is swallowed inside the task
    handle.await.unwrap();

    let requests = server.requests.lock().await;
    assert_eq!(requests.len(), 1);
    let head = requests[0].to_ascii_lowercase();
    assert!(head.starts_with(
        "get /api/xbrl/companyconcept/cik0000875045/dei/entitycommonstocksharesoutstanding.json http/1.1"
    ));
    assert!(head.contains("user-agent: sharevolume/1.0"));
}

#[tokio::test]
async fn unreachable_ping_is_ignored() {
    let config = Config {
        sec_base: dead_relay().await.trim_end_matches('/').to_string(),
        telemetry: true,
        ..Config::default()
    };

    ping(&config).expect("telemetry is on").await.unwrap();
}
