//! Tests for LcnClient::health_check().
//!
//! Uses wiremock for the reachable cases and a closed port for the
//! unreachable case.

use lcn_client::utilities::NETWORK_SERVICE;
use lcn_client::{LcnApiConfig, LcnClient};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client_with_url(base: &str) -> LcnClient {
    let config = LcnApiConfig::new(format!("{base}/api").parse().unwrap(), "test-token");
    LcnClient::new(config).unwrap()
}

#[tokio::test]
async fn health_check_reachable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health-check"))
        .respond_with(ResponseTemplate::new(200).set_body_string("\"Healthy!\""))
        .mount(&server)
        .await;

    let result = test_client_with_url(&server.uri()).health_check().await;
    assert!(result.all_healthy());
    assert_eq!(result.reachable, vec![NETWORK_SERVICE.to_string()]);
    assert!(result.unreachable.is_empty());
}

#[tokio::test]
async fn health_check_unreachable() {
    let result = test_client_with_url("http://127.0.0.1:1").health_check().await;
    assert!(!result.all_healthy());
    assert!(result.reachable.is_empty());
    assert_eq!(result.unreachable.len(), 1);
    assert_eq!(result.unreachable[0].0, NETWORK_SERVICE);
}

#[tokio::test]
async fn health_check_non_success_status_still_reachable() {
    // A 401 or 404 means the service is alive.
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let result = test_client_with_url(&server.uri()).health_check().await;
    assert!(
        result.all_healthy(),
        "Non-success HTTP status should still count as reachable"
    );
}
