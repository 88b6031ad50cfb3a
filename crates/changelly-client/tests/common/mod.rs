/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for changelly-client tests

#![allow(dead_code)]

use changelly_client::{ChangellyClient, ClientConfig, Credentials};
use hmac::{Hmac, Mac};
use sha2::Sha512;
use std::sync::atomic::{AtomicU64, Ordering};
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_API_SECRET: &str = "test-api-secret";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server with fixed test credentials
pub fn client_for(server: &MockServer) -> ChangellyClient {
    let credentials = Credentials::new(TEST_API_KEY, TEST_API_SECRET).expect("credentials");
    ChangellyClient::with_config(credentials, ClientConfig::default().with_host(server.uri()))
        .expect("client init")
}

/// Same as [`client_for`] but with ids `req-0`, `req-1`, ...
pub fn client_with_sequential_ids(server: &MockServer) -> ChangellyClient {
    let counter = AtomicU64::new(0);
    client_for(server)
        .with_id_generator(move || format!("req-{}", counter.fetch_add(1, Ordering::Relaxed)))
}

/// HMAC-SHA512 computed without going through the client
pub fn expected_signature(secret: &str, body: &[u8]) -> String {
    let mut mac = Hmac::<Sha512>::new_from_slice(secret.as_bytes()).expect("hmac key");
    mac.update(body);
    hex::encode(mac.finalize().into_bytes())
}

/// Success envelope around `result`
pub fn rpc_result(result: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "jsonrpc": "2.0",
        "id": "test",
        "result": result,
    }))
}

/// The error envelope the service sends for a rejected request
pub fn rpc_invalid_request() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "jsonrpc": "2.0",
        "result": false,
        "error": {"code": 32600, "message": "Invalid request"}
    }))
}

/// Answer every POST with `template`
pub async fn respond_to_all(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("POST"))
        .respond_with(template)
        .mount(server)
        .await;
}

/// Parsed JSON bodies of every request the server saw, in arrival order
pub async fn received_bodies(server: &MockServer) -> Vec<serde_json::Value> {
    server
        .received_requests()
        .await
        .expect("request recording enabled")
        .iter()
        .map(|request| serde_json::from_slice(&request.body).expect("json body"))
        .collect()
}

/// A transaction record as returned by createTransaction
pub fn transaction_json(from: &str, to: &str, amount_expected_to: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "jev5lt0qmg26h48v",
        "apiExtraFee": "0",
        "changellyFee": "0.5",
        "payinExtraId": null,
        "payoutExtraId": null,
        "amountExpectedFrom": "2.14",
        "amountExpectedTo": amount_expected_to,
        "status": "new",
        "currencyFrom": from,
        "currencyTo": to,
        "amountTo": 0,
        "payinAddress": "3PbJ6bTZ5S1zpS2Q6Kx4a8Q2zZ3Yk1QzrA",
        "payoutAddress": "Lapj4kBqZzmwUvXnPSyBNMPsJ2EtQbF6jd",
        "createdAt": "2018-09-24T10:31:18.000Z",
        "kycRequired": false
    })
}

/// One quote item of a batch getExchangeAmount result
pub fn quote_json(from: &str, to: &str, result: &str) -> serde_json::Value {
    serde_json::json!({
        "from": from,
        "to": to,
        "networkFee": "0.0044",
        "amount": "1",
        "result": result,
        "visibleAmount": result,
        "rate": result,
        "fee": "0.005"
    })
}
