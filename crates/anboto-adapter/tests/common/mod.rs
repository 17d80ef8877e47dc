/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for anboto-adapter tests

#![allow(dead_code)]

use anboto_adapter::{AnbotoClient, Credentials, RECV_WINDOW, RequestSigner};
use wiremock::{MockServer, Request};

pub const TEST_API_KEY: &str = "test-api-key";
/// base64("test-secret-key-0123456789abcdef")
pub const TEST_SECRET_B64: &str = "dGVzdC1zZWNyZXQta2V5LTAxMjM0NTY3ODlhYmNkZWY=";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server
pub fn client_for(server: &MockServer) -> AnbotoClient {
    AnbotoClient::new(&server.uri(), TEST_API_KEY, TEST_SECRET_B64).expect("client init")
}

fn header<'a>(request: &'a Request, name: &str) -> &'a str {
    request
        .headers
        .get(name)
        .unwrap_or_else(|| panic!("missing header {name}"))
        .to_str()
        .expect("header is ascii")
}

/// Recompute the signature from what the server received and compare it
/// against `X-SIGN`.
pub fn assert_signed(request: &Request) {
    assert_eq!(header(request, "X-API-KEY"), TEST_API_KEY);
    assert_eq!(header(request, "X-RECV-WINDOW"), RECV_WINDOW);

    let timestamp = header(request, "X-TIMESTAMP").to_string();
    let pairs: Vec<(String, String)> = request
        .url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    let params: Vec<(&str, String)> = pairs
        .iter()
        .map(|(k, v)| (k.as_str(), v.clone()))
        .collect();
    let body = String::from_utf8(request.body.clone()).expect("utf-8 body");

    let signer = RequestSigner::new(
        Credentials::new(TEST_API_KEY, TEST_SECRET_B64).expect("credentials"),
    )
    .expect("signer");
    let expected = signer.sign_at(timestamp, &params, body);

    assert_eq!(header(request, "X-SIGN"), expected.signature);
}
