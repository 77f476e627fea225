/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for cryptsy-adapter tests

use cryptsy_adapter::{ClientConfig, Credentials, CryptsyClient};
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "test-key";
pub const TEST_API_SECRET: &str = "s3cr3t";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Credentials every test client is built with
pub fn test_credentials() -> Credentials {
    Credentials {
        api_key: TEST_API_KEY.to_string(),
        api_secret: TEST_API_SECRET.to_string(),
    }
}

/// Client with both endpoints pointed at the mock server
#[allow(dead_code)]
pub fn test_client(server: &MockServer) -> CryptsyClient {
    test_client_with_config(server, ClientConfig::default())
}

/// Client with custom configuration pointed at the mock server
#[allow(dead_code)]
pub fn test_client_with_config(server: &MockServer, config: ClientConfig) -> CryptsyClient {
    CryptsyClient::with_config_and_base_urls(
        test_credentials(),
        config,
        &format!("{}/api.php", server.uri()),
        &format!("{}/api", server.uri()),
    )
    .expect("client init")
}
