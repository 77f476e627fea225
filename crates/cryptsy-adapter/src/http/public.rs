/*
[INPUT]:  Market identifiers and query parameters
[OUTPUT]: Market data blobs (tickers, order data) as raw JSON
[POS]:    HTTP layer - public market data methods (no auth required)
[UPDATE]: When adding new public methods or changing response format
*/

use serde_json::Value;

use crate::http::encoding::Params;
use crate::http::{CryptsyClient, Result};

impl CryptsyClient {
    /// General market data for all markets (original version)
    ///
    /// GET /api.php?method=marketdata
    pub async fn market_data(&self) -> Result<Value> {
        self.call("marketdata", Params::new()).await
    }

    /// General market data for all markets (v2, keyed by market label)
    ///
    /// GET /api.php?method=marketdatav2
    pub async fn market_data_v2(&self) -> Result<Value> {
        self.call("marketdatav2", Params::new()).await
    }

    /// Market data for a single market
    ///
    /// GET /api.php?method=singlemarketdata&marketid={marketid}
    pub async fn single_market_data(&self, marketid: u32) -> Result<Value> {
        let mut params = Params::new();
        params.push("marketid", marketid);
        self.call("singlemarketdata", params).await
    }

    /// Order book data for all markets
    ///
    /// GET /api.php?method=orderdata
    pub async fn order_data(&self) -> Result<Value> {
        self.call("orderdata", Params::new()).await
    }

    /// Order book data for a single market
    ///
    /// GET /api.php?method=singleorderdata&marketid={marketid}
    pub async fn single_order_data(&self, marketid: u32) -> Result<Value> {
        let mut params = Params::new();
        params.push("marketid", marketid);
        self.call("singleorderdata", params).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{ClientConfig, Credentials, CryptsyClient};
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

    struct HasQueryParam(&'static str);

    impl Match for HasQueryParam {
        fn matches(&self, request: &Request) -> bool {
            request.url.query_pairs().any(|(key, _)| key == self.0)
        }
    }

    fn test_client(server: &MockServer) -> CryptsyClient {
        CryptsyClient::with_config_and_base_urls(
            Credentials {
                api_key: "test-key".to_string(),
                api_secret: "s3cr3t".to_string(),
            },
            ClientConfig::default(),
            &format!("{}/api.php", server.uri()),
            &format!("{}/api", server.uri()),
        )
        .expect("client init")
    }

    #[tokio::test]
    async fn test_market_data_unwraps_markets_payload() {
        let server = MockServer::start().await;
        let mock_response = r#"{
            "success": 1,
            "return": {
                "markets": {
                    "LTC": {
                        "marketid": "3",
                        "label": "LTC/BTC",
                        "lasttradeprice": "0.02351500",
                        "volume": "3411.23881880"
                    }
                }
            }
        }"#;

        let _mock = Mock::given(method("GET"))
            .and(path("/api.php"))
            .and(query_param("method", "marketdata"))
            .and(HasQueryParam("nonce"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/json")
                    .set_body_raw(mock_response, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let payload = client.market_data().await.expect("market_data failed");

        assert_eq!(
            payload["markets"]["LTC"]["label"],
            json!("LTC/BTC")
        );
    }

    #[tokio::test]
    async fn test_single_market_data_sends_marketid() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("GET"))
            .and(path("/api.php"))
            .and(query_param("method", "singlemarketdata"))
            .and(query_param("marketid", "3"))
            .and(HasQueryParam("nonce"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/json")
                    .set_body_raw(r#"{"success":1,"return":{"markets":{}}}"#, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let payload = client
            .single_market_data(3)
            .await
            .expect("single_market_data failed");

        assert_eq!(payload, json!({"markets": {}}));
    }

    #[tokio::test]
    async fn test_order_data_round_trips() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("GET"))
            .and(path("/api.php"))
            .and(query_param("method", "orderdata"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/json")
                    .set_body_raw(r#"{"success":"1","return":[]}"#, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let payload = client.order_data().await.expect("order_data failed");
        assert_eq!(payload, json!([]));
    }
}
