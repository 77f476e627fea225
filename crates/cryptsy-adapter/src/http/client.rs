/*
[INPUT]:  HTTP configuration (base URLs, timeouts, credentials)
[OUTPUT]: Configured client dispatching classified, signed API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing dispatch behavior
*/

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use chrono::Utc;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::http::encoding::{Params, form_encode};
use crate::http::error::{CryptsyError, Result};
use crate::http::methods::{MethodKind, classify};
use crate::http::response::normalize_body;
use crate::http::signature::RequestSigner;

/// Base URLs for the Cryptsy API
const PUBLIC_BASE_URL: &str = "http://pubapi.cryptsy.com/api.php";
const PRIVATE_BASE_URL: &str = "https://www.cryptsy.com/api";

/// User agent advertised on every request, public and private
const DEFAULT_USER_AGENT: &str = "Mozilla/4.0 (compatible; Cryptsy API Rust client)";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: String,
    /// Defaults merged into every outgoing request. Core-computed
    /// headers (Sign, Key, User-Agent, Content-Type) win on conflict;
    /// everything else passes through untouched.
    pub default_headers: HeaderMap,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            default_headers: HeaderMap::new(),
        }
    }
}

/// Credentials for signed requests.
///
/// The key travels in the Key header; the secret only ever feeds the
/// signer and is never transmitted.
#[derive(Clone)]
pub struct Credentials {
    pub api_key: String,
    pub api_secret: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .finish_non_exhaustive()
    }
}

/// Per-instance nonce counter, strictly increasing across calls
#[derive(Debug)]
struct NonceCounter(AtomicU64);

impl NonceCounter {
    fn seeded_from_clock() -> Self {
        Self(AtomicU64::new(Utc::now().timestamp() as u64))
    }

    #[cfg(test)]
    fn with_seed(seed: u64) -> Self {
        Self(AtomicU64::new(seed))
    }

    /// Increment-and-read as a single atomic step
    fn next(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }
}

/// Main HTTP client for the Cryptsy API
#[derive(Debug)]
pub struct CryptsyClient {
    http_client: Client,
    public_base_url: Url,
    private_base_url: Url,
    credentials: Credentials,
    signer: RequestSigner,
    config: ClientConfig,
    nonce: NonceCounter,
}

impl CryptsyClient {
    /// Create a new client with default configuration
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Result<Self> {
        Self::with_config(
            Credentials {
                api_key: api_key.into(),
                api_secret: api_secret.into(),
            },
            ClientConfig::default(),
        )
    }

    /// Create a new client with custom configuration
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_urls(credentials, config, PUBLIC_BASE_URL, PRIVATE_BASE_URL)
    }

    /// Create a client pointed at non-default endpoints
    pub fn with_config_and_base_urls(
        credentials: Credentials,
        config: ClientConfig,
        public_base_url: &str,
        private_base_url: &str,
    ) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;
        let signer = RequestSigner::new(credentials.api_secret.as_bytes().to_vec());

        Ok(Self {
            http_client,
            public_base_url: Url::parse(public_base_url)?,
            private_base_url: Url::parse(private_base_url)?,
            credentials,
            signer,
            config,
            nonce: NonceCounter::seeded_from_clock(),
        })
    }

    /// Get the credentials the client was built with
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Dispatch an API call through the uniform interface.
    ///
    /// Classifies the method, stamps the parameter set with the next
    /// nonce, and routes it down the public GET or signed private POST
    /// path. Returns the unwrapped success payload as raw JSON.
    pub async fn call(&self, method: &str, params: Params) -> Result<Value> {
        let Some(kind) = classify(method) else {
            return Err(CryptsyError::InvalidMethod {
                method: method.to_string(),
            });
        };

        let nonce = self.nonce.next();
        let mut request_params = params;
        request_params.push("method", method);
        request_params.push("nonce", nonce);
        let encoded = form_encode(&request_params);

        debug!(method, ?kind, nonce, "dispatching API call");

        let response = match kind {
            MethodKind::Public => self.send_public(&encoded).await?,
            MethodKind::Private => self.send_private(&encoded).await?,
        };

        let body = response.text().await?;
        let result = normalize_body(&body);
        if let Err(CryptsyError::Api { message }) = &result {
            warn!(method, %message, "API reported an error");
        }
        result
    }

    /// Call and deserialize the success payload into a typed response
    pub(crate) async fn call_into<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Params,
    ) -> Result<T> {
        let payload = self.call(method, params).await?;
        serde_json::from_value(payload).map_err(CryptsyError::Decode)
    }

    async fn send_public(&self, encoded: &str) -> Result<reqwest::Response> {
        let mut url = self.public_base_url.clone();
        url.set_query(Some(encoded));
        let request = self
            .http_client
            .get(url)
            .headers(self.merged_headers(HeaderMap::new())?);
        Ok(request.send().await?)
    }

    async fn send_private(&self, encoded: &str) -> Result<reqwest::Response> {
        let signature = self.signer.sign(encoded.as_bytes());

        let mut core = HeaderMap::new();
        core.insert(
            HeaderName::from_static("sign"),
            HeaderValue::from_str(&signature)?,
        );
        core.insert(
            HeaderName::from_static("key"),
            HeaderValue::from_str(&self.credentials.api_key)?,
        );
        core.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded"),
        );

        // The signed string is sent verbatim; re-encoding the params
        // here would risk a byte mismatch with the signature.
        let request = self
            .http_client
            .post(self.private_base_url.clone())
            .headers(self.merged_headers(core)?)
            .body(encoded.to_string());
        Ok(request.send().await?)
    }

    /// Merge caller default headers with the core header set.
    ///
    /// Core-computed headers always win; all other caller-supplied
    /// headers pass through untouched.
    fn merged_headers(&self, core: HeaderMap) -> Result<HeaderMap> {
        let mut headers = self.config.default_headers.clone();
        headers.insert(USER_AGENT, HeaderValue::from_str(&self.config.user_agent)?);
        for (name, value) in core.iter() {
            headers.insert(name.clone(), value.clone());
        }
        Ok(headers)
    }
}
