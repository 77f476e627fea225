/*
[INPUT]:  Failure sources (dispatch, transport, parsing, server payloads)
[OUTPUT]: Structured error types with the offending detail attached
[POS]:    Error handling layer - unified error type for the crate
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

/// Main error type for the Cryptsy adapter
#[derive(Error, Debug)]
pub enum CryptsyError {
    /// Method name is in neither registry; nothing was sent
    #[error("unknown API method: {method}")]
    InvalidMethod { method: String },

    /// Transport-level failure reported by the HTTP client
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body was not valid JSON; carries the raw body text
    #[error("error parsing JSON response: {body}")]
    Parse {
        body: String,
        #[source]
        source: serde_json::Error,
    },

    /// Server answered with an error payload; message is verbatim
    #[error("API error: {message}")]
    Api { message: String },

    /// Response parsed but matched no known success or error shape
    #[error("unknown error, unrecognized response: {payload}")]
    Unknown { payload: serde_json::Value },

    /// Success payload did not match the expected response type
    #[error("unexpected payload shape: {0}")]
    Decode(#[source] serde_json::Error),

    /// URL parsing failed
    #[error("invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Header value could not be encoded
    #[error("invalid header value: {0}")]
    Header(#[from] reqwest::header::InvalidHeaderValue),
}

impl CryptsyError {
    /// Create an API error carrying the server's message
    pub fn api(message: impl Into<String>) -> Self {
        CryptsyError::Api {
            message: message.into(),
        }
    }
}

/// Result type alias for Cryptsy operations
pub type Result<T> = std::result::Result<T, CryptsyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_method_names_the_method() {
        let err = CryptsyError::InvalidMethod {
            method: "bogus".to_string(),
        };
        assert_eq!(err.to_string(), "unknown API method: bogus");
    }

    #[test]
    fn test_api_error_creation() {
        let err = CryptsyError::api("Invalid nonce");
        match err {
            CryptsyError::Api { message } => assert_eq!(message, "Invalid nonce"),
            _ => panic!("Expected Api error variant"),
        }
    }

    #[test]
    fn test_unknown_error_carries_payload() {
        let err = CryptsyError::Unknown {
            payload: serde_json::json!({"surprise": true}),
        };
        assert!(err.to_string().contains("surprise"));
    }
}
