/*
[INPUT]:  HTTP client configuration and API method dispatch
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod account;
pub mod client;
pub mod encoding;
pub mod error;
pub mod methods;
pub mod public;
pub mod response;
pub mod signature;
pub mod trade;

pub use error::{CryptsyError, Result};
pub use signature::RequestSigner;

pub use client::{ClientConfig, Credentials, CryptsyClient};
pub use encoding::{Params, form_encode};
pub use methods::{MethodKind, PRIVATE_METHODS, PUBLIC_METHODS, classify};
pub use response::normalize_body;
