/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Cryptsy adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    Credentials,
    CryptsyClient,
    CryptsyError,
    MethodKind,
    PRIVATE_METHODS,
    PUBLIC_METHODS,
    Params,
    RequestSigner,
    Result,
    classify,
    form_encode,
    normalize_body,
};

// Re-export all types
pub use types::*;
