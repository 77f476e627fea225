/*
[INPUT]:  Encoded parameter bytes and the account API secret
[OUTPUT]: Lowercase hex HMAC-SHA512 signatures for the Sign header
[POS]:    HTTP layer - request signing for authenticated endpoints
[UPDATE]: When changing signing algorithm or digest encoding
*/

use hmac::{Hmac, Mac};
use sha2::Sha512;

type HmacSha512 = Hmac<Sha512>;

/// Signs private request bodies with the account's API secret.
///
/// The message must be the exact byte sequence transmitted as the POST
/// body; the server recomputes the digest over the body it received.
#[derive(Clone)]
pub struct RequestSigner {
    secret: Vec<u8>,
}

impl RequestSigner {
    /// Create a new request signer keyed by the API secret
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// HMAC-SHA512 over the message, rendered as 128 lowercase hex chars
    pub fn sign(&self, message: &[u8]) -> String {
        let mut mac =
            HmacSha512::new_from_slice(&self.secret).expect("HMAC accepts any key length");
        mac.update(message);
        hex::encode(mac.finalize().into_bytes())
    }
}

impl std::fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestSigner").finish_non_exhaustive()
    }
}
