/*
[INPUT]:  Ordered key/value request parameters
[OUTPUT]: Canonical form-encoded parameter strings
[POS]:    HTTP layer - request parameter encoding
[UPDATE]: When the server changes its parameter escaping rules
*/

use std::fmt::Display;

use url::form_urlencoded;

/// Ordered request parameter bag.
///
/// Insertion order is preserved end to end: the encoded byte sequence
/// doubles as the HMAC signing input for private calls, so the string
/// that is signed and the string that is transmitted must come from the
/// same encoding pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: Vec<(String, String)>,
}

impl Params {
    /// Create an empty parameter bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a key/value pair, keeping insertion order
    pub fn push(&mut self, key: impl Into<String>, value: impl Display) {
        self.entries.push((key.into(), value.to_string()));
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

/// Encode parameters as `application/x-www-form-urlencoded` text.
///
/// Used verbatim for public query strings, private POST bodies, and the
/// signing input, which keeps all three byte-identical.
pub fn form_encode(params: &Params) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in params.iter() {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_preserves_insertion_order() {
        let mut params = Params::new();
        params.push("method", "getinfo");
        params.push("nonce", 42);
        assert_eq!(form_encode(&params), "method=getinfo&nonce=42");

        let mut reversed = Params::new();
        reversed.push("nonce", 42);
        reversed.push("method", "getinfo");
        assert_eq!(form_encode(&reversed), "nonce=42&method=getinfo");
    }

    #[test]
    fn test_encode_caller_params_keep_their_slot() {
        let mut params = Params::new();
        params.push("marketid", 132);
        params.push("method", "depth");
        params.push("nonce", 7);
        assert_eq!(form_encode(&params), "marketid=132&method=depth&nonce=7");
    }

    #[test]
    fn test_encode_escapes_reserved_characters() {
        let mut params = Params::new();
        params.push("note", "a b&c=d");
        assert_eq!(form_encode(&params), "note=a+b%26c%3Dd");
    }

    #[test]
    fn test_empty_bag_encodes_to_empty_string() {
        let params = Params::new();
        assert!(params.is_empty());
        assert_eq!(form_encode(&params), "");
    }

    #[test]
    fn test_push_accepts_display_scalars() {
        let mut params = Params::new();
        params.push("quantity", 1.5);
        params.push("active", true);
        assert_eq!(form_encode(&params), "quantity=1.5&active=true");
        assert_eq!(params.len(), 2);
    }
}
