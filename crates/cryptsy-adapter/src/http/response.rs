/*
[INPUT]:  Raw response body text from the transport
[OUTPUT]: Unwrapped success payloads or typed failures
[POS]:    HTTP layer - response envelope normalization
[UPDATE]: When the server grows new envelope shapes
*/

use serde_json::Value;

use crate::http::error::{CryptsyError, Result};

/// Unwrap a response body into the canonical success payload.
///
/// Two success shapes are recognized: the canonical
/// `{"success": 1, "return": payload}` envelope, and a bare object
/// carrying an `orderid` field, which order placement emits instead of
/// the envelope. The `orderid` case yields the whole object.
pub fn normalize_body(body: &str) -> Result<Value> {
    let parsed: Value = serde_json::from_str(body).map_err(|source| CryptsyError::Parse {
        body: body.to_string(),
        source,
    })?;

    if truthy_success(parsed.get("success")) {
        if let Some(payload) = parsed.get("return") {
            return Ok(payload.clone());
        }
    }
    if parsed.get("orderid").is_some() {
        return Ok(parsed);
    }

    match parsed.get("error") {
        Some(Value::String(message)) => Err(CryptsyError::api(message.as_str())),
        Some(other) => Err(CryptsyError::api(other.to_string())),
        None => Err(CryptsyError::Unknown { payload: parsed }),
    }
}

/// Compatibility shim for the success flag.
///
/// The server emits numbers, numeric strings, and booleans here, and
/// historical clients coerced with `success|0`. Anything that truncates
/// to a nonzero integer counts as success; everything else does not.
fn truthy_success(value: Option<&Value>) -> bool {
    let Some(value) = value else {
        return false;
    };
    let number = match value {
        Value::Bool(flag) => {
            if *flag {
                1.0
            } else {
                0.0
            }
        }
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    number.is_finite() && number.trunc() != 0.0
}
