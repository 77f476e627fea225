/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::models::DepthLevel;

/// Balances and session counters from getinfo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountInfo {
    pub balances_available: HashMap<String, Decimal>,
    #[serde(default)]
    pub balances_hold: HashMap<String, Decimal>,
    pub servertimestamp: i64,
    pub servertimezone: String,
    pub serverdatetime: String,
    pub openordercount: u32,
    pub opentradecount: u32,
}

/// Order book for a single market from depth
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketDepth {
    pub sellorders: Vec<DepthLevel>,
    pub buyorders: Vec<DepthLevel>,
}

/// Acknowledgement for createorder.
///
/// Order placement answers with a bare object carrying `orderid`
/// instead of the canonical success envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPlacement {
    pub orderid: String,
    #[serde(default)]
    pub moreinfo: Option<String>,
}

/// Fee preview from calculatefees
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeEstimate {
    #[serde(with = "rust_decimal::serde::str")]
    pub fee: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub net: Decimal,
}

/// Deposit address from generatenewaddress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAddress {
    pub address: String,
}
