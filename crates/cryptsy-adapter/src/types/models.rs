/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::OrderKind;

/// One order book level: (price, quantity)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepthLevel(pub Decimal, pub Decimal);

/// Resting order as returned by myorders/allmyorders.
///
/// `marketid` is only present in the allmyorders listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenOrder {
    pub orderid: String,
    #[serde(default)]
    pub marketid: Option<String>,
    pub created: String,
    pub ordertype: OrderKind,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub quantity: Decimal,
    #[serde(rename = "orig_quantity", with = "rust_decimal::serde::str")]
    pub orig_quantity: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
}

/// Executed trade as returned by markettrades
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketTrade {
    pub tradeid: String,
    pub datetime: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub tradeprice: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub quantity: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
    #[serde(default)]
    pub initiate_ordertype: Option<OrderKind>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_order_deserializes_without_marketid() {
        let raw = r#"{
            "orderid": "14",
            "created": "2014-01-05 14:20:30",
            "ordertype": "Buy",
            "price": "0.00001400",
            "quantity": "100.00000000",
            "orig_quantity": "500.00000000",
            "total": "0.00140000"
        }"#;
        let order: OpenOrder = serde_json::from_str(raw).unwrap();
        assert_eq!(order.marketid, None);
        assert_eq!(order.ordertype, OrderKind::Buy);
        assert_eq!(order.price, "0.00001400".parse().unwrap());
    }

    #[test]
    fn test_depth_level_deserializes_from_string_pair() {
        let level: DepthLevel = serde_json::from_str(r#"["0.00000012","500.0"]"#).unwrap();
        assert_eq!(level.0, "0.00000012".parse().unwrap());
        assert_eq!(level.1, "500.0".parse().unwrap());
    }
}
