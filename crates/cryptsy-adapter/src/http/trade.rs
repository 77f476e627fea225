/*
[INPUT]:  Order placement and cancellation requests
[OUTPUT]: Order acknowledgements and fee previews
[POS]:    HTTP layer - trading methods (HMAC-signed)
[UPDATE]: When adding new trading methods or changing order flow
*/

use rust_decimal::Decimal;
use serde_json::Value;

use crate::http::encoding::Params;
use crate::http::{CryptsyClient, Result};
use crate::types::{CreateOrderRequest, FeeEstimate, OrderKind, OrderPlacement};

impl CryptsyClient {
    /// Place a buy or sell order.
    ///
    /// POST method=createorder
    /// The server acknowledges with the ad-hoc `orderid` shape rather
    /// than the canonical success envelope.
    pub async fn create_order(&self, req: CreateOrderRequest) -> Result<OrderPlacement> {
        let mut params = Params::new();
        params.push("marketid", req.marketid);
        params.push("ordertype", req.ordertype);
        params.push("quantity", req.quantity);
        params.push("price", req.price);
        self.call_into("createorder", params).await
    }

    /// Cancel one order by id
    ///
    /// POST method=cancelorder&orderid={orderid}
    pub async fn cancel_order(&self, orderid: &str) -> Result<Value> {
        let mut params = Params::new();
        params.push("orderid", orderid);
        self.call("cancelorder", params).await
    }

    /// Cancel all own orders on one market
    ///
    /// POST method=cancelmarketorders&marketid={marketid}
    pub async fn cancel_market_orders(&self, marketid: u32) -> Result<Value> {
        let mut params = Params::new();
        params.push("marketid", marketid);
        self.call("cancelmarketorders", params).await
    }

    /// Cancel all own orders across every market
    ///
    /// POST method=cancelallorders
    pub async fn cancel_all_orders(&self) -> Result<Value> {
        self.call("cancelallorders", Params::new()).await
    }

    /// Preview the fee and net total for a prospective order
    ///
    /// POST method=calculatefees&ordertype={ordertype}&quantity={quantity}&price={price}
    pub async fn calculate_fees(
        &self,
        ordertype: OrderKind,
        quantity: Decimal,
        price: Decimal,
    ) -> Result<FeeEstimate> {
        let mut params = Params::new();
        params.push("ordertype", ordertype);
        params.push("quantity", quantity);
        params.push("price", price);
        self.call_into("calculatefees", params).await
    }
}
