/*
[INPUT]:  Market identifiers and signed account queries
[OUTPUT]: Account data (balances, orders, trades, addresses)
[POS]:    HTTP layer - private account query methods (HMAC-signed)
[UPDATE]: When adding new account methods or changing query parameters
*/

use serde_json::Value;

use crate::http::encoding::Params;
use crate::http::{CryptsyClient, Result};
use crate::types::{AccountInfo, MarketDepth, MarketTrade, NewAddress, OpenOrder};

impl CryptsyClient {
    /// Account balances and server status
    ///
    /// POST method=getinfo
    pub async fn get_info(&self) -> Result<AccountInfo> {
        self.call_into("getinfo", Params::new()).await
    }

    /// All active markets with 24h statistics
    ///
    /// POST method=getmarkets
    pub async fn get_markets(&self) -> Result<Value> {
        self.call("getmarkets", Params::new()).await
    }

    /// Deposit and withdrawal history for the account
    ///
    /// POST method=mytransactions
    pub async fn my_transactions(&self) -> Result<Value> {
        self.call("mytransactions", Params::new()).await
    }

    /// Last trades executed on a market, all users
    ///
    /// POST method=markettrades&marketid={marketid}
    pub async fn market_trades(&self, marketid: u32) -> Result<Vec<MarketTrade>> {
        let mut params = Params::new();
        params.push("marketid", marketid);
        self.call_into("markettrades", params).await
    }

    /// Resting buy/sell orders on a market, all users
    ///
    /// POST method=marketorders&marketid={marketid}
    pub async fn market_orders(&self, marketid: u32) -> Result<Value> {
        let mut params = Params::new();
        params.push("marketid", marketid);
        self.call("marketorders", params).await
    }

    /// Own trade history for one market; `limit` defaults server-side
    ///
    /// POST method=mytrades&marketid={marketid}&limit={limit}
    pub async fn my_trades(&self, marketid: u32, limit: Option<u32>) -> Result<Value> {
        let mut params = Params::new();
        params.push("marketid", marketid);
        if let Some(limit) = limit {
            params.push("limit", limit);
        }
        self.call("mytrades", params).await
    }

    /// Own trade history across all markets
    ///
    /// POST method=allmytrades
    pub async fn all_my_trades(&self) -> Result<Value> {
        self.call("allmytrades", Params::new()).await
    }

    /// Own open orders on one market
    ///
    /// POST method=myorders&marketid={marketid}
    pub async fn my_orders(&self, marketid: u32) -> Result<Vec<OpenOrder>> {
        let mut params = Params::new();
        params.push("marketid", marketid);
        self.call_into("myorders", params).await
    }

    /// Order book depth for one market
    ///
    /// POST method=depth&marketid={marketid}
    pub async fn depth(&self, marketid: u32) -> Result<MarketDepth> {
        let mut params = Params::new();
        params.push("marketid", marketid);
        self.call_into("depth", params).await
    }

    /// Own open orders across all markets
    ///
    /// POST method=allmyorders
    pub async fn all_my_orders(&self) -> Result<Vec<OpenOrder>> {
        self.call_into("allmyorders", Params::new()).await
    }

    /// Generate a fresh deposit address for a currency
    ///
    /// POST method=generatenewaddress&currencycode={code}
    pub async fn generate_new_address(&self, currency_code: &str) -> Result<NewAddress> {
        let mut params = Params::new();
        params.push("currencycode", currency_code);
        self.call_into("generatenewaddress", params).await
    }
}
