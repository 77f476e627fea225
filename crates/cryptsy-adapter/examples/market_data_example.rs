/*
[INPUT]:  Market identifier (e.g., 3 for LTC/BTC)
[OUTPUT]: Market data (tickers, order data)
[POS]:    Examples - public market data queries
[UPDATE]: When adding new public methods
*/

use cryptsy_adapter::CryptsyClient;

/// Example: Query public market data (no authentication required)
///
/// Public methods ignore the credentials, so placeholders are fine.
#[tokio::main]
async fn main() {
    println!("=== Cryptsy Market Data Example ===\n");

    let client = match CryptsyClient::new("public", "public") {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created (no auth required for public methods)\n");

    let marketid = 3; // LTC/BTC

    // General market data for every market
    println!("Querying marketdata...");
    match client.market_data().await {
        Ok(markets) => println!("✓ Market data: {}", markets),
        Err(e) => println!("✗ Error: {}", e),
    }

    // Single market, v1 shape
    println!("\nQuerying singlemarketdata for market {}...", marketid);
    match client.single_market_data(marketid).await {
        Ok(market) => println!("✓ Market: {}", market),
        Err(e) => println!("✗ Error: {}", e),
    }

    // Order book data for the same market
    println!("\nQuerying singleorderdata for market {}...", marketid);
    match client.single_order_data(marketid).await {
        Ok(orders) => println!("✓ Orders: {}", orders),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Market data example complete");
}
