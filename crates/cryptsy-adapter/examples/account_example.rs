/*
[INPUT]:  API credentials from CRYPTSY_API_KEY / CRYPTSY_API_SECRET
[OUTPUT]: Account balances and open orders
[POS]:    Examples - signed account queries
[UPDATE]: When account methods change
*/

use cryptsy_adapter::CryptsyClient;

/// Example: Signed account queries (requires API credentials)
#[tokio::main]
async fn main() {
    println!("=== Cryptsy Account Example ===\n");

    let (key, secret) = match (
        std::env::var("CRYPTSY_API_KEY"),
        std::env::var("CRYPTSY_API_SECRET"),
    ) {
        (Ok(key), Ok(secret)) => (key, secret),
        _ => {
            eprintln!("Set CRYPTSY_API_KEY and CRYPTSY_API_SECRET to run this example");
            return;
        }
    };

    let client = match CryptsyClient::new(key, secret) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created\n");

    // Balances and server status
    println!("Querying getinfo...");
    match client.get_info().await {
        Ok(info) => {
            println!("✓ Open orders: {}", info.openordercount);
            for (currency, amount) in &info.balances_available {
                println!("  {} available: {}", currency, amount);
            }
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    // Open orders on LTC/BTC
    let marketid = 3;
    println!("\nQuerying myorders for market {}...", marketid);
    match client.my_orders(marketid).await {
        Ok(orders) => {
            println!("✓ {} open order(s)", orders.len());
            for order in orders {
                println!(
                    "  #{} {} {} @ {}",
                    order.orderid, order.ordertype, order.quantity, order.price
                );
            }
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Account example complete");
}
