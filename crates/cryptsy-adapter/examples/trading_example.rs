/*
[INPUT]:  API credentials and order parameters
[OUTPUT]: Order creation/cancellation confirmations
[POS]:    Examples - trading operations
[UPDATE]: When trading methods change
*/

use cryptsy_adapter::{CreateOrderRequest, CryptsyClient, OrderKind};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Example: Place and cancel an order (requires API credentials)
#[tokio::main]
async fn main() {
    println!("=== Cryptsy Trading Example ===\n");

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
    println!("✓ HTTP client created");

    // Preview fees before placing anything
    let quantity = Decimal::from_str("100").unwrap_or_default();
    let price = Decimal::from_str("0.00001400").unwrap_or_default();
    println!("\nPreviewing fees for a Buy of {} @ {}...", quantity, price);
    match client.calculate_fees(OrderKind::Buy, quantity, price).await {
        Ok(estimate) => println!("✓ Fee {} / net {}", estimate.fee, estimate.net),
        Err(e) => println!("✗ Error: {}", e),
    }

    // Place a small limit order on LTC/BTC
    let order_req = CreateOrderRequest {
        marketid: 3,
        ordertype: OrderKind::Buy,
        quantity,
        price,
    };
    println!("\nPlacing order: {:?}", order_req);
    let placed = match client.create_order(order_req).await {
        Ok(placed) => {
            println!("✓ Order placed: #{}", placed.orderid);
            Some(placed)
        }
        Err(e) => {
            println!("✗ Error: {}", e);
            None
        }
    };

    // Cancel it again so the example leaves no position behind
    if let Some(placed) = placed {
        println!("\nCancelling order #{}...", placed.orderid);
        match client.cancel_order(&placed.orderid).await {
            Ok(message) => println!("✓ {}", message),
            Err(e) => println!("✗ Error: {}", e),
        }
    }

    println!("\n✓ Trading example complete");
}
