/*
[INPUT]:  API key and base64 secret from the environment
[OUTPUT]: Create, query and cancel a pair of TWAP orders
[POS]:    Examples - trading operations
[UPDATE]: When trading API changes
*/

use std::time::Duration;

use anboto_adapter::*;
use rust_decimal::Decimal;
use serde_json::{Map, json};

/// Example: full order lifecycle against the testnet
///
/// Requires ANBOTO_API_KEY and ANBOTO_SECRET_KEY (base64).
#[tokio::main]
async fn main() {
    println!("=== Anboto Order Lifecycle Example ===\n");

    let (api_key, secret_key) = match (
        std::env::var("ANBOTO_API_KEY"),
        std::env::var("ANBOTO_SECRET_KEY"),
    ) {
        (Ok(key), Ok(secret)) => (key, secret),
        _ => {
            eprintln!("Set ANBOTO_API_KEY and ANBOTO_SECRET_KEY to run this example");
            return;
        }
    };

    let client = match AnbotoClient::new(TESTNET_BASE_URL, &api_key, &secret_key) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created");

    let mut params = Map::new();
    params.insert("duration_seconds".to_string(), json!(300));

    let id1 = uuid::Uuid::new_v4().to_string();
    let id2 = uuid::Uuid::new_v4().to_string();
    let order1 = CreateOrderRequest::new(
        id1.as_str(),
        Exchange::Binance,
        "ETH/USDT",
        AssetCategory::Spot,
        Side::Buy,
        Decimal::ONE,
        ExecutionStrategy::Twap,
    )
    .with_params(params.clone());
    let order2 = CreateOrderRequest::new(
        id2.as_str(),
        Exchange::Binance,
        "BTC/USDT",
        AssetCategory::Spot,
        Side::Buy,
        Decimal::new(1, 1),
        ExecutionStrategy::Twap,
    )
    .with_params(params);

    println!("\n# Create many orders");
    print_response(client.create_many_orders(&[order1, order2], true).await);

    tokio::time::sleep(Duration::from_secs(1)).await;

    println!("\n# Get orders");
    print_response(client.get_orders(&[], &[id1.as_str(), id2.as_str()]).await);

    println!("\n# Get open orders");
    print_response(client.get_open_orders().await);

    tokio::time::sleep(Duration::from_secs(1)).await;

    println!("\n# Cancel many orders");
    match format_cancel_many_orders_data(None, Some(vec![id1, id2])) {
        Ok(req) => print_response(client.cancel_many_orders(&req).await),
        Err(e) => eprintln!("  invalid cancel request: {}", e),
    }

    println!("\n✓ Order lifecycle example complete");
}

fn print_response(result: Result<ApiResponse>) {
    match result {
        Ok(ApiResponse::Json { status, body }) => println!("  [{}] {}", status, body),
        Ok(ApiResponse::Raw(raw)) => println!("  [{}] (raw) {}", raw.status, raw.text()),
        Err(e) => eprintln!("  request failed: {}", e),
    }
}
