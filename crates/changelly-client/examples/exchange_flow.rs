/*
[INPUT]:  CHANGELLY_API_KEY / CHANGELLY_API_SECRET environment variables
[OUTPUT]: Currency list, quotes and (optionally) a created transaction
[POS]:    Examples - end-to-end exchange flow
[UPDATE]: When the public client surface changes
*/

use changelly_client::*;
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

/// Example: walk through list -> quote -> create -> status.
///
/// Set `CHANGELLY_PAYOUT_ADDRESS` to actually create a transaction; without it
/// the example stops after quoting.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Changelly Exchange Flow Example ===\n");

    let (Ok(api_key), Ok(api_secret)) = (
        std::env::var("CHANGELLY_API_KEY"),
        std::env::var("CHANGELLY_API_SECRET"),
    ) else {
        eprintln!("Set CHANGELLY_API_KEY and CHANGELLY_API_SECRET to run this example");
        return;
    };

    let client = match ChangellyClient::new(api_key, api_secret) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ Client created for {}\n", client.host());

    match client.get_currencies().await {
        Ok(currencies) => println!("✓ {} currencies available", currencies.len()),
        Err(e) => {
            println!("✗ Error: {}", e);
            return;
        }
    }

    let (from, to) = ("btc", "eth");
    let amount = Decimal::ONE;

    match client.get_min_amount(from, to).await {
        Ok(min) => println!("✓ Minimum {from} -> {to}: {min}"),
        Err(e) => println!("✗ Error: {}", e),
    }

    match client.get_exchange_amount(from, to, amount).await {
        Ok(estimate) => println!("✓ {amount} {from} ≈ {estimate} {to}"),
        Err(e) => println!("✗ Error: {}", e),
    }

    let batch = [
        ExchangeAmountRequest::new("btc", "eth", amount),
        ExchangeAmountRequest::new("eth", "ltc", amount),
    ];
    match client.get_bulk_exchange_amount(&batch).await {
        Ok(quotes) => {
            for quote in quotes {
                println!(
                    "✓ {} {} -> {} {} (fee {}, network fee {})",
                    quote.amount, quote.from, quote.result, quote.to, quote.fee, quote.network_fee
                );
            }
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    let Ok(address) = std::env::var("CHANGELLY_PAYOUT_ADDRESS") else {
        println!("\nCHANGELLY_PAYOUT_ADDRESS not set, skipping transaction creation");
        return;
    };

    match client.validate_address(to, &address).await {
        Ok(true) => println!("✓ Payout address is valid"),
        Ok(false) => {
            println!("✗ Payout address rejected for {to}");
            return;
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    let request = CreateTransactionRequest::new(from, to, amount, &address);
    let tx = match client.create_transaction(request).await {
        Ok(tx) => tx,
        Err(e) => {
            println!("✗ Error: {}", e);
            return;
        }
    };
    println!(
        "\n✓ Transaction {} created: send {} {} to {}",
        tx.id, tx.amount_expected_from, tx.currency_from, tx.payin_address
    );

    match client.get_status(&tx.id).await {
        Ok(status) => println!("✓ Status: {status}"),
        Err(e) => println!("✗ Error: {}", e),
    }
}
