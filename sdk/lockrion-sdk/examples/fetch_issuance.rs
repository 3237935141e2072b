// Example: Fetching an issuance and printing its decoded state
//
// This example demonstrates how to:
// 1. Load connection settings from the environment
// 2. Fetch an issuance by its state address and check it against its seeds
// 3. Print the decoded state as JSON
//
// Usage: PROGRAM_ID=<program> cargo run --example fetch_issuance -- <issuance address>

use anyhow::Context;
use lockrion_sdk::{ClientConfig, Issuance};
use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // 1. RPC_URL, PROGRAM_ID, COMMITMENT ...
    let config = ClientConfig::from_env()?;
    let address = std::env::args()
        .nth(1)
        .context("usage: fetch_issuance <issuance address>")?;
    let address = Pubkey::from_str(&address)?;

    // 2. Fetch and verify
    let connection = config.connect();
    let (issuance, account) = Issuance::fetch_at(&connection, config.program_id, &address).await?;

    println!("Issuance {}", issuance.address);
    println!("  Issuer: {}", issuance.issuer);
    println!("  Owner program matches: {}", account.is_owned_by(&config.program_id));
    println!("  Lamports: {}", account.lamports);

    // 3. Decoded state
    println!("{}", serde_json::to_string_pretty(&account.state)?);
    if let Some(end) = account.state.claim_window_end() {
        println!("Claim window closes at {}", end);
    }

    Ok(())
}
