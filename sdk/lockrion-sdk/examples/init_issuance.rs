// Example: Creating and funding an issuance
//
// This example demonstrates how to:
// 1. Derive the issuance address from issuer, start time and reserve
// 2. Submit InitIssuance with the pre-created escrows
// 3. Fund the reward reserve from the issuer's associated token account
//
// The mints, escrow token accounts and platform treasury must already exist.

use anyhow::{anyhow, Context};
use lockrion_sdk::{ClientConfig, Issuance};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::read_keypair_file;
use solana_sdk::signer::Signer;
use std::str::FromStr;

fn pubkey_var(key: &str) -> anyhow::Result<Pubkey> {
    let value = std::env::var(key).with_context(|| format!("{} is not set", key))?;
    Pubkey::from_str(&value).with_context(|| format!("{} is not a valid address", key))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = ClientConfig::from_env()?;
    let keypair_path = std::env::var("KEYPAIR").context("KEYPAIR is not set")?;
    let issuer = read_keypair_file(&keypair_path)
        .map_err(|e| anyhow!("reading {}: {}", keypair_path, e))?;

    let reserve_total: u64 = 1_000_000;
    let start_ts: i64 = 1_700_000_000;
    let maturity_ts: i64 = start_ts + 30 * 86_400;

    // 1. Derive
    let issuance = Issuance::derive(
        config.program_id,
        issuer.pubkey(),
        start_ts,
        u128::from(reserve_total),
    )?;
    println!("Issuance {} (bump {})", issuance.address, issuance.bump);

    // 2. Init
    let connection = config.connect();
    let options = config.submit_options();
    let signature = issuance
        .init()
        .with_maturity_ts(maturity_ts)
        .with_lock_mint(pubkey_var("LOCK_MINT")?)
        .with_reward_mint(pubkey_var("REWARD_MINT")?)
        .with_deposit_escrow(pubkey_var("DEPOSIT_ESCROW")?)
        .with_reward_escrow(pubkey_var("REWARD_ESCROW")?)
        .with_platform_treasury(pubkey_var("PLATFORM_TREASURY")?)
        .submit(&connection, &[&issuer], &options)
        .await?;
    println!("Initialized: {}", signature);

    // 3. Fund the full reserve
    let state = issuance.fetch_state(&connection).await?;
    let signature = issuance
        .fund_reserve()
        .with_state(&state)
        .with_amount(reserve_total)
        .submit(&connection, &[&issuer], &options)
        .await?;
    println!("Reserve funded: {}", signature);

    Ok(())
}
