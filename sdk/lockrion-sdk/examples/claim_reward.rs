// Example: Claiming a participant's reward
//
// This example demonstrates how to:
// 1. Rebuild an issuance handle from its on-chain state
// 2. Build a ClaimReward instruction, deriving the user state PDA and
//    the participant's associated reward token account
// 3. Submit it and surface the program logs on failure
//
// Usage: PROGRAM_ID=<program> KEYPAIR=<path> cargo run --example claim_reward -- <issuance address>

use anyhow::{anyhow, Context};
use lockrion_sdk::{ClientConfig, Issuance, LockrionSdkError};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::read_keypair_file;
use solana_sdk::signer::Signer;
use std::str::FromStr;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = ClientConfig::from_env()?;
    let keypair_path = std::env::var("KEYPAIR").context("KEYPAIR is not set")?;
    let participant = read_keypair_file(&keypair_path)
        .map_err(|e| anyhow!("reading {}: {}", keypair_path, e))?;
    let address = std::env::args()
        .nth(1)
        .context("usage: claim_reward <issuance address>")?;
    let address = Pubkey::from_str(&address)?;

    // 1. Issuance handle and state snapshot
    let connection = config.connect();
    let (issuance, account) = Issuance::fetch_at(&connection, config.program_id, &address).await?;

    // 2. Build
    let builder = issuance
        .claim_reward()
        .with_state(&account.state)
        .with_participant(participant.pubkey());
    let accounts = builder.accounts()?;
    println!("Claiming from issuance {}", issuance.address);
    println!("  User state: {}", accounts.user_state);
    println!("  Reward account: {}", accounts.participant_reward_account);

    // 3. Submit
    match builder
        .submit(&connection, &[&participant], &config.submit_options())
        .await
    {
        Ok(signature) => println!("Claimed: {}", signature),
        Err(err @ LockrionSdkError::ProgramExecution { .. }) => {
            for line in err.logs() {
                eprintln!("  {}", line);
            }
            return Err(err.into());
        },
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
