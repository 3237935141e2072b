use crate::basic::submit::SubmitOptions;
use crate::error::{LockrionSdkError, Result};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;
use std::time::Duration;

/// Connection and confirmation settings for one deployment of the program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub rpc_url: String,
    pub program_id: Pubkey,
    pub commitment: CommitmentConfig,
    pub confirm_timeout: Duration,
    pub poll_interval: Duration,
}

impl ClientConfig {
    pub const DEFAULT_RPC_URL: &'static str = "http://127.0.0.1:8899";

    pub fn new(program_id: Pubkey) -> Self {
        let submit = SubmitOptions::default();
        Self {
            rpc_url: Self::DEFAULT_RPC_URL.to_string(),
            program_id,
            commitment: submit.commitment,
            confirm_timeout: submit.confirm_timeout,
            poll_interval: submit.poll_interval,
        }
    }

    /// Read `PROGRAM_ID` (required), `RPC_URL`, `COMMITMENT`,
    /// `CONFIRM_TIMEOUT_MS` and `POLL_INTERVAL_MS` from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] with a caller-supplied variable source.
    /// Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let program_id = var("PROGRAM_ID")
            .ok_or_else(|| LockrionSdkError::Configuration("PROGRAM_ID is not set".to_string()))?;
        let program_id = Pubkey::from_str(&program_id).map_err(|e| {
            LockrionSdkError::Configuration(format!("PROGRAM_ID {:?}: {}", program_id, e))
        })?;

        let mut config = Self::new(program_id);

        if let Some(url) = var("RPC_URL") {
            config.rpc_url = url;
        }
        if let Some(commitment) = var("COMMITMENT") {
            config.commitment = parse_commitment(&commitment)?;
        }
        if let Some(ms) = var("CONFIRM_TIMEOUT_MS") {
            config.confirm_timeout = parse_millis("CONFIRM_TIMEOUT_MS", &ms)?;
        }
        if let Some(ms) = var("POLL_INTERVAL_MS") {
            config.poll_interval = parse_millis("POLL_INTERVAL_MS", &ms)?;
        }

        Ok(config)
    }

    pub fn submit_options(&self) -> SubmitOptions {
        SubmitOptions {
            commitment: self.commitment,
            confirm_timeout: self.confirm_timeout,
            poll_interval: self.poll_interval,
        }
    }

    /// Open a nonblocking RPC client. The client is closed when dropped.
    pub fn connect(&self) -> RpcClient {
        RpcClient::new_with_commitment(self.rpc_url.clone(), self.commitment)
    }
}

/// Only the three levels the confirmation path understands.
fn parse_commitment(value: &str) -> Result<CommitmentConfig> {
    match value {
        "processed" => Ok(CommitmentConfig::processed()),
        "confirmed" => Ok(CommitmentConfig::confirmed()),
        "finalized" => Ok(CommitmentConfig::finalized()),
        other => Err(LockrionSdkError::Configuration(format!(
            "COMMITMENT must be processed, confirmed or finalized, got {:?}",
            other
        ))),
    }
}

fn parse_millis(key: &str, value: &str) -> Result<Duration> {
    value
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|e| LockrionSdkError::Configuration(format!("{} {:?}: {}", key, value, e)))
}
