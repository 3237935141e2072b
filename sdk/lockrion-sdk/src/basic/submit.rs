use crate::core::connection::SolConnection;
use crate::error::{LockrionSdkError, Result};
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::instruction::Instruction;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::signer::Signer;
use solana_sdk::transaction::{Transaction, TransactionError};
use std::time::Duration;
use tracing::{debug, warn};

/// How long and at what commitment to wait for a submitted transaction.
///
/// Program logs of a failed transaction are looked up at `commitment`, raised
/// to `confirmed` when it is `processed`. At `processed` the failure is seen
/// before the transaction is confirmed, so the error may come back without logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitOptions {
    pub commitment: CommitmentConfig,
    pub confirm_timeout: Duration,
    pub poll_interval: Duration,
}

impl Default for SubmitOptions {
    fn default() -> Self {
        Self {
            commitment: CommitmentConfig::confirmed(),
            confirm_timeout: Duration::from_secs(30),
            poll_interval: Duration::from_millis(500),
        }
    }
}

/// Sign, send and confirm a single instruction.
pub async fn submit_instruction(
    connection: &impl SolConnection,
    instruction: Instruction,
    payer: &Pubkey,
    signers: &[&(dyn Signer + Sync)],
    options: &SubmitOptions,
) -> Result<Signature> {
    submit_transaction(connection, &[instruction], payer, signers, options).await
}

/// Sign, send and confirm `instructions` as one transaction.
///
/// One call sends at most once; retries are left to the caller. When the
/// program rejects the transaction the returned
/// [`LockrionSdkError::ProgramExecution`] carries its log lines if they could
/// be retrieved, and is otherwise returned without them.
pub async fn submit_transaction(
    connection: &impl SolConnection,
    instructions: &[Instruction],
    payer: &Pubkey,
    signers: &[&(dyn Signer + Sync)],
    options: &SubmitOptions,
) -> Result<Signature> {
    if instructions.is_empty() {
        return Err(LockrionSdkError::Configuration(
            "transaction has no instructions".to_string(),
        ));
    }
    if signers.is_empty() {
        return Err(LockrionSdkError::Configuration(
            "at least one signer is required".to_string(),
        ));
    }

    let recent_blockhash = connection.get_latest_blockhash().await?;

    let mut tx = Transaction::new_with_payer(instructions, Some(payer));
    tx.try_sign(signers, recent_blockhash).map_err(|e| {
        LockrionSdkError::Configuration(format!("Failed to sign transaction: {}", e))
    })?;

    let signature = connection.send_transaction(&tx).await?;
    debug!(%signature, "transaction sent");

    match wait_for_status(connection, &signature, options).await? {
        Ok(()) => {
            debug!(%signature, commitment = ?options.commitment.commitment, "transaction confirmed");
            Ok(signature)
        },
        Err(tx_err) => {
            Err(program_failure(connection, signature, tx_err, options.commitment).await)
        },
    }
}

async fn wait_for_status(
    connection: &impl SolConnection,
    signature: &Signature,
    options: &SubmitOptions,
) -> Result<std::result::Result<(), TransactionError>> {
    tokio::time::timeout(
        options.confirm_timeout,
        poll_status(connection, signature, options),
    )
    .await
    .map_err(|_| {
        LockrionSdkError::Network(format!(
            "transaction {} not confirmed at {:?} within {:?}",
            signature, options.commitment.commitment, options.confirm_timeout
        ))
    })?
}

async fn poll_status(
    connection: &impl SolConnection,
    signature: &Signature,
    options: &SubmitOptions,
) -> Result<std::result::Result<(), TransactionError>> {
    loop {
        if let Some(status) = connection
            .get_signature_status(signature, options.commitment)
            .await?
        {
            return Ok(status);
        }
        tokio::time::sleep(options.poll_interval).await;
    }
}

async fn program_failure(
    connection: &impl SolConnection,
    signature: Signature,
    tx_err: TransactionError,
    commitment: CommitmentConfig,
) -> LockrionSdkError {
    let logs = match connection
        .get_transaction_logs(&signature, commitment)
        .await
    {
        Ok(logs) => logs.unwrap_or_default(),
        Err(err) => {
            warn!(%signature, %err, "could not fetch program logs");
            Vec::new()
        },
    };

    LockrionSdkError::ProgramExecution {
        signature: Some(signature),
        message: tx_err.to_string(),
        logs,
    }
}
