use crate::error::{LockrionSdkError, Result};
use async_trait::async_trait;
use solana_client::client_error::{ClientError, ClientErrorKind};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_client::rpc_config::RpcTransactionConfig;
use solana_client::rpc_request::{RpcError, RpcResponseErrorData};
use solana_sdk::account::Account;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::{Transaction, TransactionError};
use solana_transaction_status_client_types::UiTransactionEncoding;

/// The RPC surface the SDK consumes.
///
/// Implementations map transport failures to [`LockrionSdkError::Network`] and
/// program rejections to [`LockrionSdkError::ProgramExecution`].
#[async_trait]
pub trait SolConnection: Send + Sync {
    /// Account data and owner, or `None` when the address holds no account.
    async fn get_account(&self, pubkey: &Pubkey) -> Result<Option<Account>>;

    async fn get_latest_blockhash(&self) -> Result<Hash>;

    async fn send_transaction(&self, tx: &Transaction) -> Result<Signature>;

    /// `None` while the signature has not reached `commitment`.
    async fn get_signature_status(
        &self,
        signature: &Signature,
        commitment: CommitmentConfig,
    ) -> Result<Option<std::result::Result<(), TransactionError>>>;

    /// Program log lines recorded for a landed transaction, as seen at `commitment`.
    async fn get_transaction_logs(
        &self,
        signature: &Signature,
        commitment: CommitmentConfig,
    ) -> Result<Option<Vec<String>>>;
}

#[async_trait]
impl SolConnection for RpcClient {
    async fn get_account(&self, pubkey: &Pubkey) -> Result<Option<Account>> {
        self.get_account_with_commitment(pubkey, self.commitment())
            .await
            .map(|response| response.value)
            .map_err(network_error)
    }

    async fn get_latest_blockhash(&self) -> Result<Hash> {
        RpcClient::get_latest_blockhash(self)
            .await
            .map_err(network_error)
    }

    async fn send_transaction(&self, tx: &Transaction) -> Result<Signature> {
        RpcClient::send_transaction(self, tx)
            .await
            .map_err(|err| send_error(tx.signatures.first().copied(), err))
    }

    async fn get_signature_status(
        &self,
        signature: &Signature,
        commitment: CommitmentConfig,
    ) -> Result<Option<std::result::Result<(), TransactionError>>> {
        self.get_signature_status_with_commitment(signature, commitment)
            .await
            .map_err(network_error)
    }

    async fn get_transaction_logs(
        &self,
        signature: &Signature,
        commitment: CommitmentConfig,
    ) -> Result<Option<Vec<String>>> {
        let config = RpcTransactionConfig {
            encoding: Some(UiTransactionEncoding::Json),
            commitment: Some(log_query_commitment(commitment)),
            max_supported_transaction_version: Some(0),
        };
        let tx = self
            .get_transaction_with_config(signature, config)
            .await
            .map_err(network_error)?;

        Ok(tx
            .transaction
            .meta
            .and_then(|meta| Option::<Vec<String>>::from(meta.log_messages)))
    }
}

/// getTransaction does not serve `processed`.
fn log_query_commitment(commitment: CommitmentConfig) -> CommitmentConfig {
    if commitment.is_at_least_confirmed() {
        commitment
    } else {
        CommitmentConfig::confirmed()
    }
}

fn network_error(err: ClientError) -> LockrionSdkError {
    LockrionSdkError::Network(err.to_string())
}

/// A preflight rejection already carries the simulated program logs.
fn send_error(signature: Option<Signature>, err: ClientError) -> LockrionSdkError {
    if let ClientErrorKind::RpcError(RpcError::RpcResponseError {
        message,
        data: RpcResponseErrorData::SendTransactionPreflightFailure(simulation),
        ..
    }) = err.kind()
    {
        return LockrionSdkError::ProgramExecution {
            signature,
            message: message.clone(),
            logs: simulation.logs.clone().unwrap_or_default(),
        };
    }

    match err.get_transaction_error() {
        Some(tx_err) => LockrionSdkError::ProgramExecution {
            signature,
            message: tx_err.to_string(),
            logs: Vec::new(),
        },
        None => network_error(err),
    }
}
