#![allow(dead_code)]

use async_trait::async_trait;
use lockrion_sdk::core::constants::ISSUANCE_STATE_SIZE;
use lockrion_sdk::{LockrionSdkError, Result, SolConnection};
use solana_sdk::{
    account::Account,
    commitment_config::CommitmentConfig,
    hash::Hash,
    pubkey::Pubkey,
    signature::Signature,
    transaction::{Transaction, TransactionError},
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Mutex;

/// What `get_transaction_logs` answers with.
pub enum LogsReply {
    Logs(Vec<String>),
    Missing,
    Unreachable,
}

/// In-memory stand-in for an RPC node.
///
/// Statuses are served after `pending_polls` empty answers; `None` means the
/// transaction never lands.
pub struct MockConnection {
    pub accounts: Mutex<HashMap<Pubkey, Account>>,
    pub blockhash: Hash,
    pub send_error: Mutex<Option<LockrionSdkError>>,
    pub final_status: Option<std::result::Result<(), TransactionError>>,
    pub pending_polls: usize,
    pub logs: LogsReply,
    pub sent: Mutex<Vec<Transaction>>,
    pub status_polls: AtomicUsize,
    pub log_requests: AtomicUsize,
    pub log_commitment: Mutex<Option<CommitmentConfig>>,
}

impl MockConnection {
    pub fn new() -> Self {
        Self {
            accounts: Mutex::new(HashMap::new()),
            blockhash: Hash::new_unique(),
            send_error: Mutex::new(None),
            final_status: Some(Ok(())),
            pending_polls: 0,
            logs: LogsReply::Missing,
            sent: Mutex::new(Vec::new()),
            status_polls: AtomicUsize::new(0),
            log_requests: AtomicUsize::new(0),
            log_commitment: Mutex::new(None),
        }
    }

    pub fn with_status(mut self, status: Option<std::result::Result<(), TransactionError>>) -> Self {
        self.final_status = status;
        self
    }

    pub fn with_pending_polls(mut self, polls: usize) -> Self {
        self.pending_polls = polls;
        self
    }

    pub fn with_logs(mut self, logs: LogsReply) -> Self {
        self.logs = logs;
        self
    }

    pub fn with_send_error(self, err: LockrionSdkError) -> Self {
        *self.send_error.try_lock().unwrap() = Some(err);
        self
    }

    pub async fn insert_account(&self, address: Pubkey, owner: Pubkey, data: Vec<u8>) {
        self.accounts.lock().await.insert(
            address,
            Account {
                lamports: 1_000_000,
                data,
                owner,
                executable: false,
                rent_epoch: 0,
            },
        );
    }

    pub async fn sent_count(&self) -> usize {
        self.sent.lock().await.len()
    }
}

#[async_trait]
impl SolConnection for MockConnection {
    async fn get_account(&self, pubkey: &Pubkey) -> Result<Option<Account>> {
        Ok(self.accounts.lock().await.get(pubkey).cloned())
    }

    async fn get_latest_blockhash(&self) -> Result<Hash> {
        Ok(self.blockhash)
    }

    async fn send_transaction(&self, tx: &Transaction) -> Result<Signature> {
        self.sent.lock().await.push(tx.clone());
        if let Some(err) = self.send_error.lock().await.take() {
            return Err(err);
        }
        tx.signatures
            .first()
            .copied()
            .ok_or_else(|| LockrionSdkError::Network("unsigned transaction".to_string()))
    }

    async fn get_signature_status(
        &self,
        _signature: &Signature,
        _commitment: CommitmentConfig,
    ) -> Result<Option<std::result::Result<(), TransactionError>>> {
        let polls = self.status_polls.fetch_add(1, Ordering::SeqCst);
        if polls < self.pending_polls {
            return Ok(None);
        }
        Ok(self.final_status.clone())
    }

    async fn get_transaction_logs(
        &self,
        _signature: &Signature,
        commitment: CommitmentConfig,
    ) -> Result<Option<Vec<String>>> {
        self.log_requests.fetch_add(1, Ordering::SeqCst);
        *self.log_commitment.lock().await = Some(commitment);
        match &self.logs {
            LogsReply::Logs(lines) => Ok(Some(lines.clone())),
            LogsReply::Missing => Ok(None),
            LogsReply::Unreachable => Err(LockrionSdkError::Network(
                "connection refused".to_string(),
            )),
        }
    }
}

/// Field values for a layout-v1 IssuanceState buffer.
#[derive(Clone)]
pub struct IssuanceFixture {
    pub version: u8,
    pub bump: u8,
    pub issuer_address: Pubkey,
    pub lock_mint: Pubkey,
    pub reward_mint: Pubkey,
    pub deposit_escrow: Pubkey,
    pub reward_escrow: Pubkey,
    pub platform_treasury: Pubkey,
    pub reserve_total: u128,
    pub start_ts: i64,
    pub maturity_ts: i64,
    pub claim_window: i64,
    pub final_day_index: u64,
    pub total_locked: u128,
    pub total_weight_accum: u128,
    pub last_day_index: u64,
    pub reserve_funded: u8,
}

impl IssuanceFixture {
    pub fn new() -> Self {
        Self {
            version: 1,
            bump: 254,
            issuer_address: Pubkey::new_unique(),
            lock_mint: Pubkey::new_unique(),
            reward_mint: Pubkey::new_unique(),
            deposit_escrow: Pubkey::new_unique(),
            reward_escrow: Pubkey::new_unique(),
            platform_treasury: Pubkey::new_unique(),
            reserve_total: 1_000_000,
            start_ts: 1_700_000_000,
            maturity_ts: 1_700_000_000 + 30 * 86_400,
            claim_window: 90 * 86_400,
            final_day_index: 30,
            total_locked: 0,
            total_weight_accum: 0,
            last_day_index: 0,
            reserve_funded: 0,
        }
    }

    /// Full 292-byte account image, written at the program's offsets.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut data = vec![0u8; ISSUANCE_STATE_SIZE];
        data[0] = self.version;
        data[1] = self.bump;
        data[2..34].copy_from_slice(self.issuer_address.as_ref());
        data[34..66].copy_from_slice(self.lock_mint.as_ref());
        data[66..98].copy_from_slice(self.reward_mint.as_ref());
        data[98..130].copy_from_slice(self.deposit_escrow.as_ref());
        data[130..162].copy_from_slice(self.reward_escrow.as_ref());
        data[162..194].copy_from_slice(self.platform_treasury.as_ref());
        data[194..210].copy_from_slice(&self.reserve_total.to_le_bytes());
        data[210..218].copy_from_slice(&self.start_ts.to_le_bytes());
        data[218..226].copy_from_slice(&self.maturity_ts.to_le_bytes());
        data[226..234].copy_from_slice(&self.claim_window.to_le_bytes());
        data[234..242].copy_from_slice(&self.final_day_index.to_le_bytes());
        data[242..258].copy_from_slice(&self.total_locked.to_le_bytes());
        data[258..274].copy_from_slice(&self.total_weight_accum.to_le_bytes());
        data[274..282].copy_from_slice(&self.last_day_index.to_le_bytes());
        data[282] = self.reserve_funded;
        data
    }
}
