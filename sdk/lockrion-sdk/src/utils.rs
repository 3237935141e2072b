use crate::core::connection::SolConnection;
use crate::error::{LockrionSdkError, Result};
use crate::state::IssuanceStateV1;
use solana_sdk::account::Account;
use solana_sdk::pubkey::Pubkey;

/// A decoded issuance account together with the chain metadata it was read with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuanceAccount {
    pub address: Pubkey,
    pub owner: Pubkey,
    pub lamports: u64,
    pub state: IssuanceStateV1,
}

impl IssuanceAccount {
    pub fn is_owned_by(&self, program_id: &Pubkey) -> bool {
        self.owner == *program_id
    }
}

//=============================================================================
// Account Fetching & Parsing
//=============================================================================

/// Fetch an account, treating an empty address as [`LockrionSdkError::AccountNotFound`].
pub async fn fetch_account(connection: &impl SolConnection, address: &Pubkey) -> Result<Account> {
    connection
        .get_account(address)
        .await?
        .ok_or(LockrionSdkError::AccountNotFound(*address))
}

/// Fetch and decode an issuance state account
pub async fn fetch_issuance_account(
    connection: &impl SolConnection,
    address: &Pubkey,
) -> Result<IssuanceAccount> {
    let account = fetch_account(connection, address).await?;
    let state = IssuanceStateV1::unpack(&account.data)?;

    Ok(IssuanceAccount {
        address: *address,
        owner: account.owner,
        lamports: account.lamports,
        state,
    })
}
