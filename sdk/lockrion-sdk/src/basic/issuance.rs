use crate::basic::actions::{
    ClaimRewardBuilder, DepositBuilder, FundReserveBuilder, InitIssuanceBuilder,
};
use crate::core::connection::SolConnection;
use crate::error::{LockrionSdkError, Result};
use crate::pda::{self, DerivedAddress};
use crate::state::IssuanceStateV1;
use crate::utils::{self, IssuanceAccount};
use solana_sdk::pubkey::Pubkey;

/// One issuance of the Lockrion program, identified by its derivation seeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Issuance {
    /// Program ID of the Lockrion deployment
    pub program_id: Pubkey,

    /// Issuance state PDA
    pub address: Pubkey,

    /// Issuance state PDA bump seed
    pub bump: u8,

    /// Issuer; also the payer of InitIssuance
    pub issuer: Pubkey,

    pub start_ts: i64,

    pub reserve_total: u128,
}

impl Issuance {
    /// Derive the issuance address from its seeds. No network access.
    pub fn derive(
        program_id: Pubkey,
        issuer: Pubkey,
        start_ts: i64,
        reserve_total: u128,
    ) -> Result<Self> {
        let DerivedAddress { address, bump } =
            pda::derive_issuance_address(&program_id, &issuer, start_ts, reserve_total)?;

        Ok(Self {
            program_id,
            address,
            bump,
            issuer,
            start_ts,
            reserve_total,
        })
    }

    /// Load an existing issuance by address and check it against its own seeds.
    ///
    /// # Returns
    /// The handle and the account snapshot it was rebuilt from
    pub async fn fetch_at(
        connection: &impl SolConnection,
        program_id: Pubkey,
        address: &Pubkey,
    ) -> Result<(Self, IssuanceAccount)> {
        let account = utils::fetch_issuance_account(connection, address).await?;
        let state = &account.state;
        let issuance = Self::derive(
            program_id,
            state.issuer_address,
            state.start_ts,
            state.reserve_total,
        )?;

        if issuance.address != *address {
            return Err(LockrionSdkError::Configuration(format!(
                "account {} does not match its seeds under program {} (derived {})",
                address, program_id, issuance.address
            )));
        }

        Ok((issuance, account))
    }

    /// Fetch and decode this issuance's state account
    pub async fn fetch(&self, connection: &impl SolConnection) -> Result<IssuanceAccount> {
        utils::fetch_issuance_account(connection, &self.address).await
    }

    pub async fn fetch_state(&self, connection: &impl SolConnection) -> Result<IssuanceStateV1> {
        Ok(self.fetch(connection).await?.state)
    }

    /// User state PDA of `participant` in this issuance
    pub fn user_state(&self, participant: &Pubkey) -> Result<DerivedAddress> {
        pda::derive_user_state_address(&self.program_id, &self.address, participant)
    }

    /// Start building the InitIssuance instruction
    pub fn init(&self) -> InitIssuanceBuilder<'_> {
        InitIssuanceBuilder::new(self)
    }

    pub fn fund_reserve(&self) -> FundReserveBuilder<'_> {
        FundReserveBuilder::new(self)
    }

    pub fn deposit(&self) -> DepositBuilder<'_> {
        DepositBuilder::new(self)
    }

    pub fn claim_reward(&self) -> ClaimRewardBuilder<'_> {
        ClaimRewardBuilder::new(self)
    }
}
