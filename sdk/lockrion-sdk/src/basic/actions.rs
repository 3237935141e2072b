use crate::advanced::accounts::{
    ClaimRewardAccounts, DepositAccounts, FundReserveAccounts, InitIssuanceAccounts,
};
use crate::advanced::instructions;
use crate::basic::issuance::Issuance;
use crate::basic::submit::{submit_instruction, SubmitOptions};
use crate::core::connection::SolConnection;
use crate::error::{LockrionSdkError, Result};
use crate::pda;
use crate::state::IssuanceStateV1;
use solana_sdk::instruction::Instruction;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::signer::Signer;

fn required<T>(value: Option<T>, name: &str) -> Result<T> {
    value.ok_or_else(|| LockrionSdkError::Configuration(format!("{} required", name)))
}

/// Explicit token account, or the owner's associated account for `mint`.
fn token_account_or_derived(
    explicit: Option<Pubkey>,
    owner: &Pubkey,
    mint: Option<Pubkey>,
    name: &str,
) -> Result<Pubkey> {
    match (explicit, mint) {
        (Some(account), _) => Ok(account),
        (None, Some(mint)) => Ok(pda::derive_token_account_address(owner, &mint)?.address),
        (None, None) => Err(LockrionSdkError::Configuration(format!(
            "{} required (or a state snapshot to derive it from)",
            name
        ))),
    }
}

//=============================================================================
// InitIssuance
//=============================================================================

pub struct InitIssuanceBuilder<'a> {
    issuance: &'a Issuance,
    maturity_ts: Option<i64>,
    lock_mint: Option<Pubkey>,
    reward_mint: Option<Pubkey>,
    deposit_escrow: Option<Pubkey>,
    reward_escrow: Option<Pubkey>,
    platform_treasury: Option<Pubkey>,
}

impl<'a> InitIssuanceBuilder<'a> {
    pub fn new(issuance: &'a Issuance) -> Self {
        Self {
            issuance,
            maturity_ts: None,
            lock_mint: None,
            reward_mint: None,
            deposit_escrow: None,
            reward_escrow: None,
            platform_treasury: None,
        }
    }

    pub fn with_maturity_ts(mut self, maturity_ts: i64) -> Self {
        self.maturity_ts = Some(maturity_ts);
        self
    }

    pub fn with_lock_mint(mut self, mint: Pubkey) -> Self {
        self.lock_mint = Some(mint);
        self
    }

    pub fn with_reward_mint(mut self, mint: Pubkey) -> Self {
        self.reward_mint = Some(mint);
        self
    }

    pub fn with_deposit_escrow(mut self, escrow: Pubkey) -> Self {
        self.deposit_escrow = Some(escrow);
        self
    }

    pub fn with_reward_escrow(mut self, escrow: Pubkey) -> Self {
        self.reward_escrow = Some(escrow);
        self
    }

    pub fn with_platform_treasury(mut self, treasury: Pubkey) -> Self {
        self.platform_treasury = Some(treasury);
        self
    }

    pub fn accounts(&self) -> Result<InitIssuanceAccounts> {
        Ok(InitIssuanceAccounts {
            payer: self.issuance.issuer,
            issuance_state: self.issuance.address,
            lock_mint: required(self.lock_mint, "Lock mint")?,
            reward_mint: required(self.reward_mint, "Reward mint")?,
            deposit_escrow: required(self.deposit_escrow, "Deposit escrow")?,
            reward_escrow: required(self.reward_escrow, "Reward escrow")?,
            platform_treasury: required(self.platform_treasury, "Platform treasury")?,
        })
    }

    pub fn build_instruction(&self) -> Result<Instruction> {
        let maturity_ts = required(self.maturity_ts, "Maturity timestamp")?;
        Ok(instructions::init_issuance(
            &self.issuance.program_id,
            &self.accounts()?,
            self.issuance.reserve_total,
            self.issuance.start_ts,
            maturity_ts,
        ))
    }

    /// The issuer pays and must be among `signers`.
    pub async fn submit(
        &self,
        connection: &impl SolConnection,
        signers: &[&(dyn Signer + Sync)],
        options: &SubmitOptions,
    ) -> Result<Signature> {
        let ix = self.build_instruction()?;
        submit_instruction(connection, ix, &self.issuance.issuer, signers, options).await
    }
}

//=============================================================================
// FundReserve
//=============================================================================

pub struct FundReserveBuilder<'a> {
    issuance: &'a Issuance,
    amount: Option<u64>,
    issuer_reward_account: Option<Pubkey>,
    reward_escrow: Option<Pubkey>,
    reward_mint: Option<Pubkey>,
}

impl<'a> FundReserveBuilder<'a> {
    pub fn new(issuance: &'a Issuance) -> Self {
        Self {
            issuance,
            amount: None,
            issuer_reward_account: None,
            reward_escrow: None,
            reward_mint: None,
        }
    }

    /// Must equal the issuance's `reserve_total`, or the program rejects it.
    pub fn with_amount(mut self, amount: u64) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn with_issuer_reward_account(mut self, account: Pubkey) -> Self {
        self.issuer_reward_account = Some(account);
        self
    }

    pub fn with_reward_escrow(mut self, escrow: Pubkey) -> Self {
        self.reward_escrow = Some(escrow);
        self
    }

    /// Take the reward escrow and reward mint from a decoded state snapshot.
    pub fn with_state(mut self, state: &IssuanceStateV1) -> Self {
        self.reward_escrow = Some(state.reward_escrow);
        self.reward_mint = Some(state.reward_mint);
        self
    }

    pub fn accounts(&self) -> Result<FundReserveAccounts> {
        let issuer = self.issuance.issuer;
        Ok(FundReserveAccounts {
            issuance_state: self.issuance.address,
            issuer,
            issuer_reward_account: token_account_or_derived(
                self.issuer_reward_account,
                &issuer,
                self.reward_mint,
                "Issuer reward account",
            )?,
            reward_escrow: required(self.reward_escrow, "Reward escrow")?,
        })
    }

    pub fn build_instruction(&self) -> Result<Instruction> {
        let amount = required(self.amount, "Amount")?;
        Ok(instructions::fund_reserve(
            &self.issuance.program_id,
            &self.accounts()?,
            amount,
        ))
    }

    pub async fn submit(
        &self,
        connection: &impl SolConnection,
        signers: &[&(dyn Signer + Sync)],
        options: &SubmitOptions,
    ) -> Result<Signature> {
        let ix = self.build_instruction()?;
        submit_instruction(connection, ix, &self.issuance.issuer, signers, options).await
    }
}

//=============================================================================
// Deposit
//=============================================================================

pub struct DepositBuilder<'a> {
    issuance: &'a Issuance,
    participant: Option<Pubkey>,
    amount: Option<u64>,
    participant_lock_account: Option<Pubkey>,
    deposit_escrow: Option<Pubkey>,
    lock_mint: Option<Pubkey>,
}

impl<'a> DepositBuilder<'a> {
    pub fn new(issuance: &'a Issuance) -> Self {
        Self {
            issuance,
            participant: None,
            amount: None,
            participant_lock_account: None,
            deposit_escrow: None,
            lock_mint: None,
        }
    }

    pub fn with_participant(mut self, participant: Pubkey) -> Self {
        self.participant = Some(participant);
        self
    }

    pub fn with_amount(mut self, amount: u64) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn with_participant_lock_account(mut self, account: Pubkey) -> Self {
        self.participant_lock_account = Some(account);
        self
    }

    pub fn with_deposit_escrow(mut self, escrow: Pubkey) -> Self {
        self.deposit_escrow = Some(escrow);
        self
    }

    /// Take the deposit escrow and lock mint from a decoded state snapshot.
    pub fn with_state(mut self, state: &IssuanceStateV1) -> Self {
        self.deposit_escrow = Some(state.deposit_escrow);
        self.lock_mint = Some(state.lock_mint);
        self
    }

    pub fn accounts(&self) -> Result<DepositAccounts> {
        let participant = required(self.participant, "Participant")?;
        Ok(DepositAccounts {
            issuance_state: self.issuance.address,
            user_state: self.issuance.user_state(&participant)?.address,
            participant,
            participant_lock_account: token_account_or_derived(
                self.participant_lock_account,
                &participant,
                self.lock_mint,
                "Participant lock account",
            )?,
            deposit_escrow: required(self.deposit_escrow, "Deposit escrow")?,
        })
    }

    pub fn build_instruction(&self) -> Result<Instruction> {
        let amount = required(self.amount, "Amount")?;
        Ok(instructions::deposit(
            &self.issuance.program_id,
            &self.accounts()?,
            amount,
        ))
    }

    /// The participant pays and must be among `signers`.
    pub async fn submit(
        &self,
        connection: &impl SolConnection,
        signers: &[&(dyn Signer + Sync)],
        options: &SubmitOptions,
    ) -> Result<Signature> {
        let ix = self.build_instruction()?;
        let payer = required(self.participant, "Participant")?;
        submit_instruction(connection, ix, &payer, signers, options).await
    }
}

//=============================================================================
// ClaimReward
//=============================================================================

pub struct ClaimRewardBuilder<'a> {
    issuance: &'a Issuance,
    participant: Option<Pubkey>,
    participant_reward_account: Option<Pubkey>,
    reward_escrow: Option<Pubkey>,
    reward_mint: Option<Pubkey>,
}

impl<'a> ClaimRewardBuilder<'a> {
    pub fn new(issuance: &'a Issuance) -> Self {
        Self {
            issuance,
            participant: None,
            participant_reward_account: None,
            reward_escrow: None,
            reward_mint: None,
        }
    }

    pub fn with_participant(mut self, participant: Pubkey) -> Self {
        self.participant = Some(participant);
        self
    }

    pub fn with_participant_reward_account(mut self, account: Pubkey) -> Self {
        self.participant_reward_account = Some(account);
        self
    }

    pub fn with_reward_escrow(mut self, escrow: Pubkey) -> Self {
        self.reward_escrow = Some(escrow);
        self
    }

    /// Take the reward escrow and reward mint from a decoded state snapshot.
    pub fn with_state(mut self, state: &IssuanceStateV1) -> Self {
        self.reward_escrow = Some(state.reward_escrow);
        self.reward_mint = Some(state.reward_mint);
        self
    }

    pub fn accounts(&self) -> Result<ClaimRewardAccounts> {
        let participant = required(self.participant, "Participant")?;
        Ok(ClaimRewardAccounts {
            issuance_state: self.issuance.address,
            user_state: self.issuance.user_state(&participant)?.address,
            participant,
            participant_reward_account: token_account_or_derived(
                self.participant_reward_account,
                &participant,
                self.reward_mint,
                "Participant reward account",
            )?,
            reward_escrow: required(self.reward_escrow, "Reward escrow")?,
        })
    }

    pub fn build_instruction(&self) -> Result<Instruction> {
        Ok(instructions::claim_reward(
            &self.issuance.program_id,
            &self.accounts()?,
        ))
    }

    pub async fn submit(
        &self,
        connection: &impl SolConnection,
        signers: &[&(dyn Signer + Sync)],
        options: &SubmitOptions,
    ) -> Result<Signature> {
        let ix = self.build_instruction()?;
        let payer = required(self.participant, "Participant")?;
        submit_instruction(connection, ix, &payer, signers, options).await
    }
}
