//! Positional account lists, one type per instruction.
//!
//! The program reads accounts by index, so the order of `to_account_metas` is
//! part of the wire contract together with the signer/writable flags.

use crate::core::constants::{SYSTEM_PROGRAM_ID, TOKEN_PROGRAM_ID};
use crate::instruction::InstructionDiscriminator;
use solana_sdk::instruction::AccountMeta;
use solana_sdk::pubkey::Pubkey;

/// Ordered accounts for one instruction variant.
pub trait InstructionAccounts {
    const DISCRIMINATOR: InstructionDiscriminator;

    fn to_account_metas(&self) -> Vec<AccountMeta>;
}

/// Accounts:
/// 0. `[writable, signer]` Payer (becomes the issuer)
/// 1. `[writable]` Issuance state (PDA: ["issuance", payer, start_ts, reserve_total])
/// 2. `[]` Lock mint
/// 3. `[]` Reward mint
/// 4. `[]` Deposit escrow
/// 5. `[]` Reward escrow
/// 6. `[]` Platform treasury
/// 7. `[]` System program
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitIssuanceAccounts {
    pub payer: Pubkey,
    pub issuance_state: Pubkey,
    pub lock_mint: Pubkey,
    pub reward_mint: Pubkey,
    pub deposit_escrow: Pubkey,
    pub reward_escrow: Pubkey,
    pub platform_treasury: Pubkey,
}

impl InstructionAccounts for InitIssuanceAccounts {
    const DISCRIMINATOR: InstructionDiscriminator = InstructionDiscriminator::InitIssuance;

    fn to_account_metas(&self) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.payer, true),
            AccountMeta::new(self.issuance_state, false),
            AccountMeta::new_readonly(self.lock_mint, false),
            AccountMeta::new_readonly(self.reward_mint, false),
            AccountMeta::new_readonly(self.deposit_escrow, false),
            AccountMeta::new_readonly(self.reward_escrow, false),
            AccountMeta::new_readonly(self.platform_treasury, false),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
        ]
    }
}

/// Accounts:
/// 0. `[writable]` Issuance state
/// 1. `[signer]` Issuer
/// 2. `[writable]` Issuer reward token account
/// 3. `[writable]` Reward escrow
/// 4. `[]` Token program
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FundReserveAccounts {
    pub issuance_state: Pubkey,
    pub issuer: Pubkey,
    pub issuer_reward_account: Pubkey,
    pub reward_escrow: Pubkey,
}

impl InstructionAccounts for FundReserveAccounts {
    const DISCRIMINATOR: InstructionDiscriminator = InstructionDiscriminator::FundReserve;

    fn to_account_metas(&self) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.issuance_state, false),
            AccountMeta::new_readonly(self.issuer, true),
            AccountMeta::new(self.issuer_reward_account, false),
            AccountMeta::new(self.reward_escrow, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        ]
    }
}

/// Accounts:
/// 0. `[writable]` Issuance state
/// 1. `[writable]` User state (PDA: ["user", issuance, participant])
/// 2. `[signer]` Participant
/// 3. `[writable]` Participant lock token account
/// 4. `[writable]` Deposit escrow
/// 5. `[]` Token program
/// 6. `[]` System program
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositAccounts {
    pub issuance_state: Pubkey,
    pub user_state: Pubkey,
    pub participant: Pubkey,
    pub participant_lock_account: Pubkey,
    pub deposit_escrow: Pubkey,
}

impl InstructionAccounts for DepositAccounts {
    const DISCRIMINATOR: InstructionDiscriminator = InstructionDiscriminator::Deposit;

    fn to_account_metas(&self) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.issuance_state, false),
            AccountMeta::new(self.user_state, false),
            AccountMeta::new_readonly(self.participant, true),
            AccountMeta::new(self.participant_lock_account, false),
            AccountMeta::new(self.deposit_escrow, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
        ]
    }
}

/// Accounts:
/// 0. `[writable]` Issuance state
/// 1. `[writable]` User state
/// 2. `[signer]` Participant
/// 3. `[writable]` Participant reward token account
/// 4. `[writable]` Reward escrow
/// 5. `[]` Token program
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClaimRewardAccounts {
    pub issuance_state: Pubkey,
    pub user_state: Pubkey,
    pub participant: Pubkey,
    pub participant_reward_account: Pubkey,
    pub reward_escrow: Pubkey,
}

impl InstructionAccounts for ClaimRewardAccounts {
    const DISCRIMINATOR: InstructionDiscriminator = InstructionDiscriminator::ClaimReward;

    fn to_account_metas(&self) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.issuance_state, false),
            AccountMeta::new(self.user_state, false),
            AccountMeta::new_readonly(self.participant, true),
            AccountMeta::new(self.participant_reward_account, false),
            AccountMeta::new(self.reward_escrow, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        ]
    }
}
