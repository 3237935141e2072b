//! Lockrion instruction payloads
//!
//! Every payload is `[discriminant][fixed-width little-endian fields]` with no
//! padding and no variable-length parts. This is the same byte layout borsh
//! produces for the program's instruction enum, so the program decodes these
//! payloads with its own borsh deserializer.

use crate::error::{LockrionSdkError, Result};
use borsh::{BorshDeserialize, BorshSerialize};

/// Instruction discriminators, in program enum order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum InstructionDiscriminator {
    InitIssuance = 0,
    FundReserve = 1,
    Deposit = 2,
    ClaimReward = 3,
}

impl InstructionDiscriminator {
    /// Total payload width, discriminant byte included.
    pub const fn data_len(self) -> usize {
        match self {
            Self::InitIssuance => 1 + 16 + 8 + 8,
            Self::FundReserve | Self::Deposit => 1 + 8,
            Self::ClaimReward => 1,
        }
    }
}

impl TryFrom<u8> for InstructionDiscriminator {
    type Error = LockrionSdkError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::InitIssuance),
            1 => Ok(Self::FundReserve),
            2 => Ok(Self::Deposit),
            3 => Ok(Self::ClaimReward),
            other => Err(LockrionSdkError::UnknownDiscriminant(other)),
        }
    }
}

#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockrionInstruction {
    /// Create and initialize the issuance state account
    ///
    /// Accounts: see [`crate::advanced::accounts::InitIssuanceAccounts`]
    InitIssuance {
        reserve_total: u128,
        start_ts: i64,
        maturity_ts: i64,
    },

    /// Move the reward reserve into escrow. `amount` must equal `reserve_total`.
    ///
    /// Accounts: see [`crate::advanced::accounts::FundReserveAccounts`]
    FundReserve { amount: u64 },

    /// Lock `amount` of the lock mint
    ///
    /// Accounts: see [`crate::advanced::accounts::DepositAccounts`]
    Deposit { amount: u64 },

    /// Claim the participant's reward after maturity
    ///
    /// Accounts: see [`crate::advanced::accounts::ClaimRewardAccounts`]
    ClaimReward,
}

impl LockrionInstruction {
    pub fn discriminator(&self) -> InstructionDiscriminator {
        match self {
            Self::InitIssuance { .. } => InstructionDiscriminator::InitIssuance,
            Self::FundReserve { .. } => InstructionDiscriminator::FundReserve,
            Self::Deposit { .. } => InstructionDiscriminator::Deposit,
            Self::ClaimReward => InstructionDiscriminator::ClaimReward,
        }
    }

    /// Encode into the exact wire bytes.
    pub fn pack(&self) -> Vec<u8> {
        let discriminator = self.discriminator();
        let mut data = Vec::with_capacity(discriminator.data_len());
        data.push(discriminator as u8);

        match *self {
            Self::InitIssuance {
                reserve_total,
                start_ts,
                maturity_ts,
            } => {
                data.extend_from_slice(&reserve_total.to_le_bytes());
                data.extend_from_slice(&start_ts.to_le_bytes());
                data.extend_from_slice(&maturity_ts.to_le_bytes());
            },
            Self::FundReserve { amount } | Self::Deposit { amount } => {
                data.extend_from_slice(&amount.to_le_bytes());
            },
            Self::ClaimReward => {},
        }

        data
    }

    /// Decode wire bytes, rejecting unknown discriminants and any width mismatch.
    pub fn unpack(data: &[u8]) -> Result<Self> {
        let (&tag, _) = data
            .split_first()
            .ok_or(LockrionSdkError::EmptyInstruction)?;
        let discriminator = InstructionDiscriminator::try_from(tag)?;

        let expected = discriminator.data_len();
        if data.len() != expected {
            return Err(LockrionSdkError::Encoding {
                discriminant: tag,
                expected,
                actual: data.len(),
            });
        }

        borsh::from_slice(data).map_err(|_| LockrionSdkError::Encoding {
            discriminant: tag,
            expected,
            actual: data.len(),
        })
    }
}
