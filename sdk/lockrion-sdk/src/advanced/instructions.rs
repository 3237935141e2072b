use crate::advanced::accounts::{
    ClaimRewardAccounts, DepositAccounts, FundReserveAccounts, InitIssuanceAccounts,
    InstructionAccounts,
};
use crate::error::{LockrionSdkError, Result};
use crate::instruction::LockrionInstruction;
use solana_sdk::instruction::Instruction;
use solana_sdk::pubkey::Pubkey;

/// Pair an instruction payload with its account list.
///
/// Fails when the account list belongs to a different variant than `instruction`.
pub fn build<A: InstructionAccounts>(
    program_id: &Pubkey,
    accounts: &A,
    instruction: &LockrionInstruction,
) -> Result<Instruction> {
    if instruction.discriminator() != A::DISCRIMINATOR {
        return Err(LockrionSdkError::Configuration(format!(
            "{:?} accounts supplied for {:?} instruction",
            A::DISCRIMINATOR,
            instruction.discriminator()
        )));
    }

    Ok(Instruction {
        program_id: *program_id,
        accounts: accounts.to_account_metas(),
        data: instruction.pack(),
    })
}

pub fn init_issuance(
    program_id: &Pubkey,
    accounts: &InitIssuanceAccounts,
    reserve_total: u128,
    start_ts: i64,
    maturity_ts: i64,
) -> Instruction {
    let instruction = LockrionInstruction::InitIssuance {
        reserve_total,
        start_ts,
        maturity_ts,
    };

    Instruction {
        program_id: *program_id,
        accounts: accounts.to_account_metas(),
        data: instruction.pack(),
    }
}

pub fn fund_reserve(program_id: &Pubkey, accounts: &FundReserveAccounts, amount: u64) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: accounts.to_account_metas(),
        data: LockrionInstruction::FundReserve { amount }.pack(),
    }
}

pub fn deposit(program_id: &Pubkey, accounts: &DepositAccounts, amount: u64) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: accounts.to_account_metas(),
        data: LockrionInstruction::Deposit { amount }.pack(),
    }
}

pub fn claim_reward(program_id: &Pubkey, accounts: &ClaimRewardAccounts) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: accounts.to_account_metas(),
        data: LockrionInstruction::ClaimReward.pack(),
    }
}
