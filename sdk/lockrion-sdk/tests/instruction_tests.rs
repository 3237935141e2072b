use lockrion_sdk::advanced::accounts::{
    ClaimRewardAccounts, DepositAccounts, FundReserveAccounts, InitIssuanceAccounts,
    InstructionAccounts,
};
use lockrion_sdk::advanced::instructions;
use lockrion_sdk::core::constants::{SYSTEM_PROGRAM_ID, TOKEN_PROGRAM_ID};
use lockrion_sdk::{InstructionDiscriminator, LockrionInstruction, LockrionSdkError};
use solana_sdk::instruction::AccountMeta;
use solana_sdk::pubkey::Pubkey;

fn all_variants() -> Vec<LockrionInstruction> {
    vec![
        LockrionInstruction::InitIssuance {
            reserve_total: u128::from(u64::MAX) + 7,
            start_ts: -42,
            maturity_ts: 1_800_000_000,
        },
        LockrionInstruction::FundReserve { amount: 1_000_000 },
        LockrionInstruction::Deposit { amount: 250 },
        LockrionInstruction::ClaimReward,
    ]
}

#[test_log::test]
fn test_fund_reserve_wire_bytes() {
    let data = LockrionInstruction::FundReserve { amount: 500 }.pack();
    assert_eq!(data, vec![0x01, 0xF4, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]);
}

#[test_log::test]
fn test_claim_reward_wire_bytes() {
    assert_eq!(LockrionInstruction::ClaimReward.pack(), vec![0x03]);
}

#[test_log::test]
fn test_init_issuance_wire_layout() {
    let reserve_total: u128 = (5u128 << 64) | 1000;
    let data = LockrionInstruction::InitIssuance {
        reserve_total,
        start_ts: 1_700_000_000,
        maturity_ts: -1,
    }
    .pack();

    assert_eq!(data.len(), 33);
    assert_eq!(data[0], 0);
    // u128 as two LE halves: low then high
    assert_eq!(&data[1..9], &1000u64.to_le_bytes());
    assert_eq!(&data[9..17], &5u64.to_le_bytes());
    assert_eq!(&data[17..25], &1_700_000_000i64.to_le_bytes());
    assert_eq!(&data[25..33], &[0xFF; 8]);
}

#[test_log::test]
fn test_fixed_widths() {
    let widths: Vec<usize> = all_variants().iter().map(|ix| ix.pack().len()).collect();
    assert_eq!(widths, vec![33, 9, 9, 1]);

    for ix in all_variants() {
        assert_eq!(ix.pack().len(), ix.discriminator().data_len());
    }
}

#[test_log::test]
fn test_round_trip_all_variants() {
    for ix in all_variants() {
        let decoded = LockrionInstruction::unpack(&ix.pack()).unwrap();
        assert_eq!(decoded, ix);
    }
}

#[test_log::test]
fn test_pack_matches_borsh_encoding() {
    // the program deserializes with borsh
    for ix in all_variants() {
        assert_eq!(ix.pack(), borsh::to_vec(&ix).unwrap());
    }
}

#[test_log::test]
fn test_unknown_discriminant_rejected() {
    let err = LockrionInstruction::unpack(&[4]).unwrap_err();
    assert!(matches!(err, LockrionSdkError::UnknownDiscriminant(4)));

    let err = LockrionInstruction::unpack(&[0xFF, 0, 0]).unwrap_err();
    assert!(matches!(err, LockrionSdkError::UnknownDiscriminant(0xFF)));
}

#[test_log::test]
fn test_empty_payload_rejected() {
    let err = LockrionInstruction::unpack(&[]).unwrap_err();
    assert!(matches!(err, LockrionSdkError::EmptyInstruction));
}

#[test_log::test]
fn test_width_mismatch_rejected() {
    let mut short_fund = LockrionInstruction::FundReserve { amount: 9 }.pack();
    short_fund.pop();
    let err = LockrionInstruction::unpack(&short_fund).unwrap_err();
    assert!(matches!(
        err,
        LockrionSdkError::Encoding {
            discriminant: 1,
            expected: 9,
            actual: 8
        }
    ));

    let err = LockrionInstruction::unpack(&[3, 0]).unwrap_err();
    assert!(matches!(
        err,
        LockrionSdkError::Encoding {
            discriminant: 3,
            expected: 1,
            actual: 2
        }
    ));

    let mut long_init = all_variants()[0].pack();
    long_init.push(0);
    assert!(LockrionInstruction::unpack(&long_init).is_err());
}

#[test_log::test]
fn test_discriminator_conversion() {
    assert_eq!(
        InstructionDiscriminator::try_from(2).unwrap(),
        InstructionDiscriminator::Deposit
    );
    assert!(InstructionDiscriminator::try_from(7).is_err());
}

//=============================================================================
// Account ordering
//=============================================================================

#[test_log::test]
fn test_init_issuance_account_order() {
    let accounts = InitIssuanceAccounts {
        payer: Pubkey::new_unique(),
        issuance_state: Pubkey::new_unique(),
        lock_mint: Pubkey::new_unique(),
        reward_mint: Pubkey::new_unique(),
        deposit_escrow: Pubkey::new_unique(),
        reward_escrow: Pubkey::new_unique(),
        platform_treasury: Pubkey::new_unique(),
    };

    assert_eq!(
        accounts.to_account_metas(),
        vec![
            AccountMeta::new(accounts.payer, true),
            AccountMeta::new(accounts.issuance_state, false),
            AccountMeta::new_readonly(accounts.lock_mint, false),
            AccountMeta::new_readonly(accounts.reward_mint, false),
            AccountMeta::new_readonly(accounts.deposit_escrow, false),
            AccountMeta::new_readonly(accounts.reward_escrow, false),
            AccountMeta::new_readonly(accounts.platform_treasury, false),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
        ]
    );
}

#[test_log::test]
fn test_fund_reserve_account_order() {
    let accounts = FundReserveAccounts {
        issuance_state: Pubkey::new_unique(),
        issuer: Pubkey::new_unique(),
        issuer_reward_account: Pubkey::new_unique(),
        reward_escrow: Pubkey::new_unique(),
    };

    // issuer signs at index 1, token program last
    assert_eq!(
        accounts.to_account_metas(),
        vec![
            AccountMeta::new(accounts.issuance_state, false),
            AccountMeta::new_readonly(accounts.issuer, true),
            AccountMeta::new(accounts.issuer_reward_account, false),
            AccountMeta::new(accounts.reward_escrow, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        ]
    );
}

#[test_log::test]
fn test_deposit_account_order() {
    let accounts = DepositAccounts {
        issuance_state: Pubkey::new_unique(),
        user_state: Pubkey::new_unique(),
        participant: Pubkey::new_unique(),
        participant_lock_account: Pubkey::new_unique(),
        deposit_escrow: Pubkey::new_unique(),
    };

    assert_eq!(
        accounts.to_account_metas(),
        vec![
            AccountMeta::new(accounts.issuance_state, false),
            AccountMeta::new(accounts.user_state, false),
            AccountMeta::new_readonly(accounts.participant, true),
            AccountMeta::new(accounts.participant_lock_account, false),
            AccountMeta::new(accounts.deposit_escrow, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
        ]
    );
}

#[test_log::test]
fn test_claim_reward_account_order() {
    let accounts = ClaimRewardAccounts {
        issuance_state: Pubkey::new_unique(),
        user_state: Pubkey::new_unique(),
        participant: Pubkey::new_unique(),
        participant_reward_account: Pubkey::new_unique(),
        reward_escrow: Pubkey::new_unique(),
    };

    assert_eq!(
        accounts.to_account_metas(),
        vec![
            AccountMeta::new(accounts.issuance_state, false),
            AccountMeta::new(accounts.user_state, false),
            AccountMeta::new_readonly(accounts.participant, true),
            AccountMeta::new(accounts.participant_reward_account, false),
            AccountMeta::new(accounts.reward_escrow, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        ]
    );
}

#[test_log::test]
fn test_build_rejects_mismatched_accounts() {
    let program_id = Pubkey::new_unique();
    let accounts = ClaimRewardAccounts {
        issuance_state: Pubkey::new_unique(),
        user_state: Pubkey::new_unique(),
        participant: Pubkey::new_unique(),
        participant_reward_account: Pubkey::new_unique(),
        reward_escrow: Pubkey::new_unique(),
    };

    let err = instructions::build(
        &program_id,
        &accounts,
        &LockrionInstruction::Deposit { amount: 1 },
    )
    .unwrap_err();
    assert!(matches!(err, LockrionSdkError::Configuration(_)));

    let ix = instructions::build(&program_id, &accounts, &LockrionInstruction::ClaimReward).unwrap();
    assert_eq!(ix, instructions::claim_reward(&program_id, &accounts));
    assert_eq!(ix.data, vec![3]);
    assert_eq!(ix.program_id, program_id);
}
