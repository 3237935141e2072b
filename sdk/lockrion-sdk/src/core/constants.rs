use solana_sdk::pubkey;
use solana_sdk::pubkey::Pubkey;

/// SPL Token program
pub const TOKEN_PROGRAM_ID: Pubkey = pubkey!("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");

/// Associated Token Account program
pub const ASSOCIATED_TOKEN_PROGRAM_ID: Pubkey =
    pubkey!("ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL");

pub const SYSTEM_PROGRAM_ID: Pubkey = solana_sdk::system_program::ID;

// Canonical seeds, v1.1
pub const SEED_ISSUANCE: &[u8] = b"issuance";
pub const SEED_USER: &[u8] = b"user";

/// Size of the IssuanceState account as allocated by the program (layout v1)
pub const ISSUANCE_STATE_SIZE: usize = 292;
