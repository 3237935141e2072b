//! Read-only decoding of the program's IssuanceState account.
//!
//! Offsets are pinned to layout v1. A program release that moves a field gets
//! its own decoder type next to [`IssuanceStateV1`]; these offsets never change.

use crate::error::{LockrionSdkError, Result};
use serde::{Serialize, Serializer};
use solana_sdk::pubkey::Pubkey;

/// Byte offsets of IssuanceState layout v1
pub mod layout_v1 {
    /// Value of the version byte for this layout
    pub const LAYOUT_VERSION: u8 = 1;

    pub const VERSION: usize = 0;
    pub const BUMP: usize = 1;
    pub const ISSUER_ADDRESS: usize = 2;
    pub const LOCK_MINT: usize = 34;
    pub const REWARD_MINT: usize = 66;
    pub const DEPOSIT_ESCROW: usize = 98;
    pub const REWARD_ESCROW: usize = 130;
    pub const PLATFORM_TREASURY: usize = 162;
    pub const RESERVE_TOTAL: usize = 194;
    pub const START_TS: usize = 210;
    pub const MATURITY_TS: usize = 218;
    pub const CLAIM_WINDOW: usize = 226;
    pub const FINAL_DAY_INDEX: usize = 234;
    pub const TOTAL_LOCKED: usize = 242;
    pub const TOTAL_WEIGHT_ACCUM: usize = 258;
    pub const LAST_DAY_INDEX: usize = 274;
    pub const RESERVE_FUNDED: usize = 282;

    /// Smallest buffer that covers every decoded field
    pub const MIN_LEN: usize = RESERVE_FUNDED + 1;
}

/// Snapshot of an IssuanceState account (layout v1)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssuanceStateV1 {
    pub version: u8,
    pub bump: u8,
    #[serde(serialize_with = "serialize_pubkey")]
    pub issuer_address: Pubkey,
    #[serde(serialize_with = "serialize_pubkey")]
    pub lock_mint: Pubkey,
    #[serde(serialize_with = "serialize_pubkey")]
    pub reward_mint: Pubkey,
    #[serde(serialize_with = "serialize_pubkey")]
    pub deposit_escrow: Pubkey,
    #[serde(serialize_with = "serialize_pubkey")]
    pub reward_escrow: Pubkey,
    #[serde(serialize_with = "serialize_pubkey")]
    pub platform_treasury: Pubkey,
    pub reserve_total: u128,
    pub start_ts: i64,
    pub maturity_ts: i64,
    pub claim_window: i64,
    pub final_day_index: u64,
    pub total_locked: u128,
    pub total_weight_accum: u128,
    pub last_day_index: u64,
    pub reserve_funded: bool,
}

impl IssuanceStateV1 {
    pub const MIN_LEN: usize = layout_v1::MIN_LEN;

    /// Decode from raw account data. Bytes past the last known field are ignored.
    ///
    /// Any version byte other than [`layout_v1::LAYOUT_VERSION`] is rejected
    /// rather than read at v1 offsets.
    pub fn unpack(data: &[u8]) -> Result<Self> {
        if data.len() < Self::MIN_LEN {
            return Err(LockrionSdkError::BufferTooShort {
                needed: Self::MIN_LEN,
                actual: data.len(),
            });
        }

        use layout_v1::*;
        if data[VERSION] != LAYOUT_VERSION {
            return Err(LockrionSdkError::UnsupportedVersion {
                version: data[VERSION],
                offset: VERSION,
            });
        }

        Ok(Self {
            version: data[VERSION],
            bump: data[BUMP],
            issuer_address: read_pubkey(data, ISSUER_ADDRESS),
            lock_mint: read_pubkey(data, LOCK_MINT),
            reward_mint: read_pubkey(data, REWARD_MINT),
            deposit_escrow: read_pubkey(data, DEPOSIT_ESCROW),
            reward_escrow: read_pubkey(data, REWARD_ESCROW),
            platform_treasury: read_pubkey(data, PLATFORM_TREASURY),
            reserve_total: u128::from_le_bytes(read_array(data, RESERVE_TOTAL)),
            start_ts: i64::from_le_bytes(read_array(data, START_TS)),
            maturity_ts: i64::from_le_bytes(read_array(data, MATURITY_TS)),
            claim_window: i64::from_le_bytes(read_array(data, CLAIM_WINDOW)),
            final_day_index: u64::from_le_bytes(read_array(data, FINAL_DAY_INDEX)),
            total_locked: u128::from_le_bytes(read_array(data, TOTAL_LOCKED)),
            total_weight_accum: u128::from_le_bytes(read_array(data, TOTAL_WEIGHT_ACCUM)),
            last_day_index: u64::from_le_bytes(read_array(data, LAST_DAY_INDEX)),
            // any nonzero byte counts as funded
            reserve_funded: data[RESERVE_FUNDED] != 0,
        })
    }

    /// End of the claim window (`maturity_ts + claim_window`)
    pub fn claim_window_end(&self) -> Option<i64> {
        self.maturity_ts.checked_add(self.claim_window)
    }
}

// Caller has already checked `data.len() >= MIN_LEN`.
fn read_array<const N: usize>(data: &[u8], offset: usize) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&data[offset..offset + N]);
    out
}

fn read_pubkey(data: &[u8], offset: usize) -> Pubkey {
    Pubkey::new_from_array(read_array(data, offset))
}

fn serialize_pubkey<S: Serializer>(
    pubkey: &Pubkey,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(pubkey)
}
