use crate::core::constants::{
    ASSOCIATED_TOKEN_PROGRAM_ID, SEED_ISSUANCE, SEED_USER, TOKEN_PROGRAM_ID,
};
use crate::error::{LockrionSdkError, Result};
use solana_sdk::pubkey::{Pubkey, PubkeyError, MAX_SEEDS, MAX_SEED_LEN};
use tracing::trace;

/// An off-curve address together with the bump that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DerivedAddress {
    pub address: Pubkey,
    pub bump: u8,
}

impl DerivedAddress {
    pub fn is_off_curve(&self) -> bool {
        !self.address.is_on_curve()
    }
}

impl From<DerivedAddress> for (Pubkey, u8) {
    fn from(derived: DerivedAddress) -> Self {
        (derived.address, derived.bump)
    }
}

//=============================================================================
// Bump search
//=============================================================================

/// Derive a program address from `seeds`, searching bumps from 255 down to 0.
///
/// Each candidate is `sha256(seeds ‖ bump ‖ program_id ‖ "ProgramDerivedAddress")`;
/// the first digest that is not an ed25519 point wins. Seeds are validated
/// before hashing, so an oversized seed never reaches the search loop.
pub fn derive_address(seeds: &[&[u8]], program_id: &Pubkey) -> Result<DerivedAddress> {
    // the bump itself occupies one seed slot
    if seeds.len() >= MAX_SEEDS {
        return Err(LockrionSdkError::Configuration(format!(
            "too many seeds: {} (max {})",
            seeds.len(),
            MAX_SEEDS - 1
        )));
    }
    if let Some((index, seed)) = seeds
        .iter()
        .enumerate()
        .find(|(_, seed)| seed.len() > MAX_SEED_LEN)
    {
        return Err(LockrionSdkError::Configuration(format!(
            "seed {} is {} bytes (max {})",
            index,
            seed.len(),
            MAX_SEED_LEN
        )));
    }

    for bump in (0..=u8::MAX).rev() {
        let bump_seed = [bump];
        let mut candidate: Vec<&[u8]> = Vec::with_capacity(seeds.len() + 1);
        candidate.extend_from_slice(seeds);
        candidate.push(&bump_seed);

        match Pubkey::create_program_address(&candidate, program_id) {
            Ok(address) => {
                trace!(%address, bump, %program_id, "derived program address");
                return Ok(DerivedAddress { address, bump });
            },
            // digest landed on the curve, try the next bump
            Err(PubkeyError::InvalidSeeds) => continue,
            Err(err) => {
                return Err(LockrionSdkError::Configuration(format!(
                    "invalid seeds for program {}: {}",
                    program_id, err
                )))
            },
        }
    }

    Err(LockrionSdkError::DerivationExhausted {
        program_id: *program_id,
    })
}

//=============================================================================
// Seed recipes
//=============================================================================

/// Issuance state PDA: `["issuance", issuer, start_ts (i64 LE), reserve_total (u128 LE)]`
pub fn derive_issuance_address(
    program_id: &Pubkey,
    issuer: &Pubkey,
    start_ts: i64,
    reserve_total: u128,
) -> Result<DerivedAddress> {
    derive_address(
        &[
            SEED_ISSUANCE,
            issuer.as_ref(),
            &start_ts.to_le_bytes(),
            &reserve_total.to_le_bytes(),
        ],
        program_id,
    )
}

/// User state PDA: `["user", issuance, participant]`
pub fn derive_user_state_address(
    program_id: &Pubkey,
    issuance: &Pubkey,
    participant: &Pubkey,
) -> Result<DerivedAddress> {
    derive_address(
        &[SEED_USER, issuance.as_ref(), participant.as_ref()],
        program_id,
    )
}

/// Associated token account of `owner` for `mint` under the SPL Token program.
pub fn derive_token_account_address(owner: &Pubkey, mint: &Pubkey) -> Result<DerivedAddress> {
    derive_address(
        &[owner.as_ref(), TOKEN_PROGRAM_ID.as_ref(), mint.as_ref()],
        &ASSOCIATED_TOKEN_PROGRAM_ID,
    )
}
