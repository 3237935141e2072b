pub mod advanced;
pub mod basic;
pub mod config;
pub mod core;
pub mod error;
pub mod instruction;
pub mod pda;
pub mod state;
pub mod utils;

pub use crate::basic::issuance::Issuance;
pub use crate::basic::submit::{submit_instruction, submit_transaction, SubmitOptions};
pub use crate::config::ClientConfig;
pub use crate::core::connection::SolConnection;
pub use crate::error::{LockrionSdkError, Result};
pub use crate::instruction::{InstructionDiscriminator, LockrionInstruction};
pub use crate::pda::{
    derive_address, derive_issuance_address, derive_token_account_address,
    derive_user_state_address, DerivedAddress,
};
pub use crate::state::IssuanceStateV1;
pub use crate::utils::{fetch_account, fetch_issuance_account, IssuanceAccount};
