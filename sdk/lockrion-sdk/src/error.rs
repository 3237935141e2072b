use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use thiserror::Error;

/// SDK-specific error types for Lockrion operations
#[derive(Debug, Error)]
pub enum LockrionSdkError {
    /// A required input is missing or malformed. Raised before any network call.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// No bump in 255..=0 produced an off-curve address
    #[error("Address derivation exhausted all bumps for program {program_id}")]
    DerivationExhausted { program_id: Pubkey },

    /// Instruction payload is empty
    #[error("Invalid instruction data: empty payload")]
    EmptyInstruction,

    /// Leading byte does not name a known instruction
    #[error("Invalid instruction data: unknown discriminant {0}")]
    UnknownDiscriminant(u8),

    /// Payload width does not match the width fixed by its discriminant
    #[error(
        "Invalid instruction data: discriminant {discriminant} expects {expected} bytes, got {actual}"
    )]
    Encoding {
        discriminant: u8,
        expected: usize,
        actual: usize,
    },

    /// Account data is smaller than the fixed layout
    #[error("Account data too short: need {needed} bytes, got {actual}")]
    BufferTooShort { needed: usize, actual: usize },

    /// Account was written under a layout this decoder does not read
    #[error("Unsupported account layout: version byte {version} at offset {offset}")]
    UnsupportedVersion { version: u8, offset: usize },

    /// Connection or RPC error, including confirmation timeouts
    #[error("Network error: {0}")]
    Network(String),

    /// The program rejected the transaction
    #[error("Program execution failed: {message}")]
    ProgramExecution {
        signature: Option<Signature>,
        message: String,
        logs: Vec<String>,
    },

    /// Account not found on-chain
    #[error("Account not found: {0}")]
    AccountNotFound(Pubkey),
}

impl LockrionSdkError {
    /// Program log lines attached to a failed transaction, if any were retrieved.
    pub fn logs(&self) -> &[String] {
        match self {
            Self::ProgramExecution { logs, .. } => logs,
            _ => &[],
        }
    }
}

/// Result type alias for SDK operations
pub type Result<T> = std::result::Result<T, LockrionSdkError>;
