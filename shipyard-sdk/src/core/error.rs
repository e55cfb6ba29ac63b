use solana_program::program_error::ProgramError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("RPC error: {0}")]
    RpcError(#[from] solana_client::client_error::ClientError),

    #[error("Program error: {0}")]
    ProgramError(#[from] ProgramError),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Math overflow")]
    MathOverflow,

    #[error("Account not found: {0}")]
    AccountNotFound(String),

    #[error("Failed to deserialize account: {0}")]
    DeserializationError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Keypair error: {0}")]
    KeypairError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SdkResult<T> = Result<T, SdkError>;
