/// Maximum on-chain metadata name length in bytes
pub const MAX_NAME_LENGTH: usize = 32;
/// Maximum on-chain metadata symbol length in bytes
pub const MAX_SYMBOL_LENGTH: usize = 10;
/// Maximum on-chain metadata URI length in bytes
pub const MAX_URI_LENGTH: usize = 200;

/// Seed prefix of the Metaplex metadata PDA
pub const METADATA_SEED: &[u8] = b"metadata";

pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Launch defaults
pub mod defaults {
    pub const TOKEN_NAME: &str = "PEPE the frog";
    pub const TOKEN_SYMBOL: &str = "PEPE";
    pub const TOKEN_DESCRIPTION: &str = "HODL!!!";
    pub const TOKEN_DECIMALS: u8 = 2;
    pub const LAUNCH_AMOUNT: &str = "100";
    pub const IMAGE_PATH: &str = "assets/pepe.png";

    pub const WALLET_PATH: &str = "~/.config/solana/id.json";
    pub const PRIVATE_KEY_ENV: &str = "SHIPYARD_PRIVATE_KEY";

    /// Airdrop when the payer holds less than this many lamports
    pub const MIN_BALANCE_LAMPORTS: u64 = super::LAMPORTS_PER_SOL;
    pub const AIRDROP_LAMPORTS: u64 = super::LAMPORTS_PER_SOL;

    /// Bearer token sent to HTTP upload gateways when set
    pub const STORAGE_TOKEN_ENV: &str = "SHIPYARD_STORAGE_TOKEN";
    pub const UPLOAD_DIR: &str = "./uploads";
    pub const ARWEAVE_GATEWAY: &str = "https://arweave.net";
    pub const UPLOAD_TIMEOUT_SECS: u64 = 60;
}
