//! Shipyard SDK
//!
//! Launch SPL tokens on Solana with Metaplex metadata:
//! - Mint and token account creation
//! - Minting, transfers and burns
//! - Off-chain metadata upload and on-chain metadata accounts
//! - Single-transaction launches bundling all of the above

pub mod client;
pub mod config;
pub mod core;
pub mod instructions;
pub mod prelude;
pub mod storage;
pub mod wallet;

pub use client::ShipClient;
pub use config::ShipConfig;
pub use crate::core::{
    Amount, Cluster, LaunchParams, LaunchResult, MetadataResult, MintResult, SdkError, SdkResult,
    TokenMetadataArgs,
};
