// Single-transaction token launch

use anyhow::{Context, Result};
use clap::Args;
use shipyard_sdk::{prelude::*, wallet, Amount, LaunchParams};

use super::{
    metadata::TokenArgs,
    utils::{info, success, warn},
    CommandContext,
};

#[derive(Args)]
pub struct LaunchCmd {
    #[command(flatten)]
    token: TokenArgs,

    /// Number of decimals
    #[arg(long)]
    decimals: Option<u8>,

    /// Initial supply in whole tokens, minted to the wallet
    #[arg(long)]
    amount: Option<String>,

    /// Write the generated mint keypair to this file
    #[arg(long)]
    mint_keypair_out: Option<String>,
}

pub async fn execute(cmd: LaunchCmd, ctx: &CommandContext) -> Result<()> {
    let defaults = &ctx.config.token;
    let amount: Amount = cmd
        .amount
        .as_deref()
        .unwrap_or(defaults.amount.as_str())
        .parse()?;
    let params = LaunchParams {
        metadata: cmd.token.resolve(defaults),
        decimals: cmd.decimals.unwrap_or(defaults.decimals),
        amount,
    };

    let mint = Keypair::new();
    match cmd.mint_keypair_out {
        Some(path) => {
            let path = wallet::save_keypair(&mint, &path)?;
            info(&format!("Mint keypair saved to {}", path.display()));
        }
        None => warn("Mint keypair is not saved; pass --mint-keypair-out to keep it"),
    }

    info(&format!(
        "Launching {} ({}) with {} decimals, supply {}...",
        params.metadata.name, params.metadata.symbol, params.decimals, params.amount
    ));

    let result = ctx
        .client
        .launch
        .launch(&ctx.wallet, &mint, &params)
        .await
        .context("Failed to launch token")?;

    success(&format!("Token launched! Mint: {}", result.mint));
    info(&format!("Token account: {}", result.token_account));
    info(&format!("Metadata account: {}", result.metadata));
    info(&format!("metadata uri: {}", result.metadata_uri));
    info(&format!("Minted {} base units", result.minted));
    info(&format!("Signature: {}", result.signature));

    Ok(())
}
