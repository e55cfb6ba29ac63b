// Token commands: mints, token accounts, mint/transfer/burn

use anyhow::{bail, Context, Result};
use clap::Args;
use shipyard_sdk::prelude::*;

use super::{
    utils::{info, parse_amount, parse_pubkey, pubkey_or, success, token_account_or_ata},
    CommandContext,
};

#[derive(Args)]
pub struct CreateMintCmd {
    /// Number of decimals (defaults to the configured token decimals)
    #[arg(long)]
    decimals: Option<u8>,

    /// Mint authority (defaults to wallet)
    #[arg(long)]
    mint_authority: Option<String>,

    /// Freeze authority (defaults to wallet)
    #[arg(long, conflicts_with = "no_freeze_authority")]
    freeze_authority: Option<String>,

    /// Create the mint without a freeze authority
    #[arg(long)]
    no_freeze_authority: bool,
}

#[derive(Args)]
pub struct CreateAccountCmd {
    /// Token mint address
    #[arg(long)]
    mint: String,

    /// Owner of the token account (defaults to wallet)
    #[arg(long)]
    owner: Option<String>,
}

#[derive(Args)]
pub struct MintCmd {
    /// Token mint address
    #[arg(long)]
    mint: String,

    /// Destination token account (defaults to the wallet's associated account)
    #[arg(long)]
    to: Option<String>,

    /// Amount in whole tokens, e.g. 100 or 2.5
    #[arg(long)]
    amount: String,

    /// Interpret the amount as base units
    #[arg(long)]
    raw: bool,
}

#[derive(Args)]
pub struct TransferCmd {
    /// Token mint address
    #[arg(long)]
    mint: String,

    /// Recipient wallet; its associated token account is created if missing
    #[arg(long)]
    recipient: String,

    /// Amount in whole tokens
    #[arg(long)]
    amount: String,

    /// Interpret the amount as base units
    #[arg(long)]
    raw: bool,
}

#[derive(Args)]
pub struct BurnCmd {
    /// Token mint address
    #[arg(long)]
    mint: String,

    /// Token account to burn from (defaults to the wallet's associated account)
    #[arg(long)]
    account: Option<String>,

    /// Amount in whole tokens
    #[arg(long)]
    amount: String,

    /// Interpret the amount as base units
    #[arg(long)]
    raw: bool,
}

pub async fn create_mint(cmd: CreateMintCmd, ctx: &CommandContext) -> Result<()> {
    info("Creating token mint...");

    let wallet = &ctx.wallet;
    let decimals = cmd.decimals.unwrap_or(ctx.config.token.decimals);
    let mint_authority = pubkey_or(cmd.mint_authority.as_deref(), wallet.pubkey())?;
    let freeze_authority = if cmd.no_freeze_authority {
        None
    } else {
        Some(pubkey_or(cmd.freeze_authority.as_deref(), wallet.pubkey())?)
    };

    let result = ctx
        .client
        .token
        .create_mint(wallet, &mint_authority, freeze_authority.as_ref(), decimals)
        .await
        .context("Failed to create mint")?;

    success(&format!("Mint created! Address: {}", result.mint));
    info(&format!("Decimals: {}", decimals));

    Ok(())
}

pub async fn create_account(cmd: CreateAccountCmd, ctx: &CommandContext) -> Result<()> {
    let mint = parse_pubkey(&cmd.mint)?;
    let owner = pubkey_or(cmd.owner.as_deref(), ctx.wallet.pubkey())?;

    let address = ctx
        .client
        .token
        .get_or_create_token_account(&ctx.wallet, &mint, &owner)
        .await
        .context("Failed to create token account")?;

    success(&format!("Token account: {}", address));

    Ok(())
}

pub async fn mint(cmd: MintCmd, ctx: &CommandContext) -> Result<()> {
    let mint = parse_pubkey(&cmd.mint)?;
    let amount = parse_amount(&cmd.amount, cmd.raw)?;
    let token = &ctx.client.token;

    let destination = match cmd.to.as_deref() {
        Some(to) => parse_pubkey(to)?,
        None => token
            .get_or_create_token_account(&ctx.wallet, &mint, &ctx.wallet.pubkey())
            .await
            .context("Failed to create destination token account")?,
    };

    let signature = token
        .mint_tokens(&ctx.wallet, &mint, &destination, &ctx.wallet, &amount)
        .await
        .context("Failed to mint tokens")?;

    success(&format!(
        "Minted {} to {}. Signature: {}",
        amount, destination, signature
    ));

    Ok(())
}

pub async fn transfer(cmd: TransferCmd, ctx: &CommandContext) -> Result<()> {
    let mint = parse_pubkey(&cmd.mint)?;
    let recipient = parse_pubkey(&cmd.recipient)?;
    let amount = parse_amount(&cmd.amount, cmd.raw)?;
    let token = &ctx.client.token;

    let source = token_account_or_ata(None, &ctx.wallet.pubkey(), &mint)?;
    let source_exists = ctx
        .client
        .base
        .get_account_optional(&source)
        .await
        .context("Failed to fetch source token account")?
        .is_some();
    if !source_exists {
        bail!("Wallet has no token account for mint {} ({})", mint, source);
    }

    let destination = token
        .get_or_create_token_account(&ctx.wallet, &mint, &recipient)
        .await
        .context("Failed to create recipient token account")?;

    let signature = token
        .transfer_tokens(&ctx.wallet, &source, &destination, &ctx.wallet, &amount, &mint)
        .await
        .context("Failed to transfer tokens")?;

    success(&format!(
        "Transferred {} to {}. Signature: {}",
        amount, destination, signature
    ));

    Ok(())
}

pub async fn burn(cmd: BurnCmd, ctx: &CommandContext) -> Result<()> {
    let mint = parse_pubkey(&cmd.mint)?;
    let amount = parse_amount(&cmd.amount, cmd.raw)?;
    let account = token_account_or_ata(cmd.account.as_deref(), &ctx.wallet.pubkey(), &mint)?;

    let signature = ctx
        .client
        .token
        .burn_tokens(&ctx.wallet, &account, &mint, &ctx.wallet, &amount)
        .await
        .context("Failed to burn tokens")?;

    success(&format!(
        "Burned {} from {}. Signature: {}",
        amount, account, signature
    ));

    Ok(())
}
