// Token metadata commands

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use shipyard_sdk::{config::TokenDefaults, TokenMetadataArgs};

use super::{
    utils::{info, parse_pubkey, success},
    CommandContext,
};

#[derive(Args)]
pub struct MetadataCmd {
    #[command(subcommand)]
    command: MetadataSubcommand,
}

#[derive(Subcommand)]
enum MetadataSubcommand {
    /// Upload metadata and create the metadata account of a mint
    Create(MetadataArgs),

    /// Upload new metadata and update the metadata account of a mint
    Update(MetadataArgs),
}

#[derive(Args)]
pub struct MetadataArgs {
    /// Token mint address
    #[arg(long)]
    mint: String,

    #[command(flatten)]
    token: TokenArgs,
}

/// Token description flags; unset values come from the configuration
#[derive(Args)]
pub struct TokenArgs {
    /// Token name
    #[arg(long)]
    pub name: Option<String>,

    /// Token symbol
    #[arg(long)]
    pub symbol: Option<String>,

    /// Token description
    #[arg(long)]
    pub description: Option<String>,

    /// Image file uploaded with the metadata
    #[arg(long)]
    pub image: Option<PathBuf>,
}

impl TokenArgs {
    pub fn resolve(self, defaults: &TokenDefaults) -> TokenMetadataArgs {
        let fallback = defaults.metadata_args();
        TokenMetadataArgs {
            name: self.name.unwrap_or(fallback.name),
            symbol: self.symbol.unwrap_or(fallback.symbol),
            description: self.description.unwrap_or(fallback.description),
            image_path: self.image.unwrap_or(fallback.image_path),
        }
    }
}

pub async fn execute(cmd: MetadataCmd, ctx: &CommandContext) -> Result<()> {
    let service = &ctx.client.metadata;

    match cmd.command {
        MetadataSubcommand::Create(args) => {
            let mint = parse_pubkey(&args.mint)?;
            let token = args.token.resolve(&ctx.config.token);
            info(&format!("Creating metadata for {} ({})...", token.name, token.symbol));

            let result = service
                .create_metadata(&ctx.wallet, &mint, &token)
                .await
                .context("Failed to create metadata")?;

            success(&format!("Metadata account created: {}", result.metadata));
            info(&format!("image uri: {}", result.image_uri));
            info(&format!("metadata uri: {}", result.metadata_uri));
            info(&format!("Signature: {}", result.signature));

            Ok(())
        }

        MetadataSubcommand::Update(args) => {
            let mint = parse_pubkey(&args.mint)?;
            let token = args.token.resolve(&ctx.config.token);
            info(&format!("Updating metadata for {} ({})...", token.name, token.symbol));

            let result = service
                .update_metadata(&ctx.wallet, &mint, &token)
                .await
                .context("Failed to update metadata")?;

            success(&format!("Metadata account updated: {}", result.metadata));
            info(&format!("metadata uri: {}", result.metadata_uri));
            info(&format!("Signature: {}", result.signature));

            Ok(())
        }
    }
}
