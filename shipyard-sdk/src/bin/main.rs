// CLI tool for Shipyard
//
// Creates SPL token mints and accounts, mints, transfers and burns tokens,
// manages Metaplex metadata, and launches a token in a single transaction.

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use shipyard_sdk::{
    client::lamports_to_sol, config::AirdropConfig, prelude::*, wallet, Cluster, ShipClient,
    ShipConfig,
};
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use commands::{utils::info, CommandContext};

#[derive(Parser)]
#[command(name = "shipyard")]
#[command(about = "SPL token launch toolkit", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<String>,

    /// Cluster: devnet, testnet, mainnet-beta, localnet or an RPC URL
    #[arg(long)]
    cluster: Option<String>,

    /// RPC URL overriding the cluster default
    #[arg(long)]
    rpc_url: Option<String>,

    /// Path to wallet keypair file (created when missing)
    #[arg(long)]
    wallet: Option<String>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the wallet address and balance
    Balance,

    /// Create a new token mint
    CreateMint(commands::token::CreateMintCmd),

    /// Get or create an associated token account
    CreateAccount(commands::token::CreateAccountCmd),

    /// Mint tokens to a token account
    Mint(commands::token::MintCmd),

    /// Transfer tokens to another wallet
    Transfer(commands::token::TransferCmd),

    /// Burn tokens from a token account
    Burn(commands::token::BurnCmd),

    /// Create or update token metadata
    Metadata(commands::metadata::MetadataCmd),

    /// Create mint, metadata and token account and mint supply in one transaction
    Launch(commands::launch::LaunchCmd),
}

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    match run(cli).await {
        Ok(()) => {
            info("Finished successfully");
        }
        Err(e) => {
            error!("{:#}", e);
            std::process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;

    let wallet = wallet::load_or_create_keypair(&config.wallet)
        .context("Failed to initialize wallet keypair")?;
    let client = ShipClient::new(&config).context("Failed to create client")?;

    let balance = fund_wallet(&client, &wallet.pubkey(), &config.airdrop).await?;
    info(&format!("Current balance is {}", lamports_to_sol(balance)));
    info(&format!("PublicKey: {}", wallet.pubkey()));

    let ctx = CommandContext {
        client,
        wallet,
        config,
    };

    // Execute command
    match cli.command {
        Commands::Balance => Ok(()),
        Commands::CreateMint(cmd) => commands::token::create_mint(cmd, &ctx).await,
        Commands::CreateAccount(cmd) => commands::token::create_account(cmd, &ctx).await,
        Commands::Mint(cmd) => commands::token::mint(cmd, &ctx).await,
        Commands::Transfer(cmd) => commands::token::transfer(cmd, &ctx).await,
        Commands::Burn(cmd) => commands::token::burn(cmd, &ctx).await,
        Commands::Metadata(cmd) => commands::metadata::execute(cmd, &ctx).await,
        Commands::Launch(cmd) => commands::launch::execute(cmd, &ctx).await,
    }
}

/// Balance of `wallet` after topping it up per the airdrop policy
async fn fund_wallet(
    client: &ShipClient,
    wallet: &Pubkey,
    airdrop: &AirdropConfig,
) -> Result<u64> {
    client
        .base
        .ensure_funded(wallet, airdrop)
        .await
        .context("Failed to fund wallet")
}

/// File (or defaults) first, then command-line overrides
fn load_config(cli: &Cli) -> Result<ShipConfig> {
    let mut config = match &cli.config {
        Some(path) => ShipConfig::load(path)?,
        None => ShipConfig::default(),
    };

    if let Some(cluster) = &cli.cluster {
        config.cluster = cluster.parse::<Cluster>()?;
    }
    if let Some(url) = &cli.rpc_url {
        config.rpc_url = Some(url.clone());
    }
    if let Some(wallet) = &cli.wallet {
        config.wallet = wallet.clone();
    }

    config.validate()?;
    Ok(config)
}

fn init_logging(verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("shipyard={},shipyard_sdk={}", level, level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init()?;

    Ok(())
}
