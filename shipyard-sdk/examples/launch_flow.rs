//! Launch a token on devnet, then transfer and burn some of it
//!
//! This example demonstrates:
//! - Creating a client from the default configuration
//! - Funding the payer with an airdrop
//! - Launching a token with metadata in one transaction
//! - Transferring and burning tokens

use shipyard_sdk::{
    prelude::*, wallet, Amount, LaunchParams, ShipClient, ShipConfig, TokenMetadataArgs,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ShipConfig::default();
    let client = ShipClient::new(&config)?;

    // Payer keypair (generated on first run)
    let payer = wallet::load_or_create_keypair(&config.wallet)?;
    let balance = client.base.ensure_funded(&payer.pubkey(), &config.airdrop).await?;
    println!("Payer {} holds {} lamports", payer.pubkey(), balance);

    // Launch
    let params = LaunchParams {
        metadata: TokenMetadataArgs {
            name: "PEPE the frog".to_string(),
            symbol: "PEPE".to_string(),
            description: "HODL!!!".to_string(),
            image_path: "assets/pepe.png".into(),
        },
        decimals: 2,
        amount: Amount::from(100),
    };
    let mint = Keypair::new();
    let launched = client.launch.launch(&payer, &mint, &params).await?;
    println!("Mint: {}", launched.mint);
    println!("Token account: {}", launched.token_account);

    // Send half to a fresh wallet
    let receiver = Keypair::new().pubkey();
    let receiver_account = client
        .token
        .get_or_create_token_account(&payer, &launched.mint, &receiver)
        .await?;
    client
        .token
        .transfer_tokens(
            &payer,
            &launched.token_account,
            &receiver_account,
            &payer,
            &Amount::from(50),
            &launched.mint,
        )
        .await?;

    // Burn 5 base units
    client
        .token
        .burn_tokens(
            &payer,
            &launched.token_account,
            &launched.mint,
            &payer,
            &Amount::Raw(5),
        )
        .await?;

    Ok(())
}
