use std::sync::Arc;

use crate::prelude::*;
use tracing::info;

use crate::{
    client::BaseClient,
    core::{LaunchParams, LaunchResult, SdkResult},
    instructions::{self, MINT_SIZE},
    storage::{upload_token_metadata_async, MetadataStorage},
};

/// Launches a token with metadata and an initial supply in one transaction
pub struct LaunchService {
    base: Arc<BaseClient>,
    storage: Arc<dyn MetadataStorage>,
}

impl LaunchService {
    pub fn new(base: Arc<BaseClient>, storage: Arc<dyn MetadataStorage>) -> Self {
        Self { base, storage }
    }

    /// Create `mint`, its metadata and the payer's token account, and mint
    /// the initial supply to it. `payer` is mint authority and update
    /// authority; the mint has no freeze authority.
    pub async fn launch(
        &self,
        payer: &Keypair,
        mint: &Keypair,
        params: &LaunchParams,
    ) -> SdkResult<LaunchResult> {
        let amount = params.amount.to_base_units(params.decimals)?;
        instructions::token_data(&params.metadata.name, &params.metadata.symbol, "")?;

        info!("Your mint publickey is {}", mint.pubkey());

        let uploaded =
            upload_token_metadata_async(self.storage.clone(), params.metadata.clone()).await?;
        let data = instructions::token_data(
            &params.metadata.name,
            &params.metadata.symbol,
            &uploaded.metadata_uri,
        )?;

        let rent = self.base.rent_exempt_minimum(MINT_SIZE).await?;
        let bundle = instructions::launch(
            &payer.pubkey(),
            &mint.pubkey(),
            rent,
            params.decimals,
            amount,
            data,
        )?;

        let signature = self
            .base
            .send_transaction(&bundle.instructions, &[payer, mint])
            .await?;

        info!(
            "Transaction: {}",
            self.base.cluster().explorer_tx_url(&signature)
        );

        Ok(LaunchResult {
            mint: bundle.mint,
            token_account: bundle.token_account,
            metadata: bundle.metadata,
            metadata_uri: uploaded.metadata_uri,
            minted: bundle.amount,
            signature,
        })
    }
}
