use std::sync::Arc;

use crate::prelude::*;
use tracing::info;

use crate::{
    client::BaseClient,
    core::{MetadataResult, SdkResult, TokenMetadataArgs},
    instructions,
    storage::{upload_token_metadata_async, MetadataStorage},
};

/// Service for Metaplex token metadata
pub struct MetadataService {
    base: Arc<BaseClient>,
    storage: Arc<dyn MetadataStorage>,
}

impl MetadataService {
    pub fn new(base: Arc<BaseClient>, storage: Arc<dyn MetadataStorage>) -> Self {
        Self { base, storage }
    }

    /// Upload the image and JSON, then create the metadata account of `mint`.
    /// `user` pays and acts as mint and update authority.
    pub async fn create_metadata(
        &self,
        user: &Keypair,
        mint: &Pubkey,
        args: &TokenMetadataArgs,
    ) -> SdkResult<MetadataResult> {
        // Reject bad names before paying for uploads
        instructions::token_data(&args.name, &args.symbol, "")?;

        let uploaded = upload_token_metadata_async(self.storage.clone(), args.clone()).await?;
        let data = instructions::token_data(&args.name, &args.symbol, &uploaded.metadata_uri)?;

        let authority = user.pubkey();
        let ix = instructions::create_metadata(mint, &authority, &authority, &authority, data);
        let signature = self.base.send_transaction(&[ix], &[user]).await?;

        info!(
            "Create Metadata Account: {}",
            self.base.cluster().explorer_tx_url(&signature)
        );

        Ok(MetadataResult {
            metadata: instructions::metadata_address(mint).0,
            image_uri: uploaded.image_uri,
            metadata_uri: uploaded.metadata_uri,
            signature,
        })
    }

    /// Upload new image and JSON, then overwrite the metadata of `mint`.
    /// `user` must be the update authority.
    pub async fn update_metadata(
        &self,
        user: &Keypair,
        mint: &Pubkey,
        args: &TokenMetadataArgs,
    ) -> SdkResult<MetadataResult> {
        instructions::token_data(&args.name, &args.symbol, "")?;

        let uploaded = upload_token_metadata_async(self.storage.clone(), args.clone()).await?;
        let data = instructions::token_data(&args.name, &args.symbol, &uploaded.metadata_uri)?;

        let ix = instructions::update_metadata(mint, &user.pubkey(), data);
        let signature = self.base.send_transaction(&[ix], &[user]).await?;

        info!(
            "Update Metadata Account: {}",
            self.base.cluster().explorer_tx_url(&signature)
        );

        Ok(MetadataResult {
            metadata: instructions::metadata_address(mint).0,
            image_uri: uploaded.image_uri,
            metadata_uri: uploaded.metadata_uri,
            signature,
        })
    }
}
