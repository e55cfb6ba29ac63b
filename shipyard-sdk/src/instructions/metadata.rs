use crate::prelude::*;
use mpl_token_metadata::{
    instructions::{
        CreateMetadataAccountV3, CreateMetadataAccountV3InstructionArgs, UpdateMetadataAccountV2,
        UpdateMetadataAccountV2InstructionArgs,
    },
    types::DataV2,
};
use solana_sdk::instruction::Instruction;

use crate::core::{
    SdkError, SdkResult, MAX_NAME_LENGTH, MAX_SYMBOL_LENGTH, MAX_URI_LENGTH, METADATA_SEED,
};

/// Metadata account of a mint
pub fn metadata_address(mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            METADATA_SEED,
            mpl_token_metadata::ID.as_ref(),
            mint.as_ref(),
        ],
        &mpl_token_metadata::ID,
    )
}

/// On-chain data of a fungible token: no royalties, creators, collection or uses
pub fn token_data(name: &str, symbol: &str, uri: &str) -> SdkResult<DataV2> {
    check_len("name", name, MAX_NAME_LENGTH)?;
    check_len("symbol", symbol, MAX_SYMBOL_LENGTH)?;
    check_len("uri", uri, MAX_URI_LENGTH)?;

    Ok(DataV2 {
        name: name.to_string(),
        symbol: symbol.to_string(),
        uri: uri.to_string(),
        seller_fee_basis_points: 0,
        creators: None,
        collection: None,
        uses: None,
    })
}

fn check_len(field: &str, value: &str, max: usize) -> SdkResult<()> {
    if value.len() > max {
        return Err(SdkError::InvalidParameters(format!(
            "metadata {} is {} bytes, limit is {}",
            field,
            value.len(),
            max
        )));
    }
    Ok(())
}

/// Create a mutable metadata account for `mint`
pub fn create_metadata(
    mint: &Pubkey,
    mint_authority: &Pubkey,
    payer: &Pubkey,
    update_authority: &Pubkey,
    data: DataV2,
) -> Instruction {
    let (metadata, _) = metadata_address(mint);

    CreateMetadataAccountV3 {
        metadata,
        mint: *mint,
        mint_authority: *mint_authority,
        payer: *payer,
        update_authority: (*update_authority, true),
        system_program: solana_program::system_program::id(),
        rent: None,
    }
    .instruction(CreateMetadataAccountV3InstructionArgs {
        data,
        is_mutable: true,
        collection_details: None,
    })
}

/// Replace the data of an existing metadata account, keeping the update authority
pub fn update_metadata(mint: &Pubkey, update_authority: &Pubkey, data: DataV2) -> Instruction {
    let (metadata, _) = metadata_address(mint);

    UpdateMetadataAccountV2 {
        metadata,
        update_authority: *update_authority,
    }
    .instruction(UpdateMetadataAccountV2InstructionArgs {
        data: Some(data),
        new_update_authority: Some(*update_authority),
        primary_sale_happened: Some(true),
        is_mutable: Some(true),
    })
}
