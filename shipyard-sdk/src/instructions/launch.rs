use crate::prelude::*;
use mpl_token_metadata::types::DataV2;
use solana_sdk::instruction::Instruction;

use crate::{
    core::SdkResult,
    instructions::{metadata, token},
};

/// Accounts and values of a single-transaction launch
#[derive(Clone, Debug)]
pub struct LaunchBundle {
    pub mint: Pubkey,
    pub token_account: Pubkey,
    pub metadata: Pubkey,
    /// Base units minted to `token_account`
    pub amount: u64,
    pub instructions: Vec<Instruction>,
}

/// Build the launch transaction body.
///
/// In order: allocate the mint, initialize it with `payer` as mint
/// authority and no freeze authority, create its metadata account, create
/// the payer's associated token account, then mint `amount` base units
/// into it. The transaction must be signed by `payer` and the mint keypair.
pub fn launch(
    payer: &Pubkey,
    mint: &Pubkey,
    rent_lamports: u64,
    decimals: u8,
    amount: u64,
    data: DataV2,
) -> SdkResult<LaunchBundle> {
    let token_account = token::associated_token_address(payer, mint);
    let (metadata_address, _) = metadata::metadata_address(mint);

    let mut instructions = token::create_mint(payer, mint, rent_lamports, payer, None, decimals)?;
    instructions.push(metadata::create_metadata(mint, payer, payer, payer, data));
    instructions.push(token::create_token_account(payer, payer, mint));
    instructions.push(token::mint_to(mint, &token_account, payer, amount)?);

    Ok(LaunchBundle {
        mint: *mint,
        token_account,
        metadata: metadata_address,
        amount,
        instructions,
    })
}
