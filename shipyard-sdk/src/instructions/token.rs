use crate::prelude::*;
use solana_program::program_pack::Pack;
use solana_sdk::{instruction::Instruction, system_instruction};
use spl_associated_token_account::{
    get_associated_token_address,
    instruction::{create_associated_token_account, create_associated_token_account_idempotent},
};

use crate::core::SdkResult;

/// Size of an SPL mint account
pub const MINT_SIZE: usize = spl_token::state::Mint::LEN;

/// Associated token account of `owner` for `mint`
pub fn associated_token_address(owner: &Pubkey, mint: &Pubkey) -> Pubkey {
    get_associated_token_address(owner, mint)
}

/// Allocate the mint account, owned by the token program
pub fn create_mint_account(payer: &Pubkey, mint: &Pubkey, rent_lamports: u64) -> Instruction {
    system_instruction::create_account(
        payer,
        mint,
        rent_lamports,
        MINT_SIZE as u64,
        &spl_token::id(),
    )
}

/// Initialize a freshly allocated mint
pub fn initialize_mint(
    mint: &Pubkey,
    mint_authority: &Pubkey,
    freeze_authority: Option<&Pubkey>,
    decimals: u8,
) -> SdkResult<Instruction> {
    Ok(spl_token::instruction::initialize_mint2(
        &spl_token::id(),
        mint,
        mint_authority,
        freeze_authority,
        decimals,
    )?)
}

/// Allocate and initialize a mint in two instructions
pub fn create_mint(
    payer: &Pubkey,
    mint: &Pubkey,
    rent_lamports: u64,
    mint_authority: &Pubkey,
    freeze_authority: Option<&Pubkey>,
    decimals: u8,
) -> SdkResult<Vec<Instruction>> {
    Ok(vec![
        create_mint_account(payer, mint, rent_lamports),
        initialize_mint(mint, mint_authority, freeze_authority, decimals)?,
    ])
}

/// Create the associated token account; fails if it already exists
pub fn create_token_account(payer: &Pubkey, owner: &Pubkey, mint: &Pubkey) -> Instruction {
    create_associated_token_account(payer, owner, mint, &spl_token::id())
}

/// Create the associated token account unless it already exists
pub fn create_token_account_idempotent(
    payer: &Pubkey,
    owner: &Pubkey,
    mint: &Pubkey,
) -> Instruction {
    create_associated_token_account_idempotent(payer, owner, mint, &spl_token::id())
}

/// Mint `amount` base units to `destination`
pub fn mint_to(
    mint: &Pubkey,
    destination: &Pubkey,
    authority: &Pubkey,
    amount: u64,
) -> SdkResult<Instruction> {
    Ok(spl_token::instruction::mint_to(
        &spl_token::id(),
        mint,
        destination,
        authority,
        &[],
        amount,
    )?)
}

/// Transfer `amount` base units, checked against the mint's decimals
pub fn transfer(
    source: &Pubkey,
    mint: &Pubkey,
    destination: &Pubkey,
    owner: &Pubkey,
    amount: u64,
    decimals: u8,
) -> SdkResult<Instruction> {
    Ok(spl_token::instruction::transfer_checked(
        &spl_token::id(),
        source,
        mint,
        destination,
        owner,
        &[],
        amount,
        decimals,
    )?)
}

/// Burn `amount` base units, checked against the mint's decimals
pub fn burn(
    account: &Pubkey,
    mint: &Pubkey,
    owner: &Pubkey,
    amount: u64,
    decimals: u8,
) -> SdkResult<Instruction> {
    Ok(spl_token::instruction::burn_checked(
        &spl_token::id(),
        account,
        mint,
        owner,
        &[],
        amount,
        decimals,
    )?)
}
